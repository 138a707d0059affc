//! CDP v2 EVM request and response bodies.

pub mod request {
    use serde::Serialize;

    use crate::domain::EncodedCall;

    #[derive(Debug, Serialize)]
    pub struct CreateAccount<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<&'a str>,
    }

    #[derive(Debug, Serialize)]
    pub struct CreateSmartAccount<'a> {
        pub owners: Vec<&'a str>,
    }

    #[derive(Debug, Serialize)]
    pub struct Call {
        pub to: String,
        pub data: String,
        /// Wei as a decimal string.
        pub value: String,
    }

    impl From<&EncodedCall> for Call {
        fn from(call: &EncodedCall) -> Self {
            Self {
                to: call.to.clone(),
                data: call.data.clone(),
                value: call.value.to_string(),
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct PrepareUserOperation<'a> {
        pub network: &'a str,
        pub calls: Vec<Call>,
    }

    #[derive(Debug, Serialize)]
    pub struct SignHash<'a> {
        pub hash: &'a str,
    }

    #[derive(Debug, Serialize)]
    pub struct SendUserOperation<'a> {
        pub signature: &'a str,
    }

    #[derive(Debug, Serialize)]
    pub struct RequestFaucet<'a> {
        pub address: &'a str,
        pub network: &'a str,
        pub token: &'a str,
    }
}

pub mod response {
    use alloy_primitives::U256;
    use serde::Deserialize;

    use crate::domain::{Account, EncodedCall, SmartAccount, UserOperation, UserOperationStatus};
    use crate::error::WalletError;

    #[derive(Debug, Deserialize)]
    pub struct EvmAccount {
        pub address: String,
        #[serde(default)]
        pub name: Option<String>,
    }

    impl From<EvmAccount> for Account {
        fn from(account: EvmAccount) -> Self {
            Self::new(account.address, account.name)
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct EvmSmartAccount {
        pub address: String,
        #[serde(default)]
        pub owners: Vec<String>,
        #[serde(default)]
        pub name: Option<String>,
    }

    impl From<EvmSmartAccount> for SmartAccount {
        fn from(account: EvmSmartAccount) -> Self {
            Self {
                address: account.address,
                owners: account.owners,
                name: account.name,
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct EvmCall {
        pub to: String,
        #[serde(default)]
        pub data: String,
        #[serde(default)]
        pub value: String,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EvmUserOperation {
        pub network: String,
        pub user_op_hash: String,
        #[serde(default)]
        pub calls: Vec<EvmCall>,
        pub status: UserOperationStatus,
        #[serde(default)]
        pub transaction_hash: Option<String>,
    }

    impl TryFrom<EvmUserOperation> for UserOperation {
        type Error = WalletError;

        fn try_from(op: EvmUserOperation) -> Result<Self, Self::Error> {
            let calls = op
                .calls
                .into_iter()
                .map(|call| {
                    let value = if call.value.is_empty() {
                        U256::ZERO
                    } else {
                        call.value.parse::<U256>().map_err(|e| {
                            WalletError::Decode(format!("call value '{}': {e}", call.value))
                        })?
                    };
                    Ok(EncodedCall {
                        to: call.to,
                        data: call.data,
                        value,
                    })
                })
                .collect::<Result<Vec<_>, WalletError>>()?;

            Ok(Self {
                user_op_hash: op.user_op_hash,
                network: op.network,
                calls,
                status: op.status,
                transaction_hash: op.transaction_hash,
            })
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct Signature {
        #[serde(default)]
        pub signature: String,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Faucet {
        pub transaction_hash: String,
    }

    /// Error envelope returned with non-2xx statuses.
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ApiError {
        pub error_type: String,
        pub error_message: String,
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use serde_json::json;

    use super::request::{Call, CreateAccount, PrepareUserOperation};
    use super::response::{ApiError, EvmUserOperation, Faucet};
    use crate::domain::{EncodedCall, UserOperation, UserOperationStatus};

    #[test]
    fn create_account_omits_missing_name() {
        let body = serde_json::to_value(CreateAccount { name: None }).unwrap();
        assert_eq!(body, json!({}));

        let body = serde_json::to_value(CreateAccount {
            name: Some("treasury"),
        })
        .unwrap();
        assert_eq!(body, json!({"name": "treasury"}));
    }

    #[test]
    fn call_value_is_a_decimal_wei_string() {
        let call = EncodedCall::transfer("0xdest", U256::from(10u64).pow(U256::from(18u64)));
        let body = serde_json::to_value(PrepareUserOperation {
            network: "base-sepolia",
            calls: vec![Call::from(&call)],
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "network": "base-sepolia",
                "calls": [{"to": "0xdest", "data": "0x", "value": "1000000000000000000"}]
            })
        );
    }

    #[test]
    fn user_operation_converts_to_domain() {
        let raw = json!({
            "network": "base-sepolia",
            "userOpHash": "0xop",
            "calls": [{"to": "0xdest", "data": "0x", "value": "500000000000000000"}],
            "status": "complete",
            "transactionHash": "0xtx"
        });
        let dto: EvmUserOperation = serde_json::from_value(raw).unwrap();
        let op = UserOperation::try_from(dto).unwrap();

        assert_eq!(op.user_op_hash, "0xop");
        assert_eq!(op.status, UserOperationStatus::Complete);
        assert_eq!(op.transaction_hash.as_deref(), Some("0xtx"));
        assert_eq!(op.calls[0].value, U256::from(500_000_000_000_000_000u64));
    }

    #[test]
    fn user_operation_rejects_bad_value() {
        let raw = json!({
            "network": "base-sepolia",
            "userOpHash": "0xop",
            "calls": [{"to": "0xdest", "data": "0x", "value": "lots"}],
            "status": "pending"
        });
        let dto: EvmUserOperation = serde_json::from_value(raw).unwrap();
        assert!(UserOperation::try_from(dto).is_err());
    }

    #[test]
    fn faucet_and_error_bodies() {
        let faucet: Faucet = serde_json::from_value(json!({"transactionHash": "0xabc"})).unwrap();
        assert_eq!(faucet.transaction_hash, "0xabc");

        let error: ApiError = serde_json::from_value(json!({
            "errorType": "faucet_limit_exceeded",
            "errorMessage": "Faucet limit reached"
        }))
        .unwrap();
        assert_eq!(error.error_type, "faucet_limit_exceeded");
    }
}
