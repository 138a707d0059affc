//! Wallet use cases against the recording wallet service.

use alloy_primitives::U256;
use cdp_wallet::application::wallet::{self, TransferReceipt, TransferRequest};
use cdp_wallet::domain::{EncodedCall, Network, UserOperationStatus};
use cdp_wallet::error::{Error, WalletError};
use cdp_wallet::testkit::wallet::{FailPoint, RecordingWallet, WalletCall};

fn transfer_request(amount: &str) -> TransferRequest<'_> {
    TransferRequest {
        from_smart_address: "0xSmart",
        from_smart_owner: "0xOwner",
        to_address: "0xDest",
        amount,
    }
}

#[tokio::test]
async fn create_eoa_passes_the_name_through() {
    let service = RecordingWallet::new();

    let account = wallet::create_eoa_wallet(&service, Some("treasury"))
        .await
        .unwrap();

    assert_eq!(account.address, "0xeoa1");
    assert_eq!(account.name.as_deref(), Some("treasury"));
    assert_eq!(
        service.calls(),
        vec![
            WalletCall::Connect,
            WalletCall::CreateAccount {
                name: Some("treasury".into())
            },
            WalletCall::Close,
        ]
    );
}

#[tokio::test]
async fn create_smart_without_owner_mints_one_first() {
    let service = RecordingWallet::new();

    let smart = wallet::create_smart_wallet(&service, None).await.unwrap();

    assert_eq!(smart.owners, vec!["0xeoa1".to_string()]);
    assert_eq!(
        service.service_calls(),
        vec![
            WalletCall::CreateAccount { name: None },
            WalletCall::CreateSmartAccount {
                owner: "0xeoa1".into()
            },
        ]
    );
    assert_eq!(service.open_handles(), 0);
}

#[tokio::test]
async fn create_smart_with_owner_looks_it_up() {
    let service = RecordingWallet::new();

    let smart = wallet::create_smart_wallet(&service, Some("0xOwner"))
        .await
        .unwrap();

    assert_eq!(smart.owners, vec!["0xOwner".to_string()]);
    assert_eq!(
        service.service_calls(),
        vec![
            WalletCall::GetAccount {
                address: "0xOwner".into()
            },
            WalletCall::CreateSmartAccount {
                owner: "0xOwner".into()
            },
        ]
    );
}

#[tokio::test]
async fn fund_without_address_funds_a_new_smart_account() {
    let service = RecordingWallet::new();
    let network = Network::base_sepolia();

    let receipt = wallet::fund_wallet(&service, None, &network, "eth")
        .await
        .unwrap();

    assert_eq!(receipt.address, "0xsmart2");
    assert_eq!(
        receipt.to_string(),
        "eth faucet on base-sepolia: https://sepolia.basescan.org/tx/0xfaucet3"
    );
    assert_eq!(
        service.service_calls(),
        vec![
            WalletCall::CreateAccount { name: None },
            WalletCall::CreateSmartAccount {
                owner: "0xeoa1".into()
            },
            WalletCall::RequestFaucet {
                address: "0xsmart2".into(),
                network: "base-sepolia".into(),
                token: "eth".into(),
            },
        ]
    );
    assert_eq!(
        receipt.explorer_url,
        format!("https://sepolia.basescan.org/tx/{}", receipt.transaction_hash)
    );
    assert_eq!(service.open_handles(), 0);
}

#[tokio::test]
async fn fund_with_address_only_calls_the_faucet() {
    let service = RecordingWallet::new();
    let network = Network::new("ethereum-sepolia");

    let receipt = wallet::fund_wallet(&service, Some("0xabc"), &network, "usdc")
        .await
        .unwrap();

    assert_eq!(receipt.address, "0xabc");
    assert_eq!(receipt.token, "usdc");
    assert_eq!(
        service.service_calls(),
        vec![WalletCall::RequestFaucet {
            address: "0xabc".into(),
            network: "ethereum-sepolia".into(),
            token: "usdc".into(),
        }]
    );
}

#[tokio::test]
async fn transfer_submits_one_call_and_waits_once() {
    let service = RecordingWallet::new();

    let receipt = wallet::transfer_base_eth(&service, transfer_request("1"))
        .await
        .unwrap();

    assert_eq!(
        receipt,
        TransferReceipt::Confirmed {
            user_op_hash: "0xop1".into(),
            transaction_hash: Some("0xtx-0xop1".into()),
        }
    );
    assert_eq!(
        service.service_calls(),
        vec![
            WalletCall::GetAccount {
                address: "0xOwner".into()
            },
            WalletCall::GetSmartAccount {
                address: "0xSmart".into(),
                owner: "0xOwner".into()
            },
            WalletCall::SendUserOperation {
                smart_account: "0xSmart".into(),
                owner: "0xOwner".into(),
                network: "base-sepolia".into(),
                calls: vec![EncodedCall::transfer(
                    "0xDest",
                    U256::from(1_000_000_000_000_000_000u64)
                )],
            },
            WalletCall::WaitForUserOperation {
                smart_account: "0xSmart".into(),
                user_op_hash: "0xop1".into(),
            },
        ]
    );
    assert_eq!(service.open_handles(), 0);
}

#[tokio::test]
async fn transfer_encodes_fractional_amounts_in_wei() {
    let service = RecordingWallet::new();

    wallet::transfer_base_eth(&service, transfer_request("0.001"))
        .await
        .unwrap();

    let sent = service
        .service_calls()
        .into_iter()
        .find_map(|call| match call {
            WalletCall::SendUserOperation { calls, .. } => Some(calls),
            _ => None,
        })
        .unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].value, U256::from(1_000_000_000_000_000u64));
    assert_eq!(sent[0].data, "0x");
}

#[tokio::test]
async fn transfer_reports_unconfirmed_status() {
    for status in [UserOperationStatus::Failed, UserOperationStatus::Dropped] {
        let service = RecordingWallet::new().settling_with(status);

        let receipt = wallet::transfer_base_eth(&service, transfer_request("0.5"))
            .await
            .unwrap();

        assert!(!receipt.is_confirmed());
        assert_eq!(
            receipt,
            TransferReceipt::NotConfirmed {
                user_op_hash: "0xop1".into(),
                status,
            }
        );
    }
}

#[tokio::test]
async fn invalid_amount_never_reaches_the_service() {
    let service = RecordingWallet::new();

    let err = wallet::transfer_base_eth(&service, transfer_request("abc"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidAmount { .. }));
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn failures_are_returned_and_clients_released() {
    let cases = [
        FailPoint::CreateAccount,
        FailPoint::CreateSmartAccount,
        FailPoint::RequestFaucet,
    ];
    for point in cases {
        let service = RecordingWallet::new().failing_on(point);

        let err = wallet::fund_wallet(&service, None, &Network::base_sepolia(), "eth")
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::Wallet(WalletError::Api { status: 500, .. })),
            "{point:?}: {err}"
        );
        assert_eq!(service.open_handles(), 0, "{point:?}");
    }
}

#[tokio::test]
async fn failed_owner_creation_stops_before_the_smart_account() {
    let service = RecordingWallet::new().failing_on(FailPoint::CreateAccount);

    assert!(wallet::create_smart_wallet(&service, None).await.is_err());

    assert_eq!(
        service.count(|c| matches!(c, WalletCall::CreateSmartAccount { .. })),
        0
    );
    assert_eq!(service.open_handles(), 0);
}

#[tokio::test]
async fn transfer_wait_failure_is_an_error() {
    let service = RecordingWallet::new().failing_on(FailPoint::WaitForUserOperation);

    let result = wallet::transfer_base_eth(&service, transfer_request("1")).await;

    assert!(result.is_err());
    assert_eq!(service.open_handles(), 0);
}

#[tokio::test]
async fn connect_failure_skips_the_body() {
    let service = RecordingWallet::new().failing_on(FailPoint::Connect);

    assert!(wallet::create_eoa_wallet(&service, None).await.is_err());

    assert_eq!(service.calls(), vec![WalletCall::Connect]);
}
