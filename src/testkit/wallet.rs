//! In-memory wallet service.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{
    Account, EncodedCall, Network, SmartAccount, UserOperation, UserOperationStatus,
};
use crate::error::{Result, WalletError};
use crate::port::{WalletApi, WalletConnector};

/// A call observed by [`RecordingWallet`], in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCall {
    Connect,
    Close,
    CreateAccount {
        name: Option<String>,
    },
    GetAccount {
        address: String,
    },
    CreateSmartAccount {
        owner: String,
    },
    GetSmartAccount {
        address: String,
        owner: String,
    },
    SendUserOperation {
        smart_account: String,
        owner: String,
        network: String,
        calls: Vec<EncodedCall>,
    },
    WaitForUserOperation {
        smart_account: String,
        user_op_hash: String,
    },
    RequestFaucet {
        address: String,
        network: String,
        token: String,
    },
}

/// Service calls that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Connect,
    CreateAccount,
    GetAccount,
    CreateSmartAccount,
    GetSmartAccount,
    SendUserOperation,
    WaitForUserOperation,
    RequestFaucet,
}

#[derive(Debug)]
struct State {
    calls: Vec<WalletCall>,
    fail_on: Option<FailPoint>,
    settle_with: UserOperationStatus,
    next_id: usize,
}

/// Records every interaction and answers with deterministic data.
///
/// Created accounts are `0xeoa{n}`, smart accounts `0xsmart{n}`, user
/// operations `0xop{n}` and faucet transactions `0xfaucet{n}`. `n` starts at
/// 1 and is shared across kinds. Settled transactions are `0xtx-{op}`.
#[derive(Debug, Clone)]
pub struct RecordingWallet {
    state: Arc<Mutex<State>>,
}

impl Default for RecordingWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingWallet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                calls: Vec::new(),
                fail_on: None,
                settle_with: UserOperationStatus::Complete,
                next_id: 1,
            })),
        }
    }

    /// Make `point` return a service error.
    #[must_use]
    pub fn failing_on(self, point: FailPoint) -> Self {
        self.state.lock().fail_on = Some(point);
        self
    }

    /// Status user operations settle with when waited on.
    #[must_use]
    pub fn settling_with(self, status: UserOperationStatus) -> Self {
        self.state.lock().settle_with = status;
        self
    }

    /// Every call recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<WalletCall> {
        self.state.lock().calls.clone()
    }

    /// Calls other than client acquire/release.
    #[must_use]
    pub fn service_calls(&self) -> Vec<WalletCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, WalletCall::Connect | WalletCall::Close))
            .collect()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&WalletCall) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|&c| predicate(c)).count()
    }

    /// Acquired handles not yet released.
    #[must_use]
    pub fn open_handles(&self) -> isize {
        let connects = self.count(|c| matches!(c, WalletCall::Connect));
        let closes = self.count(|c| matches!(c, WalletCall::Close));
        connects as isize - closes as isize
    }

    fn record(&self, call: WalletCall, point: FailPoint) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(call);
        if state.fail_on == Some(point) {
            return Err(WalletError::Api {
                status: 500,
                error_type: "internal_server_error".into(),
                message: format!("{point:?} failed"),
            }
            .into());
        }
        Ok(())
    }

    fn next_id(&self) -> usize {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        id
    }
}

#[async_trait]
impl WalletConnector for RecordingWallet {
    async fn connect(&self) -> Result<Arc<dyn WalletApi>> {
        self.record(WalletCall::Connect, FailPoint::Connect)?;
        Ok(Arc::new(self.clone()))
    }
}

#[async_trait]
impl WalletApi for RecordingWallet {
    async fn create_account(&self, name: Option<&str>) -> Result<Account> {
        self.record(
            WalletCall::CreateAccount {
                name: name.map(String::from),
            },
            FailPoint::CreateAccount,
        )?;
        Ok(Account::new(format!("0xeoa{}", self.next_id()), name.map(String::from)))
    }

    async fn get_account(&self, address: &str) -> Result<Account> {
        self.record(
            WalletCall::GetAccount {
                address: address.to_string(),
            },
            FailPoint::GetAccount,
        )?;
        Ok(Account::new(address, None))
    }

    async fn create_smart_account(&self, owner: &Account) -> Result<SmartAccount> {
        self.record(
            WalletCall::CreateSmartAccount {
                owner: owner.address.clone(),
            },
            FailPoint::CreateSmartAccount,
        )?;
        Ok(SmartAccount {
            address: format!("0xsmart{}", self.next_id()),
            owners: vec![owner.address.clone()],
            name: None,
        })
    }

    async fn get_smart_account(&self, address: &str, owner: &Account) -> Result<SmartAccount> {
        self.record(
            WalletCall::GetSmartAccount {
                address: address.to_string(),
                owner: owner.address.clone(),
            },
            FailPoint::GetSmartAccount,
        )?;
        Ok(SmartAccount {
            address: address.to_string(),
            owners: vec![owner.address.clone()],
            name: None,
        })
    }

    async fn send_user_operation(
        &self,
        smart_account: &SmartAccount,
        owner: &Account,
        network: &Network,
        calls: Vec<EncodedCall>,
    ) -> Result<UserOperation> {
        self.record(
            WalletCall::SendUserOperation {
                smart_account: smart_account.address.clone(),
                owner: owner.address.clone(),
                network: network.to_string(),
                calls: calls.clone(),
            },
            FailPoint::SendUserOperation,
        )?;
        Ok(UserOperation {
            user_op_hash: format!("0xop{}", self.next_id()),
            network: network.to_string(),
            calls,
            status: UserOperationStatus::Broadcast,
            transaction_hash: None,
        })
    }

    async fn wait_for_user_operation(
        &self,
        smart_account_address: &str,
        user_op_hash: &str,
    ) -> Result<UserOperation> {
        self.record(
            WalletCall::WaitForUserOperation {
                smart_account: smart_account_address.to_string(),
                user_op_hash: user_op_hash.to_string(),
            },
            FailPoint::WaitForUserOperation,
        )?;
        let status = self.state.lock().settle_with;
        Ok(UserOperation {
            user_op_hash: user_op_hash.to_string(),
            network: Network::base_sepolia().to_string(),
            calls: Vec::new(),
            status,
            transaction_hash: (status == UserOperationStatus::Complete)
                .then(|| format!("0xtx-{user_op_hash}")),
        })
    }

    async fn request_faucet(
        &self,
        address: &str,
        network: &Network,
        token: &str,
    ) -> Result<String> {
        self.record(
            WalletCall::RequestFaucet {
                address: address.to_string(),
                network: network.to_string(),
                token: token.to_string(),
            },
            FailPoint::RequestFaucet,
        )?;
        Ok(format!("0xfaucet{}", self.next_id()))
    }

    async fn close(&self) {
        self.state.lock().calls.push(WalletCall::Close);
    }
}
