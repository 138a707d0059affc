//! CDP REST API client.
//!
//! Implements [`WalletApi`] over the v2 EVM endpoints. Each request is
//! authenticated with a fresh bearer token; requests that touch account keys
//! also carry a wallet token bound to the request body.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};
use url::Url;

use super::auth::{self, ApiKeySigner, WalletSigner};
use super::dto::{request, response};
use super::settings::{ApiConfig, CdpCredentials, WaitConfig, WALLET_SECRET_VAR};
use crate::domain::{Account, EncodedCall, Network, SmartAccount, UserOperation};
use crate::error::{ConfigError, Result, WalletError};
use crate::port::{WalletApi, WalletConnector};

/// Opens [`CdpClient`] handles from configuration and credentials.
#[derive(Debug, Clone)]
pub struct CdpConnector {
    api: ApiConfig,
    wait: WaitConfig,
    credentials: CdpCredentials,
}

impl CdpConnector {
    #[must_use]
    pub const fn new(api: ApiConfig, wait: WaitConfig, credentials: CdpCredentials) -> Self {
        Self {
            api,
            wait,
            credentials,
        }
    }
}

#[async_trait]
impl WalletConnector for CdpConnector {
    async fn connect(&self) -> Result<Arc<dyn WalletApi>> {
        let client = CdpClient::new(&self.api, self.wait.clone(), &self.credentials)?;
        Ok(Arc::new(client))
    }
}

/// HTTP client for the CDP v2 EVM API.
pub struct CdpClient {
    http: HttpClient,
    base_url: Url,
    host: String,
    api_signer: ApiKeySigner,
    wallet_signer: Option<WalletSigner>,
    wait: WaitConfig,
    closed: AtomicBool,
}

impl CdpClient {
    /// Build a client, validating credentials up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or malformed, the wallet
    /// secret is malformed, or the base URL is invalid.
    pub fn new(api: &ApiConfig, wait: WaitConfig, credentials: &CdpCredentials) -> Result<Self> {
        let (key_id, key_secret) = credentials.api_key()?;
        let api_signer = ApiKeySigner::new(key_id, key_secret)?;
        let wallet_signer = credentials
            .wallet_secret
            .as_deref()
            .map(WalletSigner::new)
            .transpose()?;

        let base_url = Url::parse(api.base_url.trim_end_matches('/'))?;
        let host = match (base_url.host_str(), base_url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(ConfigError::InvalidValue {
                    field: "api.base_url",
                    reason: "URL has no host".into(),
                }
                .into())
            }
        };

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            host,
            api_signer,
            wallet_signer,
            wait,
            closed: AtomicBool::new(false),
        })
    }

    fn wallet_signer(&self) -> Result<&WalletSigner> {
        Ok(self.wallet_signer.as_ref().ok_or(ConfigError::MissingField {
            field: WALLET_SECRET_VAR,
        })?)
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base_url.as_str().trim_end_matches('/')))?)
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        if self.closed.load(Ordering::SeqCst) {
            return Err(WalletError::Closed.into());
        }
        let url = self.url(path)?;
        let body = body.map(serde_json::to_value).transpose()?;

        let bearer = self
            .api_signer
            .bearer_token(&method, &self.host, url.path())?;
        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(bearer)
            .header("Content-Type", "application/json");

        if auth::requires_wallet_auth(&method, url.path()) {
            let token = self.wallet_signer()?.wallet_token(
                &method,
                &self.host,
                url.path(),
                body.as_ref(),
            )?;
            builder = builder.header("X-Wallet-Auth", token);
        }
        if let Some(body) = &body {
            builder = builder.body(auth::canonical_json(body));
        }

        debug!(method = %method, url = %url, "CDP request");
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let (error_type, message) = match serde_json::from_str::<response::ApiError>(&text) {
                Ok(err) => (err.error_type, err.error_message),
                Err(_) => ("unknown".to_string(), text),
            };
            return Err(WalletError::Api {
                status: status.as_u16(),
                error_type,
                message,
            }
            .into());
        }

        serde_json::from_str(&text).map_err(|e| WalletError::Decode(e.to_string()).into())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, Value>(Method::GET, path, None).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn get_user_operation(&self, smart_address: &str, hash: &str) -> Result<UserOperation> {
        let op: response::EvmUserOperation = self
            .get(&format!(
                "/v2/evm/smart-accounts/{smart_address}/user-operations/{hash}"
            ))
            .await?;
        Ok(UserOperation::try_from(op)?)
    }
}

#[async_trait]
impl WalletApi for CdpClient {
    async fn create_account(&self, name: Option<&str>) -> Result<Account> {
        let account: response::EvmAccount = self
            .post("/v2/evm/accounts", &request::CreateAccount { name })
            .await?;
        Ok(account.into())
    }

    async fn get_account(&self, address: &str) -> Result<Account> {
        let account: response::EvmAccount =
            self.get(&format!("/v2/evm/accounts/{address}")).await?;
        Ok(account.into())
    }

    async fn create_smart_account(&self, owner: &Account) -> Result<SmartAccount> {
        let body = request::CreateSmartAccount {
            owners: vec![owner.address.as_str()],
        };
        let smart: response::EvmSmartAccount = self.post("/v2/evm/smart-accounts", &body).await?;
        Ok(smart.into())
    }

    async fn get_smart_account(&self, address: &str, owner: &Account) -> Result<SmartAccount> {
        let smart: response::EvmSmartAccount = self
            .get(&format!("/v2/evm/smart-accounts/{address}"))
            .await?;
        let smart = SmartAccount::from(smart);
        if !smart
            .owners
            .iter()
            .any(|o| o.eq_ignore_ascii_case(&owner.address))
        {
            warn!(
                smart_account = %smart.address,
                owner = %owner.address,
                "Owner is not listed among the smart account owners"
            );
        }
        Ok(smart)
    }

    async fn send_user_operation(
        &self,
        smart_account: &SmartAccount,
        owner: &Account,
        network: &Network,
        calls: Vec<EncodedCall>,
    ) -> Result<UserOperation> {
        // Signing needs the wallet secret; fail before preparing anything.
        self.wallet_signer()?;

        let base = format!("/v2/evm/smart-accounts/{}/user-operations", smart_account.address);
        let body = request::PrepareUserOperation {
            network: network.as_str(),
            calls: calls.iter().map(request::Call::from).collect(),
        };
        let prepared: response::EvmUserOperation = self.post(&base, &body).await?;
        debug!(user_op_hash = %prepared.user_op_hash, "User operation prepared");

        let signed: response::Signature = self
            .post(
                &format!("/v2/evm/accounts/{}/sign", owner.address),
                &request::SignHash {
                    hash: &prepared.user_op_hash,
                },
            )
            .await?;
        if signed.signature.is_empty() {
            return Err(WalletError::MissingSignature {
                address: owner.address.clone(),
            }
            .into());
        }

        let sent: response::EvmUserOperation = self
            .post(
                &format!("{base}/{}/send", prepared.user_op_hash),
                &request::SendUserOperation {
                    signature: &signed.signature,
                },
            )
            .await?;
        Ok(UserOperation::try_from(sent)?)
    }

    async fn wait_for_user_operation(
        &self,
        smart_account_address: &str,
        user_op_hash: &str,
    ) -> Result<UserOperation> {
        let deadline = Instant::now() + Duration::from_secs(self.wait.timeout_secs);
        let interval = Duration::from_millis(self.wait.interval_ms);

        loop {
            let op = self
                .get_user_operation(smart_account_address, user_op_hash)
                .await?;
            if op.status.is_terminal() {
                return Ok(op);
            }
            debug!(user_op_hash, status = %op.status, "User operation not settled yet");

            if Instant::now() + interval > deadline {
                return Err(WalletError::WaitTimeout {
                    user_op_hash: user_op_hash.to_string(),
                    seconds: self.wait.timeout_secs,
                }
                .into());
            }
            sleep(interval).await;
        }
    }

    async fn request_faucet(
        &self,
        address: &str,
        network: &Network,
        token: &str,
    ) -> Result<String> {
        let faucet: response::Faucet = self
            .post(
                "/v2/evm/faucet",
                &request::RequestFaucet {
                    address,
                    network: network.as_str(),
                    token,
                },
            )
            .await?;
        Ok(faucet.transaction_hash)
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            warn!("CDP client closed twice");
        } else {
            debug!("CDP client closed");
        }
    }
}
