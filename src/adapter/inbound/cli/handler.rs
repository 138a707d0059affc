//! Subcommand handlers.
//!
//! Each handler maps parsed arguments onto one wallet operation and reports
//! how it went. Operation failures were already logged by the operation.

use crate::adapter::inbound::cli::command::{
    Commands, CreateEoaArgs, CreateSmartArgs, FundWalletArgs, TransferBaseEthArgs,
};
use crate::application::wallet::{self, TransferRequest};
use crate::domain::Network;
use crate::port::WalletConnector;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The operation completed.
    Succeeded,
    /// The operation ran and failed (service error or unconfirmed transfer).
    Failed,
    /// Arguments were rejected before anything ran.
    Usage,
}

impl CommandOutcome {
    /// Process exit status for this outcome.
    ///
    /// Without `strict`, every outcome exits 0.
    #[must_use]
    pub const fn exit_status(self, strict: bool) -> u8 {
        match (self, strict) {
            (Self::Succeeded, _) | (_, false) => 0,
            (Self::Failed, true) => 1,
            (Self::Usage, true) => 2,
        }
    }
}

/// Run the handler for `command`.
pub async fn execute(command: &Commands, connector: &dyn WalletConnector) -> CommandOutcome {
    match command {
        Commands::CreateEoa(args) => create_eoa(args, connector).await,
        Commands::CreateSmart(args) => create_smart(args, connector).await,
        Commands::FundWallet(args) => fund(args, connector).await,
        Commands::TransferBaseEth(args) => transfer(args, connector).await,
    }
}

async fn create_eoa(args: &CreateEoaArgs, connector: &dyn WalletConnector) -> CommandOutcome {
    outcome(wallet::create_eoa_wallet(connector, args.name.as_deref()).await)
}

async fn create_smart(args: &CreateSmartArgs, connector: &dyn WalletConnector) -> CommandOutcome {
    outcome(wallet::create_smart_wallet(connector, args.owner_address.as_deref()).await)
}

async fn fund(args: &FundWalletArgs, connector: &dyn WalletConnector) -> CommandOutcome {
    let network = Network::new(args.network.as_str());
    outcome(wallet::fund_wallet(connector, args.address.as_deref(), &network, &args.token).await)
}

async fn transfer(args: &TransferBaseEthArgs, connector: &dyn WalletConnector) -> CommandOutcome {
    let request = match transfer_request(args) {
        Ok(request) => request,
        Err(flag) => {
            println!("Error: --{flag} is required for transfer");
            return CommandOutcome::Usage;
        }
    };

    match wallet::transfer_base_eth(connector, request).await {
        Ok(receipt) if receipt.is_confirmed() => CommandOutcome::Succeeded,
        Ok(_) | Err(_) => CommandOutcome::Failed,
    }
}

/// Check the transfer flags in order and name the first one missing.
///
/// Empty values count as missing.
pub fn transfer_request(args: &TransferBaseEthArgs) -> Result<TransferRequest<'_>, &'static str> {
    let from_smart_address = present(&args.from_smart_address).ok_or("from-smart-address")?;
    let from_smart_owner = present(&args.from_smart_owner).ok_or("from-smart-owner")?;
    let to_address = present(&args.to_address).ok_or("to-address")?;

    Ok(TransferRequest {
        from_smart_address,
        from_smart_owner,
        to_address,
        amount: &args.amount,
    })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn outcome<T>(result: crate::error::Result<T>) -> CommandOutcome {
    if result.is_ok() {
        CommandOutcome::Succeeded
    } else {
        CommandOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::wallet::RecordingWallet;

    fn args(from: Option<&str>, owner: Option<&str>, to: Option<&str>) -> TransferBaseEthArgs {
        TransferBaseEthArgs {
            from_smart_address: from.map(String::from),
            from_smart_owner: owner.map(String::from),
            to_address: to.map(String::from),
            amount: "0".into(),
        }
    }

    #[test]
    fn transfer_request_names_first_missing_flag() {
        assert_eq!(
            transfer_request(&args(None, None, None)).unwrap_err(),
            "from-smart-address"
        );
        assert_eq!(
            transfer_request(&args(Some("0xs"), None, Some("0xd"))).unwrap_err(),
            "from-smart-owner"
        );
        assert_eq!(
            transfer_request(&args(Some("0xs"), Some("0xo"), None)).unwrap_err(),
            "to-address"
        );
        assert_eq!(
            transfer_request(&args(Some(""), Some("0xo"), Some("0xd"))).unwrap_err(),
            "from-smart-address"
        );
    }

    #[test]
    fn transfer_request_borrows_all_flags() {
        let args = args(Some("0xs"), Some("0xo"), Some("0xd"));
        let request = transfer_request(&args).unwrap();
        assert_eq!(request.from_smart_address, "0xs");
        assert_eq!(request.from_smart_owner, "0xo");
        assert_eq!(request.to_address, "0xd");
        assert_eq!(request.amount, "0");
    }

    #[tokio::test]
    async fn missing_transfer_flag_contacts_nothing() {
        let cases = [
            args(None, Some("0xo"), Some("0xd")),
            args(Some("0xs"), None, Some("0xd")),
            args(Some("0xs"), Some("0xo"), None),
        ];
        for case in cases {
            let service = RecordingWallet::new();
            let outcome = execute(&Commands::TransferBaseEth(case), &service).await;

            assert_eq!(outcome, CommandOutcome::Usage);
            assert!(service.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn complete_transfer_succeeds() {
        let service = RecordingWallet::new();
        let mut request = args(Some("0xs"), Some("0xo"), Some("0xd"));
        request.amount = "0.1".into();

        let outcome = execute(&Commands::TransferBaseEth(request), &service).await;

        assert_eq!(outcome, CommandOutcome::Succeeded);
        assert_eq!(service.open_handles(), 0);
    }

    #[test]
    fn lenient_exit_status_is_always_zero() {
        for outcome in [
            CommandOutcome::Succeeded,
            CommandOutcome::Failed,
            CommandOutcome::Usage,
        ] {
            assert_eq!(outcome.exit_status(false), 0);
        }
    }

    #[test]
    fn strict_exit_status_reflects_failure() {
        assert_eq!(CommandOutcome::Succeeded.exit_status(true), 0);
        assert_eq!(CommandOutcome::Failed.exit_status(true), 1);
        assert_eq!(CommandOutcome::Usage.exit_status(true), 2);
    }
}
