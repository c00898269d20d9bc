//! Devnet wallet demo.
//!
//! ```text
//! create or import wallet
//!     → airdrop (test network faucet) and wait for it to settle
//!     → read recipient + amount from stdin
//!     → balance check
//!     → TransferExecutor (build once, submit up to 10 times)
//!     → print balances
//! ```
//!
//! The process always exits 0; problems are printed, not returned.

use clap::Parser;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use devnet_wallet::blockchain::{
    BlockchainResult, ConfirmationStatus, LedgerClient, RpcLedgerClient, Wallet,
};
use devnet_wallet::config::{
    load_config, validate_config, AirdropConfig, ConfigError, WalletConfig,
};
use devnet_wallet::console::prompt_transfer;
use devnet_wallet::observability::logging;
use devnet_wallet::transfer::{TransferExecutor, TransferRequest};

/// Seconds to wait for the transfer itself to confirm before printing balances.
const TRANSFER_CONFIRMATION_SECS: u64 = 30;

#[derive(Parser)]
#[command(name = "devnet-wallet")]
#[command(
    about = "Create a devnet wallet, fund it from the faucet and send SOL",
    long_about = None
)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RPC endpoint, overriding the configuration.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Import the wallet from a Solana keypair file instead of generating one.
    #[arg(long, conflicts_with = "secret_key")]
    keypair: Option<PathBuf>,

    /// Import the wallet from a JSON byte array, as printed by this program.
    #[arg(long)]
    secret_key: Option<String>,

    /// Skip the faucet request.
    #[arg(long)]
    no_airdrop: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        println!("ERROR: {}", e);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WalletConfig::default(),
    };
    if let Some(url) = cli.rpc_url {
        config.rpc.url = url;
    }
    if cli.no_airdrop {
        config.airdrop.enabled = false;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability.log_level);
    tracing::info!(
        rpc_url = %config.rpc.url,
        airdrop = config.airdrop.enabled,
        "devnet-wallet v0.1.0 starting"
    );

    let client = Arc::new(RpcLedgerClient::new(config.rpc.clone())?);
    if !client.is_healthy().await {
        tracing::warn!(rpc_url = %config.rpc.url, "RPC endpoint reports unhealthy");
    }

    let wallet = match (&cli.keypair, &cli.secret_key) {
        (Some(path), _) => Wallet::from_keypair_file(path)?,
        (None, Some(json)) => Wallet::from_json_bytes(json)?,
        (None, None) => Wallet::generate(),
    };
    println!("Wallet public key: {}", wallet.address());
    println!("Wallet private key: {}", wallet.secret_key_json()?);

    if config.airdrop.enabled {
        fund(&client, &wallet, &config.airdrop).await;
    }

    let (recipient, lamports) = tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        prompt_transfer(&mut input, &mut io::stdout())
    })
    .await??;

    let balance = client.get_balance(&wallet.address()).await;
    if let Err(message) = check_funds(balance, lamports) {
        println!("{}", message);
    } else {
        let executor = TransferExecutor::new(client.clone());
        match executor
            .execute(TransferRequest::new(&wallet, &recipient, lamports))
            .await
        {
            Ok(receipt) => {
                println!("{}", receipt.message());
                report_confirmation(&client, &receipt.signature).await;
            }
            Err(e) => println!("{}", e),
        }
    }

    let own_balance = client.get_balance(&wallet.address()).await;
    println!("Your wallet's balance: {}", describe_balance(own_balance));
    match Pubkey::from_str(&recipient) {
        Ok(other) => {
            let other_balance = client.get_balance(&other).await;
            println!("Other wallet's balance: {}", describe_balance(other_balance));
        }
        Err(e) => println!("Other wallet's balance: unavailable ({})", e),
    }

    Ok(())
}

/// Decide whether a transfer of `lamports` may go ahead given the balance lookup.
///
/// A failed lookup skips the transfer without ending the run.
fn check_funds(balance: BlockchainResult<u64>, lamports: u64) -> Result<(), String> {
    match balance {
        Ok(balance) if lamports > balance => Err(format!(
            "ERROR: wallet balance: {} is < the amount requested to be sent: {}",
            balance, lamports
        )),
        Ok(_) => Ok(()),
        Err(e) => Err(format!("ERROR: could not read wallet balance: {}", e)),
    }
}

fn describe_balance(balance: BlockchainResult<u64>) -> String {
    match balance {
        Ok(lamports) => lamports.to_string(),
        Err(e) => format!("unavailable ({})", e),
    }
}

/// Request an airdrop and wait for it to settle. Failures are reported, not fatal.
async fn fund(client: &RpcLedgerClient, wallet: &Wallet, airdrop: &AirdropConfig) {
    let signature = match client.request_airdrop(&wallet.address(), airdrop.lamports).await {
        Ok(signature) => signature,
        Err(e) => {
            println!("Airdrop failed: {}", e);
            return;
        }
    };

    println!("Airdrop requested: {}", signature);
    println!("Receiving airdrop.....");
    match client
        .wait_for_confirmation(&signature, airdrop.settle_timeout_secs)
        .await
    {
        Ok(ConfirmationStatus::Confirmed) => {
            tracing::info!(
                signature = %signature,
                lamports = airdrop.lamports,
                "Airdrop confirmed"
            );
        }
        Ok(status) => println!("Airdrop did not settle: {:?}", status),
        Err(e) => println!("Airdrop not confirmed yet: {}", e),
    }
}

async fn report_confirmation(client: &RpcLedgerClient, signature: &Signature) {
    match client
        .wait_for_confirmation(signature, TRANSFER_CONFIRMATION_SECS)
        .await
    {
        Ok(ConfirmationStatus::Confirmed) => {
            tracing::info!(signature = %signature, "Transfer confirmed");
        }
        Ok(status) => println!("Transfer status: {:?}", status),
        Err(e) => println!("Transfer not confirmed yet: {}", e),
    }
}
