//! Lightweight, nonblocking RPC client utilities for funding accounts and sending transactions
//! that a [`WalletProvider`] pays for and signs.

use anyhow::{
    bail,
    Context,
};
use solana_address::Address;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_instruction::Instruction;
use solana_sdk::{
    hash::Hash,
    message::Message,
    signature::{
        Keypair,
        Signature,
    },
    transaction::Transaction,
};

use crate::{
    config::{
        Cluster,
        PortalConfig,
    },
    eprint_kv,
    print_kv,
    wallet::WalletProvider,
    LogColor,
};

pub struct CustomRpcClient {
    pub client: RpcClient,
    /// Print each submitted transaction's signature.
    pub debug_logs: bool,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        Self::new_from_url(Cluster::Localnet.url(), CommitmentConfig::processed())
    }
}

impl CustomRpcClient {
    pub fn new_from_url(url: &str, commitment: CommitmentConfig) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), commitment),
            debug_logs: true,
        }
    }

    pub fn new_from_config(config: &PortalConfig) -> Self {
        Self::new_from_url(config.cluster.url(), config.commitment)
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.client.commitment()
    }

    pub async fn fund_account(&self, address: &Address) -> anyhow::Result<()> {
        fund(&self.client, address).await
    }

    pub async fn latest_blockhash(&self) -> anyhow::Result<Hash> {
        self.client
            .get_latest_blockhash()
            .await
            .context("Couldn't fetch the latest blockhash")
    }

    /// Sends `transaction` and waits for the client's commitment level.
    pub async fn send_transaction(&self, transaction: &Transaction) -> anyhow::Result<Signature> {
        match self.client.send_and_confirm_transaction(transaction).await {
            Ok(signature) => {
                if self.debug_logs {
                    print_kv!("Transaction", signature, LogColor::Info);
                }
                Ok(signature)
            }
            Err(error) => {
                if let Some(payer) = transaction.message.account_keys.first() {
                    eprint_kv!("Failed transaction payer", payer);
                }
                Err(error).context("Failed transaction submission")
            }
        }
    }
}

/// Builds a transaction paid for by `payer` against `blockhash`.
///
/// The `co_signers` sign first, then `wallet` adds its own signature.
pub async fn sign_with_wallet<W: WalletProvider>(
    wallet: &W,
    payer: &Address,
    co_signers: &[&Keypair],
    instructions: &[Instruction],
    blockhash: Hash,
) -> anyhow::Result<Transaction> {
    let msg = Message::new(instructions, Some(payer));
    let mut tx = Transaction::new_unsigned(msg);
    tx.try_partial_sign(co_signers, blockhash)
        .context("Co-signers couldn't sign the transaction")?;
    wallet
        .sign_transaction(&mut tx)
        .await
        .context("Wallet couldn't sign the transaction")?;
    Ok(tx)
}

const MAX_TRIES: u8 = 20;

pub const DEFAULT_FUND_AMOUNT: u64 = 1_000_000_000;

async fn fund(rpc: &RpcClient, address: &Address) -> anyhow::Result<()> {
    let airdrop_signature: Signature = rpc
        .request_airdrop(address, DEFAULT_FUND_AMOUNT)
        .await
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .await
        .context("Couldn't confirm transaction")?
        && i < MAX_TRIES
    {
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        i += 1;
    }

    if i == MAX_TRIES {
        bail!("Airdrop did not land.");
    }

    Ok(())
}
