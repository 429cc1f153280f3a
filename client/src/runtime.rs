//! The remote program as seen by the portal: one read and two writes against a fixed base
//! account.

use anyhow::{
    anyhow,
    Context,
};
use gif_portal_interface::{
    instructions::{
        AddEntry,
        AddEntryInstructionData,
        Initialize,
    },
    state::BaseAccount,
    SYSTEM_PROGRAM_ID,
};
use solana_address::Address;
use solana_sdk::{
    hash::Hash,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    config::PortalConfig,
    transactions::{
        sign_with_wallet,
        CustomRpcClient,
    },
    wallet::WalletProvider,
};

#[allow(async_fn_in_trait)]
pub trait RemoteRuntime {
    /// The address of the account holding the list.
    fn base_account(&self) -> Address;

    /// Reads and decodes the base account. Fails if it doesn't exist yet.
    async fn fetch(&self) -> anyhow::Result<BaseAccount>;

    /// Creates the base account, paid for and co-signed by `wallet` as `user`.
    async fn initialize<W: WalletProvider>(
        &self,
        wallet: &W,
        user: Address,
    ) -> anyhow::Result<Signature>;

    /// Appends `link` to the list on behalf of `user`.
    async fn append<W: WalletProvider>(
        &self,
        wallet: &W,
        user: Address,
        link: &str,
    ) -> anyhow::Result<Signature>;
}

/// [`RemoteRuntime`] backed by a cluster's JSON-RPC endpoint.
pub struct RpcRuntime {
    pub rpc: CustomRpcClient,
    pub program_id: Address,
    base_account: Keypair,
}

impl RpcRuntime {
    pub fn new(rpc: CustomRpcClient, program_id: Address, base_account: Keypair) -> Self {
        Self {
            rpc,
            program_id,
            base_account,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(
            CustomRpcClient::new_from_config(config),
            config.program_id,
            config.base_account.insecure_clone(),
        )
    }

    /// The `start_stuff_off` transaction, signed by the new base account and by `wallet`.
    pub async fn initialize_transaction<W: WalletProvider>(
        &self,
        wallet: &W,
        user: Address,
        blockhash: Hash,
    ) -> anyhow::Result<Transaction> {
        let ix = Initialize {
            base_account: self.base_account(),
            user,
            system_program: SYSTEM_PROGRAM_ID,
        }
        .create_instruction(self.program_id);

        sign_with_wallet(wallet, &user, &[&self.base_account], &[ix], blockhash).await
    }

    /// The `add_gif` transaction carrying `link` as typed, paid for and signed by `wallet`.
    pub async fn append_transaction<W: WalletProvider>(
        &self,
        wallet: &W,
        user: Address,
        link: &str,
        blockhash: Hash,
    ) -> anyhow::Result<Transaction> {
        let ix = AddEntry {
            base_account: self.base_account(),
            user,
        }
        .create_instruction(self.program_id, AddEntryInstructionData::new(link));

        sign_with_wallet(wallet, &user, &[], &[ix], blockhash).await
    }
}

impl RemoteRuntime for RpcRuntime {
    fn base_account(&self) -> Address {
        self.base_account.pubkey()
    }

    async fn fetch(&self) -> anyhow::Result<BaseAccount> {
        let address = self.base_account();
        let account = self
            .rpc
            .client
            .get_account_with_commitment(&address, self.rpc.commitment())
            .await
            .context("Couldn't retrieve account data")?
            .value
            .ok_or_else(|| anyhow!("Account {address} does not exist"))?;

        BaseAccount::try_from_owner_and_data(&self.program_id, &account.owner, &account.data)
            .with_context(|| format!("Couldn't decode base account {address}"))
    }

    async fn initialize<W: WalletProvider>(
        &self,
        wallet: &W,
        user: Address,
    ) -> anyhow::Result<Signature> {
        let blockhash = self.rpc.latest_blockhash().await?;
        let tx = self.initialize_transaction(wallet, user, blockhash).await?;
        self.rpc.send_transaction(&tx).await
    }

    async fn append<W: WalletProvider>(
        &self,
        wallet: &W,
        user: Address,
        link: &str,
    ) -> anyhow::Result<Signature> {
        let blockhash = self.rpc.latest_blockhash().await?;
        let tx = self.append_transaction(wallet, user, link, blockhash).await?;
        self.rpc.send_transaction(&tx).await
    }
}
