//! In-memory doubles for [`WalletProvider`] and [`RemoteRuntime`], so the portal's event handlers
//! can be driven without a cluster or a keypair on disk.

use std::cell::{
    Cell,
    RefCell,
};

use anyhow::{
    anyhow,
    bail,
};
use gif_portal_interface::state::{
    BaseAccount,
    Entry,
};
use solana_address::Address;
use solana_sdk::{
    signature::Signature,
    transaction::Transaction,
};

use crate::{
    runtime::RemoteRuntime,
    wallet::{
        ConnectOptions,
        WalletError,
        WalletProvider,
    },
};

/// A wallet that connects according to its `trusted` and `reject` flags and records every
/// connect request.
pub struct MockWallet {
    pub address: Address,
    /// Whether a silent connect succeeds.
    pub trusted: Cell<bool>,
    /// Whether an explicit connect is declined.
    pub reject: Cell<bool>,
    pub connect_calls: RefCell<Vec<ConnectOptions>>,
}

impl MockWallet {
    pub fn new(trusted: bool) -> Self {
        Self {
            address: Address::new_unique(),
            trusted: Cell::new(trusted),
            reject: Cell::new(false),
            connect_calls: Default::default(),
        }
    }

    pub fn trusted() -> Self {
        Self::new(true)
    }

    pub fn untrusted() -> Self {
        Self::new(false)
    }
}

impl WalletProvider for MockWallet {
    fn name(&self) -> &str {
        "mock wallet"
    }

    async fn connect(&self, options: ConnectOptions) -> Result<Address, WalletError> {
        self.connect_calls.borrow_mut().push(options);
        if options.only_if_trusted && !self.trusted.get() {
            return Err(WalletError::NotTrusted);
        }
        if !options.only_if_trusted && self.reject.get() {
            return Err(WalletError::Rejected);
        }
        self.trusted.set(true);
        Ok(self.address)
    }

    async fn sign_transaction(&self, _transaction: &mut Transaction) -> Result<(), WalletError> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeCall {
    Fetch,
    Initialize { user: Address },
    Append { user: Address, link: String },
}

/// A runtime holding the base account in memory.
///
/// It behaves like the program: initializing twice fails, appending before initializing fails,
/// and fetching a missing account fails. Each operation can additionally be forced to fail.
pub struct MockRuntime {
    pub base_account: Address,
    pub account: RefCell<Option<BaseAccount>>,
    pub calls: RefCell<Vec<RuntimeCall>>,
    pub fail_fetch: Cell<bool>,
    pub fail_initialize: Cell<bool>,
    pub fail_append: Cell<bool>,
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self {
            base_account: Address::new_unique(),
            account: Default::default(),
            calls: Default::default(),
            fail_fetch: Default::default(),
            fail_initialize: Default::default(),
            fail_append: Default::default(),
        }
    }
}

impl MockRuntime {
    /// A runtime whose base account already exists with the given links, all submitted by
    /// `user`.
    pub fn with_links(user: Address, links: &[&str]) -> Self {
        let runtime = Self::default();
        *runtime.account.borrow_mut() = Some(BaseAccount {
            total_gifs: links.len() as u64,
            gif_list: links.iter().map(|link| Entry::new(*link, user)).collect(),
        });
        runtime
    }

    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// The number of calls that would have mutated remote state.
    pub fn num_mutating_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| !matches!(call, RuntimeCall::Fetch))
            .count()
    }
}

impl RemoteRuntime for MockRuntime {
    fn base_account(&self) -> Address {
        self.base_account
    }

    async fn fetch(&self) -> anyhow::Result<BaseAccount> {
        self.calls.borrow_mut().push(RuntimeCall::Fetch);
        if self.fail_fetch.get() {
            bail!("Connection refused");
        }
        self.account
            .borrow()
            .clone()
            .ok_or_else(|| anyhow!("Account {} does not exist", self.base_account))
    }

    async fn initialize<W: WalletProvider>(
        &self,
        _wallet: &W,
        user: Address,
    ) -> anyhow::Result<Signature> {
        self.calls
            .borrow_mut()
            .push(RuntimeCall::Initialize { user });
        if self.fail_initialize.get() {
            bail!("Insufficient funds for rent");
        }

        let mut account = self.account.borrow_mut();
        if account.is_some() {
            bail!("Account {} already in use", self.base_account);
        }
        *account = Some(BaseAccount::default());
        Ok(Signature::default())
    }

    async fn append<W: WalletProvider>(
        &self,
        _wallet: &W,
        user: Address,
        link: &str,
    ) -> anyhow::Result<Signature> {
        self.calls.borrow_mut().push(RuntimeCall::Append {
            user,
            link: link.to_string(),
        });
        if self.fail_append.get() {
            bail!("Blockhash not found");
        }

        let mut account = self.account.borrow_mut();
        let account = account
            .as_mut()
            .ok_or_else(|| anyhow!("Account {} does not exist", self.base_account))?;
        account.gif_list.push(Entry::new(link, user));
        account.total_gifs += 1;
        Ok(Signature::default())
    }
}
