//! The portal's event handlers: connect a wallet, create the list, submit links, and keep the
//! cached [`ViewState`] in sync with the remote program.
//!
//! Every handler logs its outcome and swallows remote failures. The only failure reported back to
//! the caller is [`PortalAlert::WalletNotFound`] on an explicit connect.

use solana_address::Address;

use crate::{
    eprint_kv,
    print_kv,
    runtime::RemoteRuntime,
    views::{
        EntryView,
        Session,
        ViewState,
    },
    wallet::{
        ConnectOptions,
        WalletProvider,
    },
    LogColor,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum PortalAlert {
    #[strum(to_string = "Solana wallet not found! Pass --wallet <KEYPAIR> to use one.")]
    WalletNotFound,
}

impl std::error::Error for PortalAlert {}

/// What the shell should show, derived from the session and the cached list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    Disconnected,
    /// Connected, but no fetch has completed yet.
    Loading { user: Address },
    /// Connected, and the base account is missing or couldn't be fetched.
    Uninitialized { user: Address },
    Loaded {
        user: Address,
        input: &'a str,
        entries: &'a [EntryView],
    },
}

pub struct Portal<W, R> {
    wallet: Option<W>,
    runtime: R,
    session: Session,
    view: ViewState,
    input: String,
}

impl<W: WalletProvider, R: RemoteRuntime> Portal<W, R> {
    /// `wallet` is `None` when no wallet provider is available.
    pub fn new(wallet: Option<W>, runtime: R) -> Self {
        Self {
            wallet,
            runtime,
            session: Session::default(),
            view: ViewState::default(),
            input: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn wallet(&self) -> Option<&W> {
        self.wallet.as_ref()
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn screen(&self) -> Screen<'_> {
        let Some(user) = self.session.identifier() else {
            return Screen::Disconnected;
        };

        match &self.view {
            ViewState::NotFetched => Screen::Loading { user },
            ViewState::Uninitialized => Screen::Uninitialized { user },
            ViewState::Loaded(entries) => Screen::Loaded {
                user,
                input: &self.input,
                entries,
            },
        }
    }

    /// Silently reconnects to a wallet the user approved before. Runs once at startup.
    pub async fn probe_existing_connection(&mut self) {
        let Some(wallet) = &self.wallet else {
            print_kv!("Wallet", "No wallet provider found", LogColor::Warning);
            return;
        };
        print_kv!("Wallet found", wallet.name());

        match wallet.connect(ConnectOptions::only_if_trusted()).await {
            Ok(address) => self.on_connected(address).await,
            Err(e) => print_kv!("Silent connect skipped", e, LogColor::Warning),
        }
    }

    /// Asks the wallet to connect, prompting the user if needed.
    pub async fn connect(&mut self) -> Result<(), PortalAlert> {
        let Some(wallet) = &self.wallet else {
            return Err(PortalAlert::WalletNotFound);
        };

        match wallet.connect(ConnectOptions::default()).await {
            Ok(address) => self.on_connected(address).await,
            Err(e) => eprint_kv!("Error connecting wallet", e),
        }

        Ok(())
    }

    async fn on_connected(&mut self, address: Address) {
        print_kv!("Connected with public key", address, LogColor::Success);
        self.session.set(address);
        print_kv!("Fetching list", self.runtime.base_account());
        self.fetch_list().await;
    }

    /// Replaces the cached list with the remote one, or with [`ViewState::Uninitialized`] if the
    /// fetch fails for any reason.
    pub async fn fetch_list(&mut self) {
        match self.runtime.fetch().await {
            Ok(account) => {
                print_kv!(
                    "Got the account",
                    format!("{} entries", account.gif_list.len()),
                    LogColor::Success
                );
                self.view = ViewState::from(&account);
            }
            Err(e) => {
                eprint_kv!("Error fetching list", format!("{e:#}"));
                self.view = ViewState::Uninitialized;
            }
        }
    }

    pub async fn refresh(&mut self) {
        self.fetch_list().await;
    }

    /// Creates the base account. Retrying after a success fails remotely and is only logged.
    pub async fn initialize_account(&mut self) {
        let (Some(wallet), Some(user)) = (&self.wallet, self.session.identifier()) else {
            print_kv!("Initialize", "Connect a wallet first", LogColor::Warning);
            return;
        };

        match self.runtime.initialize(wallet, user).await {
            Ok(signature) => {
                print_kv!(
                    "Created a new base account",
                    self.runtime.base_account(),
                    LogColor::Success
                );
                print_kv!("Signature", signature);
                self.fetch_list().await;
            }
            Err(e) => eprint_kv!("Error creating base account", format!("{e:#}")),
        }
    }

    /// Submits the current input. The input is kept as is whether or not the submission lands.
    pub async fn submit(&mut self) {
        let link = self.input.clone();
        self.append_entry(&link).await;
    }

    /// Appends `link` to the remote list and re-fetches it. Blank links never reach the runtime.
    pub async fn append_entry(&mut self, link: &str) {
        if link.trim().is_empty() {
            print_kv!("Submit", "No link given!", LogColor::Warning);
            return;
        }

        let (Some(wallet), Some(user)) = (&self.wallet, self.session.identifier()) else {
            print_kv!("Submit", "Connect a wallet first", LogColor::Warning);
            return;
        };
        print_kv!("Link", link);

        match self.runtime.append(wallet, user, link).await {
            Ok(signature) => {
                print_kv!("Link successfully sent", link, LogColor::Success);
                print_kv!("Signature", signature);
                self.fetch_list().await;
            }
            Err(e) => eprint_kv!("Error sending link", format!("{e:#}")),
        }
    }
}
