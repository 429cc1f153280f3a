//! The wallet side of the portal: a provider that hands out the user's address once the user has
//! approved the connection, and signs transactions on their behalf.

use std::{
    cell::Cell,
    fmt,
    path::{
        Path,
        PathBuf,
    },
};

use solana_address::Address;
use solana_sdk::{
    signature::{
        Keypair,
        Signer,
    },
    signer::SignerError,
    transaction::Transaction,
};

use crate::config::read_keypair_file;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Only connect if the user already approved this app; never prompt.
    pub only_if_trusted: bool,
}

impl ConnectOptions {
    pub fn only_if_trusted() -> Self {
        Self {
            only_if_trusted: true,
        }
    }
}

#[derive(Debug)]
pub enum WalletError {
    /// A silent connect was requested but the user never approved this app.
    NotTrusted,
    /// The user declined the connection request.
    Rejected,
    /// Signing was requested before a successful connect.
    NotConnected,
    Signing(SignerError),
    Io(std::io::Error),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::NotTrusted => write!(f, "Wallet hasn't been approved for this app yet"),
            WalletError::Rejected => write!(f, "User rejected the request"),
            WalletError::NotConnected => write!(f, "Wallet isn't connected"),
            WalletError::Signing(e) => write!(f, "Couldn't sign transaction: {e}"),
            WalletError::Io(e) => write!(f, "Wallet storage error: {e}"),
        }
    }
}

impl std::error::Error for WalletError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalletError::Signing(e) => Some(e),
            WalletError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// A signing agent that authenticates the user to the remote program.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// A human readable name for logs.
    fn name(&self) -> &str;

    /// Requests the user's address. With [`ConnectOptions::only_if_trusted`] this never prompts
    /// and fails with [`WalletError::NotTrusted`] unless the user approved this app before.
    async fn connect(&self, options: ConnectOptions) -> Result<Address, WalletError>;

    /// Adds the wallet's signature to `transaction`, keeping any signatures already present.
    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError>;
}

/// A wallet backed by a keypair file on disk.
///
/// Approval is persisted as a marker file next to the keypair (`<keypair>.trusted`), so a later
/// session can reconnect silently.
pub struct KeypairWallet {
    keypair: Keypair,
    trust_marker: PathBuf,
    connected: Cell<bool>,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair, trust_marker: PathBuf) -> Self {
        Self {
            keypair,
            trust_marker,
            connected: Cell::new(false),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let keypair = read_keypair_file(path)?;
        Ok(Self::new(keypair, trust_marker_path(path)))
    }

    /// Whether the marker records approval of this wallet's address. A marker left by another
    /// keypair doesn't count.
    pub fn is_trusted(&self) -> bool {
        std::fs::read_to_string(&self.trust_marker)
            .is_ok_and(|approved| approved.trim() == self.address().to_string())
    }

    pub fn address(&self) -> Address {
        self.keypair.pubkey()
    }
}

/// `id.json` -> `id.json.trusted`.
pub fn trust_marker_path(keypair_path: &Path) -> PathBuf {
    let mut marker = keypair_path.as_os_str().to_owned();
    marker.push(".trusted");
    PathBuf::from(marker)
}

impl WalletProvider for KeypairWallet {
    fn name(&self) -> &str {
        "keypair wallet"
    }

    async fn connect(&self, options: ConnectOptions) -> Result<Address, WalletError> {
        if !self.is_trusted() {
            if options.only_if_trusted {
                return Err(WalletError::NotTrusted);
            }
            // Running the explicit connect command is the user's approval.
            std::fs::write(&self.trust_marker, self.address().to_string())
                .map_err(WalletError::Io)?;
        }

        self.connected.set(true);
        Ok(self.address())
    }

    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        if !self.connected.get() {
            return Err(WalletError::NotConnected);
        }

        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&self.keypair], blockhash)
            .map_err(WalletError::Signing)
    }
}

#[cfg(test)]
mod tests {
    use solana_instruction::{
        AccountMeta,
        Instruction,
    };
    use solana_sdk::{
        hash::Hash,
        message::Message,
    };

    use super::*;

    fn temp_marker(tag: &str) -> PathBuf {
        let marker = std::env::temp_dir().join(format!(
            "gif-portal-{tag}-{}.trusted",
            Keypair::new().pubkey()
        ));
        let _ = std::fs::remove_file(&marker);
        marker
    }

    #[tokio::test]
    async fn silent_connect_requires_trust() {
        let marker = temp_marker("silent");
        let wallet = KeypairWallet::new(Keypair::new(), marker.clone());

        let err = wallet
            .connect(ConnectOptions::only_if_trusted())
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::NotTrusted));
        assert!(!marker.exists());

        let address = wallet.connect(ConnectOptions::default()).await.unwrap();
        assert_eq!(address, wallet.address());
        assert!(wallet.is_trusted());

        // A fresh wallet over the same keypair file location now reconnects silently.
        let again = KeypairWallet::new(wallet.keypair.insecure_clone(), marker.clone());
        assert_eq!(
            again
                .connect(ConnectOptions::only_if_trusted())
                .await
                .unwrap(),
            address
        );

        std::fs::remove_file(marker).unwrap();
    }

    #[tokio::test]
    async fn marker_from_another_key_is_not_trusted() {
        let marker = temp_marker("other");
        let approved = KeypairWallet::new(Keypair::new(), marker.clone());
        approved.connect(ConnectOptions::default()).await.unwrap();

        let stranger = KeypairWallet::new(Keypair::new(), marker.clone());
        assert!(!stranger.is_trusted());
        assert!(matches!(
            stranger.connect(ConnectOptions::only_if_trusted()).await,
            Err(WalletError::NotTrusted)
        ));

        // Approving the second key moves the marker over to it.
        stranger.connect(ConnectOptions::default()).await.unwrap();
        assert!(stranger.is_trusted());
        assert!(!approved.is_trusted());

        std::fs::remove_file(marker).unwrap();
    }

    #[tokio::test]
    async fn from_file_marks_next_to_the_keypair() {
        let keypair = Keypair::new();
        let path = std::env::temp_dir().join(format!("gif-portal-{}.json", keypair.pubkey()));
        std::fs::write(&path, serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap())
            .unwrap();

        let wallet = KeypairWallet::from_file(&path).unwrap();
        let marker = trust_marker_path(&path);
        assert_eq!(
            marker.file_name().unwrap().to_str().unwrap(),
            format!("gif-portal-{}.json.trusted", keypair.pubkey())
        );

        wallet.connect(ConnectOptions::default()).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&marker).unwrap(),
            keypair.pubkey().to_string()
        );

        std::fs::remove_file(marker).unwrap();
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn signs_only_after_connect() {
        let marker = temp_marker("sign");
        let wallet = KeypairWallet::new(Keypair::new(), marker.clone());
        let co_signer = Keypair::new();

        let ix = Instruction::new_with_bytes(
            Address::new_unique(),
            &[],
            vec![
                AccountMeta::new(co_signer.pubkey(), true),
                AccountMeta::new(wallet.address(), true),
            ],
        );
        let mut tx = Transaction::new_unsigned(Message::new(&[ix], Some(&wallet.address())));
        tx.try_partial_sign(&[&co_signer], Hash::default()).unwrap();
        assert!(!tx.is_signed());

        assert!(matches!(
            wallet.sign_transaction(&mut tx).await,
            Err(WalletError::NotConnected)
        ));

        wallet.connect(ConnectOptions::default()).await.unwrap();
        wallet.sign_transaction(&mut tx).await.unwrap();
        assert!(tx.is_signed());

        std::fs::remove_file(marker).unwrap();
    }
}
