use std::path::Path;

use anyhow::Context;
use gif_portal_client::config::{
    parse_keypair,
    read_keypair_file,
};
use solana_sdk::signature::Keypair;

pub const BASE_ACCOUNT_ENV: &str = "GIF_PORTAL_BASE_ACCOUNT";

/// Loads the base account keypair from `path` if given, otherwise from the
/// [`BASE_ACCOUNT_ENV`] environment variable as a JSON byte array or a base58 string.
pub fn base_account_keypair(path: Option<&Path>) -> anyhow::Result<Keypair> {
    if let Some(path) = path {
        return read_keypair_file(path);
    }

    let kp_str = std::env::var(BASE_ACCOUNT_ENV).with_context(|| {
        format!("Environment variable {BASE_ACCOUNT_ENV} must be set when --base-account isn't passed")
    })?;
    parse_keypair(&kp_str).with_context(|| format!("Invalid {BASE_ACCOUNT_ENV}"))
}
