//! Anchor-style discriminators used by the GIF portal program.
//!
//! Instruction discriminators are the first 8 bytes of `sha256("global:<instruction_name>")` and
//! account discriminators the first 8 bytes of `sha256("account:<AccountName>")`.

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// `sha256("global:start_stuff_off")[..8]`
pub const START_STUFF_OFF: Discriminator = [126, 54, 85, 33, 226, 32, 195, 32];

/// `sha256("global:add_gif")[..8]`
pub const ADD_GIF: Discriminator = [171, 74, 141, 100, 33, 70, 87, 155];

/// `sha256("account:BaseAccount")[..8]`
pub const BASE_ACCOUNT: Discriminator = [16, 90, 130, 242, 159, 10, 232, 133];

/// Splits `data` into its leading discriminator and the remaining bytes, or returns `None` if
/// `data` is too short to hold one.
pub fn split_discriminator(data: &[u8]) -> Option<(Discriminator, &[u8])> {
    let (head, rest) = data.split_first_chunk::<DISCRIMINATOR_LEN>()?;
    Some((*head, rest))
}
