//! Public interface of the GIF portal program: instruction builders, the base account layout, and
//! the errors raised while decoding it on the client side.
//!
//! The program itself lives outside this repository. Everything here mirrors its wire format:
//! Anchor-style 8-byte discriminators followed by Borsh-encoded arguments or account state.

pub mod discriminator;
pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    use solana_address::Address;
    use solana_sdk::pubkey;

    /// The default address of the GIF portal program.
    pub const ID: Address = pubkey!("3QUh3fGbBFjmRdd1KU9eQGsQrP8d1UyFVGXjeC781Xzz");
}

pub const SYSTEM_PROGRAM_ID: solana_address::Address =
    solana_sdk::pubkey!("11111111111111111111111111111111");
