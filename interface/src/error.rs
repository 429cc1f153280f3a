//! Errors raised while interpreting the GIF portal base account on the client side.

#[derive(Clone, Debug, Eq, PartialEq, strum_macros::Display)]
pub enum StateError {
    #[strum(to_string = "Account isn't owned by the GIF portal program")]
    InvalidAccountOwner,
    #[strum(to_string = "Account data is too short to hold a discriminator")]
    InsufficientByteLength,
    #[strum(to_string = "Invalid account discriminant")]
    InvalidAccountDiscriminant,
    #[strum(to_string = "Account data couldn't be decoded")]
    InvalidAccountData,
}

impl std::error::Error for StateError {}

pub type StateResult<T> = Result<T, StateError>;
