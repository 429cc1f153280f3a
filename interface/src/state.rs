//! See [`BaseAccount`].

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;

use crate::{
    discriminator::{
        split_discriminator,
        BASE_ACCOUNT,
    },
    error::{
        StateError,
        StateResult,
    },
};

/// The account holding the submitted list, as persisted by the program.
///
/// Its data is the [`BASE_ACCOUNT`] discriminator followed by the Borsh encoding of this struct.
/// The program allocates more space than the encoding needs, so trailing bytes are expected and
/// ignored when decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BaseAccount {
    /// Running count of appended entries.
    pub total_gifs: u64,
    pub gif_list: Vec<Entry>,
}

/// A single submitted link and the address of the user who submitted it.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Entry {
    pub gif_link: String,
    pub user_address: Address,
}

impl Entry {
    pub fn new(gif_link: impl Into<String>, user_address: Address) -> Self {
        Self {
            gif_link: gif_link.into(),
            user_address,
        }
    }
}

impl BaseAccount {
    /// Decodes a base account from raw account fields.
    ///
    /// Validates that:
    /// - `account_owner` matches `program_id`,
    /// - `account_data` starts with the [`BASE_ACCOUNT`] discriminator, and
    /// - the remaining bytes decode as a [`BaseAccount`].
    pub fn try_from_owner_and_data(
        program_id: &Address,
        account_owner: &Address,
        account_data: &[u8],
    ) -> StateResult<Self> {
        if account_owner != program_id {
            return Err(StateError::InvalidAccountOwner);
        }

        let (discriminator, mut body) =
            split_discriminator(account_data).ok_or(StateError::InsufficientByteLength)?;

        if discriminator != BASE_ACCOUNT {
            return Err(StateError::InvalidAccountDiscriminant);
        }

        // `deserialize` stops after the last field, which skips the unused trailing space.
        BaseAccount::deserialize(&mut body).map_err(|_| StateError::InvalidAccountData)
    }

    /// Packs the account into its on-chain representation, discriminator included.
    pub fn pack(&self) -> Vec<u8> {
        let mut data = BASE_ACCOUNT.to_vec();
        self.serialize(&mut data)
            .expect("Should serialize into a Vec");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program;

    fn sample() -> BaseAccount {
        let user = Address::new_unique();
        BaseAccount {
            total_gifs: 2,
            gif_list: vec![Entry::new("a.gif", user), Entry::new("b.gif", user)],
        }
    }

    #[test]
    fn decode_with_trailing_space() {
        let account = sample();
        let mut data = account.pack();
        data.extend_from_slice(&[0u8; 256]);

        let decoded =
            BaseAccount::try_from_owner_and_data(&program::ID, &program::ID, &data).unwrap();
        assert_eq!(decoded, account);
        assert_eq!(decoded.gif_list[0].gif_link, "a.gif");
        assert_eq!(
            decoded.gif_list[1].user_address,
            account.gif_list[1].user_address
        );
    }

    #[test]
    fn rejects_foreign_owner() {
        let data = sample().pack();
        let owner = Address::new_unique();
        assert_eq!(
            BaseAccount::try_from_owner_and_data(&program::ID, &owner, &data),
            Err(StateError::InvalidAccountOwner)
        );
    }

    #[test]
    fn rejects_short_and_mismatched_data() {
        assert_eq!(
            BaseAccount::try_from_owner_and_data(&program::ID, &program::ID, &[1, 2, 3]),
            Err(StateError::InsufficientByteLength)
        );

        let mut data = sample().pack();
        data[0] ^= 0xff;
        assert_eq!(
            BaseAccount::try_from_owner_and_data(&program::ID, &program::ID, &data),
            Err(StateError::InvalidAccountDiscriminant)
        );
    }

    #[test]
    fn rejects_truncated_body() {
        let data = sample().pack();
        let truncated = &data[..data.len() - 3];
        assert_eq!(
            BaseAccount::try_from_owner_and_data(&program::ID, &program::ID, truncated),
            Err(StateError::InvalidAccountData)
        );
    }

    #[test]
    fn submitter_is_raw_32_bytes() {
        let user = Address::new_unique();
        let mut data = BASE_ACCOUNT.to_vec();
        data.extend_from_slice(&1u64.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&5u32.to_le_bytes());
        data.extend_from_slice(b"a.gif");
        data.extend_from_slice(&user.to_bytes());

        let decoded =
            BaseAccount::try_from_owner_and_data(&program::ID, &program::ID, &data).unwrap();
        assert_eq!(decoded.gif_list, vec![Entry::new("a.gif", user)]);
        assert_eq!(decoded.pack(), data);
    }

    #[test]
    fn empty_list() {
        let data = BaseAccount::default().pack();
        let decoded =
            BaseAccount::try_from_owner_and_data(&program::ID, &program::ID, &data).unwrap();
        assert!(decoded.gif_list.is_empty());
        assert_eq!(decoded.total_gifs, 0);
    }
}
