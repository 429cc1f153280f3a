//! Instruction builders for the two mutating calls the GIF portal program exposes.
//!
//! Each builder is a struct holding the instruction's accounts in the order the program expects
//! them, with a `create_instruction` method producing the final [`Instruction`].

use borsh::BorshSerialize;
use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

use crate::discriminator::{
    Discriminator,
    ADD_GIF,
    START_STUFF_OFF,
};

/// Creates the base account that holds the list. The program calls this `start_stuff_off`.
///
/// Both the base account and the user must sign: the base account because it is being created at
/// its own address, the user because they pay for it.
#[rustfmt::skip]
pub struct Initialize {
    /// The base account to create. Writable, signer.
    pub base_account:   Address,
    /// The user paying for the account. Writable, signer.
    pub user:           Address,
    /// The system program.
    pub system_program: Address,
}

impl Initialize {
    pub fn create_instruction(&self, program_id: Address) -> Instruction {
        Instruction::new_with_bytes(
            program_id,
            &START_STUFF_OFF,
            vec![
                AccountMeta::new(self.base_account, true),
                AccountMeta::new(self.user, true),
                AccountMeta::new_readonly(self.system_program, false),
            ],
        )
    }
}

/// Appends a link to the base account's list. The program calls this `add_gif`.
#[rustfmt::skip]
pub struct AddEntry {
    /// The base account holding the list. Writable.
    pub base_account: Address,
    /// The user submitting the link. Writable, signer.
    pub user:         Address,
}

impl AddEntry {
    pub fn create_instruction(
        &self,
        program_id: Address,
        data: AddEntryInstructionData,
    ) -> Instruction {
        Instruction::new_with_bytes(
            program_id,
            &data.pack(),
            vec![
                AccountMeta::new(self.base_account, false),
                AccountMeta::new(self.user, true),
            ],
        )
    }
}

/// Arguments of the `add_gif` instruction.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize)]
pub struct AddEntryInstructionData {
    pub gif_link: String,
}

impl AddEntryInstructionData {
    pub fn new(gif_link: impl Into<String>) -> Self {
        Self {
            gif_link: gif_link.into(),
        }
    }

    /// Packs the discriminator and the Borsh encoded arguments into instruction data bytes.
    pub fn pack(&self) -> Vec<u8> {
        pack_with_discriminator(ADD_GIF, self)
    }
}

fn pack_with_discriminator(discriminator: Discriminator, args: &impl BorshSerialize) -> Vec<u8> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .expect("Should serialize into a Vec");
    data
}
