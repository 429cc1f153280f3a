//! Read-only projections of the remote list used by the portal and the renderer.

use gif_portal_interface::state::{
    BaseAccount,
    Entry,
};
use solana_address::Address;

/// The wallet session. Set on the first successful connect and kept for the process lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identifier: Option<Address>,
}

impl Session {
    pub fn identifier(&self) -> Option<Address> {
        self.identifier
    }

    pub fn is_active(&self) -> bool {
        self.identifier.is_some()
    }

    pub(crate) fn set(&mut self, identifier: Address) {
        self.identifier = Some(identifier);
    }
}

/// The portal's cached copy of the remote list.
///
/// `Uninitialized` covers both "the base account doesn't exist yet" and "the last fetch failed";
/// the portal can't tell them apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    NotFetched,
    Uninitialized,
    Loaded(Vec<EntryView>),
}

impl ViewState {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, ViewState::Uninitialized)
    }

    pub fn entries(&self) -> Option<&[EntryView]> {
        match self {
            ViewState::Loaded(entries) => Some(entries),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub link: String,
    pub submitter: Address,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        Self {
            link: entry.gif_link.clone(),
            submitter: entry.user_address,
        }
    }
}

impl From<&BaseAccount> for ViewState {
    fn from(account: &BaseAccount) -> Self {
        ViewState::Loaded(account.gif_list.iter().map(EntryView::from).collect())
    }
}

/// One image cell in the grid. Cells are keyed by their position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub key: usize,
    pub src: &'a str,
}

pub fn grid_cells(entries: &[EntryView]) -> impl Iterator<Item = GridCell<'_>> {
    entries.iter().enumerate().map(|(key, entry)| GridCell {
        key,
        src: &entry.link,
    })
}
