use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a FAQ entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaqId(pub u32);

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single question/answer pair. List order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisclosureError {
    #[error("no FAQ entry with id {0}")]
    UnknownEntry(FaqId),
}

/// Single-open accordion state.
///
/// Holds at most one active id. The accordion may be fully collapsed, but two
/// entries can never be expanded at once because only one id is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    ids: Vec<FaqId>,
    active: Option<FaqId>,
}

impl Accordion {
    /// Mount state: the first entry is pre-expanded.
    pub fn new(entries: &[FaqEntry]) -> Self {
        let ids: Vec<FaqId> = entries.iter().map(|e| e.id).collect();
        let active = ids.first().copied();
        Self { ids, active }
    }

    pub fn active(&self) -> Option<FaqId> {
        self.active
    }

    pub fn is_expanded(&self, id: FaqId) -> bool {
        self.active == Some(id)
    }

    /// Close `id` if it is the open entry, otherwise open it (closing any
    /// other). Returns the new active id.
    pub fn toggle(&mut self, id: FaqId) -> Result<Option<FaqId>, DisclosureError> {
        if !self.ids.contains(&id) {
            return Err(DisclosureError::UnknownEntry(id));
        }
        self.active = if self.active == Some(id) { None } else { Some(id) };
        Ok(self.active)
    }

    /// The currently open entry within `entries`, if any.
    pub fn expanded_entry<'a>(&self, entries: &'a [FaqEntry]) -> Option<&'a FaqEntry> {
        let active = self.active?;
        entries.iter().find(|e| e.id == active)
    }

    /// Entries paired with their expanded flag, in display order.
    pub fn rows<'a>(
        &'a self,
        entries: &'a [FaqEntry],
    ) -> impl Iterator<Item = (&'a FaqEntry, bool)> + 'a {
        entries.iter().map(move |e| (e, self.is_expanded(e.id)))
    }
}
