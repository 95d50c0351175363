use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::key::SectionMap;
use crate::{Card, SectionId};

/// The pristine content of one section, captured before any mutation.
///
/// Snapshots are immutable and cheap to clone; every layout is rebuilt from one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    cards: Arc<[Card]>,
}

impl Snapshot {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect::<Vec<_>>().into(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}

/// Discovers gallery sections and keeps their pristine snapshots.
///
/// Capture is first-write-wins: once a section has a snapshot, later captures for the same
/// section are ignored even if the live content has since changed.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    snapshots: SectionMap<Snapshot>,
    order: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `live` as the section's snapshot unless one already exists.
    ///
    /// `live` is only evaluated when a capture actually happens. Returns `true` when a new
    /// snapshot was recorded.
    pub fn capture(&mut self, id: &str, live: impl FnOnce() -> Vec<Card>) -> bool {
        if self.snapshots.contains_key(id) {
            return false;
        }
        let snapshot = Snapshot::new(live());
        cdebug!(section = id, cards = snapshot.len(), "SectionRegistry::capture");
        self.snapshots.insert(id.into(), snapshot);
        self.order.push(id.into());
        true
    }

    /// Captures every section in `sections` that has no snapshot yet.
    ///
    /// Idempotent. Returns the number of newly captured sections.
    pub fn capture_all(
        &mut self,
        sections: impl IntoIterator<Item = (SectionId, Vec<Card>)>,
    ) -> usize {
        let mut captured = 0usize;
        for (id, cards) in sections {
            if self.capture(&id, || cards) {
                captured += 1;
            }
        }
        captured
    }

    pub fn is_captured(&self, id: &str) -> bool {
        self.snapshots.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Snapshot> {
        self.snapshots.get(id)
    }

    /// Returns the pristine snapshot, or a snapshot of `live` if none was ever captured.
    ///
    /// The fallback only happens when a section was never registered, which indicates the
    /// adapter skipped `capture_all`.
    pub fn snapshot_or_live(&self, id: &str, live: impl FnOnce() -> Vec<Card>) -> Snapshot {
        if let Some(snapshot) = self.snapshots.get(id) {
            return snapshot.clone();
        }
        cwarn!(
            section = id,
            "SectionRegistry: no pristine snapshot, falling back to live content"
        );
        Snapshot::new(live())
    }

    /// Section ids in discovery order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|id| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
