use alloc::string::String;
use alloc::vec::Vec;

use crate::{Card, DisplayMode, Filter, LayoutMode, Snapshot, ViewportMode};

/// One card slot in the live track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveCard {
    /// Index of the card in the pristine snapshot.
    pub source: usize,
    /// Which copy of the snapshot this slot belongs to (`0..copies`).
    pub copy: usize,
    pub hidden: bool,
}

/// The live content of a section: the snapshot laid out for one viewport mode and filter.
///
/// A `LiveTrack` is always produced from a [`Snapshot`] by [`layout`]; it is never edited
/// incrementally apart from re-applying a filter, which only touches hidden flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveTrack {
    snapshot: Snapshot,
    mode: LayoutMode,
    cards: Vec<LiveCard>,
}

/// Lays out `snapshot` for `viewport`, then applies `filter`.
///
/// Wide viewports get three back-to-back copies (the middle one is the home segment), narrow
/// viewports get exactly one. The result depends only on the three inputs.
pub fn layout(snapshot: &Snapshot, filter: &Filter, viewport: ViewportMode) -> LiveTrack {
    let mode = viewport.layout_mode();
    let copies = mode.copies();
    let mut cards = Vec::with_capacity(snapshot.len() * copies);
    for copy in 0..copies {
        for source in 0..snapshot.len() {
            cards.push(LiveCard {
                source,
                copy,
                hidden: false,
            });
        }
    }

    let mut track = LiveTrack {
        snapshot: snapshot.clone(),
        mode,
        cards,
    };
    track.apply_filter(filter);
    track
}

impl LiveTrack {
    /// Recomputes every hidden flag from `filter`. Returns the visible count.
    pub fn apply_filter(&mut self, filter: &Filter) -> usize {
        let snapshot = &self.snapshot;
        let mut visible = 0usize;
        for slot in &mut self.cards {
            let category = snapshot
                .card(slot.source)
                .map(|c| c.category.as_str())
                .unwrap_or_default();
            slot.hidden = !filter.matches(category);
            if !slot.hidden {
                visible += 1;
            }
        }
        visible
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn is_tripled(&self) -> bool {
        self.mode == LayoutMode::Tripled
    }

    pub fn display(&self) -> DisplayMode {
        self.mode.display()
    }

    pub fn slots(&self) -> &[LiveCard] {
        &self.cards
    }

    /// Number of card slots, hidden ones included.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.hidden).count()
    }

    /// Visible cards per snapshot copy, never less than one.
    ///
    /// Every copy carries the same hidden pattern, so for a tripled track this is exact.
    pub fn visible_per_copy(&self) -> usize {
        (self.visible_count() / self.mode.copies()).max(1)
    }

    /// The card content behind a slot.
    pub fn card(&self, slot: usize) -> Option<&Card> {
        self.cards
            .get(slot)
            .and_then(|s| self.snapshot.card(s.source))
    }

    /// Slot indexes of the visible cards, in track order.
    pub fn visible_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.hidden)
            .map(|(i, _)| i)
    }

    /// Concatenated markup of every slot, hidden ones included.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for slot in &self.cards {
            if let Some(card) = self.snapshot.card(slot.source) {
                out.push_str(&card.markup);
            }
        }
        out
    }
}
