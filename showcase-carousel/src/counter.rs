use alloc::format;
use alloc::string::String;

use crate::LiveTrack;

/// The human-readable counts derived from a live track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Totals {
    /// Items per logical copy of the content.
    pub total: usize,
}

impl Totals {
    /// Derives totals from `track`.
    ///
    /// A tripled track reports a third of its visible cards, floored at one so a track caught
    /// mid-rebuild never reads as empty. A single track reports its visible cards as-is.
    pub fn of(track: &LiveTrack) -> Self {
        let visible = track.visible_count();
        let total = if track.is_tripled() {
            (visible / 3).max(1)
        } else {
            visible
        };
        Self { total }
    }

    /// Zero-padded two-digit total, e.g. `"04"`.
    pub fn total_text(&self) -> String {
        pad2(self.total)
    }

    /// Plain item count, e.g. `"4"`.
    pub fn item_count_text(&self) -> String {
        format!("{}", self.total)
    }
}

/// Formats `n` zero-padded to at least two digits.
pub fn pad2(n: usize) -> String {
    format!("{n:02}")
}
