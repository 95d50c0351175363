use alloc::vec::Vec;

use showcase_carousel::{Card, Frame, LiveTrack, PointerEventKind, SectionId, Span};

/// Handle of a pointer listener registered with the host.
pub type ListenerId = u64;

/// Text slots a section may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterSlot {
    /// Index of the card closest to the viewport center (`"03"`).
    Current,
    /// Zero-padded total (`"04"`).
    Total,
    /// Plain item count (`"4"`).
    ItemCount,
}

/// Track geometry reported by the host for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackMeasure {
    /// Full scroll width of the track, all copies included.
    pub track_width: f32,
    /// Left edge of the untranslated track in viewport coordinates.
    pub track_left: f32,
    /// Visible cards in track order, in track-local coordinates.
    pub cards: Vec<Span>,
}

/// The page the gallery lives on.
///
/// Implementations wrap a real UI (DOM, TUI, ...) or a test double. Every method that targets a
/// section must tolerate missing elements: reads return `None` and writes do nothing.
pub trait GalleryHost {
    fn viewport_width(&self) -> f32;

    /// Gallery sections on the page, in document order.
    fn section_ids(&self) -> Vec<SectionId>;

    /// The section's current track content, or `None` when the track element is missing.
    fn read_cards(&self, section: &str) -> Option<Vec<Card>>;

    fn has_track(&self, section: &str) -> bool {
        self.read_cards(section).is_some()
    }

    /// The section's showcase container, or `None` when it is missing.
    fn container_rect(&self, section: &str) -> Option<Span>;

    /// Replaces the section's track content with `track` (content, hidden flags, display mode).
    fn render_track(&mut self, section: &str, track: &LiveTrack);

    fn set_section_shown(&mut self, section: &str, shown: bool);

    fn measure_track(&self, section: &str) -> Option<TrackMeasure>;

    fn apply_frame(&mut self, section: &str, frame: &Frame);

    /// Clears track translation and per-card transform/opacity.
    fn clear_motion(&mut self, section: &str);

    fn write_counter(&mut self, section: &str, slot: CounterSlot, text: &str);

    /// Registers a pointer listener on the section's container.
    ///
    /// Returns `None` if the container is missing.
    fn add_pointer_listener(
        &mut self,
        section: &str,
        kind: PointerEventKind,
    ) -> Option<ListenerId>;

    fn remove_pointer_listener(&mut self, section: &str, id: ListenerId);
}
