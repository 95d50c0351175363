use showcase_carousel::{PointerEventKind, SectionId};

use crate::{GalleryHost, ListenerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ListenerPair {
    on_move: ListenerId,
    on_leave: ListenerId,
}

/// The pointer listeners one section controller owns.
///
/// At most one move/leave pair is attached at a time: binding always releases the previous pair
/// first. A binding that is dropped while still attached logs a warning; call
/// [`PointerBinding::release`] before discarding it.
#[derive(Debug)]
pub struct PointerBinding {
    section: SectionId,
    pair: Option<ListenerPair>,
}

impl PointerBinding {
    pub fn new(section: impl Into<SectionId>) -> Self {
        Self {
            section: section.into(),
            pair: None,
        }
    }

    /// Releases any attached pair, then attaches a new one when `enabled`.
    ///
    /// Returns `true` when a pair is attached afterwards. If the host can only attach one of the
    /// two listeners, that one is removed again and nothing stays attached.
    pub fn bind<H: GalleryHost + ?Sized>(&mut self, host: &mut H, enabled: bool) -> bool {
        self.release(host);
        if !enabled {
            return false;
        }

        let on_move = host.add_pointer_listener(&self.section, PointerEventKind::Move);
        let on_leave = host.add_pointer_listener(&self.section, PointerEventKind::Leave);
        match (on_move, on_leave) {
            (Some(on_move), Some(on_leave)) => {
                atrace!(section = %self.section, on_move, on_leave, "PointerBinding::bind");
                self.pair = Some(ListenerPair { on_move, on_leave });
                true
            }
            (on_move, on_leave) => {
                awarn!(section = %self.section, "PointerBinding: container missing");
                for id in on_move.into_iter().chain(on_leave) {
                    host.remove_pointer_listener(&self.section, id);
                }
                false
            }
        }
    }

    /// Detaches the attached pair, if any.
    pub fn release<H: GalleryHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(pair) = self.pair.take() {
            host.remove_pointer_listener(&self.section, pair.on_move);
            host.remove_pointer_listener(&self.section, pair.on_leave);
        }
    }

    pub fn is_bound(&self) -> bool {
        self.pair.is_some()
    }

    /// Which event a listener handle belongs to, or `None` for handles this binding does not own.
    pub fn kind_of(&self, id: ListenerId) -> Option<PointerEventKind> {
        let pair = self.pair?;
        if id == pair.on_move {
            Some(PointerEventKind::Move)
        } else if id == pair.on_leave {
            Some(PointerEventKind::Leave)
        } else {
            None
        }
    }
}

impl Drop for PointerBinding {
    fn drop(&mut self) {
        if self.pair.is_some() {
            awarn!(
                section = %self.section,
                "PointerBinding dropped while listeners are still attached"
            );
        }
    }
}
