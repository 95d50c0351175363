use showcase_carousel::ViewportMode;

/// The width a burst of resize events settled on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettledResize {
    pub from: f32,
    pub to: f32,
}

impl SettledResize {
    /// Whether the resize moved the viewport across `breakpoint` in either direction.
    pub fn crosses(&self, breakpoint: f32) -> bool {
        ViewportMode::from_width(self.from, breakpoint)
            != ViewportMode::from_width(self.to, breakpoint)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingResize {
    width: f32,
    due_ms: u64,
}

/// Coalesces resize events into one settled width after a quiet period.
///
/// Every event restarts the quiet period. The adapter drives time by calling
/// [`ResizeDebouncer::poll`] from a timer or its frame loop.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    quiet_ms: u64,
    settled_width: f32,
    pending: Option<PendingResize>,
}

impl ResizeDebouncer {
    pub fn new(initial_width: f32, quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            settled_width: initial_width,
            pending: None,
        }
    }

    pub fn on_resize(&mut self, width: f32, now_ms: u64) {
        self.pending = Some(PendingResize {
            width,
            due_ms: now_ms.saturating_add(self.quiet_ms),
        });
    }

    /// Returns the settled resize once the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<SettledResize> {
        let pending = self.pending?;
        if now_ms < pending.due_ms {
            return None;
        }
        self.pending = None;
        let from = self.settled_width;
        self.settled_width = pending.width;
        Some(SettledResize {
            from,
            to: pending.width,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending resize settles, if any.
    pub fn due_ms(&self) -> Option<u64> {
        self.pending.map(|p| p.due_ms)
    }

    pub fn settled_width(&self) -> f32 {
        self.settled_width
    }
}
