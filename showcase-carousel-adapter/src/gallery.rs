use alloc::vec::Vec;

use showcase_carousel::{Filter, SectionId, SectionRegistry, ViewportMode};

use crate::{GalleryHost, GalleryOptions, ListenerId, ResizeDebouncer, SectionController};

/// The gallery context: shared filter, viewport mode, pristine snapshots, and one controller per
/// section.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `init` once the page is ready
/// - `select_filter` / `on_resize` / `on_pointer` when UI events occur
/// - `poll(now_ms)` from a timer (settles debounced resizes)
/// - `frame()` from the display-refresh callback, rescheduling while it returns `true`
///
/// Every rebuild starts from the snapshots captured in `init`, never from live page content.
#[derive(Debug)]
pub struct Gallery {
    options: GalleryOptions,
    registry: SectionRegistry,
    filter: Filter,
    mode: ViewportMode,
    resize: ResizeDebouncer,
    sections: Vec<SectionController>,
}

impl Gallery {
    pub fn new(options: GalleryOptions) -> Self {
        Self {
            resize: ResizeDebouncer::new(0.0, options.resize_quiet_ms),
            options,
            registry: SectionRegistry::new(),
            filter: Filter::All,
            mode: ViewportMode::Narrow,
            sections: Vec::new(),
        }
    }

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn sections(&self) -> impl Iterator<Item = &SectionController> + '_ {
        self.sections.iter()
    }

    pub fn section(&self, id: &str) -> Option<&SectionController> {
        self.sections.iter().find(|s| s.id() == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut SectionController> {
        self.sections.iter_mut().find(|s| s.id() == id)
    }

    pub fn is_animating(&self) -> bool {
        self.sections.iter().any(|s| s.engine().is_animating())
    }

    /// Snapshots every section and builds its controller for the current viewport.
    ///
    /// Calling `init` again rebuilds from the snapshots already taken. Returns the number of
    /// sections with a live controller.
    pub fn init<H: GalleryHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let width = host.viewport_width();
        self.mode = ViewportMode::from_width(width, self.options.breakpoint);
        self.resize = ResizeDebouncer::new(width, self.options.resize_quiet_ms);
        self.capture_all(host);
        self.rebuild(host);
        self.sections.len()
    }

    /// Snapshots sections not seen before. Returns how many were captured.
    fn capture_all<H: GalleryHost + ?Sized>(&mut self, host: &H) -> usize {
        let ids = host.section_ids();
        let registry = &self.registry;
        let pending = ids.into_iter().filter(|id| !registry.is_captured(id)).filter_map(|id| {
            let cards = host.read_cards(&id);
            if cards.is_none() {
                awarn!(section = %id, "Gallery: section has no track");
            }
            cards.map(|cards| (id, cards))
        });
        let pending: Vec<_> = pending.collect();
        let captured = self.registry.capture_all(pending);
        adebug!(captured, total = self.registry.len(), "Gallery::capture_all");
        captured
    }

    /// Tears down every controller and rebuilds it from its pristine snapshot.
    pub fn rebuild<H: GalleryHost + ?Sized>(&mut self, host: &mut H) {
        for controller in self.sections.drain(..) {
            controller.teardown(host);
        }

        let ids: Vec<SectionId> = self.registry.section_ids().map(Into::into).collect();
        for id in ids {
            let snapshot = self
                .registry
                .snapshot_or_live(&id, || host.read_cards(&id).unwrap_or_default());
            if let Some(controller) = SectionController::build(
                host,
                &id,
                &snapshot,
                &self.filter,
                self.mode,
                self.options.carousel,
            ) {
                self.sections.push(controller);
            }
        }
        adebug!(
            sections = self.sections.len(),
            wide = self.mode.is_wide(),
            filter = self.filter.as_str(),
            "Gallery::rebuild"
        );
    }

    /// Makes `filter` the active filter for every section and rebuilds them.
    pub fn select_filter<H: GalleryHost + ?Sized>(&mut self, host: &mut H, filter: Filter) {
        adebug!(filter = filter.as_str(), "Gallery::select_filter");
        self.filter = filter;
        self.rebuild(host);
    }

    /// Records a resize event. Nothing happens until [`Gallery::poll`] settles it.
    pub fn on_resize(&mut self, width: f32, now_ms: u64) {
        self.resize.on_resize(width, now_ms);
    }

    /// Settles a pending resize. Returns `true` if it crossed the breakpoint and every section was
    /// rebuilt.
    pub fn poll<H: GalleryHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) -> bool {
        let Some(settled) = self.resize.poll(now_ms) else {
            return false;
        };
        if !settled.crosses(self.options.breakpoint) {
            atrace!(from = settled.from, to = settled.to, "Gallery: resize within mode");
            return false;
        }
        self.mode = ViewportMode::from_width(settled.to, self.options.breakpoint);
        adebug!(
            from = settled.from,
            to = settled.to,
            wide = self.mode.is_wide(),
            "Gallery: breakpoint crossed"
        );
        self.rebuild(host);
        true
    }

    /// When the pending resize settles, if any. Useful for scheduling the `poll` timer.
    pub fn resize_due_ms(&self) -> Option<u64> {
        self.resize.due_ms()
    }

    /// Runs one display-refresh step for every section.
    ///
    /// Returns `true` while any engine wants another frame.
    pub fn frame<H: GalleryHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let mut again = false;
        for controller in &mut self.sections {
            again |= controller.tick(host);
        }
        again
    }

    /// Routes a pointer event from `listener` on a section's container.
    ///
    /// Returns `false` when the section is unknown or the listener is stale.
    pub fn on_pointer<H: GalleryHost + ?Sized>(
        &mut self,
        host: &H,
        section: &str,
        listener: ListenerId,
        pointer_x: f32,
    ) -> bool {
        match self.section_mut(section) {
            Some(controller) => controller.on_pointer(host, listener, pointer_x),
            None => false,
        }
    }

    /// Stops every engine and detaches every listener.
    pub fn teardown<H: GalleryHost + ?Sized>(&mut self, host: &mut H) {
        for controller in self.sections.drain(..) {
            controller.teardown(host);
        }
    }
}
