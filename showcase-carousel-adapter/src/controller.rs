use showcase_carousel::{
    CarouselOptions, Engine, Filter, FrameGeometry, PointerEventKind, SectionId, Snapshot, Tick,
    ViewportMode, pad2,
};

use crate::{CounterSlot, GalleryHost, ListenerId, PointerBinding};

/// Owns one section's [`Engine`] together with the pointer listeners that drive it.
///
/// A controller is built for one viewport mode and torn down (never mutated into another mode)
/// when the viewport crosses the breakpoint. [`SectionController::teardown`] stops the engine and
/// detaches its listeners before the controller is discarded.
#[derive(Debug)]
pub struct SectionController {
    id: SectionId,
    engine: Engine,
    binding: PointerBinding,
}

impl SectionController {
    /// Lays out `snapshot` into the section, publishes its counters, and arms the engine.
    ///
    /// Returns `None` without touching the page when the section's track or container is
    /// missing.
    pub fn build<H: GalleryHost + ?Sized>(
        host: &mut H,
        id: &str,
        snapshot: &Snapshot,
        filter: &Filter,
        viewport: ViewportMode,
        options: CarouselOptions,
    ) -> Option<Self> {
        if !host.has_track(id) || host.container_rect(id).is_none() {
            awarn!(section = id, "SectionController: track or container missing");
            return None;
        }

        let engine = Engine::new(snapshot, filter, viewport, options);
        host.render_track(id, engine.track());

        let mut controller = Self {
            id: id.into(),
            engine,
            binding: PointerBinding::new(id),
        };
        controller.publish_totals(host);

        if viewport.is_wide() {
            host.set_section_shown(id, true);
            controller.set_pointer_controls(host, true);
            controller.recenter(host);
            controller.engine.start();
        } else {
            controller.engine.stop();
            let shown = controller.engine.track().visible_count() > 0;
            host.set_section_shown(id, shown);
            host.clear_motion(id);
        }

        adebug!(
            section = id,
            live = controller.engine.track().len(),
            wide = viewport.is_wide(),
            "SectionController::build"
        );
        Some(controller)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn is_pointer_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// Writes the total and item count for the current live track.
    pub fn publish_totals<H: GalleryHost + ?Sized>(&self, host: &mut H) {
        let totals = self.engine.totals();
        host.write_counter(&self.id, CounterSlot::Total, &totals.total_text());
        host.write_counter(&self.id, CounterSlot::ItemCount, &totals.item_count_text());
    }

    /// Re-centers the engine on the middle copy using the freshly measured track width.
    pub fn recenter<H: GalleryHost + ?Sized>(&mut self, host: &H) {
        if let Some(measure) = host.measure_track(&self.id) {
            self.engine.reset_position(measure.track_width);
        }
    }

    /// Attaches (or, with `enabled = false`, only detaches) the pointer listener pair.
    ///
    /// Pointer control is only ever enabled for tripled layouts.
    pub fn set_pointer_controls<H: GalleryHost + ?Sized>(
        &mut self,
        host: &mut H,
        enabled: bool,
    ) -> bool {
        let enabled = enabled && self.engine.track().is_tripled();
        self.binding.bind(host, enabled)
    }

    /// Runs one animation step. Returns `true` while the engine wants another frame.
    pub fn tick<H: GalleryHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.engine.is_animating() {
            return false;
        }
        let Some(measure) = host.measure_track(&self.id) else {
            return true;
        };
        let geometry = FrameGeometry {
            track_width: measure.track_width,
            viewport_width: host.viewport_width(),
            track_left: measure.track_left,
            cards: &measure.cards,
        };
        let tick = self.engine.tick(&geometry);
        match &tick {
            Tick::Rendered(frame) => {
                host.apply_frame(&self.id, frame);
                if let Some(index) = frame.current_index {
                    host.write_counter(&self.id, CounterSlot::Current, &pad2(index));
                }
            }
            Tick::Idle => host.clear_motion(&self.id),
            Tick::Skipped | Tick::Stopped => {}
        }
        tick.wants_next_frame()
    }

    /// Routes a pointer event delivered to `listener`.
    ///
    /// Returns `false` for handles this controller does not currently own.
    pub fn on_pointer<H: GalleryHost + ?Sized>(
        &mut self,
        host: &H,
        listener: ListenerId,
        pointer_x: f32,
    ) -> bool {
        match self.binding.kind_of(listener) {
            Some(PointerEventKind::Move) => {
                let Some(container) = host.container_rect(&self.id) else {
                    return false;
                };
                self.engine.pointer_moved(container, pointer_x);
                true
            }
            Some(PointerEventKind::Leave) => {
                self.engine.pointer_left();
                true
            }
            None => {
                atrace!(section = %self.id, listener, "SectionController: stale listener");
                false
            }
        }
    }

    /// Stops the engine and detaches its listeners.
    pub fn teardown<H: GalleryHost + ?Sized>(mut self, host: &mut H) {
        self.engine.stop();
        self.binding.release(host);
    }
}
