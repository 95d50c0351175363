use alloc::vec::Vec;

use crate::{
    CarouselOptions, EngineState, Filter, LiveTrack, PointerResponse, Snapshot, Span, Totals,
    ViewportMode, layout,
};

/// Geometry a host reports for one frame.
///
/// All boxes are in CSS pixels. `cards` are the *visible* cards of the track, in track order, in
/// track-local coordinates (before the carousel translation is applied).
#[derive(Clone, Copy, Debug)]
pub struct FrameGeometry<'a> {
    /// Full scroll width of the track (all copies).
    pub track_width: f32,
    pub viewport_width: f32,
    /// Left edge of the untranslated track in viewport coordinates.
    pub track_left: f32,
    pub cards: &'a [Span],
}

/// Per-card 3-D styling for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardVisual {
    /// Slot index in the live track.
    pub slot: usize,
    pub rotate_y_deg: f32,
    pub translate_z: f32,
    pub opacity: f32,
}

/// Output of one rendered tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Track translation, rounded to whole pixels.
    pub translate_x: f32,
    /// Styling for visible cards that intersect the viewport.
    pub cards: Vec<CardVisual>,
    /// 1-based index of the card closest to the viewport center, within one copy.
    pub current_index: Option<usize>,
}

/// What a call to [`Engine::tick`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum Tick {
    /// The engine is not animating; the loop must not be rescheduled.
    Stopped,
    /// Single layout: nothing moves. Hosts should clear any motion styles.
    Idle,
    /// Degenerate geometry (empty segment); motion skipped for this tick.
    Skipped,
    Rendered(Frame),
}

impl Tick {
    pub fn wants_next_frame(&self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

/// Per-section carousel state machine.
///
/// The engine owns the live track for one section plus the scroll state that animates it. It
/// does not hold any UI objects: hosts report geometry to [`Engine::tick`] and apply the returned
/// [`Frame`].
///
/// An engine is built for one viewport mode. On a breakpoint crossing it is discarded and a new
/// one is constructed from the section's pristine snapshot.
#[derive(Clone, Debug)]
pub struct Engine {
    options: CarouselOptions,
    pointer: PointerResponse,
    track: LiveTrack,

    current_x: f32,
    target_x: f32,
    velocity: f32,
    segment_width: f32,
    animating: bool,
    current_index: Option<usize>,
}

impl Engine {
    pub fn new(
        snapshot: &Snapshot,
        filter: &Filter,
        viewport: ViewportMode,
        options: CarouselOptions,
    ) -> Self {
        let track = layout(snapshot, filter, viewport);
        cdebug!(
            cards = snapshot.len(),
            live = track.len(),
            tripled = track.is_tripled(),
            filter = filter.as_str(),
            "Engine::new"
        );
        Self {
            pointer: PointerResponse::from_options(&options),
            options,
            track,
            current_x: 0.0,
            target_x: 0.0,
            velocity: 0.0,
            segment_width: 0.0,
            animating: false,
            current_index: None,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn track(&self) -> &LiveTrack {
        &self.track
    }

    /// Replaces the live track with a fresh layout of `snapshot`.
    ///
    /// The previous live track is discarded entirely, so repeated calls never compound copies.
    pub fn layout(&mut self, snapshot: &Snapshot, filter: &Filter, viewport: ViewportMode) -> Totals {
        self.track = layout(snapshot, filter, viewport);
        self.current_index = None;
        ctrace!(live = self.track.len(), "Engine::layout");
        self.totals()
    }

    /// Re-applies `filter` to the current live track.
    pub fn apply_filter(&mut self, filter: &Filter) -> Totals {
        self.track.apply_filter(filter);
        self.current_index = None;
        self.totals()
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.track)
    }

    /// Centers the engine on the middle copy. No-op unless tripled.
    pub fn reset_position(&mut self, track_width: f32) {
        if !self.track.is_tripled() {
            return;
        }
        self.segment_width = track_width / 3.0;
        self.target_x = -self.segment_width;
        self.current_x = -self.segment_width;
        self.velocity = 0.0;
    }

    /// Advances the animation by one display refresh.
    pub fn tick(&mut self, geometry: &FrameGeometry<'_>) -> Tick {
        if !self.animating {
            return Tick::Stopped;
        }
        if !self.track.is_tripled() {
            return Tick::Idle;
        }

        // Reflow can change the width at any time, so never trust last tick's value.
        let sw = geometry.track_width / 3.0;
        if !sw.is_finite() || sw <= 0.0 {
            return Tick::Skipped;
        }
        let target_x = self.target_x + self.velocity;
        if !target_x.is_finite() {
            cwarn!(velocity = self.velocity, "Engine::tick: non-finite target");
            return Tick::Skipped;
        }
        self.segment_width = sw;
        self.target_x = target_x;

        if target_x > 0.0 || target_x < -2.0 * sw {
            let wrapped = fold_into_range(target_x, sw);
            ctrace!(target_x, wrapped, sw, "Engine::tick wrap");
            self.current_x += wrapped - target_x;
            self.target_x = wrapped;
        }
        self.current_x += (self.target_x - self.current_x) * self.options.ease;

        let translate_x = round_px(self.current_x);
        let frame = self.style_cards(geometry, translate_x);
        if frame.current_index.is_some() {
            self.current_index = frame.current_index;
        }
        Tick::Rendered(frame)
    }

    fn style_cards(&self, geometry: &FrameGeometry<'_>, translate_x: f32) -> Frame {
        let viewport = geometry.viewport_width;
        let center = viewport / 2.0;
        let fade = viewport * self.options.fade_span;
        let per_copy = self.track.visible_per_copy();

        let visible = self.track.visible_count();
        if geometry.cards.len() != visible {
            cwarn!(
                measured = geometry.cards.len(),
                visible,
                "Engine::tick: measured card count differs from visible count"
            );
        }

        let mut cards = Vec::new();
        let mut closest: Option<(f32, usize)> = None;
        for (position, (slot, span)) in self
            .track
            .visible_slots()
            .zip(geometry.cards.iter())
            .enumerate()
        {
            let rect = span.offset(geometry.track_left + translate_x);
            if !rect.intersects(viewport) {
                continue;
            }
            let distance = rect.center() - center;
            let abs = distance.abs();
            let opacity = if fade > 0.0 {
                (1.0 - abs / fade).clamp(self.options.opacity_floor, 1.0)
            } else {
                self.options.opacity_floor
            };
            cards.push(CardVisual {
                slot,
                rotate_y_deg: -(distance / self.options.tilt_divisor),
                translate_z: -abs / self.options.depth_divisor,
                opacity,
            });
            if closest.is_none_or(|(best, _)| abs < best) {
                closest = Some((abs, position));
            }
        }

        Frame {
            translate_x,
            cards,
            current_index: closest.map(|(_, position)| position % per_copy + 1),
        }
    }

    /// Updates velocity from a pointer position over the section container.
    pub fn pointer_moved(&mut self, container: Span, pointer_x: f32) {
        self.velocity = self.pointer.velocity_at(container, pointer_x);
    }

    pub fn pointer_left(&mut self) {
        self.velocity = 0.0;
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Starts the render loop. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        true
    }

    /// Stops the render loop at its next tick. Position and content are kept.
    pub fn stop(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn current_x(&self) -> f32 {
        self.current_x
    }

    pub fn target_x(&self) -> f32 {
        self.target_x
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// 1-based index of the card last seen closest to the viewport center.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn state(&self) -> EngineState {
        EngineState {
            layout: self.track.mode(),
            current_x: self.current_x,
            target_x: self.target_x,
            velocity: self.velocity,
            segment_width: self.segment_width,
            animating: self.animating,
        }
    }
}

/// Shifts an out-of-range target by whole segments back into `[-2 * sw, 0]`.
///
/// A target just past a seam lands where a single `± sw` correction would put it. Larger
/// overshoots fold in one step, however many segments they span.
fn fold_into_range(target_x: f32, sw: f32) -> f32 {
    // `%` keeps the sign of `target_x` and is exact, so the result stays inside the range.
    target_x % sw - sw
}

/// Rounds half-way cases toward positive infinity.
fn round_px(x: f32) -> f32 {
    let shifted = x + 0.5;
    let truncated = shifted as i64 as f32;
    if truncated > shifted {
        truncated - 1.0
    } else {
        truncated
    }
}
