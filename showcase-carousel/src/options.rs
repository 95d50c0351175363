/// Tuning constants for [`crate::Engine`].
///
/// The defaults reproduce the reference gallery feel. Adapters usually keep them and only
/// override a field or two through the `with_*` builders.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` so it can be loaded
/// from a configuration file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    /// Fraction of the remaining distance the current offset covers each tick.
    pub ease: f32,
    /// Velocity (pixels per tick) when the pointer sits at the container edge.
    pub max_speed: f32,
    /// Normalized pointer band around the container center that induces no motion.
    pub dead_zone: f32,
    /// Pixels of distance from the viewport center per degree of Y rotation.
    pub tilt_divisor: f32,
    /// Pixels of distance from the viewport center per pixel of negative Z translation.
    pub depth_divisor: f32,
    /// Lowest opacity a card fades to.
    pub opacity_floor: f32,
    /// Fraction of the viewport width over which opacity falls from 1 to the floor.
    pub fade_span: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            ease: 0.12,
            max_speed: 135.0,
            dead_zone: 0.35,
            tilt_divisor: 55.0,
            depth_divisor: 12.0,
            opacity_floor: 0.2,
            fade_span: 0.8,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ease(mut self, ease: f32) -> Self {
        debug_assert!(
            ease > 0.0 && ease <= 1.0,
            "CarouselOptions: ease must be in (0, 1] (got {ease})"
        );
        self.ease = ease;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        debug_assert!(
            (0.0..1.0).contains(&dead_zone),
            "CarouselOptions: dead_zone must be in [0, 1) (got {dead_zone})"
        );
        self.dead_zone = dead_zone;
        self
    }

    pub fn with_tilt(mut self, tilt_divisor: f32, depth_divisor: f32) -> Self {
        self.tilt_divisor = tilt_divisor;
        self.depth_divisor = depth_divisor;
        self
    }

    pub fn with_fade(mut self, opacity_floor: f32, fade_span: f32) -> Self {
        self.opacity_floor = opacity_floor;
        self.fade_span = fade_span;
        self
    }
}
