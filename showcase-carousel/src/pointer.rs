use crate::{CarouselOptions, Span};

/// Maps pointer position over a container to carousel velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerResponse {
    pub dead_zone: f32,
    pub max_speed: f32,
}

impl PointerResponse {
    pub fn new(dead_zone: f32, max_speed: f32) -> Self {
        Self {
            dead_zone,
            max_speed,
        }
    }

    pub fn from_options(options: &CarouselOptions) -> Self {
        Self::new(options.dead_zone, options.max_speed)
    }

    /// Normalized horizontal offset of `pointer_x` from the container center, in `[-1, 1]`.
    ///
    /// Returns `0.0` for a container with no width.
    pub fn normalized_offset(container: Span, pointer_x: f32) -> f32 {
        let half = container.width / 2.0;
        if half <= 0.0 {
            return 0.0;
        }
        ((pointer_x - container.left - half) / half).clamp(-1.0, 1.0)
    }

    /// Velocity for a normalized pointer offset.
    ///
    /// Zero inside the dead zone. Beyond it the speed grows with the fourth power of the excess
    /// distance and reaches `max_speed` at the container edge. The sign is opposite to the
    /// offset: a pointer right of center moves content left.
    pub fn velocity(&self, offset: f32) -> f32 {
        let offset = offset.clamp(-1.0, 1.0);
        let magnitude = offset.abs();
        if magnitude < self.dead_zone {
            return 0.0;
        }
        let span = 1.0 - self.dead_zone;
        let t = if span > 0.0 {
            ((magnitude - self.dead_zone) / span).min(1.0)
        } else {
            1.0
        };
        let speed = t * t * t * t * self.max_speed;
        if offset > 0.0 { -speed } else { speed }
    }

    pub fn velocity_at(&self, container: Span, pointer_x: f32) -> f32 {
        self.velocity(Self::normalized_offset(container, pointer_x))
    }
}
