use showcase_carousel::CarouselOptions;

/// Configuration for [`crate::Gallery`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their default values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GalleryOptions {
    /// Viewport width (CSS pixels) at or below which sections use the single grid layout.
    pub breakpoint: f32,
    /// Quiet period before a burst of resize events is acted on.
    pub resize_quiet_ms: u64,
    pub carousel: CarouselOptions,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            resize_quiet_ms: 250,
            carousel: CarouselOptions::default(),
        }
    }
}

impl GalleryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breakpoint(mut self, breakpoint: f32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_resize_quiet_ms(mut self, quiet_ms: u64) -> Self {
        self.resize_quiet_ms = quiet_ms;
        self
    }

    pub fn with_carousel(mut self, carousel: CarouselOptions) -> Self {
        self.carousel = carousel;
        self
    }
}
