use alloc::string::String;

/// Stable identifier of a gallery section (the garment tag).
pub type SectionId = String;

/// The active category filter shared by every section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn category(tag: impl Into<String>) -> Self {
        Self::Category(tag.into())
    }

    /// Parses a filter control value. `"all"` (and the empty string) select every item.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => Self::All,
            tag => Self::Category(tag.into()),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tag == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(tag) => tag,
        }
    }
}

/// Which side of the breakpoint the viewport is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportMode {
    /// Wider than the breakpoint: tripled carousel with pointer-driven motion.
    Wide,
    /// At or below the breakpoint: a single static grid.
    Narrow,
}

impl ViewportMode {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width > breakpoint {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    pub fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }

    pub fn layout_mode(self) -> LayoutMode {
        match self {
            Self::Wide => LayoutMode::Tripled,
            Self::Narrow => LayoutMode::Single,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    Tripled,
    Single,
}

impl LayoutMode {
    /// Number of snapshot copies placed in the live track.
    pub fn copies(self) -> usize {
        match self {
            Self::Tripled => 3,
            Self::Single => 1,
        }
    }

    pub fn display(self) -> DisplayMode {
        match self {
            Self::Tripled => DisplayMode::Row,
            Self::Single => DisplayMode::Grid,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    Row,
    Grid,
}

/// One product entry as found in a section's pristine markup.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub category: String,
    /// Opaque markup the host re-emits when it rebuilds the track.
    pub markup: String,
}

impl Card {
    pub fn new(category: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            markup: markup.into(),
        }
    }
}

/// A horizontal box in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub left: f32,
    pub width: f32,
}

impl Span {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn offset(&self, dx: f32) -> Self {
        Self {
            left: self.left + dx,
            width: self.width,
        }
    }

    /// Whether any part of the span lies inside `[0, extent)`.
    pub fn intersects(&self, extent: f32) -> bool {
        self.right() > 0.0 && self.left < extent
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEventKind {
    Move,
    Leave,
}
