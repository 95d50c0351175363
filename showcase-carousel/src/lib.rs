//! A headless infinite-carousel engine for filterable product galleries.
//!
//! For gallery-level orchestration (breakpoints, pointer listeners, the frame loop), see the
//! `showcase-carousel-adapter` crate.
//!
//! This crate holds the state and math of one carousel section: pristine content snapshots,
//! tripled vs. single layouts, category filtering, the per-frame scroll/easing/wrap step, the
//! parallax styling of cards around the viewport center, and the derived item counters.
//!
//! It is UI-agnostic. A browser/TUI/GUI layer is expected to provide:
//! - the pristine cards of each section (category + markup)
//! - track and card geometry each frame
//! - pointer positions over the section container
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod counter;
mod engine;
mod key;
mod layout;
mod options;
mod pointer;
mod snapshot;
mod state;
mod types;


pub use counter::{Totals, pad2};
pub use engine::{CardVisual, Engine, Frame, FrameGeometry, Tick};
pub use layout::{LiveCard, LiveTrack, layout};
pub use options::CarouselOptions;
pub use pointer::PointerResponse;
pub use snapshot::{SectionRegistry, Snapshot};
pub use state::EngineState;
pub use types::{
    Card, DisplayMode, Filter, LayoutMode, PointerEventKind, SectionId, Span, ViewportMode,
};
