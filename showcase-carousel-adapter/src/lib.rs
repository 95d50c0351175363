//! Gallery orchestration for the `showcase-carousel` crate.
//!
//! The `showcase-carousel` crate holds the per-section state and math. This crate wires sections
//! into a page without binding to any UI framework:
//!
//! - A [`GalleryHost`] trait that a DOM/TUI/test layer implements
//! - Scoped pointer listener bindings that never leave a duplicate pair attached
//! - A per-section controller and a [`Gallery`] context that rebuilds every section from its
//!   pristine snapshot when the viewport crosses the breakpoint or the filter changes
//! - A resize debouncer driven by adapter-supplied timestamps
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binding;
mod controller;
mod debounce;
mod gallery;
mod host;
mod options;

#[cfg(test)]
mod tests;

pub use binding::PointerBinding;
pub use controller::SectionController;
pub use debounce::{ResizeDebouncer, SettledResize};
pub use gallery::Gallery;
pub use host::{CounterSlot, GalleryHost, ListenerId, TrackMeasure};
pub use options::GalleryOptions;
