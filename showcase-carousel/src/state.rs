use crate::LayoutMode;

/// A lightweight, serializable snapshot of an engine's motion state.
///
/// Offsets and `segment_width` are only meaningful while `layout` is [`LayoutMode::Tripled`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub layout: LayoutMode,
    pub current_x: f32,
    pub target_x: f32,
    pub velocity: f32,
    pub segment_width: f32,
    pub animating: bool,
}
