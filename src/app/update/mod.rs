mod core;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Move the list to an absolute vertical offset.
    ScrollTo(f32),
    Quit,
}
