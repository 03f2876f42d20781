use bevy::prelude::*;

/// Execution order for slip handling within a frame.
///
/// Input systems mutate the slip and write events, observers turn those
/// events into derived state, feedback systems render the result. The
/// sets are chained so one tap is fully reflected in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlipSet {
    /// Pointer and keyboard handlers that mutate the slip.
    Input,
    /// Listeners reacting to slip events (logging, completion watch).
    Observe,
    /// Visual refresh, toasts, audio and particles.
    Feedback,
}
