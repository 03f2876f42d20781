use bevy::prelude::*;

/// How long a burst entity sticks around. Long enough for every particle
/// to finish falling before the emitter is removed.
const BURST_SECONDS: f32 = 1.6;

/// Marker for a spawned confetti emitter entity.
#[derive(Component)]
pub struct ConfettiBurst {
    pub lifetime: Timer,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            lifetime: Timer::from_seconds(BURST_SECONDS, TimerMode::Once),
        }
    }
}
