use bevy::prelude::*;

/// Marker for a bookkeeping entity spawned per played effect.
#[derive(Component)]
pub struct SfxTracker;

/// Timer component for audio entity cleanup
#[derive(Component)]
pub struct AudioCleanupTimer(pub Timer);
