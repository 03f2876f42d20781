use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::slip::sets::SlipSet;
use crate::states::AppState;
use crate::audio::systems::*;

/// Channel for looping background music.
#[derive(Resource)]
pub struct MusicChannel;

/// Channel for short interface effects.
#[derive(Resource)]
pub struct SfxChannel;

/// Caps how many effects may be in flight at once so rapid tapping does
/// not stack into noise.
#[derive(Resource)]
pub struct SoundLimiter {
    active: usize,
    max_active: usize,
}

impl Default for SoundLimiter {
    fn default() -> Self {
        Self {
            active: 0,
            max_active: 4,
        }
    }
}

impl SoundLimiter {
    /// Claim a play slot. Returns false when the cap is hit.
    pub fn try_acquire(&mut self) -> bool {
        if self.active < self.max_active {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Give a slot back once the effect's tracker expires.
    pub fn release(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn active(&self) -> usize {
        self.active
    }
}

/// Play a short effect if the limiter has room, spawning a tracker that
/// releases the slot once the sound has had time to finish.
pub fn play_limited_sound<T: Resource>(
    commands: &mut Commands,
    channel: &AudioChannel<T>,
    asset_server: &AssetServer,
    path: &str,
    limiter: &mut SoundLimiter,
) {
    if !limiter.try_acquire() {
        return;
    }
    channel.play(asset_server.load(path));
    commands.spawn((
        crate::audio::components::SfxTracker,
        crate::audio::components::AudioCleanupTimer(Timer::from_seconds(0.5, TimerMode::Once)),
    ));
}

pub fn plugin(app: &mut App) {
    app.add_audio_channel::<MusicChannel>()
        .add_audio_channel::<SfxChannel>()
        .init_resource::<SoundLimiter>()
        .add_systems(OnEnter(AppState::Menu), setup_menu_music)
        .add_systems(OnEnter(AppState::Summary), play_confirm_sound)
        .add_systems(
            Update,
            (
                play_pick_sounds,
                play_deny_sound,
                play_complete_sound,
                cleanup_finished_sounds,
            )
                .in_set(SlipSet::Feedback)
                .run_if(in_state(AppState::Picking)),
        );
}
