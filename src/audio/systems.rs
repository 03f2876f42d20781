use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::components::{AudioCleanupTimer, SfxTracker};
use crate::audio::plugin::{play_limited_sound, MusicChannel, SfxChannel, SoundLimiter};
use crate::slip::events::{
    PickPlacedEvent, PickRemovedEvent, SlipCompletedEvent, SlipFullEvent, ValidationFailedEvent,
};

/// Start the background loop when the menu comes up. Restarting the
/// channel keeps re-entries from stacking copies of the track.
pub fn setup_menu_music(
    music_channel: Option<Res<AudioChannel<MusicChannel>>>,
    asset_server: Option<Res<AssetServer>>,
) {
    if let (Some(channel), Some(asset_server)) = (music_channel, asset_server) {
        channel.stop();
        channel
            .play(asset_server.load("sounds/music/lucky_loop.ogg"))
            .looped()
            .with_volume(0.3);
    }
}

/// One click per number landing on or leaving the slip.
pub fn play_pick_sounds(
    mut commands: Commands,
    mut placed: MessageReader<PickPlacedEvent>,
    mut removed: MessageReader<PickRemovedEvent>,
    sfx_channel: Option<Res<AudioChannel<SfxChannel>>>,
    asset_server: Option<Res<AssetServer>>,
    mut sound_limiter: Option<ResMut<SoundLimiter>>,
) {
    let placed_count = placed.read().count();
    let removed_count = removed.read().count();

    if let (Some(channel), Some(asset_server), Some(limiter)) =
        (sfx_channel.as_ref(), asset_server.as_ref(), sound_limiter.as_mut())
    {
        for _ in 0..placed_count {
            play_limited_sound(&mut commands, channel, asset_server, "sounds/tap.ogg", limiter);
        }
        for _ in 0..removed_count {
            play_limited_sound(&mut commands, channel, asset_server, "sounds/untap.ogg", limiter);
        }
    }
}

/// Short buzz when a tap bounces off a full slip or a confirm comes up
/// short. One buzz per frame no matter how many rejections piled up.
pub fn play_deny_sound(
    mut full: MessageReader<SlipFullEvent>,
    mut failed: MessageReader<ValidationFailedEvent>,
    sfx_channel: Option<Res<AudioChannel<SfxChannel>>>,
    asset_server: Option<Res<AssetServer>>,
) {
    let denied = full.read().count() + failed.read().count();
    if denied == 0 {
        return;
    }
    if let (Some(channel), Some(asset_server)) = (sfx_channel, asset_server) {
        channel.play(asset_server.load("sounds/deny.ogg"));
    }
}

/// Chime for the moment the slip fills its last slot.
pub fn play_complete_sound(
    mut completed: MessageReader<SlipCompletedEvent>,
    sfx_channel: Option<Res<AudioChannel<SfxChannel>>>,
    asset_server: Option<Res<AssetServer>>,
) {
    if completed.read().next().is_none() {
        return;
    }
    if let (Some(channel), Some(asset_server)) = (sfx_channel, asset_server) {
        channel.play(asset_server.load("sounds/complete.ogg"));
    }
}

/// Stamp sound as the confirmed slip lands on the summary screen.
pub fn play_confirm_sound(
    sfx_channel: Option<Res<AudioChannel<SfxChannel>>>,
    asset_server: Option<Res<AssetServer>>,
) {
    if let (Some(channel), Some(asset_server)) = (sfx_channel, asset_server) {
        channel.play(asset_server.load("sounds/confirm.ogg"));
    }
}

/// Expire effect trackers and hand their limiter slots back.
pub fn cleanup_finished_sounds(
    time: Res<Time>,
    mut commands: Commands,
    mut sound_limiter: Option<ResMut<SoundLimiter>>,
    mut trackers: Query<(Entity, &mut AudioCleanupTimer), With<SfxTracker>>,
) {
    for (entity, mut tracker) in &mut trackers {
        tracker.0.tick(time.delta());
        if tracker.0.just_finished() {
            if let Some(limiter) = sound_limiter.as_mut() {
                limiter.release();
            }
            commands.queue(move |world: &mut bevy::ecs::world::World| {
                if world.get_entity(entity).is_ok() {
                    let _ = world.despawn(entity);
                }
            });
        }
    }
}
