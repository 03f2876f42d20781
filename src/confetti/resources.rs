use bevy::prelude::*;
use bevy_hanabi::prelude::EffectAsset;

/// Handle to the prebuilt confetti burst effect asset.
/// Inserted on startup when the Hanabi plugin is loaded.
#[derive(Resource)]
pub struct ConfettiEffect(pub Handle<EffectAsset>);
