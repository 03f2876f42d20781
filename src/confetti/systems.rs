use bevy::prelude::*;
use bevy_hanabi::prelude::{
    AccelModifier, Attribute, ColorBlendMask, ColorBlendMode, ColorOverLifetimeModifier,
    EffectAsset, ExprWriter, Gradient as HanabiGradient, LinearDragModifier, ParticleEffect,
    SetAttributeModifier, SetPositionCircleModifier, SetVelocitySphereModifier, ShapeDimension,
    SizeOverLifetimeModifier, SpawnerSettings,
};

use crate::confetti::components::ConfettiBurst;
use crate::confetti::resources::ConfettiEffect;
use crate::slip::events::SlipCompletedEvent;

/// Particle effect constants
const CONFETTI_COUNT: f32 = 150.0;
const CONFETTI_LIFETIME: f32 = 1.2; // seconds
const CONFETTI_SPEED: f32 = 340.0;
const CONFETTI_GRAVITY: f32 = -480.0;
const CONFETTI_DRAG: f32 = 1.4;
const CONFETTI_SIZE_START: f32 = 7.0;
const CONFETTI_SIZE_END: f32 = 0.0; // pixels

/// Longer than any burst entity lives, so each emitter fires exactly one volley.
const BURST_PERIOD: f32 = 10.0;

/// Where a burst pops relative to the camera, just above the slot row.
const CONFETTI_ORIGIN: Vec3 = Vec3::new(0.0, 120.0, 1.0);

/// Builds the confetti burst effect: a single volley thrown outward from a
/// small disc, pulled back down by gravity while the colors cycle and fade.
pub fn create_confetti_effect(effects: &mut Assets<EffectAsset>) -> Handle<EffectAsset> {
    // Color cycles through party colors before fading out
    let mut color_gradient = HanabiGradient::new();
    color_gradient.add_key(0.0, Vec4::new(0.98, 0.78, 0.22, 1.0)); // Gold
    color_gradient.add_key(0.35, Vec4::new(0.95, 0.35, 0.62, 1.0)); // Pink
    color_gradient.add_key(0.7, Vec4::new(0.3, 0.75, 0.95, 0.9)); // Sky blue
    color_gradient.add_key(1.0, Vec4::new(0.85, 0.9, 0.95, 0.0)); // Fade to transparent

    // Pieces shrink as they fall
    let mut size_gradient = HanabiGradient::new();
    size_gradient.add_key(0.0, Vec3::splat(CONFETTI_SIZE_START));
    size_gradient.add_key(0.8, Vec3::splat(CONFETTI_SIZE_START * 0.7));
    size_gradient.add_key(1.0, Vec3::splat(CONFETTI_SIZE_END));

    let writer = ExprWriter::new();

    // Position: small disc in the XY plane (2D, so the circle axis is Z)
    let init_pos = SetPositionCircleModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        axis: writer.lit(Vec3::Z).expr(),
        radius: writer.lit(24.0).expr(),
        dimension: ShapeDimension::Volume,
    };

    // Velocity: outward from center
    let init_vel = SetVelocitySphereModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        speed: writer.lit(CONFETTI_SPEED).expr(),
    };

    // Lifetime
    let lifetime = writer.lit(CONFETTI_LIFETIME).expr();
    let init_lifetime = SetAttributeModifier::new(Attribute::LIFETIME, lifetime);

    // Gravity pulls pieces down, drag stops them from flying off screen
    let gravity = AccelModifier::new(writer.lit(Vec3::new(0.0, CONFETTI_GRAVITY, 0.0)).expr());
    let drag = LinearDragModifier::new(writer.lit(CONFETTI_DRAG).expr());

    let module = writer.finish();

    let spawner = SpawnerSettings::burst(CONFETTI_COUNT.into(), BURST_PERIOD.into());
    let effect = EffectAsset::new(512, spawner, module)
        .with_name("confetti_burst")
        .init(init_pos)
        .init(init_vel)
        .init(init_lifetime)
        .update(gravity)
        .update(drag)
        .render(ColorOverLifetimeModifier {
            gradient: color_gradient,
            blend: ColorBlendMode::Overwrite,
            mask: ColorBlendMask::RGBA,
        })
        .render(SizeOverLifetimeModifier {
            gradient: size_gradient,
            screen_space_size: false,
        });

    effects.add(effect)
}

/// Creates and inserts the confetti effect asset.
/// Should be called once on startup. Silently skips if HanabiPlugin is not loaded.
pub fn setup_confetti_effect(
    mut commands: Commands,
    effects: Option<ResMut<Assets<EffectAsset>>>,
) {
    let Some(mut effects) = effects else {
        return; // HanabiPlugin not loaded, skip particle setup
    };
    let handle = create_confetti_effect(&mut effects);
    commands.insert_resource(ConfettiEffect(handle));
}

/// Throws one confetti volley when the slip fills up. Repeated completion
/// events in the same frame still spawn a single emitter.
pub fn spawn_confetti_burst(
    mut commands: Commands,
    mut completed: MessageReader<SlipCompletedEvent>,
    effect: Option<Res<ConfettiEffect>>,
) {
    if completed.read().count() == 0 {
        return;
    }
    let Some(effect) = effect else {
        return; // Effect assets unavailable, celebrate silently
    };
    commands.spawn((
        ParticleEffect::new(effect.0.clone()),
        Transform::from_translation(CONFETTI_ORIGIN),
        ConfettiBurst::default(),
    ));
}

/// Removes burst emitters once their particles have finished falling.
pub fn despawn_finished_confetti(
    time: Res<Time>,
    mut commands: Commands,
    mut bursts: Query<(Entity, &mut ConfettiBurst)>,
) {
    for (entity, mut burst) in bursts.iter_mut() {
        burst.lifetime.tick(time.delta());
        if burst.lifetime.just_finished() {
            commands.queue(move |world: &mut World| {
                if world.get_entity(entity).is_ok() {
                    let _ = world.despawn(entity);
                }
            });
        }
    }
}
