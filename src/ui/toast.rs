//! Transient toast shown when a tap is rejected because the slip is full.

use bevy::ecs::world::World;
use bevy::prelude::*;

use crate::slip::events::SlipFullEvent;

/// How long a toast stays on screen.
pub const TOAST_SECONDS: f32 = 1.8;

#[derive(Component)]
pub struct Toast {
    pub timer: Timer,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(TOAST_SECONDS, TimerMode::Once),
        }
    }
}

/// Spawn a toast for the latest rejection, replacing any toast already up.
pub fn show_full_toast(
    mut commands: Commands,
    mut full: MessageReader<SlipFullEvent>,
    existing: Query<Entity, With<Toast>>,
) {
    let Some(event) = full.read().last() else {
        return;
    };

    for entity in existing.iter() {
        commands.queue(move |world: &mut World| {
            if world.get_entity(entity).is_ok() {
                let _ = world.despawn(entity);
            }
        });
    }

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(40.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(50),
            Toast::default(),
        ))
        .with_children(|wrapper| {
            wrapper
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.55, 0.15, 0.15, 0.95)),
                    BorderRadius::all(Val::Px(6.0)),
                ))
                .with_children(|toast| {
                    toast.spawn((
                        Text::new(format!(
                            "No room for {}. Tap a picked number first.",
                            event.number
                        )),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

/// Count toasts down and drop them when their time is up.
pub fn tick_toasts(
    time: Res<Time>,
    mut commands: Commands,
    mut toasts: Query<(Entity, &mut Toast)>,
) {
    for (entity, mut toast) in &mut toasts {
        toast.timer.tick(time.delta());
        if toast.timer.just_finished() {
            commands.queue(move |world: &mut World| {
                if world.get_entity(entity).is_ok() {
                    let _ = world.despawn(entity);
                }
            });
        }
    }
}

/// Toasts belong to the picking screen; drop any stragglers on exit.
pub fn cleanup_toasts(mut commands: Commands, toasts: Query<Entity, With<Toast>>) {
    for entity in toasts.iter() {
        commands.queue(move |world: &mut World| {
            if world.get_entity(entity).is_ok() {
                let _ = world.despawn(entity);
            }
        });
    }
}
