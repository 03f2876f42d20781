//! Summary screen: the confirmed numbers and a way back.

use bevy::ecs::world::World;
use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::states::AppState;
use crate::ui::components::{BackToMenuButton, NewSlipButton, SlipTheme, SummaryScreen};

pub fn setup_summary(
    mut commands: Commands,
    slip: Res<Slip>,
    theme: Res<SlipTheme>,
    camera_query: Query<Entity, With<Camera>>,
) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }

    let numbers = slip
        .picks()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("  ");
    info!("slip confirmed: [{}]", numbers.replace("  ", ", "));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.09, 0.09, 0.12)),
            SummaryScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Slip confirmed"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                Text::new(numbers),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(theme.accent),
            ));

            parent.spawn((
                Text::new("Good luck on the draw!"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(12.0),
                    margin: UiRect::top(Val::Px(30.0)),
                    ..default()
                })
                .with_children(|buttons| {
                    buttons
                        .spawn((
                            Button,
                            Node {
                                width: Val::Px(160.0),
                                height: Val::Px(50.0),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.2, 0.6, 0.2)),
                            NewSlipButton,
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("New Slip"),
                                TextFont {
                                    font_size: 22.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });

                    buttons
                        .spawn((
                            Button,
                            Node {
                                width: Val::Px(160.0),
                                height: Val::Px(50.0),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.3, 0.3, 0.38)),
                            BackToMenuButton,
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("Menu"),
                                TextFont {
                                    font_size: 22.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                });
        });
}

#[allow(clippy::type_complexity)]
pub fn handle_summary_buttons(
    mut interaction_query: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            Option<&NewSlipButton>,
            Option<&BackToMenuButton>,
        ),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, mut background_color, new_slip, menu) in &mut interaction_query {
        if new_slip.is_none() && menu.is_none() {
            continue;
        }
        match *interaction {
            Interaction::Pressed => {
                if new_slip.is_some() {
                    next_state.set(AppState::Picking);
                } else {
                    next_state.set(AppState::Menu);
                }
            }
            Interaction::Hovered => {
                *background_color = BackgroundColor(Color::srgb(0.4, 0.4, 0.4));
            }
            Interaction::None => {
                if new_slip.is_some() {
                    *background_color = BackgroundColor(Color::srgb(0.2, 0.6, 0.2));
                } else {
                    *background_color = BackgroundColor(Color::srgb(0.3, 0.3, 0.38));
                }
            }
        }
    }
}

pub fn handle_summary_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(AppState::Picking);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(AppState::Menu);
    }
}

pub fn cleanup_summary(mut commands: Commands, query: Query<Entity, With<SummaryScreen>>) {
    let entities: Vec<Entity> = query.iter().collect();
    for entity in entities {
        commands.queue(move |world: &mut World| {
            if world.get_entity(entity).is_ok() {
                let _ = world.despawn(entity);
            }
        });
    }
}
