//! Picking screen: slot row on top, number palette below, action buttons
//! and a validation line in between.

use bevy::ecs::world::World;
use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::slip::events::{PicksChangedEvent, ValidationFailedEvent};
use crate::states::AppState;
use crate::ui::components::{
    button_colors, slot_colors, ActionButton, ClearButton, ConfirmButton, PickingScreen,
    QuickPickButton, SlipTheme, ValidationLabel,
};
use crate::ui::palette::spawn_palette;
use crate::ui::slot_row::components::SlotCell;
use crate::ui::slot_row::spawn::spawn_slot_row;

/// Checkpoint error shown under the slot row, if any.
#[derive(Resource, Default, Debug, Clone)]
pub struct ValidationState {
    pub message: Option<String>,
}

pub fn reset_validation(mut validation: ResMut<ValidationState>) {
    validation.message = None;
}

pub fn setup_picking_ui(
    mut commands: Commands,
    slip: Res<Slip>,
    theme: Res<SlipTheme>,
    camera_query: Query<Entity, With<Camera>>,
) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(18.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.09, 0.09, 0.12)),
            PickingScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(theme.heading()),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            spawn_slot_row(parent, &slip, theme.accent);

            // Fixed-height line so the layout holds still when it empties.
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(slot_colors::INVALID_BORDER),
                Node {
                    height: Val::Px(22.0),
                    ..default()
                },
                ValidationLabel,
            ));

            spawn_palette(parent, &slip, &theme);

            parent.spawn((
                Text::new("Tap a number to add or remove it. Tap a slot to focus it."),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(12.0),
                    margin: UiRect::top(Val::Px(10.0)),
                    ..default()
                })
                .with_children(|actions| {
                    spawn_action_button(actions, "Quick Pick (Q)", QuickPickButton);
                    spawn_action_button(actions, "Clear (C)", ClearButton);
                    spawn_action_button(actions, "Confirm (Enter)", ConfirmButton);
                });
        });
}

fn spawn_action_button<M: Component>(
    parent: &mut bevy::ecs::hierarchy::ChildSpawnerCommands,
    label: &str,
    marker: M,
) -> Entity {
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(button_colors::NORMAL),
            BorderRadius::all(Val::Px(5.0)),
            ActionButton,
            marker,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(button_colors::TEXT),
            ));
        })
        .id()
}

/// Fill the remaining slots from the palette and announce the change.
fn do_quick_pick(slip: &mut Slip, changed: &mut MessageWriter<PicksChangedEvent>) {
    let mut rng = rand::thread_rng();
    if slip.quick_pick(&mut rng) > 0 {
        changed.write(PicksChangedEvent::new(slip.picks(), slip.is_complete()));
    }
}

fn do_clear(slip: &mut Slip, changed: &mut MessageWriter<PicksChangedEvent>) {
    slip.clear();
    changed.write(PicksChangedEvent::new(slip.picks(), slip.is_complete()));
}

/// Checkpoint: advance when the slip is full, otherwise raise the field
/// error under the slot row.
fn try_confirm(
    slip: &Slip,
    validation: &mut ValidationState,
    next_state: &mut NextState<AppState>,
    failed: &mut MessageWriter<ValidationFailedEvent>,
) {
    if slip.is_complete() {
        next_state.set(AppState::Summary);
    } else {
        warn!(
            "confirm rejected: {} of {} numbers picked",
            slip.picks().len(),
            slip.capacity()
        );
        validation.message = Some(format!("Pick {} numbers first", slip.capacity()));
        failed.write(ValidationFailedEvent::new(slip.remaining()));
    }
}

/// Clicking a slot cell focuses it; hover lightens empty cells.
#[allow(clippy::type_complexity)]
pub fn handle_slot_click(
    mut cells: Query<
        (&Interaction, &SlotCell, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut slip: ResMut<Slip>,
) {
    for (interaction, cell, mut background) in &mut cells {
        match *interaction {
            Interaction::Pressed => {
                slip.set_focus(cell.index);
            }
            Interaction::Hovered => {
                if slip.slot(cell.index).is_none() {
                    *background = BackgroundColor(slot_colors::HOVER_BACKGROUND);
                }
            }
            Interaction::None => {
                *background = BackgroundColor(if slip.slot(cell.index).is_some() {
                    slot_colors::FILLED_BACKGROUND
                } else {
                    slot_colors::EMPTY_BACKGROUND
                });
            }
        }
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_control_buttons(
    mut interaction_query: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            Option<&QuickPickButton>,
            Option<&ClearButton>,
            Option<&ConfirmButton>,
        ),
        (Changed<Interaction>, With<ActionButton>),
    >,
    mut slip: ResMut<Slip>,
    mut validation: ResMut<ValidationState>,
    mut next_state: ResMut<NextState<AppState>>,
    mut changed: MessageWriter<PicksChangedEvent>,
    mut failed: MessageWriter<ValidationFailedEvent>,
) {
    for (interaction, mut background_color, quick_pick, clear, confirm) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                if quick_pick.is_some() {
                    do_quick_pick(&mut slip, &mut changed);
                } else if clear.is_some() {
                    do_clear(&mut slip, &mut changed);
                } else if confirm.is_some() {
                    try_confirm(&slip, &mut validation, &mut next_state, &mut failed);
                }
            }
            Interaction::Hovered => {
                *background_color = BackgroundColor(button_colors::HOVERED);
            }
            Interaction::None => {
                *background_color = BackgroundColor(button_colors::NORMAL);
            }
        }
    }
}

/// Keyboard shortcuts for the picking screen.
pub fn handle_picking_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut slip: ResMut<Slip>,
    mut validation: ResMut<ValidationState>,
    mut next_state: ResMut<NextState<AppState>>,
    mut changed: MessageWriter<PicksChangedEvent>,
    mut failed: MessageWriter<ValidationFailedEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyQ) {
        do_quick_pick(&mut slip, &mut changed);
    }
    if keyboard.just_pressed(KeyCode::KeyC) {
        do_clear(&mut slip, &mut changed);
    }
    if keyboard.just_pressed(KeyCode::Enter) {
        try_confirm(&slip, &mut validation, &mut next_state, &mut failed);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(AppState::Menu);
    }
}

/// Drop the field error as soon as the selection changes again.
pub fn clear_validation_on_change(
    mut changed: MessageReader<PicksChangedEvent>,
    mut validation: ResMut<ValidationState>,
) {
    if changed.read().next().is_some() && validation.message.is_some() {
        validation.message = None;
    }
}

pub fn refresh_validation_label(
    validation: Res<ValidationState>,
    mut labels: Query<&mut Text, With<ValidationLabel>>,
) {
    for mut text in &mut labels {
        **text = validation.message.clone().unwrap_or_default();
    }
}

pub fn cleanup_picking(mut commands: Commands, query: Query<Entity, With<PickingScreen>>) {
    let entities: Vec<Entity> = query.iter().collect();
    for entity in entities {
        commands.queue(move |world: &mut World| {
            if world.get_entity(entity).is_ok() {
                let _ = world.despawn(entity);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slip::resources::SlipConfig;
    use crate::ui::palette::NumberChip;
    use bevy::ecs::system::RunSystemOnce;

    fn setup_test_app(slip: Slip) -> App {
        let mut app = App::new();
        app.add_plugins(bevy::prelude::TaskPoolPlugin::default());
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<AppState>();
        app.add_message::<PicksChangedEvent>();
        app.add_message::<ValidationFailedEvent>();
        app.init_resource::<SlipTheme>();
        app.init_resource::<ValidationState>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(slip);
        app
    }

    fn press_button<M: Component>(app: &mut App) {
        let entity = app
            .world_mut()
            .query_filtered::<Entity, With<M>>()
            .iter(app.world())
            .next()
            .expect("button should exist");
        app.world_mut().entity_mut(entity).insert(Interaction::Pressed);
        let _ = app.world_mut().run_system_once(handle_control_buttons);
    }

    mod setup_picking_ui_tests {
        use super::*;

        #[test]
        fn spawns_picking_screen_root() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));

            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let count = app
                .world_mut()
                .query::<&PickingScreen>()
                .iter(app.world())
                .count();
            assert_eq!(count, 1, "Should spawn exactly one PickingScreen");
        }

        #[test]
        fn spawns_a_cell_per_slot_and_a_chip_per_number() {
            let mut app = setup_test_app(Slip::new(12, 4, &[]));

            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let cells = app
                .world_mut()
                .query::<&SlotCell>()
                .iter(app.world())
                .count();
            let chips = app
                .world_mut()
                .query::<&NumberChip>()
                .iter(app.world())
                .count();
            assert_eq!(cells, 4);
            assert_eq!(chips, 13);
        }

        #[test]
        fn spawns_the_three_action_buttons() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));

            let _ = app.world_mut().run_system_once(setup_picking_ui);

            assert_eq!(
                app.world_mut()
                    .query::<&QuickPickButton>()
                    .iter(app.world())
                    .count(),
                1
            );
            assert_eq!(
                app.world_mut()
                    .query::<&ClearButton>()
                    .iter(app.world())
                    .count(),
                1
            );
            assert_eq!(
                app.world_mut()
                    .query::<&ConfirmButton>()
                    .iter(app.world())
                    .count(),
                1
            );
        }

        #[test]
        fn validation_label_starts_empty() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));

            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let text = app
                .world_mut()
                .query_filtered::<&Text, With<ValidationLabel>>()
                .iter(app.world())
                .next()
                .expect("validation label should exist");
            assert_eq!(text.0, "");
        }

        #[test]
        fn spawns_a_camera_when_none_exists() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));

            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let count = app
                .world_mut()
                .query::<&Camera2d>()
                .iter(app.world())
                .count();
            assert_eq!(count, 1);
        }
    }

    mod handle_slot_click_tests {
        use super::*;

        #[test]
        fn clicking_a_cell_focuses_its_slot() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let entity = app
                .world_mut()
                .query::<(Entity, &SlotCell)>()
                .iter(app.world())
                .find(|(_, cell)| cell.index == 3)
                .map(|(entity, _)| entity)
                .unwrap();
            app.world_mut().entity_mut(entity).insert(Interaction::Pressed);
            let _ = app.world_mut().run_system_once(handle_slot_click);

            assert_eq!(app.world().resource::<Slip>().focused(), Some(3));
        }

        #[test]
        fn hovering_an_empty_cell_lightens_it() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let entity = app
                .world_mut()
                .query::<(Entity, &SlotCell)>()
                .iter(app.world())
                .find(|(_, cell)| cell.index == 0)
                .map(|(entity, _)| entity)
                .unwrap();
            app.world_mut().entity_mut(entity).insert(Interaction::Hovered);
            let _ = app.world_mut().run_system_once(handle_slot_click);

            let bg = app.world().get::<BackgroundColor>(entity).unwrap();
            assert_eq!(bg.0, slot_colors::HOVER_BACKGROUND);
        }

        #[test]
        fn hovering_a_filled_cell_keeps_its_color() {
            let mut app = setup_test_app(Slip::new(30, 5, &[7]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let entity = app
                .world_mut()
                .query::<(Entity, &SlotCell)>()
                .iter(app.world())
                .find(|(_, cell)| cell.index == 0)
                .map(|(entity, _)| entity)
                .unwrap();
            app.world_mut().entity_mut(entity).insert(Interaction::Hovered);
            let _ = app.world_mut().run_system_once(handle_slot_click);

            let bg = app.world().get::<BackgroundColor>(entity).unwrap();
            assert_eq!(bg.0, slot_colors::FILLED_BACKGROUND);
        }
    }

    mod handle_control_buttons_tests {
        use super::*;

        #[test]
        fn quick_pick_button_fills_the_slip() {
            let mut app = setup_test_app(Slip::new(30, 5, &[7]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            press_button::<QuickPickButton>(&mut app);

            let slip = app.world().resource::<Slip>();
            assert!(slip.is_complete());
            assert_eq!(slip.slot(0), Some(7));

            let messages = app.world_mut().resource_mut::<Messages<PicksChangedEvent>>();
            let mut reader = messages.get_cursor();
            assert_eq!(reader.read(&messages).count(), 1);
        }

        #[test]
        fn quick_pick_on_a_complete_slip_stays_quiet() {
            let mut app = setup_test_app(Slip::new(30, 3, &[7, 2, 9]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            press_button::<QuickPickButton>(&mut app);

            let messages = app.world_mut().resource_mut::<Messages<PicksChangedEvent>>();
            let mut reader = messages.get_cursor();
            assert_eq!(reader.read(&messages).count(), 0);
        }

        #[test]
        fn clear_button_empties_the_slip_and_focuses_the_front() {
            let mut app = setup_test_app(Slip::new(30, 3, &[7, 2, 9]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            press_button::<ClearButton>(&mut app);

            let slip = app.world().resource::<Slip>();
            assert_eq!(slip.picks(), Vec::<u8>::new());
            assert_eq!(slip.focused(), Some(0));

            let messages = app.world_mut().resource_mut::<Messages<PicksChangedEvent>>();
            let mut reader = messages.get_cursor();
            let announced: Vec<Vec<u8>> =
                reader.read(&messages).map(|event| event.values.clone()).collect();
            assert_eq!(announced, vec![Vec::<u8>::new()]);
        }

        #[test]
        fn confirm_with_an_incomplete_slip_raises_the_field_error() {
            let mut app = setup_test_app(Slip::new(30, 5, &[7, 2]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            press_button::<ConfirmButton>(&mut app);
            app.update();

            assert_eq!(
                *app.world().resource::<State<AppState>>().get(),
                AppState::Menu,
                "State should not advance on an incomplete slip"
            );
            let validation = app.world().resource::<ValidationState>();
            assert_eq!(validation.message.as_deref(), Some("Pick 5 numbers first"));

            let messages = app
                .world_mut()
                .resource_mut::<Messages<ValidationFailedEvent>>();
            let mut reader = messages.get_cursor();
            let missing: Vec<usize> = reader.read(&messages).map(|event| event.missing).collect();
            assert_eq!(missing, vec![3]);
        }

        #[test]
        fn confirm_with_a_complete_slip_advances_to_summary() {
            let mut app = setup_test_app(Slip::new(30, 3, &[7, 2, 9]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            press_button::<ConfirmButton>(&mut app);
            app.update();

            assert_eq!(
                *app.world().resource::<State<AppState>>().get(),
                AppState::Summary
            );
            assert!(app.world().resource::<ValidationState>().message.is_none());
        }
    }

    mod handle_picking_keys_tests {
        use super::*;

        fn press_key(app: &mut App, key: KeyCode) {
            app.world_mut()
                .resource_mut::<ButtonInput<KeyCode>>()
                .press(key);
            let _ = app.world_mut().run_system_once(handle_picking_keys);
            app.world_mut()
                .resource_mut::<ButtonInput<KeyCode>>()
                .clear_just_pressed(key);
        }

        #[test]
        fn q_runs_a_quick_pick() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));

            press_key(&mut app, KeyCode::KeyQ);

            assert!(app.world().resource::<Slip>().is_complete());
        }

        #[test]
        fn c_clears_the_slip() {
            let mut app = setup_test_app(Slip::new(30, 3, &[7, 2]));

            press_key(&mut app, KeyCode::KeyC);

            let slip = app.world().resource::<Slip>();
            assert_eq!(slip.picks(), Vec::<u8>::new());
            assert_eq!(slip.focused(), Some(0));
        }

        #[test]
        fn enter_confirms_a_complete_slip() {
            let mut app = setup_test_app(Slip::new(30, 3, &[7, 2, 9]));

            press_key(&mut app, KeyCode::Enter);
            app.update();

            assert_eq!(
                *app.world().resource::<State<AppState>>().get(),
                AppState::Summary
            );
        }

        #[test]
        fn enter_rejects_an_incomplete_slip() {
            let mut app = setup_test_app(Slip::new(30, 3, &[7]));

            press_key(&mut app, KeyCode::Enter);
            app.update();

            assert_eq!(
                *app.world().resource::<State<AppState>>().get(),
                AppState::Menu
            );
            assert!(app.world().resource::<ValidationState>().message.is_some());
        }

        #[test]
        fn escape_returns_to_the_menu() {
            let mut app = setup_test_app(Slip::new(30, 3, &[]));
            app.world_mut()
                .resource_mut::<NextState<AppState>>()
                .set(AppState::Picking);
            app.update();

            press_key(&mut app, KeyCode::Escape);
            app.update();

            assert_eq!(
                *app.world().resource::<State<AppState>>().get(),
                AppState::Menu
            );
        }
    }

    mod validation_tests {
        use super::*;

        #[test]
        fn selection_change_drops_the_field_error() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));
            app.world_mut().resource_mut::<ValidationState>().message =
                Some("Pick 5 numbers first".to_string());

            app.world_mut()
                .resource_mut::<Messages<PicksChangedEvent>>()
                .write(PicksChangedEvent::new(vec![4], false));
            let _ = app.world_mut().run_system_once(clear_validation_on_change);

            assert!(app.world().resource::<ValidationState>().message.is_none());
        }

        #[test]
        fn label_mirrors_the_validation_message() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            app.world_mut().resource_mut::<ValidationState>().message =
                Some("Pick 5 numbers first".to_string());
            let _ = app.world_mut().run_system_once(refresh_validation_label);

            let text = app
                .world_mut()
                .query_filtered::<&Text, With<ValidationLabel>>()
                .iter(app.world())
                .next()
                .unwrap();
            assert_eq!(text.0, "Pick 5 numbers first");

            let _ = app.world_mut().run_system_once(reset_validation);
            let _ = app.world_mut().run_system_once(refresh_validation_label);

            let text = app
                .world_mut()
                .query_filtered::<&Text, With<ValidationLabel>>()
                .iter(app.world())
                .next()
                .unwrap();
            assert_eq!(text.0, "");
        }
    }

    mod cleanup_picking_tests {
        use super::*;

        #[test]
        fn despawns_the_picking_tree() {
            let mut app = setup_test_app(Slip::new(30, 5, &[]));
            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let _ = app.world_mut().run_system_once(cleanup_picking);

            let screens = app
                .world_mut()
                .query::<&PickingScreen>()
                .iter(app.world())
                .count();
            let cells = app
                .world_mut()
                .query::<&SlotCell>()
                .iter(app.world())
                .count();
            assert_eq!(screens, 0);
            assert_eq!(cells, 0);
        }
    }

    mod slip_config_roundtrip_tests {
        use super::*;

        #[test]
        fn screen_scales_with_the_config() {
            let config = SlipConfig::new(15, 6, vec![]);
            let mut app = setup_test_app(Slip::from_config(&config));

            let _ = app.world_mut().run_system_once(setup_picking_ui);

            let cells = app
                .world_mut()
                .query::<&SlotCell>()
                .iter(app.world())
                .count();
            let chips = app
                .world_mut()
                .query::<&NumberChip>()
                .iter(app.world())
                .count();
            assert_eq!(cells, 6);
            assert_eq!(chips, 16);
        }
    }
}
