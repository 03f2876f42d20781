//! Number palette: the grid of tappable chips, one per pickable number.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::slip::board::{AssignOutcome, Slip};
use crate::slip::events::{PickPlacedEvent, PickRemovedEvent, PicksChangedEvent, SlipFullEvent};
use crate::ui::components::{chip_colors, SlipTheme};

/// Side length of a number chip in pixels.
pub const CHIP_SIZE: f32 = 40.0;

/// Gap between chips, both directions.
pub const CHIP_GAP: f32 = 6.0;

/// Font size for the chip number.
pub const CHIP_FONT_SIZE: f32 = 16.0;

/// Corner rounding for chips.
pub const CHIP_BORDER_RADIUS: f32 = 4.0;

/// A tappable chip offering one number.
#[derive(Component, Debug, Clone, Copy)]
pub struct NumberChip {
    pub value: u8,
}

/// Text child of a chip; recolored when the number is picked.
#[derive(Component, Debug, Clone, Copy)]
pub struct ChipLabel {
    pub value: u8,
}

/// Spawns one chip under `parent`, styled for whether its number is
/// currently on the slip.
pub fn spawn_number_chip(
    parent: &mut ChildSpawnerCommands,
    number: u8,
    picked: bool,
    accent: Color,
) -> Entity {
    let background = if picked {
        accent
    } else {
        chip_colors::IDLE_BACKGROUND
    };
    let label_color = if picked {
        chip_colors::PICKED_TEXT
    } else {
        chip_colors::TEXT
    };

    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(CHIP_SIZE),
                height: Val::Px(CHIP_SIZE),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(background),
            BorderRadius::all(Val::Px(CHIP_BORDER_RADIUS)),
            NumberChip { value: number },
        ))
        .with_children(|chip| {
            chip.spawn((
                Text::new(number.to_string()),
                TextFont {
                    font_size: CHIP_FONT_SIZE,
                    ..default()
                },
                TextColor(label_color),
                TextLayout::new_with_justify(bevy::text::Justify::Center),
                ChipLabel { value: number },
            ));
        })
        .id()
}

/// Spawns the full palette grid, `theme.palette_columns` chips per row.
pub fn spawn_palette(parent: &mut ChildSpawnerCommands, slip: &Slip, theme: &SlipTheme) -> Entity {
    let numbers: Vec<u8> = (0..=slip.max_number()).collect();
    let columns = theme.palette_columns.max(1);

    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(CHIP_GAP),
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|grid| {
            for chunk in numbers.chunks(columns) {
                grid.spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(CHIP_GAP),
                    ..default()
                })
                .with_children(|row| {
                    for &number in chunk {
                        spawn_number_chip(row, number, slip.is_picked(number), theme.accent);
                    }
                });
            }
        })
        .id()
}

/// Runs one tap against the slip and reports the outcome as messages.
pub fn apply_chip_tap(
    number: u8,
    slip: &mut Slip,
    placed: &mut MessageWriter<PickPlacedEvent>,
    removed: &mut MessageWriter<PickRemovedEvent>,
    full: &mut MessageWriter<SlipFullEvent>,
    changed: &mut MessageWriter<PicksChangedEvent>,
) {
    match slip.assign(number) {
        AssignOutcome::Placed { slot } => {
            placed.write(PickPlacedEvent::new(number, slot));
            changed.write(PicksChangedEvent::new(slip.picks(), slip.is_complete()));
        }
        AssignOutcome::Removed { slot } => {
            removed.write(PickRemovedEvent::new(number, slot));
            changed.write(PicksChangedEvent::new(slip.picks(), slip.is_complete()));
        }
        AssignOutcome::Full => {
            full.write(SlipFullEvent::new(number));
        }
    }
}

/// Handle taps and hover feedback on palette chips.
#[allow(clippy::type_complexity)]
pub fn handle_chip_interaction(
    mut chips: Query<
        (&Interaction, &NumberChip, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut slip: ResMut<Slip>,
    theme: Res<SlipTheme>,
    mut placed: MessageWriter<PickPlacedEvent>,
    mut removed: MessageWriter<PickRemovedEvent>,
    mut full: MessageWriter<SlipFullEvent>,
    mut changed: MessageWriter<PicksChangedEvent>,
) {
    for (interaction, chip, mut background) in &mut chips {
        match *interaction {
            Interaction::Pressed => {
                apply_chip_tap(
                    chip.value,
                    &mut slip,
                    &mut placed,
                    &mut removed,
                    &mut full,
                    &mut changed,
                );
            }
            Interaction::Hovered => {
                if !slip.is_picked(chip.value) {
                    *background = BackgroundColor(chip_colors::HOVER_BACKGROUND);
                }
            }
            Interaction::None => {
                *background = BackgroundColor(if slip.is_picked(chip.value) {
                    theme.accent
                } else {
                    chip_colors::IDLE_BACKGROUND
                });
            }
        }
    }
}

/// Secondary activation: a right-button press over a chip runs the same tap
/// action as a primary press. Bevy's `Interaction` only tracks the primary
/// button, so this reads the mouse state directly and picks the hovered chip.
pub fn handle_chip_secondary_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    chips: Query<(&Interaction, &NumberChip)>,
    mut slip: ResMut<Slip>,
    mut placed: MessageWriter<PickPlacedEvent>,
    mut removed: MessageWriter<PickRemovedEvent>,
    mut full: MessageWriter<SlipFullEvent>,
    mut changed: MessageWriter<PicksChangedEvent>,
) {
    if !mouse_button.just_pressed(MouseButton::Right) {
        return;
    }

    for (interaction, chip) in chips.iter() {
        if *interaction != Interaction::None {
            apply_chip_tap(
                chip.value,
                &mut slip,
                &mut placed,
                &mut removed,
                &mut full,
                &mut changed,
            );
            return;
        }
    }
}

/// Restyles every chip from the slip after a selection change.
pub fn refresh_palette(
    slip: Res<Slip>,
    theme: Res<SlipTheme>,
    mut chips: Query<(&NumberChip, &mut BackgroundColor)>,
    mut labels: Query<(&ChipLabel, &mut TextColor)>,
) {
    for (chip, mut background) in &mut chips {
        *background = BackgroundColor(if slip.is_picked(chip.value) {
            theme.accent
        } else {
            chip_colors::IDLE_BACKGROUND
        });
    }

    for (label, mut color) in &mut labels {
        *color = TextColor(if slip.is_picked(label.value) {
            chip_colors::PICKED_TEXT
        } else {
            chip_colors::TEXT
        });
    }
}
