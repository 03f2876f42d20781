//! Spawning logic for the slot row.
//!
//! The row is a horizontal strip of square cells, one per slip slot. Cells
//! are buttons so they can take focus on click; each holds a single text
//! child carrying the assigned number.

/// Side length of a slot cell in pixels.
pub const SLOT_SIZE: f32 = 54.0;

/// Gap between neighbouring cells.
pub const SLOT_GAP: f32 = 8.0;

/// Border width of a cell; focus is shown by recoloring, not resizing.
pub const SLOT_BORDER_WIDTH: f32 = 2.0;

/// Corner rounding for cells.
pub const SLOT_BORDER_RADIUS: f32 = 6.0;

/// Font size for the assigned number.
pub const VALUE_FONT_SIZE: f32 = 22.0;

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::ui::components::slot_colors;
use crate::ui::slot_row::components::{SlotCell, SlotValueText};

/// Spawns one slot cell under `parent`, styled for its current value and
/// focus state so the first frame is already correct.
pub fn spawn_slot_cell(
    parent: &mut ChildSpawnerCommands,
    index: usize,
    value: Option<u8>,
    focused: bool,
    accent: Color,
) -> Entity {
    let border = if focused { accent } else { slot_colors::BORDER };
    let background = if value.is_some() {
        slot_colors::FILLED_BACKGROUND
    } else {
        slot_colors::EMPTY_BACKGROUND
    };

    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(SLOT_SIZE),
                height: Val::Px(SLOT_SIZE),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(SLOT_BORDER_WIDTH)),
                ..default()
            },
            BackgroundColor(background),
            BorderColor::all(border),
            BorderRadius::all(Val::Px(SLOT_BORDER_RADIUS)),
            SlotCell { index },
        ))
        .with_children(|cell| {
            cell.spawn((
                Text::new(value.map(|number| number.to_string()).unwrap_or_default()),
                TextFont {
                    font_size: VALUE_FONT_SIZE,
                    ..default()
                },
                TextColor(slot_colors::TEXT),
                TextLayout::new_with_justify(bevy::text::Justify::Center),
                SlotValueText { index },
            ));
        })
        .id()
}

/// Spawns the whole row for the given slip state.
pub fn spawn_slot_row(parent: &mut ChildSpawnerCommands, slip: &Slip, accent: Color) -> Entity {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(SLOT_GAP),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|row| {
            for index in 0..slip.capacity() {
                spawn_slot_cell(
                    row,
                    index,
                    slip.slot(index),
                    slip.focused() == Some(index),
                    accent,
                );
            }
        })
        .id()
}
