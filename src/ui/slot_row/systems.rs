//! Visual refresh for the slot row.

use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::ui::components::{slot_colors, SlipTheme};
use crate::ui::picking::ValidationState;
use crate::ui::slot_row::components::{SlotCell, SlotValueText};

/// Restyles every cell from the slip: background for occupancy, border
/// for focus, text for the assigned number. While the confirm-time field
/// error is up, empty cells get the error border instead of the plain one;
/// the focused cell keeps its accent so the next target stays visible.
pub fn refresh_slot_row(
    slip: Res<Slip>,
    theme: Res<SlipTheme>,
    validation: Option<Res<ValidationState>>,
    mut cells: Query<(&SlotCell, &mut BackgroundColor, &mut BorderColor)>,
    mut values: Query<(&SlotValueText, &mut Text)>,
) {
    let error_active = validation.map(|v| v.message.is_some()).unwrap_or(false);

    for (cell, mut background, mut border) in &mut cells {
        let filled = slip.slot(cell.index).is_some();
        *background = BackgroundColor(if filled {
            slot_colors::FILLED_BACKGROUND
        } else {
            slot_colors::EMPTY_BACKGROUND
        });
        *border = BorderColor::all(if slip.focused() == Some(cell.index) {
            theme.accent
        } else if error_active && !filled {
            slot_colors::INVALID_BORDER
        } else {
            slot_colors::BORDER
        });
    }

    for (value, mut text) in &mut values {
        **text = match slip.slot(value.index) {
            Some(number) => number.to_string(),
            None => String::new(),
        };
    }
}
