use bevy::prelude::*;

/// One tappable cell in the slot row. `index` is the slip slot it mirrors.
#[derive(Component, Debug, Clone, Copy)]
pub struct SlotCell {
    pub index: usize,
}

/// Text child of a slot cell showing the assigned number, empty when the
/// slot is free.
#[derive(Component, Debug, Clone, Copy)]
pub struct SlotValueText {
    pub index: usize,
}
