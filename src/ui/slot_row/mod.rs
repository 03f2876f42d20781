//! Slot row widget: the strip of cells mirroring the slip.

pub mod components;
pub mod plugin;
pub mod spawn;
pub mod systems;

pub use components::{SlotCell, SlotValueText};
pub use plugin::SlotRowPlugin;
pub use spawn::{spawn_slot_cell, spawn_slot_row};
