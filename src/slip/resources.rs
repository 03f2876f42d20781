use bevy::prelude::*;

/// Construction parameters for the slip, usually filled from the command
/// line before the app starts.
#[derive(Resource, Debug, Clone)]
pub struct SlipConfig {
    /// Largest pickable number; the palette runs 0..=max_number.
    pub max_number: u8,
    /// How many slots the slip carries.
    pub field_count: usize,
    /// Numbers to seed the slip with, in order.
    pub initial: Vec<u8>,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            max_number: 30,
            field_count: 5,
            initial: Vec::new(),
        }
    }
}

impl SlipConfig {
    /// Build a config, clamping `field_count` so the slip stays fillable:
    /// at least one slot, at most one per palette number.
    pub fn new(max_number: u8, field_count: usize, initial: Vec<u8>) -> Self {
        let palette_size = max_number as usize + 1;
        Self {
            max_number,
            field_count: field_count.clamp(1, palette_size),
            initial,
        }
    }
}
