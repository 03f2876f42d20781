use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use crate::slip::resources::SlipConfig;

/// Result of offering a number to the slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The number was already on the slip and has been toggled off.
    Removed { slot: usize },
    /// The number was placed into a slot.
    Placed { slot: usize },
    /// No focused slot and no empty slot remained; nothing changed.
    Full,
}

/// The lottery slip: a fixed row of slots holding unique numbers.
///
/// Slots keep their position for the life of the slip; removing a number
/// leaves a gap rather than compacting. A number-to-slot map mirrors the
/// occupied slots so uniqueness checks and toggle detection stay O(1).
#[derive(Resource, Debug, Clone)]
pub struct Slip {
    slots: Vec<Option<u8>>,
    positions: HashMap<u8, usize>,
    focused: Option<usize>,
    max_number: u8,
}

impl Default for Slip {
    fn default() -> Self {
        Self::from_config(&SlipConfig::default())
    }
}

impl Slip {
    /// Build a slip, seeding slots from `initial` in order.
    /// Values above `max_number` or already seen are dropped silently;
    /// seeding stops once every slot is taken. No slot starts focused.
    pub fn new(max_number: u8, field_count: usize, initial: &[u8]) -> Self {
        let mut slots = vec![None; field_count];
        let mut positions = HashMap::new();

        for &number in initial {
            if positions.len() == field_count {
                break;
            }
            if number > max_number || positions.contains_key(&number) {
                continue;
            }
            let slot = positions.len();
            slots[slot] = Some(number);
            positions.insert(number, slot);
        }

        Self {
            slots,
            positions,
            focused: None,
            max_number,
        }
    }

    pub fn from_config(config: &SlipConfig) -> Self {
        Self::new(config.max_number, config.field_count, &config.initial)
    }

    /// Focus a slot so it becomes the target of the next placement.
    /// Out-of-range positions are ignored.
    pub fn set_focus(&mut self, slot: usize) {
        if slot < self.slots.len() {
            self.focused = Some(slot);
        }
    }

    /// Offer a number to the slip.
    ///
    /// A number already on the slip is toggled off (focus untouched).
    /// Otherwise it lands in the focused slot if one is set, else in the
    /// first empty slot; if the target already held a value that value is
    /// dropped from the slip. After a placement focus moves to the first
    /// empty slot, or stays on the target when none is left. With no
    /// focus and no empty slot the call is rejected without mutation.
    pub fn assign(&mut self, number: u8) -> AssignOutcome {
        if let Some(&slot) = self.positions.get(&number) {
            self.slots[slot] = None;
            self.positions.remove(&number);
            return AssignOutcome::Removed { slot };
        }

        let Some(target) = self.focused.or_else(|| self.first_empty()) else {
            return AssignOutcome::Full;
        };

        if let Some(previous) = self.slots[target].take() {
            self.positions.remove(&previous);
        }
        self.slots[target] = Some(number);
        self.positions.insert(number, target);
        self.focused = self.first_empty().or(Some(target));

        AssignOutcome::Placed { slot: target }
    }

    /// Empty every slot and focus the first one.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.positions.clear();
        self.focused = Some(0);
    }

    /// Fill the remaining empty slots with random unpicked numbers.
    /// Returns how many were placed; zero when the slip was already
    /// complete or the palette ran out of numbers.
    pub fn quick_pick<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut available: Vec<u8> = (0..=self.max_number)
            .filter(|n| !self.positions.contains_key(n))
            .collect();

        let mut placed = 0;
        let mut last_filled = None;
        while let Some(slot) = self.first_empty() {
            if available.is_empty() {
                break;
            }
            let number = available.swap_remove(rng.gen_range(0..available.len()));
            self.slots[slot] = Some(number);
            self.positions.insert(number, slot);
            last_filled = Some(slot);
            placed += 1;
        }

        if let Some(slot) = last_filled {
            self.focused = self.first_empty().or(Some(slot));
        }
        placed
    }

    /// Currently assigned numbers in slot order, gaps omitted.
    pub fn picks(&self) -> Vec<u8> {
        self.slots.iter().filter_map(|slot| *slot).collect()
    }

    /// True once every slot holds a number.
    pub fn is_complete(&self) -> bool {
        self.positions.len() == self.slots.len()
    }

    /// Whether the number currently sits in some slot.
    pub fn is_picked(&self, number: u8) -> bool {
        self.positions.contains_key(&number)
    }

    /// Value held by the slot, if any.
    pub fn slot(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Index of the first empty slot in ascending order.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Number of slots on the slip.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Largest number the palette offers.
    pub fn max_number(&self) -> u8 {
        self.max_number
    }

    /// How many slots are still empty.
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.positions.len()
    }
}
