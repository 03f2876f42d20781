use bevy::prelude::*;

/// Fired after every mutation that changed the slip, carrying the numbers
/// now on it in slot order.
#[derive(Message, Debug, Clone)]
pub struct PicksChangedEvent {
    pub values: Vec<u8>,
    pub complete: bool,
}

impl PicksChangedEvent {
    pub fn new(values: Vec<u8>, complete: bool) -> Self {
        Self { values, complete }
    }
}

/// A number landed in a slot.
#[derive(Message, Debug, Clone)]
pub struct PickPlacedEvent {
    pub number: u8,
    pub slot: usize,
}

impl PickPlacedEvent {
    pub fn new(number: u8, slot: usize) -> Self {
        Self { number, slot }
    }
}

/// A number was toggled off its slot.
#[derive(Message, Debug, Clone)]
pub struct PickRemovedEvent {
    pub number: u8,
    pub slot: usize,
}

impl PickRemovedEvent {
    pub fn new(number: u8, slot: usize) -> Self {
        Self { number, slot }
    }
}

/// A number was offered to a full, unfocused slip and rejected.
#[derive(Message, Debug, Clone)]
pub struct SlipFullEvent {
    pub number: u8,
}

impl SlipFullEvent {
    pub fn new(number: u8) -> Self {
        Self { number }
    }
}

/// The slip just reached a number in every slot.
#[derive(Message, Debug, Clone)]
pub struct SlipCompletedEvent;

/// The confirm checkpoint ran while the slip was still incomplete.
#[derive(Message, Debug, Clone)]
pub struct ValidationFailedEvent {
    pub missing: usize,
}

impl ValidationFailedEvent {
    pub fn new(missing: usize) -> Self {
        Self { missing }
    }
}
