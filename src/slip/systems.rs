use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::slip::events::{PicksChangedEvent, SlipCompletedEvent};
use crate::slip::resources::SlipConfig;

/// Rebuild the slip from config when the picking screen opens and
/// announce the seeded selection.
pub fn setup_slip(
    config: Res<SlipConfig>,
    mut slip: ResMut<Slip>,
    mut changed: MessageWriter<PicksChangedEvent>,
) {
    *slip = Slip::from_config(&config);
    info!(
        "slip ready: {} slots, numbers 0..={}",
        slip.capacity(),
        slip.max_number()
    );
    changed.write(PicksChangedEvent::new(slip.picks(), slip.is_complete()));
}

/// Log every selection change.
pub fn log_picks(mut changed: MessageReader<PicksChangedEvent>) {
    for event in changed.read() {
        if event.complete {
            info!("slip complete: {:?}", event.values);
        } else {
            info!("slip picks: {:?}", event.values);
        }
    }
}

/// Emit a completion event on the frame the slip fills its last slot.
/// Edits to an already complete slip (replacing one number with another)
/// do not re-fire.
pub fn watch_completion(
    mut changed: MessageReader<PicksChangedEvent>,
    mut completed: MessageWriter<SlipCompletedEvent>,
    mut was_complete: Local<bool>,
) {
    for event in changed.read() {
        if event.complete && !*was_complete {
            completed.write(SlipCompletedEvent);
        }
        *was_complete = event.complete;
    }
}
