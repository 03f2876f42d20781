use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::slip::sets::SlipSet;
use crate::slip::systems::setup_slip;
use crate::states::AppState;
use crate::ui::components::SlipTheme;
use crate::ui::menu::{cleanup_menu, handle_menu_buttons, setup_menu};
use crate::ui::palette::{handle_chip_interaction, handle_chip_secondary_clicks, refresh_palette};
use crate::ui::picking::{
    cleanup_picking, clear_validation_on_change, handle_control_buttons, handle_picking_keys,
    handle_slot_click, refresh_validation_label, reset_validation, setup_picking_ui,
    ValidationState,
};
use crate::ui::slot_row::SlotRowPlugin;
use crate::ui::summary::{
    cleanup_summary, handle_summary_buttons, handle_summary_keys, setup_summary,
};
use crate::ui::toast::{cleanup_toasts, show_full_toast, tick_toasts};

pub fn plugin(app: &mut App) {
    app.init_resource::<SlipTheme>()
        .init_resource::<ValidationState>()
        .add_plugins(SlotRowPlugin)
        // Menu screen
        .add_systems(OnEnter(AppState::Menu), setup_menu)
        .add_systems(
            Update,
            handle_menu_buttons.run_if(in_state(AppState::Menu)),
        )
        .add_systems(OnExit(AppState::Menu), cleanup_menu)
        // Picking screen; the slot row refresh lives in SlotRowPlugin
        .add_systems(
            OnEnter(AppState::Picking),
            (reset_validation, setup_picking_ui).chain().after(setup_slip),
        )
        .add_systems(
            Update,
            (
                handle_slot_click,
                handle_chip_interaction,
                handle_chip_secondary_clicks,
                handle_control_buttons,
                handle_picking_keys,
            )
                .in_set(SlipSet::Input)
                .run_if(in_state(AppState::Picking)),
        )
        .add_systems(
            Update,
            clear_validation_on_change
                .in_set(SlipSet::Observe)
                .run_if(in_state(AppState::Picking)),
        )
        .add_systems(
            Update,
            (
                refresh_palette
                    .run_if(resource_changed::<Slip>.or(resource_changed::<SlipTheme>)),
                refresh_validation_label.run_if(resource_changed::<ValidationState>),
                show_full_toast,
                tick_toasts,
            )
                .in_set(SlipSet::Feedback)
                .run_if(in_state(AppState::Picking)),
        )
        .add_systems(OnExit(AppState::Picking), (cleanup_picking, cleanup_toasts))
        // Summary screen
        .add_systems(OnEnter(AppState::Summary), setup_summary)
        .add_systems(
            Update,
            (handle_summary_buttons, handle_summary_keys).run_if(in_state(AppState::Summary)),
        )
        .add_systems(OnExit(AppState::Summary), cleanup_summary);
}
