use bevy::prelude::*;

use crate::confetti::systems::*;
use crate::slip::sets::SlipSet;
use crate::states::AppState;

pub fn plugin(app: &mut App) {
    app
        // Startup systems (effect asset setup)
        .add_systems(Startup, setup_confetti_effect)
        // Celebration burst when the slip fills
        .add_systems(
            Update,
            spawn_confetti_burst
                .in_set(SlipSet::Feedback)
                .run_if(in_state(AppState::Picking)),
        )
        // Runs in every state so bursts finish even after leaving the screen
        .add_systems(Update, despawn_finished_confetti);
}

#[cfg(test)]
mod tests {
    use bevy_hanabi::prelude::EffectAsset;

    use super::*;
    use crate::confetti::components::ConfettiBurst;
    use crate::confetti::resources::ConfettiEffect;
    use crate::slip::events::SlipCompletedEvent;

    fn setup_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            TaskPoolPlugin::default(),
            bevy::state::app::StatesPlugin,
            bevy::time::TimePlugin,
        ));
        app.init_state::<AppState>();
        app.add_plugins((crate::slip::plugin, plugin));
        app
    }

    fn enter_picking(app: &mut App) {
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Picking);
        app.update();
        app.update();
    }

    fn send_completed(app: &mut App) {
        app.world_mut()
            .resource_mut::<Messages<SlipCompletedEvent>>()
            .write(SlipCompletedEvent);
    }

    fn burst_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<ConfettiBurst>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn test_plugin_builds_without_effect_assets() {
        let mut app = setup_test_app();
        app.update();
        app.update();
        assert!(app.world().get_resource::<ConfettiEffect>().is_none());
    }

    #[test]
    fn test_effect_asset_created_on_startup() {
        let mut app = setup_test_app();
        app.init_resource::<Assets<EffectAsset>>();
        app.update();

        let handle = app.world().resource::<ConfettiEffect>().0.clone();
        let effects = app.world().resource::<Assets<EffectAsset>>();
        assert!(effects.get(&handle).is_some());
    }

    #[test]
    fn test_completion_bursts_while_picking() {
        let mut app = setup_test_app();
        app.init_resource::<Assets<EffectAsset>>();
        enter_picking(&mut app);

        send_completed(&mut app);
        app.update();

        assert_eq!(burst_count(&mut app), 1);
    }

    #[test]
    fn test_no_burst_on_the_menu() {
        let mut app = setup_test_app();
        app.init_resource::<Assets<EffectAsset>>();
        app.update();

        send_completed(&mut app);
        app.update();
        app.update();

        assert_eq!(burst_count(&mut app), 0);
    }
}
