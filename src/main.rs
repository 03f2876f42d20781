use bevy::prelude::*;
use bevy_hanabi::HanabiPlugin;
use bevy_kira_audio::prelude::AudioPlugin;
use clap::Parser;
use lucky_picks::slip::resources::SlipConfig;
use lucky_picks::states::AppState;
use lucky_picks::ui::components::SlipTheme;
use lucky_picks::{audio_plugin, confetti_plugin, slip_plugin, ui_plugin};

/// Tap out your lucky numbers on a lottery slip.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// How many numbers one slip holds
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..))]
    fields: u8,

    /// Highest pickable number; the board offers 0 up to this
    #[arg(long, default_value_t = 30)]
    max_number: u8,

    /// Numbers to seed the slip with, comma separated. Entries that do not
    /// parse are skipped so a mangled shell quote never aborts the app.
    #[arg(long, value_delimiter = ',')]
    picks: Vec<String>,

    /// Heading shown on the menu screen
    #[arg(long)]
    title: Option<String>,
}

impl Args {
    fn slip_config(&self) -> SlipConfig {
        let initial = self
            .picks
            .iter()
            .filter_map(|raw| raw.trim().parse().ok())
            .collect();
        SlipConfig::new(self.max_number, self.fields as usize, initial)
    }

    fn slip_theme(&self) -> SlipTheme {
        SlipTheme {
            title: self.title.clone(),
            ..default()
        }
    }
}

fn main() {
    let args = Args::parse();
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins((AudioPlugin, HanabiPlugin))
        .insert_resource(args.slip_config())
        .insert_resource(args.slip_theme())
        .init_state::<AppState>()
        .add_plugins((slip_plugin, ui_plugin, audio_plugin, confetti_plugin))
        .run();
}
