pub mod audio;
pub mod confetti;
pub mod slip;
pub mod ui;
pub mod states;
pub mod prelude;

pub use audio::plugin as audio_plugin;
pub use confetti::plugin as confetti_plugin;
pub use slip::plugin as slip_plugin;
pub use ui::plugin as ui_plugin;
