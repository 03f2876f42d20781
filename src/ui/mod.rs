pub mod components;
pub mod menu;
pub mod palette;
pub mod picking;
pub mod plugin;
pub mod slot_row;
pub mod summary;
pub mod toast;

pub use components::*;
pub use menu::*;
pub use palette::*;
pub use picking::*;
pub use plugin::*;
pub use summary::*;
pub use toast::*;
