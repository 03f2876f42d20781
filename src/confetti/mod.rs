pub mod components;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use plugin::plugin;
