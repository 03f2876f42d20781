pub mod board;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod sets;
pub mod systems;

pub use plugin::plugin;
