pub use bevy::prelude::*;
pub use crate::states::*;

// Re-export components
pub use crate::audio::components::*;
pub use crate::confetti::components::*;
pub use crate::slip::board::*;
pub use crate::slip::events::*;
pub use crate::slip::resources::*;
pub use crate::ui::components::*;

// Re-export systems
pub use crate::audio::systems::*;
pub use crate::confetti::systems::*;
pub use crate::slip::systems::*;
pub use crate::ui::menu::*;
pub use crate::ui::palette::*;
pub use crate::ui::picking::*;
pub use crate::ui::summary::*;
pub use crate::ui::toast::*;
