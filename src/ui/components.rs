use bevy::prelude::*;

/// Root marker for the menu screen tree.
#[derive(Component)]
pub struct MenuScreen;

/// Root marker for the picking screen tree.
#[derive(Component)]
pub struct PickingScreen;

/// Root marker for the summary screen tree.
#[derive(Component)]
pub struct SummaryScreen;

#[derive(Component)]
pub struct MenuButton;

#[derive(Component)]
pub struct PlayButton;

#[derive(Component)]
pub struct ExitButton;

/// Shared marker for the picking screen's action buttons so their
/// handler does not trip over chips and slot cells.
#[derive(Component)]
pub struct ActionButton;

#[derive(Component)]
pub struct QuickPickButton;

#[derive(Component)]
pub struct ClearButton;

#[derive(Component)]
pub struct ConfirmButton;

#[derive(Component)]
pub struct NewSlipButton;

#[derive(Component)]
pub struct BackToMenuButton;

/// Label under the slot row that reports an incomplete slip on confirm.
#[derive(Component)]
pub struct ValidationLabel;

/// Presentation knobs shared by the picking and summary screens.
#[derive(Resource, Debug, Clone)]
pub struct SlipTheme {
    /// Heading shown above the slot row; falls back to a stock title.
    pub title: Option<String>,
    /// Chips per palette row.
    pub palette_columns: usize,
    /// Highlight color for the focused slot and picked chips.
    pub accent: Color,
}

impl Default for SlipTheme {
    fn default() -> Self {
        Self {
            title: None,
            palette_columns: 10,
            accent: Color::srgb(0.95, 0.78, 0.22),
        }
    }
}

impl SlipTheme {
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or("Lucky Picks")
    }
}

/// Colors for slot cells on the slip.
pub mod slot_colors {
    use bevy::prelude::*;

    pub const EMPTY_BACKGROUND: Color = Color::srgb(0.16, 0.16, 0.21);
    pub const FILLED_BACKGROUND: Color = Color::srgb(0.15, 0.34, 0.23);
    pub const HOVER_BACKGROUND: Color = Color::srgb(0.24, 0.24, 0.31);
    pub const BORDER: Color = Color::srgb(0.42, 0.42, 0.48);
    /// Matches the validation label so the incomplete cells and the
    /// message read as one signal.
    pub const INVALID_BORDER: Color = Color::srgb(0.95, 0.45, 0.40);
    pub const TEXT: Color = Color::srgb(0.92, 0.92, 0.92);
}

/// Colors for number chips in the palette.
pub mod chip_colors {
    use bevy::prelude::*;

    pub const IDLE_BACKGROUND: Color = Color::srgb(0.20, 0.20, 0.26);
    pub const HOVER_BACKGROUND: Color = Color::srgb(0.30, 0.30, 0.38);
    pub const PICKED_TEXT: Color = Color::srgb(0.10, 0.10, 0.12);
    pub const TEXT: Color = Color::srgb(0.88, 0.88, 0.88);
}

/// Colors for plain action buttons.
pub mod button_colors {
    use bevy::prelude::*;

    pub const NORMAL: Color = Color::srgb(0.22, 0.22, 0.28);
    pub const HOVERED: Color = Color::srgb(0.32, 0.32, 0.40);
    pub const PRESSED: Color = Color::srgb(0.12, 0.12, 0.16);
    pub const TEXT: Color = Color::srgb(0.92, 0.92, 0.92);
}
