/*
 * Tunables for borderless windows. A single `ChromeConfig` is handed to the window
 * manager and shared by every window it creates.
 */

use crate::types::Margins;

/// Largest coordinate a GDI region accepts; a clip this big never cuts real content.
pub const DEFAULT_UNCLIPPED_EXTENT: i32 = 32767;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeConfig {
    /// Edge length of the origin-anchored region applied when composition is off.
    pub unclipped_extent: i32,
    /// Frame extension requested from the compositor so it keeps drawing a shadow.
    pub shadow_margins: Margins,
    /// Start a caption drag when the left button goes down anywhere in the client area.
    pub drag_anywhere: bool,
    /// Post a quit message when a managed window is destroyed.
    pub quit_on_destroy: bool,
    pub class_name: String,
    pub title: String,
    pub initial_size: (i32, i32),
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            unclipped_extent: DEFAULT_UNCLIPPED_EXTENT,
            shadow_margins: Margins {
                left: 0,
                right: 0,
                top: 1,
                bottom: 0,
            },
            drag_anywhere: true,
            quit_on_destroy: true,
            class_name: "borderless-window".to_string(),
            title: "Borderless Window".to_string(),
            initial_size: (200, 200),
        }
    }
}
