/*
 * Holds the per-window chrome state shared by every handler in `chrome/`.
 * One `WindowChromeState` exists per live window. It is created when the window
 * receives its creation notification and dropped on destruction; the registry in
 * `dispatcher.rs` owns it in between.
 */

use crate::types::{Rect, WindowHandle};

/// Clip mask currently applied to a window.
///
/// An empty rectangle and "no mask" are the same thing, so the only way to build a
/// rectangular mask is `ClipRegion::from_rect`, which folds empty rectangles into `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClipRegion {
    #[default]
    None,
    Rect(Rect),
}

impl ClipRegion {
    pub fn from_rect(rect: Rect) -> Self {
        if rect.is_empty() {
            ClipRegion::None
        } else {
            ClipRegion::Rect(rect)
        }
    }

    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            ClipRegion::None => None,
            ClipRegion::Rect(rect) => Some(*rect),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowChromeState {
    handle: WindowHandle,
    // Client size as of the last size/position change; zero until the first one.
    pub(crate) width: u32,
    pub(crate) height: u32,
    // Last mask that was successfully applied.
    pub(crate) clip_region: ClipRegion,
    pub(crate) theme_enabled: bool,
    pub(crate) composition_enabled: bool,
}

impl WindowChromeState {
    pub fn new(handle: WindowHandle) -> Self {
        Self {
            handle,
            width: 0,
            height: 0,
            clip_region: ClipRegion::None,
            theme_enabled: false,
            composition_enabled: false,
        }
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clip_region(&self) -> ClipRegion {
        self.clip_region
    }

    pub fn theme_enabled(&self) -> bool {
        self.theme_enabled
    }

    pub fn composition_enabled(&self) -> bool {
        self.composition_enabled
    }

    /// Neither the compositor nor a visual theme will keep the OS from painting a caption.
    pub fn is_classic_unthemed(&self) -> bool {
        !self.composition_enabled && !self.theme_enabled
    }
}
