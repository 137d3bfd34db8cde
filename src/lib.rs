/*
 * Borderless Win32 windows that keep the native behaviors of a framed window:
 * edge and corner resizing, Aero Snap, maximize onto the work area (with room left
 * for an auto-hide taskbar) and the compositor-drawn drop shadow.
 *
 * The chrome logic is portable. `chrome_state`, `dispatcher` and the handlers in
 * `chrome` only talk to the windowing system through the `ChromeHost` trait, so they
 * compile and test on every platform. `window_common` (Windows only) provides the
 * real host, the window class and the window procedure that feeds the dispatcher.
 */
pub(crate) mod chrome;
pub mod chrome_state;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod host;
pub mod types;
#[cfg(target_os = "windows")]
pub mod window_common;

pub use chrome_state::{ClipRegion, WindowChromeState};
pub use config::ChromeConfig;
pub use dispatcher::{ChromeEvent, ChromeRegistry, Disposition, StateSnapshot};
pub use error::{PlatformError, Result as PlatformResult};
pub use host::ChromeHost;
pub use types::{
    BorderMetrics, HitZone, Margins, Point, Rect, ScreenEdge, WindowFrameInfo, WindowHandle,
};
#[cfg(target_os = "windows")]
pub use window_common::{ChromeWindowManager, ClientHandler, Win32ChromeHost};
