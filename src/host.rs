/*
 * The seam between the chrome state machine and the windowing system.
 * Every query or mutation the chrome components perform goes through `ChromeHost`,
 * so the components stay platform-agnostic. `window_common::Win32ChromeHost` backs
 * real windows; tests drive the components with the recording `FakeHost` below.
 *
 * Queries never fail: implementations return the safe default (composition and theme
 * disabled, no auto-hide bar, no monitor) when the underlying call fails.
 */

use crate::error::Result as PlatformResult;
use crate::types::{BorderMetrics, Margins, Point, Rect, ScreenEdge, WindowFrameInfo, WindowHandle};

pub trait ChromeHost {
    fn is_maximized(&self, handle: WindowHandle) -> bool;

    /// Window and client rectangles in screen coordinates plus the window border width.
    fn window_frame_info(&self, handle: WindowHandle) -> Option<WindowFrameInfo>;

    /// Client rectangle in client coordinates (origin is always 0,0).
    fn client_rect(&self, handle: WindowHandle) -> Rect;

    fn screen_to_client(&self, handle: WindowHandle, point: Point) -> Point;

    fn border_metrics(&self) -> BorderMetrics;

    /// Applies the clip region; `None` removes it. Redraws the window.
    fn set_window_region(&self, handle: WindowHandle, region: Option<Rect>) -> PlatformResult<()>;

    fn invalidate_rect(&self, handle: WindowHandle, rect: Rect);

    fn is_composition_enabled(&self) -> bool;

    fn extend_frame_into_client_area(
        &self,
        handle: WindowHandle,
        margins: Margins,
    ) -> PlatformResult<()>;

    /// Forces the compositor to render the non-client area even though none is reported.
    fn enable_non_client_rendering(&self, handle: WindowHandle) -> PlatformResult<()>;

    fn is_theme_active(&self) -> bool;

    /// Full rectangle of the monitor the window is on (primary as fallback).
    fn monitor_rect(&self, handle: WindowHandle) -> Option<Rect>;

    /// Whether the shell can be asked about auto-hide bars on a specific monitor.
    fn supports_per_monitor_appbar_query(&self) -> bool;

    /// Asks the shell for an auto-hide bar on `edge`. `monitor` is `None` for the
    /// legacy query, which only knows about the primary monitor.
    fn query_autohide_appbar(&self, edge: ScreenEdge, monitor: Option<Rect>) -> bool;
}
