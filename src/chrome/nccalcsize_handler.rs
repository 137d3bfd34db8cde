/*
 * Answers the non-client size negotiation (WM_NCCALCSIZE).
 *
 * The native layer always lets the default procedure compute its proposal first,
 * otherwise tile/cascade stops working. This module then turns (original rect,
 * default proposal) into the client rectangle the window reports:
 *
 * - restored: the original window rectangle, so the whole window is client area
 *   while the physical frame still exists for resizing and the shadow;
 * - maximized: the default proposal with the title bar slice removed, minus one
 *   unit on the edge of an auto-hide app bar if the result would otherwise look
 *   fullscreen to the shell.
 */

use crate::chrome_state::WindowChromeState;
use crate::host::ChromeHost;
use crate::types::{Rect, ScreenEdge};

use std::cell::RefCell;

use log::{debug, trace};

/// Facts about the window that the geometry transform depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NcGeometryContext {
    pub maximized: bool,
    pub border_y: i32,
    pub monitor: Option<Rect>,
}

/*
 * Pure transform from the original rectangle and the default proposal to the
 * effective client rectangle. `has_autohide_bar` is consulted in the fixed probe
 * order only when the result exactly covers the monitor.
 */
pub(crate) fn negotiate_client_rect<F>(
    context: NcGeometryContext,
    original: Rect,
    default_proposal: Rect,
    mut has_autohide_bar: F,
) -> Rect
where
    F: FnMut(ScreenEdge) -> bool,
{
    if !context.maximized {
        return original;
    }

    let mut client = Rect {
        top: original.top + context.border_y,
        ..default_proposal
    };

    // A client rect equal to the monitor reads as fullscreen, and the shell then
    // stops raising auto-hide bars on that monitor.
    if context.monitor == Some(client) {
        if let Some(edge) = ScreenEdge::AUTOHIDE_PROBE_ORDER
            .into_iter()
            .find(|edge| has_autohide_bar(*edge))
        {
            debug!("[NcCalcSize] Auto-hide bar on {edge:?}, leaving one unit uncovered");
            edge.shrink(&mut client);
        }
    }
    client
}

/// Probes one edge of `monitor`, honoring the legacy primary-monitor-only query.
pub(crate) fn has_autohide_appbar<H: ChromeHost>(host: &H, edge: ScreenEdge, monitor: Rect) -> bool {
    if host.supports_per_monitor_appbar_query() {
        return host.query_autohide_appbar(edge, Some(monitor));
    }
    // The legacy query cannot name a monitor; it only answers for the primary one.
    if monitor.left != 0 || monitor.top != 0 {
        return false;
    }
    host.query_autohide_appbar(edge, None)
}

pub(crate) fn handle_nccalcsize<H: ChromeHost>(
    state: &RefCell<WindowChromeState>,
    host: &H,
    original: Rect,
    default_proposal: Rect,
) -> Rect {
    // No borrow is held here: the app bar query can pump sent messages.
    let handle = state.borrow().handle();
    let maximized = host.is_maximized(handle);
    let context = if maximized {
        NcGeometryContext {
            maximized,
            border_y: host
                .window_frame_info(handle)
                .map(|info| info.border_y)
                .unwrap_or(0),
            monitor: host.monitor_rect(handle),
        }
    } else {
        NcGeometryContext {
            maximized,
            border_y: 0,
            monitor: None,
        }
    };

    let client = negotiate_client_rect(context, original, default_proposal, |edge| {
        context
            .monitor
            .is_some_and(|monitor| has_autohide_appbar(host, edge, monitor))
    });
    trace!(
        "[NcCalcSize] {handle:?} maximized={maximized} original={original:?} default={default_proposal:?} -> {client:?}"
    );
    client
}
