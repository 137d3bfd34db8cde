/*
 * Resolves WM_NCHITTEST for a borderless window. The whole window is client area,
 * so the resize zones are carved out of it using the system frame metrics.
 */

use crate::chrome_state::WindowChromeState;
use crate::host::ChromeHost;
use crate::types::{BorderMetrics, HitZone, Point};

use std::cell::RefCell;

use log::trace;

/// Thickness of the edge zones and width of the corner zones, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameMetrics {
    pub frame_size: i32,
    pub diagonal_width: i32,
}

impl FrameMetrics {
    pub(crate) fn from_border_metrics(metrics: BorderMetrics) -> Self {
        // NONCLIENTMETRICS has no separate horizontal frame size, so one value serves both axes.
        let frame_size = metrics.frame + metrics.padded_border;
        Self {
            frame_size,
            // Corner handles are wider than the frame.
            diagonal_width: frame_size * 2 + metrics.border,
        }
    }
}

/*
 * Maps a window-local point to a zone. Top and bottom rows are tested first and
 * contain the corners; the side edges only apply between them.
 */
pub(crate) fn resolve_hit_zone(
    local: Point,
    width: i32,
    height: i32,
    metrics: FrameMetrics,
) -> HitZone {
    let FrameMetrics {
        frame_size,
        diagonal_width,
    } = metrics;

    let row = if local.y < frame_size {
        Some((HitZone::TopLeft, HitZone::Top, HitZone::TopRight))
    } else if local.y >= height - frame_size {
        Some((HitZone::BottomLeft, HitZone::Bottom, HitZone::BottomRight))
    } else {
        None
    };

    if let Some((left_corner, edge, right_corner)) = row {
        return if local.x < diagonal_width {
            left_corner
        } else if local.x >= width - diagonal_width {
            right_corner
        } else {
            edge
        };
    }

    if local.x < frame_size {
        HitZone::Left
    } else if local.x >= width - frame_size {
        HitZone::Right
    } else {
        HitZone::Client
    }
}

pub(crate) fn handle_nchittest<H: ChromeHost>(
    state: &RefCell<WindowChromeState>,
    host: &H,
    screen_point: Point,
) -> HitZone {
    let (handle, width, height) = {
        let state = state.borrow();
        (state.handle(), state.width as i32, state.height as i32)
    };
    // Resize handles make no sense on a maximized window.
    if host.is_maximized(handle) {
        return HitZone::Client;
    }

    let local = host.screen_to_client(handle, screen_point);
    let metrics = FrameMetrics::from_border_metrics(host.border_metrics());
    let zone = resolve_hit_zone(local, width, height, metrics);
    trace!("[HitTest] {handle:?} {screen_point:?} (local {local:?}) -> {zone:?}");
    zone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;
    use crate::types::WindowHandle;

    const W: i32 = 400;
    const H: i32 = 300;
    const METRICS: FrameMetrics = FrameMetrics {
        frame_size: 8,
        diagonal_width: 19,
    };

    fn zone_at(x: i32, y: i32) -> HitZone {
        resolve_hit_zone(Point::new(x, y), W, H, METRICS)
    }

    #[test]
    fn frame_metrics_combine_frame_padding_and_border() {
        let metrics = FrameMetrics::from_border_metrics(BorderMetrics {
            frame: 4,
            padded_border: 4,
            border: 3,
        });
        assert_eq!(metrics, METRICS);
    }

    #[test]
    fn partitions_window_into_zones() {
        assert_eq!(zone_at(5, 5), HitZone::TopLeft);
        assert_eq!(zone_at(5, H / 2), HitZone::Left);
        assert_eq!(zone_at(W / 2, 5), HitZone::Top);
        assert_eq!(zone_at(W / 2, H / 2), HitZone::Client);
    }

    #[test]
    fn corners_extend_past_the_frame_along_top_and_bottom() {
        assert_eq!(zone_at(18, 0), HitZone::TopLeft);
        assert_eq!(zone_at(19, 0), HitZone::Top);
        assert_eq!(zone_at(W - 19, 2), HitZone::TopRight);
        assert_eq!(zone_at(W - 20, 2), HitZone::Top);
        assert_eq!(zone_at(3, H - 8), HitZone::BottomLeft);
        assert_eq!(zone_at(W - 1, H - 1), HitZone::BottomRight);
        assert_eq!(zone_at(W / 2, H - 1), HitZone::Bottom);
    }

    #[test]
    fn side_edges_use_frame_size_not_diagonal_width() {
        assert_eq!(zone_at(7, H / 2), HitZone::Left);
        assert_eq!(zone_at(8, H / 2), HitZone::Client);
        assert_eq!(zone_at(W - 8, H / 2), HitZone::Right);
        assert_eq!(zone_at(W - 9, H / 2), HitZone::Client);
        // Corner width does not apply below the top row.
        assert_eq!(zone_at(12, 8), HitZone::Client);
    }

    #[test]
    fn maximized_window_is_all_client() {
        let host = FakeHost::new();
        host.maximized.set(true);
        let state = RefCell::new(WindowChromeState::new(WindowHandle(4)));
        state.borrow_mut().width = W as u32;
        state.borrow_mut().height = H as u32;

        for point in [Point::new(0, 0), Point::new(5, H / 2), Point::new(W - 1, H - 1)] {
            assert_eq!(handle_nchittest(&state, &host, point), HitZone::Client);
        }
    }

    #[test]
    fn converts_screen_point_to_window_local() {
        let host = FakeHost::new();
        host.window_origin.set(Point::new(1000, 500));
        let state = RefCell::new(WindowChromeState::new(WindowHandle(4)));
        state.borrow_mut().width = W as u32;
        state.borrow_mut().height = H as u32;

        assert_eq!(
            handle_nchittest(&state, &host, Point::new(1005, 505)),
            HitZone::TopLeft
        );
        assert_eq!(
            handle_nchittest(&state, &host, Point::new(1000 + W / 2, 500 + H / 2)),
            HitZone::Client
        );
    }
}
