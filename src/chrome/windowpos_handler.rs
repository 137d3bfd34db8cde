/*
 * Reacts to WM_WINDOWPOSCHANGED: caches the new client size, refreshes the
 * region when needed and invalidates only the one-pixel strips along the right
 * and bottom edges instead of the whole window.
 */

use super::region_handler;
use crate::chrome_state::WindowChromeState;
use crate::config::ChromeConfig;
use crate::host::ChromeHost;
use crate::types::Rect;

use std::cell::RefCell;

use log::trace;

/*
 * Strips whose content depends on where the right and bottom edges are. When an
 * axis grows, the old edge strip (sized to the old dimensions) must be repainted;
 * when it shrinks, the new edge strip.
 */
pub(crate) fn edge_strips_to_invalidate(old: (u32, u32), new: (u32, u32)) -> [Rect; 2] {
    let (old_w, old_h) = (old.0 as i32, old.1 as i32);
    let (new_w, new_h) = (new.0 as i32, new.1 as i32);

    let right = if new_w > old_w {
        Rect::new(old_w - 1, 0, old_w, old_h)
    } else {
        Rect::new(new_w - 1, 0, new_w, new_h)
    };
    let bottom = if new_h > old_h {
        Rect::new(0, old_h - 1, old_w, old_h)
    } else {
        Rect::new(0, new_h - 1, new_w, new_h)
    };
    [right, bottom]
}

pub(crate) fn handle_window_pos_changed<H: ChromeHost>(
    state: &RefCell<WindowChromeState>,
    host: &H,
    config: &ChromeConfig,
    frame_changed: bool,
) {
    let handle = state.borrow().handle();
    let client = host.client_rect(handle);
    let (old, new) = {
        let mut state = state.borrow_mut();
        let old = (state.width, state.height);
        state.width = client.right.max(0) as u32;
        state.height = client.bottom.max(0) as u32;
        (old, (state.width, state.height))
    };
    let client_changed = old != new;

    if client_changed || frame_changed {
        region_handler::update_region(state, host, config);
    }

    if client_changed {
        trace!("[WindowPos] {handle:?} client {old:?} -> {new:?}");
        for strip in edge_strips_to_invalidate(old, new) {
            host.invalidate_rect(handle, strip);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;
    use crate::types::WindowHandle;

    #[test]
    fn growing_width_invalidates_old_right_edge_over_old_height() {
        let [right, _] = edge_strips_to_invalidate((200, 150), (260, 180));
        assert_eq!(right, Rect::new(199, 0, 200, 150));
    }

    #[test]
    fn shrinking_invalidates_new_edges() {
        let strips = edge_strips_to_invalidate((200, 150), (120, 100));
        assert_eq!(
            strips,
            [Rect::new(119, 0, 120, 100), Rect::new(0, 99, 120, 100)]
        );
    }

    #[test]
    fn growing_height_invalidates_old_bottom_edge_over_old_width() {
        let [_, bottom] = edge_strips_to_invalidate((200, 150), (180, 220));
        assert_eq!(bottom, Rect::new(0, 149, 200, 150));
    }

    #[test]
    fn size_change_updates_cache_region_and_strips() {
        let host = FakeHost::new();
        host.composition.set(false);
        host.client.set(Rect::new(0, 0, 300, 200));
        let state = RefCell::new(WindowChromeState::new(WindowHandle(5)));
        state.borrow_mut().width = 250;
        state.borrow_mut().height = 200;

        handle_window_pos_changed(&state, &host, &ChromeConfig::default(), false);

        assert_eq!((state.borrow().width(), state.borrow().height()), (300, 200));
        assert_eq!(
            host.region_calls(),
            vec![Some(Rect::new(0, 0, 32767, 32767))]
        );
        assert_eq!(
            host.invalidations(),
            vec![Rect::new(249, 0, 250, 200), Rect::new(0, 199, 300, 200)]
        );
    }

    #[test]
    fn move_without_resize_touches_nothing() {
        let host = FakeHost::new();
        host.client.set(Rect::new(0, 0, 300, 200));
        let state = RefCell::new(WindowChromeState::new(WindowHandle(5)));
        state.borrow_mut().width = 300;
        state.borrow_mut().height = 200;

        handle_window_pos_changed(&state, &host, &ChromeConfig::default(), false);

        assert!(host.calls().is_empty());
    }

    #[test]
    fn frame_change_refreshes_region_without_invalidating() {
        let host = FakeHost::new();
        host.maximized.set(true);
        host.frame_info.set(Some(crate::types::WindowFrameInfo {
            window: Rect::new(-8, -8, 1928, 1088),
            client: Rect::new(0, 0, 1920, 1080),
            border_y: 8,
        }));
        host.client.set(Rect::new(0, 0, 300, 200));
        let state = RefCell::new(WindowChromeState::new(WindowHandle(5)));
        state.borrow_mut().width = 300;
        state.borrow_mut().height = 200;

        handle_window_pos_changed(&state, &host, &ChromeConfig::default(), true);

        assert_eq!(
            host.region_calls(),
            vec![Some(Rect::new(8, 8, 1928, 1088))]
        );
        assert!(host.invalidations().is_empty());
    }
}
