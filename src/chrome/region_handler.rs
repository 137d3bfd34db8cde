/*
 * Synthesizes the window region (clip mask) for a borderless window.
 * The mask only exists to undo two cosmetic OS defaults: the border that hangs
 * over the monitor edges when maximized, and the rounded top corners of themed
 * windows when composition is off. With composition on, any mask would also
 * cut away the compositor's shadow, so none is applied.
 */

use crate::chrome_state::{ClipRegion, WindowChromeState};
use crate::config::ChromeConfig;
use crate::host::ChromeHost;
use crate::types::{Rect, WindowFrameInfo};

use std::cell::RefCell;

use log::{trace, warn};

/// Chooses the mask for the current maximize/composition state.
pub(crate) fn compute_clip_region(
    maximized: bool,
    composition_enabled: bool,
    frame: Option<WindowFrameInfo>,
    unclipped_extent: i32,
) -> ClipRegion {
    if maximized {
        // Client area in window coordinates cuts off the overhanging border.
        match frame {
            Some(info) => ClipRegion::from_rect(info.client.relative_to(&info.window)),
            None => ClipRegion::None,
        }
    } else if !composition_enabled {
        // Resize-independent, so it never has to change while the user drags.
        ClipRegion::from_rect(Rect::new(0, 0, unclipped_extent, unclipped_extent))
    } else {
        ClipRegion::None
    }
}

/*
 * Recomputes the mask and applies it when it differs from the last one. Returns
 * true if the host was asked to change the region.
 *
 * The new mask is recorded before the apply: the system sends messages back into
 * the window while it changes the region, and a nested update has to see the mask
 * that is about to be in place. A failed apply restores the previous value so the
 * next call retries.
 */
pub(crate) fn update_region<H: ChromeHost>(
    state: &RefCell<WindowChromeState>,
    host: &H,
    config: &ChromeConfig,
) -> bool {
    let (handle, composition_enabled) = {
        let state = state.borrow();
        (state.handle(), state.composition_enabled)
    };
    let maximized = host.is_maximized(handle);
    let frame = if maximized {
        host.window_frame_info(handle)
    } else {
        None
    };
    let desired = compute_clip_region(
        maximized,
        composition_enabled,
        frame,
        config.unclipped_extent,
    );

    let previous = std::mem::replace(&mut state.borrow_mut().clip_region, desired);
    if desired == previous {
        trace!("[Region] {handle:?} unchanged ({desired:?}), skipping SetWindowRgn");
        return false;
    }

    match host.set_window_region(handle, desired.as_rect()) {
        Ok(()) => trace!("[Region] {handle:?} region {previous:?} -> {desired:?}"),
        Err(e) => {
            warn!("[Region] Failed to apply region {desired:?} to {handle:?}: {e}");
            let mut state = state.borrow_mut();
            // A nested update may already have replaced the mask.
            if state.clip_region == desired {
                state.clip_region = previous;
            }
        }
    }
    true
}
