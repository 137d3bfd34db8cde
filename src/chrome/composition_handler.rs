/*
 * Tracks desktop composition and visual-theme state for a borderless window.
 * Composition changes reconfigure the DWM frame and always end with a region
 * update; theme changes only refresh the cached flag.
 */

use super::region_handler;
use crate::chrome_state::WindowChromeState;
use crate::config::ChromeConfig;
use crate::host::ChromeHost;

use std::cell::RefCell;

use log::{debug, warn};

pub(crate) fn handle_composition_changed<H: ChromeHost>(
    state: &RefCell<WindowChromeState>,
    host: &H,
    config: &ChromeConfig,
) {
    let handle = state.borrow().handle();
    let enabled = host.is_composition_enabled();
    // Stored before the DWM calls, which may send messages back into the window.
    state.borrow_mut().composition_enabled = enabled;
    debug!("[Composition] {handle:?} composition enabled: {enabled}");

    if enabled {
        // The compositor only draws a shadow for windows that have some frame.
        if let Err(e) = host.extend_frame_into_client_area(handle, config.shadow_margins) {
            warn!("[Composition] DwmExtendFrameIntoClientArea failed for {handle:?}: {e}");
        }
        // Needed because the window reports a zero-sized non-client area.
        if let Err(e) = host.enable_non_client_rendering(handle) {
            warn!("[Composition] Enabling NC rendering policy failed for {handle:?}: {e}");
        }
    }

    region_handler::update_region(state, host, config);
}

pub(crate) fn handle_theme_changed<H: ChromeHost>(state: &RefCell<WindowChromeState>, host: &H) {
    let active = host.is_theme_active();
    let mut state = state.borrow_mut();
    state.theme_enabled = active;
    debug!("[Theme] {:?} visual theme active: {active}", state.handle());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::{FakeHost, HostCall};
    use crate::types::{Margins, Rect, WindowHandle};

    #[test]
    fn enabling_composition_extends_frame_then_updates_region() {
        let host = FakeHost::new();
        let config = ChromeConfig::default();
        let state = RefCell::new(WindowChromeState::new(WindowHandle(3)));
        // Start from the uncomposited region so the update has something to clear.
        host.composition.set(false);
        handle_composition_changed(&state, &host, &config);
        host.clear_calls();
        host.composition.set(true);

        handle_composition_changed(&state, &host, &config);

        assert!(state.borrow().composition_enabled());
        assert_eq!(
            host.calls(),
            vec![
                HostCall::ExtendFrame(Margins {
                    left: 0,
                    right: 0,
                    top: 1,
                    bottom: 0
                }),
                HostCall::EnableNcRendering,
                HostCall::SetRegion(None),
            ]
        );
    }

    #[test]
    fn disabling_composition_skips_dwm_calls() {
        let host = FakeHost::new();
        host.composition.set(false);
        let state = RefCell::new(WindowChromeState::new(WindowHandle(3)));

        handle_composition_changed(&state, &host, &ChromeConfig::default());

        assert!(!state.borrow().composition_enabled());
        assert_eq!(
            host.calls(),
            vec![HostCall::SetRegion(Some(Rect::new(0, 0, 32767, 32767)))]
        );
    }

    #[test]
    fn theme_change_only_refreshes_flag() {
        let host = FakeHost::new();
        let state = RefCell::new(WindowChromeState::new(WindowHandle(3)));

        handle_theme_changed(&state, &host);
        assert!(state.borrow().theme_enabled());
        host.theme.set(false);
        handle_theme_changed(&state, &host);

        assert!(!state.borrow().theme_enabled());
        assert!(host.calls().is_empty());
    }
}
