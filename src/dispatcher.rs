/*
 * Routes chrome events to the handlers in `chrome/` and tells the native layer how
 * to answer the underlying message.
 *
 * `ChromeRegistry` maps each live window to its `WindowChromeState`. It is owned by
 * the window-management layer (see `window_common::ChromeWindowManager`) and is the
 * only table of per-window state.
 *
 * The system sends messages back into a window while a handler is still running
 * (applying a region, changing DWM attributes, waiting on the shell). Each state
 * therefore lives behind an `Rc<RefCell<_>>` and handlers only borrow it between
 * host calls, so nested events see and update the live state.
 */

use crate::chrome::{
    composition_handler, hittest_handler, nccalcsize_handler, windowpos_handler,
};
use crate::chrome_state::WindowChromeState;
use crate::config::ChromeConfig;
use crate::host::ChromeHost;
use crate::types::{Point, Rect, WindowHandle};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace, warn};

/// Window messages the chrome cares about, already decoded from their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeEvent {
    Create,
    CompositionChanged,
    ThemeChanged,
    /// `original` is the proposed window rectangle before the default procedure ran,
    /// `default_proposal` the client rectangle it computed.
    NcCalcSize {
        original: Rect,
        default_proposal: Rect,
    },
    NcHitTest {
        point: Point,
    },
    NcPaint,
    NcUahDrawCaption,
    NcUahDrawFrame,
    NcActivate,
    WindowPosChanged {
        frame_changed: bool,
    },
    SetIcon,
    SetText,
    LeftButtonDown,
    Close,
    Destroy,
    Other,
}

/// How the native layer must answer the message that produced a `ChromeEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Run the default window procedure unchanged.
    Default,
    /// Return this value without default processing.
    Handled(isize),
    /// Write this rectangle back as the client rectangle and return 0.
    ClientRect(Rect),
    /// Run the default procedure with the region parameter set to -1 so the
    /// border is repainted as if active regardless of activation state.
    DefaultFullBorderRepaint,
    /// Run the default procedure with the visible style temporarily cleared.
    DefaultInvisible,
    /// Release mouse capture and start a caption drag.
    BeginCaptionDrag,
    /// Destroy the window and return 0.
    DestroyWindow,
    /// State was released; return 0, posting a quit message if `quit` is set.
    Destroyed { quit: bool },
}

#[derive(Debug, Default)]
pub struct ChromeRegistry {
    config: ChromeConfig,
    windows: RefCell<HashMap<WindowHandle, Rc<RefCell<WindowChromeState>>>>,
}

impl ChromeRegistry {
    pub fn new(config: ChromeConfig) -> Self {
        Self {
            config,
            windows: RefCell::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn is_attached(&self, handle: WindowHandle) -> bool {
        self.windows.borrow().contains_key(&handle)
    }

    pub fn window_count(&self) -> usize {
        self.windows.borrow().len()
    }

    /// Copy of a window's state, for inspection.
    pub fn snapshot(&self, handle: WindowHandle) -> Option<StateSnapshot> {
        self.state(handle)
            .map(|state| StateSnapshot::from(&*state.borrow()))
    }

    fn state(&self, handle: WindowHandle) -> Option<Rc<RefCell<WindowChromeState>>> {
        self.windows.borrow().get(&handle).cloned()
    }

    fn attach(&self, handle: WindowHandle) {
        let previous = self.windows.borrow_mut().insert(
            handle,
            Rc::new(RefCell::new(WindowChromeState::new(handle))),
        );
        if previous.is_some() {
            warn!("[Registry] {handle:?} attached twice; previous chrome state replaced");
        } else {
            debug!("[Registry] Chrome state attached to {handle:?}");
        }
    }

    fn detach(&self, handle: WindowHandle) -> bool {
        // A handler still running for this window keeps its own `Rc` until it returns.
        let released = self.windows.borrow_mut().remove(&handle).is_some();
        if released {
            debug!("[Registry] Chrome state released for {handle:?}");
        }
        released
    }

    /*
     * Single entry point for every message of a managed window. Windows without
     * state (not yet created, already destroyed) fall through to default handling.
     * Nested calls for the same window are routed like any other event.
     */
    pub fn dispatch<H: ChromeHost>(
        &self,
        host: &H,
        handle: WindowHandle,
        event: ChromeEvent,
    ) -> Disposition {
        match event {
            ChromeEvent::Create => {
                self.attach(handle);
                return Disposition::Default;
            }
            ChromeEvent::Destroy => {
                return if self.detach(handle) {
                    Disposition::Destroyed {
                        quit: self.config.quit_on_destroy,
                    }
                } else {
                    Disposition::Default
                };
            }
            _ => {}
        }

        let Some(state) = self.state(handle) else {
            trace!("[Registry] No chrome state for {handle:?}, default handling {event:?}");
            return Disposition::Default;
        };
        self.route(&state, host, event)
    }

    fn route<H: ChromeHost>(
        &self,
        state: &RefCell<WindowChromeState>,
        host: &H,
        event: ChromeEvent,
    ) -> Disposition {
        let config = &self.config;
        match event {
            ChromeEvent::CompositionChanged => {
                composition_handler::handle_composition_changed(state, host, config);
                Disposition::Handled(0)
            }
            ChromeEvent::ThemeChanged => {
                composition_handler::handle_theme_changed(state, host);
                Disposition::Default
            }
            ChromeEvent::WindowPosChanged { frame_changed } => {
                windowpos_handler::handle_window_pos_changed(state, host, config, frame_changed);
                Disposition::Handled(0)
            }
            ChromeEvent::NcCalcSize {
                original,
                default_proposal,
            } => Disposition::ClientRect(nccalcsize_handler::handle_nccalcsize(
                state,
                host,
                original,
                default_proposal,
            )),
            ChromeEvent::NcHitTest { point } => {
                Disposition::Handled(hittest_handler::handle_nchittest(state, host, point).code())
            }
            // Blocking NC paint while composited would also block the shadow.
            ChromeEvent::NcPaint if state.borrow().composition_enabled => Disposition::Default,
            ChromeEvent::NcPaint | ChromeEvent::NcUahDrawCaption | ChromeEvent::NcUahDrawFrame => {
                Disposition::Handled(0)
            }
            ChromeEvent::NcActivate => Disposition::DefaultFullBorderRepaint,
            ChromeEvent::SetIcon | ChromeEvent::SetText if state.borrow().is_classic_unthemed() => {
                Disposition::DefaultInvisible
            }
            ChromeEvent::LeftButtonDown if config.drag_anywhere => Disposition::BeginCaptionDrag,
            ChromeEvent::Close => Disposition::DestroyWindow,
            _ => Disposition::Default,
        }
    }
}

/// Read-only copy of a window's chrome state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub width: u32,
    pub height: u32,
    pub clip_region: crate::chrome_state::ClipRegion,
    pub theme_enabled: bool,
    pub composition_enabled: bool,
}

impl From<&WindowChromeState> for StateSnapshot {
    fn from(state: &WindowChromeState) -> Self {
        Self {
            width: state.width(),
            height: state.height(),
            clip_region: state.clip_region(),
            theme_enabled: state.theme_enabled(),
            composition_enabled: state.composition_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome_state::ClipRegion;
    use crate::host::fake::{FakeHost, HostCall};
    use crate::types::HitZone;
    use std::rc::Rc;

    const HANDLE: WindowHandle = WindowHandle(0x1234);

    fn created_registry(host: &FakeHost) -> ChromeRegistry {
        let registry = ChromeRegistry::new(ChromeConfig::default());
        registry.dispatch(host, HANDLE, ChromeEvent::Create);
        registry
    }

    #[test]
    fn events_before_create_use_default_handling() {
        let host = FakeHost::new();
        let registry = ChromeRegistry::new(ChromeConfig::default());

        for event in [
            ChromeEvent::Other,
            ChromeEvent::NcHitTest {
                point: Point::new(1, 1),
            },
            ChromeEvent::CompositionChanged,
            ChromeEvent::Close,
        ] {
            assert_eq!(registry.dispatch(&host, HANDLE, event), Disposition::Default);
        }
        assert!(host.calls().is_empty());
        assert!(!registry.is_attached(HANDLE));
    }

    #[test]
    fn create_attaches_and_destroy_releases_state() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        assert!(registry.is_attached(HANDLE));

        let disposition = registry.dispatch(&host, HANDLE, ChromeEvent::Destroy);

        assert_eq!(disposition, Disposition::Destroyed { quit: true });
        assert_eq!(registry.window_count(), 0);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::NcPaint),
            Disposition::Default
        );
    }

    #[test]
    fn close_becomes_destroy_request() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::Close),
            Disposition::DestroyWindow
        );
        assert!(registry.is_attached(HANDLE));
    }

    #[test]
    fn hit_test_returns_zone_code() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        host.client.set(Rect::new(0, 0, 400, 300));
        registry.dispatch(
            &host,
            HANDLE,
            ChromeEvent::WindowPosChanged {
                frame_changed: false,
            },
        );

        let disposition = registry.dispatch(
            &host,
            HANDLE,
            ChromeEvent::NcHitTest {
                point: Point::new(5, 5),
            },
        );

        assert_eq!(disposition, Disposition::Handled(HitZone::TopLeft.code()));
    }

    #[test]
    fn nc_calc_size_returns_original_rect_when_restored() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        let original = Rect::new(10, 20, 310, 220);

        let disposition = registry.dispatch(
            &host,
            HANDLE,
            ChromeEvent::NcCalcSize {
                original,
                default_proposal: Rect::new(18, 51, 302, 212),
            },
        );

        assert_eq!(disposition, Disposition::ClientRect(original));
    }

    #[test]
    fn nc_paint_blocked_only_without_composition() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        host.composition.set(false);
        registry.dispatch(&host, HANDLE, ChromeEvent::CompositionChanged);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::NcPaint),
            Disposition::Handled(0)
        );

        host.composition.set(true);
        registry.dispatch(&host, HANDLE, ChromeEvent::CompositionChanged);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::NcPaint),
            Disposition::Default
        );
        for event in [ChromeEvent::NcUahDrawCaption, ChromeEvent::NcUahDrawFrame] {
            assert_eq!(
                registry.dispatch(&host, HANDLE, event),
                Disposition::Handled(0)
            );
        }
    }

    #[test]
    fn set_text_hides_window_only_when_unthemed_and_uncomposited() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        host.composition.set(false);
        host.theme.set(false);
        registry.dispatch(&host, HANDLE, ChromeEvent::CompositionChanged);
        registry.dispatch(&host, HANDLE, ChromeEvent::ThemeChanged);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::SetText),
            Disposition::DefaultInvisible
        );
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::SetIcon),
            Disposition::DefaultInvisible
        );

        host.theme.set(true);
        registry.dispatch(&host, HANDLE, ChromeEvent::ThemeChanged);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::SetText),
            Disposition::Default
        );
    }

    #[test]
    fn activation_forces_full_border_repaint() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::NcActivate),
            Disposition::DefaultFullBorderRepaint
        );
    }

    #[test]
    fn left_button_drag_follows_config() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::LeftButtonDown),
            Disposition::BeginCaptionDrag
        );

        let config = ChromeConfig {
            drag_anywhere: false,
            ..ChromeConfig::default()
        };
        let registry = ChromeRegistry::new(config);
        registry.dispatch(&host, HANDLE, ChromeEvent::Create);
        assert_eq!(
            registry.dispatch(&host, HANDLE, ChromeEvent::LeftButtonDown),
            Disposition::Default
        );
    }

    #[test]
    fn composition_change_updates_state_before_region() {
        let host = FakeHost::new();
        let registry = created_registry(&host);
        host.composition.set(true);

        registry.dispatch(&host, HANDLE, ChromeEvent::CompositionChanged);

        let snapshot = registry.snapshot(HANDLE).expect("state attached");
        assert!(snapshot.composition_enabled);
        assert_eq!(snapshot.clip_region, ClipRegion::None);
        assert_eq!(
            host.calls(),
            vec![
                HostCall::ExtendFrame(ChromeConfig::default().shadow_margins),
                HostCall::EnableNcRendering,
            ]
        );
    }

    #[test]
    fn nested_events_during_region_apply_see_new_composition_state() {
        let host = FakeHost::new();
        let registry = Rc::new(created_registry(&host));
        host.composition.set(false);
        registry.dispatch(&host, HANDLE, ChromeEvent::CompositionChanged);
        let observed = Rc::new(RefCell::new(Vec::new()));
        {
            let registry = Rc::clone(&registry);
            let observed = Rc::clone(&observed);
            *host.on_region.borrow_mut() = Some(Box::new(move |host: &FakeHost| {
                observed
                    .borrow_mut()
                    .push(registry.dispatch(host, HANDLE, ChromeEvent::NcPaint));
                observed.borrow_mut().push(registry.dispatch(
                    host,
                    HANDLE,
                    ChromeEvent::WindowPosChanged {
                        frame_changed: true,
                    },
                ));
            }));
        }
        host.client.set(Rect::new(0, 0, 320, 240));
        host.composition.set(true);
        host.clear_calls();

        registry.dispatch(&host, HANDLE, ChromeEvent::CompositionChanged);

        assert_eq!(
            *observed.borrow(),
            vec![Disposition::Default, Disposition::Handled(0)]
        );
        // The nested position change sees the pending region and does not reapply it.
        assert_eq!(host.region_calls(), vec![None]);
        let snapshot = registry.snapshot(HANDLE).expect("state attached");
        assert!(snapshot.composition_enabled);
        assert_eq!(snapshot.clip_region, ClipRegion::None);
        assert_eq!((snapshot.width, snapshot.height), (320, 240));
    }

    #[test]
    fn composition_change_during_nc_calc_size_is_applied() {
        let host = FakeHost::new();
        let registry = Rc::new(created_registry(&host));
        host.maximized.set(true);
        host.frame_info.set(Some(crate::types::WindowFrameInfo {
            window: Rect::new(-8, -8, 1928, 1088),
            client: Rect::new(0, 0, 1920, 1080),
            border_y: 8,
        }));
        host.monitor.set(Some(Rect::new(0, 0, 1920, 1080)));
        host.composition.set(true);
        // The shell query pumps sent messages; deliver a composition broadcast there.
        let nested = Rc::new(RefCell::new(Vec::new()));
        {
            let registry = Rc::clone(&registry);
            let nested = Rc::clone(&nested);
            *host.on_appbar_query.borrow_mut() = Some(Box::new(move |host: &FakeHost| {
                if nested.borrow().is_empty() {
                    let disposition =
                        registry.dispatch(host, HANDLE, ChromeEvent::CompositionChanged);
                    nested.borrow_mut().push(disposition);
                }
            }));
        }

        let disposition = registry.dispatch(
            &host,
            HANDLE,
            ChromeEvent::NcCalcSize {
                original: Rect::new(-8, -8, 1928, 1088),
                default_proposal: Rect::new(0, 23, 1920, 1080),
            },
        );

        assert_eq!(disposition, Disposition::ClientRect(Rect::new(0, 0, 1920, 1080)));
        assert_eq!(*nested.borrow(), vec![Disposition::Handled(0)]);
        let snapshot = registry.snapshot(HANDLE).expect("state attached");
        assert!(snapshot.composition_enabled);
        assert_eq!(
            snapshot.clip_region,
            ClipRegion::Rect(Rect::new(8, 8, 1928, 1088))
        );
    }

    #[test]
    fn destroy_during_event_is_not_undone() {
        let host = FakeHost::new();
        let registry = Rc::new(created_registry(&host));
        {
            let registry = Rc::clone(&registry);
            *host.on_region.borrow_mut() = Some(Box::new(move |host: &FakeHost| {
                registry.dispatch(host, HANDLE, ChromeEvent::Destroy);
            }));
        }

        registry.dispatch(&host, HANDLE, ChromeEvent::CompositionChanged);

        assert!(!registry.is_attached(HANDLE));
    }
}
