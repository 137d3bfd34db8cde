/*
 * Win32 side of the borderless chrome: window class registration, native window
 * creation, the window procedure and the `ChromeHost` implementation over the
 * User32/GDI/DWM/UxTheme/Shell APIs.
 *
 * The window procedure only decodes messages into `ChromeEvent`s and carries out
 * the `Disposition` the registry returns; all chrome decisions live in the
 * portable handlers under `crate::chrome`.
 */
use crate::config::ChromeConfig;
use crate::dispatcher::{ChromeEvent, ChromeRegistry, Disposition};
use crate::error::{PlatformError, Result as PlatformResult};
use crate::host::ChromeHost;
use crate::types::{
    BorderMetrics, Margins, Point, Rect, ScreenEdge, WindowFrameInfo, WindowHandle,
};

use windows::{
    Win32::{
        Foundation::{COLORREF, GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM},
        Graphics::Dwm::{
            DWMNCRP_ENABLED, DWMWA_NCRENDERING_POLICY, DwmExtendFrameIntoClientArea,
            DwmIsCompositionEnabled, DwmSetWindowAttribute,
        },
        Graphics::Gdi::{
            COLOR_WINDOW, CreateRectRgnIndirect, DeleteObject, GetMonitorInfoW, HBRUSH,
            InvalidateRect, MONITOR_DEFAULTTOPRIMARY, MONITORINFO, MonitorFromWindow,
            ScreenToClient, SetWindowRgn, UpdateWindow,
        },
        System::LibraryLoader::GetModuleHandleW,
        System::SystemInformation::{
            OSVERSIONINFOEXW, VER_MAJORVERSION, VER_MINORVERSION, VER_SERVICEPACKMAJOR,
            VerSetConditionMask, VerifyVersionInfoW,
        },
        UI::Controls::{IsThemeActive, MARGINS},
        UI::Input::KeyboardAndMouse::ReleaseCapture,
        UI::Shell::{ABM_GETAUTOHIDEBAR, ABM_GETAUTOHIDEBAREX, APPBARDATA, SHAppBarMessage},
        UI::WindowsAndMessaging::*,
    },
    core::{HSTRING, PCWSTR},
};

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;
use std::sync::OnceLock;

use log::{debug, error, trace, warn};

// Undocumented messages sent to draw the themed caption and frame.
const WM_NCUAHDRAWCAPTION: u32 = 0x00AE;
const WM_NCUAHDRAWFRAME: u32 = 0x00AF;

const SUCCESS_CODE: LRESULT = LRESULT(0);
const VER_GREATER_EQUAL: u8 = 3;

pub(crate) fn to_window_handle(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as isize)
}

pub(crate) fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut c_void)
}

fn rect_from_win32(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

fn rect_to_win32(rect: Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

// Signed coordinates, equivalent to GET_X_LPARAM / GET_Y_LPARAM.
#[inline]
pub(crate) fn x_from_lparam(lparam: LPARAM) -> i32 {
    (lparam.0 & 0xFFFF) as u16 as i16 as i32
}
#[inline]
pub(crate) fn y_from_lparam(lparam: LPARAM) -> i32 {
    ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32
}

/*
 * Windows 8.1 introduced ABM_GETAUTOHIDEBAREX, which can ask about a specific
 * monitor. Evaluated once per process.
 */
fn is_windows_8_1_or_greater() -> bool {
    static RESULT: OnceLock<bool> = OnceLock::new();
    *RESULT.get_or_init(|| unsafe {
        let mut info = OSVERSIONINFOEXW {
            dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOEXW>() as u32,
            dwMajorVersion: 6,
            dwMinorVersion: 3,
            wServicePackMajor: 0,
            ..Default::default()
        };
        let mut mask = VerSetConditionMask(0, VER_MAJORVERSION, VER_GREATER_EQUAL);
        mask = VerSetConditionMask(mask, VER_MINORVERSION, VER_GREATER_EQUAL);
        mask = VerSetConditionMask(mask, VER_SERVICEPACKMAJOR, VER_GREATER_EQUAL);
        let supported = VerifyVersionInfoW(
            &mut info,
            VER_MAJORVERSION | VER_MINORVERSION | VER_SERVICEPACKMAJOR,
            mask,
        )
        .is_ok();
        debug!("Platform: per-monitor app bar query supported: {supported}");
        supported
    })
}

/// `ChromeHost` backed by the live Win32 APIs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32ChromeHost;

impl ChromeHost for Win32ChromeHost {
    fn is_maximized(&self, handle: WindowHandle) -> bool {
        unsafe { IsZoomed(to_hwnd(handle)).as_bool() }
    }

    fn window_frame_info(&self, handle: WindowHandle) -> Option<WindowFrameInfo> {
        let mut info = WINDOWINFO {
            cbSize: std::mem::size_of::<WINDOWINFO>() as u32,
            ..Default::default()
        };
        match unsafe { GetWindowInfo(to_hwnd(handle), &mut info) } {
            Ok(()) => Some(WindowFrameInfo {
                window: rect_from_win32(info.rcWindow),
                client: rect_from_win32(info.rcClient),
                border_y: info.cyWindowBorders as i32,
            }),
            Err(e) => {
                warn!("GetWindowInfo failed for {handle:?}: {e:?}");
                None
            }
        }
    }

    fn client_rect(&self, handle: WindowHandle) -> Rect {
        let mut rect = RECT::default();
        if let Err(e) = unsafe { GetClientRect(to_hwnd(handle), &mut rect) } {
            warn!("GetClientRect failed for {handle:?}: {e:?}");
        }
        rect_from_win32(rect)
    }

    fn screen_to_client(&self, handle: WindowHandle, point: Point) -> Point {
        let mut pt = POINT {
            x: point.x,
            y: point.y,
        };
        let _ = unsafe { ScreenToClient(to_hwnd(handle), &mut pt) };
        Point::new(pt.x, pt.y)
    }

    fn border_metrics(&self) -> BorderMetrics {
        unsafe {
            BorderMetrics {
                frame: GetSystemMetrics(SM_CXFRAME),
                padded_border: GetSystemMetrics(SM_CXPADDEDBORDER),
                border: GetSystemMetrics(SM_CXBORDER),
            }
        }
    }

    fn set_window_region(&self, handle: WindowHandle, region: Option<Rect>) -> PlatformResult<()> {
        let hwnd = to_hwnd(handle);
        if hwnd.is_invalid() {
            return Err(PlatformError::InvalidHandle(format!("{handle:?}")));
        }
        unsafe {
            match region {
                None => {
                    if SetWindowRgn(hwnd, None, true) == 0 {
                        return Err(PlatformError::OperationFailed(format!(
                            "SetWindowRgn(NULL) failed for {handle:?}: {:?}",
                            GetLastError()
                        )));
                    }
                }
                Some(rect) => {
                    let rgn = CreateRectRgnIndirect(&rect_to_win32(rect));
                    if rgn.is_invalid() {
                        return Err(PlatformError::OperationFailed(format!(
                            "CreateRectRgnIndirect failed for {rect:?}"
                        )));
                    }
                    // On success the system owns the region.
                    if SetWindowRgn(hwnd, Some(rgn), true) == 0 {
                        let _ = DeleteObject(rgn.into());
                        return Err(PlatformError::OperationFailed(format!(
                            "SetWindowRgn failed for {handle:?}: {:?}",
                            GetLastError()
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn invalidate_rect(&self, handle: WindowHandle, rect: Rect) {
        let _ = unsafe { InvalidateRect(Some(to_hwnd(handle)), Some(&rect_to_win32(rect)), true) };
    }

    fn is_composition_enabled(&self) -> bool {
        match unsafe { DwmIsCompositionEnabled() } {
            Ok(enabled) => enabled.as_bool(),
            Err(e) => {
                debug!("DwmIsCompositionEnabled failed, treating as disabled: {e:?}");
                false
            }
        }
    }

    fn extend_frame_into_client_area(
        &self,
        handle: WindowHandle,
        margins: Margins,
    ) -> PlatformResult<()> {
        let margins = MARGINS {
            cxLeftWidth: margins.left,
            cxRightWidth: margins.right,
            cyTopHeight: margins.top,
            cyBottomHeight: margins.bottom,
        };
        unsafe { DwmExtendFrameIntoClientArea(to_hwnd(handle), &margins)? };
        Ok(())
    }

    fn enable_non_client_rendering(&self, handle: WindowHandle) -> PlatformResult<()> {
        let policy = DWMNCRP_ENABLED;
        unsafe {
            DwmSetWindowAttribute(
                to_hwnd(handle),
                DWMWA_NCRENDERING_POLICY,
                &policy as *const _ as *const c_void,
                std::mem::size_of_val(&policy) as u32,
            )?
        };
        Ok(())
    }

    fn is_theme_active(&self) -> bool {
        unsafe { IsThemeActive().as_bool() }
    }

    fn monitor_rect(&self, handle: WindowHandle) -> Option<Rect> {
        unsafe {
            let monitor = MonitorFromWindow(to_hwnd(handle), MONITOR_DEFAULTTOPRIMARY);
            let mut info = MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFO>() as u32,
                ..Default::default()
            };
            if GetMonitorInfoW(monitor, &mut info).as_bool() {
                Some(rect_from_win32(info.rcMonitor))
            } else {
                warn!("GetMonitorInfoW failed for {handle:?}");
                None
            }
        }
    }

    fn supports_per_monitor_appbar_query(&self) -> bool {
        is_windows_8_1_or_greater()
    }

    fn query_autohide_appbar(&self, edge: ScreenEdge, monitor: Option<Rect>) -> bool {
        let mut data = APPBARDATA {
            cbSize: std::mem::size_of::<APPBARDATA>() as u32,
            uEdge: edge.abe_code(),
            ..Default::default()
        };
        let message = match monitor {
            Some(rect) => {
                data.rc = rect_to_win32(rect);
                ABM_GETAUTOHIDEBAREX
            }
            None => ABM_GETAUTOHIDEBAR,
        };
        // Non-zero is the HWND of the auto-hide bar.
        unsafe { SHAppBarMessage(message, &mut data) != 0 }
    }
}

/*
 * Application hook for client-area messages the chrome leaves alone. Each method
 * returns `true` when it consumed the message; otherwise default handling runs.
 */
pub trait ClientHandler {
    fn on_paint(&self, _manager: &ChromeWindowManager, _hwnd: HWND) -> bool {
        false
    }

    fn on_key_down(&self, _manager: &ChromeWindowManager, _hwnd: HWND, _key: u32) -> bool {
        false
    }
}

/*
 * Owns the chrome registry for every borderless window of this thread, plus the
 * class registration data. Window procedures reach it through the
 * `WindowCreationContext` stored in each window's user data.
 */
pub struct ChromeWindowManager {
    registry: ChromeRegistry,
    host: Win32ChromeHost,
    h_instance: HINSTANCE,
    class_name: HSTRING,
    client_handler: RefCell<Option<Rc<dyn ClientHandler>>>,
}

impl std::fmt::Debug for ChromeWindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeWindowManager")
            .field("registry", &self.registry)
            .field("h_instance", &self.h_instance)
            .field("class_name", &self.class_name)
            .field("has_client_handler", &self.client_handler.borrow().is_some())
            .finish()
    }
}

// Context passed during window creation to associate the manager with the HWND.
struct WindowCreationContext {
    manager: Rc<ChromeWindowManager>,
}

impl ChromeWindowManager {
    pub fn new(config: ChromeConfig) -> PlatformResult<Rc<Self>> {
        let module = unsafe { GetModuleHandleW(None)? };
        let class_name = HSTRING::from(config.class_name.as_str());
        Ok(Rc::new(Self {
            registry: ChromeRegistry::new(config),
            host: Win32ChromeHost,
            h_instance: HINSTANCE(module.0),
            class_name,
            client_handler: RefCell::new(None),
        }))
    }

    pub fn set_client_handler(&self, handler: Rc<dyn ClientHandler>) {
        *self.client_handler.borrow_mut() = Some(handler);
    }

    pub fn registry(&self) -> &ChromeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ChromeConfig {
        self.registry.config()
    }

    /*
     * Registers the window class if not already registered. All borderless windows
     * share `borderless_wnd_proc_router` as their window procedure.
     */
    pub fn register_window_class(&self) -> PlatformResult<()> {
        let class_name = PCWSTR(self.class_name.as_ptr());
        unsafe {
            let mut existing = WNDCLASSEXW::default();
            if GetClassInfoExW(Some(self.h_instance), class_name, &mut existing).is_ok() {
                debug!("Platform: Window class '{}' already registered.", self.class_name);
                return Ok(());
            }

            let wc = WNDCLASSEXW {
                cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(borderless_wnd_proc_router),
                cbClsExtra: 0,
                cbWndExtra: 0,
                hInstance: self.h_instance,
                hIcon: LoadIconW(None, IDI_APPLICATION)?,
                hCursor: LoadCursorW(None, IDC_ARROW)?,
                hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as *mut c_void),
                lpszMenuName: PCWSTR::null(),
                lpszClassName: class_name,
                hIconSm: LoadIconW(None, IDI_APPLICATION)?,
            };

            if RegisterClassExW(&wc) == 0 {
                let error = GetLastError();
                error!("Platform: RegisterClassExW failed: {error:?}");
                return Err(PlatformError::InitializationFailed(format!(
                    "RegisterClassExW failed: {error:?}"
                )));
            }
        }
        debug!("Platform: Window class '{}' registered successfully.", self.class_name);
        Ok(())
    }

    /*
     * Creates a borderless window and syncs its composition and theme state so the
     * region and DWM frame are right before the caller shows it.
     */
    pub fn create_window(self: &Rc<Self>, color_key: Option<COLORREF>) -> PlatformResult<HWND> {
        let config = self.config();
        let (width, height) = config.initial_size;
        let ex_style = if color_key.is_some() {
            WS_EX_APPWINDOW | WS_EX_LAYERED
        } else {
            WS_EX_APPWINDOW
        };
        let context = Box::new(WindowCreationContext {
            manager: Rc::clone(self),
        });
        let context_ptr = Box::into_raw(context);

        let hwnd = unsafe {
            CreateWindowExW(
                ex_style,
                &self.class_name,
                &HSTRING::from(config.title.as_str()),
                WS_OVERLAPPEDWINDOW | WS_SIZEBOX,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                width,
                height,
                None,
                None,
                Some(self.h_instance),
                Some(context_ptr as *mut c_void),
            )
        };
        // On failure the context may already have been released by WM_NCDESTROY.
        let hwnd = hwnd.inspect_err(|e| error!("Platform: CreateWindowExW failed: {e:?}"))?;

        if let Some(key) = color_key {
            // Lets plain GDI draw over the DWM frame without artifacts.
            unsafe { SetLayeredWindowAttributes(hwnd, key, 0, LWA_COLORKEY)? };
        }

        let handle = to_window_handle(hwnd);
        self.registry
            .dispatch(&self.host, handle, ChromeEvent::CompositionChanged);
        self.registry
            .dispatch(&self.host, handle, ChromeEvent::ThemeChanged);
        debug!("Platform: Borderless window {hwnd:?} created.");
        Ok(hwnd)
    }

    fn handle_window_message(
        &self,
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        if matches!(msg, WM_PAINT | WM_KEYDOWN) && self.forward_to_client(hwnd, msg, wparam) {
            return SUCCESS_CODE;
        }

        let handle = to_window_handle(hwnd);
        // Set when the default procedure already ran while decoding the message.
        let mut precomputed: Option<LRESULT> = None;

        let event = match msg {
            WM_NCCREATE => ChromeEvent::Create,
            WM_CLOSE => ChromeEvent::Close,
            WM_DESTROY => ChromeEvent::Destroy,
            WM_DWMCOMPOSITIONCHANGED => ChromeEvent::CompositionChanged,
            WM_THEMECHANGED => ChromeEvent::ThemeChanged,
            WM_NCCALCSIZE => match self.decode_nccalcsize(hwnd, msg, wparam, lparam) {
                Some((event, default_result)) => {
                    precomputed = Some(default_result);
                    event
                }
                None => ChromeEvent::Other,
            },
            WM_NCHITTEST => ChromeEvent::NcHitTest {
                point: Point::new(x_from_lparam(lparam), y_from_lparam(lparam)),
            },
            WM_NCPAINT => ChromeEvent::NcPaint,
            WM_NCUAHDRAWCAPTION => ChromeEvent::NcUahDrawCaption,
            WM_NCUAHDRAWFRAME => ChromeEvent::NcUahDrawFrame,
            WM_NCACTIVATE => ChromeEvent::NcActivate,
            WM_WINDOWPOSCHANGED => {
                let pos = lparam.0 as *const WINDOWPOS;
                if pos.is_null() {
                    ChromeEvent::Other
                } else {
                    let flags = unsafe { (*pos).flags };
                    ChromeEvent::WindowPosChanged {
                        frame_changed: (flags.0 & SWP_FRAMECHANGED.0) != 0,
                    }
                }
            }
            WM_SETICON => ChromeEvent::SetIcon,
            WM_SETTEXT => ChromeEvent::SetText,
            WM_LBUTTONDOWN => ChromeEvent::LeftButtonDown,
            _ => ChromeEvent::Other,
        };

        let disposition = self.registry.dispatch(&self.host, handle, event);
        if event != ChromeEvent::Other {
            trace!("[WndProc] {hwnd:?} msg=0x{msg:04X} {event:?} -> {disposition:?}");
        }
        self.apply_disposition(hwnd, msg, wparam, lparam, disposition, precomputed)
    }

    fn forward_to_client(&self, hwnd: HWND, msg: u32, wparam: WPARAM) -> bool {
        // Cloned out so the handler may install another one.
        let Some(handler) = self.client_handler.borrow().clone() else {
            return false;
        };
        match msg {
            WM_PAINT => handler.on_paint(self, hwnd),
            WM_KEYDOWN => handler.on_key_down(self, hwnd, wparam.0 as u32),
            _ => false,
        }
    }

    /*
     * Runs the default WM_NCCALCSIZE processing first (tile/cascade depends on it)
     * and captures the rectangle before and after. Windows without chrome state
     * keep the default result untouched.
     */
    fn decode_nccalcsize(
        &self,
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> Option<(ChromeEvent, LRESULT)> {
        // Both RECT* and NCCALCSIZE_PARAMS* start with the rectangle we rewrite.
        let rect_ptr = lparam.0 as *mut RECT;
        if rect_ptr.is_null() || !self.registry.is_attached(to_window_handle(hwnd)) {
            return None;
        }
        let original = unsafe { *rect_ptr };
        let default_result = unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
        let default_proposal = unsafe { *rect_ptr };
        Some((
            ChromeEvent::NcCalcSize {
                original: rect_from_win32(original),
                default_proposal: rect_from_win32(default_proposal),
            },
            default_result,
        ))
    }

    fn apply_disposition(
        &self,
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
        disposition: Disposition,
        precomputed: Option<LRESULT>,
    ) -> LRESULT {
        match disposition {
            Disposition::Default => match precomputed {
                Some(result) => result,
                None => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
            },
            Disposition::Handled(value) => LRESULT(value),
            Disposition::ClientRect(rect) => {
                unsafe { *(lparam.0 as *mut RECT) = rect_to_win32(rect) };
                SUCCESS_CODE
            }
            // DefWindowProc skips repainting the border when the region parameter is -1.
            Disposition::DefaultFullBorderRepaint => unsafe {
                DefWindowProcW(hwnd, msg, wparam, LPARAM(-1))
            },
            Disposition::DefaultInvisible => handle_message_invisible(hwnd, msg, wparam, lparam),
            Disposition::BeginCaptionDrag => {
                unsafe {
                    let _ = ReleaseCapture();
                    SendMessageW(
                        hwnd,
                        WM_NCLBUTTONDOWN,
                        Some(WPARAM(HTCAPTION as usize)),
                        Some(LPARAM(0)),
                    );
                }
                SUCCESS_CODE
            }
            Disposition::DestroyWindow => {
                if let Err(e) = unsafe { DestroyWindow(hwnd) } {
                    error!("DestroyWindow for HWND {hwnd:?} failed: {e:?}");
                }
                SUCCESS_CODE
            }
            Disposition::Destroyed { quit } => {
                if quit {
                    debug!("Platform: {hwnd:?} destroyed, posting quit message.");
                    unsafe { PostQuitMessage(0) };
                }
                SUCCESS_CODE
            }
        }
    }
}

/*
 * Runs the default procedure with WS_VISIBLE cleared so it cannot paint the
 * caption icon or text over the client area, then restores the style.
 */
fn handle_message_invisible(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        let old_style = GetWindowLongPtrW(hwnd, GWL_STYLE);
        SetWindowLongPtrW(hwnd, GWL_STYLE, old_style & !(WS_VISIBLE.0 as isize));
        let result = DefWindowProcW(hwnd, msg, wparam, lparam);
        SetWindowLongPtrW(hwnd, GWL_STYLE, old_style);
        result
    }
}

/*
 * Window procedure for every borderless window. Retrieves the
 * `WindowCreationContext` and forwards to the manager; anything before
 * WM_NCCREATE (e.g. WM_GETMINMAXINFO) gets default handling.
 */
unsafe extern "system" fn borderless_wnd_proc_router(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let context_ptr = if msg == WM_NCCREATE {
        let create_struct = unsafe { &*(lparam.0 as *const CREATESTRUCTW) };
        let context_raw_ptr = create_struct.lpCreateParams as *mut WindowCreationContext;
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, context_raw_ptr as isize) };
        context_raw_ptr
    } else {
        unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowCreationContext }
    };

    if context_ptr.is_null() {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    // Clone the manager so a nested WM_NCDESTROY cannot free it mid-call.
    let manager = Rc::clone(unsafe { &(*context_ptr).manager });
    let result = manager.handle_window_message(hwnd, msg, wparam, lparam);

    if msg == WM_NCDESTROY {
        let _ = unsafe { Box::from_raw(context_ptr) };
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) };
    }
    result
}

/// Shows the window and paints it once.
pub fn show_window(hwnd: HWND) {
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOWDEFAULT);
        let _ = UpdateWindow(hwnd);
    }
}

/// Pumps messages for the calling thread until WM_QUIT; returns its exit code.
pub fn run_message_loop() -> PlatformResult<i32> {
    let mut message = MSG::default();
    loop {
        let status = unsafe { GetMessageW(&mut message, None, 0, 0) };
        match status.0 {
            0 => break,
            -1 => {
                let error = unsafe { GetLastError() };
                error!("Platform: GetMessageW failed: {error:?}");
                return Err(PlatformError::OperationFailed(format!(
                    "GetMessageW failed: {error:?}"
                )));
            }
            _ => unsafe {
                let _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            },
        }
    }
    Ok(message.wParam.0 as i32)
}
