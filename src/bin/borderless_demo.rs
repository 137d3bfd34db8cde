/*
 * Opens a single borderless window for manual testing. The client area carries a
 * one pixel green outline so resizing artifacts are easy to spot, and a few keys
 * poke the window in ways that would make a naive implementation paint a caption:
 *
 *   H  paint the hit-test zones into the client area (red edges, green corners)
 *   I  swap the window icon
 *   T  swap the window title
 *   M  toggle the Close item of the system menu
 *
 * Run with `RUST_LOG=debug` (or `trace` for per-message routing).
 */

#[cfg(not(target_os = "windows"))]
fn main() {
    env_logger::init();
    eprintln!("borderless_demo needs Windows.");
}

#[cfg(target_os = "windows")]
fn main() -> std::process::ExitCode {
    env_logger::init();
    match demo::run() {
        Ok(code) => std::process::ExitCode::from(code as u8),
        Err(e) => {
            log::error!("borderless_demo failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_os = "windows")]
mod demo {
    use borderless_chrome::window_common::{
        ChromeWindowManager, ClientHandler, run_message_loop, show_window,
    };
    use borderless_chrome::{ChromeConfig, HitZone, PlatformResult, WindowHandle};

    use std::cell::Cell;
    use std::rc::Rc;

    use log::{debug, warn};
    use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, RECT, WPARAM};
    use windows::Win32::Graphics::Gdi::{
        BeginPaint, CreateSolidBrush, DeleteObject, EndPaint, FillRect, GetDC, PAINTSTRUCT,
        ReleaseDC, SetPixel,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        EnableMenuItem, GetSystemMenu, GetWindowInfo, ICON_BIG, IDI_ERROR, IDI_EXCLAMATION,
        LoadIconW, MF_BYCOMMAND, MF_ENABLED, MF_GRAYED, SC_CLOSE, SendMessageW, SetWindowTextW,
        WINDOWINFO, WM_NCHITTEST, WM_SETICON,
    };
    use windows::core::HSTRING;

    // GDI colors are 0x00BBGGRR.
    const MAGENTA: COLORREF = COLORREF(0x00FF_00FF);
    const GREEN: COLORREF = COLORREF(0x0000_FF00);
    const RED: COLORREF = COLORREF(0x0000_00FF);
    const BLUE: COLORREF = COLORREF(0x00FF_0000);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum IconChoice {
        Exclamation,
        Error,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TitleText {
        Forward,
        Reversed,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum CloseItem {
        Enabled,
        Grayed,
    }

    /// What the next press of each diagnostic key switches to.
    #[derive(Debug)]
    struct DebugState {
        icon: Cell<IconChoice>,
        title: Cell<TitleText>,
        close_item: Cell<CloseItem>,
    }

    impl DebugState {
        fn new() -> Self {
            Self {
                icon: Cell::new(IconChoice::Exclamation),
                title: Cell::new(TitleText::Reversed),
                close_item: Cell::new(CloseItem::Grayed),
            }
        }

        fn toggle_icon(&self, hwnd: HWND) -> PlatformResult<()> {
            let choice = self.icon.get();
            let icon = match choice {
                IconChoice::Exclamation => unsafe { LoadIconW(None, IDI_EXCLAMATION)? },
                IconChoice::Error => unsafe { LoadIconW(None, IDI_ERROR)? },
            };
            self.icon.set(match choice {
                IconChoice::Exclamation => IconChoice::Error,
                IconChoice::Error => IconChoice::Exclamation,
            });
            // Would redraw the icon on the caption if the chrome let it.
            unsafe {
                SendMessageW(
                    hwnd,
                    WM_SETICON,
                    Some(WPARAM(ICON_BIG as usize)),
                    Some(LPARAM(icon.0 as isize)),
                );
            }
            Ok(())
        }

        fn toggle_title(&self, hwnd: HWND) -> PlatformResult<()> {
            let choice = self.title.get();
            let text = match choice {
                TitleText::Forward => "window text",
                TitleText::Reversed => "txet wodniw",
            };
            self.title.set(match choice {
                TitleText::Forward => TitleText::Reversed,
                TitleText::Reversed => TitleText::Forward,
            });
            unsafe { SetWindowTextW(hwnd, &HSTRING::from(text))? };
            Ok(())
        }

        fn toggle_close_item(&self, hwnd: HWND) {
            let choice = self.close_item.get();
            let flags = match choice {
                CloseItem::Enabled => MF_BYCOMMAND | MF_ENABLED,
                CloseItem::Grayed => MF_BYCOMMAND | MF_GRAYED,
            };
            self.close_item.set(match choice {
                CloseItem::Enabled => CloseItem::Grayed,
                CloseItem::Grayed => CloseItem::Enabled,
            });
            // Repaints the caption buttons; left unguarded so the effect is visible.
            unsafe {
                let menu = GetSystemMenu(hwnd, false);
                let _ = EnableMenuItem(menu, SC_CLOSE, flags);
            }
        }
    }

    fn point_lparam(x: i32, y: i32) -> LPARAM {
        LPARAM((((y as u16 as u32) << 16) | (x as u16 as u32)) as i32 as isize)
    }

    /*
     * Asks the window for the hit-test code of every pixel of its outer rectangle
     * and plots the answer into the client area. The middle of the window is
     * skipped so the whole frame fits inside the client rectangle.
     */
    fn visualize_hit_test(hwnd: HWND) -> PlatformResult<()> {
        let mut info = WINDOWINFO {
            cbSize: std::mem::size_of::<WINDOWINFO>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowInfo(hwnd, &mut info)? };
        let window = info.rcWindow;
        let client = info.rcClient;
        let width = window.right - window.left;
        let height = window.bottom - window.top;
        let client_width = client.right - client.left;
        let client_height = client.bottom - client.top;
        let skip_x = width - client_width;
        let skip_y = height - client_height;

        unsafe {
            let hdc = GetDC(Some(hwnd));
            let (mut y, mut plot_y) = (0, 0);
            while y < height {
                if y == client_height / 2 {
                    y += skip_y;
                }
                let (mut x, mut plot_x) = (0, 0);
                while x < width {
                    if x == client_width / 2 {
                        x += skip_x;
                    }
                    let code = SendMessageW(
                        hwnd,
                        WM_NCHITTEST,
                        None,
                        Some(point_lparam(x + window.left, y + window.top)),
                    );
                    let color = match HitZone::from_code(code.0) {
                        Some(zone) if zone.is_edge() => RED,
                        Some(zone) if zone.is_corner() => GREEN,
                        _ => BLUE,
                    };
                    let _ = SetPixel(hdc, plot_x, plot_y, color);
                    x += 1;
                    plot_x += 1;
                }
                y += 1;
                plot_y += 1;
            }
            let _ = ReleaseDC(Some(hwnd), hdc);
        }
        Ok(())
    }

    struct DemoClient {
        debug: DebugState,
    }

    impl ClientHandler for DemoClient {
        fn on_paint(&self, manager: &ChromeWindowManager, hwnd: HWND) -> bool {
            let handle = WindowHandle(hwnd.0 as isize);
            let (width, height) = manager
                .registry()
                .snapshot(handle)
                .map(|s| (s.width as i32, s.height as i32))
                .unwrap_or((0, 0));
            let mut ps = PAINTSTRUCT::default();
            unsafe {
                let hdc = BeginPaint(hwnd, &mut ps);
                let brush = CreateSolidBrush(GREEN);
                for edge in [
                    RECT { left: 0, top: 0, right: 1, bottom: height },
                    RECT { left: 0, top: 0, right: width, bottom: 1 },
                    RECT { left: width - 1, top: 0, right: width, bottom: height },
                    RECT { left: 0, top: height - 1, right: width, bottom: height },
                ] {
                    let _ = FillRect(hdc, &edge, brush);
                }
                let _ = DeleteObject(brush.into());
                let _ = EndPaint(hwnd, &ps);
            }
            true
        }

        fn on_key_down(&self, _manager: &ChromeWindowManager, hwnd: HWND, key: u32) -> bool {
            let result = match char::from_u32(key) {
                Some('H') => visualize_hit_test(hwnd),
                Some('I') => self.debug.toggle_icon(hwnd),
                Some('T') => self.debug.toggle_title(hwnd),
                Some('M') => {
                    self.debug.toggle_close_item(hwnd);
                    Ok(())
                }
                _ => return false,
            };
            if let Err(e) = result {
                warn!("Diagnostic key {key:#x} failed: {e}");
            }
            debug!("Debug state after key {key:#x}: {:?}", self.debug);
            true
        }
    }

    pub(crate) fn run() -> PlatformResult<i32> {
        let manager = ChromeWindowManager::new(ChromeConfig::default())?;
        manager.set_client_handler(Rc::new(DemoClient {
            debug: DebugState::new(),
        }));
        manager.register_window_class()?;
        // Color-keyed layering lets GDI paint over the extended DWM frame.
        let hwnd = manager.create_window(Some(MAGENTA))?;
        show_window(hwnd);
        run_message_loop()
    }
}
