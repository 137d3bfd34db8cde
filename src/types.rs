/*
 * Platform-agnostic geometry and identifier types used by the chrome components.
 * These mirror the handful of Win32 structures the chrome logic needs (RECT, POINT,
 * MARGINS, hit-test codes, app bar edges) so the state machine can be compiled and
 * tested on every platform. The Win32 layer converts at its boundary.
 */

/// Opaque identifier of a native window. On Windows this is the raw `HWND` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub fn raw(self) -> isize {
        self.0
    }
}

/// Edge-exclusive rectangle (`right` and `bottom` lie outside), matching Win32 `RECT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the rectangle covers no pixels, same rule as Win32 `IsRectEmpty`.
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Expresses `self` relative to the top-left corner of `origin`.
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect {
            left: self.left - origin.left,
            top: self.top - origin.top,
            right: self.right - origin.left,
            bottom: self.bottom - origin.top,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Frame extension into the client area, in the field order of DWM `MARGINS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Logical zone a screen point falls into, as reported back from a hit-test query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitZone {
    Client,
    Left,
    Right,
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
}

impl HitZone {
    /// Numeric `WM_NCHITTEST` result (`HTCLIENT`, `HTLEFT`, ...).
    pub fn code(self) -> isize {
        match self {
            HitZone::Client => 1,
            HitZone::Left => 10,
            HitZone::Right => 11,
            HitZone::Top => 12,
            HitZone::TopLeft => 13,
            HitZone::TopRight => 14,
            HitZone::Bottom => 15,
            HitZone::BottomLeft => 16,
            HitZone::BottomRight => 17,
        }
    }

    pub fn from_code(code: isize) -> Option<Self> {
        Some(match code {
            1 => HitZone::Client,
            10 => HitZone::Left,
            11 => HitZone::Right,
            12 => HitZone::Top,
            13 => HitZone::TopLeft,
            14 => HitZone::TopRight,
            15 => HitZone::Bottom,
            16 => HitZone::BottomLeft,
            17 => HitZone::BottomRight,
            _ => return None,
        })
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            HitZone::TopLeft | HitZone::TopRight | HitZone::BottomLeft | HitZone::BottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            HitZone::Left | HitZone::Right | HitZone::Top | HitZone::Bottom
        )
    }
}

/// Screen edge an app bar can be docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl ScreenEdge {
    /// Order in which edges are probed for auto-hide bars. Kept as-is for compatibility.
    pub const AUTOHIDE_PROBE_ORDER: [ScreenEdge; 4] = [
        ScreenEdge::Bottom,
        ScreenEdge::Left,
        ScreenEdge::Top,
        ScreenEdge::Right,
    ];

    /// Shell `ABE_*` value.
    pub fn abe_code(self) -> u32 {
        match self {
            ScreenEdge::Left => 0,
            ScreenEdge::Top => 1,
            ScreenEdge::Right => 2,
            ScreenEdge::Bottom => 3,
        }
    }

    /// Moves this edge of `rect` one unit inwards.
    pub fn shrink(self, rect: &mut Rect) {
        match self {
            ScreenEdge::Left => rect.left += 1,
            ScreenEdge::Top => rect.top += 1,
            ScreenEdge::Right => rect.right -= 1,
            ScreenEdge::Bottom => rect.bottom -= 1,
        }
    }
}

/// Raw system border metrics (`SM_CXFRAME`, `SM_CXPADDEDBORDER`, `SM_CXBORDER`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderMetrics {
    pub frame: i32,
    pub padded_border: i32,
    pub border: i32,
}

/// Screen rectangles of a window and its client area plus the vertical border width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowFrameInfo {
    pub window: Rect,
    pub client: Rect,
    pub border_y: i32,
}
