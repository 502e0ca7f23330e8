//! Swipe-down-to-dismiss tracking for the mobile overlay.
//!
//! Pure touch-delta bookkeeping: the component feeds coordinates in and applies
//! the returned `DragFrame` as a transform/opacity style.

/// Downward travel (px) after which releasing the finger closes the overlay
pub const CLOSE_THRESHOLD_PX: f64 = 100.0;

/// Downward travel (px) at which the overlay is fully transparent
pub const FADE_DISTANCE_PX: f64 = 300.0;

/// Visual state of the overlay while it follows the finger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

impl DragFrame {
    pub const REST: DragFrame = DragFrame {
        translate_y: 0.0,
        opacity: 1.0,
    };

    fn following(delta_y: f64) -> Self {
        Self {
            translate_y: delta_y,
            opacity: (1.0 - delta_y / FADE_DISTANCE_PX).clamp(0.0, 1.0),
        }
    }

    /// Inline style for the overlay root
    pub fn to_style(&self) -> String {
        format!(
            "transform: translateY({}px); opacity: {};",
            self.translate_y, self.opacity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Commit to the close sequence
    Close,
    /// Snap back to `DragFrame::REST`
    Reset,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    origin: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Frame to apply for the current finger position, if the motion is a
    /// predominantly vertical downward drag
    pub fn moved(&self, x: f64, y: f64) -> Option<DragFrame> {
        let (dx, dy) = self.delta(x, y)?;
        is_downward_vertical(dx, dy).then(|| DragFrame::following(dy))
    }

    pub fn end(&mut self, x: f64, y: f64) -> SwipeOutcome {
        let delta = self.delta(x, y);
        self.origin = None;

        match delta {
            Some((dx, dy)) if dy > CLOSE_THRESHOLD_PX && is_downward_vertical(dx, dy) => {
                SwipeOutcome::Close
            }
            _ => SwipeOutcome::Reset,
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    fn delta(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.origin.map(|(x0, y0)| (x - x0, y - y0))
    }
}

fn is_downward_vertical(dx: f64, dy: f64) -> bool {
    dy > 0.0 && dy > dx.abs()
}
