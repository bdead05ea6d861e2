pub mod inertia;
pub mod lock;

pub use inertia::{InertiaScroll, WheelDelta};
pub use lock::{Overflow, OverflowTarget, ScrollLock};

/// Page sections reachable from the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// Entries shown in the navigation bar, in order.
    pub const NAV: [Section; 5] = [
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }
}

/// A snapshot of the document's scroll geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }

    /// Largest reachable `scroll_top`.
    pub fn limit(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }

    /// Percentage of the scrollable distance traversed, in `[0, 100]`.
    /// A page that doesn't scroll reports 0.
    pub fn progress(&self) -> f64 {
        let range = self.scroll_height - self.viewport_height;
        if range <= 0.0 || !range.is_finite() {
            return 0.0;
        }
        let pct = self.scroll_top / range * 100.0;
        if pct.is_nan() {
            return 0.0;
        }
        pct.clamp(0.0, 100.0)
    }
}

/// Coalesces bursts of scroll events into one recomputation per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn release(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Whether an element with this computed `overflow-y` and these heights
/// scrolls on its own. Wheel input over such an element belongs to it.
pub fn is_scroll_container(overflow_y: &str, scroll_height: f64, client_height: f64) -> bool {
    matches!(overflow_y, "auto" | "scroll" | "overlay") && scroll_height > client_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_container() {
        assert!(is_scroll_container("auto", 1200.0, 600.0));
        assert!(is_scroll_container("scroll", 601.0, 600.0));
        // fits its box
        assert!(!is_scroll_container("auto", 600.0, 600.0));
        assert!(!is_scroll_container("visible", 1200.0, 600.0));
        assert!(!is_scroll_container("hidden", 1200.0, 600.0));
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(ScrollMetrics::new(0.0, 3000.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(2000.0, 3000.0, 1000.0).progress(), 100.0);
        assert_eq!(ScrollMetrics::new(500.0, 3000.0, 1000.0).progress(), 25.0);
    }

    #[test]
    fn test_progress_monotonic() {
        let mut last = -1.0;
        for top in (0..=2000).step_by(37).chain([2000]) {
            let p = ScrollMetrics::new(top as f64, 3000.0, 1000.0).progress();
            assert!(p >= last, "progress went from {last} to {p} at {top}");
            last = p;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_progress_idempotent() {
        let m = ScrollMetrics::new(731.0, 5120.0, 900.0);
        assert_eq!(m.progress(), m.progress());
    }

    #[test]
    fn test_short_page_reports_zero() {
        assert_eq!(ScrollMetrics::new(0.0, 800.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(0.0, 1000.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
        assert_eq!(ScrollMetrics::new(0.0, 800.0, 1000.0).limit(), 0.0);
    }

    #[test]
    fn test_overscroll_clamped() {
        // rubber-band scrolling can report positions outside the range
        assert_eq!(ScrollMetrics::new(-40.0, 3000.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(2100.0, 3000.0, 1000.0).progress(), 100.0);
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::default();
        let scheduled = (0..10).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());
        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_section_ids() {
        let ids = Section::NAV.map(Section::id);
        assert_eq!(ids, ["about", "skills", "experience", "projects", "contact"]);
        assert_eq!(Section::Education.id(), "education");
    }
}
