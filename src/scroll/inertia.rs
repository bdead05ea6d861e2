//! Wheel smoothing: wheel input moves a target, each animation frame eases
//! the page toward it.

/// Seconds an animation takes to reach its target.
pub const DURATION_SECS: f64 = 1.2;

/// Pixels per line for `DOM_DELTA_LINE` wheel events.
const LINE_HEIGHT: f64 = 100.0 / 6.0;

pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// A wheel event's vertical delta with its `deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub delta_y: f64,
    pub delta_mode: u32,
}

impl WheelDelta {
    /// Delta in pixels.
    pub fn pixels(self, viewport_height: f64) -> f64 {
        match self.delta_mode {
            1 => self.delta_y * LINE_HEIGHT,
            2 => self.delta_y * viewport_height,
            _ => self.delta_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaScroll {
    duration: f64,
    from: f64,
    target: f64,
    current: f64,
    elapsed: f64,
    animating: bool,
    stopped: bool,
    holds: u32,
}

impl Default for InertiaScroll {
    fn default() -> Self {
        Self::new(DURATION_SECS)
    }
}

impl InertiaScroll {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            from: 0.0,
            target: 0.0,
            current: 0.0,
            elapsed: 0.0,
            animating: false,
            stopped: false,
            holds: 0,
        }
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// While any hold is outstanding, wheel input is left to the browser and
    /// a running wheel animation is cancelled where it stands.
    pub fn hold(&mut self) {
        self.holds += 1;
        self.target = self.current;
        self.from = self.current;
        self.animating = false;
    }

    pub fn release(&mut self) {
        self.holds = self.holds.saturating_sub(1);
    }

    pub fn is_held(&self) -> bool {
        self.holds > 0
    }

    /// Adopts a position the page reached by other means. Ignored mid-animation,
    /// since the engine's own writes also fire scroll events.
    pub fn sync(&mut self, actual: f64) {
        if self.animating {
            return;
        }
        self.from = actual;
        self.target = actual;
        self.current = actual;
    }

    /// Returns false once stopped or while held, in which case the wheel event
    /// must be left to the browser.
    pub fn wheel(&mut self, delta: f64, limit: f64) -> bool {
        if self.stopped || self.is_held() {
            return false;
        }
        let base = if self.animating {
            self.target
        } else {
            self.current
        };
        self.animate_to(base + delta, limit);
        true
    }

    pub fn scroll_to(&mut self, target: f64, limit: f64) -> bool {
        if self.stopped {
            return false;
        }
        self.animate_to(target, limit);
        true
    }

    fn animate_to(&mut self, target: f64, limit: f64) {
        self.target = target.clamp(0.0, limit.max(0.0));
        self.from = self.current;
        self.elapsed = 0.0;
        self.animating = self.target != self.current;
    }

    /// Moves the animation forward by `delta_ms` and returns the position to
    /// scroll to, or `None` when there is nothing to do this frame.
    pub fn advance(&mut self, delta_ms: f64) -> Option<f64> {
        if !self.animating || self.stopped {
            return None;
        }
        self.elapsed += delta_ms.max(0.0) / 1000.0;
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            self.current = self.from + (self.target - self.from) * ease_out_expo(t);
        }
        Some(self.current)
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.animating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn run_to_rest(engine: &mut InertiaScroll) -> Vec<f64> {
        let mut frames = vec![];
        while let Some(y) = engine.advance(FRAME_MS) {
            frames.push(y);
            assert!(frames.len() < 1000, "animation never settled");
        }
        frames
    }

    #[test]
    fn test_reaches_target_without_overshoot() {
        let mut engine = InertiaScroll::default();
        assert!(engine.wheel(300.0, 5000.0));
        let frames = run_to_rest(&mut engine);
        assert_eq!(frames.last().copied(), Some(300.0));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|y| *y <= 300.0));
        assert!(!engine.is_animating());
        // 1.2s at 60fps
        assert!(frames.len() <= 73);
    }

    #[test]
    fn test_wheel_accumulates_target() {
        let mut engine = InertiaScroll::default();
        engine.wheel(100.0, 5000.0);
        engine.advance(FRAME_MS);
        engine.wheel(100.0, 5000.0);
        assert_eq!(engine.target(), 200.0);
    }

    #[test]
    fn test_target_clamped_to_limit() {
        let mut engine = InertiaScroll::default();
        engine.wheel(-50.0, 1000.0);
        assert_eq!(engine.target(), 0.0);
        assert!(!engine.is_animating());
        engine.wheel(5000.0, 1000.0);
        assert_eq!(engine.target(), 1000.0);
        // a page shorter than the viewport has nowhere to go
        let mut short = InertiaScroll::default();
        short.wheel(10.0, -200.0);
        assert_eq!(short.target(), 0.0);
    }

    #[test]
    fn test_idle_engine_syncs() {
        let mut engine = InertiaScroll::default();
        engine.sync(640.0);
        assert_eq!(engine.position(), 640.0);
        engine.wheel(60.0, 5000.0);
        assert_eq!(engine.target(), 700.0);
        // mid-animation scroll events are the engine's own
        engine.sync(0.0);
        assert_eq!(engine.target(), 700.0);
    }

    #[test]
    fn test_scroll_to_retargets() {
        let mut engine = InertiaScroll::default();
        engine.wheel(400.0, 5000.0);
        engine.advance(FRAME_MS * 10.0);
        let at = engine.position();
        engine.scroll_to(100.0, 5000.0);
        let frames = run_to_rest(&mut engine);
        assert!(frames.iter().all(|y| *y <= at && *y >= 100.0));
        assert_eq!(engine.position(), 100.0);
    }

    #[test]
    fn test_stopped_engine_ignores_input() {
        let mut engine = InertiaScroll::default();
        engine.wheel(300.0, 5000.0);
        engine.stop();
        assert!(engine.is_stopped());
        assert_eq!(engine.advance(FRAME_MS), None);
        assert!(!engine.wheel(10.0, 5000.0));
        assert!(!engine.scroll_to(10.0, 5000.0));
    }

    #[test]
    fn test_held_engine_leaves_wheel_to_browser() {
        let mut engine = InertiaScroll::default();
        engine.hold();
        assert!(!engine.wheel(300.0, 5000.0));
        assert_eq!(engine.advance(FRAME_MS), None);
        assert_eq!(engine.position(), 0.0);
        engine.release();
        assert!(engine.wheel(300.0, 5000.0));
    }

    #[test]
    fn test_hold_cancels_running_animation() {
        let mut engine = InertiaScroll::default();
        engine.wheel(600.0, 5000.0);
        engine.advance(FRAME_MS * 5.0);
        let at = engine.position();
        engine.hold();
        assert!(!engine.is_animating());
        assert_eq!(engine.target(), at);
        assert_eq!(engine.advance(FRAME_MS), None);
    }

    #[test]
    fn test_holds_nest() {
        let mut engine = InertiaScroll::default();
        engine.hold();
        engine.hold();
        engine.release();
        assert!(engine.is_held());
        assert!(!engine.wheel(10.0, 5000.0));
        engine.release();
        engine.release();
        assert!(!engine.is_held());
        assert!(engine.wheel(10.0, 5000.0));
    }

    #[test]
    fn test_programmatic_scroll_while_held() {
        let mut engine = InertiaScroll::default();
        engine.hold();
        assert!(engine.scroll_to(400.0, 5000.0));
        assert_eq!(run_to_rest(&mut engine).last().copied(), Some(400.0));
    }

    #[test]
    fn test_wheel_delta_modes() {
        let px = WheelDelta { delta_y: 3.0, delta_mode: 0 };
        let lines = WheelDelta { delta_y: 3.0, delta_mode: 1 };
        let pages = WheelDelta { delta_y: 1.0, delta_mode: 2 };
        assert_eq!(px.pixels(800.0), 3.0);
        assert!((lines.pixels(800.0) - 50.0).abs() < 1e-9);
        assert_eq!(pages.pixels(800.0), 800.0);
    }

    #[test]
    fn test_easing_endpoints() {
        assert!(ease_out_expo(0.0) < 0.01);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.9);
    }
}
