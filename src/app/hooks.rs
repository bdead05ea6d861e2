use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_raf_fn, use_window,
    utils::Pausable, UseEventListenerOptions, UseRafFnCallbackArgs,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, WheelEvent};

use crate::scroll::{
    is_scroll_container, FrameGate, InertiaScroll, Overflow, OverflowTarget, ScrollMetrics,
    Section, WheelDelta,
};

fn read_metrics() -> Option<ScrollMetrics> {
    let window = window();
    let root = document().document_element()?;
    let scroll_top = window
        .scroll_y()
        .unwrap_or_else(|_| root.scroll_top() as f64);
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollMetrics::new(
        scroll_top,
        root.scroll_height() as f64,
        viewport_height,
    ))
}

/// True when the wheel event started inside an element that scrolls itself,
/// such as the project modal's panel.
fn over_nested_scroller(ev: &WheelEvent) -> bool {
    let window = window();
    let root = document().document_element();
    let mut node = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
    while let Some(el) = node {
        if root.as_ref() == Some(&el) {
            break;
        }
        let overflow_y = window
            .get_computed_style(&el)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("overflow-y").ok())
            .unwrap_or_default();
        if is_scroll_container(
            &overflow_y,
            el.scroll_height() as f64,
            el.client_height() as f64,
        ) {
            return true;
        }
        node = el.parent_element();
    }
    false
}

/// Page scroll progress in `[0, 100]`, recomputed at most once per frame.
pub fn use_scroll_progress() -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);
    let gate = StoredValue::new(FrameGate::default());

    let measure = move || {
        if let Some(metrics) = read_metrics() {
            set_progress.set(metrics.progress());
        }
    };

    // effects only run in the browser, once mounted
    Effect::new(move |_| measure());

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if gate.try_update_value(FrameGate::request).unwrap_or(false) {
            request_animation_frame(move || {
                gate.try_update_value(FrameGate::release);
                measure();
            });
        }
    });

    progress
}

/// Handle to the running wheel-smoothing engine.
#[derive(Clone, Copy)]
pub struct InertiaHandle {
    engine: StoredValue<InertiaScroll>,
    pause: StoredValue<Box<dyn Fn()>, LocalStorage>,
}

impl InertiaHandle {
    /// Returns false when the engine has been stopped.
    pub fn scroll_to(&self, y: f64) -> bool {
        let limit = read_metrics().map(|m| m.limit()).unwrap_or_default();
        self.engine
            .try_update_value(|e| e.scroll_to(y, limit))
            .unwrap_or(false)
    }

    pub fn hold(&self) {
        self.engine.try_update_value(InertiaScroll::hold);
    }

    pub fn release(&self) {
        self.engine.try_update_value(InertiaScroll::release);
    }

    pub fn stop(&self) {
        self.pause.try_with_value(|pause| pause());
        self.engine.try_update_value(InertiaScroll::stop);
        log::debug!("inertia scrolling stopped");
    }
}

/// Starts wheel smoothing for the lifetime of the calling component. The
/// frame loop is paused when the component is cleaned up.
pub fn use_inertia_scroll() -> InertiaHandle {
    let engine = StoredValue::new(InertiaScroll::default());

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if let Some(Some(y)) = engine.try_update_value(|e| e.advance(args.delta)) {
            window().scroll_to_with_x_and_y(0.0, y);
        }
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |ev: WheelEvent| {
            // pinch zoom, or a nested scroller's own wheel
            if ev.ctrl_key() || over_nested_scroller(&ev) {
                return;
            }
            let Some(metrics) = read_metrics() else {
                return;
            };
            let delta = WheelDelta {
                delta_y: ev.delta_y(),
                delta_mode: ev.delta_mode(),
            }
            .pixels(metrics.viewport_height);
            let handled = engine
                .try_update_value(|e| {
                    e.sync(metrics.scroll_top);
                    e.wheel(delta, metrics.limit())
                })
                .unwrap_or(false);
            if handled {
                ev.prevent_default();
            }
        },
        UseEventListenerOptions::default().passive(false),
    );

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if let Some(metrics) = read_metrics() {
            engine.try_update_value(|e| e.sync(metrics.scroll_top));
        }
    });

    let handle = InertiaHandle {
        engine,
        pause: StoredValue::new_local(Box::new(pause) as Box<dyn Fn()>),
    };
    on_cleanup(move || handle.stop());
    log::debug!("inertia scrolling started");
    handle
}

/// Scrolls to page sections, through the inertia engine when one is provided.
#[derive(Clone, Copy)]
pub struct SmoothScroll {
    inertia: Option<InertiaHandle>,
}

pub fn use_smooth_scroll() -> SmoothScroll {
    SmoothScroll {
        inertia: use_context::<InertiaHandle>(),
    }
}

impl SmoothScroll {
    /// Returns false, doing nothing, when the section isn't in the document.
    pub fn to_section(self, section: Section) -> bool {
        let Some(el) = document().get_element_by_id(section.id()) else {
            log::debug!("no #{} element to scroll to", section.id());
            return false;
        };
        let top = el.get_bounding_client_rect().top() + window().scroll_y().unwrap_or_default();
        if self.inertia.is_some_and(|i| i.scroll_to(top)) {
            return true;
        }
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }

    pub fn to_top(self) {
        if self.inertia.is_some_and(|i| i.scroll_to(0.0)) {
            return;
        }
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

/// The page body, for [`crate::scroll::ScrollLock`]. Wheel smoothing is
/// held while the body is locked, since the engine scrolls programmatically.
#[derive(Clone, Copy)]
pub struct PageScroll {
    inertia: Option<InertiaHandle>,
}

pub fn use_page_scroll() -> PageScroll {
    PageScroll {
        inertia: use_context::<InertiaHandle>(),
    }
}

impl OverflowTarget for PageScroll {
    fn set_overflow(&self, value: Overflow) {
        if let Some(inertia) = self.inertia {
            match value {
                Overflow::Hidden => inertia.hold(),
                Overflow::Auto => inertia.release(),
            }
        }
        if let Some(body) = document().body() {
            if let Err(e) = body.style().set_property("overflow", value.as_css()) {
                log::warn!("couldn't set body overflow: {e:?}");
            }
        }
    }
}
