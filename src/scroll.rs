//! Scroll-driven state: an edge-triggered offset threshold and a one-way
//! reveal for sections entering the viewport.
//!
//! Listeners follow the same shape as the rest of the app: `Closure`s
//! registered in an effect and removed in its cleanup. Scroll samples are
//! gated through `requestAnimationFrame` so at most one comparison runs
//! per frame no matter how often the event fires.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;

/// Viewport fraction an element must reach before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.1;
/// Pulls the reveal line 50px above the viewport bottom.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Edge-triggered comparison of a scroll offset against a fixed threshold.
///
/// `sample` reports a value only when the offset crosses the boundary,
/// never for repeated samples on the same side of it.
pub struct ThresholdLatch {
    threshold: f64,
    engaged: bool,
}

impl ThresholdLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            engaged: false,
        }
    }

    pub fn engaged(&self) -> bool {
        self.engaged
    }

    pub fn sample(&mut self, offset: f64) -> Option<bool> {
        let next = offset >= self.threshold;
        if next != self.engaged {
            self.engaged = next;
            Some(next)
        } else {
            None
        }
    }
}

/// One-way latch. `trigger` returns true exactly once.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OneShot {
    #[default]
    NotTriggered,
    Triggered,
}

impl OneShot {
    pub fn trigger(&mut self) -> bool {
        match self {
            OneShot::NotTriggered => {
                *self = OneShot::Triggered;
                true
            }
            OneShot::Triggered => false,
        }
    }

    pub fn triggered(&self) -> bool {
        matches!(self, OneShot::Triggered)
    }
}

/// Watches the vertical scroll offset and emits `true`/`false` whenever it
/// crosses `threshold`, sampling at most once per animation frame. The
/// initial offset is reported immediately if the page loads pre-scrolled.
#[hook]
pub fn use_scroll_threshold(threshold: f64, on_cross: Callback<bool>) {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();

            let latch = Rc::new(RefCell::new(ThresholdLatch::new(threshold)));
            let ticking = Rc::new(Cell::new(false));
            let frame_id = Rc::new(Cell::new(None::<i32>));

            let frame_callback = {
                let window = window.clone();
                let latch = latch.clone();
                let ticking = ticking.clone();
                let frame_id = frame_id.clone();
                let on_cross = on_cross.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    frame_id.set(None);
                    ticking.set(false);
                    let offset = window.scroll_y().unwrap_or(0.0);
                    if let Some(engaged) = latch.borrow_mut().sample(offset) {
                        on_cross.emit(engaged);
                    }
                }) as Box<dyn FnMut()>))
            };

            let scroll_callback = {
                let window = window.clone();
                let ticking = ticking.clone();
                let frame_id = frame_id.clone();
                let frame_callback = frame_callback.clone();
                Closure::wrap(Box::new(move || {
                    if !ticking.get() {
                        ticking.set(true);
                        if let Ok(id) = window
                            .request_animation_frame(frame_callback.as_ref().as_ref().unchecked_ref())
                        {
                            frame_id.set(Some(id));
                        }
                    }
                }) as Box<dyn FnMut()>)
            };

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

            // The page may mount already scrolled past the threshold.
            if let Some(engaged) = latch
                .borrow_mut()
                .sample(window.scroll_y().unwrap_or(0.0))
            {
                on_cross.emit(engaged);
            }

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                if let Some(id) = frame_id.take() {
                    let _ = window.cancel_animation_frame(id);
                }
                drop(scroll_callback);
                drop(frame_callback);
            }
        },
        threshold,
    );
}

/// Flags every `.animate-on-scroll` element `visible` the first time it
/// intersects the viewport. The class is never removed and a triggered
/// element is unobserved, so scrolling away cannot hide it again.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let document = web_sys::window().unwrap().document().unwrap();

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let target = entry.target();
                            let _ = target.class_list().add_1("visible");
                            observer.unobserve(&target);
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);
            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .unwrap();

            let elements = document.query_selector_all(".animate-on-scroll").unwrap();
            for index in 0..elements.length() {
                if let Some(node) = elements.get(index) {
                    if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                        observer.observe(&element);
                    }
                }
            }

            move || {
                observer.disconnect();
                drop(callback);
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_only_on_crossing() {
        let mut latch = ThresholdLatch::new(100.0);
        assert_eq!(latch.sample(0.0), None);
        assert_eq!(latch.sample(99.9), None);
        assert_eq!(latch.sample(100.0), Some(true));
        assert_eq!(latch.sample(150.0), None);
        assert_eq!(latch.sample(320.0), None);
        assert_eq!(latch.sample(99.0), Some(false));
        assert_eq!(latch.sample(12.0), None);
    }

    #[test]
    fn latch_boundary_is_inclusive() {
        let mut latch = ThresholdLatch::new(100.0);
        assert_eq!(latch.sample(100.0), Some(true));
        assert!(latch.engaged());
        assert_eq!(latch.sample(100.0), None);
        assert_eq!(latch.sample(99.999), Some(false));
        assert!(!latch.engaged());
    }

    #[test]
    fn one_shot_triggers_exactly_once() {
        let mut latch = OneShot::default();
        assert!(!latch.triggered());
        assert!(latch.trigger());
        assert!(latch.triggered());
        assert!(!latch.trigger());
        assert!(latch.triggered());
    }
}
