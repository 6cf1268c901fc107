/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Viewport visibility tracking for the carousel timer and the
//! promotional video.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Owns an `IntersectionObserver` together with its callback closure.
/// The closure must outlive the observer or the browser calls into freed
/// memory; dropping this disconnects the observer first.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityObserver {
    /// `on_change` fires with `true` once at least `threshold` of the
    /// observed element is inside the viewport, `false` when it leaves.
    pub fn new(threshold: f64, mut on_change: impl FnMut(bool) + 'static) -> Result<Self, JsValue> {
        let callback: Closure<dyn FnMut(js_sys::Array)> = Closure::new(move |entries: js_sys::Array| {
            if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                on_change(entry.is_intersecting());
            }
        });
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Build an observer already watching `element`. Callers start from a
/// visible default, so when the observer cannot be constructed the element
/// simply stays "visible" instead of never activating.
pub fn observe_visibility(
    element: &Element,
    threshold: f64,
    on_change: impl FnMut(bool) + 'static,
) -> Option<VisibilityObserver> {
    match VisibilityObserver::new(threshold, on_change) {
        Ok(observer) => {
            observer.observe(element);
            Some(observer)
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, assuming visible: {err:?}");
            None
        }
    }
}
