use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::visibility::{
    IntersectionCallback, IntersectionEntry, IntersectionHost, Threshold, VisibilityError,
    WatchHandle,
};

type EntriesFn = dyn FnMut(js_sys::Array, IntersectionObserver);

struct Watch {
    observer: IntersectionObserver,
    // must outlive the observer
    _callback: Closure<EntriesFn>,
}

/// `IntersectionObserver`-backed host, one browser observer per watch.
#[derive(Default)]
pub struct DomIntersectionHost {
    next_id: Cell<u64>,
    watches: RefCell<HashMap<WatchHandle, Watch>>,
}

impl IntersectionHost for DomIntersectionHost {
    type Element = web_sys::Element;

    fn register(
        &self,
        element: &Self::Element,
        threshold: Threshold,
        mut callback: IntersectionCallback,
    ) -> Result<WatchHandle, VisibilityError> {
        let closure = Closure::<EntriesFn>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    callback(IntersectionEntry {
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.get()));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(|e| VisibilityError::Unsupported(format!("{e:?}")))?;
        observer.observe(element);

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let handle = WatchHandle::new(id);
        self.watches.borrow_mut().insert(
            handle,
            Watch {
                observer,
                _callback: closure,
            },
        );
        Ok(handle)
    }

    fn release(&self, handle: WatchHandle) {
        if let Some(watch) = self.watches.borrow_mut().remove(&handle) {
            watch.observer.disconnect();
        }
    }
}

impl Drop for DomIntersectionHost {
    fn drop(&mut self) {
        for (_, watch) in self.watches.get_mut().drain() {
            watch.observer.disconnect();
        }
    }
}
