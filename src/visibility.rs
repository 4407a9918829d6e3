use std::{cell::Cell, fmt, rc::Rc};

use thiserror::Error;

/// Fraction of a section that must be on screen before it is revealed.
pub const SECTION_THRESHOLD: f64 = 0.2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisibilityError {
    #[error("threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f64),
    #[error("viewport intersection unavailable: {0}")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Result<Self, VisibilityError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(VisibilityError::ThresholdOutOfRange(fraction))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn admits(self, entry: IntersectionEntry) -> bool {
        entry.is_intersecting && entry.ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(SECTION_THRESHOLD)
    }
}

/// One report from the host about a watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn at_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchHandle(u64);

impl WatchHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

pub type IntersectionCallback = Box<dyn FnMut(IntersectionEntry)>;

/// Environment service that reports how much of an element overlaps the viewport.
///
/// The browser implementation lives in `app::viewport`; tests use a scripted fake.
pub trait IntersectionHost {
    type Element: ?Sized;

    fn register(
        &self,
        element: &Self::Element,
        threshold: Threshold,
        callback: IntersectionCallback,
    ) -> Result<WatchHandle, VisibilityError>;

    fn release(&self, handle: WatchHandle);
}

impl<H: IntersectionHost + ?Sized> IntersectionHost for Rc<H> {
    type Element = H::Element;

    fn register(
        &self,
        element: &Self::Element,
        threshold: Threshold,
        callback: IntersectionCallback,
    ) -> Result<WatchHandle, VisibilityError> {
        (**self).register(element, threshold, callback)
    }

    fn release(&self, handle: WatchHandle) {
        (**self).release(handle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Detached,
    Watching(WatchHandle),
    Unsupported,
    Released,
}

struct VisibilityState {
    visible: Cell<bool>,
    released: Cell<bool>,
    listener: Option<Box<dyn Fn(bool)>>,
}

impl VisibilityState {
    fn apply(&self, visible: bool) {
        if self.released.get() {
            return;
        }
        if self.visible.replace(visible) != visible {
            if let Some(listener) = &self.listener {
                listener(visible);
            }
        }
    }
}

/// Tracks whether a single element sits far enough inside the viewport.
///
/// Owns at most one host watch. The watch is released by [`teardown`] or on drop,
/// whichever comes first.
///
/// [`teardown`]: VisibilityObserver::teardown
pub struct VisibilityObserver<H: IntersectionHost> {
    host: H,
    threshold: Threshold,
    state: Rc<VisibilityState>,
    phase: Phase,
}

impl<H: IntersectionHost> VisibilityObserver<H> {
    pub fn new(host: H, threshold: Threshold) -> Self {
        Self::build(host, threshold, None)
    }

    /// Like [`new`](Self::new), but calls `listener` every time the flag flips.
    pub fn with_listener(
        host: H,
        threshold: Threshold,
        listener: impl Fn(bool) + 'static,
    ) -> Self {
        Self::build(host, threshold, Some(Box::new(listener)))
    }

    fn build(host: H, threshold: Threshold, listener: Option<Box<dyn Fn(bool)>>) -> Self {
        Self {
            host,
            threshold,
            state: Rc::new(VisibilityState {
                visible: Cell::new(false),
                released: Cell::new(false),
                listener,
            }),
            phase: Phase::Detached,
        }
    }

    /// Starts watching `element` if it is rendered and nothing is watched yet.
    ///
    /// Returns whether a watch is active afterwards.
    pub fn attach(&mut self, element: Option<&H::Element>) -> bool {
        match self.phase {
            Phase::Watching(_) => return true,
            Phase::Unsupported | Phase::Released => return false,
            Phase::Detached => {}
        }
        let Some(element) = element else {
            log::debug!("element not rendered yet, skipping intersection watch");
            return false;
        };

        let state = Rc::clone(&self.state);
        let threshold = self.threshold;
        let callback: IntersectionCallback =
            Box::new(move |entry| state.apply(threshold.admits(entry)));

        match self.host.register(element, self.threshold, callback) {
            Ok(handle) => {
                log::debug!(
                    "watching element at threshold {} ({handle:?})",
                    self.threshold.get()
                );
                self.phase = Phase::Watching(handle);
                true
            }
            Err(e) => {
                log::warn!("{e}; section stays hidden");
                self.phase = Phase::Unsupported;
                false
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible.get()
    }

    pub fn is_watching(&self) -> bool {
        matches!(self.phase, Phase::Watching(_))
    }

    /// Releases the watch. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.state.released.set(true);
        if let Phase::Watching(handle) = self.phase {
            log::debug!("releasing intersection watch {handle:?}");
            self.host.release(handle);
        }
        self.phase = Phase::Released;
    }
}

impl<H: IntersectionHost> Drop for VisibilityObserver<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<H: IntersectionHost> fmt::Debug for VisibilityObserver<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("threshold", &self.threshold)
            .field("visible", &self.is_visible())
            .field("phase", &self.phase)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    /// Scripted host: tests push ratios at it instead of scrolling.
    #[derive(Default)]
    pub(crate) struct FakeHost {
        next_id: Cell<u64>,
        watches: RefCell<HashMap<WatchHandle, (&'static str, IntersectionCallback)>>,
        // callbacks the host kept after release, to simulate late delivery
        stale: RefCell<Vec<IntersectionCallback>>,
        pub(crate) registered: Cell<usize>,
        pub(crate) released: Cell<usize>,
        pub(crate) unsupported: bool,
    }

    impl FakeHost {
        pub(crate) fn unsupported() -> Self {
            Self {
                unsupported: true,
                ..Self::default()
            }
        }

        pub(crate) fn scroll(&self, element: &str, ratio: f64) {
            for (el, cb) in self.watches.borrow_mut().values_mut() {
                if *el == element {
                    cb(IntersectionEntry::at_ratio(ratio));
                }
            }
        }

        fn replay_stale(&self, ratio: f64) {
            for cb in self.stale.borrow_mut().iter_mut() {
                cb(IntersectionEntry::at_ratio(ratio));
            }
        }

        pub(crate) fn active(&self) -> usize {
            self.watches.borrow().len()
        }
    }

    impl IntersectionHost for FakeHost {
        type Element = &'static str;

        fn register(
            &self,
            element: &Self::Element,
            _threshold: Threshold,
            callback: IntersectionCallback,
        ) -> Result<WatchHandle, VisibilityError> {
            if self.unsupported {
                return Err(VisibilityError::Unsupported("no IntersectionObserver".into()));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let handle = WatchHandle::new(id);
            self.watches.borrow_mut().insert(handle, (*element, callback));
            self.registered.set(self.registered.get() + 1);
            Ok(handle)
        }

        fn release(&self, handle: WatchHandle) {
            if let Some((_, cb)) = self.watches.borrow_mut().remove(&handle) {
                self.stale.borrow_mut().push(cb);
            }
            self.released.set(self.released.get() + 1);
        }
    }

    fn observer(host: &Rc<FakeHost>) -> VisibilityObserver<Rc<FakeHost>> {
        VisibilityObserver::new(Rc::clone(host), Threshold::default())
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(
            Threshold::new(1.5),
            Err(VisibilityError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::default().get(), SECTION_THRESHOLD);
    }

    #[test]
    fn test_threshold_admits_entries() {
        let t = Threshold::default();
        assert!(t.admits(IntersectionEntry::at_ratio(0.2)));
        assert!(t.admits(IntersectionEntry::at_ratio(0.9)));
        assert!(!t.admits(IntersectionEntry::at_ratio(0.19)));
        assert!(!t.admits(IntersectionEntry::at_ratio(0.0)));
        // ratio alone is not enough if the host says the element left
        assert!(!t.admits(IntersectionEntry {
            ratio: 0.5,
            is_intersecting: false,
        }));
    }

    #[test]
    fn test_starts_hidden_and_skips_unrendered_element() {
        let host = Rc::new(FakeHost::default());
        let mut obs = observer(&host);
        assert!(!obs.is_visible());

        assert!(!obs.attach(None));
        assert_eq!(host.registered.get(), 0);
        host.scroll("about", 1.0);
        assert!(!obs.is_visible());

        // a later attempt with the element in place succeeds
        assert!(obs.attach(Some(&"about")));
        assert_eq!(host.registered.get(), 1);
        assert!(!obs.is_visible());
    }

    #[test]
    fn test_tracks_threshold_crossings_both_ways() {
        let host = Rc::new(FakeHost::default());
        let mut obs = observer(&host);
        obs.attach(Some(&"projects"));

        host.scroll("projects", 0.1);
        assert!(!obs.is_visible());
        host.scroll("projects", 0.2);
        assert!(obs.is_visible());
        host.scroll("projects", 0.75);
        assert!(obs.is_visible());
        host.scroll("projects", 0.05);
        assert!(!obs.is_visible());
        host.scroll("projects", 0.3);
        assert!(obs.is_visible());
    }

    #[test]
    fn test_registers_once_per_lifetime() {
        let host = Rc::new(FakeHost::default());
        let mut obs = observer(&host);
        assert!(obs.attach(Some(&"hero")));
        assert!(obs.attach(Some(&"hero")));
        assert!(obs.attach(Some(&"contact")));
        assert_eq!(host.registered.get(), 1);
        assert_eq!(host.active(), 1);
    }

    #[test]
    fn test_teardown_stops_updates_and_is_idempotent() {
        let host = Rc::new(FakeHost::default());
        let mut obs = observer(&host);
        obs.attach(Some(&"about"));
        host.scroll("about", 0.5);
        assert!(obs.is_visible());

        obs.teardown();
        obs.teardown();
        assert_eq!(host.released.get(), 1);
        assert_eq!(host.active(), 0);
        assert!(!obs.is_watching());

        // late delivery from a host that kept the callback around
        host.replay_stale(0.0);
        assert!(obs.is_visible());

        // cannot be re-armed after release
        assert!(!obs.attach(Some(&"about")));
        assert_eq!(host.registered.get(), 1);
    }

    #[test]
    fn test_drop_releases_watch() {
        let host = Rc::new(FakeHost::default());
        {
            let mut obs = observer(&host);
            obs.attach(Some(&"hero"));
            assert_eq!(host.active(), 1);
        }
        assert_eq!(host.active(), 0);
        assert_eq!(host.released.get(), 1);
    }

    #[test]
    fn test_drop_without_watch_releases_nothing() {
        let host = Rc::new(FakeHost::default());
        {
            let mut obs = observer(&host);
            obs.attach(None);
        }
        assert_eq!(host.released.get(), 0);
    }

    #[test]
    fn test_unsupported_host_degrades_without_retry() {
        let host = Rc::new(FakeHost::unsupported());
        let mut obs = observer(&host);
        assert!(!obs.attach(Some(&"hero")));
        assert!(!obs.attach(Some(&"hero")));
        assert!(!obs.is_visible());
        assert_eq!(host.registered.get(), 0);
        drop(obs);
        assert_eq!(host.released.get(), 0);
    }

    #[test]
    fn test_listener_fires_only_on_change() {
        let host = Rc::new(FakeHost::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut obs = VisibilityObserver::with_listener(
            Rc::clone(&host),
            Threshold::default(),
            move |v| sink.borrow_mut().push(v),
        );
        obs.attach(Some(&"contact"));

        host.scroll("contact", 0.1);
        host.scroll("contact", 0.4);
        host.scroll("contact", 0.6);
        host.scroll("contact", 0.0);
        obs.teardown();
        host.replay_stale(1.0);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_sections_do_not_share_state() {
        let host = Rc::new(FakeHost::default());
        let mut hero = observer(&host);
        let mut about = observer(&host);
        hero.attach(Some(&"hero"));
        about.attach(Some(&"about"));

        host.scroll("hero", 1.0);
        assert!(hero.is_visible());
        assert!(!about.is_visible());

        about.teardown();
        host.scroll("hero", 0.0);
        assert!(!hero.is_visible());
        assert_eq!(host.active(), 1);
    }
}
