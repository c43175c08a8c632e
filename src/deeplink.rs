//! Deep-link dispatch: try to hand the user to an installed native app,
//! fall back to the web destination when nothing intercepts the attempt.
//!
//! There is no portable way to ask whether an app is installed before
//! navigating, so interception is detected with a short timer: if the page
//! is still in the foreground when it fires, nothing took over and we
//! redirect to the web URL. An accepted heuristic, not a defect.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::platform::{NavigatorPlatform, Platform};

/// A pair of destinations for one external chat platform. The fallback is
/// always a reachable web URL; the native URI may or may not resolve
/// depending on what is installed on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub native_uri: String,
    pub fallback_url: String,
}

impl LinkTarget {
    pub fn new(native_uri: impl Into<String>, fallback_url: impl Into<String>) -> Self {
        Self {
            native_uri: native_uri.into(),
            fallback_url: fallback_url.into(),
        }
    }
}

/// Internal failure taxonomy. None of these ever reach the caller of
/// [`Dispatcher::dispatch`]; each one resolves to the web fallback.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no browsing context available")]
    NoContext,
    #[error("native navigation failed: {0}")]
    NativeAttempt(String),
    #[error("new browsing context was blocked")]
    PopupBlocked,
}

/// The browsing-context operations the dispatcher drives. Production code
/// uses [`WindowGateway`]; tests substitute a recording fake.
pub trait Gateway {
    /// Handle for an armed fallback. Dropping it disarms the fallback.
    type Fallback;

    /// Simulated user-activated navigation to a custom-scheme URI.
    fn attempt_native(&self, uri: &str) -> Result<(), DispatchError>;
    /// Open `url` in a new browsing context.
    fn open_new(&self, url: &str) -> Result<(), DispatchError>;
    /// Replace the current context's location with `url`.
    fn redirect(&self, url: &str);
    /// Whether the page has been hidden (a native app took over).
    fn is_backgrounded(&self) -> bool;
    /// Run `thunk` after `delay_ms` unless the returned handle is dropped.
    fn schedule_fallback(&self, delay_ms: u32, thunk: Box<dyn FnOnce()>) -> Self::Fallback;
}

pub struct Dispatcher<G: Gateway, P: Platform> {
    gateway: Rc<G>,
    platform: P,
    fallback_delay_ms: u32,
    /// At most one armed fallback across all invocations; arming a new one
    /// drops, and thereby cancels, the previous handle.
    pending: Rc<RefCell<Option<G::Fallback>>>,
}

impl<G: Gateway + 'static, P: Platform> Dispatcher<G, P> {
    pub fn new(gateway: G, platform: P, fallback_delay_ms: u32) -> Self {
        Self {
            gateway: Rc::new(gateway),
            platform,
            fallback_delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Best-effort navigation to `target`. Fire-and-forget: every failure
    /// path ends at the web fallback, never at the caller.
    ///
    /// Non-mobile platforms skip the native attempt entirely; desktop
    /// custom-URI handlers are too unreliable for a predictable UX.
    pub fn dispatch(&self, target: &LinkTarget) {
        if !self.platform.is_mobile() {
            if let Err(err) = self.gateway.open_new(&target.fallback_url) {
                warn!("new context failed ({}), navigating in place", err);
                self.gateway.redirect(&target.fallback_url);
            }
            return;
        }

        if let Err(err) = self.gateway.attempt_native(&target.native_uri) {
            warn!("native attempt failed ({}), going straight to fallback", err);
            self.cancel_pending();
            self.gateway.redirect(&target.fallback_url);
            return;
        }

        let gateway = Rc::clone(&self.gateway);
        let pending = Rc::clone(&self.pending);
        let fallback_url = target.fallback_url.clone();
        let handle = self.gateway.schedule_fallback(
            self.fallback_delay_ms,
            Box::new(move || {
                pending.borrow_mut().take();
                if gateway.is_backgrounded() {
                    // The native app intercepted; the armed redirect is moot.
                    return;
                }
                gateway.redirect(&fallback_url);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Disarms the pending fallback, if any.
    pub fn cancel_pending(&self) {
        self.pending.borrow_mut().take();
    }

    pub fn has_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

/// `web_sys`-backed gateway for the real browser runtime. Every lookup is
/// refetched per call so a detached context degrades into `DispatchError`
/// instead of a panic.
pub struct WindowGateway;

impl WindowGateway {
    fn window() -> Result<web_sys::Window, DispatchError> {
        web_sys::window().ok_or(DispatchError::NoContext)
    }
}

impl Gateway for WindowGateway {
    type Fallback = Timeout;

    // A hidden anchor clicked programmatically counts as user-activated
    // navigation, which keeps popup blockers out of the way.
    fn attempt_native(&self, uri: &str) -> Result<(), DispatchError> {
        let document = Self::window()?.document().ok_or(DispatchError::NoContext)?;
        let body = document.body().ok_or(DispatchError::NoContext)?;
        let anchor = document
            .create_element("a")
            .map_err(|_| DispatchError::NativeAttempt("could not create anchor".into()))?;
        anchor
            .set_attribute("href", uri)
            .and_then(|_| anchor.set_attribute("style", "display: none"))
            .map_err(|_| DispatchError::NativeAttempt("could not prepare anchor".into()))?;
        body.append_child(&anchor)
            .map_err(|_| DispatchError::NativeAttempt("could not attach anchor".into()))?;
        let result = match anchor.dyn_ref::<web_sys::HtmlElement>() {
            Some(clickable) => {
                clickable.click();
                Ok(())
            }
            None => Err(DispatchError::NativeAttempt("anchor is not clickable".into())),
        };
        anchor.remove();
        result
    }

    fn open_new(&self, url: &str) -> Result<(), DispatchError> {
        match Self::window()?.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            _ => Err(DispatchError::PopupBlocked),
        }
    }

    fn redirect(&self, url: &str) {
        if let Ok(window) = Self::window() {
            let _ = window.location().set_href(url);
        }
    }

    fn is_backgrounded(&self) -> bool {
        Self::window()
            .ok()
            .and_then(|window| window.document())
            .map(|document| document.hidden())
            .unwrap_or(false)
    }

    fn schedule_fallback(&self, delay_ms: u32, thunk: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, thunk)
    }
}

thread_local! {
    static DISPATCHER: Dispatcher<WindowGateway, NavigatorPlatform> =
        Dispatcher::new(WindowGateway, NavigatorPlatform, config::FALLBACK_DELAY_MS);
}

/// Entry point for the CTA buttons.
pub fn open(target: &LinkTarget) {
    DISPATCHER.with(|dispatcher| dispatcher.dispatch(target));
}

/// Hooks `visibilitychange` so the armed fallback is disarmed the moment a
/// native app takes the page to the background. The in-thunk visibility
/// check remains as the second line of defense.
pub fn install_visibility_cancellation() {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    let on_visibility_change = Closure::wrap(Box::new(move || {
        let hidden = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.hidden())
            .unwrap_or(false);
        if hidden {
            DISPATCHER.with(|dispatcher| dispatcher.cancel_pending());
        }
    }) as Box<dyn FnMut()>);
    let _ = document.add_event_listener_with_callback(
        "visibilitychange",
        on_visibility_change.as_ref().unchecked_ref(),
    );
    // Lives for the page's lifetime.
    on_visibility_change.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Native(String),
        OpenNew(String),
        Redirect(String),
    }

    struct FakePlatform {
        mobile: bool,
    }

    impl Platform for FakePlatform {
        fn is_mobile(&self) -> bool {
            self.mobile
        }
    }

    type Armed = (Rc<Cell<bool>>, Box<dyn FnOnce()>);

    #[derive(Default, Clone)]
    struct FakeGateway {
        events: Rc<RefCell<Vec<Event>>>,
        backgrounded: Rc<Cell<bool>>,
        fail_native: Rc<Cell<bool>>,
        block_popup: Rc<Cell<bool>>,
        scheduled: Rc<RefCell<Vec<Armed>>>,
    }

    struct FakeFallback {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeFallback {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Gateway for FakeGateway {
        type Fallback = FakeFallback;

        fn attempt_native(&self, uri: &str) -> Result<(), DispatchError> {
            if self.fail_native.get() {
                return Err(DispatchError::NativeAttempt("forced failure".into()));
            }
            self.events.borrow_mut().push(Event::Native(uri.to_string()));
            Ok(())
        }

        fn open_new(&self, url: &str) -> Result<(), DispatchError> {
            if self.block_popup.get() {
                return Err(DispatchError::PopupBlocked);
            }
            self.events.borrow_mut().push(Event::OpenNew(url.to_string()));
            Ok(())
        }

        fn redirect(&self, url: &str) {
            self.events.borrow_mut().push(Event::Redirect(url.to_string()));
        }

        fn is_backgrounded(&self) -> bool {
            self.backgrounded.get()
        }

        fn schedule_fallback(&self, _delay_ms: u32, thunk: Box<dyn FnOnce()>) -> FakeFallback {
            let cancelled = Rc::new(Cell::new(false));
            self.scheduled.borrow_mut().push((cancelled.clone(), thunk));
            FakeFallback { cancelled }
        }
    }

    impl FakeGateway {
        /// Runs every armed thunk that was not cancelled, oldest first.
        fn fire_scheduled(&self) {
            let scheduled: Vec<Armed> = self.scheduled.borrow_mut().drain(..).collect();
            for (cancelled, thunk) in scheduled {
                if !cancelled.get() {
                    thunk();
                }
            }
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }
    }

    fn target() -> LinkTarget {
        LinkTarget::new("tg://resolve?domain=x", "https://t.me/+x")
    }

    fn dispatcher(mobile: bool) -> (Dispatcher<FakeGateway, FakePlatform>, FakeGateway) {
        let gateway = FakeGateway::default();
        let dispatcher = Dispatcher::new(gateway.clone(), FakePlatform { mobile }, 400);
        (dispatcher, gateway)
    }

    #[test]
    fn desktop_opens_fallback_in_new_context_only() {
        let (dispatcher, gateway) = dispatcher(false);
        dispatcher.dispatch(&target());

        assert_eq!(gateway.events(), vec![Event::OpenNew("https://t.me/+x".into())]);
        assert!(!dispatcher.has_pending());
        assert!(gateway.scheduled.borrow().is_empty());
    }

    #[test]
    fn desktop_blocked_popup_degrades_to_in_place_navigation() {
        let (dispatcher, gateway) = dispatcher(false);
        gateway.block_popup.set(true);
        dispatcher.dispatch(&target());

        assert_eq!(gateway.events(), vec![Event::Redirect("https://t.me/+x".into())]);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn mobile_attempts_native_before_any_fallback() {
        let (dispatcher, gateway) = dispatcher(true);
        dispatcher.dispatch(&target());

        assert_eq!(gateway.events(), vec![Event::Native("tg://resolve?domain=x".into())]);
        assert!(dispatcher.has_pending());
    }

    #[test]
    fn mobile_redirects_once_when_nothing_intercepts() {
        let (dispatcher, gateway) = dispatcher(true);
        dispatcher.dispatch(&target());
        gateway.fire_scheduled();

        assert_eq!(
            gateway.events(),
            vec![
                Event::Native("tg://resolve?domain=x".into()),
                Event::Redirect("https://t.me/+x".into()),
            ]
        );
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn mobile_suppresses_fallback_when_intercepted() {
        let (dispatcher, gateway) = dispatcher(true);
        dispatcher.dispatch(&target());
        gateway.backgrounded.set(true);
        gateway.fire_scheduled();

        assert_eq!(gateway.events(), vec![Event::Native("tg://resolve?domain=x".into())]);
    }

    #[test]
    fn rapid_dispatches_leave_at_most_one_armed_fallback() {
        let (dispatcher, gateway) = dispatcher(true);
        dispatcher.dispatch(&target());
        dispatcher.dispatch(&target());
        gateway.fire_scheduled();

        let redirects: Vec<_> = gateway
            .events()
            .into_iter()
            .filter(|event| matches!(event, Event::Redirect(_)))
            .collect();
        assert_eq!(redirects, vec![Event::Redirect("https://t.me/+x".into())]);
    }

    #[test]
    fn native_failure_degrades_immediately_without_arming_a_timer() {
        let (dispatcher, gateway) = dispatcher(true);
        gateway.fail_native.set(true);
        dispatcher.dispatch(&target());

        assert_eq!(gateway.events(), vec![Event::Redirect("https://t.me/+x".into())]);
        assert!(!dispatcher.has_pending());
        assert!(gateway.scheduled.borrow().is_empty());
    }

    #[test]
    fn cancel_pending_disarms_the_fallback() {
        let (dispatcher, gateway) = dispatcher(true);
        dispatcher.dispatch(&target());
        dispatcher.cancel_pending();
        gateway.fire_scheduled();

        assert_eq!(gateway.events(), vec![Event::Native("tg://resolve?domain=x".into())]);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn fallback_fires_at_most_once() {
        let (dispatcher, gateway) = dispatcher(true);
        dispatcher.dispatch(&target());
        gateway.fire_scheduled();
        gateway.fire_scheduled();

        let redirects = gateway
            .events()
            .into_iter()
            .filter(|event| matches!(event, Event::Redirect(_)))
            .count();
        assert_eq!(redirects, 1);
    }
}
