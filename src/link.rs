//! Links: turning user activations into router navigation
//!
//! A plain primary-button activation is taken over by the router. Anything
//! else (another button, or any modifier held) is left to the platform so
//! "open in new tab" style gestures keep working.

use crate::location::Location;
use crate::router::Router;
use crate::trace_log;
use std::fmt;
use std::rc::Rc;

/// Pointer button that produced an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Primary button (usually left)
    #[default]
    Left,
    Middle,
    Right,
    /// Any other button, by platform index
    Other(u16),
}

impl MouseButton {
    /// Map a platform button index (0 = primary, 1 = auxiliary, 2 = secondary).
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }

    /// Whether this is the main (left) button
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Modifier keys held during an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    /// Command on macOS, the Windows key elsewhere
    pub platform: bool,
}

impl Modifiers {
    /// No modifier held
    pub fn none() -> Self {
        Self::default()
    }

    /// Only Ctrl held
    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    /// Only Alt held
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }

    /// Only Shift held
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Only the platform key (Cmd / Super) held
    pub fn platform() -> Self {
        Self {
            platform: true,
            ..Self::default()
        }
    }

    /// Whether any modifier is held
    pub fn any(self) -> bool {
        self.control || self.alt || self.shift || self.platform
    }
}

/// A user activation of a link (a click, a tap, a key press)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Activation {
    pub button: MouseButton,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl Activation {
    /// Activation from a button and modifier state
    pub fn new(button: MouseButton, modifiers: Modifiers) -> Self {
        Self {
            button,
            modifiers,
            default_prevented: false,
        }
    }

    /// Primary button, nothing held
    pub fn primary() -> Self {
        Self::default()
    }

    /// Replace the button
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Replace the modifier state
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Plain primary-button activation with no modifier held
    pub fn is_plain(&self) -> bool {
        self.button.is_primary() && !self.modifiers.any()
    }

    /// Tell the platform not to run its own navigation
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether `prevent_default` was called
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

type ClickCallback = Rc<dyn Fn(&Activation)>;

/// Link to a location within the app.
///
/// ```
/// use hash_router::{Activation, Link, MemoryLocation, Modifiers, RouterOptions};
///
/// let router = RouterOptions::new()
///     .source(|| MemoryLocation::new("/"))
///     .base("/app")
///     .build();
/// let link = Link::new("/about");
/// assert_eq!(link.href(&router), "/app/about");
///
/// let mut ctrl_click = Activation::primary().with_modifiers(Modifiers::control());
/// assert!(!link.activate(&router, &mut ctrl_click));
/// assert_eq!(router.current(), "/");
///
/// let mut click = Activation::primary();
/// assert!(link.activate(&router, &mut click));
/// assert!(click.is_default_prevented());
/// assert_eq!(router.current(), "/about");
/// ```
#[derive(Clone)]
pub struct Link {
    to: String,
    on_click: Option<ClickCallback>,
}

impl Link {
    /// Link to `to`, resolved against the router base when rendered
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            on_click: None,
        }
    }

    /// Replace the target. Same as passing it to [`new`](Self::new); the
    /// last target set wins.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.to = href.into();
        self
    }

    /// Callback run after the link navigates; receives the original activation
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Activation) + 'static,
    {
        self.on_click = Some(Rc::new(callback));
        self
    }

    /// Navigation target, without the base prefix
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Address to expose to the platform: base followed by target
    pub fn href(&self, router: &Router) -> String {
        router.href(&self.to)
    }

    /// Handle an activation.
    ///
    /// Returns `true` when the router took over: default behavior was
    /// prevented, navigation was requested and the click callback ran.
    /// Returns `false` and leaves the activation untouched otherwise.
    pub fn activate(&self, router: &Router, activation: &mut Activation) -> bool {
        if !activation.is_plain() {
            trace_log!(
                "Link to '{}' left to the platform ({:?}, {:?})",
                self.to,
                activation.button,
                activation.modifiers
            );
            return false;
        }

        activation.prevent_default();
        router.navigate(Location::new(&self.to));

        if let Some(callback) = &self.on_click {
            callback(activation);
        }
        true
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("to", &self.to)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;
    use crate::router::RouterOptions;
    use std::cell::{Cell, RefCell};

    fn router(base: &str) -> (Rc<MemoryLocation>, Router) {
        let source = Rc::new(MemoryLocation::new("/"));
        let router = RouterOptions::new()
            .shared_source(Rc::clone(&source))
            .base(base)
            .build();
        (source, router)
    }

    #[test]
    fn test_button_index_mapping() {
        assert_eq!(MouseButton::from_index(0), MouseButton::Left);
        assert_eq!(MouseButton::from_index(1), MouseButton::Middle);
        assert_eq!(MouseButton::from_index(2), MouseButton::Right);
        assert_eq!(MouseButton::from_index(4), MouseButton::Other(4));
    }

    #[test]
    fn test_plain_click_navigates() {
        let (source, router) = router("");
        let link = Link::new("/users/1");
        let mut click = Activation::primary();

        assert!(link.activate(&router, &mut click));
        assert!(click.is_default_prevented());
        assert_eq!(router.current(), "/users/1");
        assert_eq!(source.navigations(), 1);
    }

    #[test]
    fn test_modified_or_secondary_activation_never_navigates() {
        let (source, router) = router("");
        let link = Link::new("/users/1");

        let gestures = [
            Activation::primary().with_modifiers(Modifiers::control()),
            Activation::primary().with_modifiers(Modifiers::alt()),
            Activation::primary().with_modifiers(Modifiers::shift()),
            Activation::primary().with_modifiers(Modifiers::platform()),
            Activation::primary().with_button(MouseButton::Middle),
            Activation::primary().with_button(MouseButton::Right),
            Activation::new(MouseButton::Other(3), Modifiers::none()),
        ];

        for gesture in gestures {
            let mut event = gesture;
            assert!(!link.activate(&router, &mut event));
            assert!(!event.is_default_prevented());
        }

        assert_eq!(source.navigations(), 0);
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn test_callback_runs_after_navigation_with_original_event() {
        let (_, router) = router("");
        let seen = Rc::new(RefCell::new(None));
        let s = Rc::clone(&seen);
        let r = router.clone();
        let link = Link::new("/done").on_click(move |event| {
            *s.borrow_mut() = Some((r.current().into_string(), *event));
        });

        let mut click = Activation::primary();
        link.activate(&router, &mut click);

        let (location, event) = seen.borrow_mut().take().unwrap();
        assert_eq!(location, "/done");
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_callback_skipped_when_platform_handles() {
        let (_, router) = router("");
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let link = Link::new("/x").on_click(move |_| c.set(c.get() + 1));

        let mut event = Activation::primary().with_modifiers(Modifiers::shift());
        link.activate(&router, &mut event);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_with_href_overrides_target() {
        let (_, router) = router("/app");
        let link = Link::new("/old").with_href("/reports/7");

        assert_eq!(link.to(), "/reports/7");
        assert_eq!(link.href(&router), "/app/reports/7");

        assert!(link.activate(&router, &mut Activation::primary()));
        assert_eq!(router.current(), "/reports/7");
    }

    #[test]
    fn test_href_prefixes_base_but_navigation_does_not() {
        let (_, router) = router("/app");
        let link = Link::new("/settings");

        assert_eq!(link.href(&router), "/app/settings");
        assert_eq!(link.to(), "/settings");

        link.activate(&router, &mut Activation::primary());
        assert_eq!(router.current(), "/settings");
    }
}
