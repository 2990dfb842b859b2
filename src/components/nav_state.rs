use std::rc::Rc;

use yew::Reducible;

use crate::config::{NAV_COMPACT_ENTER, NAV_COMPACT_EXIT};

/// Compact/expanded axis of the navbar.
///
/// `compact` depends on the history of scroll offsets, not only the latest
/// one: offsets inside `[NAV_COMPACT_EXIT, NAV_COMPACT_ENTER]` keep whatever
/// mode was already active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub compact: bool,
}

impl ScrollState {
    pub fn next(self, offset: f64) -> Self {
        if !self.compact && offset > NAV_COMPACT_ENTER {
            Self { compact: true }
        } else if self.compact && offset < NAV_COMPACT_EXIT {
            Self { compact: false }
        } else {
            self
        }
    }

    pub fn mode(&self) -> NavMode {
        if self.compact {
            NavMode::Compact
        } else {
            NavMode::Expanded
        }
    }
}

impl Reducible for ScrollState {
    type Action = f64;

    fn reduce(self: Rc<Self>, offset: f64) -> Rc<Self> {
        let next = self.next(offset);
        if next == *self {
            self
        } else {
            log::debug!("navbar compact: {} -> {} at {}px", self.compact, next.compact, offset);
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A link inside the menu was followed; the route may not change when it
    /// points at the current page.
    Close,
    RouteChanged,
}

/// Open/closed axis of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn next(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => Self { open: !self.open },
            MenuAction::Close | MenuAction::RouteChanged => Self { open: false },
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    Expanded,
    Compact,
}

/// Every visual parameter that changes between the two navbar modes.
#[derive(Debug, PartialEq, Eq)]
pub struct NavStyle {
    pub width: &'static str,
    pub max_width: &'static str,
    pub margin_top: &'static str,
    pub padding: &'static str,
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub border: &'static str,
    pub box_shadow: &'static str,
}

const EXPANDED: NavStyle = NavStyle {
    width: "95%",
    max_width: "1400px",
    margin_top: "1.5rem",
    padding: "1rem 1.5rem",
    background: "rgba(5, 5, 5, 0)",
    backdrop_filter: "blur(0px)",
    border: "1px solid rgba(255, 255, 255, 0)",
    box_shadow: "none",
};

const COMPACT: NavStyle = NavStyle {
    width: "90%",
    max_width: "900px",
    margin_top: "1rem",
    padding: "0.75rem 1rem",
    background: "rgba(5, 5, 5, 0.85)",
    backdrop_filter: "blur(16px)",
    border: "1px solid rgba(255, 255, 255, 0.1)",
    box_shadow: "0 10px 40px -10px rgba(0, 0, 0, 0.5)",
};

pub fn nav_style(mode: NavMode) -> &'static NavStyle {
    match mode {
        NavMode::Expanded => &EXPANDED,
        NavMode::Compact => &COMPACT,
    }
}

impl NavStyle {
    /// Inline `style` attribute for the `<nav>` element.
    pub fn to_css(&self) -> String {
        format!(
            "width: {}; max-width: {}; margin-top: {}; padding: {}; background-color: {}; \
             backdrop-filter: {}; -webkit-backdrop-filter: {}; border: {}; box-shadow: {};",
            self.width,
            self.max_width,
            self.margin_top,
            self.padding,
            self.background,
            self.backdrop_filter,
            self.backdrop_filter,
            self.border,
            self.box_shadow,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(offsets: &[f64]) -> Vec<bool> {
        let mut state = ScrollState::default();
        offsets
            .iter()
            .map(|&offset| {
                state = state.next(offset);
                state.compact
            })
            .collect()
    }

    #[test]
    fn scroll_scenario_follows_hysteresis() {
        assert_eq!(
            trace(&[0.0, 70.0, 50.0, 35.0, 45.0, 65.0]),
            vec![false, true, true, false, false, true]
        );
    }

    #[test]
    fn band_edges_do_not_transition() {
        assert_eq!(trace(&[60.0]), vec![false]);
        assert_eq!(trace(&[61.0, 40.0]), vec![true, true]);
        assert_eq!(trace(&[61.0, 39.9]), vec![true, false]);
    }

    #[test]
    fn hovering_inside_band_never_flickers() {
        let offsets: Vec<f64> = (0..200).map(|i| 40.0 + (i % 21) as f64).collect();

        let from_expanded = trace(&offsets);
        assert!(from_expanded.iter().all(|compact| !compact));

        let mut state = ScrollState { compact: true };
        for offset in offsets {
            state = state.next(offset);
            assert!(state.compact);
        }
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(ScrollState::default());
        let same = state.clone().reduce(50.0);
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.reduce(80.0);
        assert!(changed.compact);
    }

    #[test]
    fn toggling_n_times_opens_on_odd_counts() {
        for n in 0..10 {
            let mut menu = MenuState::default();
            for _ in 0..n {
                menu = menu.next(MenuAction::Toggle);
            }
            assert_eq!(menu.open, n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn route_change_always_closes_menu() {
        let open = MenuState::default().next(MenuAction::Toggle);
        assert!(open.open);
        assert!(!open.next(MenuAction::RouteChanged).open);
        assert!(!MenuState::default().next(MenuAction::RouteChanged).open);
    }

    #[test]
    fn close_is_idempotent() {
        let open = MenuState { open: true };
        let closed = open.next(MenuAction::Close);
        assert!(!closed.open);
        assert_eq!(closed.next(MenuAction::Close), closed);
    }

    #[test]
    fn axes_are_independent() {
        let menu = MenuState::default().next(MenuAction::Toggle);
        let scroll = ScrollState::default().next(100.0);
        assert!(menu.open);
        assert_eq!(scroll.mode(), NavMode::Compact);

        let scroll = scroll.next(0.0);
        assert!(menu.open);
        assert_eq!(scroll.mode(), NavMode::Expanded);
    }

    #[test]
    fn style_follows_mode() {
        assert_eq!(nav_style(NavMode::Expanded).background, "rgba(5, 5, 5, 0)");
        assert_eq!(nav_style(NavMode::Compact).max_width, "900px");

        let css = nav_style(NavMode::Compact).to_css();
        assert!(css.contains("width: 90%;"));
        assert!(css.contains("backdrop-filter: blur(16px);"));
        assert!(!nav_style(NavMode::Expanded).to_css().contains("blur(16px)"));
    }
}
