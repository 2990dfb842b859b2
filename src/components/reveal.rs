use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_VIEWPORT_INSET;
use crate::scroll::ScrollSubscription;

/// One-shot visibility latch. Once `shown` is set nothing clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub shown: bool,
}

impl RevealState {
    pub fn observe(self, visible: bool) -> Self {
        Self { shown: self.shown || visible }
    }
}

impl Reducible for RevealState {
    type Action = bool;

    fn reduce(self: Rc<Self>, visible: bool) -> Rc<Self> {
        let next = self.observe(visible);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Whether an element spanning `top..bottom` (viewport coordinates)
/// intersects the viewport shrunk by the reveal inset on both edges.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    let inset = viewport_height * REVEAL_VIEWPORT_INSET;
    top < viewport_height - inset && bottom > inset
}

fn element_in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let Some(height) = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|value| value.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    in_view(rect.top(), rect.bottom(), height)
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    /// Transition delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer_eq(RevealState::default);

    {
        let shown = state.shown;
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |shown| {
                let subscription = if *shown {
                    None
                } else {
                    state.dispatch(element_in_view(&node));
                    let on_scroll = {
                        let state = state.clone();
                        move |_offset: f64| state.dispatch(element_in_view(&node))
                    };
                    ScrollSubscription::attach(on_scroll)
                        .map_err(|err| log::warn!("reveal section without scroll listener: {:?}", err))
                        .ok()
                };
                move || drop(subscription)
            },
            shown,
        );
    }

    let style = (props.delay > 0.0).then(|| format!("transition-delay: {}s;", props.delay));

    html! {
        <div
            ref={node}
            class={classes!("reveal", state.shown.then_some("revealed"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visibility_reveals_once() {
        let mut state = RevealState::default();
        let mut transitions = 0;
        for visible in [false, false, true, true, false, true, false] {
            let next = state.observe(visible);
            if next != state {
                transitions += 1;
            }
            state = next;
        }
        assert_eq!(transitions, 1);
        assert!(state.shown);
    }

    #[test]
    fn never_reverses() {
        let shown = RevealState { shown: true };
        assert!(shown.observe(false).shown);
    }

    #[test]
    fn viewport_inset_applies_to_both_edges() {
        // 1000px viewport, 100px inset on each edge.
        assert!(in_view(850.0, 1200.0, 1000.0));
        assert!(!in_view(950.0, 1200.0, 1000.0));
        assert!(!in_view(-400.0, 50.0, 1000.0));
        assert!(in_view(-400.0, 150.0, 1000.0));
    }
}
