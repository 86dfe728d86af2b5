use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::listener::viewport_height;

// How far into the viewport the top edge must be before revealing.
const REVEAL_MARGIN: f64 = 100.0;

fn is_in_view(top: f64, viewport: f64) -> bool {
    top < viewport - REVEAL_MARGIN
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let triggered = use_mut_ref(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    let check = {
        let node = node.clone();
        let visible = visible.clone();
        let pending = pending.clone();
        let delay_ms = props.delay_ms;
        Rc::new(move || {
            if *triggered.borrow() {
                return;
            }
            let top = match node.cast::<Element>() {
                Some(element) => element.get_bounding_client_rect().top(),
                None => return,
            };
            if !is_in_view(top, viewport_height()) {
                return;
            }
            *triggered.borrow_mut() = true;
            if delay_ms == 0 {
                visible.set(true);
            } else {
                let visible = visible.clone();
                *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || visible.set(true)));
            }
        })
    };

    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                // Dropping an unfired timeout cancels it.
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| check());

    html! {
        <div ref={node} class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_below_the_fold_stays_hidden() {
        assert!(!is_in_view(900.0, 800.0));
        assert!(!is_in_view(700.0, 800.0));
    }

    #[test]
    fn element_inside_the_margin_is_revealed() {
        assert!(is_in_view(699.0, 800.0));
        assert!(is_in_view(-50.0, 800.0));
    }
}
