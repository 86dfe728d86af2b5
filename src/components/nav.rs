use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::listener::scroll_y;
use crate::modal::use_modal_controller;

const SECTIONS: [(&str, &str); 4] = [
    ("Inicio", "#inicio"),
    ("Productos", "#productos"),
    ("Canje", "#canje"),
    ("Contacto", "#contacto"),
];

fn is_scrolled_past(offset: f64) -> bool {
    offset > config::NAV_SCROLL_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let controller = use_modal_controller();
    // `_eq` so scroll events that don't cross the threshold skip the re-render.
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                is_scrolled.set(is_scrolled_past(scroll_y()));
                || ()
            },
            (),
        );
    }

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_scrolled.set(is_scrolled_past(scroll_y()));
        });
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#inicio" class="nav-logo">
                    <span class="nav-logo-mark">{"T"}</span>
                    <span class="nav-logo-text">
                        {config::STORE_NAME}<span class="accent">{config::STORE_TOWN}</span>
                    </span>
                </a>
                <div class="nav-links">
                    { for SECTIONS.iter().map(|(label, href)| html! {
                        <a key={*label} href={*href} class="nav-link">{*label}</a>
                    }) }
                </div>
                <button class="nav-cta" onclick={controller.open_lead_form_callback()}>
                    {"Comprar Ahora"}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled_past(0.0));
        assert!(!is_scrolled_past(config::NAV_SCROLL_THRESHOLD));
        assert!(is_scrolled_past(config::NAV_SCROLL_THRESHOLD + 1.0));
    }

    #[test]
    fn small_scrolls_keep_the_same_flag() {
        // Every offset below the threshold maps to the same value, so the
        // equality-checked state sees no change while scrolling near the top.
        let flags: Vec<bool> = [0.0, 10.0, 25.0, 49.0].into_iter().map(is_scrolled_past).collect();
        assert!(flags.iter().all(|flag| !flag));
    }
}
