use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod lead;
mod listener;
mod modal;
mod router;
mod components {
    pub mod glass_card;
    pub mod lead_form_modal;
    pub mod nav;
    pub mod reveal;
    pub mod warning_modal;
}
mod pages {
    pub mod landing;
    pub mod video;
}

use modal::{use_modal_state, ModalController};
use pages::{landing::Landing, video::VideoPage};
use router::{use_page_variant, PageVariant};

#[function_component(PageSwitch)]
fn page_switch() -> Html {
    match use_page_variant() {
        PageVariant::Video => {
            info!("Rendering Video page");
            html! { <VideoPage /> }
        }
        PageVariant::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let modals = use_modal_state();

    html! {
        <BrowserRouter>
            <ContextProvider<ModalController> context={modals}>
                <PageSwitch />
            </ContextProvider<ModalController>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
