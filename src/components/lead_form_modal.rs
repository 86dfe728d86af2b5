use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::lead::{self, Interest, LeadError, LeadForm};

#[derive(Properties, PartialEq)]
pub struct LeadFormModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Called with the WhatsApp link when the browser refused to open it.
    pub on_popup_blocked: Callback<String>,
}

#[function_component(LeadFormModal)]
pub fn lead_form_modal(props: &LeadFormModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }
    html! {
        <LeadFormDialog
            on_close={props.on_close.clone()}
            on_popup_blocked={props.on_popup_blocked.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
struct LeadFormDialogProps {
    on_close: Callback<()>,
    on_popup_blocked: Callback<String>,
}

// Mounted only while the modal is open; closing drops the form state and the
// Escape listener.
#[function_component(LeadFormDialog)]
fn lead_form_dialog(props: &LeadFormDialogProps) -> Html {
    let form = use_state(LeadForm::default);
    let error = use_state(|| None::<LeadError>);

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadForm {
                phone: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_interest = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(interest) = Interest::from_key(&select.value()) {
                form.set(LeadForm {
                    interest,
                    ..(*form).clone()
                });
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();
        let on_popup_blocked = props.on_popup_blocked.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let lead = match lead::validate(&form) {
                Ok(lead) => lead,
                Err(err) => {
                    error.set(Some(err));
                    return;
                }
            };
            info!("Lead captured, interest {:?}", lead.interest);
            let link = lead::whatsapp_link(&lead);
            let opened = web_sys::window()
                .and_then(|window| window.open_with_url_and_target(&link, "_blank").ok())
                .flatten()
                .is_some();
            if !opened {
                warn!("WhatsApp tab was blocked");
                on_popup_blocked.emit(link);
            }
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content lead-form" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="modal-close" onclick={close} aria-label="Cerrar">{"✕"}</button>
                <h2>{"Hablemos"}</h2>
                <p>{"Dejanos tus datos y te escribimos por WhatsApp."}</p>
                <form {onsubmit}>
                    <label for="lead-name">{"Nombre"}</label>
                    <input
                        id="lead-name"
                        type="text"
                        placeholder="Tu nombre"
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    <label for="lead-phone">{"Teléfono"}</label>
                    <input
                        id="lead-phone"
                        type="tel"
                        placeholder="345 512-3456"
                        value={form.phone.clone()}
                        oninput={on_phone}
                    />
                    <label for="lead-interest">{"¿Qué estás buscando?"}</label>
                    <select id="lead-interest" onchange={on_interest}>
                        { for Interest::ALL.iter().map(|interest| html! {
                            <option
                                value={interest.key()}
                                selected={*interest == form.interest}
                            >
                                {interest.label()}
                            </option>
                        }) }
                    </select>
                    if let Some(err) = &*error {
                        <p class="form-error">{err.to_string()}</p>
                    }
                    <button type="submit" class="modal-button primary">{"Enviar"}</button>
                </form>
            </div>
        </div>
    }
}
