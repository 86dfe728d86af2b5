use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WarningModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Link the user can follow by hand, if there is one.
    #[prop_or_default]
    pub link: Option<AttrValue>,
}

#[function_component(WarningModal)]
pub fn warning_modal(props: &WarningModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content warning" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <h2>{"No pudimos abrir WhatsApp"}</h2>
                <p>{"Tu navegador bloqueó la ventana nueva."}</p>
                if let Some(link) = &props.link {
                    <a class="modal-button primary" href={link.clone()} target="_blank" rel="noopener noreferrer">
                        {"Abrir WhatsApp"}
                    </a>
                }
                <button class="modal-button cancel" onclick={close}>{"Cerrar"}</button>
            </div>
        </div>
    }
}
