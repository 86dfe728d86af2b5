use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    html! {
        <div class={classes!("glass-card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
