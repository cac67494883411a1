use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum AlertKind {
    Error,
    Warning,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert-error",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AlertProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or(AlertKind::Error)]
    pub kind: AlertKind,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

/// Banner de aviso; con `on_dismiss` muestra el botón de cerrar
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let dismiss_button = props.on_dismiss.clone().map(|cb| {
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
        html! {
            <button class="alert-close" aria-label="Cerrar" {onclick}>{"✕"}</button>
        }
    });

    html! {
        <div class={classes!("alert", props.kind.class())} role="alert">
            <div class="alert-body">
                <strong class="alert-title">{props.title.clone()}</strong>
                if let Some(message) = &props.message {
                    <p class="alert-message">{message.clone()}</p>
                }
                {props.children.clone()}
            </div>
            {dismiss_button}
        </div>
    }
}
