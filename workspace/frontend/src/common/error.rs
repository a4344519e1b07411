use gold_forecast::{Field, Region};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub visible: bool,
    pub message: String,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    let display = if props.visible { "display: block;" } else { "display: none;" };

    html! {
        <div id={Region::Error.element_id()} class="alert alert-error max-w-lg mx-auto my-6" style={display}>
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <span id={Field::ErrorText.element_id()} class="text-sm">{&props.message}</span>
        </div>
    }
}
