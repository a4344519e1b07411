use gold_forecast::Region;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub visible: bool,
    #[prop_or_default]
    pub text: Option<String>,
}

/// Spinner shown while a forecast request is in flight
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let display = if props.visible { "display: flex;" } else { "display: none;" };

    html! {
        <div
            id={Region::Loading.element_id()}
            class="flex flex-col justify-center items-center py-12 gap-4"
            style={display}
        >
            <span class="loading loading-spinner loading-lg"></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
