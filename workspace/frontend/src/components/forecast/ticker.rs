use super::state::PageState;
use gold_forecast::Field;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PriceTickerProps {
    pub page: UseReducerHandle<PageState>,
}

/// Current price and its timestamp, filled once by the bootstrap request
#[function_component(PriceTicker)]
pub fn price_ticker(props: &PriceTickerProps) -> Html {
    let page = &props.page;
    let price_class = if page.is_error(Field::CurrentPrice) {
        classes!("stat-value", "text-error")
    } else {
        classes!("stat-value")
    };

    html! {
        <div class="stats shadow bg-base-100 mb-6">
            <div class="stat">
                <div class="stat-title">{"Gold Price (USD/oz)"}</div>
                <div id={Field::CurrentPrice.element_id()} class={price_class}>
                    {page.text_or(Field::CurrentPrice, "Loading...")}
                </div>
                <div id={Field::LastUpdated.element_id()} class="stat-desc">
                    {page.text_or(Field::LastUpdated, "")}
                </div>
            </div>
        </div>
    }
}
