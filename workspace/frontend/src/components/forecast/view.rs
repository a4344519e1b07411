use super::results::{DayResults, MonthResults, WeekResults};
use super::ticker::PriceTicker;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::hooks::use_prediction_page;
use gold_forecast::{Field, Horizon, Region};
use yew::prelude::*;

fn button_label(horizon: Horizon) -> &'static str {
    match horizon {
        Horizon::Day => "Next Day",
        Horizon::Week => "Next Week",
        Horizon::Month => "Next Month",
    }
}

#[function_component(Forecast)]
pub fn forecast() -> Html {
    let (page, on_predict) = use_prediction_page();

    let buttons = Horizon::ALL.into_iter().map(|horizon| {
        let on_predict = on_predict.clone();
        html! {
            <button
                class="btn join-item"
                data-type={horizon.as_str()}
                onclick={Callback::from(move |_| on_predict.emit(horizon))}
            >
                {button_label(horizon)}
            </button>
        }
    });

    let results_display = if page.is_visible(Region::ResultsContainer) {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <>
            <PriceTicker page={page.clone()} />
            <div class="flex justify-between items-center mb-6">
                <div class="join">
                    {for buttons}
                </div>
            </div>
            <Loading visible={page.is_visible(Region::Loading)} text={Some("Generating forecast...".to_string())} />
            <ErrorDisplay
                visible={page.is_visible(Region::Error)}
                message={page.text_or(Field::ErrorText, "").to_string()}
            />
            <div id={Region::ResultsContainer.element_id()} style={results_display}>
                <DayResults page={page.clone()} />
                <WeekResults page={page.clone()} />
                <MonthResults page={page} />
            </div>
        </>
    }
}
