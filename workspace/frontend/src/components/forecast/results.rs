use super::chart::resize_plot;
use super::state::PageState;
use super::stats::ForecastStats;
use gold_forecast::{Field, Region, SlotId, Tone};
use yew::prelude::*;

const PLACEHOLDER: &str = "-";

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub page: UseReducerHandle<PageState>,
}

fn display(page: &PageState, region: Region) -> &'static str {
    if page.is_visible(region) {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[derive(Properties, PartialEq)]
struct ChartCardProps {
    slot: SlotId,
    visible: bool,
}

/// Chart div of a slot; refits the plot each time its region is shown.
#[function_component(ChartCard)]
fn chart_card(props: &ChartCardProps) -> Html {
    let div_id = props.slot.canvas_id();

    use_effect_with(props.visible, move |visible| {
        if *visible {
            resize_plot(div_id);
        }
        || ()
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div id={div_id} style="width:100%; height:400px;"></div>
            </div>
        </div>
    }
}

fn text(page: &PageState, field: Field) -> (Field, String) {
    (field, page.text_or(field, PLACEHOLDER).to_string())
}

#[function_component(DayResults)]
pub fn day_results(props: &ResultsProps) -> Html {
    let page = &props.page;
    let tone = page.change_tone().unwrap_or(Tone::Positive);

    html! {
        <div id={Region::DayResults.element_id()} class="card bg-base-100 shadow" style={display(page, Region::DayResults)}>
            <div class="card-body">
                <h3 class="card-title">{"Next Day Prediction"}</h3>
                <div class="stat-value">
                    {"$"}<span id={Field::NextDayPrice.element_id()}>{page.text_or(Field::NextDayPrice, PLACEHOLDER)}</span>
                </div>
                <div id="pred-change" class={classes!("pred-change", tone.css_class())}>
                    <span id={Field::ChangeAmount.element_id()}>{page.text_or(Field::ChangeAmount, PLACEHOLDER)}</span>
                    {" ("}<span id={Field::ChangePercent.element_id()}>{page.text_or(Field::ChangePercent, PLACEHOLDER)}</span>{"%)"}
                </div>
            </div>
        </div>
    }
}

#[function_component(WeekResults)]
pub fn week_results(props: &ResultsProps) -> Html {
    let page = &props.page;

    html! {
        <div id={Region::WeekResults.element_id()} style={display(page, Region::WeekResults)}>
            <ForecastStats
                min={text(page, Field::WeekMin)}
                avg={text(page, Field::WeekAvg)}
                max={text(page, Field::WeekMax)}
            />
            <ChartCard slot={SlotId::Week} visible={page.is_visible(Region::WeekResults)} />
        </div>
    }
}

#[function_component(MonthResults)]
pub fn month_results(props: &ResultsProps) -> Html {
    let page = &props.page;

    html! {
        <div id={Region::MonthResults.element_id()} style={display(page, Region::MonthResults)}>
            <ForecastStats
                min={text(page, Field::MonthMin)}
                avg={text(page, Field::MonthAvg)}
                max={text(page, Field::MonthMax)}
            />
            <ChartCard slot={SlotId::Month} visible={page.is_visible(Region::MonthResults)} />
        </div>
    }
}
