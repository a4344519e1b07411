use gold_forecast::Field;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastStatsProps {
    pub min: (Field, String),
    pub avg: (Field, String),
    pub max: (Field, String),
}

/// Min / average / max of a forecast series
#[function_component(ForecastStats)]
pub fn forecast_stats(props: &ForecastStatsProps) -> Html {
    let stat = |title: &str, (field, value): &(Field, String), class: &str| {
        html! {
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{title}</div>
                    <div id={field.element_id()} class={classes!("stat-value", class.to_string())}>{value}</div>
                </div>
            </div>
        }
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            {stat("Minimum", &props.min, "text-error")}
            {stat("Average", &props.avg, "text-primary")}
            {stat("Maximum", &props.max, "text-success")}
        </div>
    }
}
