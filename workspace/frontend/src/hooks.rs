use crate::api_client::HttpTransport;
use crate::common::timer::GlooScheduler;
use crate::components::forecast::chart::PlotlyBackend;
use crate::components::forecast::state::{PageState, ReducerTarget};
use crate::settings;
use gold_forecast::{BootstrapLoader, Horizon, RequestController};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// The controller driving the browser page
pub type PageController = RequestController<HttpTransport, ReducerTarget, PlotlyBackend, GlooScheduler>;

/// Wires the forecast page: one controller per mount, the current price
/// loaded once, and a callback starting a request for a horizon.
#[hook]
pub fn use_prediction_page() -> (UseReducerHandle<PageState>, Callback<Horizon>) {
    let page = use_reducer(PageState::default);

    let controller = {
        let target = ReducerTarget::new(page.dispatcher());
        use_memo((), move |_| {
            let settings = settings::get_settings();
            log::debug!("Creating page controller for {}", settings.predict_url());
            PageController::new(
                HttpTransport::new(settings.predict_url()),
                target,
                PlotlyBackend,
                GlooScheduler,
                settings.controller_config(),
            )
        })
    };

    {
        let target = ReducerTarget::new(page.dispatcher());
        use_effect_with((), move |_| {
            spawn_local(async move {
                BootstrapLoader::new(HttpTransport::from_settings(), target)
                    .load()
                    .await;
            });
            || ()
        });
    }

    let on_predict = {
        let controller = controller.clone();
        Callback::from(move |horizon: Horizon| {
            log::debug!("User requested {} forecast", horizon);
            let controller = controller.clone();
            spawn_local(async move {
                controller.request_forecast(horizon).await;
            });
        })
    };

    (page, on_predict)
}
