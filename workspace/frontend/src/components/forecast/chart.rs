use gold_forecast::{ChartBackend, ChartError, ChartSpec, SlotId};
use plotly::common::{Fill, Line, LineShape, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Plotly", "Plots"], js_name = resize)]
    fn plots_resize(div_id: &str) -> Result<js_sys::Promise, JsValue>;
}

/// Refits the plot in `div_id` to its container.
///
/// A plot drawn while its region was still `display: none` is sized for a
/// zero-width box; call this once the region is shown. A div without a plot
/// is left alone.
pub fn resize_plot(div_id: &'static str) {
    let promise = match plots_resize(div_id) {
        Ok(promise) => promise,
        Err(e) => {
            log::trace!("No plot to resize in #{}: {:?}", div_id, e);
            return;
        }
    };
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::trace!("No plot to resize in #{}: {:?}", div_id, e);
        }
    });
}

/// A plot living in one of the chart divs.
#[derive(Debug)]
pub struct PlotHandle {
    div_id: &'static str,
}

/// Draws chart slots with Plotly.js.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotlyBackend;

impl ChartBackend for PlotlyBackend {
    type Handle = PlotHandle;

    fn draw(&self, slot: SlotId, spec: &ChartSpec) -> Result<PlotHandle, ChartError> {
        let div_id = slot.canvas_id();
        log::trace!("Plotting {} points into #{}", spec.values.len(), div_id);

        let data = js_sys::Array::new();
        data.push(&to_js(&trace(spec))?);

        new_plot(div_id, data.into(), to_js(&layout(spec))?)
            .map_err(|e| ChartError(format!("Plotly.newPlot failed: {:?}", e)))?;
        Ok(PlotHandle { div_id })
    }

    fn destroy(&self, handle: PlotHandle) {
        if let Err(e) = purge(handle.div_id) {
            log::warn!("Plotly.purge on #{} failed: {:?}", handle.div_id, e);
        }
    }
}

fn trace(spec: &ChartSpec) -> Box<Scatter<String, f64>> {
    let shape = if spec.tension > 0.0 { LineShape::Spline } else { LineShape::Linear };
    let trace = Scatter::new(spec.labels.clone(), spec.values.clone())
        .mode(Mode::LinesMarkers)
        .name(spec.series_label)
        .line(
            Line::new()
                .color(spec.color.css())
                .width(2.0)
                .shape(shape)
                .smoothing(spec.tension * 2.0),
        );

    if spec.fill {
        trace
            .fill(Fill::ToZeroY)
            .fill_color(spec.color.css_alpha(spec.fill_alpha))
    } else {
        trace
    }
}

fn layout(spec: &ChartSpec) -> Layout {
    // Filling to zero would drag plotly's autorange down to 0
    let y_axis = match spec.y_range() {
        Some((lo, hi)) => Axis::new().range(vec![lo, hi]),
        None => Axis::new().auto_range(true),
    };

    Layout::new()
        .title(Title::with_text(spec.title))
        .auto_size(true)
        .show_legend(spec.show_legend)
        .y_axis(y_axis)
        .height(400)
}

// Serialize to JSON and parse as a JS object
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ChartError> {
    let json = serde_json::to_string(value)
        .map_err(|e| ChartError(format!("Failed to serialize chart: {}", e)))?;
    js_sys::JSON::parse(&json).map_err(|e| ChartError(format!("Failed to parse chart JSON: {:?}", e)))
}
