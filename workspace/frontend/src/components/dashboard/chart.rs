use common::{ChartSpec, ChartTrace};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
    pub spec: ChartSpec,
}

/// Renders one declarative [`ChartSpec`] through Plotly.
///
/// The spec is translated 1:1 into Plotly traces and layout; all visual
/// decisions were already made by the backend chart builders.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    {
        let spec = props.spec.clone();
        use_effect_with((chart_ref.clone(), spec), move |(chart_ref, spec)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    let traces: Vec<_> = spec.traces.iter().map(trace_json).collect();
                    let layout = layout_json(spec);
                    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                    newPlot(
                        &div_id,
                        serde_wasm_bindgen::to_value(&traces).unwrap_or(JsValue::NULL),
                        serde_wasm_bindgen::to_value(&layout).unwrap_or(JsValue::NULL),
                        serde_wasm_bindgen::to_value(&config).unwrap_or(JsValue::NULL),
                    );
                }
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id={props.id.clone()} class="chart-container"
             style={format!("height: {}px;", props.spec.height)}></div>
    }
}

fn trace_json(trace: &ChartTrace) -> serde_json::Value {
    match trace {
        ChartTrace::Bar {
            name,
            categories,
            values,
            color,
        } => serde_json::json!({
            "type": "bar",
            "name": name,
            "x": categories,
            "y": values,
            "marker": {"color": color},
        }),
        ChartTrace::Line {
            name,
            dates,
            values,
            color,
        } => {
            let x: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
            let line = match color {
                Some(color) => serde_json::json!({"color": color}),
                None => serde_json::json!({}),
            };
            serde_json::json!({
                "type": "scatter",
                "mode": "lines",
                "name": name,
                "x": x,
                "y": values,
                "line": line,
            })
        }
        ChartTrace::Map {
            name,
            latitudes,
            longitudes,
            sizes,
            color_values,
            size_max,
            ..
        } => {
            // Plotly's area size scaling: sizeref = 2 * max(size) / size_max²
            let max_size = sizes.iter().cloned().fold(f64::MIN, f64::max).max(1.0);
            let size_ref = 2.0 * max_size / ((*size_max as f64) * (*size_max as f64));
            serde_json::json!({
                "type": "scattermapbox",
                "name": name,
                "lat": latitudes,
                "lon": longitudes,
                "marker": {
                    "size": sizes,
                    "sizemode": "area",
                    "sizeref": size_ref,
                    "color": color_values,
                },
            })
        }
    }
}

fn layout_json(spec: &ChartSpec) -> serde_json::Value {
    let mut layout = serde_json::json!({
        "title": {"text": spec.title.replace('\n', "<br>")},
        "height": spec.height,
        "plot_bgcolor": spec.background,
        "paper_bgcolor": spec.background,
        "font": {"color": spec.font_color},
        "margin": {"r": 10, "t": 60, "l": 50, "b": 40},
    });

    if let Some(x_label) = &spec.x_label {
        layout["xaxis"] = serde_json::json!({"title": {"text": x_label}});
    }
    if let Some(y_label) = &spec.y_label {
        layout["yaxis"] = serde_json::json!({"title": {"text": y_label}});
    }

    // A map trace carries its own projection settings
    if let Some(ChartTrace::Map {
        latitudes,
        longitudes,
        zoom,
        style,
        ..
    }) = spec
        .traces
        .iter()
        .find(|t| matches!(t, ChartTrace::Map { .. }))
    {
        let center_lat = latitudes.iter().sum::<f64>() / latitudes.len().max(1) as f64;
        let center_lon = longitudes.iter().sum::<f64>() / longitudes.len().max(1) as f64;
        layout["mapbox"] = serde_json::json!({
            "style": style,
            "zoom": zoom,
            "center": {"lat": center_lat, "lon": center_lon},
        });
        layout["margin"] = serde_json::json!({"r": 0, "t": 30, "l": 0, "b": 0});
    }

    layout
}
