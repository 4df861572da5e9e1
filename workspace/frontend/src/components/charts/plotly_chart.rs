//! Thin binding over Plotly.js: draw a figure into a div and report hover.

use js_sys::{Array, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = react)]
    fn plotly_react(root: &HtmlElement, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly, js_name = purge)]
    fn plotly_purge(root: &HtmlElement);

    /// A div Plotly has drawn into; it gains an event-emitter interface.
    #[wasm_bindgen(extends = HtmlElement)]
    type PlotlyDiv;

    #[wasm_bindgen(method)]
    fn on(this: &PlotlyDiv, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method, js_name = removeAllListeners)]
    fn remove_all_listeners(this: &PlotlyDiv, event: &str);
}

/// The data point nearest to the pointer, and the pointer position relative to the plot div.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHit {
    pub index: Option<usize>,
    pub x: f64,
    pub y: f64,
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn number(target: &JsValue, key: &str) -> Option<f64> {
    get(target, key).and_then(|v| v.as_f64())
}

/// Reads a `plotly_hover` payload. A missing or malformed point list yields no index.
fn pointer_hit(payload: &JsValue, root: &HtmlElement) -> PointerHit {
    let index = get(payload, "points")
        .and_then(|points| points.dyn_into::<Array>().ok())
        .map(|points| points.get(0))
        .and_then(|point| number(&point, "pointNumber"))
        .filter(|n| *n >= 0.0 && n.fract() == 0.0)
        .map(|n| n as usize);

    let rect = root.get_bounding_client_rect();
    let (x, y) = get(payload, "event")
        .and_then(|event| Some((number(&event, "clientX")?, number(&event, "clientY")?)))
        .map(|(cx, cy)| (cx - rect.left(), cy - rect.top()))
        .unwrap_or((rect.width() / 2.0, rect.height() / 2.0));

    PointerHit { index, x, y }
}

fn to_js(value: &Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|e| {
            log::error!("Could not convert chart payload: {}", e);
            JsValue::NULL
        })
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub data: Value,
    pub layout: Value,
    /// Number of data points; hits beyond it are ignored.
    pub len: usize,
    pub on_pointer: Callback<Option<PointerHit>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    // Frees Plotly's resources for the div on unmount only.
    use_effect_with(container_ref.clone(), |container_ref| {
        let element = container_ref.cast::<HtmlElement>();
        move || {
            if let Some(element) = element {
                plotly_purge(&element);
            }
        }
    });

    use_effect_with(
        (container_ref.clone(), props.data.clone(), props.layout.clone()),
        |(container_ref, data, layout)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let config = serde_json::json!({"responsive": true, "displayModeBar": false});
                plotly_react(&element, to_js(data), to_js(layout), to_js(&config));
            }
            || ()
        },
    );

    {
        let on_pointer = props.on_pointer.clone();
        use_effect_with((container_ref.clone(), props.len), move |(container_ref, len)| {
            let element = container_ref.cast::<HtmlElement>();
            let listeners = element.map(|element| {
                log::trace!("Attaching Plotly hover listeners for {} points", len);
                let div = element.clone().unchecked_into::<PlotlyDiv>();

                let hover = {
                    let on_pointer = on_pointer.clone();
                    let root = element.clone();
                    Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
                        on_pointer.emit(Some(pointer_hit(&payload, &root)));
                    })
                };
                let unhover = Closure::<dyn FnMut(JsValue)>::new(move |_payload: JsValue| {
                    on_pointer.emit(None);
                });

                div.on("plotly_hover", &hover);
                div.on("plotly_unhover", &unhover);
                (div, hover, unhover)
            });

            move || {
                if let Some((div, hover, unhover)) = listeners {
                    div.remove_all_listeners("plotly_hover");
                    div.remove_all_listeners("plotly_unhover");
                    drop(hover);
                    drop(unhover);
                }
            }
        });
    }

    html! {
        <div ref={container_ref} class={classes!("w-full", "h-full", props.class.clone())}></div>
    }
}
