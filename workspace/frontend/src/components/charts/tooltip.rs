use compute::chart::TooltipContent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChartTooltipProps {
    pub content: Option<TooltipContent>,
    pub position: Option<(f64, f64)>,
}

/// Floating label next to the pointer. Renders nothing without both content and a position.
#[function_component(ChartTooltip)]
pub fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    let (Some(content), Some((x, y))) = (&props.content, props.position) else {
        return html! {};
    };

    let style = format!("left: {:.0}px; top: {:.0}px; transform: translate(-50%, calc(-100% - 12px));", x, y);
    let swatch = format!("background: {};", content.swatch);

    html! {
        <div class="absolute z-20 pointer-events-none rounded-xl bg-base-100/95 shadow-xl border border-base-300 px-3 py-2 text-sm" style={style}>
            <div class="flex items-center gap-2">
                <span class="inline-block w-3 h-3 rounded-full" style={swatch}></span>
                <span class="font-semibold">{ &content.label }</span>
            </div>
            <div class="text-lg font-bold">{ &content.value_text }</div>
            if let Some(detail) = &content.detail {
                <div class="text-xs text-base-content/60">{ detail }</div>
            }
        </div>
    }
}
