use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    html! {
        <div class={classes!("card", "bg-base-100", "shadow-xl", "h-full", props.class.clone())}>
            <div class="card-body p-4 flex flex-col min-h-0">
                <h3 class="card-title text-lg">{ props.title.clone() }</h3>
                <div class="relative flex-1 min-h-[16rem]">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
