use compute::activity::table_rows;
use model::ActivityRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityTableProps {
    pub rows: Vec<ActivityRow>,
    pub title: AttrValue,
    /// Rows slide in once this turns true.
    #[prop_or(true)]
    pub visible: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ActivityTable)]
pub fn activity_table(props: &ActivityTableProps) -> Html {
    let rows = table_rows(&props.rows);

    html! {
        <div class={classes!("card", "bg-base-100", "shadow-xl", props.class.clone())}>
            <div class="card-body p-4 lg:p-6 min-h-0">
                <h3 class="card-title text-xl">{ props.title.clone() }</h3>
                <div class="overflow-auto">
                    <table class="table table-zebra table-pin-rows text-sm">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Activity"}</th>
                                <th class="hidden md:table-cell">{"User"}</th>
                                <th>{"Value"}</th>
                                <th>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().enumerate().map(|(index, row)| {
                                let style = if props.visible {
                                    format!("transition: all 0.6s ease-out; transition-delay: {}ms;", index * 50)
                                } else {
                                    "opacity: 0; transform: translateX(-20px);".to_string()
                                };
                                html! {
                                    <tr key={row.id} class="hover" style={style}>
                                        <td class="whitespace-nowrap font-semibold">{ &row.date }</td>
                                        <td><div class="max-w-xs truncate">{ &row.activity }</div></td>
                                        <td class="hidden md:table-cell text-base-content/70">
                                            <div class="max-w-xs truncate">{ &row.user }</div>
                                        </td>
                                        <td class="whitespace-nowrap">
                                            <span class={classes!("font-bold", "px-2", "py-1", "rounded-lg", row.value.tone.class())}>
                                                { &row.value.text }
                                            </span>
                                        </td>
                                        <td><span class={row.status.class}>{ &row.status.label }</span></td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
