use yew::prelude::*;

use crate::components::activity_table::ActivityTable;
use crate::hooks::use_dataset;

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let dataset = use_dataset();

    html! {
        <div class="flex justify-center">
            <ActivityTable
                rows={dataset.table_data.clone()}
                title="Recent Activity"
                class="w-full max-w-4xl"
            />
        </div>
    }
}
