use yew::prelude::*;
use super::layout::{BreakdownRow, CategoryBreakdown};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub breakdown: CategoryBreakdown,
}

fn render_row(row: &BreakdownRow) -> Html {
    html! {
        <li class="flex items-center gap-4 py-3" key={row.name.clone()}>
            <div
                class="w-10 h-10 rounded-full flex items-center justify-center text-white"
                style={format!("background-color: {}", row.color)}
            >
                <i class={classes!("fas", row.icon.clone())}></i>
            </div>
            <div class="flex-1">
                <div class="font-semibold">{&row.name}</div>
                <div class="text-sm text-base-content/60">{&row.percentage}{" of this month"}</div>
            </div>
            <div class="text-right">
                <div class="font-bold">{&row.amount}</div>
                <div class="badge badge-ghost badge-sm">{&row.rate_label}</div>
            </div>
        </li>
    }
}

#[function_component(CategoryBreakdownList)]
pub fn category_breakdown_list(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Cashback by category"}</h2>
                {match &props.breakdown {
                    CategoryBreakdown::Rows(rows) => html! {
                        <ul class="divide-y divide-base-200">
                            { for rows.iter().map(render_row) }
                        </ul>
                    },
                    CategoryBreakdown::Empty { title, message } => html! {
                        <div class="flex flex-col items-center text-center py-8 gap-2">
                            <i class="fas fa-receipt text-4xl text-base-content/30"></i>
                            <h3 class="font-semibold">{title}</h3>
                            <p class="text-sm text-base-content/60 max-w-sm">{message}</p>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
