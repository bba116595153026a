use yew::prelude::*;
use super::layout::SummaryCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub card: SummaryCard,
}

#[function_component(CashbackSummaryCard)]
pub fn cashback_summary_card(props: &Props) -> Html {
    html! {
        <div class="stats stats-vertical md:stats-horizontal shadow bg-base-100 w-full">
            <div class="stat">
                <div class="stat-figure text-primary">
                    <i class="fas fa-piggy-bank text-3xl"></i>
                </div>
                <div class="stat-title">{"Total cashback earned"}</div>
                <div class="stat-value text-primary">{&props.card.all_time}</div>
                <div class="stat-desc">{"All time"}</div>
            </div>
            <div class="stat">
                <div class="stat-title">{"This month"}</div>
                <div class="stat-value text-success">{&props.card.this_month}</div>
            </div>
        </div>
    }
}
