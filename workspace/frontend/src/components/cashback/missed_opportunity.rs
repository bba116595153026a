use yew::prelude::*;
use super::layout::MissedOpportunity;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub notice: MissedOpportunity,
}

#[function_component(MissedOpportunityNotice)]
pub fn missed_opportunity_notice(props: &Props) -> Html {
    html! {
        <div class="alert alert-warning shadow" role="status">
            <i class="fas fa-lightbulb text-xl"></i>
            <div>
                <h3 class="font-bold">{format!("{} in cashback missed", props.notice.amount)}</h3>
                <div class="text-sm">{&props.notice.message}</div>
            </div>
        </div>
    }
}
