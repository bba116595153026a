use yew::prelude::*;
use super::layout::MonthSelector;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selector: MonthSelector,
    pub on_open: Callback<()>,
}

#[function_component(MonthSelectorButton)]
pub fn month_selector_button(props: &Props) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <div class="flex items-center justify-between">
            <h2 class="text-lg font-semibold">{"Cashback by month"}</h2>
            <button class="btn btn-outline btn-sm gap-2" {onclick} aria-haspopup="dialog">
                <i class="fas fa-calendar-alt"></i>
                {&props.selector.label}
                <i class="fas fa-chevron-down text-xs"></i>
            </button>
        </div>
    }
}
