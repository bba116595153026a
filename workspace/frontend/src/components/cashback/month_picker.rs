use yew::prelude::*;
use common::YearMonth;
use super::picker::{Granularity, MonthPicker};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Open picker, or `None` when the dialog is hidden
    pub picker: Option<MonthPicker>,
    pub on_select_year: Callback<i32>,
    pub on_select_month: Callback<u32>,
    pub on_back: Callback<()>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(MonthPickerModal)]
pub fn month_picker_modal(props: &Props) -> Html {
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_cancel.emit(());
        })
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let body = match &props.picker {
        None => html! {},
        Some(picker) => match picker.granularity {
            Granularity::Year => html! {
                <div class="grid grid-cols-3 gap-2">
                    {for picker.years().into_iter().map(|year| {
                        let on_select_year = props.on_select_year.clone();
                        let active = picker.selection.year == year;
                        html! {
                            <button
                                key={year}
                                class={classes!("btn", active.then_some("btn-primary"))}
                                onclick={Callback::from(move |_| on_select_year.emit(year))}
                            >
                                {year}
                            </button>
                        }
                    })}
                </div>
            },
            Granularity::Month { year } => {
                let on_back = {
                    let on_back = props.on_back.clone();
                    Callback::from(move |_: MouseEvent| on_back.emit(()))
                };
                html! {
                    <>
                        <button class="btn btn-ghost btn-sm mb-2 gap-2" onclick={on_back}>
                            <i class="fas fa-chevron-left"></i>
                            {year}
                        </button>
                        <div class="grid grid-cols-4 gap-2">
                            {for picker.months().into_iter().map(|month: YearMonth| {
                                let on_select_month = props.on_select_month.clone();
                                let active = picker.selection == month;
                                let number = month.month;
                                html! {
                                    <button
                                        key={number}
                                        class={classes!("btn", "btn-sm", active.then_some("btn-primary"))}
                                        onclick={Callback::from(move |_| on_select_month.emit(number))}
                                    >
                                        {month.short_name()}
                                    </button>
                                }
                            })}
                        </div>
                    </>
                }
            }
        },
    };

    let selection = props
        .picker
        .as_ref()
        .map(|p| p.selection.label())
        .unwrap_or_default();

    html! {
        <dialog class={classes!("modal", props.picker.is_some().then_some("modal-open"))} id="month_picker_modal">
            <div class="modal-box max-w-md">
                <h3 class="font-bold text-lg">{"Choose a month"}</h3>
                <p class="text-sm text-base-content/60 mb-4">{selection}</p>
                {body}
                <div class="modal-action">
                    <button type="button" class="btn" onclick={on_cancel.clone()}>{"Cancel"}</button>
                    <button type="button" class="btn btn-primary" onclick={on_confirm}>{"Confirm"}</button>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_cancel}>{"close"}</button>
            </form>
        </dialog>
    }
}
