use std::rc::Rc;
use yew::prelude::*;
use common::{MonthBounds, YearMonth};

use super::category_breakdown::CategoryBreakdownList;
use super::education::CashbackEducation;
use super::layout::{CashbackLayout, MonthSelector, Section};
use super::missed_opportunity::MissedOpportunityNotice;
use super::month_picker::MonthPickerModal;
use super::month_selector::MonthSelectorButton;
use super::picker::{CashbackScreenState, ScreenAction};
use super::summary_card::CashbackSummaryCard;
use crate::api_client::cashback::{load_snapshot, CashbackSnapshot};
use crate::common::fetch_hook::use_fetch_with_deps;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;
use crate::settings;

impl Reducible for CashbackScreenState {
    type Action = ScreenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Cashback screen action: {:?}", action);
        Rc::new((*self).clone().apply(action))
    }
}

fn render_section(section: Section, layout: &CashbackLayout, on_open_picker: &Callback<()>) -> Html {
    match section {
        Section::SummaryCard => html! {
            <CashbackSummaryCard card={layout.summary_card.clone()} />
        },
        Section::MonthSelector => html! {
            <MonthSelectorButton selector={layout.month_selector.clone()} on_open={on_open_picker.clone()} />
        },
        Section::MissedOpportunity => match &layout.missed_opportunity {
            Some(notice) => html! { <MissedOpportunityNotice notice={notice.clone()} /> },
            None => html! {},
        },
        Section::CategoryBreakdown => html! {
            <CategoryBreakdownList breakdown={layout.breakdown.clone()} />
        },
        Section::Education => html! {
            <CashbackEducation education={layout.education.clone()} />
        },
    }
}

/// The fetch state as it applies to `month`. Right after the month changes the
/// previous month's snapshot is still held, and counts as loading.
fn state_for_month(state: &FetchState<CashbackSnapshot>, month: YearMonth) -> FetchState<CashbackSnapshot> {
    match state {
        FetchState::Success(snapshot) if snapshot.summary.month != month => FetchState::Loading,
        other => other.clone(),
    }
}

#[function_component(CashbackView)]
pub fn cashback_view() -> Html {
    let screen = use_reducer(|| CashbackScreenState::new(YearMonth::current()));
    let month = screen.month();
    let (fetch_state, refetch) = use_fetch_with_deps(month, load_snapshot);
    let toast_ctx = use_context::<ToastContext>();

    {
        use_effect_with((), move |_| {
            if settings::get_settings().use_mock_data {
                if let Some(toast_ctx) = toast_ctx {
                    toast_ctx.show_info("Showing demo cashback data".to_string());
                }
            }
            || ()
        });
    }

    let dispatch = |action_for: fn() -> ScreenAction| {
        let dispatcher = screen.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(action_for()))
    };

    let on_open_picker = {
        let dispatcher = screen.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ScreenAction::OpenPicker(MonthBounds::current())))
    };
    let on_select_year = {
        let dispatcher = screen.dispatcher();
        Callback::from(move |year: i32| dispatcher.dispatch(ScreenAction::SelectYear(year)))
    };
    let on_select_month = {
        let dispatcher = screen.dispatcher();
        Callback::from(move |m: u32| dispatcher.dispatch(ScreenAction::SelectMonth(m)))
    };

    let render = {
        let currency_code = settings::get_settings().currency_code;
        let on_open_picker = on_open_picker.clone();

        Callback::from(move |snapshot: CashbackSnapshot| {
            let layout = CashbackLayout::build(month, &snapshot, &currency_code);
            html! {
                <div class="space-y-6">
                    { for layout.sections().into_iter().map(|section| render_section(section, &layout, &on_open_picker)) }
                </div>
            }
        })
    };

    let shown_state = state_for_month(&fetch_state, month);

    // Without data the sections are not rendered, but the month can still be changed
    let standalone_selector = match &shown_state {
        FetchState::Success(_) => html! {},
        _ => html! {
            <MonthSelectorButton selector={MonthSelector::new(month)} on_open={on_open_picker.clone()} />
        },
    };

    html! {
        <>
            {standalone_selector}
            <FetchRender<CashbackSnapshot>
                state={shown_state}
                {render}
                on_retry={Some(refetch)}
                error_title={Some("Couldn't load your cashback".to_string())}
                loading_text={Some(format!("Loading cashback for {}...", month.label()))}
            />
            <MonthPickerModal
                picker={screen.picker().cloned()}
                {on_select_year}
                {on_select_month}
                on_back={dispatch(|| ScreenAction::BackToYears)}
                on_confirm={dispatch(|| ScreenAction::Confirm)}
                on_cancel={dispatch(|| ScreenAction::Cancel)}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::cashback::{potential_endpoint, summary_endpoint};
    use crate::mock_data;
    use chrono::NaiveDate;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn confirm_month(start: YearMonth, year: i32, month: u32) -> CashbackScreenState {
        let bounds = MonthBounds::until(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        [
            ScreenAction::OpenPicker(bounds),
            ScreenAction::SelectYear(year),
            ScreenAction::SelectMonth(month),
            ScreenAction::Confirm,
        ]
        .into_iter()
        .fold(CashbackScreenState::new(start), CashbackScreenState::apply)
    }

    #[test]
    fn test_confirmed_month_drives_both_requests() {
        let state = confirm_month(ym(2024, 3), 2023, 8);
        let month = state.month();

        assert_eq!(month, ym(2023, 8));
        assert_eq!(summary_endpoint(month), "/cashback/summary?year=2023&month=8");
        assert_eq!(potential_endpoint(month), "/cashback/potential?year=2023&month=8");
        assert_eq!(mock_data::cashback_snapshot(month).summary.month, ym(2023, 8));
    }

    #[test]
    fn test_cancelled_picker_keeps_requested_month() {
        let state = CashbackScreenState::new(ym(2024, 3))
            .apply(ScreenAction::OpenPicker(MonthBounds::until(
                NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            )))
            .apply(ScreenAction::SelectYear(2021))
            .apply(ScreenAction::SelectMonth(2))
            .apply(ScreenAction::Cancel);

        assert_eq!(summary_endpoint(state.month()), "/cashback/summary?year=2024&month=3");
    }

    #[test]
    fn test_previous_month_snapshot_counts_as_loading() {
        let march = mock_data::cashback_snapshot(ym(2024, 3));
        let state = FetchState::Success(march.clone());

        let month = confirm_month(ym(2024, 3), 2023, 8).month();
        assert_eq!(state_for_month(&state, month), FetchState::Loading);
        assert_eq!(state_for_month(&state, ym(2024, 3)), FetchState::Success(march));

        let error = FetchState::Error("HTTP error: 502".to_string());
        assert_eq!(state_for_month(&error, month), error);
    }
}
