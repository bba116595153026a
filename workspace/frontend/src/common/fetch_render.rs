use yew::prelude::*;
use crate::hooks::FetchState;
use super::loading::Loading;
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub error_title: Option<String>,
    #[prop_or_default]
    pub loading_text: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        // `render` is rebuilt on every parent render; comparing it would
        // make the props never equal
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.error_title == other.error_title
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows loading spinner
/// - Error: shows error display with optional retry
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! {
            <Loading text={props.loading_text.clone()} />
        },
        FetchState::Error(err) => match &props.error_title {
            Some(title) => html! {
                <ErrorDisplay message={err.clone()} title={title.clone()} on_retry={props.on_retry.clone()} />
            },
            None => html! {
                <ErrorDisplay message={err.clone()} on_retry={props.on_retry.clone()} />
            },
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
