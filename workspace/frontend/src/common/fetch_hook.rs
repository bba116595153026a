use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use crate::hooks::FetchState;
use crate::common::toast::ToastContext;

/// Fetch data for `deps` on mount and again whenever `deps` change.
///
/// Returns the fetch state and a callback that repeats the fetch for the
/// current `deps`. Responses for superseded `deps` are dropped, so a slow
/// request can never overwrite a newer one.
#[hook]
pub fn use_fetch_with_deps<D, T, F, Fut>(deps: D, fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    D: Clone + PartialEq + 'static,
    T: 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));
    let generation = use_mut_ref(|| 0u64);

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();
        let generation = generation.clone();

        use_callback(deps.clone(), move |_, deps: &D| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let generation = generation.clone();

            let ticket = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };

            fetch_state.set(FetchState::Loading);
            let fut = (*fetch_fn)(deps.clone());

            wasm_bindgen_futures::spawn_local(async move {
                let result = fut.await;
                if *generation.borrow() != ticket {
                    log::debug!("Discarding stale response (request {})", ticket);
                    return;
                }
                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        fetch_state.set(FetchState::Error(err.clone()));
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(err);
                        }
                    }
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
