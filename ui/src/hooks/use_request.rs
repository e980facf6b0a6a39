use payloads::ClientError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::fetch::{RequestState, RequestTracker, drive};

pub struct RequestHandle<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T> RequestHandle<T> {
    /// True while nothing has been loaded yet.
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.data.is_none()
    }
}

/// Request lifecycle for fetches that aren't a single url, such as a list
/// joined with per-item lookups.
///
/// `fetch_fn` runs on mount and whenever `deps` change, receiving the
/// current deps. It follows the same rules as
/// [`use_fetch`](super::use_fetch): a newer run or unmounting cancels the
/// one in flight and its result is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let bookings = use_request(user_email, |email| async move {
///     get_service_client().raw_bookings(&email).await
/// });
/// ```
#[hook]
pub fn use_request<T, D, F, Fut>(deps: D, fetch_fn: F) -> RequestHandle<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let state = use_reducer(RequestState::<T>::pending);
    let tracker = use_mut_ref(RequestTracker::default);

    let refetch = {
        let dispatcher = state.dispatcher();
        let tracker = tracker.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_: (), deps| {
            let (ticket, _) = tracker.borrow_mut().begin();
            let request = fetch_fn(deps.clone());
            let tracker = tracker.clone();
            let dispatcher = dispatcher.clone();

            yew::platform::spawn_local(async move {
                let request = async move { request.await.map(Some) };
                let _ = drive(
                    ticket,
                    tracker,
                    move |action| dispatcher.dispatch(action),
                    request,
                )
                .await;
            });
        })
    };

    // Fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            move || tracker.borrow_mut().cancel()
        });
    }

    RequestHandle {
        data: state.data.clone(),
        loading: state.loading,
        error: state.error.clone(),
        refetch,
    }
}
