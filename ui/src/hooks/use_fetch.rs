use futures::FutureExt;
use futures::future::LocalBoxFuture;
use payloads::ClientError;
use payloads::http::send_json;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::fetch::{
    CancelHandle, FetchConfig, FetchError, RequestAction, RequestState,
    RequestTracker, Ticket, drive,
};

/// State of a [`use_fetch`] hook plus the means to trigger more requests.
pub struct FetchHandle<T: Clone + 'static> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    requester: Requester<T>,
}

impl<T> FetchHandle<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    /// Re-issue the configured request, superseding any in flight.
    pub fn refetch(&self) -> CancelHandle {
        self.requester.refetch()
    }

    /// A cloneable handle for issuing requests from callbacks.
    pub fn requester(&self) -> Requester<T> {
        self.requester.clone()
    }
}

/// Issues requests on behalf of one [`use_fetch`] instance. Every request
/// it starts supersedes the previous one and is cancelled when the
/// component unmounts or the hook's url/config change.
pub struct Requester<T: Clone + 'static> {
    url: Option<String>,
    config: FetchConfig,
    tracker: Rc<RefCell<RequestTracker>>,
    dispatcher: UseReducerDispatcher<RequestState<T>>,
}

impl<T: Clone + 'static> Clone for Requester<T> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            config: self.config.clone(),
            tracker: self.tracker.clone(),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<T> Requester<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    pub fn refetch(&self) -> CancelHandle {
        let Some(url) = self.url.clone() else {
            tracing::debug!("refetch without a url, nothing to do");
            return CancelHandle::inert();
        };
        let (ticket, handle) = self.tracker.borrow_mut().begin();
        let request = self.issue(ticket, url, self.config.method.clone(), None);
        yew::platform::spawn_local(async move {
            // the outcome already went through the reducer
            let _ = request.await;
        });
        handle
    }

    /// Send `body` as a POST and wait for the parsed response.
    ///
    /// The hook's state follows the request like any other, but the result
    /// is also handed back so the caller can branch on specific statuses.
    /// `Err(FetchError::Cancelled)` means the component moved on and the
    /// result should be ignored.
    pub async fn post<B: Serialize>(
        &self,
        body: &B,
    ) -> Result<Option<T>, FetchError> {
        let url = self.url.clone().ok_or(FetchError::NoTarget)?;
        let body = serde_json::to_value(body).map_err(ClientError::from)?;
        let (ticket, _) = self.tracker.borrow_mut().begin();
        self.issue(ticket, url, Method::POST, Some(body)).await
    }

    fn issue(
        &self,
        ticket: Ticket,
        url: String,
        method: Method,
        body: Option<serde_json::Value>,
    ) -> LocalBoxFuture<'static, Result<Option<T>, FetchError>> {
        let headers = self.config.headers.clone();
        let tracker = self.tracker.clone();
        let dispatcher = self.dispatcher.clone();
        let request = async move {
            let client = reqwest::Client::new();
            send_json(&client, method, &url, &headers, body.as_ref()).await
        };
        drive(
            ticket,
            tracker,
            move |action| dispatcher.dispatch(action),
            request,
        )
        .boxed_local()
    }
}

/// Fetch JSON from `url`.
///
/// With a read config (the default) the request is issued on mount and
/// whenever `url` or `config` change. Any other method leaves the hook idle
/// until [`Requester::post`] is called. A `None` url never fetches.
///
/// # Example
///
/// ```rust,ignore
/// let workouts = use_fetch::<Vec<Workout>>(
///     Some(endpoints().workouts()),
///     FetchConfig::default(),
/// );
/// ```
#[hook]
pub fn use_fetch<T>(url: Option<String>, config: FetchConfig) -> FetchHandle<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let eager = url.is_some() && config.is_read();
    let state = use_reducer(move || {
        if eager {
            RequestState::<T>::pending()
        } else {
            RequestState::default()
        }
    });
    let tracker = use_mut_ref(RequestTracker::default);

    let requester = Requester {
        url: url.clone(),
        config: config.clone(),
        tracker,
        dispatcher: state.dispatcher(),
    };

    {
        let requester = requester.clone();
        use_effect_with((url, config), move |(url, config)| {
            if url.is_some() && config.is_read() {
                requester.refetch();
            } else {
                requester.dispatcher.dispatch(RequestAction::Idle);
            }
            move || requester.tracker.borrow_mut().cancel()
        });
    }

    FetchHandle {
        data: state.data.clone(),
        loading: state.loading,
        error: state.error.clone(),
        requester,
    }
}
