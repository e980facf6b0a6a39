//! Request lifecycle shared by [`use_fetch`](crate::hooks::use_fetch) and
//! [`use_request`](crate::hooks::use_request).
//!
//! Each hook instance owns one [`RequestTracker`]. Starting a request aborts
//! whatever the tracker had in flight, and a request that was aborted or
//! superseded never dispatches a state change, not even to clear `loading`.

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use payloads::ClientError;
use reqwest::{Method, StatusCode};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use yew::Reducible;

/// How a hook issues its request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub method: Method,
    pub headers: Vec<(String, String)>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
        }
    }
}

impl FetchConfig {
    /// A hook that stays idle until its requester's `post` is called.
    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Default::default()
        }
    }

    pub fn header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Reads are issued eagerly on mount; anything else waits to be
    /// triggered.
    pub fn is_read(&self) -> bool {
        matches!(self.method, Method::GET | Method::HEAD)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

#[derive(Debug)]
pub enum RequestAction<T> {
    Started,
    Succeeded(Option<T>),
    Failed(String),
    Idle,
}

impl<T: Clone> RequestState<T> {
    /// Initial state of a hook whose first request goes out on mount.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn next(&self, action: RequestAction<T>) -> Self {
        match action {
            RequestAction::Started => Self {
                data: self.data.clone(),
                loading: true,
                error: None,
            },
            RequestAction::Succeeded(data) => Self {
                data,
                loading: false,
                error: None,
            },
            RequestAction::Failed(error) => Self {
                data: None,
                loading: false,
                error: Some(error),
            },
            RequestAction::Idle => Self::default(),
        }
    }
}

impl<T: Clone> Reducible for RequestState<T> {
    type Action = RequestAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.next(action))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request was cancelled")]
    Cancelled,
    #[error("Nothing to request")]
    NoTarget,
    #[error(transparent)]
    Failed(#[from] ClientError),
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Failed(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Aborts one issued request.
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    /// A handle for a request that was never issued.
    pub fn inert() -> Self {
        Self(AbortHandle::new_pair().0)
    }

    pub fn cancel(&self) {
        self.0.abort();
    }
}

/// Proof that a request was started through a tracker. Consumed by
/// [`drive`].
pub struct Ticket {
    generation: u64,
    registration: AbortRegistration,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: u64,
    in_flight: Option<AbortHandle>,
}

impl RequestTracker {
    /// Start a new request, cancelling the one in flight.
    pub fn begin(&mut self) -> (Ticket, CancelHandle) {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle.clone());
        let ticket = Ticket {
            generation: self.generation,
            registration,
        };
        (ticket, CancelHandle(handle))
    }

    /// Cancel the request in flight, if any. Used on unmount and when the
    /// hook is reconfigured.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn finish(&mut self, generation: u64) {
        if self.is_current(generation) {
            self.in_flight = None;
        }
    }
}

/// Run `request` under `ticket`, reporting its progress through `dispatch`.
///
/// Dispatches `Started` once polled, then exactly one of `Succeeded` or
/// `Failed`. A request cancelled at any point, including before it was
/// first polled, dispatches nothing from then on.
pub async fn drive<T, Fut>(
    ticket: Ticket,
    tracker: Rc<RefCell<RequestTracker>>,
    dispatch: impl Fn(RequestAction<T>),
    request: Fut,
) -> Result<Option<T>, FetchError>
where
    T: Clone,
    Fut: Future<Output = Result<Option<T>, ClientError>>,
{
    let Ticket {
        generation,
        registration,
    } = ticket;
    let request = Abortable::new(request, registration);
    if request.is_aborted() || !tracker.borrow().is_current(generation) {
        tracing::debug!(generation, "request cancelled before it started");
        return Err(FetchError::Cancelled);
    }
    dispatch(RequestAction::Started);
    tracing::debug!(generation, "request started");

    let outcome = request.await;
    if !tracker.borrow().is_current(generation) {
        tracing::debug!(generation, "request superseded");
        return Err(FetchError::Cancelled);
    }
    let Ok(result) = outcome else {
        tracing::debug!(generation, "request cancelled");
        return Err(FetchError::Cancelled);
    };
    tracker.borrow_mut().finish(generation);

    match result {
        Ok(data) => {
            tracing::debug!(generation, has_data = data.is_some(), "request settled");
            dispatch(RequestAction::Succeeded(data.clone()));
            Ok(data)
        }
        Err(e) => {
            tracing::warn!(generation, "request failed: {e}");
            dispatch(RequestAction::Failed(e.to_string()));
            Err(FetchError::Failed(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    type Reply = Result<Option<u32>, ClientError>;
    type Outcome = Rc<RefCell<Option<Result<Option<u32>, FetchError>>>>;

    /// A hook instance stand-in: the tracker plus the state it drives.
    struct Harness {
        pool: LocalPool,
        tracker: Rc<RefCell<RequestTracker>>,
        state: Rc<RefCell<RequestState<u32>>>,
        dispatches: Rc<RefCell<usize>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                pool: LocalPool::new(),
                tracker: Rc::default(),
                state: Rc::default(),
                dispatches: Rc::default(),
            }
        }

        /// Issue a request that settles when the returned sender fires.
        fn issue(&mut self) -> (oneshot::Sender<Reply>, CancelHandle, Outcome) {
            let (tx, rx) = oneshot::channel::<Reply>();
            let (ticket, handle) = self.tracker.borrow_mut().begin();
            let outcome: Outcome = Rc::default();

            let state = self.state.clone();
            let dispatches = self.dispatches.clone();
            let dispatch = move |action: RequestAction<u32>| {
                let next = state.borrow().next(action);
                *state.borrow_mut() = next;
                *dispatches.borrow_mut() += 1;
            };
            let request = async move { rx.await.unwrap_or(Ok(None)) };
            let tracker = self.tracker.clone();
            let result = outcome.clone();
            self.pool
                .spawner()
                .spawn_local(async move {
                    let settled = drive(ticket, tracker, dispatch, request).await;
                    *result.borrow_mut() = Some(settled);
                })
                .unwrap();
            self.pool.run_until_stalled();
            (tx, handle, outcome)
        }

        fn settle(&mut self, tx: oneshot::Sender<Reply>, reply: Reply) {
            let _ = tx.send(reply);
            self.pool.run_until_stalled();
        }

        fn state(&self) -> RequestState<u32> {
            self.state.borrow().clone()
        }
    }

    fn server_error() -> ClientError {
        ClientError::api(StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }

    #[test]
    fn success_sets_data_and_clears_loading() {
        let mut harness = Harness::new();
        let (tx, _, outcome) = harness.issue();
        assert!(harness.state().loading);

        harness.settle(tx, Ok(Some(7)));
        assert_eq!(
            harness.state(),
            RequestState {
                data: Some(7),
                loading: false,
                error: None,
            }
        );
        assert!(matches!(*outcome.borrow(), Some(Ok(Some(7)))));
    }

    #[test]
    fn empty_success_has_no_data_and_no_error() {
        let mut harness = Harness::new();
        let (tx, _, _) = harness.issue();
        harness.settle(tx, Ok(None));

        assert_eq!(harness.state(), RequestState::default());
    }

    #[test]
    fn failure_clears_data() {
        let mut harness = Harness::new();
        let (tx, _, _) = harness.issue();
        harness.settle(tx, Ok(Some(1)));

        let (tx, _, outcome) = harness.issue();
        // data from the previous settle stays visible while refetching
        assert_eq!(harness.state().data, Some(1));
        harness.settle(tx, Err(server_error()));

        let state = harness.state();
        assert_eq!(state.data, None);
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("500 Internal Server Error – boom")
        );
        let status = outcome
            .borrow()
            .as_ref()
            .and_then(|r| r.as_ref().err())
            .and_then(FetchError::status);
        assert_eq!(status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn only_the_latest_request_is_reflected() {
        let mut harness = Harness::new();
        let (first, _, first_outcome) = harness.issue();
        let (second, _, _) = harness.issue();

        harness.settle(second, Ok(Some(2)));
        harness.settle(first, Ok(Some(1)));

        assert_eq!(harness.state().data, Some(2));
        assert!(matches!(
            *first_outcome.borrow(),
            Some(Err(FetchError::Cancelled))
        ));
    }

    #[test]
    fn cancelled_on_unmount_dispatches_nothing() {
        let mut harness = Harness::new();
        let (tx, _, outcome) = harness.issue();
        let before = *harness.dispatches.borrow();

        harness.tracker.borrow_mut().cancel();
        harness.settle(tx, Err(server_error()));

        assert_eq!(*harness.dispatches.borrow(), before);
        // loading is left as it was
        assert!(harness.state().loading);
        assert_eq!(harness.state().error, None);
        assert!(matches!(*outcome.borrow(), Some(Err(FetchError::Cancelled))));
    }

    #[test]
    fn cancel_handle_aborts_its_request() {
        let mut harness = Harness::new();
        let (tx, handle, outcome) = harness.issue();

        handle.cancel();
        harness.pool.run_until_stalled();
        assert!(matches!(*outcome.borrow(), Some(Err(FetchError::Cancelled))));

        harness.settle(tx, Ok(Some(3)));
        assert_eq!(harness.state().data, None);
    }

    #[test]
    fn cancelled_before_first_poll_dispatches_nothing() {
        let tracker: Rc<RefCell<RequestTracker>> = Rc::default();
        let dispatches = Rc::new(RefCell::new(0));
        let (ticket, handle) = tracker.borrow_mut().begin();
        handle.cancel();

        let counter = dispatches.clone();
        let outcome = futures::executor::block_on(drive(
            ticket,
            tracker,
            move |_: RequestAction<u32>| *counter.borrow_mut() += 1,
            async { Ok(Some(1)) },
        ));

        assert!(matches!(outcome, Err(FetchError::Cancelled)));
        assert_eq!(*dispatches.borrow(), 0);
    }

    #[test]
    fn superseded_before_first_poll_dispatches_nothing() {
        let mut harness = Harness::new();
        let (ticket, _) = harness.tracker.borrow_mut().begin();
        harness.tracker.borrow_mut().cancel();

        let dispatches = harness.dispatches.clone();
        let outcome = futures::executor::block_on(drive(
            ticket,
            harness.tracker.clone(),
            move |_: RequestAction<u32>| *dispatches.borrow_mut() += 1,
            async { Ok(Some(1)) },
        ));

        assert!(matches!(outcome, Err(FetchError::Cancelled)));
        assert_eq!(*harness.dispatches.borrow(), 0);
        assert_eq!(harness.state(), RequestState::default());
    }

    #[test]
    fn pending_state_is_loading_without_data() {
        let state = RequestState::<u32>::pending();
        assert!(state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn idle_resets_everything() {
        let state = RequestState {
            data: Some(1),
            loading: true,
            error: Some("old".to_string()),
        };
        assert_eq!(state.next(RequestAction::Idle), RequestState::default());
    }

    #[test]
    fn reads_are_eager() {
        assert!(FetchConfig::default().is_read());
        assert!(!FetchConfig::post().is_read());
        let config = FetchConfig::default().header("X-Trace", "1");
        assert_eq!(
            config.headers,
            vec![("X-Trace".to_string(), "1".to_string())]
        );
    }
}
