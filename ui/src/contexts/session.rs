//! Who is signed in.
//!
//! Created once by [`SessionProvider`] in the app root and mirrored to
//! `sessionStorage`, so a reload within the same tab keeps the user signed
//! in.

use gloo::storage::{SessionStorage, Storage};
use std::rc::Rc;
use yew::prelude::*;

pub const STORAGE_KEY: &str = "loggedInUserEmail";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user_email: Option<String>,
}

pub enum SessionAction {
    SignIn(String),
    SignOut,
}

impl Session {
    /// The session left in storage by an earlier page load, if any.
    pub fn restore() -> Self {
        let stored = SessionStorage::raw().get_item(STORAGE_KEY).ok().flatten();
        Self::from_slot(stored.as_deref())
    }

    /// Read the storage slot, which holds the bare email.
    pub fn from_slot(stored: Option<&str>) -> Self {
        let user_email = stored
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);
        Self { user_email }
    }

    /// What belongs in the storage slot, `None` meaning the slot is removed.
    pub fn slot(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    fn persist(&self) {
        let storage = SessionStorage::raw();
        let written = match self.slot() {
            Some(email) => storage.set_item(STORAGE_KEY, email),
            None => storage.remove_item(STORAGE_KEY),
        };
        if let Err(e) = written {
            tracing::warn!("could not store session: {e:?}");
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let user_email = match action {
            SessionAction::SignIn(email) => {
                let email = email.trim().to_string();
                (!email.is_empty()).then_some(email)
            }
            SessionAction::SignOut => None,
        };
        Rc::new(Session { user_email })
    }
}

pub type SessionContext = UseReducerHandle<Session>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::restore);

    use_effect_with(session.clone(), |session| session.persist());

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    context: SessionContext,
}

impl SessionHandle {
    pub fn user_email(&self) -> Option<String> {
        self.context.user_email.clone()
    }

    pub fn sign_in(&self, email: impl Into<String>) {
        self.context.dispatch(SessionAction::SignIn(email.into()));
    }

    pub fn sign_out(&self) {
        self.context.dispatch(SessionAction::SignOut);
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let context = use_context::<SessionContext>()
        .expect("use_session must be used within a SessionProvider");
    SessionHandle { context }
}
