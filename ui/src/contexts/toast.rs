use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Toasts disappear after this long unless configured otherwise.
pub const DEFAULT_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(DEFAULT_DURATION_MS),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastType::Info)
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                // at most one toast per message
                toasts.retain(|t| t.message != toast.message);
                toasts.push(toast);
            }
            ToastAction::Remove(id) => {
                toasts.retain(|t| t.id != id);
            }
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;

        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(Toast::info(message.into()));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: ToastState, action: ToastAction) -> ToastState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn messages(state: &ToastState) -> Vec<&str> {
        state.toasts.iter().map(|t| t.message.as_str()).collect()
    }

    #[test]
    fn toasts_keep_arrival_order() {
        let state = apply(
            ToastState::default(),
            ToastAction::Add(Toast::success("Booked".into())),
        );
        let state =
            apply(state, ToastAction::Add(Toast::error("Failed".into())));
        assert_eq!(messages(&state), vec!["Booked", "Failed"]);
    }

    #[test]
    fn repeated_message_moves_to_the_end() {
        let state = ToastState {
            toasts: vec![
                Toast::error("Network error".into()),
                Toast::info("Signed out".into()),
            ],
        };
        let state = apply(
            state,
            ToastAction::Add(Toast::error("Network error".into())),
        );
        assert_eq!(messages(&state), vec!["Signed out", "Network error"]);
    }

    #[test]
    fn remove_by_id() {
        let keep = Toast::info("keep".into());
        let gone = Toast::info("gone".into());
        let state = ToastState {
            toasts: vec![keep.clone(), gone.clone()],
        };
        let state = apply(state, ToastAction::Remove(gone.id));
        assert_eq!(state.toasts, vec![keep]);
    }
}
