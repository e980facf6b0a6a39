use payloads::ClientError;
use payloads::requests::{
    self, validate_email, validate_name, validate_password,
};
use reqwest::StatusCode;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TextField;
use crate::contexts::use_toast;
use crate::hooks::use_title;
use crate::{Route, get_service_client};

pub const EMAIL_TAKEN: &str = "This email address is already registered.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must accept the terms to register";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

impl RegisterForm {
    pub fn to_request(&self) -> requests::Register {
        requests::Register {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegisterErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub terms: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_registration(form: &RegisterForm) -> RegisterErrors {
    RegisterErrors {
        first_name: validate_name(&form.first_name).error_message(),
        last_name: validate_name(&form.last_name).error_message(),
        email: validate_email(&form.email).error_message(),
        password: validate_password(&form.password).error_message(),
        confirm_password: (form.password != form.confirm_password)
            .then_some(PASSWORDS_DIFFER),
        terms: (!form.accepted_terms).then_some(TERMS_REQUIRED),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterFailure {
    EmailTaken,
    Other(String),
}

pub fn registration_failure(error: &ClientError) -> RegisterFailure {
    match error.status() {
        Some(StatusCode::CONFLICT) => RegisterFailure::EmailTaken,
        _ => RegisterFailure::Other(error.to_string()),
    }
}

#[function_component]
pub fn RegisterPage() -> Html {
    use_title("Register");
    let toasts = use_toast();
    let navigator = use_navigator();

    let form = use_state(RegisterForm::default);
    let errors = use_state(RegisterErrors::default);
    let loading = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = validate_registration(&form);
            let valid = validation.is_empty();
            errors.set(validation);
            if !valid {
                return;
            }

            let request = form.to_request();
            let errors = errors.clone();
            let loading = loading.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            loading.set(true);

            yew::platform::spawn_local(async move {
                match get_service_client().register(&request).await {
                    Ok(()) => {
                        toasts.success("Your account has been created. Please sign in.");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::SignIn);
                        }
                    }
                    Err(e) => match registration_failure(&e) {
                        RegisterFailure::EmailTaken => {
                            errors.set(RegisterErrors {
                                email: Some(EMAIL_TAKEN),
                                ..Default::default()
                            });
                            toasts.error(EMAIL_TAKEN);
                        }
                        RegisterFailure::Other(message) => {
                            tracing::warn!("registration failed: {message}");
                            toasts.error(message);
                        }
                    },
                }
                loading.set(false);
            });
        })
    };

    let edit = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_terms = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.accepted_terms = input.checked();
            form.set(next);
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {"Create an account"}
                    </h1>
                </div>

                <form
                    onsubmit={onsubmit}
                    novalidate={true}
                    class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 space-y-4"
                >
                    <div class="grid grid-cols-2 gap-4">
                        <TextField
                            id="first-name"
                            label="First name"
                            autocomplete="given-name"
                            value={form.first_name.clone()}
                            oninput={edit(|f, v| f.first_name = v)}
                            error={errors.first_name.map(AttrValue::from)}
                        />
                        <TextField
                            id="last-name"
                            label="Last name"
                            autocomplete="family-name"
                            value={form.last_name.clone()}
                            oninput={edit(|f, v| f.last_name = v)}
                            error={errors.last_name.map(AttrValue::from)}
                        />
                    </div>
                    <TextField
                        id="email"
                        label="Email address"
                        input_type="email"
                        autocomplete="email"
                        value={form.email.clone()}
                        oninput={edit(|f, v| f.email = v)}
                        error={errors.email.map(AttrValue::from)}
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        autocomplete="new-password"
                        value={form.password.clone()}
                        oninput={edit(|f, v| f.password = v)}
                        error={errors.password.map(AttrValue::from)}
                    />
                    <TextField
                        id="confirm-password"
                        label="Confirm password"
                        input_type="password"
                        autocomplete="new-password"
                        value={form.confirm_password.clone()}
                        oninput={edit(|f, v| f.confirm_password = v)}
                        error={errors.confirm_password.map(AttrValue::from)}
                    />

                    <div>
                        <label class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
                            <input
                                type="checkbox"
                                id="terms"
                                checked={form.accepted_terms}
                                onchange={on_terms}
                                aria-invalid={errors.terms.is_some().then_some("true")}
                            />
                            {"I accept the terms and conditions"}
                        </label>
                        if let Some(message) = errors.terms {
                            <p class="mt-1 text-sm text-red-600 dark:text-red-400">{message}</p>
                        }
                    </div>

                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                               px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                               disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        {if *loading { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {"Already have an account? "}
                    <Link<Route> to={Route::SignIn} classes="underline">{"Sign in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            first_name: "Alice".into(),
            last_name: "Andersson".into(),
            email: "alice@example.com".into(),
            password: "Supersecret1".into(),
            confirm_password: "Supersecret1".into(),
            accepted_terms: true,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(validate_registration(&filled()).is_empty());
    }

    #[test]
    fn each_field_is_checked() {
        let form = RegisterForm {
            first_name: "A".into(),
            last_name: " ".into(),
            email: "alice@".into(),
            password: "short".into(),
            confirm_password: "other".into(),
            accepted_terms: false,
        };
        let errors = validate_registration(&form);
        assert_eq!(errors.first_name, Some("Name must be at least 2 characters"));
        assert_eq!(errors.last_name, Some("Name is required"));
        assert_eq!(errors.email, Some("Invalid email format"));
        assert_eq!(errors.password, Some("Password must be at least 8 characters"));
        assert_eq!(errors.confirm_password, Some(PASSWORDS_DIFFER));
        assert_eq!(errors.terms, Some(TERMS_REQUIRED));
    }

    #[test]
    fn request_is_trimmed() {
        let form = RegisterForm {
            first_name: " Alice ".into(),
            email: " alice@example.com".into(),
            ..filled()
        };
        let request = form.to_request();
        assert_eq!(request.first_name, "Alice");
        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.password, "Supersecret1");
    }

    #[test]
    fn conflict_means_email_taken() {
        let conflict = ClientError::api(StatusCode::CONFLICT, "Email exists");
        assert_eq!(registration_failure(&conflict), RegisterFailure::EmailTaken);

        let broken = ClientError::api(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            registration_failure(&broken),
            RegisterFailure::Other("500 Internal Server Error".into())
        );
    }
}
