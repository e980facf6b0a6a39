use payloads::{Endpoints, ServiceClient};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod booking;
pub mod components;
pub mod contexts;
pub mod fetch;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;
pub mod utils;

pub use state::State;

use components::ToastContainer;
use components::layout::MainLayout;
use contexts::{SessionProvider, ToastProvider};

/// Where the three services live. Each can be set at build time, otherwise
/// the page's own origin is used.
pub fn endpoints() -> Endpoints {
    let origin = || {
        gloo::utils::window()
            .location()
            .origin()
            .unwrap_or_default()
    };
    let base = |configured: Option<&str>| {
        configured
            .map(str::to_string)
            .unwrap_or_else(origin)
            .trim_end_matches('/')
            .to_string()
    };

    Endpoints {
        auth: base(option_env!("AUTH_SERVICE_URL")),
        workouts: base(option_env!("WORKOUT_SERVICE_URL")),
        bookings: base(option_env!("BOOKING_SERVICE_URL")),
    }
}

pub fn get_service_client() -> ServiceClient {
    ServiceClient {
        endpoints: endpoints(),
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Workouts,
    #[at("/sign-in")]
    SignIn,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/my-bookings")]
    MyBookings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <MainLayout>
                        <Switch<Route> render={switch} />
                    </MainLayout>
                    <ToastContainer />
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

fn switch(route: Route) -> Html {
    use pages::*;

    match route {
        Route::Workouts => html! { <WorkoutsPage /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        Route::MyBookings => html! { <MyBookingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
