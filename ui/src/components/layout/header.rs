use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::contexts::{use_session, use_toast};
use crate::{Route, State};

const LINK: &str = "text-sm font-medium text-neutral-600 hover:text-neutral-900 \
                    dark:text-neutral-300 dark:hover:text-white";

#[function_component]
pub fn Header() -> Html {
    let session = use_session();
    let toasts = use_toast();
    let navigator = use_navigator();
    let dispatch = use_dispatch::<State>();

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.sign_out();
            dispatch.reduce_mut(|state| state.clear_workouts());
            toasts.info("You have been signed out.");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::SignIn);
            }
        })
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <nav
                aria-label="Main"
                class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center h-16"
            >
                <div class="flex items-center gap-6">
                    <Link<Route> to={Route::Workouts} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Gym Booking"}
                    </Link<Route>>
                    <Link<Route> to={Route::Workouts} classes={LINK}>{"Workouts"}</Link<Route>>
                    if session.user_email().is_some() {
                        <Link<Route> to={Route::MyBookings} classes={LINK}>{"My bookings"}</Link<Route>>
                    }
                </div>
                <div class="flex items-center gap-4">
                    if let Some(email) = session.user_email() {
                        <span class="text-sm text-neutral-500 dark:text-neutral-400">{email}</span>
                        <button type="button" onclick={on_sign_out} class={LINK}>
                            {"Sign out"}
                        </button>
                    } else {
                        <Link<Route> to={Route::SignIn} classes={LINK}>{"Sign in"}</Link<Route>>
                        <Link<Route> to={Route::Register} classes={LINK}>{"Register"}</Link<Route>>
                    }
                </div>
            </nav>
        </header>
    }
}
