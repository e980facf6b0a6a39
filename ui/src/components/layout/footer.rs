use crate::Route;
use crate::contexts::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    let signed_in = use_session().user_email().is_some();

    html! {
        <footer class="bg-white dark:bg-neutral-900 border-t border-neutral-200 dark:border-neutral-700 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex justify-center">
                if !signed_in {
                    <Link<Route> to={Route::ForgotPassword} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                        {"Trouble signing in?"}
                    </Link<Route>>
                }
            </div>
        </footer>
    }
}
