use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::use_session;

/// Returns the signed-in user's email. Without a session the user is sent
/// to the sign-in page and `None` is returned until the redirect lands.
#[hook]
pub fn use_require_session() -> Option<String> {
    let session = use_session();
    let navigator = use_navigator();
    let user_email = session.user_email();

    use_effect_with(user_email.clone(), move |user_email| {
        if user_email.is_none() {
            tracing::debug!("no session, redirecting to sign in");
            if let Some(navigator) = navigator {
                navigator.replace(&Route::SignIn);
            }
        }
    });

    user_email
}
