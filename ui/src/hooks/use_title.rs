use yew::prelude::*;

const APP_NAME: &str = "Gym Booking";

/// Sets the document title to "{title} · Gym Booking". No cleanup on unmount
/// since each page sets its own title, and unmount/mount ordering isn't
/// guaranteed during route transitions.
#[hook]
pub fn use_title(title: &str) {
    let title = format!("{title} · {APP_NAME}");
    use_effect_with(title, |title| {
        gloo::utils::document().set_title(title);
    });
}
