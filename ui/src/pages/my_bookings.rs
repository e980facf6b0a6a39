use payloads::WorkoutId;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::booking::load_booked_workouts;
use crate::components::{
    ErrorAlert, WorkoutDetailsModal, WorkoutRow, WorkoutTable,
};
use crate::contexts::use_toast;
use crate::hooks::{use_request, use_require_session, use_title};
use crate::state::State;
use crate::{Route, get_service_client};

#[function_component]
pub fn MyBookingsPage() -> Html {
    use_title("My bookings");
    let user_email = use_require_session();
    let toasts = use_toast();
    let dispatch = use_dispatch::<State>();

    let bookings = use_request(user_email.clone(), move |user_email| {
        let dispatch = dispatch.clone();
        async move {
            match user_email {
                Some(email) => load_booked_workouts(email, dispatch).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let cancelling = use_state(|| None::<WorkoutId>);
    let details_for = use_state(|| None::<WorkoutId>);

    let on_cancel = {
        let cancelling = cancelling.clone();
        let refetch = bookings.refetch.clone();
        let user_email = user_email.clone();

        Callback::from(move |workout_id: WorkoutId| {
            let Some(email) = user_email.clone() else {
                return;
            };
            let cancelling = cancelling.clone();
            let refetch = refetch.clone();
            let toasts = toasts.clone();
            cancelling.set(Some(workout_id.clone()));

            yew::platform::spawn_local(async move {
                let client = get_service_client();
                match client.delete_booking(&email, &workout_id).await {
                    Ok(()) => {
                        toasts.success("Booking cancelled.");
                        refetch.emit(());
                    }
                    Err(e) => {
                        tracing::warn!(workout = %workout_id, "cancel failed: {e}");
                        toasts.error(e.to_string());
                    }
                }
                cancelling.set(None);
            });
        })
    };

    let on_details = {
        let details_for = details_for.clone();
        Callback::from(move |workout_id: WorkoutId| {
            details_for.set(Some(workout_id))
        })
    };
    let on_close_details = {
        let details_for = details_for.clone();
        Callback::from(move |_: ()| details_for.set(None))
    };

    if user_email.is_none() {
        return html! {};
    }

    let listing = if let Some(error) = &bookings.error {
        html! {
            <ErrorAlert message={error.clone()} on_retry={bookings.refetch.clone()} />
        }
    } else if bookings.is_initial_loading() {
        html! {
            <p class="text-neutral-500" aria-busy="true">{"Loading your bookings..."}</p>
        }
    } else {
        match &bookings.data {
            Some(booked) if !booked.is_empty() => html! {
                <WorkoutTable>
                    {for booked.iter().map(|b| html! {
                        <WorkoutRow
                            key={b.booking_id.to_string()}
                            workout={b.workout.clone()}
                            action_label="Cancel"
                            on_action={on_cancel.clone()}
                            on_details={on_details.clone()}
                            busy={cancelling.as_ref() == Some(&b.workout.id)}
                        />
                    })}
                </WorkoutTable>
            },
            _ => html! {
                <div class="text-neutral-500 space-y-2">
                    <p>{"You have no bookings yet."}</p>
                    <Link<Route> to={Route::Workouts} classes="underline">
                        {"Browse workouts"}
                    </Link<Route>>
                </div>
            },
        }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">
                {"My bookings"}
            </h1>
            {listing}
            <WorkoutDetailsModal
                workout_id={(*details_for).clone()}
                on_close={on_close_details}
            />
        </div>
    }
}
