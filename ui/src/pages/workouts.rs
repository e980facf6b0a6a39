use payloads::WorkoutId;
use payloads::responses::{RawBooking, Workout};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::booking::{booking_failure_message, booking_request};
use crate::components::{
    ErrorAlert, WorkoutDetailsModal, WorkoutRow, WorkoutTable,
};
use crate::contexts::{use_session, use_toast};
use crate::endpoints;
use crate::fetch::FetchConfig;
use crate::hooks::{use_fetch, use_title};
use crate::state::State;

#[function_component]
pub fn WorkoutsPage() -> Html {
    use_title("Workouts");
    let session = use_session();
    let toasts = use_toast();
    let dispatch = use_dispatch::<State>();

    let workouts = use_fetch::<Vec<Workout>>(
        Some(endpoints().workouts()),
        FetchConfig::default(),
    );
    let booking = use_fetch::<RawBooking>(
        Some(endpoints().bookings()),
        FetchConfig::post(),
    );

    let booking_for = use_state(|| None::<WorkoutId>);
    let gate_message = use_state(|| None::<&'static str>);
    let details_for = use_state(|| None::<WorkoutId>);

    {
        let listed = workouts.data.clone();
        use_effect_with(listed, move |listed| {
            if let Some(listed) = listed.clone() {
                dispatch.reduce_mut(|state| state.cache_workouts(listed));
            }
        });
    }

    let on_book = {
        let requester = booking.requester();
        let booking_for = booking_for.clone();
        let gate_message = gate_message.clone();

        Callback::from(move |workout_id: WorkoutId| {
            let request = match booking_request(
                session.user_email().as_deref(),
                &workout_id,
            ) {
                Ok(request) => request,
                Err(message) => {
                    gate_message.set(Some(message));
                    return;
                }
            };
            gate_message.set(None);
            booking_for.set(Some(workout_id));

            let requester = requester.clone();
            let booking_for = booking_for.clone();
            let toasts = toasts.clone();
            yew::platform::spawn_local(async move {
                match requester.post(&request).await {
                    Ok(_) => toasts.success("Workout booked."),
                    // superseded by a newer booking, which owns the spinner
                    Err(e) if e.is_cancelled() => return,
                    Err(e) => {
                        if let Some(message) = booking_failure_message(&e) {
                            toasts.error(message);
                        }
                    }
                }
                booking_for.set(None);
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
    let on_retry = {
        let requester = workouts.requester();
        Callback::from(move |_: ()| {
            requester.refetch();
        })
    };

    let listing = match (&workouts.data, &workouts.error) {
        (_, Some(error)) => html! {
            <ErrorAlert message={error.clone()} {on_retry} />
        },
        (None, None) if workouts.loading => html! {
            <p class="text-neutral-500" aria-busy="true">{"Loading workouts..."}</p>
        },
        (Some(list), None) if !list.is_empty() => html! {
            <WorkoutTable>
                {for list.iter().map(|workout| html! {
                    <WorkoutRow
                        key={workout.id.to_string()}
                        workout={workout.clone()}
                        action_label="Book"
                        on_action={on_book.clone()}
                        on_details={on_details.clone()}
                        busy={booking_for.as_ref() == Some(&workout.id)}
                    />
                })}
            </WorkoutTable>
        },
        _ => html! {
            <p class="text-neutral-500">{"No workouts found."}</p>
        },
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">
                {"Upcoming workouts"}
            </h1>
            if let Some(message) = *gate_message {
                <div
                    role="alert"
                    class="bg-amber-50 dark:bg-amber-900/20 border border-amber-200
                           dark:border-amber-800 rounded-md p-3 text-sm text-amber-800 dark:text-amber-200"
                >
                    {message}
                </div>
            }
            {listing}
            <WorkoutDetailsModal
                workout_id={(*details_for).clone()}
                on_close={on_close_details}
            />
        </div>
    }
}
