use payloads::WorkoutId;
use payloads::responses::Workout;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{ErrorAlert, Modal};
use crate::endpoints;
use crate::fetch::FetchConfig;
use crate::hooks::use_fetch;
use crate::state::State;
use crate::utils::time::display_date_time;

pub const NO_DESCRIPTION: &str = "No description added yet.";

#[derive(Properties, PartialEq)]
pub struct WorkoutDetailsModalProps {
    /// The workout to show. `None` keeps the dialog closed.
    pub workout_id: Option<WorkoutId>,
    pub on_close: Callback<()>,
}

/// Details of one workout, fetched from the catalog each time the dialog
/// opens. A cached listing entry fills in while the request is out.
#[function_component]
pub fn WorkoutDetailsModal(props: &WorkoutDetailsModalProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let url = props
        .workout_id
        .as_ref()
        .map(|id| endpoints().workout(id));
    let details = use_fetch::<Workout>(url, FetchConfig::default());

    {
        let fetched = details.data.clone();
        use_effect_with(fetched, move |fetched| {
            if let Some(workout) = fetched.clone() {
                dispatch.reduce_mut(|state| state.cache_workouts([workout]));
            }
        });
    }

    let workout: Option<Workout> = details
        .data
        .clone()
        .filter(|w| Some(&w.id) == props.workout_id.as_ref())
        .or_else(|| {
            props
                .workout_id
                .as_ref()
                .and_then(|id| state.cached_workout(id).cloned())
        });

    let heading = workout
        .as_ref()
        .map(|w| AttrValue::from(w.title.clone()))
        .unwrap_or_else(|| AttrValue::from("Details"));

    let on_retry = {
        let requester = details.requester();
        Callback::from(move |_: ()| {
            requester.refetch();
        })
    };

    let body = if let Some(error) = &details.error {
        html! { <ErrorAlert message={error.clone()} {on_retry} /> }
    } else if let Some(workout) = &workout {
        let when = display_date_time(workout.start_time);
        let description = workout
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        html! {
            <dl class="space-y-3 text-sm">
                <div>
                    <dt class="font-medium text-neutral-500 dark:text-neutral-400">{"When"}</dt>
                    <dd aria-label={when.aria_label.clone()}>
                        {format!("{}, {}", when.date, when.time)}
                    </dd>
                </div>
                <div>
                    <dt class="font-medium text-neutral-500 dark:text-neutral-400">{"Where"}</dt>
                    <dd>{&workout.location}</dd>
                </div>
                <div>
                    <dt class="font-medium text-neutral-500 dark:text-neutral-400">{"Instructor"}</dt>
                    <dd>{&workout.instructor}</dd>
                </div>
                <div>
                    <dt class="font-medium text-neutral-500 dark:text-neutral-400">{"Description"}</dt>
                    <dd id="workout-description">{description}</dd>
                </div>
            </dl>
        }
    } else {
        html! {
            <p class="text-sm text-neutral-500" aria-busy="true">{"Loading..."}</p>
        }
    };

    html! {
        <Modal
            is_open={props.workout_id.is_some()}
            on_close={props.on_close.clone()}
            {heading}
            aria_describedby={workout.is_some().then_some(AttrValue::from("workout-description"))}
        >
            {body}
            if details.loading && workout.is_some() {
                <p class="mt-4 text-xs text-neutral-400" aria-live="polite">{"Refreshing..."}</p>
            }
        </Modal>
    }
}
