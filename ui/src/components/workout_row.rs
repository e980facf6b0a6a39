use payloads::WorkoutId;
use payloads::responses::Workout;
use yew::prelude::*;

use crate::utils::time::format_start_time;

#[derive(Properties, PartialEq)]
pub struct WorkoutRowProps {
    pub workout: Workout,
    /// Label of the row's main action, "Book" or "Cancel"
    pub action_label: AttrValue,
    pub on_action: Callback<WorkoutId>,
    pub on_details: Callback<WorkoutId>,
    /// Disables the main action while its request is in flight
    #[prop_or_default]
    pub busy: bool,
}

#[function_component]
pub fn WorkoutRow(props: &WorkoutRowProps) -> Html {
    let workout = &props.workout;

    let on_action = {
        let id = workout.id.clone();
        props.on_action.reform(move |_: MouseEvent| id.clone())
    };
    let on_details = {
        let id = workout.id.clone();
        props.on_details.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <tr class="border-b border-neutral-200 dark:border-neutral-700">
            <td class="py-3 pr-4 whitespace-nowrap">
                <time datetime={workout.start_time.to_string()}>
                    {format_start_time(workout.start_time)}
                </time>
            </td>
            <td class="py-3 pr-4 font-medium">{&workout.title}</td>
            <td class="py-3 pr-4">{&workout.location}</td>
            <td class="py-3 pr-4">{&workout.instructor}</td>
            <td class="py-3 text-right whitespace-nowrap space-x-2">
                <button
                    type="button"
                    onclick={on_details}
                    aria-label={format!("Details for {}", workout.title)}
                    class="px-3 py-1 text-sm rounded-md border border-neutral-300
                           dark:border-neutral-600 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {"Details"}
                </button>
                <button
                    type="button"
                    onclick={on_action}
                    disabled={props.busy}
                    class="px-3 py-1 text-sm rounded-md bg-neutral-900 dark:bg-white
                           text-white dark:text-neutral-900 hover:bg-neutral-800
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {&props.action_label}
                </button>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkoutTableProps {
    pub children: Children,
}

#[function_component]
pub fn WorkoutTable(props: &WorkoutTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full text-left text-sm">
                <thead class="text-neutral-500 dark:text-neutral-400 border-b border-neutral-300 dark:border-neutral-600">
                    <tr>
                        <th scope="col" class="py-2 pr-4 font-medium">{"Time"}</th>
                        <th scope="col" class="py-2 pr-4 font-medium">{"Workout"}</th>
                        <th scope="col" class="py-2 pr-4 font-medium">{"Location"}</th>
                        <th scope="col" class="py-2 pr-4 font-medium">{"Instructor"}</th>
                        <th scope="col" class="py-2"><span class="sr-only">{"Actions"}</span></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.children.iter()}
                </tbody>
            </table>
        </div>
    }
}
