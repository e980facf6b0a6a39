use payloads::WorkoutId;
use payloads::responses::Workout;
use std::collections::HashMap;
use yewdux::prelude::*;

/// App-wide cache shared between pages.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Catalog entries seen so far, keyed by id. Filled by the workouts list
    /// and detail lookups, read by the bookings page.
    pub workouts: HashMap<WorkoutId, Workout>,
}

impl State {
    /// Merge workouts into the cache. A listing entry without a description
    /// doesn't erase one already fetched from the detail endpoint.
    pub fn cache_workouts(&mut self, workouts: impl IntoIterator<Item = Workout>) {
        for mut workout in workouts {
            if workout.description.is_none()
                && let Some(cached) = self.workouts.get(&workout.id)
            {
                workout.description = cached.description.clone();
            }
            self.workouts.insert(workout.id.clone(), workout);
        }
    }

    pub fn cached_workout(&self, workout_id: &WorkoutId) -> Option<&Workout> {
        self.workouts.get(workout_id)
    }

    pub fn clear_workouts(&mut self) {
        self.workouts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(id: &str, description: Option<&str>) -> Workout {
        Workout {
            id: WorkoutId::from(id),
            title: "Spinning".into(),
            location: "Studio 2".into(),
            start_time: "2025-10-20T16:00:00Z".parse().unwrap(),
            instructor: "Maja".into(),
            description: description.map(String::from),
        }
    }

    #[test]
    fn listing_keeps_known_description() {
        let mut state = State::default();
        state.cache_workouts([workout("w-1", Some("Intervals"))]);
        state.cache_workouts([workout("w-1", None), workout("w-2", None)]);

        let id = WorkoutId::from("w-1");
        assert_eq!(
            state.cached_workout(&id).and_then(|w| w.description.as_deref()),
            Some("Intervals")
        );
        assert_eq!(state.workouts.len(), 2);

        state.clear_workouts();
        assert!(state.cached_workout(&id).is_none());
    }
}
