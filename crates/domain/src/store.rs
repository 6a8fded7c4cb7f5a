use log::debug;

use crate::{Workout, WorkoutID, WorkoutInput, WorkoutRepository, WorkoutService, WorkoutUpdate};

/// Lifecycle of a store backed by persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    Uninitialized,
    Hydrating,
    Ready,
}

#[macro_export]
macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            log::error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

/// Authoritative in-memory collection of workouts, newest first.
///
/// Every mutation is handed to the repository before it returns. Persistence failures are
/// logged and the in-memory state stays authoritative for the running session.
pub struct WorkoutStore<R> {
    repository: R,
    workouts: Vec<Workout>,
    hydration: Hydration,
}

impl<R: WorkoutRepository> WorkoutStore<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            workouts: Vec::new(),
            hydration: Hydration::Uninitialized,
        }
    }

    /// Restore the persisted collection. Does nothing once the store is ready.
    pub fn hydrate(&mut self) {
        if self.hydration != Hydration::Uninitialized {
            return;
        }

        self.hydration = Hydration::Hydrating;
        debug!("hydrating workouts");

        self.workouts =
            log_on_error!(self.repository.load_workouts(), "load", "workouts").unwrap_or_default();

        self.hydration = Hydration::Ready;
        debug!("hydrated {} workouts", self.workouts.len());
    }

    #[must_use]
    pub fn hydration(&self) -> Hydration {
        self.hydration
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.hydration == Hydration::Ready
    }

    #[must_use]
    pub fn get(&self, id: &WorkoutID) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == *id)
    }

    fn generate_id(&self) -> WorkoutID {
        loop {
            let id = WorkoutID::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) {
        let _ = log_on_error!(
            self.repository.save_workouts(&self.workouts),
            "save",
            "workouts"
        );
    }
}

impl<R: WorkoutRepository> WorkoutService for WorkoutStore<R> {
    fn list(&self) -> &[Workout] {
        &self.workouts
    }

    fn add(&mut self, input: WorkoutInput) -> Workout {
        self.hydrate();
        let workout = Workout::new(self.generate_id(), input);
        self.workouts.insert(0, workout.clone());
        self.persist();
        workout
    }

    fn update(&mut self, id: &WorkoutID, update: WorkoutUpdate) {
        self.hydrate();
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id == *id) else {
            debug!("ignoring update of unknown workout {id}");
            return;
        };
        workout.apply(update);
        self.persist();
    }

    fn delete(&mut self, id: &WorkoutID) {
        self.hydrate();
        let len = self.workouts.len();
        self.workouts.retain(|w| w.id != *id);
        if self.workouts.len() == len {
            debug!("ignoring deletion of unknown workout {id}");
            return;
        }
        self.persist();
    }

    fn reset(&mut self) {
        self.hydrate();
        self.workouts.clear();
        self.persist();
    }
}
