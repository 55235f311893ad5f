use crate::EnvError;
use observation::Observation;
use reward::StepInfo;
use std::rc::Rc;

/// Most recent observations, oldest first, newest last; always exactly
/// `stack_frames` entries.
pub type StackedObservation = Vec<Rc<Observation>>;

pub struct StepOutcome {
    pub state: StackedObservation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

/// The contract a training loop drives. `done` is advisory: the caller
/// decides whether to follow it with `reset`.
pub trait Environment {
    fn reset(&mut self) -> Result<StackedObservation, EnvError>;
    fn step(&mut self, action: i32) -> Result<StepOutcome, EnvError>;
    fn n_actions(&self) -> i32;
}
