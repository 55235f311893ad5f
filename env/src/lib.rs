mod adapter;
mod contract;
mod error;
mod frame_stack;
mod settings;
mod target;
mod termination;

pub use adapter::EmulatorEnv;
pub use contract::{Environment, StackedObservation, StepOutcome};
pub use error::EnvError;
pub use frame_stack::FrameStack;
pub use reward::StepInfo;
pub use settings::EnvSettings;
pub use target::{MelonTarget, Target};
pub use termination::{NoTermination, TerminationProbe};
