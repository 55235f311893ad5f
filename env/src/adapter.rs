use crate::{
    EnvError, EnvSettings, Environment, FrameStack, NoTermination, StackedObservation,
    StepOutcome, Target, TerminationProbe,
};
use observation::Observation;
use reward::RewardPolicy;
use std::rc::Rc;

/// The reset/step state machine over a live target. Single logical
/// thread of control: the frame stack and step counter are owned here
/// and must not be driven from two places at once.
pub struct EmulatorEnv<T: Target> {
    target: T,
    policy: RewardPolicy,
    termination: Box<dyn TerminationProbe>,
    settings: EnvSettings,
    frames: Option<FrameStack>,
    prev_obs: Option<Rc<Observation>>,
    step_count: u64,
}

impl<T: Target> EmulatorEnv<T> {
    pub fn new(target: T, policy: RewardPolicy, settings: EnvSettings) -> EmulatorEnv<T> {
        EmulatorEnv::with_termination(target, policy, settings, Box::new(NoTermination))
    }
    pub fn with_termination(
        target: T,
        policy: RewardPolicy,
        settings: EnvSettings,
        termination: Box<dyn TerminationProbe>,
    ) -> EmulatorEnv<T> {
        EmulatorEnv {
            target,
            policy,
            termination,
            settings,
            frames: None,
            prev_obs: None,
            step_count: 0,
        }
    }
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
    pub fn policy(&self) -> &RewardPolicy {
        &self.policy
    }
    fn observe(&mut self) -> Result<Rc<Observation>, EnvError> {
        Ok(Rc::new(self.target.capture()?))
    }
}

impl<T: Target> Environment for EmulatorEnv<T> {
    fn reset(&mut self) -> Result<StackedObservation, EnvError> {
        self.target.ensure()?;
        self.target.focus();
        std::thread::sleep(self.settings.settle);
        let obs = self.observe()?;
        // no pre-roll: the stack starts as one frame replicated
        let stack = FrameStack::filled(obs.clone(), self.settings.stack_frames);
        let view = stack.view();
        self.frames = Some(stack);
        self.prev_obs = Some(obs);
        self.step_count = 0;
        Ok(view)
    }
    fn step(&mut self, action: i32) -> Result<StepOutcome, EnvError> {
        self.target.ensure()?;
        // one decision held across several rendered frames
        for _ in 0..self.settings.frame_skip {
            self.target.press_action(action);
            std::thread::sleep(self.settings.frame_wait);
        }
        let obs = self.observe()?;
        let prev = self.prev_obs.clone().unwrap_or_else(|| obs.clone());
        let depth = self.settings.stack_frames;
        let frames = self
            .frames
            .get_or_insert_with(|| FrameStack::filled(obs.clone(), depth));
        frames.push(obs.clone());
        let state = frames.view();
        let (reward, mut done, info) = self.policy.compute(&obs, &prev, self.step_count);
        done = done || self.termination.check(&obs);
        self.prev_obs = Some(obs);
        self.step_count += 1;
        Ok(StepOutcome {
            state,
            reward,
            done,
            info,
        })
    }
    fn n_actions(&self) -> i32 {
        input::N_ACTIONS
    }
}
