mod args;

use anyhow::Context;
use args::Args;
use clap::Parser;
use env::{EmulatorEnv, EnvSettings, Environment, MelonTarget};
use input::{Keymap, N_ACTIONS};
use rand::Rng;
use reward::RewardPolicy;
use std::rc::Rc;
use tracing::info;
use x11_utils::XSession;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let session = Rc::new(XSession::open()?);
    let keymap = Keymap::load(&args.keymap).context("loading keymap")?;
    let policy =
        RewardPolicy::from_path(args.rewards_config.clone()).context("loading reward config")?;
    let settings = EnvSettings {
        frame_skip: args.frame_skip,
        stack_frames: args.stack_frames,
        ..EnvSettings::default()
    };
    let target = MelonTarget::new(
        session,
        args.melonds_exe.clone(),
        args.rom.clone(),
        keymap,
        settings.clone(),
    );
    let mut environment = EmulatorEnv::new(target, policy, settings);
    let mut rng = rand::thread_rng();
    for episode in 0..args.episodes {
        environment.reset()?;
        let mut episode_return = 0.0;
        let mut steps = 0;
        for _ in 0..args.max_steps {
            let action = rng.gen_range(0..N_ACTIONS);
            let outcome = environment.step(action)?;
            episode_return += outcome.reward;
            steps += 1;
            if outcome.done {
                break;
            }
        }
        info!(episode, steps, episode_return, "episode finished");
    }
    Ok(())
}
