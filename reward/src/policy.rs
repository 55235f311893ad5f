use crate::RewardConfig;
use observation::Observation;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

pub type StepInfo = HashMap<String, f64>;

#[derive(Debug)]
pub enum ConfigLoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(err) => write!(f, "can't read reward config: {err}"),
            ConfigLoadError::Parse(err) => write!(f, "malformed reward config: {err}"),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

impl From<std::io::Error> for ConfigLoadError {
    fn from(err: std::io::Error) -> ConfigLoadError {
        ConfigLoadError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigLoadError {
    fn from(err: serde_json::Error) -> ConfigLoadError {
        ConfigLoadError::Parse(err)
    }
}

fn load_config(path: &Path) -> Result<RewardConfig, ConfigLoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Shaping parameters plus the hot-reload schedule. The initial load
/// fails loudly; reloads mid-episode are contained so that an edit to the
/// source file can never take down a running episode.
pub struct RewardPolicy {
    path: Option<PathBuf>,
    config: RewardConfig,
}

impl RewardPolicy {
    pub fn from_path(path: Option<PathBuf>) -> Result<RewardPolicy, ConfigLoadError> {
        let config = match &path {
            Some(path) => load_config(path)?,
            None => RewardConfig::default(),
        };
        Ok(RewardPolicy { path, config })
    }
    pub fn config(&self) -> &RewardConfig {
        &self.config
    }
    pub fn maybe_reload(&mut self, step_count: u64) {
        if !self.config.hot_reload {
            return;
        }
        let Some(path) = &self.path else {
            return;
        };
        if step_count % self.config.reload_interval_steps.max(1) != 0 {
            return;
        }
        match load_config(path) {
            Ok(config) => self.config = config,
            // previous snapshot stays active on any reload failure
            Err(err) => warn!("reward config reload failed, keeping previous: {err}"),
        }
    }
    /// Step penalty plus the motion proxy: mean absolute pixel delta
    /// between consecutive observations, scaled. `done` is always false
    /// here; episode termination belongs to the environment's probe.
    pub fn compute(
        &mut self,
        obs: &Observation,
        prev: &Observation,
        step_count: u64,
    ) -> (f64, bool, StepInfo) {
        self.maybe_reload(step_count);
        let movement = obs.mean_abs_diff(prev);
        let mut reward = self.config.step_penalty + movement * self.config.move_reward_scale;
        if self.config.clip_reward {
            reward = reward.clamp(self.config.clip_min, self.config.clip_max);
        }
        let mut info = StepInfo::new();
        info.insert("movement".to_string(), movement);
        (reward, false, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("reward_{}_{name}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn obs(value: f32) -> Observation {
        Observation::new(2, 2, vec![value; 4])
    }

    #[test]
    fn missing_source_yields_defaults() {
        let policy = RewardPolicy::from_path(None).unwrap();
        assert_eq!(policy.config(), &RewardConfig::default());
    }

    #[test]
    fn malformed_source_fails_the_initial_load() {
        let path = temp_config("malformed_initial", "not json {");
        let result = RewardPolicy::from_path(Some(path));
        assert!(matches!(result, Err(ConfigLoadError::Parse(_))));
    }

    #[test]
    fn reload_swaps_in_the_new_snapshot() {
        let path = temp_config(
            "reload_swap",
            r#"{"move_reward_scale": 0.05, "reload_interval_steps": 1}"#,
        );
        let mut policy = RewardPolicy::from_path(Some(path.clone())).unwrap();
        std::fs::write(
            &path,
            r#"{"move_reward_scale": 0.07, "reload_interval_steps": 1}"#,
        )
        .unwrap();
        policy.maybe_reload(3);
        assert_eq!(policy.config().move_reward_scale, 0.07);
    }

    #[test]
    fn failed_reload_keeps_the_previous_snapshot() {
        let path = temp_config("reload_contained", r#"{"move_reward_scale": 0.06}"#);
        let mut policy = RewardPolicy::from_path(Some(path.clone())).unwrap();
        let before = policy.config().clone();
        std::fs::write(&path, "{ half-edited").unwrap();
        policy.maybe_reload(300);
        assert_eq!(policy.config(), &before);
    }

    #[test]
    fn reload_only_fires_on_the_interval_boundary() {
        let path = temp_config(
            "reload_boundary",
            r#"{"move_reward_scale": 0.05, "reload_interval_steps": 300}"#,
        );
        let mut policy = RewardPolicy::from_path(Some(path.clone())).unwrap();
        std::fs::write(
            &path,
            r#"{"move_reward_scale": 0.09, "reload_interval_steps": 300}"#,
        )
        .unwrap();
        policy.maybe_reload(5);
        assert_eq!(policy.config().move_reward_scale, 0.05);
        policy.maybe_reload(600);
        assert_eq!(policy.config().move_reward_scale, 0.09);
    }

    #[test]
    fn zero_interval_is_floored_to_every_step() {
        let path = temp_config(
            "reload_floor",
            r#"{"move_reward_scale": 0.05, "reload_interval_steps": 0}"#,
        );
        let mut policy = RewardPolicy::from_path(Some(path.clone())).unwrap();
        std::fs::write(
            &path,
            r#"{"move_reward_scale": 0.08, "reload_interval_steps": 0}"#,
        )
        .unwrap();
        policy.maybe_reload(7);
        assert_eq!(policy.config().move_reward_scale, 0.08);
    }

    #[test]
    fn still_frame_costs_exactly_the_step_penalty() {
        let mut policy = RewardPolicy::from_path(None).unwrap();
        let (reward, done, info) = policy.compute(&obs(0.0), &obs(0.0), 1);
        assert_eq!(reward, -0.01);
        assert!(!done);
        assert_eq!(info["movement"], 0.0);
    }

    #[test]
    fn maximal_delta_earns_the_full_movement_term() {
        let mut policy = RewardPolicy::from_path(None).unwrap();
        let (reward, _done, info) = policy.compute(&obs(1.0), &obs(0.0), 1);
        assert_eq!(info["movement"], 1.0);
        assert!((reward - 0.04).abs() < 1e-12);
    }

    #[test]
    fn movement_term_is_monotone_in_the_delta() {
        let mut policy = RewardPolicy::from_path(None).unwrap();
        let (small, _, _) = policy.compute(&obs(0.2), &obs(0.0), 1);
        let (large, _, _) = policy.compute(&obs(0.8), &obs(0.0), 2);
        assert!(small < large);
    }

    #[test]
    fn rewards_clip_to_the_configured_bounds() {
        let path = temp_config(
            "clip_bounds",
            r#"{"step_penalty": -5.0, "clip_reward": true, "hot_reload": false}"#,
        );
        let mut policy = RewardPolicy::from_path(Some(path)).unwrap();
        let (reward, _, _) = policy.compute(&obs(0.0), &obs(0.0), 1);
        assert_eq!(reward, -1.0);
    }

    #[test]
    fn clipping_can_be_disabled() {
        let path = temp_config(
            "clip_off",
            r#"{"step_penalty": -5.0, "clip_reward": false, "hot_reload": false}"#,
        );
        let mut policy = RewardPolicy::from_path(Some(path)).unwrap();
        let (reward, _, _) = policy.compute(&obs(0.0), &obs(0.0), 1);
        assert_eq!(reward, -5.0);
    }
}
