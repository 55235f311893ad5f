use serde::{Deserialize, Serialize};

/// Template-matching sub-config, reserved for state-aware shaping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub enable: bool,
    pub threshold: f64,
}

impl Default for TemplateConfig {
    fn default() -> TemplateConfig {
        TemplateConfig {
            enable: false,
            threshold: 0.85,
        }
    }
}

/// One immutable snapshot of the shaping parameters. Unspecified fields
/// of a source document take these defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub step_penalty: f64,
    pub move_reward_scale: f64,
    pub battle_event_reward: f64,
    pub money_delta_scale: f64,
    pub faint_penalty: f64,
    pub done_on_blackout: bool,
    pub clip_reward: bool,
    pub clip_min: f64,
    pub clip_max: f64,
    pub top_screen_roi: (u32, u32, u32, u32),
    pub templates: TemplateConfig,
    pub hot_reload: bool,
    pub reload_interval_steps: u64,
}

impl Default for RewardConfig {
    fn default() -> RewardConfig {
        RewardConfig {
            step_penalty: -0.01,
            move_reward_scale: 0.05,
            battle_event_reward: 0.5,
            money_delta_scale: 0.001,
            faint_penalty: -1.0,
            done_on_blackout: false,
            clip_reward: true,
            clip_min: -1.0,
            clip_max: 1.0,
            top_screen_roi: (0, 0, 256, 192),
            templates: TemplateConfig::default(),
            hot_reload: true,
            reload_interval_steps: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: RewardConfig = serde_json::from_str(r#"{"step_penalty": -0.5}"#).unwrap();
        assert_eq!(config.step_penalty, -0.5);
        assert_eq!(config.move_reward_scale, 0.05);
        assert_eq!(config.reload_interval_steps, 300);
        assert!(config.templates == TemplateConfig::default());
    }

    #[test]
    fn nested_templates_deserialize() {
        let config: RewardConfig =
            serde_json::from_str(r#"{"templates": {"enable": true, "threshold": 0.9}}"#).unwrap();
        assert!(config.templates.enable);
        assert_eq!(config.templates.threshold, 0.9);
    }

    #[test]
    fn empty_document_equals_the_defaults() {
        let config: RewardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RewardConfig::default());
    }
}
