use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use serde::Deserialize;

const CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Deserialize)]
pub struct SceneConfig {
    pub frame_interval_ms: u64,
    pub greeting: String,
    pub farewell: String,
}

impl SceneConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// How many lights hang on the tree and how they twinkle.
#[derive(Clone, Debug, Deserialize)]
pub struct LightConfig {
    pub min_lights: usize,
    pub max_lights: usize,
    /// Chance a light jumps to a new cell on each frame.
    pub move_chance: f64,
    pub off_chance: f64,
    /// Chance a lit light changes color and glyph.
    pub recolor_chance: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub scene: SceneConfig,
    pub lights: LightConfig,
}

impl Config {
    pub fn new() -> Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Yaml))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        let lights = &self.lights;
        if lights.min_lights == 0 || lights.min_lights > lights.max_lights {
            return Err(eyre!("invalid light count range {}..={}", lights.min_lights, lights.max_lights));
        }
        for (name, chance) in
            [("move_chance", lights.move_chance), ("off_chance", lights.off_chance), ("recolor_chance", lights.recolor_chance)]
        {
            if !(0.0..=1.0).contains(&chance) {
                return Err(eyre!("{name} must be within [0, 1], got {chance}"));
            }
        }
        if self.scene.frame_interval_ms == 0 {
            return Err(eyre!("frame_interval_ms must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_config() -> Result<()> {
        let c = Config::new()?;
        assert_eq!(c.scene.frame_interval(), Duration::from_millis(400));
        assert_eq!(c.scene.greeting, "Merry Christmas!");
        assert_eq!(c.lights.min_lights, 8);
        assert_eq!(c.lights.max_lights, 10);
        assert_eq!(c.lights.move_chance, 0.7);
        assert_eq!(c.lights.off_chance, 0.15);
        assert_eq!(c.lights.recolor_chance, 0.2);
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_range() {
        let mut c = Config::new().unwrap();
        c.lights.min_lights = 11;
        assert!(c.validate().is_err());
        c.lights.min_lights = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_chance() {
        let mut c = Config::new().unwrap();
        c.lights.off_chance = 1.5;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut c = Config::new().unwrap();
        c.scene.frame_interval_ms = 0;
        assert!(c.validate().is_err());
    }
}
