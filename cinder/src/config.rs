//! Server configuration, read from a JSON5 file.

use std::{fs, io, path::Path};

use cinder_core::config::PhysicsConfig;
use cinder_core::error::{ConfigError, WorldError};
use cinder_core::world::Dimensions;
use cinder_utils::BlockPos;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/cinder_config.json5");

/// Where the server looks for its config.
pub const CONFIG_PATH: &str = "config/cinder_config.json5";

/// Errors raised while loading or validating the server config.
#[derive(Debug, Error)]
pub enum ServerConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid JSON5 for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The tick interval was zero.
    #[error("tick_interval_ms must be positive")]
    TickInterval,
    /// No worlds were configured.
    #[error("at least one world must be configured")]
    NoWorlds,
    /// Two worlds share a name.
    #[error("world {0} is configured twice")]
    DuplicateWorld(String),
    /// A world has unusable dimensions.
    #[error("world {world}: {source}")]
    Dimensions {
        /// The world.
        world: String,
        /// What was wrong.
        source: WorldError,
    },
    /// A world's ground level is above its top.
    #[error("world {world}: ground level {ground_level} exceeds height {height}")]
    GroundLevel {
        /// The world.
        world: String,
        /// The configured ground level.
        ground_level: u16,
        /// The world height.
        height: u16,
    },
    /// A world's physics settings are invalid.
    #[error("world {world}: {source}")]
    Physics {
        /// The world.
        world: String,
        /// What was wrong.
        source: ConfigError,
    },
    /// A safe zone names a world that does not exist.
    #[error("safe zone refers to unknown world {0}")]
    UnknownWorld(String),
    /// A safe zone's corners are swapped.
    #[error("safe zone in {world} has min {min} above max {max}")]
    InvertedZone {
        /// The world.
        world: String,
        /// The lower corner.
        min: BlockPos,
        /// The upper corner.
        max: BlockPos,
    },
}

/// One simulated world.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldConfig {
    /// Unique name.
    pub name: String,
    /// Extent along x.
    pub width: u16,
    /// Extent along y.
    pub height: u16,
    /// Extent along z.
    pub length: u16,
    /// Height of the grass surface; half the height when absent.
    #[serde(default)]
    pub ground_level: Option<u16>,
    /// Plant a tree in the middle of the world.
    #[serde(default)]
    pub tree: bool,
    /// Physics settings.
    #[serde(default)]
    pub physics: PhysicsConfig,
}

impl WorldConfig {
    /// The world's dimensions.
    pub fn dimensions(&self) -> Result<Dimensions, WorldError> {
        Dimensions::new(self.width, self.height, self.length)
    }

    /// The surface height.
    #[must_use]
    pub fn ground_level(&self) -> u16 {
        self.ground_level.unwrap_or(self.height / 2)
    }
}

/// An inclusive box immune to explosions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SafeZone {
    /// The world the zone lies in.
    pub world: String,
    /// Lower corner.
    pub min: BlockPos,
    /// Upper corner.
    pub max: BlockPos,
}

impl SafeZone {
    /// Returns `true` if `pos` in `world` lies inside the zone.
    #[must_use]
    pub fn contains(&self, world: &str, pos: BlockPos) -> bool {
        self.world == world && pos.is_within(&self.min, &self.max)
    }
}

fn default_tick_interval() -> u64 {
    100
}

fn default_queue_warn_threshold() -> usize {
    100_000
}

/// The server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Milliseconds between ticks.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Seed for physics randomness; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Pending check count above which a world logs a warning.
    #[serde(default = "default_queue_warn_threshold")]
    pub queue_warn_threshold: usize,
    /// The worlds to simulate.
    pub worlds: Vec<WorldConfig>,
    /// Explosion-proof boxes.
    #[serde(default)]
    pub safe_zones: Vec<SafeZone>,
}

impl ServerConfig {
    /// Loads the config at `path`, writing the default config there first if
    /// the file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ServerConfigError> {
        let config_str = if path.exists() {
            fs::read_to_string(path)?
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Wrote default config to {}", path.display());
            DEFAULT_CONFIG.to_owned()
        };
        Self::parse(&config_str)
    }

    /// Parses and validates a config.
    pub fn parse(config_str: &str) -> Result<Self, ServerConfigError> {
        let config: ServerConfig = serde_json5::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config for values the server cannot run with.
    pub fn validate(&self) -> Result<(), ServerConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ServerConfigError::TickInterval);
        }
        if self.worlds.is_empty() {
            return Err(ServerConfigError::NoWorlds);
        }

        let mut names = FxHashSet::default();
        for world in &self.worlds {
            if !names.insert(world.name.as_str()) {
                return Err(ServerConfigError::DuplicateWorld(world.name.clone()));
            }
            world
                .dimensions()
                .map_err(|source| ServerConfigError::Dimensions {
                    world: world.name.clone(),
                    source,
                })?;
            if world.ground_level() > world.height {
                return Err(ServerConfigError::GroundLevel {
                    world: world.name.clone(),
                    ground_level: world.ground_level(),
                    height: world.height,
                });
            }
            world
                .physics
                .validate()
                .map_err(|source| ServerConfigError::Physics {
                    world: world.name.clone(),
                    source,
                })?;
        }

        for zone in &self.safe_zones {
            if !names.contains(zone.world.as_str()) {
                return Err(ServerConfigError::UnknownWorld(zone.world.clone()));
            }
            let (min, max) = (zone.min, zone.max);
            if min.x() > max.x() || min.y() > max.y() || min.z() > max.z() {
                return Err(ServerConfigError::InvertedZone {
                    world: zone.world.clone(),
                    min: zone.min,
                    max: zone.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cinder_core::config::PhysicsLevel;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::parse(DEFAULT_CONFIG).expect("default config should load");
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.worlds.len(), 2);
        assert_eq!(config.worlds[0].ground_level(), 32);
        assert_eq!(config.worlds[1].ground_level(), 16);
        assert_eq!(config.worlds[1].physics.level, PhysicsLevel::Hardcore);
        assert_eq!(config.safe_zones.len(), 1);
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let config = ServerConfig::parse("{ worlds: [{ name: 'a', width: 8, height: 8, length: 8 }] }")
            .expect("minimal config should load");
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.seed, None);
        assert_eq!(config.queue_warn_threshold, 100_000);
        assert_eq!(config.worlds[0].physics, PhysicsConfig::default());
        assert!(!config.worlds[0].tree);
    }

    #[test]
    fn test_rejects_bad_configs() {
        assert!(matches!(
            ServerConfig::parse("{ worlds: [] }"),
            Err(ServerConfigError::NoWorlds)
        ));
        assert!(matches!(
            ServerConfig::parse(
                "{ worlds: [{ name: 'a', width: 8, height: 8, length: 8 }, { name: 'a', width: 8, height: 8, length: 8 }] }"
            ),
            Err(ServerConfigError::DuplicateWorld(name)) if name == "a"
        ));
        assert!(matches!(
            ServerConfig::parse("{ worlds: [{ name: 'a', width: 0, height: 8, length: 8 }] }"),
            Err(ServerConfigError::Dimensions { .. })
        ));
        assert!(matches!(
            ServerConfig::parse(
                "{ worlds: [{ name: 'a', width: 8, height: 8, length: 8 }], safe_zones: [{ world: 'b', min: [0, 0, 0], max: [1, 1, 1] }] }"
            ),
            Err(ServerConfigError::UnknownWorld(_))
        ));
        assert!(matches!(
            ServerConfig::parse(
                "{ worlds: [{ name: 'a', width: 8, height: 8, length: 8 }], safe_zones: [{ world: 'a', min: [2, 0, 0], max: [1, 1, 1] }] }"
            ),
            Err(ServerConfigError::InvertedZone { .. })
        ));
        assert!(matches!(
            ServerConfig::parse(
                "{ worlds: [{ name: 'a', width: 8, height: 8, length: 8, physics: { leaf_decay_radius: 0 } }] }"
            ),
            Err(ServerConfigError::Physics { .. })
        ));
    }

    #[test]
    fn test_safe_zone_contains() {
        let zone = SafeZone {
            world: "arena".to_owned(),
            min: BlockPos::new(0, 0, 0),
            max: BlockPos::new(3, 3, 3),
        };
        assert!(zone.contains("arena", BlockPos::new(3, 0, 1)));
        assert!(!zone.contains("main", BlockPos::new(3, 0, 1)));
        assert!(!zone.contains("arena", BlockPos::new(4, 0, 1)));
    }
}
