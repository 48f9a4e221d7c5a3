//! Physics configuration of a world.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes.

use serde::Deserialize;

use crate::error::ConfigError;

/// How much of the simulation runs in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicsLevel {
    /// No rules run. Blast markers still fade.
    Off = 0,
    /// Liquids spread and debris falls; TNT fizzles.
    #[default]
    Normal = 1,
    /// Adds leaf decay and allows explosions; TNT still fizzles.
    Advanced = 2,
    /// TNT burns a visible fuse before it detonates.
    Hardcore = 3,
    /// TNT detonates on its first check.
    Instant = 4,
    /// Only door mechanics. None of the rules here run.
    DoorsOnly = 5,
}

impl PhysicsLevel {
    /// Returns `true` if unforced explosions are resolved at this level.
    #[inline]
    #[must_use]
    pub const fn allows_explosions(self) -> bool {
        matches!(self, Self::Advanced | Self::Hardcore | Self::Instant)
    }

    /// Returns `true` if TNT detonates instead of fizzling at this level.
    #[inline]
    #[must_use]
    pub const fn detonates_tnt(self) -> bool {
        matches!(self, Self::Hardcore | Self::Instant)
    }

    /// Returns `true` if a rule requiring `required` runs at this level.
    #[inline]
    #[must_use]
    pub fn enables(self, required: Self) -> bool {
        self != Self::DoorsOnly && self >= required
    }
}

/// TNT fuse and power settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TntConfig {
    /// Checks a fuse burns for at [`PhysicsLevel::Hardcore`].
    pub fuse_ticks: u32,
    /// Blast power of small TNT.
    pub small_power: i32,
    /// Blast power of big TNT.
    pub large_power: i32,
    /// Blast power of nuke TNT.
    pub nuke_power: i32,
    /// Base power used for the kill radius of match detonations.
    pub match_kill_base_power: i32,
}

impl Default for TntConfig {
    fn default() -> Self {
        Self {
            fuse_ticks: 5,
            small_power: 0,
            large_power: 1,
            nuke_power: 4,
            match_kill_base_power: 2,
        }
    }
}

/// Fall/dissipate odds of explosion debris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct DebrisParams {
    /// Percent chance per check that debris drops one cell.
    pub drop_percent: u8,
    /// Percent chance per check that debris vanishes.
    pub dissipate_percent: u8,
}

impl Default for DebrisParams {
    fn default() -> Self {
        Self {
            drop_percent: 50,
            dissipate_percent: 8,
        }
    }
}

/// Explosion shell and outcome odds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    /// Destruction chance out of ten for the shells at radius
    /// `power + 1`, `power + 2` and `power + 3`.
    pub shell_chances: [u8; 3],
    /// Out of ten: a destroyed cell becomes a blast marker.
    pub hazard_in_ten: u8,
    /// Out of ten, rolled when no marker was placed: the cell becomes air.
    /// Otherwise it turns into debris.
    pub air_in_ten: u8,
    /// Out of ten: chance a blast marker fades to air per check.
    pub hazard_fade_in_ten: u8,
    /// Odds carried by debris checks.
    pub debris: DebrisParams,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            shell_chances: [10, 7, 3],
            hazard_in_ten: 4,
            air_in_ten: 8,
            hazard_fade_in_ten: 7,
            debris: DebrisParams::default(),
        }
    }
}

/// Liquid spread delays, counted in checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LiquidConfig {
    /// Checks active water waits before spreading.
    pub water_delay: u32,
    /// Checks active lava waits before spreading.
    pub lava_delay: u32,
}

impl Default for LiquidConfig {
    fn default() -> Self {
        Self {
            water_delay: 1,
            lava_delay: 4,
        }
    }
}

/// Per-world physics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Simulation strength.
    pub level: PhysicsLevel,
    /// Whether leaves decay when cut off from trunks.
    pub leaf_decay: bool,
    /// How far a leaf may be from a trunk and survive.
    pub leaf_decay_radius: u8,
    /// TNT settings.
    pub tnt: TntConfig,
    /// Explosion settings.
    pub explosion: ExplosionConfig,
    /// Liquid settings.
    pub liquid: LiquidConfig,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            level: PhysicsLevel::default(),
            leaf_decay: true,
            leaf_decay_radius: 4,
            tnt: TntConfig::default(),
            explosion: ExplosionConfig::default(),
            liquid: LiquidConfig::default(),
        }
    }
}

impl PhysicsConfig {
    /// Returns the default config at the given level.
    #[must_use]
    pub fn with_level(level: PhysicsLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=8).contains(&self.leaf_decay_radius) {
            return Err(ConfigError::LeafRadius(self.leaf_decay_radius));
        }

        let explosion = &self.explosion;
        let [inner, middle, outer] = explosion.shell_chances;
        for (name, value) in [
            ("shell_chances", inner.max(middle).max(outer)),
            ("hazard_in_ten", explosion.hazard_in_ten),
            ("air_in_ten", explosion.air_in_ten),
            ("hazard_fade_in_ten", explosion.hazard_fade_in_ten),
        ] {
            if value > 10 {
                return Err(ConfigError::ChanceOutOfRange { name, value });
            }
        }
        if inner < middle || middle < outer {
            return Err(ConfigError::ShellsNotMonotonic(explosion.shell_chances));
        }

        for (name, value) in [
            ("drop_percent", explosion.debris.drop_percent),
            ("dissipate_percent", explosion.debris.dissipate_percent),
        ] {
            if value > 100 {
                return Err(ConfigError::PercentOutOfRange { name, value });
            }
        }

        let tnt = &self.tnt;
        for (name, value) in [
            ("small_power", tnt.small_power),
            ("large_power", tnt.large_power),
            ("nuke_power", tnt.nuke_power),
            ("match_kill_base_power", tnt.match_kill_base_power),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativePower { name, value });
            }
        }
        Ok(())
    }
}
