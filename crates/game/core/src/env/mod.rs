//! Traits describing read-only host data.
//!
//! Oracles expose map visibility, ability definitions, and configuration. The
//! [`Env`] aggregate bundles them so the actions can access everything they
//! need without hard coupling to concrete host implementations.
mod abilities;
mod config;
mod error;
mod map;

pub use abilities::{AbilityDefinition, AbilityOracle};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use map::MapOracle;

use crate::config::SummonConfig;

/// Aggregates read-only oracles required by the summoning actions.
#[derive(Debug)]
pub struct Env<'a, M, A, C>
where
    M: MapOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    map: Option<&'a M>,
    abilities: Option<&'a A>,
    config: Option<&'a C>,
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn AbilityOracle + 'a, dyn ConfigOracle + 'a>;

impl<'a, M, A, C> Clone for Env<'a, M, A, C>
where
    M: MapOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M, A, C> Copy for Env<'a, M, A, C>
where
    M: MapOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
}

impl<'a, M, A, C> Env<'a, M, A, C>
where
    M: MapOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, abilities: Option<&'a A>, config: Option<&'a C>) -> Self {
        Self {
            map,
            abilities,
            config,
        }
    }

    pub fn with_all(map: &'a M, abilities: &'a A, config: &'a C) -> Self {
        Self::new(Some(map), Some(abilities), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            abilities: None,
            config: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the AbilityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AbilitiesNotAvailable` if no ability oracle was provided.
    pub fn abilities(&self) -> Result<&'a A, OracleError> {
        self.abilities.ok_or(OracleError::AbilitiesNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the summoning settings from the config oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn summon_config(&self) -> Result<SummonConfig, OracleError> {
        Ok(self.config()?.summon_config())
    }
}

impl<'a, M, A, C> Env<'a, M, A, C>
where
    M: MapOracle + 'a,
    A: AbilityOracle + 'a,
    C: ConfigOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let abilities: Option<&'a dyn AbilityOracle> =
            self.abilities.map(|abilities| abilities as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        Env::new(map, abilities, config)
    }
}
