//! Errors raised while assembling [`crate::Rules`].

use primer_config::ConfigError;
use primer_validate::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    /// The configuration breaks a table invariant (duplicate code, bad age).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An entry could not be turned into a runtime rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
