//! Error types for the progression engine.
//!
//! Storage failures are deliberately *not* represented here: load/save
//! problems are logged and degraded to defaults at each manager's
//! persistence boundary, so only caller misuse surfaces as an error.

use thiserror::Error;

/// Errors raised for invalid caller requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// The region id does not exist in the static region table.
    #[error("unknown region `{0}`")]
    UnknownRegion(String),

    /// The region's unlock requirements are not currently satisfied.
    #[error("region `{0}` does not meet its unlock requirements")]
    RequirementsNotMet(String),

    /// The region exists but has not been unlocked yet.
    #[error("region `{0}` is not unlocked")]
    RegionLocked(String),
}
