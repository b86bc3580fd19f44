//! Levenshtein distance with character-class weighted edits.
//!
//! An edit between two units costs 1, unless the config marks one of the units as
//! penalized, in which case it costs the configured penalty. Matches are free.
//! Whether a unit is penalized depends on a blacklist (members are penalized), a
//! whitelist (non-members are penalized), or both.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │  config.rs   │────▶│ distance/engine.rs│◀────│  units.rs    │
//! │ (ClassMode,  │     │ (trim, overflow,  │     │ (CodeUnit:   │
//! │ CharClass-   │     │  two-row DP)      │     │ u8/u16/u32/  │
//! │ Config)      │     └───────────────────┘     │ char)        │
//! └──────────────┘        │            │          └──────────────┘
//!                         ▼            ▼
//!              ┌───────────────┐  ┌──────────────┐
//!              │ distance/     │  │ contracts.rs │
//!              │ trim.rs,      │  │ (debug-only  │
//!              │ table.rs      │  │  assertions) │
//!              └───────────────┘  └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use weighted_leven::{CharClassConfig, ClassMode, WeightedLevenshtein};
//!
//! let config = CharClassConfig::new()
//!     .with_mode(ClassMode::Whitelist)
//!     .with_whitelist(('a'..='z').chain('0'..='9'));
//! let engine = WeightedLevenshtein::new(config);
//!
//! assert_eq!(engine.distance_str("ab", "ac"), Ok(1));
//! assert_eq!(engine.distance_str("a;", "a:"), Ok(2));
//! ```

pub mod config;
pub mod contracts;
pub mod distance;
mod error;
mod units;

pub use config::{CharClassConfig, ClassMode, DEFAULT_BLACKLIST, DEFAULT_PENALTY, DEFAULT_WHITELIST};
pub use distance::{
    common_prefix_len, common_suffix_len, distance, distance_str, trim_common_affixes, TableCell,
    WeightedLevenshtein, MAX_OPERAND_LEN,
};
pub use error::{ConfigError, DistanceError};
pub use units::CodeUnit;
