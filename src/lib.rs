//! Lift and thrust analysis for Space Engineers grids.
//!
//! The member crates hold the performance model, advisory scoring, LLM commentary, presets,
//! and exports. This crate re-exports them and adds [`session::Session`], the per-user state
//! that front-ends drive.

pub mod session;

pub use lift_advisor as advisor;
pub use lift_assistant as assistant;
pub use lift_blocks as blocks;
pub use lift_config as config;
pub use lift_core::{SizeClass, constants, format};
pub use lift_export as export;
pub use lift_presets as presets;
pub use lift_propulsion as propulsion;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
