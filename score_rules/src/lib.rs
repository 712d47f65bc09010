//! # Score Rules
//!
//! The "Score Bible" crate - contains the trait enumeration, the trait vector,
//! the per-playthrough accumulator, and the choice log. This crate is the single
//! source of truth for scoring state and does not contain any classification logic.

pub mod choices;
pub mod score_state;
pub mod traits;

pub use choices::*;
pub use score_state::*;
pub use traits::*;
