//! # Persona Core (Vignette)
//!
//! The engine half of the Vignette visual-novel scorer. This crate interfaces
//! with `score_rules`, owns the static archetype catalog, and turns a finished
//! playthrough into a classified result.
//!
//! ## Core Components
//!
//! - **catalog**: The fixed, ordered archetype list with prototype vectors and
//!   ending-screen content, validated fail-fast at load
//! - **classifier**: L1 nearest-neighbor matching with first-declared tie-break
//! - **session**: The per-run orchestrator the presentation driver talks to
//! - **telemetry**: The fire-and-forget analytics event stream
//!
//! ## Design Philosophy
//!
//! - **Content-Driven**: The script decides which traits a choice awards; the
//!   core only counts and classifies
//! - **One Run, One Instance**: Every playthrough owns fresh state; restart
//!   constructs anew instead of resetting shared state
//! - **Never Halt the Story**: Content defects (unknown trait keys) degrade to
//!   diagnostics, never to panics

pub mod catalog;
pub mod classifier;
pub mod session;
pub mod telemetry;

pub use catalog::*;
pub use classifier::*;
pub use session::*;
pub use telemetry::*;
