//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Seed catalog → Bind listener
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → server stops accepting → catalog dropped with the process
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bad PORT or a failed bind ends the process
//! - The catalog lives exactly as long as the server that owns it

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
