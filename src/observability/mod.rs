//! Observability infrastructure: tracing setup and resolution phases.
//!
//! The orchestrator records each state transition of a resolution
//! (`Searching -> Extracting -> Parsing -> Classifying`) as a tracing event
//! on the `resolve` span, and failures carry the phase they occurred in so
//! that a diagnostic can say *where* an API page stopped making sense.
//!
//! ## Usage
//!
//! Install the subscriber once at application startup:
//!
//! ```ignore
//! use protomap::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(false);
//!     // ... rest of application
//! }
//! ```

pub mod phase;
pub mod subscriber;

pub use phase::ResolutionPhase;
pub use subscriber::{init_tracing, LOG_ENV_VAR};
