//! # Deferred Callables: Blocks, Procs and Lambdas
//!
//! Three ways to hand a piece of code to a procedure and have it run later:
//!
//! - [`block`]: an implicit continuation, modelled as an optional
//!   higher-order parameter
//! - [`proc_object`]: a first-class callable with no arity checking
//! - [`lambda`]: a first-class callable that validates its argument count
//!
//! Every demonstration writes a "before" line, runs the deferred action and
//! writes an "after" line. [`runner::run_all`] runs the three in order.
//!
//! Output goes to a caller-supplied [`std::io::Write`] so the transcript can
//! be captured in tests and printed to stdout by the binary.

pub mod block;
pub mod deferred;
pub mod error;
pub mod lambda;
pub mod proc_object;
pub mod runner;

// Re-export main types for convenience
pub use deferred::Deferred;
pub use error::{CallableError, Result};
pub use runner::run_all;
