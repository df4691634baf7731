//! Lambdas: deferred actions with a fixed parameter list.
//!
//! A lambda is passed and called exactly like a proc. The difference shows
//! only at the call boundary: the argument count must match the declared
//! arity, otherwise the call fails with
//! [`CallableError::ArityMismatch`](crate::error::CallableError::ArityMismatch)
//! and the body never runs.

use std::io::Write;

use crate::deferred::Deferred;
use crate::error::Result;

/// Writes the two trace lines around one zero-argument call to
/// `lambda_object`.
///
/// # Examples
///
/// ```
/// use callable_demo::{CallableError, Deferred};
/// use callable_demo::lambda::lambda_greet;
///
/// let unary = Deferred::lambda(1, |out, args| writeln!(out, "{}", args[0]));
/// let mut out = Vec::new();
/// let err = lambda_greet(&mut out, &unary).unwrap_err();
/// assert!(matches!(err, CallableError::ArityMismatch { expected: 1, given: 0 }));
/// assert_eq!(out, b"Inside greet: 1\n");
/// ```
pub fn lambda_greet(out: &mut dyn Write, lambda_object: &Deferred<'_>) -> Result<()> {
    writeln!(out, "Inside greet: 1")?;
    lambda_object.call(out, &[])?;
    writeln!(out, "Inside greet: 2")?;
    Ok(())
}

pub fn demonstrate_lambda(out: &mut dyn Write) -> Result<()> {
    log::debug!("lambda demonstration: start");
    let my_lambda = Deferred::lambda(0, |out, _| writeln!(out, "Lambda called!"));
    lambda_greet(out, &my_lambda)?;
    log::debug!("lambda demonstration: done");
    Ok(())
}
