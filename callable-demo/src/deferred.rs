//! Deferred actions as first-class values.
//!
//! A deferred action is code captured now and run later. There are two
//! kinds, and they differ only in what happens at the call boundary:
//!
//! | Kind | Constructor | Argument count |
//! |------|-------------|----------------|
//! | proc | [`Deferred::proc`] | anything goes, never checked |
//! | lambda | [`Deferred::lambda`] | must equal the declared arity |
//!
//! Both are boxed `Fn` closures, so a value can be invoked any number of
//! times. The body receives the output sink and the arguments it was called
//! with.

use std::fmt;
use std::io::{self, Write};

use crate::error::{CallableError, Result};

/// Body of a deferred action.
pub type Action<'a> = Box<dyn Fn(&mut dyn Write, &[&str]) -> io::Result<()> + 'a>;

/// A callable value: either lenient (`Proc`) or strict (`Lambda`).
pub enum Deferred<'a> {
    Proc(Action<'a>),
    Lambda { arity: usize, body: Action<'a> },
}

impl<'a> Deferred<'a> {
    /// Wraps `body` as a lenient callable.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable_demo::Deferred;
    ///
    /// let greet = Deferred::proc(|out, _args| writeln!(out, "Proc called!"));
    /// let mut out = Vec::new();
    /// greet.call(&mut out, &[]).unwrap();
    /// greet.call(&mut out, &["ignored", "too"]).unwrap();
    /// assert_eq!(out, b"Proc called!\nProc called!\n");
    /// ```
    pub fn proc<F>(body: F) -> Self
    where
        F: Fn(&mut dyn Write, &[&str]) -> io::Result<()> + 'a,
    {
        Deferred::Proc(Box::new(body))
    }

    /// Wraps `body` as a strict callable taking exactly `arity` arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable_demo::{CallableError, Deferred};
    ///
    /// let greet = Deferred::lambda(0, |out, _args| writeln!(out, "Lambda called!"));
    /// let mut out = Vec::new();
    /// assert!(matches!(
    ///     greet.call(&mut out, &["extra"]),
    ///     Err(CallableError::ArityMismatch { expected: 0, given: 1 })
    /// ));
    /// assert!(out.is_empty());
    /// ```
    pub fn lambda<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&mut dyn Write, &[&str]) -> io::Result<()> + 'a,
    {
        Deferred::Lambda {
            arity,
            body: Box::new(body),
        }
    }

    /// Invokes the action with `args`.
    ///
    /// A lambda rejects a mismatched argument count before its body runs.
    pub fn call(&self, out: &mut dyn Write, args: &[&str]) -> Result<()> {
        log::trace!("calling {} with {} argument(s)", self.kind(), args.len());
        match self {
            Deferred::Proc(body) => body(out, args)?,
            Deferred::Lambda { arity, body } => {
                if args.len() != *arity {
                    return Err(CallableError::ArityMismatch {
                        expected: *arity,
                        given: args.len(),
                    });
                }
                body(out, args)?
            }
        }
        Ok(())
    }

    /// Declared parameter count. A proc declares nothing it would enforce.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self {
            Deferred::Proc(_) => None,
            Deferred::Lambda { arity, .. } => Some(*arity),
        }
    }

    #[must_use]
    pub fn is_lambda(&self) -> bool {
        matches!(self, Deferred::Lambda { .. })
    }

    fn kind(&self) -> &'static str {
        if self.is_lambda() { "lambda" } else { "proc" }
    }
}

impl fmt::Debug for Deferred<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deferred::Proc(_) => f.write_str("Proc(..)"),
            Deferred::Lambda { arity, .. } => {
                f.debug_struct("Lambda").field("arity", arity).finish()
            }
        }
    }
}
