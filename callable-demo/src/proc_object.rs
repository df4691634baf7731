//! Procs: deferred actions stored in a variable and passed explicitly.
//!
//! Unlike a block, a proc is an ordinary value. It can be handed to any
//! number of procedures and called any number of times, and it never checks
//! how many arguments it was given.

use std::io::Write;

use crate::deferred::Deferred;
use crate::error::Result;

/// Writes the two trace lines around one call to `proc_object`.
///
/// # Examples
///
/// ```
/// use callable_demo::Deferred;
/// use callable_demo::proc_object::proc_greet;
///
/// let shout = Deferred::proc(|out, _| writeln!(out, "hey"));
/// let mut out = Vec::new();
/// proc_greet(&mut out, &shout).unwrap();
/// assert_eq!(out, b"Inside proc greet: 1\nhey\nInside proc greet: 2\n");
/// ```
pub fn proc_greet(out: &mut dyn Write, proc_object: &Deferred<'_>) -> Result<()> {
    writeln!(out, "Inside proc greet: 1")?;
    proc_object.call(out, &[])?;
    writeln!(out, "Inside proc greet: 2")?;
    Ok(())
}

pub fn demonstrate_proc(out: &mut dyn Write) -> Result<()> {
    log::debug!("proc demonstration: start");
    let my_proc = Deferred::proc(|out, _| writeln!(out, "Proc called!"));
    proc_greet(out, &my_proc)?;
    log::debug!("proc demonstration: done");
    Ok(())
}
