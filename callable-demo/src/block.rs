//! Implicit blocks.
//!
//! A block is attached to a call site rather than passed as a named
//! argument, and the callee runs it by yielding. Rust has no block sugar, so
//! the block becomes an ordinary optional parameter:
//!
//! | Block form | Rust |
//! |------------|------|
//! | `greet do ... end` | `block_greet(out, Some(\|out\| ...))` |
//! | `greet` (no block) | `block_greet(out, None::<Block>)` |
//! | `yield` | `block(out)` |
//!
//! The block is `FnOnce`: it belongs to the one call it is attached to.

use std::io::{self, Write};

use crate::error::{CallableError, Result};

/// Boxed form of a block, handy for spelling out `None::<Block>`.
pub type Block<'a> = Box<dyn FnOnce(&mut dyn Write) -> io::Result<()> + 'a>;

/// Writes the two trace lines around a yield to `block`.
///
/// The first line is already written when a missing block is detected, the
/// second never is.
///
/// # Examples
///
/// ```
/// use callable_demo::block::block_greet;
///
/// let mut out = Vec::new();
/// block_greet(&mut out, Some(|out: &mut dyn std::io::Write| writeln!(out, "hi"))).unwrap();
/// assert_eq!(out, b"Inside block greet: 1\nhi\nInside block greet: 2\n");
/// ```
pub fn block_greet<B>(out: &mut dyn Write, block: Option<B>) -> Result<()>
where
    B: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    writeln!(out, "Inside block greet: 1")?;
    let block = block.ok_or(CallableError::MissingDeferredAction)?;
    block(&mut *out)?;
    writeln!(out, "Inside block greet: 2")?;
    Ok(())
}

/// Runs [`block_greet`] with a block that announces the yield.
pub fn demonstrate_block(out: &mut dyn Write) -> Result<()> {
    log::debug!("block demonstration: start");
    block_greet(out, Some(|out: &mut dyn Write| writeln!(out, "Yield called!")))?;
    log::debug!("block demonstration: done");
    Ok(())
}
