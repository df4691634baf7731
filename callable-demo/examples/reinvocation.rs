//! Behaviour the default run never reaches: calling a proc repeatedly with
//! any arguments, a lambda with the wrong arity, and a yield with no block.
//!
//! Run with: cargo run --example reinvocation

use std::io::{self, Write};

use callable_demo::Deferred;
use callable_demo::block::{Block, block_greet};
use callable_demo::lambda::lambda_greet;

fn main() -> callable_demo::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== Procs ignore arity ===")?;
    let echo = Deferred::proc(|out, args| writeln!(out, "  proc got {:?}", args));
    echo.call(&mut out, &[])?;
    echo.call(&mut out, &["one"])?;
    echo.call(&mut out, &["one", "two", "three"])?;

    writeln!(out, "\n=== Lambdas enforce arity ===")?;
    let pair = Deferred::lambda(2, |out, args| writeln!(out, "  {} & {}", args[0], args[1]));
    pair.call(&mut out, &["left", "right"])?;
    match pair.call(&mut out, &["left"]) {
        Ok(()) => writeln!(out, "  unexpected success")?,
        Err(e) => writeln!(out, "  error: {}", e)?,
    }
    if let Err(e) = lambda_greet(&mut out, &pair) {
        writeln!(out, "  error: {}", e)?;
    }

    writeln!(out, "\n=== Yield without a block ===")?;
    if let Err(e) = block_greet(&mut out, None::<Block>) {
        writeln!(out, "  error: {}", e)?;
    }

    Ok(())
}
