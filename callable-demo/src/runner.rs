//! The full demonstration sequence: block, then proc, then lambda.

use std::io::Write;

use crate::block::demonstrate_block;
use crate::error::Result;
use crate::lambda::demonstrate_lambda;
use crate::proc_object::demonstrate_proc;

/// Runs the three demonstrations in order, stopping at the first error.
pub fn run_all(out: &mut dyn Write) -> Result<()> {
    demonstrate_block(out)?;
    demonstrate_proc(out)?;
    demonstrate_lambda(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Accepts a fixed number of writes, then fails every one after.
    struct FailAfter {
        remaining: usize,
        written: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_all_transcript() {
        let mut out = Vec::new();
        run_all(&mut out).unwrap();
        let lines: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
        assert_eq!(
            lines,
            [
                "Inside block greet: 1",
                "Yield called!",
                "Inside block greet: 2",
                "Inside proc greet: 1",
                "Proc called!",
                "Inside proc greet: 2",
                "Inside greet: 1",
                "Lambda called!",
                "Inside greet: 2",
            ]
        );
    }

    #[test]
    fn test_write_failure_halts_sequence() {
        // Each line is a single write on a Vec-backed sink
        let mut sink = FailAfter {
            remaining: 3,
            written: Vec::new(),
        };
        let err = run_all(&mut sink).unwrap_err();
        assert!(matches!(err, crate::error::CallableError::Io(_)));
        let text = String::from_utf8(sink.written).unwrap();
        assert!(text.ends_with("Inside block greet: 2\n"));
        assert!(!text.contains("proc"));
    }
}
