//! Destinations for program output.
//!
//! Output is line oriented: every `PRINT` statement appends exactly one line.
//! Stdout is the default, a buffer captures lines for tests and embedders.

use std::io::{self, Write};

/// Line sink the interpreter writes program output to.
#[derive(Debug)]
pub enum PrintHandler {
    /// Writes each line to stdout.
    Stdout,
    /// Captures lines in memory.
    Buffer(Vec<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandler {
    pub fn buffer() -> PrintHandler {
        PrintHandler::Buffer(Vec::new())
    }

    /// Emit one line, verbatim. Only stdout can fail, e.g. on a closed pipe.
    pub fn println(&mut self, msg: &str) -> io::Result<()> {
        match self {
            PrintHandler::Stdout => write_line(&mut io::stdout().lock(), msg),
            PrintHandler::Buffer(lines) => {
                lines.push(msg.to_string());
                Ok(())
            }
            PrintHandler::Silent => Ok(()),
        }
    }

    /// Captured lines. Empty for handlers that don't capture.
    pub fn lines(&self) -> &[String] {
        match self {
            PrintHandler::Buffer(lines) => lines,
            PrintHandler::Stdout | PrintHandler::Silent => &[],
        }
    }

    pub fn clear(&mut self) {
        if let PrintHandler::Buffer(lines) = self {
            lines.clear();
        }
    }
}

impl Default for PrintHandler {
    fn default() -> Self {
        PrintHandler::Stdout
    }
}

pub fn write_line<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg)?;
    out.flush()
}
