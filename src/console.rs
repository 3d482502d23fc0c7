use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::{
    io::{stderr, stdout, IsTerminal, Stderr, Stdout, Write},
    ops::Drop,
};

/// Traditional block size in bytes
const BLOCK_SIZE: usize = 512;

/// Owns the handles to standard output and standard error and decides how
/// results are written. Color is enabled only when stdout is a tty and the
/// `NO_COLOR` environment variable is blank. Output is line-buffered on a
/// terminal and block-buffered otherwise; anything left in the buffer is
/// flushed on drop.
pub struct Console {
    pub stdout: Stdout,
    stderr: Stderr,
    buffer: Vec<u8>,
    line_buffered: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        let stdout = stdout();
        let stdout_is_terminal = stdout.is_terminal();
        log::debug!("stdout is terminal: {stdout_is_terminal}");

        let enable_color =
            stdout_is_terminal && std::env::var("NO_COLOR").unwrap_or_default().is_empty();
        log::debug!("color enabled: {enable_color}");
        crossterm::style::force_color_output(enable_color);

        Self {
            stdout,
            stderr: stderr(),
            buffer: Vec::with_capacity(BLOCK_SIZE),
            line_buffered: stdout_is_terminal,
        }
    }

    pub fn force_line_buffered(&mut self) {
        log::debug!("line buffered");
        self.line_buffered = true;
    }

    /// Writes a plain output line.
    pub fn write_line(&mut self, txt: &str) -> Result<()> {
        self.buffer.extend_from_slice(txt.as_bytes());
        self.buffer.push(b'\n');

        if self.line_buffered || self.buffer.len() >= BLOCK_SIZE {
            self.flush()?;
        }
        Ok(())
    }

    /// Reports a rejected name along with the validator's message.
    pub fn write_violation(&mut self, name: &str, message: &str) -> Result<()> {
        let line = format!("{}: {message}", name.red());
        self.write_line(&line)
    }

    pub fn write_err(&mut self, err: &str) -> Result<()> {
        self.flush()?;
        writeln!(self.stderr, "{err}")?;
        Ok(())
    }

    /// Flushes and clears the buffer.
    pub fn flush(&mut self) -> Result<()> {
        if !self.buffer.is_empty() {
            self.stdout
                .write_all(&self.buffer)
                .context("failed to write buffer to stdout")?;
            self.buffer.clear();
        }
        Ok(())
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            log::warn!("failed to flush remaining console output before dropping: {e}");
        }
    }
}
