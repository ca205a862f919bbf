//! TerminalRenderer: flushes composed frames to a real terminal.
//!
//! The animation only needs "write these bytes now", so the terminal sits
//! behind the small [`DisplaySink`] trait and tests can capture frames into
//! memory instead.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, terminal, QueueableCommand};

/// Where composed frames go.
///
/// `clear` runs once before the animation starts; `present` receives one
/// fully composed frame per iteration and must write it atomically.
pub trait DisplaySink {
    fn clear(&mut self) -> Result<()>;
    fn present(&mut self, frame: &[u8]) -> Result<()>;
}

/// The stdout-backed sink used by the runner binary.
pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Re-show the cursor.
    ///
    /// Best-effort, called on the way out regardless of how the run ended.
    pub fn restore(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for TerminalRenderer {
    fn clear(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn present(&mut self, frame: &[u8]) -> Result<()> {
        self.stdout.write_all(frame)?;
        self.stdout.flush()?;
        Ok(())
    }
}
