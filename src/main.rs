//! Terminal cube runner (default binary).
//!
//! Clears the screen, hides the cursor, then spins the cube forever.
//! There is no normal exit path; the process runs until externally
//! interrupted, and cursor restore is attempted on the way out.

use anyhow::Result;

use tui_cube::term::{Animation, DisplaySink, StopToken, TerminalRenderer};
use tui_cube::types::{RenderConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.clear()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.restore();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (width, height) = crossterm::terminal::size().unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
    let config = RenderConfig::default().with_viewport(width, height);

    // Never tripped here; the loop only ends with the process.
    let stop = StopToken::new();
    Animation::new(config).run(term, &stop)
}
