//! Compositor: serializes a frame buffer into one terminal write.
//!
//! The output block is a cursor-home command followed by each glyph row and
//! a newline, nothing after the last row's break. Overwriting the previous
//! frame in place (instead of clearing) keeps the image steady.

use anyhow::Result;

use crossterm::{cursor, style::Print, QueueableCommand};

use crate::core::FrameBuffer;

/// Encode one frame into `out`.
///
/// This builds the output without touching stdout, so callers control when
/// and where the bytes go. `out` is not cleared; the caller owns the buffer
/// and reuses it across frames.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    for row in fb.glyph_rows() {
        for &glyph in row {
            out.queue(Print(glyph))?;
        }
        out.queue(Print('\n'))?;
    }

    Ok(())
}
