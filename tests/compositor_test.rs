//! Compositor output block shape, checked through the workspace facade.

use crossterm::{cursor, QueueableCommand};

use tui_cube::core::{rasterize_into, FrameBuffer, Rotation};
use tui_cube::term::encode_frame_into;
use tui_cube::types::RenderConfig;

fn cursor_home() -> Vec<u8> {
    let mut prefix: Vec<u8> = Vec::new();
    prefix.queue(cursor::MoveTo(0, 0)).unwrap();
    prefix
}

#[test]
fn all_blank_3x2_buffer_composes_to_padded_rows() {
    let fb = FrameBuffer::new(3, 2);
    let mut out = Vec::new();
    encode_frame_into(&fb, &mut out).unwrap();

    let mut expected = cursor_home();
    expected.extend_from_slice(b"   \n   \n");
    assert_eq!(out, expected);
}

#[test]
fn composed_frame_has_one_line_per_row_and_nothing_more() {
    let config = RenderConfig::default();
    let mut fb = FrameBuffer::new(config.width, config.height);
    rasterize_into(&Rotation::from_angles(0.2, 0.8, 0.05), &config, &mut fb);

    let mut out = Vec::new();
    encode_frame_into(&fb, &mut out).unwrap();

    let prefix = cursor_home();
    assert!(out.starts_with(&prefix));

    let body = &out[prefix.len()..];
    let newlines = body.iter().filter(|&&b| b == b'\n').count();
    assert_eq!(newlines, config.height as usize);
    assert_eq!(body.last(), Some(&b'\n'));
    assert_eq!(
        body.len(),
        (config.width as usize + 1) * config.height as usize
    );
}

#[test]
fn composed_rows_mirror_buffer_rows() {
    let mut fb = FrameBuffer::new(4, 2);
    fb.set(fb.index(0, 0).unwrap(), 1.0, '#');
    fb.set(fb.index(3, 1).unwrap(), 1.0, '^');

    let mut out = Vec::new();
    encode_frame_into(&fb, &mut out).unwrap();

    let prefix = cursor_home();
    let body = String::from_utf8(out[prefix.len()..].to_vec()).unwrap();
    assert_eq!(body, "#   \n   ^\n");
}
