use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_cube::core::{rasterize_into, FrameBuffer, Rotation};
use tui_cube::term::{encode_frame_into, Animation, DisplaySink};
use tui_cube::types::RenderConfig;

struct NullSink;

impl DisplaySink for NullSink {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &[u8]) -> Result<()> {
        black_box(frame);
        Ok(())
    }
}

fn bench_rasterize(c: &mut Criterion) {
    let config = RenderConfig::default();
    let rotation = Rotation::from_angles(0.7, 1.3, 0.2);
    let mut fb = FrameBuffer::new(config.width, config.height);

    c.bench_function("rasterize_frame_80x24", |b| {
        b.iter(|| {
            fb.reset();
            rasterize_into(black_box(&rotation), &config, &mut fb);
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let config = RenderConfig::default();
    let mut fb = FrameBuffer::new(config.width, config.height);
    rasterize_into(&Rotation::from_angles(0.7, 1.3, 0.2), &config, &mut fb);
    let mut out = Vec::with_capacity(fb.len() + config.height as usize + 16);

    c.bench_function("encode_frame_80x24", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(black_box(&fb), &mut out).unwrap();
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let mut animation = Animation::new(RenderConfig::default());
    let mut sink = NullSink;

    c.bench_function("full_frame_80x24", |b| {
        b.iter(|| {
            animation.render_frame(&mut sink).unwrap();
            animation.advance();
        })
    });
}

criterion_group!(benches, bench_rasterize, bench_encode, bench_full_frame);
criterion_main!(benches);
