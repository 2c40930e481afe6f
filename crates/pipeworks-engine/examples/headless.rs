//! Pipeworks headless run: generate pipes without a renderer.
//!
//! Demonstrates:
//!   1. Building a GeneratorConfig and PipeGenerator
//!   2. Driving it with 60 Hz frame times
//!   3. Reading cells back, including one Z slice as ASCII
//!   4. Resetting with a new seed
//!
//! Run with:
//!   cargo run --example headless -- [seed]

use pipeworks_core::{Axis, Coords, GridDims, PipeShape};
use pipeworks_engine::{GeneratorConfig, PipeGenerator, TickOutcome};
use pipeworks_grid::grid_fingerprint;

// ─── Run parameters ─────────────────────────────────────────────

const FRAME_DT: f64 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 600;

fn glyph(shape: PipeShape) -> char {
    match shape {
        PipeShape::Empty => '.',
        PipeShape::Straight { axis: Axis::X } => '-',
        PipeShape::Straight { axis: Axis::Y } => '|',
        PipeShape::Straight { axis: Axis::Z } => 'o',
        PipeShape::Elbow { .. } => '+',
    }
}

fn print_slice(generator: &PipeGenerator, z: i32) {
    let dims = generator.grid().dims();
    println!("slice z = {z}:");
    for y in (0..dims.height as i32).rev() {
        let row: String = (0..dims.width as i32)
            .map(|x| glyph(generator.get_cell(Coords::new(x, y, z)).shape))
            .collect();
        println!("  {row}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 2024,
    };

    let config = GeneratorConfig {
        dims: GridDims::new(16, 12, 20),
        max_segments_per_color: 120,
        seed,
        ..Default::default()
    };
    let mut generator = PipeGenerator::new(config)?;

    let mut frames = 0;
    while !generator.is_done() && frames < MAX_FRAMES {
        let report = generator.advance(FRAME_DT);
        for outcome in &report.outcomes {
            if let TickOutcome::ColorAdvanced { reason, next, .. } = outcome {
                let name = generator.palette().name(*next).unwrap_or("?");
                println!("frame {frames}: walk ended ({reason:?}), now laying {name}");
            }
        }
        frames += 1;
    }

    let m = generator.metrics();
    println!(
        "done after {frames} frames: {} ticks, {} segments, {} of {} cells",
        m.ticks,
        m.segments_placed,
        generator.grid().occupied_count(),
        generator.grid().cell_count()
    );
    println!("fingerprint {:016x}", grid_fingerprint(generator.grid()));
    print_slice(&generator, generator.grid().dims().length as i32 / 2);

    generator.reset(seed.wrapping_add(1));
    generator.advance(1.0);
    println!(
        "after reset to seed {}: {} segments in the first second",
        generator.seed(),
        generator.metrics().segments_placed
    );
    Ok(())
}
