// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error;
use std::process;

use clap::Parser;
use simple_logger::SimpleLogger;

use panel_strip::{colors, layout, PanelStrip, Rotation};

#[derive(Parser)]
#[command(name = "panel-strip")]
#[command(about = "Drive a strip of serial display panels as one canvas")]
struct Args {
    /// Panel rotation in quarter turns (0-3)
    #[arg(short, long, value_name = "mode", default_value_t = 0)]
    rotation: u8,

    /// Invert panel colors
    #[arg(short, long)]
    invert: bool,

    #[arg(value_name = "layout_file")]
    layout: String,
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(_) => (),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().init()?;

    let layout = layout::load(&args.layout)?;
    log::info!(
        "strip layout: {} panels of {}x{}",
        layout.ports.len(),
        layout.panel_width,
        layout.panel_height
    );

    let mut strip = PanelStrip::open(&layout.ports, layout.panel_width, layout.panel_height)?;
    let (cw, ch) = strip.canvas_size();

    let mut faults = 0;
    faults += strip.set_rotation(rotation_from(args.rotation)?).faults().len();
    if args.invert {
        faults += strip.invert_display(true).faults().len();
    }

    // Test pattern: border and diagonals across the whole canvas, one
    // circle centered on every panel seam.
    faults += strip.fill_screen(colors::BLACK).faults().len();
    faults += strip.draw_rect(0, 0, cw - 1, ch - 1, colors::WHITE).faults().len();
    faults += strip.draw_line(0, 0, cw - 1, ch - 1, colors::RED).faults().len();
    faults += strip.draw_line(0, ch - 1, cw - 1, 0, colors::RED).faults().len();
    for seam in 1..strip.panel_count() as i32 {
        let x = layout.panel_width * seam;
        faults += strip.draw_circle(x, ch / 2, ch / 4, colors::GREEN).faults().len();
    }

    if faults > 0 {
        log::warn!("test pattern finished with {faults} per-panel faults");
    }

    strip.close();
    Ok(())
}

fn rotation_from(mode: u8) -> Result<Rotation, Box<dyn Error>> {
    Ok(match mode {
        0 => Rotation::Deg0,
        1 => Rotation::Deg90,
        2 => Rotation::Deg180,
        3 => Rotation::Deg270,
        _ => return Err(format!("invalid rotation {mode}").into()),
    })
}
