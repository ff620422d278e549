use std::io::{Read, Write};

use crate::{Res, Rgb};

/// Panel rotation, clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

/// One physical panel. All coordinates are local to the panel's own
/// origin; clipping of off-panel geometry is the panel's business.
pub trait PanelDriver {
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Res<()>;
    fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: Rgb) -> Res<()>;
    fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Rgb) -> Res<()>;
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) -> Res<()>;
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) -> Res<()>;
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) -> Res<()>;
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb) -> Res<()>;
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb) -> Res<()>;
    #[allow(clippy::too_many_arguments)]
    fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    ) -> Res<()>;
    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    ) -> Res<()>;
    fn fill_screen(&mut self, color: Rgb) -> Res<()>;
    fn set_cursor(&mut self, x: i32, y: i32) -> Res<()>;
    fn set_rotation(&mut self, rotation: Rotation) -> Res<()>;
    fn invert_display(&mut self, invert: bool) -> Res<()>;
    fn close(&mut self) -> Res<()>;
}

pub trait PanelPort: Read + Write {
    fn get_buf(&self) -> Vec<u8>;
}
