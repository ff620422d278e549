// SPDX-License-Identifier: GPL-3.0-or-later

use crate::panel::SerialPanel;
use crate::report::{DrawReport, FaultLog, LogFaults};
use crate::{Error, PanelDriver, Res, Rgb, Rotation};

/// Virtual-space region a primitive may touch, used only to pick panels.
#[derive(Debug, Clone, Copy)]
enum Footprint {
    Point { x: i32, y: i32 },
    Rect { left: i32, right: i32, top: i32, bottom: i32 },
    Whole,
}

/// An ordered row of panels driven as one canvas. Panel `index` covers the
/// virtual x range `[panel_w * index, panel_w * (index + 1) - 1]` at full
/// height; every drawing call translates x by `panel_w * index` for each
/// panel the shape may touch and forwards to that panel's driver.
///
/// Drawing calls never fail: a fault on one panel is reported through the
/// returned [`DrawReport`] and the injected [`FaultLog`] while the fan-out
/// continues on the remaining panels.
pub struct PanelStrip {
    panels: Vec<Box<dyn PanelDriver>>,
    panel_w: i32,
    panel_h: i32,
    fault_log: Box<dyn FaultLog>,
}

impl PanelStrip {
    /// Open one serial panel per port, in order. On any failure every
    /// panel opened so far is closed and the error is returned; a partially
    /// built strip is never handed out.
    pub fn open(ports: &[String], panel_w: i32, panel_h: i32) -> Res<Self> {
        Self::open_with(ports, panel_w, panel_h, |port| {
            Ok(Box::new(SerialPanel::open(port)?))
        })
    }

    /// Like [`PanelStrip::open`] but with a caller-supplied panel opener.
    pub fn open_with<F>(ports: &[String], panel_w: i32, panel_h: i32, mut open: F) -> Res<Self>
    where
        F: FnMut(&str) -> Res<Box<dyn PanelDriver>>,
    {
        let mut strip = Self::from_panels(Vec::new(), panel_w, panel_h)?;

        for port in ports {
            match open(port) {
                Ok(panel) => strip.panels.push(panel),
                Err(err) => {
                    log::error!("open {port}: {err}");
                    strip.close();
                    return Err(err);
                }
            }
        }

        Ok(strip)
    }

    /// Assemble a strip from already-open drivers.
    pub fn from_panels(panels: Vec<Box<dyn PanelDriver>>, panel_w: i32, panel_h: i32) -> Res<Self> {
        if panel_w <= 0 || panel_h <= 0 {
            return Err(Error::Layout(format!(
                "panel size must be positive, got {panel_w}x{panel_h}"
            )));
        }

        Ok(Self {
            panels,
            panel_w,
            panel_h,
            fault_log: Box::new(LogFaults),
        })
    }

    /// Replace the draw-fault sink.
    pub fn with_fault_log(mut self, fault_log: Box<dyn FaultLog>) -> Self {
        self.fault_log = fault_log;
        self
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panel_size(&self) -> (i32, i32) {
        (self.panel_w, self.panel_h)
    }

    pub fn canvas_size(&self) -> (i32, i32) {
        (self.panel_w * self.panels.len() as i32, self.panel_h)
    }

    fn fan_out<F>(&mut self, op: &'static str, footprint: Footprint, mut draw: F) -> DrawReport
    where
        F: FnMut(&mut dyn PanelDriver, i32) -> Res<()>,
    {
        let Self {
            panels,
            panel_w,
            panel_h,
            fault_log,
        } = self;
        let (w, h) = (*panel_w, *panel_h);

        log::trace!("{op}: {footprint:?}");

        let mut report = DrawReport::new(op);
        for (index, panel) in panels.iter_mut().enumerate() {
            let hit = match footprint {
                Footprint::Point { x, y } => in_bounds(x, y, w, h, index as i32),
                Footprint::Rect {
                    left,
                    right,
                    top,
                    bottom,
                } => rect_in_bounds(left, right, top, bottom, w, h, index as i32),
                Footprint::Whole => true,
            };
            if !hit {
                continue;
            }

            let shift = w * index as i32;
            if let Err(error) = draw(panel.as_mut(), shift) {
                fault_log.draw_fault(op, index, &error);
                report.push(index, error);
            }
        }

        report
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb) -> DrawReport {
        self.fan_out("draw_pixel", Footprint::Point { x, y }, |panel, shift| {
            panel.draw_pixel(x - shift, y, color)
        })
    }

    pub fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: Rgb) -> DrawReport {
        let footprint = Footprint::Rect {
            left: x,
            right: x,
            top: y,
            bottom: y + h,
        };
        self.fan_out("draw_fast_vline", footprint, |panel, shift| {
            panel.draw_fast_vline(x - shift, y, h, color)
        })
    }

    pub fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Rgb) -> DrawReport {
        let footprint = Footprint::Rect {
            left: x,
            right: x + w,
            top: y,
            bottom: y,
        };
        self.fan_out("draw_fast_hline", footprint, |panel, shift| {
            panel.draw_fast_hline(x - shift, y, w, color)
        })
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) -> DrawReport {
        let footprint = Footprint::Rect {
            left: x,
            right: x + w,
            top: y,
            bottom: y + h,
        };
        self.fan_out("draw_rect", footprint, |panel, shift| {
            panel.draw_rect(x - shift, y, w, h, color)
        })
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) -> DrawReport {
        let footprint = Footprint::Rect {
            left: x,
            right: x + w,
            top: y,
            bottom: y + h,
        };
        self.fan_out("fill_rect", footprint, |panel, shift| {
            panel.fill_rect(x - shift, y, w, h, color)
        })
    }

    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) -> DrawReport {
        let footprint = Footprint::Rect {
            left: x0.min(x1),
            right: x0.max(x1),
            top: y0.min(y1),
            bottom: y0.max(y1),
        };
        self.fan_out("draw_line", footprint, |panel, shift| {
            panel.draw_line(x0 - shift, y0, x1 - shift, y1, color)
        })
    }

    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb) -> DrawReport {
        let footprint = Footprint::Rect {
            left: x - radius,
            right: x + radius,
            top: y - radius,
            bottom: y + radius,
        };
        self.fan_out("draw_circle", footprint, |panel, shift| {
            panel.draw_circle(x - shift, y, radius, color)
        })
    }

    pub fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb) -> DrawReport {
        let footprint = Footprint::Rect {
            left: x - radius,
            right: x + radius,
            top: y - radius,
            bottom: y + radius,
        };
        self.fan_out("fill_circle", footprint, |panel, shift| {
            panel.fill_circle(x - shift, y, radius, color)
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    ) -> DrawReport {
        let footprint = Footprint::Rect {
            left: min3(x0, x1, x2),
            right: max3(x0, x1, x2),
            top: min3(y0, y1, y2),
            bottom: max3(y0, y1, y2),
        };
        self.fan_out("draw_triangle", footprint, |panel, shift| {
            panel.draw_triangle(x0 - shift, y0, x1 - shift, y1, x2 - shift, y2, color)
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    ) -> DrawReport {
        let footprint = Footprint::Rect {
            left: min3(x0, x1, x2),
            right: max3(x0, x1, x2),
            top: min3(y0, y1, y2),
            bottom: max3(y0, y1, y2),
        };
        self.fan_out("fill_triangle", footprint, |panel, shift| {
            panel.fill_triangle(x0 - shift, y0, x1 - shift, y1, x2 - shift, y2, color)
        })
    }

    pub fn fill_screen(&mut self, color: Rgb) -> DrawReport {
        self.fan_out("fill_screen", Footprint::Whole, |panel, _| {
            panel.fill_screen(color)
        })
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) -> DrawReport {
        self.fan_out("set_cursor", Footprint::Point { x, y }, |panel, shift| {
            panel.set_cursor(x - shift, y)
        })
    }

    pub fn set_rotation(&mut self, rotation: Rotation) -> DrawReport {
        self.fan_out("set_rotation", Footprint::Whole, |panel, _| {
            panel.set_rotation(rotation)
        })
    }

    pub fn invert_display(&mut self, invert: bool) -> DrawReport {
        self.fan_out("invert_display", Footprint::Whole, |panel, _| {
            panel.invert_display(invert)
        })
    }

    // Text rendering is not implemented by this layer. Each operation
    // returns Error::Unsupported so callers can detect the absence of
    // text support instead of crashing.

    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        _x: i32,
        _y: i32,
        _fg: Rgb,
        _bg: Rgb,
        _size: i32,
        _ch: char,
    ) -> Res<()> {
        Err(Error::Unsupported("draw_char"))
    }

    pub fn set_text_color(&mut self, _color: Rgb) -> Res<()> {
        Err(Error::Unsupported("set_text_color"))
    }

    pub fn set_text_color_bg(&mut self, _fg: Rgb, _bg: Rgb) -> Res<()> {
        Err(Error::Unsupported("set_text_color_bg"))
    }

    pub fn set_text_size(&mut self, _size: i32) -> Res<()> {
        Err(Error::Unsupported("set_text_size"))
    }

    pub fn set_text_wrap(&mut self, _wrap: bool) -> Res<()> {
        Err(Error::Unsupported("set_text_wrap"))
    }

    pub fn cp437(&mut self, _enable: bool) -> Res<()> {
        Err(Error::Unsupported("cp437"))
    }

    pub fn print(&mut self, _text: &str) -> Res<()> {
        Err(Error::Unsupported("print"))
    }

    pub fn println(&mut self, _text: &str) -> Res<()> {
        Err(Error::Unsupported("println"))
    }

    pub fn set_font(&mut self, _font: usize) -> Res<()> {
        Err(Error::Unsupported("set_font"))
    }

    /// Close every panel in index order, best effort. Close failures are
    /// logged and otherwise ignored. Idempotent.
    pub fn close(&mut self) {
        for (index, panel) in self.panels.iter_mut().enumerate() {
            if let Err(err) = panel.close() {
                log::warn!("close: panel {index}: {err}");
            }
        }
        self.panels.clear();
    }
}

impl Drop for PanelStrip {
    fn drop(&mut self) {
        self.close();
    }
}

/// True iff the virtual point lies on panel `index`: x within the panel's
/// horizontal slice, y within the shared panel height. Every x belongs to
/// exactly one index; y is never partitioned.
fn in_bounds(x: i32, y: i32, panel_w: i32, panel_h: i32, index: i32) -> bool {
    let left = panel_w * index;
    let right = panel_w * (index + 1) - 1;

    left <= x && x <= right && 0 <= y && y <= panel_h - 1
}

/// True iff any of the four corners of the box lies on panel `index`.
///
/// Deliberately corner-only: a box that straddles a panel without putting a
/// corner inside it is not detected. This is the defined overlap policy, a
/// known geometric approximation kept for compatibility, not exact
/// rectangle intersection.
fn rect_in_bounds(
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
    panel_w: i32,
    panel_h: i32,
    index: i32,
) -> bool {
    in_bounds(left, top, panel_w, panel_h, index)
        || in_bounds(right, top, panel_w, panel_h, index)
        || in_bounds(left, bottom, panel_w, panel_h, index)
        || in_bounds(right, bottom, panel_w, panel_h, index)
}

fn min3(a: i32, b: i32, c: i32) -> i32 {
    a.min(b).min(c)
}

fn max3(a: i32, b: i32, c: i32) -> i32 {
    a.max(b).max(c)
}
