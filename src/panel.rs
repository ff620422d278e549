// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{Read, Write};

use crate::serial_port;
use crate::{Error, PanelDriver, PanelPort, Res, Rgb, Rotation};

const BAUD_RATE: u32 = 2_000_000;

// Panel id returned in response to Command::Hello.
const PANEL_ID: &[u8] = b"GFX1";

enum Command {
    Hello = 0x01,         // Asks the panel to identify itself
    Pixel = 0x10,         // Single pixel
    VLine = 0x11,         // Vertical line: x, y, length
    HLine = 0x12,         // Horizontal line: x, y, length
    Line = 0x13,          // Arbitrary segment: x0, y0, x1, y1
    Rect = 0x14,          // Rectangle outline: x, y, w, h
    FillRect = 0x15,      // Filled rectangle: x, y, w, h
    Circle = 0x16,        // Circle outline: x, y, radius
    FillCircle = 0x17,    // Filled circle: x, y, radius
    Triangle = 0x18,      // Triangle outline: three points
    FillTriangle = 0x19,  // Filled triangle: three points
    FillScreen = 0x1a,    // Flood the whole panel with one color
    SetCursor = 0x20,     // Move the text cursor
    SetRotation = 0x21,   // Rotate the panel output
    InvertDisplay = 0x22, // Toggle color inversion
}

// Frame layout: one opcode byte, each coordinate or size argument as a
// big-endian i16, then the color as big-endian RGB565 when one applies.
fn encode(cmd: Command, args: &[i32], color: Option<Rgb>) -> Vec<u8> {
    let mut frame = vec![cmd as u8];
    for &arg in args {
        frame.extend_from_slice(&(arg as i16).to_be_bytes());
    }
    if let Some(c) = color {
        frame.extend_from_slice(&pack565(c));
    }
    frame
}

// RGB565 bit packing: [rrrr rggg] [gggb bbbb]
fn pack565(c: Rgb) -> [u8; 2] {
    let v = ((c.r as u16 & 0xf8) << 8) | ((c.g as u16 & 0xfc) << 3) | (c.b as u16 >> 3);
    v.to_be_bytes()
}

pub struct SerialPanel {
    port: Box<dyn PanelPort>,
    name: String,
}

impl SerialPanel {
    pub fn open(portname: &str) -> Res<Self> {
        log::debug!("open panel on {}", portname);
        let port = serial_port::SerialPort::new(portname, BAUD_RATE)?;
        let mut panel = Self {
            port: Box::new(port),
            name: portname.to_string(),
        };
        panel.handshake()?;
        Ok(panel)
    }

    fn handshake(&mut self) -> Res<()> {
        self.send(Command::Hello, &[], None)?;

        let mut id = [0u8; 4];
        self.port.read_exact(&mut id)?;
        if id != PANEL_ID {
            return Err(Error::Handshake(format!(
                "{}: unexpected panel id {:02x?}",
                self.name, id
            )));
        }

        Ok(())
    }

    fn send(&mut self, cmd: Command, args: &[i32], color: Option<Rgb>) -> Res<()> {
        self.port.write_all(&encode(cmd, args, color))?;
        self.port.flush()?;
        Ok(())
    }
}

impl PanelDriver for SerialPanel {
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Res<()> {
        self.send(Command::Pixel, &[x, y], Some(color))
    }

    fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: Rgb) -> Res<()> {
        self.send(Command::VLine, &[x, y, h], Some(color))
    }

    fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Rgb) -> Res<()> {
        self.send(Command::HLine, &[x, y, w], Some(color))
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) -> Res<()> {
        self.send(Command::Rect, &[x, y, w, h], Some(color))
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) -> Res<()> {
        self.send(Command::FillRect, &[x, y, w, h], Some(color))
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) -> Res<()> {
        self.send(Command::Line, &[x0, y0, x1, y1], Some(color))
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb) -> Res<()> {
        self.send(Command::Circle, &[x, y, radius], Some(color))
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb) -> Res<()> {
        self.send(Command::FillCircle, &[x, y, radius], Some(color))
    }

    fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    ) -> Res<()> {
        self.send(Command::Triangle, &[x0, y0, x1, y1, x2, y2], Some(color))
    }

    fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    ) -> Res<()> {
        self.send(Command::FillTriangle, &[x0, y0, x1, y1, x2, y2], Some(color))
    }

    fn fill_screen(&mut self, color: Rgb) -> Res<()> {
        self.send(Command::FillScreen, &[], Some(color))
    }

    fn set_cursor(&mut self, x: i32, y: i32) -> Res<()> {
        self.send(Command::SetCursor, &[x, y], None)
    }

    fn set_rotation(&mut self, rotation: Rotation) -> Res<()> {
        self.send(Command::SetRotation, &[rotation as i32], None)
    }

    fn invert_display(&mut self, invert: bool) -> Res<()> {
        self.send(Command::InvertDisplay, &[invert as i32], None)
    }

    fn close(&mut self) -> Res<()> {
        log::debug!("close panel on {}", self.name);
        self.port.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use std::io::Cursor;

    type FakePort = Cursor<Vec<u8>>;

    impl PanelPort for FakePort {
        fn get_buf(&self) -> Vec<u8> {
            self.get_ref().to_vec()
        }
    }

    fn fake_panel(port: FakePort) -> SerialPanel {
        SerialPanel {
            port: Box::new(port),
            name: "fake".to_string(),
        }
    }

    #[test]
    fn test_pack565() {
        assert_eq!(pack565(colors::BLACK), [0x00, 0x00]);
        assert_eq!(pack565(colors::WHITE), [0xff, 0xff]);
        assert_eq!(pack565(colors::RED), [0xf8, 0x00]);
        assert_eq!(pack565(colors::GREEN), [0x07, 0xe0]);
        assert_eq!(pack565(colors::BLUE), [0x00, 0x1f]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(
            encode(Command::Pixel, &[3, 4], Some(colors::RED)),
            vec![0x10, 0, 3, 0, 4, 0xf8, 0x00]
        );
        // negative local coordinates survive framing
        assert_eq!(
            encode(Command::Line, &[-4, 0, 6, 10], Some(colors::WHITE)),
            vec![0x13, 0xff, 0xfc, 0, 0, 0, 6, 0, 10, 0xff, 0xff]
        );
        assert_eq!(encode(Command::SetCursor, &[1, 2], None), vec![0x20, 0, 1, 0, 2]);
    }

    #[test]
    fn test_handshake() -> Res<()> {
        // one byte of slack for the Hello frame, then the panel id
        let port = FakePort::new(vec![0u8, b'G', b'F', b'X', b'1']);
        let mut panel = fake_panel(port);
        assert!(panel.handshake().is_ok());
        Ok(())
    }

    #[test]
    fn test_handshake_fail() {
        let port = FakePort::new(vec![0u8, b'n', b'o', b'p', b'e']);
        let mut panel = fake_panel(port);
        let err = panel.handshake().err().unwrap();
        assert!(matches!(err, Error::Handshake(_)));
    }

    #[test]
    fn test_draw_pixel() -> Res<()> {
        let mut panel = fake_panel(FakePort::new(Vec::new()));
        panel.draw_pixel(3, 4, colors::RED)?;
        assert_eq!(panel.port.get_buf(), vec![0x10, 0, 3, 0, 4, 0xf8, 0x00]);
        Ok(())
    }

    #[test]
    fn test_fill_screen() -> Res<()> {
        let mut panel = fake_panel(FakePort::new(Vec::new()));
        panel.fill_screen(colors::BLUE)?;
        assert_eq!(panel.port.get_buf(), vec![0x1a, 0x00, 0x1f]);
        Ok(())
    }

    #[test]
    fn test_set_rotation() -> Res<()> {
        let mut panel = fake_panel(FakePort::new(Vec::new()));
        panel.set_rotation(Rotation::Deg180)?;
        assert_eq!(panel.port.get_buf(), vec![0x21, 0, 2]);
        Ok(())
    }
}
