// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Read;
use std::io::Write;
use std::time::Duration;

use crate::PanelPort;
use crate::Res;

pub struct SerialPort {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialPort {
    pub fn new(path: &str, baud_rate: u32) -> Res<Self> {
        Ok(Self {
            port: serialport::new(path, baud_rate)
                .data_bits(serialport::DataBits::Eight)
                .stop_bits(serialport::StopBits::One)
                .timeout(Duration::from_millis(1000))
                .open()?,
        })
    }
}

impl Read for SerialPort {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        self.port.read(buf)
    }
}

impl Write for SerialPort {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> Result<usize, std::io::Error> {
        self.port.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), std::io::Error> {
        self.port.flush()
    }
}

impl PanelPort for SerialPort {
    fn get_buf(&self) -> Vec<u8> {
        Vec::<u8>::new()
    }
}
