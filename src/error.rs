// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Serial transport failure, at open time or mid-draw.
    Serial(serialport::Error),
    /// I/O failure on an already-open link.
    Io(std::io::Error),
    /// The device on the other end of the link did not identify as a panel.
    Handshake(String),
    /// The named operation is not implemented by this layer. Text rendering
    /// operations return this instead of aborting the process.
    Unsupported(&'static str),
    /// Invalid strip layout description.
    Layout(String),
}

impl Error {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Serial(err) => write!(f, "serial: {err}"),
            Error::Io(err) => write!(f, "i/o: {err}"),
            Error::Handshake(msg) => write!(f, "handshake: {msg}"),
            Error::Unsupported(op) => write!(f, "operation not supported: {op}"),
            Error::Layout(msg) => write!(f, "layout: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Serial(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serialport::Error> for Error {
    fn from(err: serialport::Error) -> Self {
        Error::Serial(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
