// SPDX-License-Identifier: GPL-3.0-or-later

//! Drive a horizontal strip of serial-attached display panels as one
//! virtual canvas. [`PanelStrip`] owns one driver handle per panel and
//! fans every drawing primitive out to the panels a shape may touch,
//! translating x coordinates into each panel's local frame.

pub use crate::colors::Rgb;
pub use crate::driver::{PanelDriver, PanelPort, Rotation};
pub use crate::error::Error;
pub use crate::panel::SerialPanel;
pub use crate::report::{DrawReport, FaultLog, LogFaults, PanelFault};
pub use crate::strip::PanelStrip;

pub mod colors;
mod driver;
mod error;
pub mod layout;
mod panel;
mod report;
mod serial_port;
mod strip;

pub type Res<T> = Result<T, Error>;
