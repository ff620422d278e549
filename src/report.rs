// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Error;

/// One failed panel within an otherwise completed draw call.
#[derive(Debug)]
pub struct PanelFault {
    pub panel: usize,
    pub error: Error,
}

/// Outcome of one fan-out. A draw call always runs to completion; panels
/// that failed are listed here instead of aborting their siblings.
#[derive(Debug)]
pub struct DrawReport {
    op: &'static str,
    faults: Vec<PanelFault>,
}

impl DrawReport {
    pub(crate) fn new(op: &'static str) -> Self {
        Self {
            op,
            faults: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, panel: usize, error: Error) {
        self.faults.push(PanelFault { panel, error });
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }

    pub fn faults(&self) -> &[PanelFault] {
        &self.faults
    }
}

/// Sink for draw-time diagnostics, injected at strip construction so
/// callers and tests can observe faults without a process-wide logger.
pub trait FaultLog {
    fn draw_fault(&self, op: &str, panel: usize, error: &Error);
}

/// Default sink: forward to the log facade.
pub struct LogFaults;

impl FaultLog for LogFaults {
    fn draw_fault(&self, op: &str, panel: usize, error: &Error) {
        log::error!("{op}: panel {panel}: {error}");
    }
}
