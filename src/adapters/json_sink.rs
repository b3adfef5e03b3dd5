//! JSON-lines event sink adapter.
//!
//! One `serde_json` object per event, one event per line.  Write failures
//! are logged and otherwise ignored so a closed pipe never stalls the
//! control loop.

use std::io::Write;

use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct JsonLineSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonLineSink<W> {
    fn emit(&mut self, event: &AppEvent) {
        let written = serde_json::to_writer(&mut self.out, event)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = written {
            warn!("JSON event sink write failed: {}", e);
        }
    }
}
