//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Display transports and the configuration helper

use crate::config::{DisplayConfig, DisplayFormat};
use hudline_markup::LineBuilder;
use std::time::Duration;
use tracing::debug;

/// A text-only surface that shows lines sent to it.
///
/// Implement this trait for whatever carries lines to the screen. Lines are
/// queued with [`add_line`](Display::add_line) and shown together on
/// [`update`](Display::update).
pub trait Display {
    /// Select how lines are interpreted.
    fn set_display_format(&mut self, format: DisplayFormat);

    /// Set the minimum time between transmissions.
    fn set_transmission_interval(&mut self, interval: Duration);

    /// Queue a line for the next update.
    fn add_line(&mut self, line: &str);

    /// Drop every queued line.
    fn clear(&mut self);

    /// Send the queued lines.
    fn update(&mut self);
}

/// Apply `config` to `display` and return the configuration that was applied.
pub fn configure<D: Display + ?Sized>(display: &mut D, config: &DisplayConfig) -> DisplayConfig {
    debug!(
        format = ?config.format,
        interval_ms = config.transmission_interval.as_millis() as u64,
        "Configuring display"
    );
    display.set_display_format(config.format);
    display.set_transmission_interval(config.transmission_interval);
    *config
}

/// Helpers for feeding builders to a display.
pub trait DisplayExt: Display {
    /// Render `builder` and queue the resulting line.
    fn add_builder_line(&mut self, builder: &mut LineBuilder) {
        let line = builder.render();
        self.add_line(&line);
    }
}

impl<D: Display + ?Sized> DisplayExt for D {}

/// A display that keeps everything it is sent in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    format: DisplayFormat,
    transmission_interval: Duration,
    pending: Vec<String>,
    frames: Vec<Vec<String>>,
}

impl RecordingDisplay {
    pub fn new() -> RecordingDisplay {
        RecordingDisplay::default()
    }

    pub fn format(&self) -> DisplayFormat {
        self.format
    }

    pub fn transmission_interval(&self) -> Duration {
        self.transmission_interval
    }

    /// Lines queued since the last update.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Every update sent so far, oldest first.
    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }
}

impl Display for RecordingDisplay {
    fn set_display_format(&mut self, format: DisplayFormat) {
        self.format = format;
    }

    fn set_transmission_interval(&mut self, interval: Duration) {
        self.transmission_interval = interval;
    }

    fn add_line(&mut self, line: &str) {
        self.pending.push(line.to_string());
    }

    fn clear(&mut self) {
        self.pending.clear();
    }

    fn update(&mut self) {
        let frame = std::mem::take(&mut self.pending);
        debug!(lines = frame.len(), "Display update");
        self.frames.push(frame);
    }
}
