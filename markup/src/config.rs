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


//! Builder configuration.
//!
//! ```
//! use hudline_markup::{FixedClock, LineBuilder, MarkupConfig, PassthroughEscaper};
//!
//! let config = MarkupConfig::default()
//!     .with_escaper(PassthroughEscaper)
//!     .with_clock(FixedClock(0))
//!     .with_newline("\n");
//! let builder = LineBuilder::with_config(config);
//! ```

use crate::clock::{Clock, SystemClock};
use crate::escape::{Escaper, HtmlEscaper};
use std::fmt;
use std::sync::Arc;

/// Collaborators and settings shared by the lines a [`LineBuilder`](crate::LineBuilder) builds.
#[derive(Clone)]
pub struct MarkupConfig {
    /// Bytes reserved for the output buffer up front
    pub initial_capacity: usize,

    /// Marker emitted by `newline()`
    pub newline: String,

    /// Escapes content passed to escaped appends
    pub escaper: Arc<dyn Escaper>,

    /// Time source for spinners
    pub clock: Arc<dyn Clock>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 128,
            newline: "<br>".to_string(),
            escaper: Arc::new(HtmlEscaper),
            clock: Arc::new(SystemClock),
        }
    }
}

impl fmt::Debug for MarkupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupConfig")
            .field("initial_capacity", &self.initial_capacity)
            .field("newline", &self.newline)
            .finish_non_exhaustive()
    }
}

impl MarkupConfig {
    /// Set the initial buffer capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the line break marker
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Set the escaper
    pub fn with_escaper(mut self, escaper: impl Escaper + 'static) -> Self {
        self.escaper = Arc::new(escaper);
        self
    }

    /// Set the clock
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}
