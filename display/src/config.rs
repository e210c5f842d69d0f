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


//! Display configuration
//!
//! ```
//! use hudline_display::{DisplayConfig, DisplayFormat};
//! use std::time::Duration;
//!
//! let config = DisplayConfig::default()
//!     .with_format(DisplayFormat::Markup)
//!     .with_transmission_interval(Duration::from_millis(100));
//! ```

use std::time::Duration;

/// How the display interprets the lines it receives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    /// Lines are shown as plain text, tags included.
    Classic,
    /// Lines are rendered as markup.
    #[default]
    Markup,
}

/// One-time setup applied to a display before lines are sent to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayConfig {
    /// Content format of the lines
    pub format: DisplayFormat,

    /// Minimum time between two transmissions of the display contents
    pub transmission_interval: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: DisplayFormat::Markup,
            transmission_interval: Duration::from_millis(250),
        }
    }
}

impl DisplayConfig {
    /// Set the content format
    pub fn with_format(mut self, format: DisplayFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the transmission interval
    pub fn with_transmission_interval(mut self, interval: Duration) -> Self {
        self.transmission_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_defaults() {
        let config = DisplayConfig::default();

        assert_eq!(config.format, DisplayFormat::Markup);
        assert_eq!(config.transmission_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_display_config_builder() {
        let config = DisplayConfig::default()
            .with_format(DisplayFormat::Classic)
            .with_transmission_interval(Duration::from_millis(50));

        assert_eq!(config.format, DisplayFormat::Classic);
        assert_eq!(config.transmission_interval, Duration::from_millis(50));
    }
}
