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


//! Time driven spinners.
//!
//! A spinner shows one of its phases, chosen from the wall clock rather than
//! from how often it has been drawn, so every line rendered within the same
//! phase window shows the same frame.

use std::time::Duration;

/// Phase length used by the preset spinners.
pub const DEFAULT_PHASE_LENGTH: Duration = Duration::from_millis(100);

const BRAILLE: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DOTS: &[&str] = &["⢎⡰", "⢎⡡", "⢎⡑", "⢎⠱", "⠎⡱", "⢊⡱", "⢌⡱", "⢆⡱"];
const LINE: &[&str] = &["-", "\\", "|", "/"];
const NOISE: &[&str] = &["▓", "▒", "░"];

/// Preset phase sequences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Spinner {
    /// Single braille cell circling clockwise.
    #[default]
    Braille,
    /// Two braille cells wide.
    Dots,
    /// `- \ | /`
    Line,
    /// Shaded block cycling through three densities.
    Noise,
}

impl Spinner {
    pub fn phases(&self) -> &'static [&'static str] {
        match self {
            Spinner::Braille => BRAILLE,
            Spinner::Dots => DOTS,
            Spinner::Line => LINE,
            Spinner::Noise => NOISE,
        }
    }
}

/// Index of the phase shown at `now_millis`.
///
/// The phase advances once every `phase_millis` and is shifted by `offset`,
/// which may be negative. `phase_millis` and `len` must be non-zero.
pub fn phase_index(now_millis: u64, phase_millis: u64, offset: i64, len: usize) -> usize {
    let step = i128::from(now_millis / phase_millis) + i128::from(offset);
    step.rem_euclid(len as i128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_index_advances_with_time() {
        assert_eq!(phase_index(0, 100, 0, 4), 0);
        assert_eq!(phase_index(99, 100, 0, 4), 0);
        assert_eq!(phase_index(100, 100, 0, 4), 1);
        assert_eq!(phase_index(450, 100, 0, 4), 0);
    }

    #[test]
    fn test_phase_index_offset() {
        assert_eq!(phase_index(0, 100, 3, 4), 3);
        assert_eq!(phase_index(100, 100, 3, 4), 0);
        assert_eq!(phase_index(0, 100, -1, 4), 3);
    }

    #[test]
    fn test_preset_phase_counts() {
        assert_eq!(Spinner::Braille.phases().len(), 10);
        assert_eq!(Spinner::Dots.phases().len(), 8);
        assert_eq!(Spinner::Line.phases().len(), 4);
        assert_eq!(Spinner::Noise.phases().len(), 3);
    }

    #[test]
    fn test_dots_phases_are_two_columns() {
        assert!(Spinner::Dots.phases().iter().all(|p| p.chars().count() == 2));
    }
}
