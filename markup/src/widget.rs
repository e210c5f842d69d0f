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


//! Widgets rendered from colors supplied after the widget is started.
//!
//! Starting a widget captures everything it needs from its arguments and then
//! waits for a fixed number of colors. Once the last color arrives the widget
//! is turned into a list of [`Segment`]s, each a piece of text in one color,
//! which the builder writes out through its normal color and append path.
//!
//! # Glyphs
//!
//! Both bars are [`BAR_WIDTH`] cells wide.
//!
//! | Widget       | Open | Close | Cells                               |
//! |--------------|------|-------|-------------------------------------|
//! | Slider       | `「` | `」`  | track `─`, marker `●`               |
//! | Progress bar | `［` | `］`  | filled `█`, empty `░`               |

use crate::color::{ColorToken, SEPARATOR_COLOR};

/// Number of cells in a slider or progress bar.
pub const BAR_WIDTH: u32 = 20;

pub const SLIDER_OPEN: &str = "「";
pub const SLIDER_CLOSE: &str = "」";
pub const SLIDER_TRACK: &str = "─";
pub const SLIDER_MARKER: &str = "●";

pub const PROGRESS_OPEN: &str = "［";
pub const PROGRESS_CLOSE: &str = "］";
pub const PROGRESS_FILLED: &str = "█";
pub const PROGRESS_EMPTY: &str = "░";

/// Text between a data pair's label and value.
pub const DATA_SEPARATOR: &str = " : ";

/// Format a number for display with exactly two decimal places.
pub fn format_number(value: f64) -> String {
    format!("{:.2}", value)
}

/// Fraction of the way `current` lies from `min` to `max`.
///
/// Values outside `[min, max]` give fractions outside `[0, 1]`.
pub fn percent(min: f64, max: f64, current: f64) -> f64 {
    (current - min) / (max - min)
}

/// Number of filled cells for `current`, out of [`BAR_WIDTH`].
///
/// Not clamped: a value past either end yields an index past that end.
/// A NaN `current` yields zero and infinities saturate.
pub fn fill_index(min: f64, max: f64, current: f64) -> i64 {
    (f64::from(BAR_WIDTH) * percent(min, max, current)).round() as i64
}

/// Most cells drawn for one run, however far out of range the value is.
pub const MAX_RUN_CELLS: i64 = 2 * BAR_WIDTH as i64;

fn cells(glyph: &str, count: i64) -> String {
    glyph.repeat(count.clamp(0, MAX_RUN_CELLS) as usize)
}

/// The widget being built and the values it captured when it was started.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    /// A label and a value separated by [`DATA_SEPARATOR`].
    ///
    /// Colors: label, data.
    Data { label: String, data: String },
    /// A track with a marker at the current value, framed by its endpoints.
    ///
    /// Colors: endpoint labels, fill, track.
    Slider {
        min: f64,
        max: f64,
        current: f64,
        fill: i64,
    },
    /// A bar filled up to the current value, followed by the percentage.
    ///
    /// Colors: fill, track.
    ProgressBar { percent: f64, fill: i64 },
}

impl WidgetKind {
    /// Number of colors the widget waits for.
    pub fn expected_colors(&self) -> usize {
        match self {
            WidgetKind::Data { .. } => 2,
            WidgetKind::Slider { .. } => 3,
            WidgetKind::ProgressBar { .. } => 2,
        }
    }

    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Data { .. } => "data",
            WidgetKind::Slider { .. } => "slider",
            WidgetKind::ProgressBar { .. } => "progress bar",
        }
    }
}

/// A run of text written in a single color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub color: ColorToken,
    pub text: String,
}

impl Segment {
    fn new(color: &ColorToken, text: impl Into<String>) -> Segment {
        Segment {
            color: color.clone(),
            text: text.into(),
        }
    }
}

/// A started widget collecting its colors.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingWidget {
    kind: WidgetKind,
    collected: Vec<ColorToken>,
    prior: Option<ColorToken>,
}

impl PendingWidget {
    /// Start collecting colors for `kind`.
    ///
    /// `prior` is the color of the span open when the widget started, if any.
    pub fn new(kind: WidgetKind, prior: Option<ColorToken>) -> PendingWidget {
        let collected = Vec::with_capacity(kind.expected_colors());
        PendingWidget {
            kind,
            collected,
            prior,
        }
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn prior(&self) -> Option<&ColorToken> {
        self.prior.as_ref()
    }

    pub fn collected(&self) -> &[ColorToken] {
        &self.collected
    }

    /// Colors still needed before the widget can render.
    pub fn remaining(&self) -> usize {
        self.kind.expected_colors() - self.collected.len()
    }

    /// Returns `true` once every expected color has been collected.
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Record the next color. Colors past the expected count are ignored.
    pub fn push(&mut self, color: ColorToken) {
        if !self.is_complete() {
            self.collected.push(color);
        }
    }

    /// Lay out the widget using the collected colors.
    ///
    /// Segments with no text are left out. Returns the segments together with
    /// the prior color to restore afterwards.
    pub fn finalize(self) -> (Vec<Segment>, Option<ColorToken>) {
        debug_assert!(self.is_complete());
        let colors = &self.collected;
        let segments = match &self.kind {
            WidgetKind::Data { label, data } => {
                let separator = ColorToken::parse(SEPARATOR_COLOR);
                vec![
                    Segment::new(&colors[0], label.as_str()),
                    Segment::new(&separator, DATA_SEPARATOR),
                    Segment::new(&colors[1], data.as_str()),
                ]
            }
            WidgetKind::Slider {
                min,
                max,
                current,
                fill,
            } => {
                let (label, marker, track) = (&colors[0], &colors[1], &colors[2]);
                let remaining = i64::from(BAR_WIDTH).saturating_sub(*fill);
                vec![
                    Segment::new(label, format_number(*min)),
                    Segment::new(track, format!("{}{}", SLIDER_OPEN, cells(SLIDER_TRACK, *fill))),
                    Segment::new(marker, SLIDER_MARKER),
                    Segment::new(
                        track,
                        format!("{}{}", cells(SLIDER_TRACK, remaining), SLIDER_CLOSE),
                    ),
                    Segment::new(label, format_number(*max)),
                    Segment::new(marker, format!(" | {}", format_number(*current))),
                ]
            }
            WidgetKind::ProgressBar { percent, fill } => {
                let (filled, track) = (&colors[0], &colors[1]);
                let remaining = i64::from(BAR_WIDTH).saturating_sub(*fill);
                vec![
                    Segment::new(track, PROGRESS_OPEN),
                    Segment::new(filled, cells(PROGRESS_FILLED, *fill)),
                    Segment::new(
                        track,
                        format!("{}{}", cells(PROGRESS_EMPTY, remaining), PROGRESS_CLOSE),
                    ),
                    Segment::new(filled, format!(" {}%", format_number(percent * 100.0))),
                ]
            }
        };
        let segments = segments
            .into_iter()
            .filter(|segment| !segment.text.is_empty())
            .collect();
        (segments, self.prior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(raw: &str) -> ColorToken {
        ColorToken::parse(raw)
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(3.14159), "3.14");
        assert_eq!(format_number(-2.5), "-2.50");
        assert_eq!(format_number(100.0), "100.00");
    }

    #[test]
    fn test_fill_index() {
        assert_eq!(fill_index(0.0, 100.0, 50.0), 10);
        assert_eq!(fill_index(0.0, 100.0, 100.0), 20);
        assert_eq!(fill_index(0.0, 100.0, 0.0), 0);
        assert_eq!(fill_index(0.0, 1.0, 0.33), 7);
        assert_eq!(fill_index(0.0, 100.0, 150.0), 30);
        assert_eq!(fill_index(0.0, 100.0, -50.0), -10);
    }

    #[test]
    fn test_expected_colors() {
        let data = WidgetKind::Data {
            label: "a".into(),
            data: "b".into(),
        };
        assert_eq!(data.expected_colors(), 2);
        let slider = WidgetKind::Slider {
            min: 0.0,
            max: 1.0,
            current: 0.5,
            fill: 10,
        };
        assert_eq!(slider.expected_colors(), 3);
        let bar = WidgetKind::ProgressBar {
            percent: 0.5,
            fill: 10,
        };
        assert_eq!(bar.expected_colors(), 2);
    }

    #[test]
    fn test_push_stops_at_expected_count() {
        let mut widget = PendingWidget::new(
            WidgetKind::ProgressBar {
                percent: 1.0,
                fill: 20,
            },
            None,
        );
        assert_eq!(widget.remaining(), 2);
        widget.push(token("red"));
        widget.push(token("blue"));
        widget.push(token("green"));
        assert!(widget.is_complete());
        assert_eq!(widget.collected().len(), 2);
    }

    #[test]
    fn test_data_segments() {
        let mut widget = PendingWidget::new(
            WidgetKind::Data {
                label: "speed".into(),
                data: "12".into(),
            },
            Some(token("white")),
        );
        assert_eq!(widget.prior(), Some(&token("white")));
        widget.push(token("red"));
        widget.push(token("blue"));
        let (segments, prior) = widget.finalize();
        assert_eq!(
            segments,
            vec![
                Segment::new(&token("red"), "speed"),
                Segment::new(&token("000000"), " : "),
                Segment::new(&token("blue"), "12"),
            ]
        );
        assert_eq!(prior, Some(token("white")));
    }

    #[test]
    fn test_slider_segments() {
        let mut widget = PendingWidget::new(
            WidgetKind::Slider {
                min: 0.0,
                max: 100.0,
                current: 50.0,
                fill: 10,
            },
            None,
        );
        widget.push(token("white"));
        widget.push(token("red"));
        widget.push(token("gray"));
        let (segments, prior) = widget.finalize();
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        let track = "─".repeat(10);
        assert_eq!(
            texts,
            vec![
                "0.00",
                format!("「{}", track).as_str(),
                "●",
                format!("{}」", track).as_str(),
                "100.00",
                " | 50.00",
            ]
        );
        assert_eq!(segments[1].color, token("gray"));
        assert_eq!(segments[2].color, token("red"));
        assert!(prior.is_none());
    }

    #[test]
    fn test_progress_bar_segments_full() {
        let mut widget = PendingWidget::new(
            WidgetKind::ProgressBar {
                percent: 1.0,
                fill: 20,
            },
            None,
        );
        widget.push(token("green"));
        widget.push(token("gray"));
        let (segments, _) = widget.finalize();
        assert_eq!(
            segments,
            vec![
                Segment::new(&token("gray"), "［"),
                Segment::new(&token("green"), "█".repeat(20)),
                Segment::new(&token("gray"), "］"),
                Segment::new(&token("green"), " 100.00%"),
            ]
        );
    }

    #[test]
    fn test_progress_bar_segments_empty_drops_blank_fill() {
        let mut widget = PendingWidget::new(
            WidgetKind::ProgressBar {
                percent: 0.0,
                fill: 0,
            },
            None,
        );
        widget.push(token("green"));
        widget.push(token("gray"));
        let (segments, _) = widget.finalize();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].text, format!("{}］", "░".repeat(20)));
        assert_eq!(segments[2].text, " 0.00%");
    }

    #[test]
    fn test_out_of_range_fill_draws_no_negative_cells() {
        let mut widget = PendingWidget::new(
            WidgetKind::ProgressBar {
                percent: 1.5,
                fill: 30,
            },
            None,
        );
        widget.push(token("green"));
        widget.push(token("gray"));
        let (segments, _) = widget.finalize();
        assert_eq!(segments[1].text, "█".repeat(30));
        assert_eq!(segments[2].text, "］");
        assert_eq!(segments[3].text, " 150.00%");
    }

    #[test]
    fn test_fill_index_non_finite() {
        assert_eq!(fill_index(0.0, 1.0, f64::NAN), 0);
        assert_eq!(fill_index(0.0, 1.0, f64::INFINITY), i64::MAX);
        assert_eq!(fill_index(0.0, 1.0, f64::NEG_INFINITY), i64::MIN);
    }

    #[test]
    fn test_saturated_fill_draws_bounded_cells() {
        for fill in [i64::MIN, i64::MAX] {
            let mut widget = PendingWidget::new(
                WidgetKind::Slider {
                    min: 0.0,
                    max: 1.0,
                    current: 0.0,
                    fill,
                },
                Some(token("white")),
            );
            widget.push(token("white"));
            widget.push(token("red"));
            widget.push(token("gray"));
            let (segments, prior) = widget.finalize();
            let track: usize = segments
                .iter()
                .map(|segment| segment.text.matches(SLIDER_TRACK).count())
                .sum();
            assert_eq!(track, MAX_RUN_CELLS as usize);
            assert_eq!(prior.as_ref(), Some(&token("white")));
        }
    }
}
