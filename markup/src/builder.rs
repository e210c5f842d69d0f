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


//! The line builder.
//!
//! A [`LineBuilder`] accumulates one line of markup. Calls either act on the
//! output directly or, while a widget is waiting for its colors, feed that
//! widget instead:
//!
//! * color calls ([`LineBuilder::set_color`] and the named colors) are collected
//!   by the pending widget until it has as many as it needs, at which point the
//!   widget is written out;
//! * appends are rejected with [`MarkupError::Usage`];
//! * style toggles always write straight to the output.
//!
//! ```
//! use hudline_markup::LineBuilder;
//!
//! # fn main() -> hudline_markup::MarkupResult<()> {
//! let line = LineBuilder::new()
//!     .bold()
//!     .append("Arm")?
//!     .unbold()
//!     .append(" ")?
//!     .start_progress_bar(0.0, 100.0, 75.0)?
//!     .green()
//!     .dark_gray()
//!     .render();
//! # Ok(())
//! # }
//! ```

use crate::clock::Clock;
use crate::color::{ColorToken, IntoColorToken, NamedColor};
use crate::config::MarkupConfig;
use crate::escape::Escaper;
use crate::result::{MarkupError, MarkupResult};
use crate::spinner::{DEFAULT_PHASE_LENGTH, Spinner, phase_index};
use crate::style::{Emphasis, Script, Size, StyleState};
use crate::widget::{PendingWidget, Segment, WidgetKind, fill_index, percent};
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, trace};

const SPAN_CLOSE: &str = "</span>";

/// Stateful builder for a single line of markup.
#[derive(Clone, Debug)]
pub struct LineBuilder {
    buffer: String,
    color: ColorToken,
    span_open: bool,
    styles: StyleState,
    pending: Option<PendingWidget>,
    config: MarkupConfig,
}

impl Default for LineBuilder {
    fn default() -> Self {
        LineBuilder::new()
    }
}

impl LineBuilder {
    /// Create an empty builder with the default configuration.
    pub fn new() -> LineBuilder {
        LineBuilder::with_config(MarkupConfig::default())
    }

    /// Create an empty builder using `config`.
    pub fn with_config(config: MarkupConfig) -> LineBuilder {
        LineBuilder {
            buffer: String::with_capacity(config.initial_capacity),
            color: ColorToken::default(),
            span_open: false,
            styles: StyleState::default(),
            pending: None,
            config,
        }
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    /// The markup written so far, without closing any open span.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Color of the open span, `None` when no span is open.
    pub fn current_color(&self) -> Option<&ColorToken> {
        self.span_open.then_some(&self.color)
    }

    pub fn is_span_open(&self) -> bool {
        self.span_open
    }

    pub fn styles(&self) -> &StyleState {
        &self.styles
    }

    /// Returns `true` while a widget is waiting for colors.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Colors the pending widget still needs, zero when nothing is pending.
    pub fn colors_remaining(&self) -> usize {
        self.pending.as_ref().map_or(0, PendingWidget::remaining)
    }

    fn usage(&self, call: &'static str, reason: impl Into<String>) -> MarkupError {
        let error = MarkupError::usage(call, reason, self.buffer.as_str());
        debug!("Rejected builder call: {}", error);
        error
    }

    fn ensure_idle(&self, call: &'static str) -> MarkupResult<()> {
        match &self.pending {
            Some(widget) => Err(self.usage(
                call,
                format!(
                    "{} widget is still waiting for {} color(s)",
                    widget.kind().name(),
                    widget.remaining()
                ),
            )),
            None => Ok(()),
        }
    }

    fn push_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn push_escaped(&mut self, text: &str) {
        let escaped = self.config.escaper.escape(text);
        self.buffer.push_str(&escaped);
    }

    // ---------------------------------------------------------------------
    // Appends
    // ---------------------------------------------------------------------

    /// Append the escaped text form of `value`.
    pub fn append(&mut self, value: impl Display) -> MarkupResult<&mut Self> {
        self.ensure_idle("append")?;
        self.push_escaped(&value.to_string());
        Ok(self)
    }

    /// Append the text form of `value` verbatim.
    pub fn append_raw(&mut self, value: impl Display) -> MarkupResult<&mut Self> {
        self.ensure_idle("append_raw")?;
        self.push_raw(&value.to_string());
        Ok(self)
    }

    /// Append the escaped text form of `value` `times` times.
    pub fn repeat(&mut self, value: impl Display, times: usize) -> MarkupResult<&mut Self> {
        self.ensure_idle("repeat")?;
        let escaped = self.config.escaper.escape(&value.to_string()).repeat(times);
        self.push_raw(&escaped);
        Ok(self)
    }

    /// Append the configured line break marker.
    pub fn newline(&mut self) -> MarkupResult<&mut Self> {
        self.ensure_idle("newline")?;
        let newline = self.config.newline.clone();
        self.push_raw(&newline);
        Ok(self)
    }

    // ---------------------------------------------------------------------
    // Colors
    // ---------------------------------------------------------------------

    /// Switch the text color, or hand the color to a pending widget.
    ///
    /// With no widget pending, any open span is closed and a span in the new
    /// color is opened. An empty token only closes the open span.
    pub fn set_color(&mut self, color: impl IntoColorToken) -> &mut Self {
        let token = color.into_color_token();
        let Some(widget) = self.pending.as_mut() else {
            self.open_span(token);
            return self;
        };
        widget.push(token);
        if widget.is_complete() {
            if let Some(widget) = self.pending.take() {
                self.finish_widget(widget);
            }
        }
        self
    }

    fn open_span(&mut self, token: ColorToken) {
        self.close_span();
        if token.is_empty() {
            return;
        }
        let escaped = self.config.escaper.escape(token.as_str()).into_owned();
        self.buffer.push_str("<span style=\"color:");
        self.buffer.push_str(&escaped);
        self.buffer.push_str("\">");
        self.color = token;
        self.span_open = true;
    }

    fn close_span(&mut self) {
        if self.span_open {
            self.push_raw(SPAN_CLOSE);
            self.span_open = false;
        }
    }

    /// Close the open color span.
    pub fn end_color(&mut self) -> MarkupResult<&mut Self> {
        if !self.span_open {
            return Err(self.usage("end_color", "no color span is open"));
        }
        self.close_span();
        Ok(self)
    }

    /// Switch to one of the preset colors.
    pub fn named(&mut self, color: NamedColor) -> &mut Self {
        self.set_color(color)
    }

    pub fn red(&mut self) -> &mut Self {
        self.named(NamedColor::Red)
    }

    pub fn yellow(&mut self) -> &mut Self {
        self.named(NamedColor::Yellow)
    }

    pub fn blue(&mut self) -> &mut Self {
        self.named(NamedColor::Blue)
    }

    pub fn orange(&mut self) -> &mut Self {
        self.named(NamedColor::Orange)
    }

    pub fn green(&mut self) -> &mut Self {
        self.named(NamedColor::Green)
    }

    pub fn violet(&mut self) -> &mut Self {
        self.named(NamedColor::Violet)
    }

    pub fn lime(&mut self) -> &mut Self {
        self.named(NamedColor::Lime)
    }

    pub fn cyan(&mut self) -> &mut Self {
        self.named(NamedColor::Cyan)
    }

    pub fn purple(&mut self) -> &mut Self {
        self.named(NamedColor::Purple)
    }

    pub fn magenta(&mut self) -> &mut Self {
        self.named(NamedColor::Magenta)
    }

    pub fn pink(&mut self) -> &mut Self {
        self.named(NamedColor::Pink)
    }

    pub fn gray(&mut self) -> &mut Self {
        self.named(NamedColor::Gray)
    }

    pub fn light_gray(&mut self) -> &mut Self {
        self.named(NamedColor::LightGray)
    }

    pub fn dark_gray(&mut self) -> &mut Self {
        self.named(NamedColor::DarkGray)
    }

    pub fn black(&mut self) -> &mut Self {
        self.named(NamedColor::Black)
    }

    pub fn white(&mut self) -> &mut Self {
        self.named(NamedColor::White)
    }

    // ---------------------------------------------------------------------
    // Styles
    // ---------------------------------------------------------------------

    fn open_emphasis(&mut self, emphasis: Emphasis) -> &mut Self {
        let tag = self.styles.open(emphasis);
        self.push_raw(tag);
        self
    }

    fn close_emphasis(&mut self, emphasis: Emphasis) -> &mut Self {
        let tag = self.styles.close(emphasis);
        self.push_raw(tag);
        self
    }

    /// Write `<b>` and mark it open.
    ///
    /// Writes nothing while `<b>` is already open.
    pub fn bold(&mut self) -> &mut Self {
        self.open_emphasis(Emphasis::Bold)
    }

    /// Write `</b>` and mark it closed.
    ///
    /// Writes nothing unless `<b>` is open.
    pub fn unbold(&mut self) -> &mut Self {
        self.close_emphasis(Emphasis::Bold)
    }

    /// Write `<i>` and mark it open.
    ///
    /// Writes nothing while `<i>` is already open.
    pub fn italic(&mut self) -> &mut Self {
        self.open_emphasis(Emphasis::Italic)
    }

    /// Write `</i>` and mark it closed.
    ///
    /// Writes nothing unless `<i>` is open.
    pub fn unitalic(&mut self) -> &mut Self {
        self.close_emphasis(Emphasis::Italic)
    }

    /// Write `<u>` and mark it open.
    ///
    /// Writes nothing while `<u>` is already open.
    pub fn underline(&mut self) -> &mut Self {
        self.open_emphasis(Emphasis::Underline)
    }

    /// Write `</u>` and mark it closed.
    ///
    /// Writes nothing unless `<u>` is open.
    pub fn ununderline(&mut self) -> &mut Self {
        self.close_emphasis(Emphasis::Underline)
    }

    /// Write `<s>` and mark it open.
    ///
    /// Writes nothing while `<s>` is already open.
    pub fn strike(&mut self) -> &mut Self {
        self.open_emphasis(Emphasis::Strike)
    }

    /// Write `</s>` and mark it closed.
    ///
    /// Writes nothing unless `<s>` is open.
    pub fn unstrike(&mut self) -> &mut Self {
        self.close_emphasis(Emphasis::Strike)
    }

    fn set_size(&mut self, size: Size) -> &mut Self {
        let markup = self.styles.set_size(size);
        self.push_raw(&markup);
        self
    }

    fn set_script(&mut self, script: Script) -> &mut Self {
        let markup = self.styles.set_script(script);
        self.push_raw(&markup);
        self
    }

    /// Enlarge text, closing `<small>` first if it is open.
    pub fn big(&mut self) -> &mut Self {
        self.set_size(Size::Big)
    }

    /// Shrink text, closing `<big>` first if it is open.
    pub fn small(&mut self) -> &mut Self {
        self.set_size(Size::Small)
    }

    /// Close whichever of `<big>` or `<small>` is open.
    pub fn normal_size(&mut self) -> &mut Self {
        self.set_size(Size::Normal)
    }

    /// Raise text, closing `<sub>` first if it is open.
    pub fn superscript(&mut self) -> &mut Self {
        self.set_script(Script::Super)
    }

    /// Lower text, closing `<sup>` first if it is open.
    pub fn subscript(&mut self) -> &mut Self {
        self.set_script(Script::Sub)
    }

    /// Close whichever of `<sup>` or `<sub>` is open.
    pub fn normal_script(&mut self) -> &mut Self {
        self.set_script(Script::Normal)
    }

    /// Close every open style tag.
    pub fn clear_styles(&mut self) -> &mut Self {
        let markup = self.styles.clear();
        self.push_raw(&markup);
        self
    }

    // ---------------------------------------------------------------------
    // Widgets
    // ---------------------------------------------------------------------

    fn start_widget(&mut self, kind: WidgetKind) -> &mut Self {
        let prior = self.current_color().cloned();
        trace!(
            widget = kind.name(),
            colors = kind.expected_colors(),
            "Widget waiting for colors"
        );
        self.pending = Some(PendingWidget::new(kind, prior));
        self
    }

    fn ensure_range(&self, call: &'static str, min: f64, max: f64) -> MarkupResult<()> {
        // Written so that NaN bounds are rejected as well.
        if min < max {
            Ok(())
        } else {
            Err(self.usage(
                call,
                format!("min ({}) must be less than max ({})", min, max),
            ))
        }
    }

    /// Start a `label : data` pair.
    ///
    /// The next two colors are the label color and the data color.
    pub fn start_data(
        &mut self,
        label: impl Display,
        data: impl Display,
    ) -> MarkupResult<&mut Self> {
        self.ensure_idle("start_data")?;
        Ok(self.start_widget(WidgetKind::Data {
            label: label.to_string(),
            data: data.to_string(),
        }))
    }

    /// Start a slider showing `current` between `min` and `max`.
    ///
    /// The next three colors are the endpoint label color, the fill color and
    /// the track color.
    pub fn start_slider(&mut self, min: f64, max: f64, current: f64) -> MarkupResult<&mut Self> {
        self.ensure_idle("start_slider")?;
        self.ensure_range("start_slider", min, max)?;
        Ok(self.start_widget(WidgetKind::Slider {
            min,
            max,
            current,
            fill: fill_index(min, max, current),
        }))
    }

    /// Start a progress bar for `current` between `min` and `max`.
    ///
    /// The next two colors are the fill color and the track color.
    pub fn start_progress_bar(
        &mut self,
        min: f64,
        max: f64,
        current: f64,
    ) -> MarkupResult<&mut Self> {
        self.ensure_idle("start_progress_bar")?;
        self.ensure_range("start_progress_bar", min, max)?;
        Ok(self.start_widget(WidgetKind::ProgressBar {
            percent: percent(min, max, current),
            fill: fill_index(min, max, current),
        }))
    }

    fn finish_widget(&mut self, widget: PendingWidget) {
        trace!(widget = widget.kind().name(), "Rendering widget");
        let (segments, prior) = widget.finalize();
        for Segment { color, text } in segments {
            self.open_span(color);
            self.push_escaped(&text);
        }
        match prior {
            Some(color) => self.open_span(color),
            None => self.close_span(),
        }
    }

    // ---------------------------------------------------------------------
    // Spinners
    // ---------------------------------------------------------------------

    /// Append the phase of `phases` current at this moment.
    ///
    /// The shown phase advances every `phase_length` and is shifted by
    /// `offset` phases. A `replacement` is appended instead of any phase.
    pub fn spinner<S: AsRef<str>>(
        &mut self,
        phases: &[S],
        phase_length: Duration,
        offset: i64,
        replacement: Option<&str>,
    ) -> MarkupResult<&mut Self> {
        self.ensure_idle("spinner")?;
        if let Some(replacement) = replacement {
            return self.append(replacement);
        }
        if phases.is_empty() {
            return Err(self.usage("spinner", "spinner has no phases"));
        }
        let phase_millis = phase_length.as_millis();
        if phase_millis == 0 {
            return Err(self.usage("spinner", "phase length must be at least one millisecond"));
        }
        let phase_millis = u64::try_from(phase_millis).unwrap_or(u64::MAX);
        let index = phase_index(
            self.config.clock.now_millis(),
            phase_millis,
            offset,
            phases.len(),
        );
        self.append(phases[index].as_ref())
    }

    /// Append a preset spinner with the default phase length and no offset.
    pub fn spinner_preset(
        &mut self,
        spinner: Spinner,
        replacement: Option<&str>,
    ) -> MarkupResult<&mut Self> {
        self.spinner(spinner.phases(), DEFAULT_PHASE_LENGTH, 0, replacement)
    }

    pub fn default_spinner(&mut self, replacement: Option<&str>) -> MarkupResult<&mut Self> {
        self.spinner_preset(Spinner::Braille, replacement)
    }

    pub fn dots_spinner(&mut self, replacement: Option<&str>) -> MarkupResult<&mut Self> {
        self.spinner_preset(Spinner::Dots, replacement)
    }

    pub fn line_spinner(&mut self, replacement: Option<&str>) -> MarkupResult<&mut Self> {
        self.spinner_preset(Spinner::Line, replacement)
    }

    pub fn noise_spinner(&mut self, replacement: Option<&str>) -> MarkupResult<&mut Self> {
        self.spinner_preset(Spinner::Noise, replacement)
    }

    // ---------------------------------------------------------------------
    // Finalization
    // ---------------------------------------------------------------------

    /// Close any open color span and return the line.
    ///
    /// The builder stays usable; calling `render` again without further
    /// changes returns the same text.
    pub fn render(&mut self) -> String {
        self.close_span();
        self.buffer.clone()
    }
}
