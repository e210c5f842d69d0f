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


//! Builds single lines of color and style markup for text-only displays.

mod builder;
mod clock;
mod color;
mod config;
mod escape;
mod result;
pub mod spinner;
pub mod style;
pub mod widget;

pub use self::builder::LineBuilder;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::color::{ColorToken, IntoColorToken, NamedColor};
pub use self::config::MarkupConfig;
pub use self::escape::{Escaper, HtmlEscaper, PassthroughEscaper, escape_html};
pub use self::result::{MarkupError, MarkupResult};
pub use self::spinner::Spinner;
pub use self::style::{Emphasis, Script, Size, StyleState};
pub use self::widget::{BAR_WIDTH, PendingWidget, Segment, WidgetKind};
