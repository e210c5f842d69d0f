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


//! Escaping of caller content before it lands in markup.

use std::borrow::Cow;

/// Neutralizes markup-significant characters in caller supplied text.
///
/// The builder routes every escaped append through its configured escaper.
/// Implementations should borrow the input when nothing needs replacing.
pub trait Escaper: Send + Sync {
    /// Escape `text` for inclusion in markup.
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Escapes the five HTML special characters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_html(text)
    }
}

/// Leaves text untouched, for callers that escape content themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassthroughEscaper;

impl Escaper for PassthroughEscaper {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Replaces `&`, `<`, `>`, `"` and `'` with their HTML entities.
///
/// Returns the input borrowed when it contains none of them.
///
/// ```
/// use hudline_markup::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}
