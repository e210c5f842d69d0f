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


//! Color tokens.
//!
//! A color reaches the output as the `{token}` in `<span style="color:{token}">`.
//! Raw caller input is normalized once into a [`ColorToken`]: an optional `0x` or
//! `#` prefix is stripped and, if what remains is a hexadecimal number, it is
//! rewritten as that number's *decimal* digits. Anything else, symbolic names
//! such as `red` included, passes through unchanged.
//!
//! | Input        | Token        |
//! |--------------|--------------|
//! | `"0xFF0000"` | `"16711680"` |
//! | `"#FF0000"`  | `"16711680"` |
//! | `"FF0000"`   | `"16711680"` |
//! | `"red"`      | `"red"`      |
//!
//! A token that is already a [`ColorToken`] is never normalized a second time.

use std::fmt;

/// A normalized color, ready to be written into a color span.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorToken(String);

impl ColorToken {
    /// Normalize raw caller input into a token.
    pub fn parse(raw: &str) -> ColorToken {
        let stripped = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix('#'))
            .unwrap_or(raw);
        match parse_hex(stripped) {
            Some(value) => ColorToken(value.to_string()),
            None => ColorToken(stripped.to_string()),
        }
    }

    /// Wrap an already normalized token without touching it.
    pub fn from_normalized(token: impl Into<String>) -> ColorToken {
        ColorToken(token.into())
    }

    /// The token text as written into markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty token, which never opens a span.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Only plain hex digits count; signs and anything wider than 32 bits fall
// through as symbolic text.
fn parse_hex(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16).ok()
}

/// Conversion into a [`ColorToken`].
///
/// Strings are normalized; tokens and named colors are used as they are.
pub trait IntoColorToken {
    /// Produce the token this value stands for.
    fn into_color_token(self) -> ColorToken;
}

impl IntoColorToken for ColorToken {
    fn into_color_token(self) -> ColorToken {
        self
    }
}

impl IntoColorToken for &ColorToken {
    fn into_color_token(self) -> ColorToken {
        self.clone()
    }
}

impl IntoColorToken for &str {
    fn into_color_token(self) -> ColorToken {
        ColorToken::parse(self)
    }
}

impl IntoColorToken for String {
    fn into_color_token(self) -> ColorToken {
        ColorToken::parse(&self)
    }
}

impl IntoColorToken for &String {
    fn into_color_token(self) -> ColorToken {
        ColorToken::parse(self)
    }
}

impl IntoColorToken for NamedColor {
    fn into_color_token(self) -> ColorToken {
        self.token()
    }
}

/// Raw token of the separator between a data pair's label and value.
pub(crate) const SEPARATOR_COLOR: &str = "000000";

/// The preset colors with convenience methods on the builder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Yellow,
    Blue,
    Orange,
    Green,
    Violet,
    Lime,
    Cyan,
    Purple,
    Magenta,
    Pink,
    Gray,
    LightGray,
    DarkGray,
    Black,
    White,
}

impl NamedColor {
    /// Every preset, in declaration order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Red,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Orange,
        NamedColor::Green,
        NamedColor::Violet,
        NamedColor::Lime,
        NamedColor::Cyan,
        NamedColor::Purple,
        NamedColor::Magenta,
        NamedColor::Pink,
        NamedColor::Gray,
        NamedColor::LightGray,
        NamedColor::DarkGray,
        NamedColor::Black,
        NamedColor::White,
    ];

    /// The raw token handed to color normalization.
    pub fn raw(&self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Orange => "FFA500",
            NamedColor::Green => "green",
            NamedColor::Violet => "EE82EE",
            NamedColor::Lime => "lime",
            NamedColor::Cyan => "cyan",
            NamedColor::Purple => "purple",
            NamedColor::Magenta => "magenta",
            NamedColor::Pink => "FFC0CB",
            NamedColor::Gray => "gray",
            NamedColor::LightGray => "D3D3D3",
            NamedColor::DarkGray => "A9A9A9",
            NamedColor::Black => "black",
            NamedColor::White => "white",
        }
    }

    /// The normalized token for this preset.
    pub fn token(&self) -> ColorToken {
        ColorToken::parse(self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_prefixes_normalize_alike() {
        let expected = ColorToken::from_normalized("16711680");
        assert_eq!(ColorToken::parse("0xFF0000"), expected);
        assert_eq!(ColorToken::parse("#FF0000"), expected);
        assert_eq!(ColorToken::parse("FF0000"), expected);
        assert_eq!(ColorToken::parse("ff0000"), expected);
    }

    #[test]
    fn test_symbolic_names_pass_through() {
        assert_eq!(ColorToken::parse("red").as_str(), "red");
        assert_eq!(ColorToken::parse("magenta").as_str(), "magenta");
        assert_eq!(ColorToken::parse("#zz").as_str(), "zz");
    }

    #[test]
    fn test_hex_looking_names_become_decimal() {
        assert_eq!(ColorToken::parse("bad").as_str(), "2989");
        assert_eq!(ColorToken::parse("000000").as_str(), "0");
    }

    #[test]
    fn test_signs_and_overflow_pass_through() {
        assert_eq!(ColorToken::parse("+ff").as_str(), "+ff");
        assert_eq!(ColorToken::parse("-1").as_str(), "-1");
        assert_eq!(ColorToken::parse("1FFFFFFFF").as_str(), "1FFFFFFFF");
        assert_eq!(ColorToken::parse("FFFFFFFF").as_str(), "4294967295");
    }

    #[test]
    fn test_empty_input() {
        assert!(ColorToken::parse("").is_empty());
        assert!(ColorToken::parse("#").is_empty());
        assert!(ColorToken::parse("0x").is_empty());
    }

    #[test]
    fn test_token_is_not_renormalized() {
        let token = ColorToken::parse("#FF0000");
        assert_eq!(token.clone().into_color_token(), token);
        assert_eq!((&token).into_color_token(), token);
    }

    #[test]
    fn test_named_color_tokens() {
        assert_eq!(NamedColor::Red.token().as_str(), "red");
        assert_eq!(NamedColor::Orange.token().as_str(), "16753920");
        assert_eq!(NamedColor::LightGray.token().as_str(), "13882323");
        assert_eq!(NamedColor::DarkGray.token().as_str(), "11119017");
        assert_eq!(NamedColor::ALL.len(), 16);
        for color in NamedColor::ALL {
            assert!(!color.token().is_empty());
        }
    }
}
