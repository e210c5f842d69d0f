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


//! Style tag bookkeeping.
//!
//! Bold, italic, underline and strike are independent flags. Size and script
//! each have two mutually exclusive non-normal states; moving from one to the
//! other closes the first before opening the second.
//!
//! Every method returns the markup that has to be appended to make the change,
//! which is empty when the requested state is already in effect.

/// Independently toggled text emphasis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
    /// `<u>`
    Underline,
    /// `<s>`
    Strike,
}

impl Emphasis {
    /// Every emphasis, in the order [`StyleState::clear`] closes them.
    pub const ALL: [Emphasis; 4] = [
        Emphasis::Strike,
        Emphasis::Underline,
        Emphasis::Italic,
        Emphasis::Bold,
    ];

    /// Opening tag.
    pub fn open_tag(&self) -> &'static str {
        match self {
            Emphasis::Bold => "<b>",
            Emphasis::Italic => "<i>",
            Emphasis::Underline => "<u>",
            Emphasis::Strike => "<s>",
        }
    }

    /// Closing tag.
    pub fn close_tag(&self) -> &'static str {
        match self {
            Emphasis::Bold => "</b>",
            Emphasis::Italic => "</i>",
            Emphasis::Underline => "</u>",
            Emphasis::Strike => "</s>",
        }
    }
}

/// Text size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Size {
    /// No size tag is open.
    #[default]
    Normal,
    /// Inside `<big>`.
    Big,
    /// Inside `<small>`.
    Small,
}

impl Size {
    /// Opening tag, `None` for [`Size::Normal`].
    pub fn open_tag(&self) -> Option<&'static str> {
        match self {
            Size::Normal => None,
            Size::Big => Some("<big>"),
            Size::Small => Some("<small>"),
        }
    }

    /// Closing tag, `None` for [`Size::Normal`].
    pub fn close_tag(&self) -> Option<&'static str> {
        match self {
            Size::Normal => None,
            Size::Big => Some("</big>"),
            Size::Small => Some("</small>"),
        }
    }
}

/// Baseline position of text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Script {
    /// No script tag is open.
    #[default]
    Normal,
    /// Inside `<sup>`.
    Super,
    /// Inside `<sub>`.
    Sub,
}

impl Script {
    /// Opening tag, `None` for [`Script::Normal`].
    pub fn open_tag(&self) -> Option<&'static str> {
        match self {
            Script::Normal => None,
            Script::Super => Some("<sup>"),
            Script::Sub => Some("<sub>"),
        }
    }

    /// Closing tag, `None` for [`Script::Normal`].
    pub fn close_tag(&self) -> Option<&'static str> {
        match self {
            Script::Normal => None,
            Script::Super => Some("</sup>"),
            Script::Sub => Some("</sub>"),
        }
    }
}

/// Which style tags are currently open.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub size: Size,
    pub script: Script,
}

impl StyleState {
    /// Returns `true` when no style tag is open.
    pub fn is_clear(&self) -> bool {
        *self == StyleState::default()
    }

    /// Whether `emphasis` is open.
    pub fn is_open(&self, emphasis: Emphasis) -> bool {
        *self.flag(emphasis)
    }

    fn flag(&self, emphasis: Emphasis) -> &bool {
        match emphasis {
            Emphasis::Bold => &self.bold,
            Emphasis::Italic => &self.italic,
            Emphasis::Underline => &self.underline,
            Emphasis::Strike => &self.strike,
        }
    }

    fn flag_mut(&mut self, emphasis: Emphasis) -> &mut bool {
        match emphasis {
            Emphasis::Bold => &mut self.bold,
            Emphasis::Italic => &mut self.italic,
            Emphasis::Underline => &mut self.underline,
            Emphasis::Strike => &mut self.strike,
        }
    }

    /// Open `emphasis`.
    pub fn open(&mut self, emphasis: Emphasis) -> &'static str {
        let flag = self.flag_mut(emphasis);
        if *flag {
            return "";
        }
        *flag = true;
        emphasis.open_tag()
    }

    /// Close `emphasis`.
    pub fn close(&mut self, emphasis: Emphasis) -> &'static str {
        let flag = self.flag_mut(emphasis);
        if !*flag {
            return "";
        }
        *flag = false;
        emphasis.close_tag()
    }

    /// Switch to `size`, closing any conflicting size first.
    pub fn set_size(&mut self, size: Size) -> String {
        let mut markup = String::new();
        if self.size == size {
            return markup;
        }
        markup.extend(self.size.close_tag());
        markup.extend(size.open_tag());
        self.size = size;
        markup
    }

    /// Switch to `script`, closing any conflicting script first.
    pub fn set_script(&mut self, script: Script) -> String {
        let mut markup = String::new();
        if self.script == script {
            return markup;
        }
        markup.extend(self.script.close_tag());
        markup.extend(script.open_tag());
        self.script = script;
        markup
    }

    /// Close everything that is open and return to the default state.
    pub fn clear(&mut self) -> String {
        let mut markup = String::new();
        for emphasis in Emphasis::ALL {
            markup.push_str(self.close(emphasis));
        }
        markup.push_str(&self.set_size(Size::Normal));
        markup.push_str(&self.set_script(Script::Normal));
        markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close_emphasis() {
        let mut state = StyleState::default();
        assert_eq!(state.open(Emphasis::Bold), "<b>");
        assert!(state.bold);
        assert!(state.is_open(Emphasis::Bold));
        assert!(!state.is_open(Emphasis::Italic));
        assert_eq!(state.open(Emphasis::Bold), "");
        assert_eq!(state.close(Emphasis::Bold), "</b>");
        assert_eq!(state.close(Emphasis::Bold), "");
        assert!(state.is_clear());
    }

    #[test]
    fn test_size_switch_closes_previous() {
        let mut state = StyleState::default();
        assert_eq!(state.set_size(Size::Small), "<small>");
        assert_eq!(state.set_size(Size::Big), "</small><big>");
        assert_eq!(state.set_size(Size::Big), "");
        assert_eq!(state.set_size(Size::Normal), "</big>");
        assert_eq!(state.size, Size::Normal);
    }

    #[test]
    fn test_script_switch_closes_previous() {
        let mut state = StyleState::default();
        assert_eq!(state.set_script(Script::Super), "<sup>");
        assert_eq!(state.set_script(Script::Sub), "</sup><sub>");
        assert_eq!(state.set_script(Script::Normal), "</sub>");
    }

    #[test]
    fn test_clear_closes_only_open_tags() {
        let mut state = StyleState::default();
        state.open(Emphasis::Bold);
        state.open(Emphasis::Strike);
        state.set_size(Size::Big);
        state.set_script(Script::Sub);
        assert_eq!(state.clear(), "</s></b></big></sub>");
        assert!(state.is_clear());
        assert_eq!(state.clear(), "");
    }
}
