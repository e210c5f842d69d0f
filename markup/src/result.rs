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


//! Error types for the markup crate.
//!
//! Every failure a [`LineBuilder`](crate::LineBuilder) reports is a contract
//! violation by the caller. The error carries the offending call and the line
//! built so far so the mistake can be located from the message alone.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`MarkupError`].
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors produced while building a line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// The builder was used out of order or with invalid arguments.
    #[error("{call}: {reason} (line so far: {line:?})")]
    Usage {
        /// Name of the operation that was rejected
        call: &'static str,
        /// What was wrong with the call
        reason: String,
        /// Contents of the output buffer when the call was rejected
        line: String,
    },
}

impl MarkupError {
    /// Create a usage error for `call` with the buffer contents at the time of failure.
    pub fn usage(call: &'static str, reason: impl Into<String>, line: impl Into<String>) -> Self {
        MarkupError::Usage {
            call,
            reason: reason.into(),
            line: line.into(),
        }
    }

    /// Check if the error is a usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, MarkupError::Usage { .. })
    }

    /// Name of the rejected operation
    pub fn call(&self) -> &'static str {
        match self {
            MarkupError::Usage { call, .. } => call,
        }
    }

    /// Line contents captured when the error was raised
    pub fn line(&self) -> &str {
        match self {
            MarkupError::Usage { line, .. } => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        let error = MarkupError::usage("append", "a widget is waiting for colors", "<b>");
        assert_eq!(
            error.to_string(),
            "append: a widget is waiting for colors (line so far: \"<b>\")"
        );
    }

    #[test]
    fn test_usage_error_accessors() {
        let error = MarkupError::usage("end_color", "no color span is open", "abc");
        assert!(error.is_usage());
        assert_eq!(error.call(), "end_color");
        assert_eq!(error.line(), "abc");
    }

    #[test]
    fn test_markup_error_is_error_trait() {
        let error = MarkupError::usage("start_slider", "min must be less than max", "");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_error_propagation() {
        fn inner_function() -> MarkupResult<i32> {
            Err(MarkupError::usage("append_raw", "inner error", ""))
        }

        fn outer_function() -> MarkupResult<i32> {
            inner_function()?;
            Ok(42)
        }

        let result = outer_function();
        assert!(matches!(result, Err(MarkupError::Usage { call: "append_raw", .. })));
    }
}
