// ABOUTME: Text repair applied to model output before JSON parsing
// ABOUTME: Removes block comments, markdown fences and trailing commas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// Stored as Option so a pattern that fails to compile disables its step
// instead of panicking

static BLOCK_COMMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").ok());

static LEADING_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*```(?:json)?").ok());

static TRAILING_FENCE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"```\s*$").ok());

static TRAILING_COMMA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").ok());

fn apply<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str, replacement: &str) -> Cow<'t, str> {
    pattern
        .as_ref()
        .map_or(Cow::Borrowed(text), |re| re.replace_all(text, replacement))
}

/// Repair common defects in model output
///
/// Steps, in order: strip `/* ... */` comments, strip a leading "```json" or
/// "```" fence and a trailing "```" fence, trim whitespace, drop commas that
/// directly precede `}` or `]`. Commas inside string values that happen to
/// precede a bracket are removed too.
#[must_use]
pub fn clean_json_response(text: &str) -> String {
    let without_comments = apply(&BLOCK_COMMENT, text, "");
    let without_leading = apply(&LEADING_FENCE, &without_comments, "");
    let without_fences = apply(&TRAILING_FENCE, &without_leading, "");
    apply(&TRAILING_COMMA, without_fences.trim(), "$1").into_owned()
}
