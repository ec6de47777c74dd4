//! Sub-rule evaluator
//!
//! Looks for an expectation marker anywhere in the lowercased expression, in
//! priority order:
//!
//! 1. `-> exists`
//! 2. `-> missing`
//! 3. a trailing `-> regex:<pattern>`
//!
//! Expressions without a marker pass. Probe errors always fail, whatever the
//! marker says.

use regex::RegexBuilder;

use crate::core::models::{FILE_EXISTS, FILE_MISSING, Observation, SubruleVerdict};

/// Judge one observation
#[must_use]
pub fn evaluate_subrule(observation: &Observation) -> SubruleVerdict {
    let value = match &observation.outcome {
        Ok(value) => value.as_str(),
        Err(err) => return SubruleVerdict::fail(err.to_string()),
    };

    let expression = observation.expression.to_lowercase();

    if expression.contains("-> exists") {
        return if value == FILE_EXISTS {
            SubruleVerdict::pass("file found")
        } else {
            SubruleVerdict::fail(format!("file not found ({value})"))
        };
    }

    if expression.contains("-> missing") {
        return if value == FILE_MISSING {
            SubruleVerdict::pass("file is missing")
        } else {
            SubruleVerdict::fail(format!("file is present ({value})"))
        };
    }

    if let Some(pattern) = regex_marker(&expression) {
        return match regex_prefix_match(pattern, value) {
            Ok(true) => SubruleVerdict::pass("regex matched"),
            Ok(false) => {
                SubruleVerdict::fail(format!("regex '{pattern}' did not match '{value}'"))
            },
            Err(err) => SubruleVerdict::fail(format!("invalid regex '{pattern}': {err}")),
        };
    }

    SubruleVerdict::pass("no condition recognized")
}

/// Match `pattern` against `value` starting at position zero
///
/// This is a prefix search, not a whole-string match: `^windows 10` and
/// `windows` both match `Windows 10 Pro`. Matching ignores case because
/// patterns arrive case-folded with their expression while values do not.
pub fn regex_prefix_match(pattern: &str, value: &str) -> Result<bool, regex::Error> {
    let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
    // Leftmost-first: a match starting at 0 is always the one reported
    Ok(re.find(value).is_some_and(|m| m.start() == 0))
}

/// Extract the pattern of the first `->\s*regex:<pattern>` running to the end
/// of the expression
fn regex_marker(expression: &str) -> Option<&str> {
    expression.match_indices("->").find_map(|(idx, sep)| {
        let pattern = expression[idx + sep.len()..].trim_start().strip_prefix("regex:")?;
        (!pattern.is_empty() && !pattern.contains('\n')).then(|| pattern.trim())
    })
}
