use thiserror::Error;

use super::constants::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseConditionError {
    #[error("not a condition: {:?} (expected one of true/false, yes/no, on/off, 1/0)", .text)]
    Unrecognized { text: String },
}

/// Reads a condition written as text, e.g. a shell variable.
///
/// Surrounding whitespace is ignored and case does not matter. The empty
/// string counts as false.
pub fn parse_condition(text: &str) -> Result<bool, ParseConditionError> {
    let t = text.trim().to_ascii_lowercase();
    if TRUTHY.contains(t.as_str()) {
        Ok(true)
    } else if FALSY.contains(t.as_str()) {
        Ok(false)
    } else {
        Err(ParseConditionError::Unrecognized {
            text: text.to_string(),
        })
    }
}
