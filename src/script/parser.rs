use super::models::{Intent, ScriptLine};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown intent '{keyword}'")]
    UnknownIntent { line: usize, keyword: String },

    #[error("line {line}: '{keyword}' expects an argument")]
    MissingArgument { line: usize, keyword: String },

    #[error("line {line}: '{keyword}' takes no argument")]
    UnexpectedArgument { line: usize, keyword: String },

    #[error("line {line}: '{value}' is not a position (positions start at 1)")]
    InvalidPosition { line: usize, value: String },
}

/// Reads a script from `path`, or from stdin when `path` is `-`.
pub fn parse_script_file(path: &str) -> Result<Vec<ScriptLine>> {
    let content = if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read script from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read script file: {}", path))?
    };

    Ok(parse_script(&content)?)
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if let Some(intent) = parse_line(line, index + 1)? {
            lines.push(ScriptLine::new(intent, index + 1));
        }
    }

    Ok(lines)
}

fn parse_line(line: &str, line_number: usize) -> Result<Option<Intent>, ScriptError> {
    let trimmed = line.trim();

    // Skip blank lines and comments
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (keyword, argument) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    let intent = match keyword.to_ascii_lowercase().as_str() {
        "add" => {
            if argument.is_empty() {
                return Err(missing_argument(keyword, line_number));
            }
            Intent::Add(argument.to_string())
        }
        "remove" => {
            if argument.is_empty() {
                return Err(missing_argument(keyword, line_number));
            }
            Intent::Remove(parse_position(argument, line_number)?)
        }
        "clear" | "undo" => {
            if !argument.is_empty() {
                return Err(ScriptError::UnexpectedArgument {
                    line: line_number,
                    keyword: keyword.to_string(),
                });
            }
            if keyword.eq_ignore_ascii_case("clear") {
                Intent::Clear
            } else {
                Intent::Undo
            }
        }
        _ => {
            return Err(ScriptError::UnknownIntent {
                line: line_number,
                keyword: keyword.to_string(),
            });
        }
    };

    Ok(Some(intent))
}

fn missing_argument(keyword: &str, line_number: usize) -> ScriptError {
    ScriptError::MissingArgument {
        line: line_number,
        keyword: keyword.to_string(),
    }
}

// Positions are one-based on the way in, zero-based inside.
fn parse_position(value: &str, line_number: usize) -> Result<usize, ScriptError> {
    match value.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(ScriptError::InvalidPosition {
            line: line_number,
            value: value.to_string(),
        }),
    }
}
