//! Parsing of existing TrigEdit text back into structured form.
//!
//! The inverse of [`crate::compile`]: splits a multi-trigger blob into
//! blocks, pulls the players/conditions/actions out of each block, and
//! tokenizes a single statement into its name and raw argument strings.
//! Structural mismatches are reported and parsing proceeds with what could
//! be extracted; only a statement that cannot be read at all surfaces as an
//! error, so the caller decides between skipping and aborting.

use std::sync::LazyLock;

use log::error;
use regex::Regex;
use serde::Serialize;

use crate::compile::{JSON_COMMENT_PREFIX, TRIGGER_SEPARATOR};

static PLAYERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Trigger\((?P<players>[^)]+?)\)\{").expect("players regex"));
static CONDITIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Conditions:(?P<conditions>.+?)Actions:").expect("conditions regex")
});
static ACTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Actions:(?P<actions>.+)").expect("actions regex"));
static STATEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(?P<name>[^(]+)\((?P<args>.*)\)$").expect("statement regex"));
static JSON_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"JSON=(?P<json>.+?)"\);$"#).expect("json comment regex"));

/// Errors raised for text that cannot be parsed at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unable to extract players from trigger: {0}")]
    TriggerHeader(String),
    #[error("unable to parse trigger statement: {0}")]
    Statement(String),
}

/// One trigger block as extracted from TrigEdit text: the raw players string
/// plus each condition and action statement, still untyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTrigger {
    pub players: String,
    pub conditions: Vec<String>,
    pub actions: Vec<String>,
}

/// A statement split into its name and raw argument tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedStatement {
    pub name: String,
    pub args: Vec<String>,
}

/// Lazily yields one [`ParsedTrigger`] per separator-delimited block.
///
/// Whitespace-only blocks are skipped. A block whose `Trigger(...){` header
/// cannot be found is logged and dropped; a block missing its `Conditions:`
/// or `Actions:` section is logged and yielded with that section empty.
pub fn extract_triggers(text: &str) -> impl Iterator<Item = ParsedTrigger> + '_ {
    text.split(TRIGGER_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter_map(|block| match parse_trigger_block(block) {
            Ok(trigger) => Some(trigger),
            Err(err) => {
                error!("{err}");
                None
            },
        })
}

fn parse_trigger_block(block: &str) -> Result<ParsedTrigger, ParseError> {
    let players = PLAYERS_RE
        .captures(block)
        .ok_or_else(|| ParseError::TriggerHeader(block.to_string()))?["players"]
        .to_string();
    let conditions = match CONDITIONS_RE.captures(block) {
        Some(caps) => split_statements(&caps["conditions"]),
        None => {
            error!("unable to extract conditions from trigger: {block}");
            Vec::new()
        },
    };
    let actions = match ACTIONS_RE.captures(block) {
        Some(caps) => {
            let mut actions = split_statements(&caps["actions"]);
            // The closing brace lands in this section when the last action's
            // payload itself contains braces (JSON comments).
            actions.retain(|statement| statement != "}");
            actions
        },
        None => {
            error!("unable to extract actions from trigger: {block}");
            Vec::new()
        },
    };
    Ok(ParsedTrigger {
        players,
        conditions,
        actions,
    })
}

fn split_statements(section: &str) -> Vec<String> {
    section
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one statement into its name and raw arguments.
///
/// `Deaths("Current Player", "Protoss Observer", At least, 1)` yields name
/// `Deaths` and four argument tokens; `Always()` yields no tokens. Embedded
/// parentheses and newlines inside the argument list are allowed.
pub fn parse_statement(text: &str) -> Result<ParsedStatement, ParseError> {
    let caps = STATEMENT_RE
        .captures(text)
        .ok_or_else(|| ParseError::Statement(text.to_string()))?;
    Ok(ParsedStatement {
        name: caps["name"].to_string(),
        args: parse_comma_separated_args(&caps["args"]),
    })
}

/// Splits a raw argument string on commas outside of double quotes.
///
/// A `"` always toggles the in-quote flag: escaped or doubled quotes inside a
/// quoted argument are not handled, matching the dialect's own quoting. Each
/// token is trimmed of surrounding whitespace.
pub fn parse_comma_separated_args(raw_args: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut inside_quote = false;
    for car in raw_args.chars() {
        match car {
            ',' if !inside_quote => args.push(std::mem::take(&mut current)),
            '"' => {
                current.push(car);
                inside_quote = !inside_quote;
            },
            _ => current.push(car),
        }
    }
    if !current.is_empty() {
        args.push(current);
    }
    args.into_iter().map(|arg| arg.trim().to_string()).collect()
}

/// Recovers JSON provenance data from a compiled `Comment` action.
///
/// Expects the quoted tail of the compiled line (everything after the
/// statement name's opening parenthesis), i.e. `"JSON=...");` with the
/// payload's double quotes swapped to single quotes by
/// [`crate::compile::compile_triggers`].
pub fn parse_json_comment(text: &str) -> Option<serde_json::Value> {
    let caps = JSON_COMMENT_RE.captures(text)?;
    let json = caps["json"].replace('\'', "\"");
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(err) => {
            error!("unable to decode {JSON_COMMENT_PREFIX} comment '{text}': {err}");
            None
        },
    }
}
