//! trigforge_script: compiler and parser for TrigEdit trigger text.
//!
//! The compiler renders [`trigforge_data`] statements and triggers into the
//! text dialect a map editor's trigger dialog accepts; the parser reads such
//! text back into raw name/argument form for tooling. Both directions are
//! pure, stateless string processing; file I/O stays in the CLI.

pub mod compile;
pub mod parser;

pub use compile::{
    JSON_COMMENT_PREFIX, Newline, TRIGGER_SEPARATOR, compile_statement, compile_statement_pretty,
    compile_trigger, compile_triggers,
};
pub use parser::{
    ParseError, ParsedStatement, ParsedTrigger, extract_triggers, parse_comma_separated_args,
    parse_json_comment, parse_statement,
};
