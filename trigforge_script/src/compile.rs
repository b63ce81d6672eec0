//! Rendering of statements and triggers into TrigEdit text.
//!
//! A statement renders to one `Tag(arg, arg, ...);` line; a trigger renders
//! to a block with `Conditions:` and `Actions:` sections closed by `}` and
//! the fixed separator line the editor uses to delimit blocks. Rendering is
//! infallible: a malformed statement is a construction-time error in the
//! calling code, not something detected here.

use trigforge_data::{Action, Arg, Statement, StatementSchema, Trigger};

/// Block delimiter the editor's trigger dialog emits between triggers.
pub const TRIGGER_SEPARATOR: &str =
    "//-----------------------------------------------------------------//";

/// Prefix marking a `Comment` action as embedded JSON provenance data.
pub const JSON_COMMENT_PREFIX: &str = "JSON=";

/// Newline style for compiled output.
///
/// The editor traditionally expects Windows line endings; `Lf` is offered for
/// portability. The style is applied after all content assembly, so literal
/// `\n` embedded in statement payloads is translated too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Crlf,
    Lf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Crlf => "\r\n",
            Newline::Lf => "\n",
        }
    }

    /// Rewrites every `\n` in already-assembled text to this style.
    fn apply(self, text: &str) -> String {
        match self {
            Newline::Crlf => text.replace('\n', "\r\n"),
            Newline::Lf => text.to_string(),
        }
    }
}

/// A value already wrapped in a leading and trailing double quote.
fn is_quoted(value: &str) -> bool {
    value.len() >= 3 && value.starts_with('"') && value.ends_with('"')
}

fn render_arg(field: &str, arg: Arg, schema: &StatementSchema, pretty: bool) -> String {
    let text = match arg {
        Arg::Token(token) => token,
        Arg::Number(number) => number.to_string(),
        Arg::Text(text) => {
            if schema.quoted.contains(&field) && !is_quoted(&text) {
                format!("\"{text}\"")
            } else {
                text
            }
        },
    };
    if pretty { format!("{field}={text}") } else { text }
}

fn render_statement(statement: &dyn Statement, pretty: bool) -> String {
    let schema = statement.schema();
    let args = statement.args();
    debug_assert_eq!(
        schema.fields.len(),
        args.len(),
        "schema/argument arity mismatch for {}",
        schema.tag
    );
    let values: Vec<String> = schema
        .fields
        .iter()
        .zip(args)
        .map(|(field, arg)| render_arg(field, arg, schema, pretty))
        .collect();
    format!("{}({});", schema.tag, values.join(", "))
}

/// Compiles one condition or action into its TrigEdit line.
pub fn compile_statement(statement: &dyn Statement) -> String {
    render_statement(statement, false)
}

/// Like [`compile_statement`] but prefixes each value with its field name.
///
/// Debugging aid only: the editor rejects named arguments, and this output
/// must never be fed back to the parser.
pub fn compile_statement_pretty(statement: &dyn Statement) -> String {
    render_statement(statement, true)
}

/// Compiles a trigger into one TrigEdit block, separator line included.
pub fn compile_trigger(trigger: &Trigger, newline: Newline) -> String {
    let players: Vec<&str> = trigger.players.iter().map(|p| p.as_str()).collect();
    let conditions: Vec<String> = trigger
        .conditions
        .iter()
        .map(|c| compile_statement(c))
        .collect();
    let actions: Vec<String> = trigger.actions.iter().map(|a| compile_statement(a)).collect();

    let mut text = format!("Trigger({}){{", players.join(","));
    text.push_str(&format!("\nConditions:\n\t{}\n", conditions.join("\n\t")));
    text.push_str(&format!("\nActions:\n\t{}\n\n", actions.join("\n\t")));
    text.push_str("}\n\n");
    text.push_str(TRIGGER_SEPARATOR);
    // Newline substitution must stay last so payload newlines are covered.
    newline.apply(&text)
}

/// Compiles a batch of triggers into one blob ready to paste into the editor.
///
/// When `metadata` is given, every trigger gets one extra `Comment` action
/// whose text is [`JSON_COMMENT_PREFIX`] followed by the JSON with all double
/// quotes swapped to single quotes (single quotes are not special in the
/// dialect's quoting, so the payload survives the comment's own quoting).
/// Blocks are joined by a blank line and keep input order.
pub fn compile_triggers(
    triggers: &mut [Trigger],
    metadata: Option<&serde_json::Value>,
    newline: Newline,
) -> String {
    if let Some(metadata) = metadata {
        let safe_json = metadata.to_string().replace('"', "'");
        let comment = Action::comment(format!("{JSON_COMMENT_PREFIX}{safe_json}"));
        for trigger in triggers.iter_mut() {
            trigger.add_action(comment.clone());
        }
    }
    let block_gap = newline.as_str().repeat(2);
    let blocks: Vec<String> = triggers.iter().map(|t| compile_trigger(t, newline)).collect();
    blocks.join(&block_gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigforge_data::{Condition, Player, Quantifier, Unit};

    #[test]
    fn display_text_message_renders_with_default_visibility() {
        let action = Action::display_text("Hello World!");
        assert_eq!(
            compile_statement(&action),
            "Display Text Message(Always Display, \"Hello World!\");"
        );
    }

    #[test]
    fn bare_string_fields_are_quoted() {
        let condition = Condition::Bring {
            player: Player::CURRENT_PLAYER,
            unit: Unit::new("\"Terran Marine\""),
            location: "staging area".into(),
            quantifier: Quantifier::AT_LEAST,
            count: 1,
        };
        assert_eq!(
            compile_statement(&condition),
            "Bring(\"Current Player\", \"Terran Marine\", \"staging area\", At least, 1);"
        );
    }

    #[test]
    fn already_quoted_strings_are_not_double_quoted() {
        let action = Action::CenterView {
            location: "\"staging area\"".into(),
        };
        assert_eq!(compile_statement(&action), "Center View(\"staging area\");");
    }

    #[test]
    fn empty_string_in_quoted_field_still_gets_quotes() {
        let action = Action::comment("");
        assert_eq!(compile_statement(&action), "Comment(\"\");");
    }

    #[test]
    fn tokens_are_never_auto_quoted() {
        let condition = Condition::CountdownTimer {
            quantifier: Quantifier::AT_MOST,
            count: 30,
        };
        assert_eq!(compile_statement(&condition), "Countdown Timer(At most, 30);");
    }

    #[test]
    fn pretty_mode_prefixes_field_names() {
        let action = Action::Wait { milliseconds: 500 };
        assert_eq!(compile_statement_pretty(&action), "Wait(milliseconds=500);");
    }

    #[test]
    fn trigger_block_uses_crlf_by_default() {
        let mut triggers = vec![Trigger::new(
            vec![Player::ALL_PLAYERS],
            vec![Condition::Always],
            vec![Action::Victory],
        )];
        let text = compile_triggers(&mut triggers, None, Newline::default());
        assert!(text.contains("Trigger(\"All players\"){\r\n"));
        assert!(text.contains("\r\n\tAlways();\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn metadata_comment_is_appended_to_every_trigger() {
        let trigger = Trigger::new(
            vec![Player::ALL_PLAYERS],
            vec![Condition::Always],
            vec![Action::PreserveTrigger],
        );
        let mut triggers = vec![trigger.clone(), trigger];
        let metadata = serde_json::json!({"system": "Test"});
        let text = compile_triggers(&mut triggers, Some(&metadata), Newline::Lf);
        let expected_line = "\tComment(\"JSON={'system':'Test'}\");";
        assert_eq!(text.matches(expected_line).count(), 2);
        for trigger in &triggers {
            assert_eq!(
                trigger.actions.last(),
                Some(&Action::comment("JSON={'system':'Test'}"))
            );
        }
    }
}
