//! CLI entry point for trigforge_script.
//! Usage: cargo run -p trigforge_script -- parse triggers.trig

use std::{env, fs, process};

use log::error;
use serde::Serialize;

use trigforge_script::{ParsedStatement, extract_triggers, parse_statement};

#[derive(Debug, Serialize)]
struct TriggerDump {
    players: String,
    conditions: Vec<ParsedStatement>,
    actions: Vec<ParsedStatement>,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    // Accept either:
    // 1) cargo run: <bin> -- <cmd> <args>
    // 2) direct:    <bin> <cmd> <args>
    let rest: Vec<String> = match args.as_slice() {
        [_, flag, cmd, tail @ ..] if flag == "--" && (cmd == "parse" || cmd == "lint") => {
            let mut v = vec![cmd.clone()];
            v.extend_from_slice(tail);
            v
        },
        [_, cmd, tail @ ..] if cmd == "parse" || cmd == "lint" => {
            let mut v = vec![cmd.clone()];
            v.extend_from_slice(tail);
            v
        },
        _ => {
            eprintln!(
                "Usage:\n  trigforge_script parse <file.trig> [--out <out.json>]\n  trigforge_script lint <file.trig>"
            );
            process::exit(2);
        },
    };
    let cmd = &rest[0];
    if cmd == "parse" {
        run_parse(&rest[1..]);
    } else if cmd == "lint" {
        run_lint(&rest[1..]);
    } else {
        eprintln!("unknown command: {}", cmd);
        process::exit(2);
    }
}

fn read_trigger_text(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: unable to read '{}': {}", path, e);
        process::exit(1);
    })
}

fn run_parse(args: &[String]) {
    let mut path: Option<String> = None;
    let mut out_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--out" {
            if i + 1 >= args.len() {
                eprintln!("--out requires a filepath");
                process::exit(2);
            }
            out_path = Some(args[i + 1].clone());
            i += 2;
            continue;
        }
        if path.is_none() {
            path = Some(args[i].clone());
        }
        i += 1;
    }
    let Some(path) = path else {
        eprintln!("Usage: trigforge_script parse <file.trig> [--out <out.json>]");
        process::exit(2);
    };
    let text = read_trigger_text(&path);

    // Statements that fail to parse are logged and skipped; structure errors
    // were already reported by the extractor.
    let dump: Vec<TriggerDump> = extract_triggers(&text)
        .map(|trigger| TriggerDump {
            players: trigger.players,
            conditions: parse_statements(&trigger.conditions),
            actions: parse_statements(&trigger.actions),
        })
        .collect();

    let json = serde_json::to_string_pretty(&dump).unwrap_or_else(|e| {
        eprintln!("error: encoding parse output: {}", e);
        process::exit(1);
    });
    if let Some(out) = out_path {
        fs::write(&out, json).unwrap_or_else(|e| {
            eprintln!("error: writing '{}': {}", &out, e);
            process::exit(1);
        });
    } else {
        println!("{}", json);
    }
}

fn parse_statements(raw: &[String]) -> Vec<ParsedStatement> {
    raw.iter()
        .filter_map(|statement| match parse_statement(statement) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                error!("{err}");
                None
            },
        })
        .collect()
}

fn run_lint(args: &[String]) {
    let Some(path) = args.first() else {
        eprintln!("Usage: trigforge_script lint <file.trig>");
        process::exit(2);
    };
    let text = read_trigger_text(path);

    let mut triggers = 0usize;
    let mut statements = 0usize;
    let mut failures = 0usize;
    for trigger in extract_triggers(&text) {
        triggers += 1;
        for statement in trigger.conditions.iter().chain(trigger.actions.iter()) {
            statements += 1;
            if let Err(err) = parse_statement(statement) {
                failures += 1;
                eprintln!("{err}");
            }
        }
    }
    println!(
        "{} trigger(s), {} statement(s), {} failure(s)",
        triggers, statements, failures
    );
    if failures > 0 {
        process::exit(1);
    }
}
