use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rulecheck::cmd::check::{CheckCommandArgs, CheckKind};
use rulecheck::cmd::render::RenderCommandArgs;
use rulecheck::cmd::verify::VerifyCommandArgs;
use rulecheck::cmd::{CommandResponse, PlaceholderArgs, check, render, verify};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "rulecheck",
    version,
    about = "Placeholder templating and rule-based verification"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Substitute placeholders in a template.
    Render(RenderArgs),
    /// Compare a value against a rule from a rule store.
    Verify(VerifyArgs),
    /// Check that a text contains an expected substring.
    Contains(ContainsArgs),
    /// Check that a regular expression is found in a value.
    Matches(MatchesArgs),
}

#[derive(Debug, clap::Args)]
struct PlaceholderOpts {
    /// Literal placeholder as `key=value`; repeatable. The key matches verbatim.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    assignments: Vec<String>,

    /// JSON, YAML or TOML file with literal placeholders, keys matched verbatim.
    #[arg(long)]
    placeholders: Option<PathBuf>,

    #[arg(long)]
    prefix: Option<String>,

    #[arg(long)]
    suffix: Option<String>,
}

#[derive(Debug, clap::Args)]
struct RenderArgs {
    #[arg(long)]
    template: String,

    #[command(flatten)]
    placeholders: PlaceholderOpts,
}

#[derive(Debug, clap::Args)]
struct VerifyArgs {
    #[arg(long)]
    rules: PathBuf,

    #[arg(long)]
    key: String,

    #[arg(long)]
    value: String,

    #[command(flatten)]
    placeholders: PlaceholderOpts,
}

#[derive(Debug, clap::Args)]
struct ContainsArgs {
    #[arg(long)]
    expected: String,

    #[arg(long)]
    actual: String,

    /// Require that the text is absent.
    #[arg(long, default_value_t = false)]
    not: bool,

    #[arg(long)]
    message: Option<String>,
}

#[derive(Debug, clap::Args)]
struct MatchesArgs {
    #[arg(long)]
    pattern: String,

    #[arg(long)]
    value: String,

    /// Require that the pattern is not found.
    #[arg(long, default_value_t = false)]
    not: bool,

    #[arg(long)]
    message: Option<String>,
}

impl From<PlaceholderOpts> for PlaceholderArgs {
    fn from(value: PlaceholderOpts) -> Self {
        Self {
            assignments: value.assignments,
            file: value.placeholders,
            prefix: value.prefix,
            suffix: value.suffix,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    env_logger::init();
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    match cli.command {
        Commands::Render(args) => {
            let args = RenderCommandArgs {
                template: args.template,
                placeholders: args.placeholders.into(),
            };
            emit_response("render", render::run(&args))
        }
        Commands::Verify(args) => {
            let args = VerifyCommandArgs {
                rules: args.rules,
                key: args.key,
                value: args.value,
                placeholders: args.placeholders.into(),
            };
            emit_response("verify", verify::run(&args))
        }
        Commands::Contains(args) => {
            let args = CheckCommandArgs {
                kind: CheckKind::Contains {
                    expected: args.expected,
                    actual: args.actual,
                },
                negate: args.not,
                message: args.message,
            };
            emit_response("contains", check::run(&args))
        }
        Commands::Matches(args) => {
            let args = CheckCommandArgs {
                kind: CheckKind::Matches {
                    pattern: args.pattern,
                    value: args.value,
                },
                negate: args.not,
                message: args.message,
            };
            emit_response("matches", check::run(&args))
        }
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn emit_response(command: &str, response: CommandResponse) -> i32 {
    match response.exit_code {
        0 | 2 => {
            if emit_json_stdout(&response.payload) {
                response.exit_code
            } else {
                emit_error(
                    "internal_error",
                    format!("failed to serialize {command} response"),
                    json!({"command": command}),
                    1,
                );
                1
            }
        }
        code @ (1 | 3) => {
            let error = response.payload["error"]
                .as_str()
                .unwrap_or("internal_error");
            let message = response.payload["message"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            emit_error(error, message, json!({"command": command}), code);
            code
        }
        other => {
            emit_error(
                "internal_error",
                format!("unexpected {command} exit code: {other}"),
                json!({"command": command}),
                1,
            );
            1
        }
    }
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_error(error: &str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
