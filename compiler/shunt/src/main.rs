use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use shunt::{analyze_line, analyze_source, AstPrinter, ExpressionReport, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "shunt",
    version,
    about = "Evaluate infix integer expressions through a tree and a postfix pipeline",
    long_about = "shunt reads integer expressions, one per line, with every token separated\n\
        by whitespace. Each expression is converted to an expression tree and to\n\
        postfix notation with the shunting-yard algorithm, and both forms are evaluated.\n\n\
        EXAMPLES:\n\
        \n  shunt expressions.txt                  Evaluate every line of a file\n\
        \n  echo '( 1 + 2 ) * 3' | shunt           Evaluate from stdin\n\
        \n  shunt --json expressions.txt           Emit reports as JSON\n\
        \n  shunt repl                             Start interactive REPL"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate each line of a file or stdin
    #[command(
        about = "Evaluate each line of a file or stdin",
        long_about = "Evaluates every non-blank line and prints its infix and postfix forms\n\
            followed by the postfix and tree results.\n\n\
            Reads from the specified file or stdin if no file is given."
    )]
    Eval(InputArgs),

    /// Output expression reports as JSON
    #[command(about = "Output expression reports as JSON")]
    Json(InputArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive Read-Eval-Print Loop, one expression per line.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :tree   Toggle printing of the expression tree\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone, Default)]
struct InputArgs {
    /// Input file with one expression per line (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

impl InputArgs {
    fn source_name(&self) -> String {
        match &self.input {
            Some(path) => format!("'{}'", path.display()),
            None => "stdin".to_string(),
        }
    }

    fn read(&self) -> io::Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path),
            None => io::read_to_string(io::stdin()),
        }
    }
}

#[derive(Debug, Default)]
struct ReplSession {
    show_tree: bool,
}

impl ReplSession {
    fn prompt(&self) -> &'static str {
        "shunt> "
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        match line {
            ":help" => (
                vec![
                    "commands: :help, :tree, :quit".to_string(),
                    "note: separate every number, operator and parenthesis with spaces"
                        .to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":tree" => {
                self.show_tree = !self.show_tree;
                let state = if self.show_tree { "on" } else { "off" };
                (vec![format!("tree printing {state}")], false)
            }
            other => (vec![format!("error: unknown command '{other}'")], false),
        }
    }

    /// Returns the lines to print and whether the session should end.
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }

        let report = match analyze_line(trimmed) {
            Ok(report) => report,
            Err(e) => return (vec![format!("error: {e}")], false),
        };

        let mut out = Vec::new();
        let postfix: Outcome<String> = report.postfix.as_ref().map(ToString::to_string).into();
        out.push(format!("postfix: {postfix}"));
        if self.show_tree {
            if let Ok(tree) = &report.tree {
                out.push(AstPrinter::new().print(tree));
            }
        }
        let postfix_value: Outcome<i64> = report.postfix_value.into();
        let tree_value: Outcome<i64> = report.tree_value.into();
        if postfix_value == tree_value {
            out.push(postfix_value.to_string());
        } else {
            out.push(format!("postfix eval: {postfix_value}"));
            out.push(format!("tree eval: {tree_value}"));
        }
        (out, false)
    }
}

fn render_reports(reports: &[ExpressionReport], mode: OutputMode) -> Result<String, String> {
    match mode {
        OutputMode::Text => Ok(reports
            .iter()
            .map(|report| format!("{report}\n"))
            .collect()),
        OutputMode::Json => shunt_ast::to_json(reports)
            .map(|json| json + "\n")
            .map_err(|e| format!("failed to serialize reports: {e}")),
    }
}

fn run_eval(source: &str, mode: OutputMode) -> i32 {
    let reports = analyze_source(source);
    log::info!("evaluated {} expressions", reports.len());

    match render_reports(&reports, mode) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    }

    if reports.iter().any(ExpressionReport::has_errors) {
        1
    } else {
        0
    }
}

fn run_repl() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::default();
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose"
        || arg
            .strip_prefix('-')
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c == 'v'))
}

/// Rewrites shorthand invocations into subcommand form: `shunt FILE` runs
/// `eval`, `--json`/`-j` selects `json`. Verbosity flags belong to the
/// top-level command and are moved in front of the subcommand.
fn normalize_cli_args(args: Vec<OsString>) -> Vec<OsString> {
    let mut iter = args.into_iter();
    let Some(program) = iter.next() else {
        return Vec::new();
    };
    let (flags, rest): (Vec<OsString>, Vec<OsString>) =
        iter.partition(|a| is_verbosity_flag(&a.to_string_lossy()));

    let mut out: Vec<OsString> = Vec::with_capacity(flags.len() + rest.len() + 2);
    out.push(program);
    out.extend(flags);

    let names_subcommand = rest.first().is_some_and(|first| {
        matches!(
            first.to_string_lossy().as_ref(),
            "eval" | "json" | "repl" | "help" | "--help" | "-h" | "--version" | "-V"
        )
    });
    if rest.is_empty() || names_subcommand {
        out.extend(rest);
        return out;
    }

    let mut subcmd = OsString::from("eval");
    let mut positional: Vec<OsString> = Vec::with_capacity(rest.len());
    for a in rest {
        let s = a.to_string_lossy();
        if s == "--json" || s == "-j" {
            subcmd = OsString::from("json");
            continue;
        }
        positional.push(a);
    }
    out.push(subcmd);
    out.extend(positional);
    out
}

fn run_cli() -> i32 {
    let cli = Cli::parse_from(normalize_cli_args(std::env::args_os().collect()));
    init_logger(cli.verbose);

    let (args, mode) = match cli.command.unwrap_or(Command::Eval(InputArgs::default())) {
        Command::Eval(args) => (args, OutputMode::Text),
        Command::Json(args) => (args, OutputMode::Json),
        Command::Repl => return run_repl(),
    };

    let source = match args.read() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", args.source_name());
            return 2;
        }
    };
    let rc = run_eval(&source, mode);
    log::debug!("eval completed with exit code {rc}");
    rc
}

fn main() {
    std::process::exit(run_cli());
}
