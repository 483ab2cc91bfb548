mod error;
mod render;

use boolsimp_compute::{
    eval::equivalent,
    symbolic::{simplify::MAX_STEPS, simplify_steps_with, SimplifyOptions, SimplifyOptionsBuilder},
};
use boolsimp_parser::parser::parse;
use clap::Parser;
use error::CliError;
use log::{debug, info};
use render::{write_simplified, RenderOptions};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};

/// Simplifies Boolean algebra expressions step by step.
///
/// Variables are single letters, `+` is OR, juxtaposition or `*` is AND, and `A'` or `~A` is NOT.
#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// File containing the expression to simplify. The expression is read from stdin if it is not
    /// a terminal, and an interactive session is started otherwise.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of rewrites to apply to an expression.
    #[arg(long, value_name = "INT", default_value_t = MAX_STEPS)]
    max_steps: usize,

    /// Verify that the result is logically equivalent to the input.
    #[arg(long)]
    check: bool,

    /// Print the truth table of the result.
    #[arg(long)]
    table: bool,

    /// Print only the final expression.
    #[arg(short, long)]
    quiet: bool,

    /// Log more details (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// The log level selected by the `-v` flags.
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn simplify_options(&self) -> SimplifyOptions {
        SimplifyOptionsBuilder::new()
            .max_steps(self.max_steps)
            .build()
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            quiet: self.quiet,
            check: self.check,
            table: self.table,
        }
    }
}

/// Parses and simplifies the given input, printing the steps to stdout.
fn simplify_input(input: &str, cli: &Cli) -> Result<(), CliError> {
    if input.trim().is_empty() {
        return Err(CliError::Empty);
    }

    let expr = parse(input)?;
    let simplified = simplify_steps_with(&expr, cli.simplify_options());
    info!(
        "simplified `{}` to `{}` in {} step(s)",
        expr,
        simplified.expr,
        simplified.trace.rewrites().len(),
    );

    let is_equivalent = cli.check && equivalent(&expr, &simplified.expr);
    write_simplified(&mut io::stdout().lock(), input, &simplified, is_equivalent, cli.render_options())?;
    Ok(())
}

/// Simplifies a single expression read from a file or stdin.
fn run_once(source: Result<String, io::Error>, src_id: &str, cli: &Cli) -> ExitCode {
    let input = match source {
        Ok(input) => input,
        Err(err) => {
            CliError::from(err).report_to_stderr(src_id, "");
            return ExitCode::FAILURE;
        },
    };

    match simplify_input(&input, cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(src_id, &input);
            ExitCode::FAILURE
        },
    }
}

/// Runs the interactive session, simplifying each line on its own.
fn repl(cli: &Cli) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, cli: &Cli) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        if let Err(err) = simplify_input(&input, cli) {
            err.report_to_stderr("input", &input);
        }
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, cli) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("warning: could not initialize logging: {}", err);
    }
    debug!("{:?}", cli);

    if let Some(path) = &cli.file {
        // simplify the expression in the file
        let src_id = path.to_string_lossy();
        run_once(fs::read_to_string(path), &src_id, &cli)
    } else if !io::stdin().is_terminal() {
        // read the expression from stdin
        let mut input = String::new();
        let source = io::stdin().read_to_string(&mut input).map(|_| input);
        run_once(source, "stdin", &cli)
    } else {
        // run the repl / interactive mode
        repl(&cli)
    }
}
