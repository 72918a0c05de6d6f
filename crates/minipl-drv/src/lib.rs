//! Driver: command line, pipeline orchestration and the exit policy.
//!
//! The pipeline is strictly linear: characters → tokens → tree → effects.
//! Each stage runs once. Lexical errors are stripped and reported between
//! scanning and parsing; a parse that recorded any syntax error yields no
//! tree and suppresses evaluation.
//!
//! One language quirk worth knowing when reading test programs: Mini-PL has
//! no `true`/`false` literals. A boolean variable can only be initialised
//! through a comparison or a `!` expression.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser as CliParser;
use tracing::debug;

use minipl_lex::Lexer;
use minipl_par::Parser;
use minipl_sem::Evaluator;
use minipl_util::{Handler, SourceFile};

/// Interpreter for the Mini-PL teaching language.
#[derive(CliParser, Debug)]
#[command(name = "minipl", version, about = "Interpreter for the Mini-PL teaching language")]
pub struct Cli {
    /// Mini-PL source file to run
    pub file: PathBuf,

    /// Dump the token stream instead of running the program
    #[arg(long)]
    pub emit_tokens: bool,

    /// Dump the parsed tree instead of running the program
    #[arg(long)]
    pub emit_ast: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initializes logging. `verbose` lowers the filter to debug so the phase
/// events become visible; diagnostics never go through this channel.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .try_init();
}

/// Runs the interpreter for the given command line.
///
/// Once the source file has been read, diagnostics go to stderr and the
/// process result is success no matter what the program did; only an
/// unreadable source file is a process-level failure.
pub fn run(cli: &Cli) -> Result<()> {
    let source = SourceFile::load(&cli.file)?;
    let handler = Handler::new();

    debug!(file = %source.path.display(), "lexing");
    let stream = Lexer::tokenize(&source.text).strip_errors(&handler);

    if cli.emit_tokens {
        for token in stream.iter() {
            println!("{token:?}");
        }
        return Ok(());
    }

    debug!("parsing");
    let Some(program) = Parser::new(stream, &handler).parse() else {
        // lexical or syntax errors: the diagnostics are out, nothing to run
        return Ok(());
    };

    if cli.emit_ast {
        println!("{program:#?}");
        return Ok(());
    }

    debug!("evaluating");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut evaluator = Evaluator::new(&handler, stdin.lock(), stdout.lock());
    evaluator.run(&program);

    Ok(())
}
