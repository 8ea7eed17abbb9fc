use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use frontend::{lexer::lexer::tokenize, parser::parser::parse_source, render_error};
use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};

const PROMPT: &str = ">> ";

/// Parse source files and print their syntax tree.
#[derive(Parser, Debug)]
#[command(name = "frontend", version)]
struct Args {
    /// File to parse. Starts an interactive prompt when omitted.
    path: Option<PathBuf>,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    match &args.path {
        Some(path) => run_file(path, args.tokens),
        None => {
            run_prompt(args.tokens)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_file(path: &Path, dump_tokens: bool) -> Result<ExitCode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if dump_tokens {
        print_tokens(&source, Some(file_name.clone()));
    }

    let start = Instant::now();
    let (parser, program) = parse_source(&source, Some(file_name.clone()));
    info!("parsed {} statements in {:?}", program.len(), start.elapsed());

    if parser.has_errors() {
        for error in parser.errors() {
            eprint!("{}", render_error(error, &source, &file_name));
        }
        return Ok(ExitCode::FAILURE);
    }

    for stmt in program.iter() {
        println!("{}", stmt);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_prompt(dump_tokens: bool) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        if dump_tokens {
            print_tokens(&line, None);
        }

        let (parser, program) = parse_source(&line, None);
        if parser.has_errors() {
            println!("parser errors:");
            for message in parser.error_messages() {
                println!("\t{}", message);
            }
            continue;
        }

        println!("{}", program);
    }
}

fn print_tokens(source: &str, file: Option<String>) {
    for token in tokenize(source.to_string(), file) {
        println!("{}", token);
    }
}
