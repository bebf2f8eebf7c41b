//! Wombat CLI
//!
//! Converts a markup document to JSON, or dumps the intermediate tokens and
//! tree for debugging.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use wombat_ast::render_tree;
use wombat_common::warning::clear_warnings;
use wombat_json::{JsonOptions, to_ast_json, to_json_string};
use wombat_markup::{ParseError, Parser as MarkupParser, Tokenizer};

/// What to print on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The document mapped to JSON.
    Json,
    /// An indented outline of the parsed tree.
    Tree,
    /// One token per line.
    Tokens,
    /// The raw tree, tokens included, as JSON.
    Ast,
}

/// Convert markup documents to JSON.
#[derive(Debug, Parser)]
#[command(name = "wombat", version, about)]
struct Cli {
    /// Markup file to read.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Inline markup to convert instead of reading a file.
    #[arg(long, conflicts_with = "path")]
    markup: Option<String>,

    /// Lexing mode: "xml" or "json".
    #[arg(long, default_value = "xml")]
    mode: String,

    /// Output to produce.
    #[arg(long, value_enum, default_value_t = Emit::Json)]
    emit: Emit,

    /// Write JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// Also echo each distinct structural error as a warning while parsing.
    #[arg(long)]
    warn: bool,

    /// Prefix for attribute keys in JSON output.
    #[arg(long, default_value = "@")]
    attribute_prefix: String,

    /// Key for element text when an element maps to a JSON object.
    #[arg(long, default_value = "#text")]
    text_key: String,
}

impl Cli {
    fn json_options(&self) -> JsonOptions {
        JsonOptions {
            attribute_prefix: self.attribute_prefix.clone(),
            text_key: self.text_key.clone(),
            pretty: !self.compact,
        }
    }
}

fn read_source(cli: &Cli) -> Result<String> {
    if let Some(markup) = &cli.markup {
        return Ok(markup.clone());
    }
    let Some(path) = &cli.path else {
        bail!("no input: pass a FILE or --markup '<tag>...</tag>'");
    };
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn report_errors(errors: &[ParseError]) {
    for error in errors {
        eprintln!("{} {error}", "error:".red().bold());
    }
    let noun = if errors.len() == 1 { "error" } else { "errors" };
    eprintln!("{}", format!("{} structural {noun}", errors.len()).red());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = read_source(&cli)?;

    clear_warnings();
    let tokenizer = Tokenizer::with_selector(source, &cli.mode)?;
    let tokens = (cli.emit == Emit::Tokens).then(|| tokenizer.clone().into_tokens());

    let mut parser = MarkupParser::new(tokenizer);
    if cli.warn {
        parser = parser.with_diagnostics();
    }
    let (document, errors) = parser.run_with_errors();

    match cli.emit {
        Emit::Json => println!("{}", to_json_string(&document, &cli.json_options())?),
        Emit::Tree => print!("{}", render_tree(&document)),
        Emit::Ast => println!("{}", to_ast_json(&document, !cli.compact)?),
        Emit::Tokens => {
            for token in tokens.unwrap_or_default() {
                println!("{token}");
            }
        }
    }

    if !errors.is_empty() {
        report_errors(&errors);
        process::exit(1);
    }

    Ok(())
}
