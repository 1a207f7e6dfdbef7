//! attrpath cli interface

use attrpath::expression::Expression;
use attrpath::path::Path;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Formatter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check which paths are matched by an expression
    Match(MatchCommand),

    /// Check which paths are the direct parent of a location matched by an expression
    MatchesParent(MatchCommand),

    /// Remove parent steps from expressions
    Resolve(ResolveCommand),

    /// Anchor relative expressions at a base expression
    Merge(MergeCommand),

    /// Print the steps of an expression
    Inspect(InspectCommand),
}

#[derive(Parser, Debug)]
pub struct MatchCommand {
    #[clap(flatten)]
    pub anchor: AnchorArgs,

    /// Expression, e.g. 'block[*].attribute'
    pub expression: Expression,

    /// Paths to test, e.g. 'block[0].attribute'
    #[arg(required = true)]
    pub paths: Vec<Path>,
}

#[derive(Parser, Debug)]
pub struct ResolveCommand {
    #[clap(flatten)]
    pub anchor: AnchorArgs,

    /// Expressions to resolve
    #[arg(required = true)]
    pub expressions: Vec<Expression>,
}

#[derive(Parser, Debug)]
pub struct MergeCommand {
    /// Expression the others are anchored at
    pub base: Expression,

    /// Relative expressions, e.g. '<.sibling'
    #[arg(required = true)]
    pub expressions: Vec<Expression>,
}

#[derive(Parser, Debug)]
pub struct InspectCommand {
    pub expression: Expression,
}

#[derive(Parser, Debug)]
pub struct AnchorArgs {
    /// Anchor relative expressions at this path first
    ///
    /// This is the location of the attribute an expression is declared on
    #[clap(short = 'a', long = "anchor")]
    pub anchor: Option<Path>,
}

#[derive(Parser, Debug)]
pub struct OutputArgs {
    #[arg(short = 'F', long = "output-format", default_value_t, global(true))]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum OutputFormat {
    Json,
    #[default]
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}
