mod cli;

use attrpath::expression::Expression;
use attrpath::expressions::Expressions;
use attrpath::path::Path;
use attrpath::step::ExpressionStep;

fn main() {
    use clap::Parser;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("ATTRPATH_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let command_result = match cli.command {
        cli::Command::Match(match_cli) => matches(&cli.output, match_cli, Expression::matches),
        cli::Command::MatchesParent(match_cli) => {
            matches(&cli.output, match_cli, Expression::matches_parent)
        }
        cli::Command::Resolve(resolve_cli) => resolve(&cli.output, resolve_cli),
        cli::Command::Merge(merge_cli) => merge(&cli.output, merge_cli),
        cli::Command::Inspect(inspect_cli) => inspect(&cli.output, inspect_cli),
    };

    if let Err(e) = command_result {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}

#[derive(derive_new::new, serde::Serialize)]
struct MatchReport {
    path: Path,
    matches: bool,
}

#[derive(derive_new::new, serde::Serialize)]
struct ResolveReport {
    expression: Expression,
    /// `None` when the expression steps above the root
    resolved: Option<Expression>,
}

#[derive(derive_new::new, serde::Serialize)]
struct InspectReport {
    expression: Expression,
    rooted: bool,
    steps: Vec<StepReport>,
}

#[derive(serde::Serialize)]
struct StepReport {
    kind: &'static str,
    step: String,
}

impl From<&ExpressionStep> for StepReport {
    fn from(step: &ExpressionStep) -> Self {
        let kind = match step {
            ExpressionStep::AttributeNameExact(_) => "attribute_name",
            ExpressionStep::ElementKeyIntExact(_) => "list_index",
            ExpressionStep::ElementKeyIntAny => "any_list_index",
            ExpressionStep::ElementKeyStringExact(_) => "map_key",
            ExpressionStep::ElementKeyStringAny => "any_map_key",
            ExpressionStep::ElementKeyValueExact(_) => "set_value",
            ExpressionStep::ElementKeyValueAny => "any_set_value",
            ExpressionStep::Parent => "parent",
        };

        Self {
            kind,
            step: step.to_string(),
        }
    }
}

fn anchored(anchor: &cli::AnchorArgs, expression: Expression) -> Expression {
    match &anchor.anchor {
        Some(path) => path.to_expression().merge(&expression),
        None => expression,
    }
}

pub fn matches(
    output_args: &cli::OutputArgs,
    cli: cli::MatchCommand,
    predicate: fn(&Expression, &Path) -> bool,
) -> anyhow::Result<()> {
    let expression = anchored(&cli.anchor, cli.expression);
    tracing::debug!(%expression, "matching");

    let reports: Vec<_> = cli
        .paths
        .into_iter()
        .map(|path| {
            let matches = predicate(&expression, &path);
            MatchReport::new(path, matches)
        })
        .collect();

    output(output_args, &reports)
}

pub fn resolve(output_args: &cli::OutputArgs, cli: cli::ResolveCommand) -> anyhow::Result<()> {
    let reports: Vec<_> = cli
        .expressions
        .into_iter()
        .map(|expression| {
            let expression = anchored(&cli.anchor, expression);
            let resolved = expression.resolve();
            ResolveReport::new(expression, resolved)
        })
        .collect();

    output(output_args, &reports)
}

pub fn merge(output_args: &cli::OutputArgs, cli: cli::MergeCommand) -> anyhow::Result<()> {
    let relatives: Expressions = cli.expressions.into_iter().collect();

    let reports: Vec<_> = cli
        .base
        .merge_expressions(&relatives)
        .into_iter()
        .map(|expression| {
            let resolved = expression.resolve();
            ResolveReport::new(expression, resolved)
        })
        .collect();

    output(output_args, &reports)
}

pub fn inspect(output_args: &cli::OutputArgs, cli: cli::InspectCommand) -> anyhow::Result<()> {
    let steps = cli.expression.steps().iter().map(StepReport::from).collect();
    let rooted = cli.expression.is_root();

    output(output_args, &InspectReport::new(cli.expression, rooted, steps))
}

fn output(output: &cli::OutputArgs, value: &impl serde::Serialize) -> anyhow::Result<()> {
    match output.format {
        cli::OutputFormat::Yaml => serde_yaml::to_writer(std::io::stdout(), value)?,
        cli::OutputFormat::Json => serde_json::to_writer_pretty(std::io::stdout(), value)?,
    };

    Ok(())
}
