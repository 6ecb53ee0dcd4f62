use super::open_session;
use crate::config::Config;
use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use paperflow_composer::{Export, ExportError, ExportScope};
use paperflow_editor::{Operation, PageId, Rotation};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// PDF files to load, in workspace order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// JSON file holding a list of operations to apply first
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Move these pages to the front, in this order
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<String>,

    /// Set a page rotation, e.g. doc-1-page-0=90
    #[arg(long = "rotate", value_parser = parse_rotation)]
    pub rotations: Vec<(String, Rotation)>,

    /// Remove a page from the workspace
    #[arg(long = "delete")]
    pub deletes: Vec<String>,

    /// Export only the pages selected by the script
    #[arg(long)]
    pub selected_only: bool,

    /// Extract pages one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Output file (defaults to the configured output name)
    #[arg(short, long)]
    pub output: Option<String>,
}

pub async fn compose(args: ComposeArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut session = open_session(&args.files, cwd, config.history_limit)?;

    for operation in edits(&args, cwd)? {
        tracing::debug!(operation = operation.name(), "dispatch");
        session.dispatch(operation);
    }

    let scope = if args.selected_only {
        ExportScope::SelectedOnly
    } else {
        ExportScope::All
    };

    let result = if config.concurrent_export && !args.sequential {
        session.export_concurrent(scope).await
    } else {
        session.export(scope)
    };

    let export = match result {
        Ok(export) => export,
        Err(ExportError::EmptyExport) => bail!("nothing to export"),
        Err(e) => return Err(e.into()),
    };

    let output = config.output_path(cwd, args.output.as_deref());
    fs::write(&output, &export.bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    report(&export, &output);
    Ok(())
}

/// Script operations followed by the flag edits, in that order
fn edits(args: &ComposeArgs, cwd: &str) -> Result<Vec<Operation>> {
    let mut operations = match &args.script {
        Some(script) => read_script(&Path::new(cwd).join(script))?,
        None => vec![],
    };

    if !args.order.is_empty() {
        operations.push(Operation::ReorderPages {
            page_ids: args.order.iter().map(|id| PageId::new(id.as_str())).collect(),
        });
    }

    for (page_id, rotation) in &args.rotations {
        operations.push(Operation::RotatePage {
            page_id: PageId::new(page_id.as_str()),
            rotation: *rotation,
        });
    }

    if !args.deletes.is_empty() {
        operations.push(Operation::DeletePages {
            page_ids: args.deletes.iter().map(|id| PageId::new(id.as_str())).collect(),
        });
    }

    Ok(operations)
}

fn read_script(path: &Path) -> Result<Vec<Operation>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid script {}", path.display()))
}

/// Parse `PAGE_ID=DEGREES`
fn parse_rotation(value: &str) -> Result<(String, Rotation), String> {
    let (page_id, degrees) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected PAGE_ID=DEGREES, got `{}`", value))?;
    let degrees: i64 = degrees
        .trim()
        .parse()
        .map_err(|_| format!("invalid degrees `{}`", degrees))?;
    let rotation = Rotation::try_from(degrees).map_err(|e| e.to_string())?;

    Ok((page_id.trim().to_string(), rotation))
}

fn report(export: &Export, output: &Path) {
    for skipped in &export.skipped {
        println!(
            "  {} {} skipped: {}",
            "⚠️".yellow(),
            skipped.page_id,
            skipped.reason
        );
    }

    println!(
        "{} Wrote {} pages to {}",
        "✓".green(),
        export.page_ids.len(),
        output.display()
    );
}
