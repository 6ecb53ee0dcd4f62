use super::open_session;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use paperflow_editor::WorkspaceState;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// PDF files to load, in workspace order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let session = open_session(&args.files, cwd, config.history_limit)?;
    let state = session.state();

    for document in state.documents() {
        println!(
            "{} {} ({} pages)",
            document.id.to_string().bright_blue().bold(),
            document.name,
            document.page_count()
        );
    }
    println!();

    for line in page_lines(state) {
        println!("  {}", line);
    }

    Ok(())
}

/// One row per workspace page: id, source, page number, rotation
fn page_lines(state: &WorkspaceState) -> Vec<String> {
    state
        .pages()
        .iter()
        .map(|page| {
            let source = state
                .document(&page.source_document_id)
                .map(|doc| doc.name.as_str())
                .unwrap_or("?");
            format!(
                "{:<20} {:<24} p{:<5} {}",
                page.id.as_str(),
                source,
                page.page_number,
                page.rotation
            )
        })
        .collect()
}
