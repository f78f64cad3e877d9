//! Command dispatch for the refract CLI.

use anyhow::{Context, Result};

use super::args::{Arguments, Command, ExtractCommand};
use super::report;
use crate::router::{extract_schemas, load_router};

pub fn run(Arguments { command }: Arguments) -> Result<()> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn extract(cmd: ExtractCommand) -> Result<()> {
    let router = load_router(&cmd.router)?;
    let catalog = extract_schemas(&router)
        .with_context(|| format!("Failed to extract components from {:?}", cmd.router))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        report::print(&catalog, router.operations.len(), cmd.common.verbose);
    }

    Ok(())
}
