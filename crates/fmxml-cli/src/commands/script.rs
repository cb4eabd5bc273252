//! Script command
//!
//! Usage: fmxml script --layout <LAYOUT> --name <SCRIPT> [--param <VALUE>]

use clap::Args;
use fmxml_core::FileMakerInterface;

use super::{run, QueryArgs};

#[derive(Debug, Args)]
pub struct ScriptArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Script name
    #[arg(long)]
    pub name: String,

    /// Script parameter
    #[arg(long)]
    pub param: Option<String>,
}

/// Run a script on its own; the server answers with the current found set
pub fn execute(args: ScriptArgs) -> anyhow::Result<()> {
    let ScriptArgs { query, name, param } = args;
    run(&query, move |fm| {
        fm.call_script(&name, param.as_deref()).map(drop)
    })
}
