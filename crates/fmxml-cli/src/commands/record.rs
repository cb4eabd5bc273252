//! Record commands
//!
//! Usage:
//!   fmxml create --layout <LAYOUT> [--field NAME=VALUE ...]
//!   fmxml update --layout <LAYOUT> --id <RECORD_ID> --field NAME=VALUE [...]
//!   fmxml delete --layout <LAYOUT> --id <RECORD_ID>
//!
//! The server answers with the affected record, which is printed like a
//! find result.

use clap::Args;
use fmxml_core::FileMakerInterface;

use super::{parse_field, run, QueryArgs};

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Initial field value NAME=VALUE, repeatable
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Internal record id
    #[arg(long)]
    pub id: String,

    /// New field value NAME=VALUE, repeatable
    #[arg(long = "field", value_name = "NAME=VALUE", required = true, value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Internal record id
    #[arg(long)]
    pub id: String,
}

pub fn execute_create(args: CreateArgs) -> anyhow::Result<()> {
    let fields = args.fields;
    run(&args.query, move |fm| fm.create_record(fields).map(drop))
}

pub fn execute_update(args: UpdateArgs) -> anyhow::Result<()> {
    let UpdateArgs { query, id, fields } = args;
    run(&query, move |fm| fm.update_record(id, fields).map(drop))
}

pub fn execute_delete(args: DeleteArgs) -> anyhow::Result<()> {
    let id = args.id;
    run(&args.query, move |fm| fm.delete_record(id).map(drop))
}
