use std::io::{
    self,
    Write,
};

use serde_json::json;
use wk_core::prelude::*;

use crate::manifest;

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, long_help = "manifest file containing the workloads to inspect")]
    pub file: String,

    #[arg(long, long_help = "print one JSON object per workload")]
    pub json: bool,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let resources = manifest::load(&args.file)?.resources;
    print_status(&resources, args.json, &mut io::stdout().lock())
}

pub(crate) fn print_status(resources: &[GenericResource], as_json: bool, out: &mut impl Write) -> EmptyResult {
    for gr in resources {
        let status = gr.status();
        if as_json {
            writeln!(out, "{}", json!({"identifier": gr.identifier, "status": status}))?;
        } else {
            writeln!(
                out,
                "{}: replicas={} updated={} ready={} available={} unavailable={}",
                gr.identifier,
                status.replicas,
                status.updated_replicas,
                status.ready_replicas,
                status.available_replicas,
                status.unavailable_replicas,
            )?;
        }
    }
    Ok(())
}
