mod images;
mod manifest;
mod set_image;
mod status;

use clap::{
    crate_version,
    Parser,
    Subcommand,
};
use wk_core::logging;
use wk_core::prelude::*;

#[derive(Parser)]
#[command(
    about = "command-line app for inspecting and rolling container images across Kubernetes workloads",
    version,
    propagate_version = true
)]
struct WkCommandRoot {
    #[command(subcommand)]
    subcommand: WkSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum WkSubcommand {
    #[command(about = "list the images used by each workload in a manifest", visible_alias = "i")]
    Images(images::Args),

    #[command(about = "set a container image on the workloads in a manifest", visible_alias = "set")]
    SetImage(set_image::Args),

    #[command(about = "show the normalized rollout status of each workload in a manifest")]
    Status(status::Args),

    #[command(about = "wkctl version")]
    Version,
}

fn main() -> EmptyResult {
    let args = WkCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        WkSubcommand::Images(args) => images::cmd(args),
        WkSubcommand::SetImage(args) => set_image::cmd(args),
        WkSubcommand::Status(args) => status::cmd(args),
        WkSubcommand::Version => {
            println!("wkctl {}", crate_version!());
            Ok(())
        },
    }
}
