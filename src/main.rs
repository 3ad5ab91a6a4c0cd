use anyhow::Result;
use clap::Parser;

use git_autotag::config;
use git_autotag::domain::BranchSources;
use git_autotag::git::Git2Gateway;
use git_autotag::publisher::{Outcome, Publisher};
use git_autotag::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-autotag",
    about = "Resolve and publish the next release tag for the current branch"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Explicitly specify the branch to resolve for")]
    branch: Option<String>,

    #[arg(short, long, help = "Override the manifest path for the base version")]
    manifest: Option<String>,

    #[arg(short, long, help = "Override the remote to push to")]
    remote: Option<String>,

    #[arg(long, help = "Resolve and report without creating or pushing a tag")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-autotag {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(manifest) = args.manifest {
        config.manifest = manifest;
    }
    if let Some(remote) = args.remote {
        config.remote = remote;
    }

    // Environment signals are read once here and carried as plain values so
    // everything below stays testable without process environment mutation.
    let sources = BranchSources {
        explicit: args.branch,
        head_ref: std::env::var("GITHUB_HEAD_REF").ok(),
        ref_name: std::env::var("GITHUB_REF_NAME").ok(),
    };

    let gateway = match Git2Gateway::open(".") {
        Ok(gateway) => gateway,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let publisher = Publisher::new(&config, &gateway);

    match publisher.run(&sources, args.dry_run) {
        Ok(Outcome::Published(tag)) => {
            println!("\nSuccessfully published tag {}\n", tag);
            Ok(())
        }
        Ok(Outcome::WouldPublish(_))
        | Ok(Outcome::AlreadyTagged(_))
        | Ok(Outcome::NoUpdateNeeded) => Ok(()),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
