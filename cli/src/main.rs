//! Cirrus CLI - encode/decode region-scoped keys and inspect request options.
//!
//! Command output goes to stdout; logs go to stderr (`RUST_LOG` to adjust,
//! default `warn`).
//!
//! ```text
//! cirrus key encode us-east-1 my-elb        -> us-east-1/my-elb
//! cirrus key decode us-east-1/my-elb        -> region=us-east-1 / name=my-elb
//! cirrus options instances --name db1       -> InstanceNames.member.1=db1
//! cirrus endpoint rds --region eu-west-1    -> https://rds.eu-west-1.amazonaws.com
//! ```

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

use cirrus_config::CirrusConfig;
use cirrus_types::Service;

#[derive(Parser, Debug)]
#[command(name = "cirrus")]
#[command(about = "Region-scoped keys and request options for ELB, Glacier and RDS", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode or decode `region/name` keys
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Print the form parameters a list request would send
    Options {
        #[command(subcommand)]
        kind: OptionsKind,
    },
    /// Print the endpoint for a service
    Endpoint {
        /// elb, glacier or rds
        service: Service,
        /// Overrides the configured region
        #[arg(short, long)]
        region: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum KeyAction {
    Encode {
        region: String,
        name: String,
        /// Reject empty fields and fields containing '/'
        #[arg(long)]
        strict: bool,
    },
    Decode { token: String },
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Marker from a truncated previous response
    #[arg(short, long)]
    marker: Option<String>,
    /// Name to filter on; repeat for several
    #[arg(short, long = "name")]
    names: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum OptionsKind {
    /// RDS DescribeDBInstances
    Instances(ListArgs),
    /// ELB DescribeLoadBalancers
    LoadBalancers(ListArgs),
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    tracing::debug!(?args, "Parsed arguments");

    let output = match args.command {
        Command::Key { action } => match action {
            KeyAction::Encode {
                region,
                name,
                strict,
            } => commands::encode_key(region, name, strict)?,
            KeyAction::Decode { token } => commands::decode_key(&token)?,
        },
        Command::Options { kind } => match kind {
            OptionsKind::Instances(list) => commands::instances_form(list.marker, list.names),
            OptionsKind::LoadBalancers(list) => {
                commands::load_balancers_form(list.marker, list.names)
            }
        },
        Command::Endpoint { service, region } => {
            let config = CirrusConfig::load()
                .context("loading configuration")?
                .unwrap_or_default();
            commands::endpoint(&config, service, region)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
