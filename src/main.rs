use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kvm_guests_inventory::{load_records, render, write_output, Config, Inventory, Mode, Result};

#[derive(Parser)]
#[command(name = "kvm-guests-inventory")]
#[command(author, version, about = "KVM Guests Inventory for Ansible", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["list", "host"])))]
struct Cli {
    /// List all hosts
    #[arg(long)]
    list: bool,

    /// Get variables for a specific host
    #[arg(long, value_name = "HOSTNAME")]
    host: Option<String>,

    /// Status file to read instead of $KVM_GUESTS_STATUS_FILE or the default
    #[arg(long, value_name = "PATH")]
    status_file: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn mode(&self) -> Mode {
        match &self.host {
            Some(hostname) => Mode::Host(hostname.clone()),
            None => Mode::List,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Inventory generation failed: {:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mode = cli.mode();
    let config = Config::resolve(cli.status_file);
    info!("Reading leases from {:?}", config.status_file);

    let records = load_records(&config.status_file)?;
    let inventory = Inventory::build(&records);
    let rendered = render(&inventory, &mode)?;

    write_output(std::io::stdout().lock(), &rendered)
}
