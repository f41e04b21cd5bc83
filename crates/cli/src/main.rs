use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod spinner;
mod verify;

#[derive(Parser, Debug)]
#[command(name = "axl")]
#[command(about = "axl - inspect GPU/TPU availability and quotas on GKE")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List GPU accelerator types available in a zone
    Gpus {
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// List TPU accelerator types available in a zone
    Tpus {
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// List supported TPU runtime versions for a zone
    TpuDrivers {
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// Show compute quotas for a region
    Quotas {
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Generate cluster resource limits from region quotas
    Limits {
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Check a requested GPU count against zone availability
    CheckGpu {
        /// GPU accelerator string (e.g. nvidia-tesla-v100)
        #[arg(short, long)]
        gpu: String,
        /// Requested card count
        #[arg(short, long)]
        count: u32,
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// Wait for a cluster operation to finish
    Wait {
        /// Operation name, of form projects/*/locations/*/operations/*
        operation: String,
        /// Give up after this many seconds; waits indefinitely if unset
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Print the NVIDIA driver installer daemonset URL for a node image
    DriverUrl {
        #[arg(value_enum)]
        image: ImageArg,
    },
    /// Print the cloud console URL for a cluster
    Dashboard {
        /// Cluster name
        cluster: String,
        #[arg(short, long)]
        zone: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ImageArg {
    Cos,
    Ubuntu,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Gpus { zone } => commands::handle_gpus(zone),
        Commands::Tpus { zone } => commands::handle_tpus(zone),
        Commands::TpuDrivers { zone } => commands::handle_tpu_drivers(zone),
        Commands::Quotas { region } => commands::handle_quotas(region),
        Commands::Limits { region } => commands::handle_limits(region),
        Commands::CheckGpu { gpu, count, zone } => commands::handle_check_gpu(gpu, count, zone),
        Commands::Wait { operation, timeout } => commands::handle_wait(operation, timeout),
        Commands::DriverUrl { image } => commands::handle_driver_url(image.into()),
        Commands::Dashboard { cluster, zone } => commands::handle_dashboard(cluster, zone),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

impl From<ImageArg> for axl_core::types::NodeImage {
    fn from(image: ImageArg) -> Self {
        match image {
            ImageArg::Cos => axl_core::types::NodeImage::Cos,
            ImageArg::Ubuntu => axl_core::types::NodeImage::Ubuntu,
        }
    }
}
