use std::collections::HashMap;
use std::time::Duration;

use comfy_table::{Cell, Table};

use axl_core::types::{Gpu, GpuSpec, NodeImage};
use axl_core::validate::validate_gpu_spec_against_limits;
use axl_gke::constants::{dashboard_cluster_url, nvidia_daemonset_url};
use axl_gke::operations::{wait_for_operation, WaitConfig};
use axl_gke::{queries, GkeClient};

use crate::config::{self, Config};
use crate::spinner::create_spinner;
use crate::verify::user_verify;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn build_client(config: &Config) -> Result<GkeClient, Box<dyn std::error::Error>> {
    Ok(GkeClient::new(&config.project, &config.access_token)?)
}

fn resolve_zone(flag: Option<String>, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    flag.or_else(|| config.zone.clone())
        .ok_or_else(|| "No zone given; pass --zone or set it in your axl config".into())
}

fn resolve_region(flag: Option<String>, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    flag.or_else(|| config.region.clone())
        .ok_or_else(|| "No region given; pass --region or set it in your axl config".into())
}

pub fn handle_gpus(zone: Option<String>) -> CmdResult {
    let config = config::parse_config()?;
    let zone = resolve_zone(zone, &config)?;
    let client = build_client(&config)?;

    let gpus = queries::get_zone_gpu_types(&client, &zone)?;
    if gpus.is_empty() {
        println!("No GPU accelerators available in {}.", zone);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["GPU", "Max per instance"]);
    for spec in &gpus {
        table.add_row(vec![Cell::new(spec.gpu), Cell::new(spec.count)]);
    }
    println!("GPU accelerators in {}", zone);
    println!("{}", table);
    Ok(())
}

pub fn handle_tpus(zone: Option<String>) -> CmdResult {
    let config = config::parse_config()?;
    let zone = resolve_zone(zone, &config)?;
    let client = build_client(&config)?;

    let tpus = queries::get_zone_tpu_types(&client, &zone)?;
    if tpus.is_empty() {
        println!("No TPU accelerators available in {}.", zone);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["TPU", "Cores"]);
    for spec in &tpus {
        table.add_row(vec![Cell::new(spec.tpu), Cell::new(spec.count)]);
    }
    println!("TPU accelerators in {}", zone);
    println!("{}", table);
    Ok(())
}

pub fn handle_tpu_drivers(zone: Option<String>) -> CmdResult {
    let config = config::parse_config()?;
    let zone = resolve_zone(zone, &config)?;
    let client = build_client(&config)?;

    let drivers = queries::get_tpu_drivers(&client, &zone)?;
    if drivers.is_empty() {
        println!("No TPU runtime versions available in {}.", zone);
        return Ok(());
    }

    for driver in drivers {
        println!("{}", driver);
    }
    Ok(())
}

pub fn handle_quotas(region: Option<String>) -> CmdResult {
    let config = config::parse_config()?;
    let region = resolve_region(region, &config)?;
    let client = build_client(&config)?;

    let quotas = queries::get_region_quotas(&client, &region)?;
    if quotas.is_empty() {
        println!("No quotas reported for {}.", region);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Limit", "Usage"]);
    for quota in &quotas {
        table.add_row(vec![
            Cell::new(&quota.metric),
            Cell::new(quota.limit),
            Cell::new(quota.usage),
        ]);
    }
    println!("Quotas for {}", region);
    println!("{}", table);
    Ok(())
}

pub fn handle_limits(region: Option<String>) -> CmdResult {
    let config = config::parse_config()?;
    let region = resolve_region(region, &config)?;
    let client = build_client(&config)?;

    let limits = queries::generate_resource_limits(&client, &region)?;
    println!("{}", serde_json::to_string_pretty(&limits)?);
    Ok(())
}

pub fn handle_check_gpu(gpu: String, count: u32, zone: Option<String>) -> CmdResult {
    let config = config::parse_config()?;
    let zone = resolve_zone(zone, &config)?;
    let client = build_client(&config)?;

    let requested = GpuSpec {
        gpu: gpu.parse()?,
        count,
    };

    let available = queries::get_zone_gpu_types(&client, &zone)?;
    let limits: HashMap<Gpu, u32> = available.iter().map(|s| (s.gpu, s.count)).collect();

    if validate_gpu_spec_against_limits(&requested, &limits, "zone") {
        println!("{} x{} is available in {}.", requested.gpu, requested.count, zone);
        Ok(())
    } else {
        Err(format!("{} x{} is not available in {}", requested.gpu, requested.count, zone).into())
    }
}

pub fn handle_wait(operation: String, timeout: Option<u64>) -> CmdResult {
    let config = config::parse_config()?;
    let client = build_client(&config)?;

    if timeout.is_none()
        && !user_verify(
            "No timeout given; this waits until the operation finishes. Continue?",
            true,
        )
    {
        println!("Aborted.");
        return Ok(());
    }

    let wait = WaitConfig {
        timeout: timeout.map(Duration::from_secs),
        ..WaitConfig::default()
    };

    let spinner = create_spinner();
    spinner.set_message(format!("Waiting for operation {}...", operation));

    match wait_for_operation(&client, &operation, &wait) {
        Ok(op) => {
            spinner.finish_with_message(format!("Operation {}: {}", op.name, op.status));
            println!("{}", serde_json::to_string_pretty(&op)?);
            Ok(())
        }
        Err(e) => {
            spinner.finish_with_message("Wait failed");
            Err(e.into())
        }
    }
}

pub fn handle_driver_url(image: NodeImage) -> CmdResult {
    match nvidia_daemonset_url(image) {
        Some(url) => {
            println!("{}", url);
            Ok(())
        }
        None => Err(format!("No driver installer known for node image {:?}", image).into()),
    }
}

pub fn handle_dashboard(cluster: String, zone: Option<String>) -> CmdResult {
    let config = config::parse_config()?;
    let zone = resolve_zone(zone, &config)?;
    println!("{}", dashboard_cluster_url(&cluster, &zone, &config.project));
    Ok(())
}
