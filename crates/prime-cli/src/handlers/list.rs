//! `list` command: probed devices and the policy verdict.

use serde::Serialize;
use std::fmt::Write as _;

use prime_core::ports::DeviceProbePort;
use prime_core::{LaunchConfig, OffloadError, PolicyVerdict, evaluate};

use crate::commands::ListArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeviceRow {
    index: usize,
    card: u32,
    id: String,
    internal_panel: bool,
    path: String,
    driver: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListReport {
    devices: Vec<DeviceRow>,
    role_directives: String,
}

/// Render the probed devices as a table or JSON.
pub fn execute(probe: &dyn DeviceProbePort, args: &ListArgs) -> Result<String, CliError> {
    let table = probe.probe();
    let config = LaunchConfig::default()
        .with_renderer(args.renderer.renderer)
        .with_dxvk(args.renderer.dxvk);

    let devices: Vec<DeviceRow> = table
        .iter()
        .enumerate()
        .map(|(index, device)| DeviceRow {
            index,
            card: device.card,
            id: device.id.clone(),
            internal_panel: device.internal_panel,
            path: device.path.display().to_string(),
            driver: probe
                .driver_path(device)
                .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned())),
        })
        .collect();

    let report = ListReport {
        devices,
        role_directives: describe_verdict(&evaluate(&table, &config)),
    };

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }
    Ok(render_table(&report))
}

fn describe_verdict(verdict: &Result<PolicyVerdict, OffloadError>) -> String {
    match verdict {
        Ok(PolicyVerdict::Allowed) => "allowed".to_string(),
        Ok(PolicyVerdict::TooFewDevices { count }) => {
            format!("skipped ({count} GPU found, nothing to choose between)")
        }
        Ok(PolicyVerdict::DeferToRenderer { count }) => {
            format!("skipped ({count} GPUs, the renderer chooses)")
        }
        Ok(PolicyVerdict::NoInternalPanel) => {
            "skipped (card0 has no eDP output, not a laptop)".to_string()
        }
        Err(e) => format!("refused ({e})"),
    }
}

fn render_table(report: &ListReport) -> String {
    let mut out = String::new();

    if report.devices.is_empty() {
        out.push_str("No GPUs found\n");
    } else {
        let _ = writeln!(out, "{:<6} {:<7} {:<10} {:<6} DRIVER", "INDEX", "CARD", "ID", "PANEL");
        for row in &report.devices {
            let card = format!("card{}", row.card);
            let _ = writeln!(
                out,
                "{:<6} {:<7} {:<10} {:<6} {}",
                row.index,
                card,
                row.id,
                if row.internal_panel { "eDP" } else { "-" },
                row.driver.as_deref().unwrap_or("-"),
            );
        }
    }

    let _ = writeln!(
        out,
        "\nRole directives (integrated, prime-discrete): {}",
        report.role_directives
    );
    out
}
