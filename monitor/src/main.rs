use anyhow::Context;
use clap::Parser;
use generator::scenario::{ScenarioConfig, ScriptedFeed};
use gui_bridge::bridge::DashboardBridge;
use gui_bridge::model::DashboardModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use watchcore::feed::{Detector, FrameSource};
use workflow::config::MonitorSettings;
use workflow::manifest::ModelManifest;
use workflow::runner::Runner;

mod audio;
mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Site safety monitor driver")]
struct Args {
    /// Run a scripted offline scenario and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load monitor settings from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Model label manifest (JSON); missing file falls back to defaults
    #[arg(long)]
    model: Option<PathBuf>,
    #[arg(long, default_value_t = 0.40)]
    conf_threshold: f32,
    #[arg(long, default_value_t = 5)]
    persistence_threshold: u32,
    #[arg(long, default_value_t = 3.0)]
    beep_cooldown: f64,
    /// Frame count for the offline scenario
    #[arg(long, default_value_t = 120)]
    frames: u64,
    /// Keep the dashboard bridge alive for incoming detection payloads
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = if let Some(path) = args.workflow {
        MonitorSettings::load(path)?
    } else {
        MonitorSettings::from_args(
            args.conf_threshold,
            args.persistence_threshold,
            args.beep_cooldown,
        )
    };

    let manifest_path = args.model.or_else(|| settings.model_manifest.clone());
    let manifest = ModelManifest::load_or_default(manifest_path.as_deref())?;
    let config = settings.to_monitor_config(&manifest);

    let runner = Arc::new(Mutex::new(Runner::new(&config, Box::new(audio::SystemBeep))));
    let dashboard = DashboardBridge::new(runner.clone());

    if args.offline {
        let scenario = ScenarioConfig {
            frames: args.frames,
            ..Default::default()
        };
        let mut feed = ScriptedFeed::new(scenario);

        let mut last_model = DashboardModel::default();
        while let Some(frame) = feed.next_frame() {
            let detections = feed.detect(&frame)?;
            let mut guard = runner.lock().unwrap();
            let report = guard.process_frame(&detections, frame.timestamp);
            last_model = DashboardBridge::render_model(&guard, &report);
        }

        println!(
            "Offline run -> status {}, alarms {}, log lines {}",
            last_model.status, last_model.alarms_fired, last_model.event_log.len()
        );

        dashboard.publish(&last_model)?;
        dashboard.publish_status("Offline scenario results ready.");

        let report = format!(
            "status={} frames={} alarms={} log_lines={}\n",
            last_model.status,
            last_model.frames_processed,
            last_model.alarms_fired,
            last_model.event_log.len()
        );
        let report_path = PathBuf::from("tools/data/offline_monitor.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        dashboard.publish_status("Dashboard bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
