use crate::gui_bridge::model::DashboardModel;
use crate::workflow::runner::{FrameReport, Runner};
use anyhow::Result;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, RwLock},
    thread,
    time::Instant,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};
use watchcore::feed::Detection;

fn dashboard_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9100))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

fn model_from_report(runner: &Runner, report: &FrameReport) -> DashboardModel {
    let (frames_processed, alarms_fired) = runner.metrics();
    DashboardModel {
        status: report.status.as_str().to_string(),
        violations: report.verdict.violations.clone(),
        unrecognized: report.verdict.unrecognized.clone(),
        event_log: runner.event_lines(),
        fps: report.fps,
        frames_processed,
        alarms_fired,
    }
}

/// Bridge hosting the renderer-facing HTTP endpoint and pushing ingested
/// detection payloads through the shared runner.
pub struct DashboardBridge {
    state: Arc<RwLock<DashboardModel>>,
}

impl DashboardBridge {
    pub fn new(runner: Arc<Mutex<Runner>>) -> Self {
        let state = Arc::new(RwLock::new(DashboardModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());
        let started = Instant::now();
        let clock_filter = warp::any().map(move || started);

        let get_route = warp::path("status")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<DashboardModel>>| {
                warp::reply::json(&*state.read().unwrap())
            });

        let post_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and(clock_filter)
            .and_then(
                |detections: Vec<Detection>,
                 state: Arc<RwLock<DashboardModel>>,
                 runner: Arc<Mutex<Runner>>,
                 started: Instant| async move {
                    let now = started.elapsed().as_secs_f64();
                    match runner.lock() {
                        Ok(mut runner) => {
                            let report = runner.process_frame(&detections, now);
                            let model = model_from_report(&runner, &report);
                            let status = model.status.clone();
                            let alarm_fired = report.alarm_fired;
                            *state.write().unwrap() = model;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": status,
                                    "alarm_fired": alarm_fired,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(post_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(dashboard_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &DashboardModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[DASH] status {}, log lines {}, fps {:.1}",
            guard.status,
            guard.event_log.len(),
            guard.fps
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[DASH] {}", message);
    }

    pub fn render_model(runner: &Runner, report: &FrameReport) -> DashboardModel {
        model_from_report(runner, report)
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> DashboardModel {
        self.state.read().unwrap().clone()
    }
}
