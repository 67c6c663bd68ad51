pub mod fps;
pub mod log;
pub mod metrics;

pub use fps::FrameRateMeter;
pub use log::LogManager;
pub use metrics::MetricsRecorder;
