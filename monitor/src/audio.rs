use log::warn;
use std::process::Command;
use std::thread;
use watchcore::feed::AlarmSink;

/// Plays the OS alert sound on a detached thread. Fire-and-forget: the
/// thread may outlive the frame that triggered it, and player failures
/// are logged and swallowed so they never reach the processing loop.
pub struct SystemBeep;

impl AlarmSink for SystemBeep {
    fn trigger(&self) {
        thread::spawn(|| {
            let result = if cfg!(target_os = "macos") {
                Command::new("afplay")
                    .arg("/System/Library/Sounds/Sosumi.aiff")
                    .status()
            } else {
                Command::new("aplay")
                    .arg("-q")
                    .arg("/usr/share/sounds/alsa/Front_Center.wav")
                    .status()
            };
            match result {
                Ok(status) if status.success() => {}
                Ok(status) => warn!("alarm player exited with {}", status),
                Err(err) => warn!("alarm player unavailable: {}", err),
            }
        });
    }
}
