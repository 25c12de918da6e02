//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use url::Url;
use ytdl_core::{DownloadCallbacks, Invocation, Phase, ProgressSample};

pub fn url() -> Url {
    Url::parse("https://www.youtube.com/watch?v=oHg5SJYRHA0").unwrap()
}

/// Runs `body` with `sh -c`. The appended URL becomes `$1`.
pub fn shell(body: &str) -> Invocation {
    Invocation::new("/bin/sh").args(["-c", body, "sh"])
}

pub fn write_executable(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

/// Callbacks that record everything they see.
#[derive(Default)]
pub struct Recorder {
    phases: Arc<Mutex<Vec<Phase>>>,
    samples: Arc<Mutex<Vec<ProgressSample>>>,
    output: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn callbacks(&self) -> DownloadCallbacks {
        let phases = Arc::clone(&self.phases);
        let samples = Arc::clone(&self.samples);
        let output = Arc::clone(&self.output);
        DownloadCallbacks::new()
            .on_phase_change(move |phase| phases.lock().unwrap().push(phase))
            .on_progress(move |sample| samples.lock().unwrap().push(sample))
            .on_output(move |line| output.lock().unwrap().push(line.to_string()))
    }

    /// Records progress only, leaving phases untracked.
    pub fn progress_only(&self) -> DownloadCallbacks {
        let samples = Arc::clone(&self.samples);
        DownloadCallbacks::new().on_progress(move |sample| samples.lock().unwrap().push(sample))
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    pub fn samples(&self) -> Vec<ProgressSample> {
        self.samples.lock().unwrap().clone()
    }

    pub fn output(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }
}
