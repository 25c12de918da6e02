//! Human and JSON rendering of command results.

use serde::Serialize;

use ytdl_core::{Operation, Phase, ProgressSample};

/// Something worth telling the user.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<'a> {
    Title { title: &'a str },
    Filename { filename: &'a str },
    Phase { phase: Phase },
    Progress(&'a ProgressSample),
    Finished { operation: Operation },
}

/// Writes events to standard output.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn print(&self, event: &Event<'_>) {
        println!("{}", self.render(event));
    }

    pub fn render(&self, event: &Event<'_>) -> String {
        if self.json {
            // Infallible for these field types.
            return serde_json::to_string(event).unwrap_or_default();
        }

        match event {
            Event::Title { title } => title.to_string(),
            Event::Filename { filename } => filename.to_string(),
            Event::Phase { phase } => format!("phase: {phase}"),
            Event::Progress(sample) => format!(
                "{:>6}% of {} at {} ETA {}",
                sample.percent_complete().to_string(),
                sample.file_size(),
                sample.download_speed(),
                sample.eta()
            ),
            Event::Finished { operation } => format!("{operation} finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRESS: &str = "[download]  10.8% of 9.22MiB at  5.68MiB/s ETA 00:01";

    #[test]
    fn test_human_rendering() {
        let printer = Printer::new(false);
        let sample = ProgressSample::parse(PROGRESS).unwrap();

        assert_eq!(printer.render(&Event::Title { title: "RickRoll'D" }), "RickRoll'D");
        assert_eq!(
            printer.render(&Event::Phase {
                phase: Phase::Downloading
            }),
            "phase: downloading"
        );
        assert_eq!(
            printer.render(&Event::Progress(&sample)),
            "  10.8% of 9.22MiB at 5.68MiB/s ETA 00:01"
        );
        assert_eq!(
            printer.render(&Event::Finished {
                operation: Operation::DownloadAudio
            }),
            "audio download finished"
        );
    }

    #[test]
    fn test_json_rendering() {
        let printer = Printer::new(true);
        let sample = ProgressSample::parse(PROGRESS).unwrap();

        let phase: serde_json::Value = serde_json::from_str(&printer.render(&Event::Phase {
            phase: Phase::Converting,
        }))
        .unwrap();
        assert_eq!(phase, serde_json::json!({"event": "phase", "phase": "converting"}));

        let progress: serde_json::Value =
            serde_json::from_str(&printer.render(&Event::Progress(&sample))).unwrap();
        assert_eq!(
            progress,
            serde_json::json!({
                "event": "progress",
                "percent_complete": "10.8",
                "file_size": "9.22MiB",
                "download_speed": "5.68MiB/s",
                "eta": "00:01"
            })
        );

        let finished: serde_json::Value = serde_json::from_str(&printer.render(&Event::Finished {
            operation: Operation::DownloadVideo,
        }))
        .unwrap();
        assert_eq!(
            finished,
            serde_json::json!({"event": "finished", "operation": "download_video"})
        );
    }
}
