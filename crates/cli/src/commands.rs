//! Subcommands and their execution.

use clap::Subcommand;
use tracing::info;
use url::Url;

use ytdl_core::{AdapterError, DownloadCallbacks, DownloadMode, MediaDownloader, Operation};

use crate::output::{Event, Printer};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the media title
    Title { url: Url },
    /// Print the filename a download would be saved as
    Filename { url: Url },
    /// Download the video
    Video { url: Url },
    /// Download and extract the audio track
    Audio { url: Url },
}

impl Command {
    pub fn url(&self) -> &Url {
        match self {
            Self::Title { url }
            | Self::Filename { url }
            | Self::Video { url }
            | Self::Audio { url } => url,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Title { .. } => Operation::Title,
            Self::Filename { .. } => Operation::Filename,
            Self::Video { .. } => Operation::DownloadVideo,
            Self::Audio { .. } => Operation::DownloadAudio,
        }
    }
}

/// Run one command against `downloader`, printing its results.
pub async fn execute<D>(
    downloader: &mut D,
    command: &Command,
    printer: Printer,
) -> Result<(), AdapterError>
where
    D: MediaDownloader + ?Sized,
{
    let url = command.url();
    info!(
        downloader = downloader.name(),
        operation = %command.operation(),
        %url,
        "Running command"
    );
    match command {
        Command::Title { .. } => {
            let title = downloader.resolve_title(url).await?;
            printer.print(&Event::Title { title: &title });
        }
        Command::Filename { .. } => {
            let filename = downloader.resolve_filename(url).await?;
            printer.print(&Event::Filename {
                filename: &filename,
            });
        }
        Command::Video { .. } => {
            downloader
                .download(url, DownloadMode::Video, callbacks(printer))
                .await?;
            printer.print(&Event::Finished {
                operation: command.operation(),
            });
        }
        Command::Audio { .. } => {
            downloader
                .download(url, DownloadMode::Audio, callbacks(printer))
                .await?;
            printer.print(&Event::Finished {
                operation: command.operation(),
            });
        }
    }
    Ok(())
}

fn callbacks(printer: Printer) -> DownloadCallbacks {
    DownloadCallbacks::new()
        .on_phase_change(move |phase| printer.print(&Event::Phase { phase }))
        .on_progress(move |sample| printer.print(&Event::Progress(&sample)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytdl_core::testing::{fixtures, MockDownloader};
    use ytdl_core::Phase;

    fn url() -> Url {
        Url::parse("https://www.youtube.com/watch?v=oHg5SJYRHA0").unwrap()
    }

    #[test]
    fn test_command_operation() {
        let command = Command::Audio { url: url() };
        assert_eq!(command.operation(), Operation::DownloadAudio);
        assert_eq!(command.url(), &url());
    }

    #[tokio::test]
    async fn test_execute_title() {
        let mut downloader = MockDownloader::new();
        downloader.set_title(Some("RickRoll'D")).await;

        execute(&mut downloader, &Command::Title { url: url() }, Printer::new(true))
            .await
            .unwrap();

        let calls = downloader.recorded_calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, Operation::Title);
        assert_eq!(calls[0].url, url());
    }

    #[tokio::test]
    async fn test_execute_audio_download() {
        let mut downloader = MockDownloader::new();
        downloader.set_output(fixtures::AUDIO_DOWNLOAD_OUTPUT.iter().copied()).await;

        execute(&mut downloader, &Command::Audio { url: url() }, Printer::new(false))
            .await
            .unwrap();

        assert_eq!(downloader.current_phase(), Phase::Complete);
        let calls = downloader.recorded_calls().await;
        assert_eq!(calls[0].operation, Operation::DownloadAudio);
    }

    #[tokio::test]
    async fn test_execute_surfaces_diagnostics() {
        let mut downloader = MockDownloader::new();
        downloader
            .set_diagnostics(fixtures::INCOMPLETE_ID_DIAGNOSTICS.iter().copied())
            .await;

        let err = execute(&mut downloader, &Command::Video { url: url() }, Printer::new(false))
            .await
            .unwrap_err();

        assert!(err.is_diagnostic());
        assert!(!err.is_warning_only());
        assert_eq!(err.diagnostics().unwrap().len(), 2);
    }
}
