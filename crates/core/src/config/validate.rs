use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - youtube-dl and ffmpeg exist on disk
/// - ffprobe exists, when configured
/// - formats are not empty
/// - the output template keeps the extension placeholder
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let binaries = &config.binaries;
    if !binaries.youtube_dl.exists() || !binaries.ffmpeg.exists() {
        return Err(ConfigError::ValidationError(
            "youtube-dl and ffmpeg binaries must exist".to_string(),
        ));
    }

    if let Some(ffprobe) = &binaries.ffprobe {
        if !ffprobe.exists() {
            return Err(ConfigError::ValidationError(format!(
                "ffprobe binary does not exist: {}",
                ffprobe.display()
            )));
        }
    }

    let download = &config.download;
    if download.video_format.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "download.video_format cannot be empty".to_string(),
        ));
    }
    if download.audio_format.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "download.audio_format cannot be empty".to_string(),
        ));
    }
    if !download.output_template.contains("%(ext)s") {
        return Err(ConfigError::ValidationError(
            "download.output_template must contain %(ext)s".to_string(),
        ));
    }

    Ok(())
}
