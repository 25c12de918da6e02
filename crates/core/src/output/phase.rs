//! Lifecycle phases derived from stage tags.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ParseError;

const RESOLVING_TAGS: &str = r"youtube(?::[\w-]+)?|generic|info";
const DOWNLOADING_TAGS: &str = r"download";
const CONVERTING_TAGS: &str = r"ffmpeg|ExtractAudio|Merger|VideoConvertor";

fn tag_pattern(tags: &str) -> Regex {
    Regex::new(&format!(r"\[(?:{tags})\]")).expect("phase pattern is valid")
}

static RESOLVING: Lazy<Regex> = Lazy::new(|| tag_pattern(RESOLVING_TAGS));
static DOWNLOADING: Lazy<Regex> = Lazy::new(|| tag_pattern(DOWNLOADING_TAGS));
static CONVERTING: Lazy<Regex> = Lazy::new(|| tag_pattern(CONVERTING_TAGS));
static ANY_PHASE: Lazy<Regex> = Lazy::new(|| {
    tag_pattern(&[RESOLVING_TAGS, DOWNLOADING_TAGS, CONVERTING_TAGS].join("|"))
});

/// Coarse download lifecycle.
///
/// `None` and `Complete` are bookends owned by the session: no output line
/// parses to either of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    None,
    Resolving,
    Downloading,
    Converting,
    Complete,
}

impl Phase {
    /// Whether `line` carries any recognised stage tag.
    pub fn is_phase_line(line: &str) -> bool {
        ANY_PHASE.is_match(line)
    }

    /// Maps a tagged line onto its phase. Resolver tags win over download
    /// tags, which win over conversion tags.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        if RESOLVING.is_match(line) {
            Ok(Self::Resolving)
        } else if DOWNLOADING.is_match(line) {
            Ok(Self::Downloading)
        } else if CONVERTING.is_match(line) {
            Ok(Self::Converting)
        } else {
            Err(ParseError::phase(line))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Resolving => "resolving",
            Self::Downloading => "downloading",
            Self::Converting => "converting",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
