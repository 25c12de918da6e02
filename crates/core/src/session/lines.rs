//! Line splitting for subprocess pipes.

use std::io;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Reads text lines from a pipe.
///
/// Lines end at `\n`, `\r` or `\r\n`, so carriage-return progress updates
/// arrive as separate lines. Invalid UTF-8 is replaced rather than failing
/// the read.
pub(crate) struct LineReader<R> {
    inner: BufReader<R>,
    skip_lf: bool,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            skip_lf: false,
        }
    }

    /// Returns the next line without its terminator, or `None` at end of stream.
    pub(crate) async fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        loop {
            let available = self.inner.fill_buf().await?;
            if available.is_empty() {
                return Ok((!bytes.is_empty()).then(|| decode(&bytes)));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    bytes.extend_from_slice(&available[..pos]);
                    self.skip_lf = available[pos] == b'\r';
                    self.inner.consume(pos + 1);
                    return Ok(Some(decode(&bytes)));
                }
                None => {
                    let len = available.len();
                    bytes.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }

    /// Reads every remaining line.
    pub(crate) async fn collect(mut self) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line().await? {
            lines.push(line);
        }
        Ok(lines)
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_splits_on_newlines() {
        let mock = Builder::new().read(b"first\nsecond\n").build();
        let lines = LineReader::new(mock).collect().await.unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_splits_on_carriage_returns() {
        let mock = Builder::new()
            .read(b"[download]  1.0%\r[download]  2.0%\r\nfinal\r\n")
            .build();
        let lines = LineReader::new(mock).collect().await.unwrap();
        assert_eq!(lines, vec!["[download]  1.0%", "[download]  2.0%", "final"]);
    }

    #[tokio::test]
    async fn test_crlf_split_across_reads() {
        let mock = Builder::new().read(b"one\r").read(b"\ntwo").build();
        let lines = LineReader::new(mock).collect().await.unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_line_split_across_reads() {
        let mock = Builder::new().read(b"hel").read(b"lo\nwor").read(b"ld").build();
        let lines = LineReader::new(mock).collect().await.unwrap();
        assert_eq!(lines, vec!["hello", "world"]);
    }

    #[tokio::test]
    async fn test_keeps_blank_lines() {
        let mock = Builder::new().read(b"a\n\nb\n").build();
        let lines = LineReader::new(mock).collect().await.unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[tokio::test]
    async fn test_replaces_invalid_utf8() {
        let mock = Builder::new().read(b"Beyonc\xe9\n").build();
        let mut reader = LineReader::new(mock);
        let line = reader.next_line().await.unwrap().unwrap();
        assert_eq!(line, "Beyonc\u{fffd}");
        assert!(reader.next_line().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_stream() {
        let mock = Builder::new().build();
        let lines = LineReader::new(mock).collect().await.unwrap();
        assert!(lines.is_empty());
    }
}
