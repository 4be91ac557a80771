//! Playback sinks for rendered buffers.
//!
//! A sink receives exactly one buffer and plays it at most once. The only
//! sink shipped here "plays" by writing a WAV file, which makes the transport
//! rules observable without an audio device.

use std::fs;
use std::path::{Path, PathBuf};

use scorebake_render::{AudioBuffer, RenderError, WavResult};
use thiserror::Error;
use tracing::{debug, info};

/// Transport state of a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    /// Loaded, never started.
    Ready,
    /// Playback ran to completion.
    Finished,
    /// Stopped before playback began.
    Stopped,
}

/// Errors raised by a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink cannot play on this host.
    #[error("playback sink unavailable: {reason}")]
    Unavailable {
        /// Why the sink is unavailable.
        reason: String,
    },

    /// `start` was called a second time.
    #[error("playback already started; a sink plays its buffer only once")]
    AlreadyStarted,

    /// `start` was called after `stop`.
    #[error("playback was stopped and cannot be restarted")]
    Stopped,

    /// Encoding the buffer failed.
    #[error(transparent)]
    Encode(#[from] RenderError),

    /// Writing the output failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Returns the stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SinkError::Unavailable { .. } => "SINK_001",
            SinkError::AlreadyStarted => "SINK_002",
            SinkError::Stopped => "SINK_003",
            SinkError::Encode(inner) => inner.code(),
            SinkError::Io { .. } => "SINK_004",
        }
    }
}

/// A consumer that plays one rendered buffer.
pub trait PlaybackSink {
    /// Host capability check, performed before rendering.
    fn is_available(&self) -> Result<(), SinkError>;

    /// Plays the buffer. Allowed once, and only from [`TransportState::Ready`].
    fn start(&mut self, buffer: &AudioBuffer) -> Result<(), SinkError>;

    /// Halts playback. Before `start` this cancels it; afterwards it is a no-op.
    fn stop(&mut self);

    /// Current transport state.
    fn state(&self) -> TransportState;
}

/// Sink that writes the buffer to a 16-bit WAV file.
#[derive(Debug)]
pub struct WavFileSink {
    path: PathBuf,
    state: TransportState,
    written: Option<WavResult>,
}

impl WavFileSink {
    /// Creates a sink targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: TransportState::Ready,
            written: None,
        }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The encoded file, once written.
    pub fn written(&self) -> Option<&WavResult> {
        self.written.as_ref()
    }
}

impl PlaybackSink for WavFileSink {
    fn is_available(&self) -> Result<(), SinkError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        check_output_dir(dir)
    }

    fn start(&mut self, buffer: &AudioBuffer) -> Result<(), SinkError> {
        match self.state {
            TransportState::Ready => {}
            TransportState::Finished => return Err(SinkError::AlreadyStarted),
            TransportState::Stopped => return Err(SinkError::Stopped),
        }

        let wav = buffer.to_wav()?;
        fs::write(&self.path, &wav.wav_data).map_err(|source| SinkError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            bytes = wav.wav_data.len(),
            pcm_hash = %wav.pcm_hash,
            "wrote WAV file"
        );

        self.state = TransportState::Finished;
        self.written = Some(wav);
        Ok(())
    }

    fn stop(&mut self) {
        if self.state == TransportState::Ready {
            debug!(path = %self.path.display(), "playback cancelled before start");
            self.state = TransportState::Stopped;
        }
    }

    fn state(&self) -> TransportState {
        self.state
    }
}

/// Verifies that `dir` exists and accepts new files.
pub fn check_output_dir(dir: &Path) -> Result<(), SinkError> {
    if !dir.is_dir() {
        return Err(SinkError::Unavailable {
            reason: format!("{} is not a directory", dir.display()),
        });
    }

    let probe = dir.join(".scorebake_write_test");
    match fs::write(&probe, b"test") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            Ok(())
        }
        Err(e) => Err(SinkError::Unavailable {
            reason: format!("cannot write to {}: {}", dir.display(), e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn buffer() -> AudioBuffer {
        AudioBuffer::from_channels(vec![vec![0.0, 1.0, -1.0], vec![0.0, 1.0, -1.0]], 8000)
    }

    #[test]
    fn test_start_writes_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let mut sink = WavFileSink::new(&path);

        assert!(sink.is_available().is_ok());
        assert_eq!(sink.state(), TransportState::Ready);
        sink.start(&buffer()).unwrap();
        assert_eq!(sink.state(), TransportState::Finished);
        assert!(path.exists());
        assert_eq!(
            fs::read(&path).unwrap(),
            sink.written().unwrap().wav_data
        );

        let err = sink.start(&buffer()).unwrap_err();
        assert!(matches!(err, SinkError::AlreadyStarted));
    }

    #[test]
    fn test_stop_before_start_cancels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let mut sink = WavFileSink::new(&path);

        sink.stop();
        assert_eq!(sink.state(), TransportState::Stopped);
        assert!(matches!(sink.start(&buffer()), Err(SinkError::Stopped)));
        assert!(!path.exists());
    }

    #[test]
    fn test_stop_after_finish_is_noop() {
        let dir = tempdir().unwrap();
        let mut sink = WavFileSink::new(dir.path().join("out.wav"));
        sink.start(&buffer()).unwrap();
        sink.stop();
        assert_eq!(sink.state(), TransportState::Finished);
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let dir = tempdir().unwrap();
        let sink = WavFileSink::new(dir.path().join("missing").join("out.wav"));
        let err = sink.is_available().unwrap_err();
        assert_eq!(err.code(), "SINK_001");
    }

    #[test]
    fn test_probe_leaves_no_file() {
        let dir = tempdir().unwrap();
        check_output_dir(dir.path()).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
