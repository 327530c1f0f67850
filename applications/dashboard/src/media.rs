//! rodio-backed media element
//!
//! Tone files are fetched once through the asset client and decoded from
//! memory, so directory and HTTP asset roots behave the same.

use crate::error::{DashboardError, Result};
use motive_assets::AssetClient;
use motive_core::Track;
use motive_playback::{MediaElement, PlaybackError};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

/// Encoded tone files keyed by file name
pub type ToneBank = HashMap<String, Arc<[u8]>>;

/// Fetch every track's file, skipping (and logging) the ones that fail
pub async fn fetch_tones(assets: &AssetClient, tracks: &[Track]) -> ToneBank {
    let mut bank = ToneBank::new();
    for track in tracks {
        match assets.read(&track.file).await {
            Ok(bytes) => {
                tracing::debug!(file = %track.file, bytes = bytes.len(), "Tone loaded");
                bank.insert(track.file.clone(), Arc::from(bytes));
            }
            Err(e) => {
                tracing::warn!(
                    file = %track.file,
                    location = %assets.location(&track.file),
                    error = %e,
                    "Tone unavailable"
                );
            }
        }
    }
    bank
}

/// Media element playing through the default audio output device
pub struct RodioMedia {
    // Dropping the stream stops all output
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,
    tones: ToneBank,
    current: Option<String>,
    queued: bool,
    level: f32,
    muted: bool,
}

impl RodioMedia {
    /// Open the default output device
    pub fn open(tones: ToneBank) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| DashboardError::Audio(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| DashboardError::Audio(e.to_string()))?;
        sink.pause();

        Ok(Self {
            _stream: stream,
            handle,
            sink,
            tones,
            current: None,
            queued: false,
            level: 1.0,
            muted: false,
        })
    }

    /// Replace the sink with an empty, paused one
    fn rewind(&mut self) -> motive_playback::Result<()> {
        self.sink.stop();
        self.sink = Sink::try_new(&self.handle).map_err(media_error)?;
        self.sink.pause();
        self.queued = false;
        self.apply_gain();
        Ok(())
    }

    fn apply_gain(&self) {
        self.sink.set_volume(if self.muted { 0.0 } else { self.level });
    }
}

fn media_error(e: impl std::fmt::Display) -> PlaybackError {
    PlaybackError::Media(e.to_string())
}

impl MediaElement for RodioMedia {
    fn set_source(&mut self, file: &str) -> motive_playback::Result<()> {
        self.rewind()?;
        self.current = Some(file.to_string());
        if self.tones.contains_key(file) {
            Ok(())
        } else {
            Err(PlaybackError::Media(format!("{file} was not loaded")))
        }
    }

    fn play(&mut self) -> motive_playback::Result<()> {
        let file = self
            .current
            .as_deref()
            .ok_or_else(|| PlaybackError::Media("no source loaded".into()))?;

        // A finished source leaves the sink empty; start over from the top
        if !self.queued || self.sink.empty() {
            let bytes = self
                .tones
                .get(file)
                .cloned()
                .ok_or_else(|| PlaybackError::Media(format!("{file} was not loaded")))?;
            let decoder = Decoder::new(Cursor::new(bytes)).map_err(media_error)?;
            self.sink.append(decoder);
            self.queued = true;
        }

        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn seek(&mut self, position: Duration) -> motive_playback::Result<()> {
        if position.is_zero() {
            return self.rewind();
        }
        if !self.queued {
            return Err(PlaybackError::InvalidOperation(
                "cannot seek before playback starts".into(),
            ));
        }
        self.sink.try_seek(position).map_err(media_error)
    }

    fn position(&self) -> Duration {
        if self.queued {
            self.sink.get_pos()
        } else {
            Duration::ZERO
        }
    }

    fn set_volume(&mut self, level: f32) {
        self.level = level;
        self.apply_gain();
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_gain();
    }

    fn has_ended(&self) -> bool {
        self.queued && self.sink.empty()
    }
}
