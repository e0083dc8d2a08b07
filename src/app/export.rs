//! Exporting animation frames as an image sequence.

use super::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while preparing an export. These are never fatal to playback.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot export an animation without frames")]
    NotAnimated,
}

/// Tracks which frames of one animation cycle still need to be written to an
/// image sequence in `dir`.
///
/// The frames themselves are written by the window's frame capture; this
/// only hands out the target path of each frame, once, in order.
#[derive(Debug, Clone)]
pub struct FrameExporter {
    dir: PathBuf,
    fps: u32,
    frame_count: usize,
    captured: usize,
}

impl FrameExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_fps(dir, EXPORT_FPS)
    }

    pub fn with_fps(dir: impl Into<PathBuf>, fps: u32) -> Self {
        Self {
            dir: dir.into(),
            fps,
            frame_count: 0,
            captured: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub const fn fps(&self) -> u32 {
        self.fps
    }

    /// Creates the output directory and resets progress for `animation`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NotAnimated`] for an empty animation, or
    /// [`ExportError::CreateDir`] if the directory cannot be created.
    pub fn prepare(&mut self, animation: &Animation) -> Result<(), ExportError> {
        if animation.is_empty() {
            return Err(ExportError::NotAnimated);
        }

        std::fs::create_dir_all(&self.dir).map_err(|source| {
            ExportError::CreateDir { path: self.dir.clone(), source }
        })?;

        self.frame_count = animation.len();
        self.captured = 0;

        tracing::debug!(
            dir = %self.dir.display(),
            frames = self.frame_count,
            "export prepared"
        );

        Ok(())
    }

    /// Whether every frame of the prepared animation has been handed out.
    pub const fn is_complete(&self) -> bool {
        self.frame_count > 0 && self.captured == self.frame_count
    }

    /// The file path of frame `frame`.
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        let width = self.frame_count.to_string().len().max(3);
        self.dir.join(format!("{frame:0width$}.png"))
    }

    /// Returns the path to capture `frame` to, if it is the next frame still
    /// missing from the sequence.
    pub fn capture_target(&mut self, frame: usize) -> Option<PathBuf> {
        if self.captured >= self.frame_count || frame != self.captured {
            return None;
        }

        let path = self.frame_path(frame);
        self.captured += 1;

        if self.is_complete() {
            tracing::info!(
                "exported {} frames to {} ({} fps)",
                self.frame_count,
                self.dir.display(),
                self.fps,
            );
        }

        Some(path)
    }
}
