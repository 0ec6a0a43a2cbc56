//! # Stroke sampling
//!
//! Raw pointer samples arrive far denser than a legible path needs. The
//! sampler thins them with a per-axis movement tolerance, and each kept
//! movement lands as a quadratic curve aimed at the midpoint of the old and
//! new positions. Consecutive curves share their anchors, which keeps the
//! drawn line smooth where segments meet.

use crate::{
    document::{DocumentError, VectorDocument},
    stroke::StrokeStyle,
};

/// Turns a begin/sample/end pointer stream into smoothed path commands.
///
/// Holds only the anchor of the stroke in progress; the document is handed
/// to every call, so a sampler is not tied to one document (one stroke at a
/// time, though).
#[derive(Copy, Clone, Debug)]
pub struct StrokeSampler {
    tolerance: f32,
    /// Last committed pointer position of the stroke in progress.
    anchor: Option<[f32; 2]>,
}
impl Default for StrokeSampler {
    fn default() -> Self {
        Self::new()
    }
}
impl StrokeSampler {
    /// Minimum movement along either axis, in surface units, for a sample
    /// to be kept.
    pub const DEFAULT_TOLERANCE: f32 = 4.0;

    #[must_use]
    pub fn new() -> Self {
        Self::with_tolerance(Self::DEFAULT_TOLERANCE)
    }
    /// A sampler with a custom tolerance. Zero keeps every sample.
    #[must_use]
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            tolerance,
            anchor: None,
        }
    }
    /// True between `begin` and `end`.
    #[must_use]
    pub fn is_sampling(&self) -> bool {
        self.anchor.is_some()
    }
    /// Start a stroke at (x, y), beginning a fresh path drawn with `style`.
    ///
    /// A stroke still in progress is finished first, as if `end` were
    /// called - pointer streams can lose their release event.
    pub fn begin(
        &mut self,
        document: &mut VectorDocument,
        style: StrokeStyle,
        x: f32,
        y: f32,
    ) -> Result<(), DocumentError> {
        self.end(document)?;
        document.start_path(style);
        document.move_to(x, y)?;
        self.anchor = Some([x, y]);
        Ok(())
    }
    /// Feed one pointer sample.
    ///
    /// Movement below the tolerance on both axes is dropped. A kept sample
    /// appends a curve toward the midpoint of anchor and sample, and the
    /// anchor moves to the sample. Samples with no stroke in progress are
    /// ignored.
    pub fn sample(
        &mut self,
        document: &mut VectorDocument,
        x: f32,
        y: f32,
    ) -> Result<(), DocumentError> {
        let Some([ax, ay]) = self.anchor else {
            log::debug!("pointer sample with no stroke in progress, ignoring");
            return Ok(());
        };
        if (x - ax).abs() < self.tolerance && (y - ay).abs() < self.tolerance {
            return Ok(());
        }
        document.quad_to(ax, ay, (x + ax) / 2.0, (y + ay) / 2.0)?;
        self.anchor = Some([x, y]);
        Ok(())
    }
    /// Finish the stroke, closing it with a straight segment back to the
    /// last committed position. A lone tap becomes a zero-length segment,
    /// which draws a dot under a round cap.
    ///
    /// No-op when no stroke is in progress.
    pub fn end(&mut self, document: &mut VectorDocument) -> Result<(), DocumentError> {
        let Some([x, y]) = self.anchor.take() else {
            return Ok(());
        };
        document.line_to(x, y)
    }
}
