//! # Documents
//!
//! A [`VectorDocument`] accumulates freehand stroke paths and caption texts
//! against a fixed viewport, and is the single owner of everything drawn.
//! Paths enter through [`VectorDocument::start_path`] and grow one command
//! at a time while current; undo and reset are the only ways out. Nothing
//! here touches a renderer. The raster side pulls
//! [`VectorDocument::paths_snapshot`] after any mutation and redraws from
//! scratch.

use crate::{
    stroke::{PathCommand, Polyline, StrokePath, StrokeStyle},
    text::{TextAnnotation, TextStyle},
};

/// Errors from document construction and path mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Construction with a negative viewport dimension. Rejected outright,
    /// never clamped.
    #[error("invalid viewport dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// A drawing command arrived while no path was accepting commands.
    #[error("no current path to append to")]
    NoCurrentPath,
}

/// One path with its shape materialized for raster drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSnapshot {
    pub style: StrokeStyle,
    /// Straight-segment polylines, one per subpath.
    pub polylines: smallvec::SmallVec<[Polyline; 1]>,
}

/// An ordered freehand drawing: stroke paths in z-order, caption texts on
/// top, bound to the viewport measured at construction.
#[derive(Clone, Debug)]
pub struct VectorDocument {
    width: u32,
    height: u32,
    paths: Vec<StrokePath>,
    texts: Vec<TextAnnotation>,
    /// Index of the path accepting appends.
    /// Invariant: when `Some(i)`, `i < paths.len()`.
    current: Option<usize>,
}
impl VectorDocument {
    /// An empty document over a `width` by `height` surface.
    ///
    /// Dimensions come from the measured surface and zero is legitimate;
    /// negative is not.
    pub fn new(width: i32, height: i32) -> Result<Self, DocumentError> {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(DocumentError::InvalidDimensions { width, height });
        };
        Ok(Self {
            width,
            height,
            paths: Vec::new(),
            texts: Vec::new(),
            current: None,
        })
    }
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
    /// Begin a new path drawn with `style`. It becomes the current path,
    /// freezing the previous one.
    pub fn start_path(&mut self, style: StrokeStyle) {
        self.paths.push(StrokePath::new(style));
        self.current = Some(self.paths.len() - 1);
    }
    fn append(&mut self, command: PathCommand) -> Result<(), DocumentError> {
        let current = self.current.ok_or(DocumentError::NoCurrentPath)?;
        // In bounds per the `current` invariant.
        self.paths[current].push(command);
        Ok(())
    }
    /// Begin a subpath of the current path at (x, y).
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<(), DocumentError> {
        self.append(PathCommand::Move { x, y })
    }
    /// Extend the current path with a straight segment to (x, y).
    pub fn line_to(&mut self, x: f32, y: f32) -> Result<(), DocumentError> {
        self.append(PathCommand::Line { x, y })
    }
    /// Extend the current path with a quadratic curve to (x, y), control
    /// point (x1, y1).
    pub fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) -> Result<(), DocumentError> {
        self.append(PathCommand::QuadCurve { x1, y1, x, y })
    }
    /// Remove the most recently started path, all of its commands with it.
    ///
    /// Returns the removed path, or `None` if there was nothing to undo.
    /// Afterwards no path is current; drawing resumes with `start_path`.
    pub fn undo_last_path(&mut self) -> Option<StrokePath> {
        let undone = self.paths.pop();
        if undone.is_none() {
            log::trace!("undo with no paths, ignoring");
        }
        self.current = None;
        undone
    }
    /// Place a caption at (x, y). Captions are unaffected by path undo and
    /// by `reset`.
    pub fn add_text(
        &mut self,
        x: f32,
        y: f32,
        content: impl Into<String>,
        font_size: f32,
        style: TextStyle,
    ) {
        self.texts.push(TextAnnotation {
            x,
            y,
            content: content.into(),
            font_size,
            style,
        });
    }
    /// Wipe the drawing: every path goes, no path is current. The viewport
    /// and any captions stay.
    pub fn reset(&mut self) {
        self.paths.clear();
        self.current = None;
    }
    /// Paths in z-order, earliest at the bottom.
    #[must_use]
    pub fn paths(&self) -> &[StrokePath] {
        &self.paths
    }
    /// Captions in insertion order. Always rendered over the paths.
    #[must_use]
    pub fn texts(&self) -> &[TextAnnotation] {
        &self.texts
    }
    /// The path currently accepting drawing commands, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<&StrokePath> {
        self.current.map(|i| &self.paths[i])
    }
    /// Materialize every path for raster redraw.
    ///
    /// Undo has no incremental erase; after any mutation the raster side
    /// clears its canvas and redraws every remaining path from this
    /// projection.
    #[must_use]
    pub fn paths_snapshot(&self) -> Vec<PathSnapshot> {
        self.paths
            .iter()
            .map(|path| PathSnapshot {
                style: path.style(),
                polylines: path.flatten(),
            })
            .collect()
    }
}
