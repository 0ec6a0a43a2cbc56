//! # Strokes
//!
//! Value types for one drawn line, from the pen style down to the individual
//! path commands. Paths are created and appended to through
//! [`crate::document::VectorDocument`]; once the document moves on to a new
//! path, earlier ones are frozen.

use crate::color::Color;

/// Line-ending style for the open ends of a stroke.
///
/// The `strum` strings are the serialized attribute values, decoupled from
/// the variant names.
#[derive(strum::AsRefStr, strum::EnumString, PartialEq, Eq, Copy, Clone, Hash, Debug)]
#[repr(u8)]
pub enum Cap {
    /// Squared off exactly at the endpoint.
    #[strum(serialize = "butt")]
    Butt,
    #[strum(serialize = "round")]
    Round,
    /// Squared off half the stroke width past the endpoint.
    #[strum(serialize = "square")]
    Square,
}
impl Default for Cap {
    fn default() -> Self {
        Self::Round
    }
}

/// Corner style where two segments of a stroke meet.
#[derive(strum::AsRefStr, strum::EnumString, PartialEq, Eq, Copy, Clone, Hash, Debug)]
#[repr(u8)]
pub enum Join {
    #[strum(serialize = "miter")]
    Miter,
    #[strum(serialize = "round")]
    Round,
    #[strum(serialize = "bevel")]
    Bevel,
}
impl Default for Join {
    fn default() -> Self {
        Self::Round
    }
}

/// Stroke appearance, fixed for the whole path.
///
/// A pen change mid-drawing takes effect on the next started path only.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub cap: Cap,
    pub join: Join,
}
impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::GREEN,
            width: 5.5,
            cap: Cap::default(),
            join: Join::default(),
        }
    }
}

/// One primitive instruction of a path outline.
///
/// Order within a path is drawing order, and the serialized path data
/// concatenates the commands in exactly that order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and begin a new subpath at (x, y).
    Move { x: f32, y: f32 },
    /// Straight segment from the current point to (x, y).
    Line { x: f32, y: f32 },
    /// Quadratic Bézier from the current point to (x, y), pulled toward the
    /// control point (x1, y1).
    QuadCurve { x1: f32, y1: f32, x: f32, y: f32 },
}
impl PathCommand {
    /// The letter starting this command's textual form.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Move { .. } => 'M',
            Self::Line { .. } => 'L',
            Self::QuadCurve { .. } => 'Q',
        }
    }
}
/// The textual form used in path data: the letter, then the parameters
/// separated by single spaces, then one trailing space.
impl std::fmt::Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Move { x, y } => write!(f, "M{x} {y} "),
            Self::Line { x, y } => write!(f, "L{x} {y} "),
            Self::QuadCurve { x1, y1, x, y } => write!(f, "Q{x1} {y1} {x} {y} "),
        }
    }
}

/// A run of straight segments, as produced by flattening.
pub type Polyline = Vec<[f32; 2]>;

/// Segments per quadratic curve when flattening for raster use.
const QUAD_SEGMENTS: u32 = 16;

/// One continuous drawn line: a style plus the ordered commands tracing its
/// shape.
///
/// The command list is append-only and only while this is the document's
/// current path, so it is kept private here.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePath {
    style: StrokeStyle,
    commands: Vec<PathCommand>,
}
impl StrokePath {
    pub(crate) fn new(style: StrokeStyle) -> Self {
        Self {
            style,
            commands: Vec::new(),
        }
    }
    pub(crate) fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }
    #[must_use]
    pub fn style(&self) -> StrokeStyle {
        self.style
    }
    /// Commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
    /// Reduce the path to straight segments, one polyline per subpath, with
    /// curves subdivided uniformly.
    ///
    /// A path that issues segments before any `Move` starts at the origin,
    /// matching raster path semantics. Polylines shorter than two points
    /// draw nothing and are dropped. Almost every drawn stroke is a single
    /// subpath, hence the smallvec.
    #[must_use]
    pub fn flatten(&self) -> smallvec::SmallVec<[Polyline; 1]> {
        // Current pen position, starting at the origin if no subpath is open.
        fn resume(line: &mut Polyline) -> [f32; 2] {
            if let Some(&last) = line.last() {
                last
            } else {
                line.push([0.0; 2]);
                [0.0; 2]
            }
        }

        let mut polylines = smallvec::SmallVec::new();
        let mut line = Polyline::new();
        for &command in &self.commands {
            match command {
                PathCommand::Move { x, y } => {
                    if line.len() > 1 {
                        polylines.push(std::mem::take(&mut line));
                    } else {
                        line.clear();
                    }
                    line.push([x, y]);
                }
                PathCommand::Line { x, y } => {
                    resume(&mut line);
                    line.push([x, y]);
                }
                PathCommand::QuadCurve { x1, y1, x, y } => {
                    let [x0, y0] = resume(&mut line);
                    // Uniform parameter steps, skipping t = 0 which is the
                    // current point.
                    for i in 1..=QUAD_SEGMENTS {
                        let t = i as f32 / QUAD_SEGMENTS as f32;
                        let u = 1.0 - t;
                        line.push([
                            u * u * x0 + 2.0 * u * t * x1 + t * t * x,
                            u * u * y0 + 2.0 * u * t * y1 + t * t * y,
                        ]);
                    }
                }
            }
        }
        if line.len() > 1 {
            polylines.push(line);
        }
        polylines
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn command_text() {
        assert_eq!(PathCommand::Move { x: 10.0, y: 10.0 }.to_string(), "M10 10 ");
        assert_eq!(PathCommand::Line { x: 1.5, y: -2.0 }.to_string(), "L1.5 -2 ");
        assert_eq!(
            PathCommand::QuadCurve {
                x1: 20.0,
                y1: 20.0,
                x: 30.0,
                y: 10.0
            }
            .to_string(),
            "Q20 20 30 10 "
        );
    }
    #[test]
    fn wire_names() {
        assert_eq!(Cap::Butt.as_ref(), "butt");
        assert_eq!(Cap::Round.as_ref(), "round");
        assert_eq!(Cap::Square.as_ref(), "square");
        assert_eq!(Join::Miter.as_ref(), "miter");
        assert_eq!(Join::Round.as_ref(), "round");
        assert_eq!(Join::Bevel.as_ref(), "bevel");
        assert_eq!("bevel".parse(), Ok(Join::Bevel));
        assert_eq!("butt".parse(), Ok(Cap::Butt));
        // The table is the wire format, not the identifiers.
        assert!("Round".parse::<Cap>().is_err());
    }
    #[test]
    fn default_pen() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::GREEN);
        assert_eq!(style.width, 5.5);
        assert_eq!(style.cap, Cap::Round);
        assert_eq!(style.join, Join::Round);
    }
    #[test]
    fn flatten_lines() {
        let mut path = StrokePath::new(StrokeStyle::default());
        path.push(PathCommand::Move { x: 0.0, y: 0.0 });
        path.push(PathCommand::Line { x: 10.0, y: 0.0 });
        path.push(PathCommand::Line { x: 10.0, y: 5.0 });
        let polylines = path.flatten();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0], vec![[0.0, 0.0], [10.0, 0.0], [10.0, 5.0]]);
    }
    #[test]
    fn flatten_quad() {
        let mut path = StrokePath::new(StrokeStyle::default());
        path.push(PathCommand::Move { x: 0.0, y: 0.0 });
        path.push(PathCommand::QuadCurve {
            x1: 5.0,
            y1: 10.0,
            x: 10.0,
            y: 0.0,
        });
        let polylines = path.flatten();
        assert_eq!(polylines.len(), 1);
        let line = &polylines[0];
        assert_eq!(line.len(), 1 + QUAD_SEGMENTS as usize);
        // Endpoints are exact.
        assert_eq!(*line.first().unwrap(), [0.0, 0.0]);
        assert_eq!(*line.last().unwrap(), [10.0, 0.0]);
        // So is the halfway point - every term is dyadic.
        assert_eq!(line[QUAD_SEGMENTS as usize / 2], [5.0, 5.0]);
    }
    #[test]
    fn flatten_subpaths() {
        let mut path = StrokePath::new(StrokeStyle::default());
        path.push(PathCommand::Move { x: 0.0, y: 0.0 });
        path.push(PathCommand::Line { x: 1.0, y: 0.0 });
        path.push(PathCommand::Move { x: 5.0, y: 5.0 });
        path.push(PathCommand::Line { x: 6.0, y: 5.0 });
        let polylines = path.flatten();
        assert_eq!(polylines.len(), 2);
        assert_eq!(polylines[1][0], [5.0, 5.0]);
    }
    #[test]
    fn flatten_implicit_origin() {
        let mut path = StrokePath::new(StrokeStyle::default());
        path.push(PathCommand::Line { x: 3.0, y: 4.0 });
        let polylines = path.flatten();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0], vec![[0.0, 0.0], [3.0, 4.0]]);
    }
    #[test]
    fn flatten_dangling_move() {
        let mut path = StrokePath::new(StrokeStyle::default());
        path.push(PathCommand::Move { x: 3.0, y: 4.0 });
        assert!(path.flatten().is_empty());
    }
}
