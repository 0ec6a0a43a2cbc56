//! # Traces
//!
//! A trace is a recorded pointer session on some surface, each stroke kept
//! as raw samples plus the pen in effect when it was made. Replaying one
//! rebuilds the document exactly as the live surface would have, smoothing
//! included.
//!
//! Style values are strings in the file - hex colors, lowercase cap/join and
//! font names - parsed through the same `FromStr` impls the core types
//! expose, underneath the deserializer.

use anyhow::{Context as _, Result as AnyResult};
use inktrace_core::{
    color::Color,
    document::VectorDocument,
    sampler::StrokeSampler,
    stroke::{Cap, Join, StrokeStyle},
    text::{Align, Anchor, FontStyle, TextStyle},
};

/// One recorded drawing session.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Trace {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
    #[serde(default)]
    pub texts: Vec<Text>,
}

/// One press-to-release gesture.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Stroke {
    #[serde(default)]
    pub pen: Pen,
    /// Raw samples in order, the first being the press and the last the
    /// release.
    pub points: Vec<[f32; 2]>,
}

/// Pen settings for a stroke. Any omitted field falls back to the default
/// pen.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Pen {
    #[serde(deserialize_with = "from_str")]
    pub color: Color,
    pub width: f32,
    #[serde(deserialize_with = "from_str")]
    pub cap: Cap,
    #[serde(deserialize_with = "from_str")]
    pub join: Join,
}
impl Default for Pen {
    fn default() -> Self {
        let StrokeStyle {
            color,
            width,
            cap,
            join,
        } = StrokeStyle::default();
        Self {
            color,
            width,
            cap,
            join,
        }
    }
}
impl From<&Pen> for StrokeStyle {
    fn from(pen: &Pen) -> Self {
        Self {
            color: pen.color,
            width: pen.width,
            cap: pen.cap,
            join: pen.join,
        }
    }
}

/// A caption to place over the finished drawing.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Text {
    pub x: f32,
    pub y: f32,
    pub content: String,
    /// Size in typographic points.
    pub size: f32,
    #[serde(default)]
    pub font: Font,
}

/// Caption styling. Any omitted field falls back to the default caption
/// font.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Font {
    #[serde(deserialize_with = "from_str")]
    pub fill: Color,
    pub family: String,
    pub weight: u16,
    #[serde(deserialize_with = "from_str")]
    pub style: FontStyle,
    #[serde(deserialize_with = "from_str")]
    pub anchor: Anchor,
    #[serde(deserialize_with = "from_str")]
    pub align: Align,
}
impl Default for Font {
    fn default() -> Self {
        let TextStyle {
            fill,
            font_family,
            font_weight,
            font_style,
            anchor,
            align,
        } = TextStyle::default();
        Self {
            fill,
            family: font_family,
            weight: font_weight,
            style: font_style,
            anchor,
            align,
        }
    }
}
impl From<&Font> for TextStyle {
    fn from(font: &Font) -> Self {
        Self {
            fill: font.fill,
            font_family: font.family.clone(),
            font_weight: font.weight,
            font_style: font.style,
            anchor: font.anchor,
            align: font.align,
        }
    }
}

/// Parse-from-string underneath the deserializer, for the style names and
/// hex colors the core types already read.
fn from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let str = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
    str.parse().map_err(serde::de::Error::custom)
}

/// Rebuild the document a trace records.
pub fn replay(trace: &Trace) -> AnyResult<VectorDocument> {
    let mut document = VectorDocument::new(trace.width, trace.height)?;
    for text in &trace.texts {
        document.add_text(
            text.x,
            text.y,
            text.content.as_str(),
            text.size,
            (&text.font).into(),
        );
    }
    let mut sampler = StrokeSampler::new();
    for (i, stroke) in trace.strokes.iter().enumerate() {
        let mut points = stroke.points.iter().copied();
        let Some([x, y]) = points.next() else {
            log::warn!("stroke {i} has no samples, skipping");
            continue;
        };
        sampler
            .begin(&mut document, (&stroke.pen).into(), x, y)
            .with_context(|| format!("stroke {i}"))?;
        for [x, y] in points {
            sampler
                .sample(&mut document, x, y)
                .with_context(|| format!("stroke {i}"))?;
        }
        sampler
            .end(&mut document)
            .with_context(|| format!("stroke {i}"))?;
    }
    Ok(document)
}
