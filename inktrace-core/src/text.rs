//! Caption annotations layered over the drawing. Unlike strokes these are
//! placed whole and never grow; undo does not apply to them.

use crate::color::Color;

/// Horizontal anchoring of the text run relative to its coordinate.
#[derive(strum::AsRefStr, strum::EnumString, PartialEq, Eq, Copy, Clone, Hash, Debug)]
#[repr(u8)]
pub enum Anchor {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "middle")]
    Middle,
    #[strum(serialize = "end")]
    End,
}
impl Default for Anchor {
    fn default() -> Self {
        Self::Start
    }
}

/// Alignment of lines within the text box.
#[derive(strum::AsRefStr, strum::EnumString, PartialEq, Eq, Copy, Clone, Hash, Debug)]
#[repr(u8)]
pub enum Align {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "end")]
    End,
    #[strum(serialize = "center")]
    Center,
}
impl Default for Align {
    fn default() -> Self {
        Self::Start
    }
}

/// Slant of the rendered font.
#[derive(strum::AsRefStr, strum::EnumString, PartialEq, Eq, Copy, Clone, Hash, Debug)]
#[repr(u8)]
pub enum FontStyle {
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "italic")]
    Italic,
    #[strum(serialize = "oblique")]
    Oblique,
}
impl Default for FontStyle {
    fn default() -> Self {
        Self::Normal
    }
}

/// Fill and font settings for one caption.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub fill: Color,
    pub font_family: String,
    /// Numeric weight on the usual 100-900 scale.
    pub font_weight: u16,
    pub font_style: FontStyle,
    pub anchor: Anchor,
    pub align: Align,
}
impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            font_family: "Tahoma".to_owned(),
            font_weight: 400,
            font_style: FontStyle::default(),
            anchor: Anchor::default(),
            align: Align::default(),
        }
    }
}

/// A static caption at a fixed position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAnnotation {
    pub x: f32,
    pub y: f32,
    pub content: String,
    /// Size in typographic points.
    pub font_size: f32,
    pub style: TextStyle,
}
