//! # SVG output
//!
//! Streaming serializer from a [`VectorDocument`] to SVG text.
//!
//! Output is built in one pass with no intermediate tree: a root `<svg>`
//! element carrying the viewport, one `<path>` element per stroke in
//! z-order, one `<text>` element per caption after all paths, and no
//! whitespace between elements. Attribute order is fixed and part of the
//! format.
//!
//! Numbers use Rust's default float formatting - the shortest decimal that
//! parses back to the same value, so `12` rather than `12.0` and `5.5`
//! as-is. Colors use the six-digit uppercase `#RRGGBB` form with alpha
//! stripped. Caption content and font family names are XML-escaped;
//! everything else the document can hold is markup-safe by construction.

use crate::{document::VectorDocument, stroke::StrokePath, text::TextAnnotation};

const XMLNS: &str = "http://www.w3.org/2000/svg";

/// Serialize the whole document as SVG text.
///
/// Writes UTF-8 bytes to `writer` in one pass. The document is untouched;
/// if the sink fails mid-write it may hold a prefix of the output, and the
/// call can be retried against a fresh sink.
pub fn write_svg<W: std::io::Write>(
    document: &VectorDocument,
    mut writer: W,
) -> std::io::Result<()> {
    write!(
        writer,
        r#"<svg width="{}" height="{}" xmlns="{XMLNS}">"#,
        document.width(),
        document.height()
    )?;
    for path in document.paths() {
        write_path(&mut writer, path)?;
    }
    for text in document.texts() {
        write_text(&mut writer, text)?;
    }
    writer.write_all(b"</svg>")
}

fn write_path<W: std::io::Write>(writer: &mut W, path: &StrokePath) -> std::io::Result<()> {
    let style = path.style();
    write!(
        writer,
        r#"<path stroke="{}" fill="none" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}" d=""#,
        style.color,
        style.width,
        style.cap.as_ref(),
        style.join.as_ref(),
    )?;
    // Each command's textual form carries its own trailing space.
    for command in path.commands() {
        write!(writer, "{command}")?;
    }
    writer.write_all(b"\"/>")
}

fn write_text<W: std::io::Write>(writer: &mut W, text: &TextAnnotation) -> std::io::Result<()> {
    let style = &text.style;
    write!(
        writer,
        r#"<text x="{}" y="{}" text-anchor="{}" text-align="{}" font-family=""#,
        text.x,
        text.y,
        style.anchor.as_ref(),
        style.align.as_ref(),
    )?;
    write_escaped(writer, &style.font_family)?;
    write!(
        writer,
        r#"" fill="{}" font-size="{}pt" font-weight="{}" font-style="{}">"#,
        style.fill,
        text.font_size,
        style.font_weight,
        style.font_style.as_ref(),
    )?;
    write_escaped(writer, &text.content)?;
    writer.write_all(b"</text>")
}

/// Stream `text` with the XML specials replaced by entities.
///
/// `'` is left alone; attributes here are always double-quoted.
fn write_escaped<W: std::io::Write>(writer: &mut W, mut text: &str) -> std::io::Result<()> {
    while let Some(at) = text.find(['&', '<', '>', '"']) {
        let (clean, rest) = text.split_at(at);
        writer.write_all(clean.as_bytes())?;
        // `rest` starts with the byte `find` hit.
        let entity: &[u8] = match rest.as_bytes()[0] {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            _ => b"&quot;",
        };
        writer.write_all(entity)?;
        text = &rest[1..];
    }
    writer.write_all(text.as_bytes())
}
