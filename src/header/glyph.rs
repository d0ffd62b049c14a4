//! Glyph-mode (font) header rendering.
//!
//! The classic bitmap-header layout consumed by SSD1306-style drivers:
//! one `bitmap_<codepoint>` array per character, a `char_width` table with
//! each glyph's effective width, and a `char_addr` pointer table, all in
//! charset processing order.

use crate::engine::EncodedGlyph;

/// Options for glyph header rendering.
#[derive(Debug, Clone)]
pub struct GlyphHeaderOptions<'a> {
    /// Font display name, embedded in the header comment.
    pub font_name: &'a str,
    /// Canvas height in pixels, embedded in the header comment.
    pub height: usize,
    /// Tag each bitmap array with `PROGMEM` for AVR flash placement.
    pub progmem: bool,
}

/// Render the full glyph-mode header for a set of encoded glyphs.
pub fn render(glyphs: &[EncodedGlyph], opts: &GlyphHeaderOptions) -> String {
    let mut out = String::new();
    out.push_str("// Header File for SSD1306 characters\n");
    out.push_str("// Generated with bitsmith\n");
    out.push_str(&format!("// Font {}\n", opts.font_name));
    out.push_str(&format!("// Font Size: {}\n", opts.height));

    let storage = if opts.progmem { " PROGMEM" } else { "" };
    for glyph in glyphs {
        let bytes: Vec<String> = glyph.packed.values.iter().map(u32::to_string).collect();
        out.push_str(&format!(
            "const char bitmap_{}[]{} = {{{}}};\n",
            glyph.codepoint,
            storage,
            bytes.join(",")
        ));
    }

    let widths: Vec<String> = glyphs
        .iter()
        .map(|g| g.effective_width.to_string())
        .collect();
    out.push_str(&format!("const char char_width[] = {{{}}};\n", widths.join(",")));

    let addrs: Vec<String> = glyphs
        .iter()
        .map(|g| format!("&bitmap_{}", g.codepoint))
        .collect();
    out.push_str(&format!("const char* char_addr[] = {{{}}};\n", addrs.join(",")));

    out
}
