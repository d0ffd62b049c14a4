//! # C Header Formatting
//!
//! Renders packed bitmaps into the textual C declarations firmware
//! includes directly. Two header flavors exist, one per encoding mode:
//!
//! - [`grid`]: one `const char` array per tile plus a width table and an
//!   address table, named after a caller-chosen identifier.
//! - [`glyph`]: one `bitmap_<codepoint>` array per character plus
//!   `char_width` and `char_addr` tables, optionally tagged `PROGMEM`
//!   for AVR targets.
//!
//! The formatter consumes finished [`Tile`](crate::engine::Tile) and
//! [`EncodedGlyph`](crate::engine::EncodedGlyph) values; all bit-level
//! decisions happen in the engine before this boundary.

pub mod glyph;
pub mod grid;
