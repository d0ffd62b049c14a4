//! # Bitsmith - Bitmap Header Generator
//!
//! Bitsmith converts raster images and TTF font glyphs into packed
//! monochrome bitmap data, emitted as C byte arrays for embedded display
//! drivers (LED matrices, SSD1306-style OLEDs). It provides:
//!
//! - **Encoding engine**: threshold sampling, grid segmentation, margin
//!   trimming, fixed-angle rotation, and two bit-packing orientations
//! - **Header formatting**: `const char` array declarations with width
//!   and address tables
//! - **Font plumbing**: TTF discovery, rasterization, charset handling,
//!   and sample-sheet PNGs
//!
//! ## Quick Start
//!
//! ```no_run
//! use bitsmith::engine::{self, GridOptions, Orientation};
//! use bitsmith::header::grid::{self, GridHeaderOptions};
//!
//! // Load the source image
//! let img = image::open("logo.png")
//!     .map_err(|e| bitsmith::BitsmithError::Source(e.to_string()))?
//!     .to_rgb8();
//!
//! // Encode as a 2x2 grid of tiles, 8 cells across each, rotated to
//! // match the panel wiring
//! let opts = GridOptions {
//!     tiles_x: 2,
//!     tiles_y: 2,
//!     cells_per_tile: 8,
//!     rotation: Orientation::Deg180,
//!     ..Default::default()
//! };
//! let tiles = engine::encode_grid(&img, &opts)?;
//!
//! // Render the C header
//! let header = grid::render(
//!     &tiles,
//!     &GridHeaderOptions {
//!         name: "logo",
//!         cells_per_tile: 8,
//!         verbose: false,
//!     },
//! );
//! println!("{header}");
//! # Ok::<(), bitsmith::BitsmithError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`engine`] | Sampling, segmentation, trimming, rotation, packing |
//! | [`header`] | C header rendering for both modes |
//! | [`font`] | TTF loading, rasterization, charsets, sample sheets |
//! | [`preview`] | ASCII previews of cell matrices |
//! | [`runlog`] | Caller-owned batch run log |
//! | [`error`] | Error types |

pub mod engine;
pub mod error;
pub mod font;
pub mod header;
pub mod preview;
pub mod runlog;

// Re-exports for convenience
pub use engine::{BitMatrix, Orientation, PackMode, PackedBitmap};
pub use error::BitsmithError;
