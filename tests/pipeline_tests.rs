//! # Pipeline Tests
//!
//! End-to-end coverage from pixel buffers to rendered header text. The
//! expected outputs are inlined and exact: header generation is fully
//! deterministic, so any drift in sampling, rotation, packing, or
//! formatting shows up as a byte-level diff here.

use bitsmith::engine::{self, GlyphOptions, GridOptions, Orientation};
use bitsmith::font::raster::GlyphRaster;
use bitsmith::header::glyph::{self as glyph_header, GlyphHeaderOptions};
use bitsmith::header::grid::{self as grid_header, GridHeaderOptions};
use image::{Rgb, RgbImage};

/// 4x4 image whose top-left 2x2 block is dark and the rest light.
fn quadrant_image() -> RgbImage {
    RgbImage::from_fn(4, 4, |x, y| {
        if x < 2 && y < 2 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

#[test]
fn grid_quadrant_rotated_180() {
    // 2x2-pixel cells classify as [[1,0],[0,0]]; rotating 180 gives
    // [[0,0],[0,1]], which packs row-major to [0, 1].
    let tiles = engine::encode_grid(
        &quadrant_image(),
        &GridOptions {
            cells_per_tile: 2,
            rotation: Orientation::Deg180,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].packed.values, vec![0, 1]);
}

#[test]
fn grid_quadrant_unrotated() {
    let tiles = engine::encode_grid(
        &quadrant_image(),
        &GridOptions {
            cells_per_tile: 2,
            rotation: Orientation::Deg0,
            ..Default::default()
        },
    )
    .unwrap();

    // [[1,0],[0,0]] packs to [0b10, 0b00]
    assert_eq!(tiles[0].packed.values, vec![2, 0]);
}

#[test]
fn grid_header_exact_output() {
    let tiles = engine::encode_grid(
        &quadrant_image(),
        &GridOptions {
            cells_per_tile: 2,
            rotation: Orientation::Deg180,
            ..Default::default()
        },
    )
    .unwrap();

    let header = grid_header::render(
        &tiles,
        &GridHeaderOptions {
            name: "quadrant",
            cells_per_tile: 2,
            verbose: false,
        },
    );

    assert_eq!(
        header,
        "// Header file generated by bitsmith for LED display\n\
         const char quadrant_0000_0000[] = {0,1};\n\
         \n\
         const char quadrant_width[] = {2};\n\
         const char* quadrant_addr[] = {&quadrant_0000_0000};\n"
    );
}

#[test]
fn grid_multi_tile_order_and_naming() {
    // 8x8 image split into 2x2 tiles of 4px; only the bottom-right tile
    // is dark.
    let img = RgbImage::from_fn(8, 8, |x, y| {
        if x >= 4 && y >= 4 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });

    let tiles = engine::encode_grid(
        &img,
        &GridOptions {
            tiles_x: 2,
            tiles_y: 2,
            cells_per_tile: 1,
            rotation: Orientation::Deg0,
            ..Default::default()
        },
    )
    .unwrap();

    // Row-major tile order regardless of parallel execution
    let coords: Vec<(usize, usize)> = tiles.iter().map(|t| (t.row, t.col)).collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    let lit: Vec<u32> = tiles.iter().map(|t| t.packed.values[0]).collect();
    assert_eq!(lit, vec![0, 0, 0, 1]);

    let header = grid_header::render(
        &tiles,
        &GridHeaderOptions {
            name: "panel",
            cells_per_tile: 1,
            verbose: false,
        },
    );
    assert!(header.contains(
        "const char* panel_addr[] = {&panel_0000_0000, &panel_0000_0001, &panel_0001_0000, &panel_0001_0001};"
    ));
}

#[test]
fn grid_verbose_embeds_block_art() {
    let tiles = engine::encode_grid(
        &quadrant_image(),
        &GridOptions {
            cells_per_tile: 2,
            rotation: Orientation::Deg0,
            ..Default::default()
        },
    )
    .unwrap();

    let header = grid_header::render(
        &tiles,
        &GridHeaderOptions {
            name: "q",
            cells_per_tile: 2,
            verbose: true,
        },
    );
    assert!(header.contains("/**\n * bitmap 0000/0000\n██░░\n░░░░\n */"));
}

#[test]
fn grid_invalid_parameters_fail_fast() {
    let img = quadrant_image();
    // More cells than pixels
    assert!(
        engine::encode_grid(
            &img,
            &GridOptions {
                cells_per_tile: 5,
                ..Default::default()
            },
        )
        .is_err()
    );
    // More tiles than pixels
    assert!(
        engine::encode_grid(
            &img,
            &GridOptions {
                tiles_x: 5,
                ..Default::default()
            },
        )
        .is_err()
    );
}

/// 8x16 glyph shaped like a vertical bar in columns 3..5.
fn bar_glyph_raster() -> GlyphRaster {
    GlyphRaster::from_fn(8, 16, |x, _y| if (3..5).contains(&x) { 0 } else { 255 })
}

#[test]
fn glyph_fixed_width_header() {
    let rasters = vec![(124u32, bar_glyph_raster())];
    let glyphs = engine::encode_glyphs(&rasters, &GlyphOptions::default()).unwrap();

    assert_eq!(glyphs[0].effective_width, 8);
    // 2 chunks of 8 columns; columns 3 and 4 are fully lit in both chunks
    assert_eq!(glyphs[0].packed.values.len(), 16);
    assert_eq!(glyphs[0].packed.values[3], 255);
    assert_eq!(glyphs[0].packed.values[4], 255);
    assert_eq!(glyphs[0].packed.values[0], 0);

    let header = glyph_header::render(
        &glyphs,
        &GlyphHeaderOptions {
            font_name: "TestFont",
            height: 16,
            progmem: false,
        },
    );
    assert!(header.contains(
        "const char bitmap_124[] = {0,0,0,255,255,0,0,0,0,0,0,255,255,0,0,0};"
    ));
    assert!(header.contains("const char char_width[] = {8};"));
}

#[test]
fn glyph_variable_width_trims_margins() {
    let rasters = vec![(124u32, bar_glyph_raster())];
    let glyphs = engine::encode_glyphs(
        &rasters,
        &GlyphOptions {
            variable_width: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(glyphs[0].left_margin, 3);
    assert_eq!(glyphs[0].effective_width, 2);
    // 2 chunks x 2 effective columns, all lit
    assert_eq!(glyphs[0].packed.values, vec![255, 255, 255, 255]);
}

#[test]
fn glyph_blank_is_valid_zero_width_output() {
    let rasters = vec![
        (32u32, GlyphRaster::blank(8, 16)),
        (124u32, bar_glyph_raster()),
    ];
    let glyphs = engine::encode_glyphs(
        &rasters,
        &GlyphOptions {
            variable_width: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(glyphs[0].effective_width, 0);
    assert!(glyphs[0].packed.values.is_empty());

    let header = glyph_header::render(
        &glyphs,
        &GlyphHeaderOptions {
            font_name: "TestFont",
            height: 16,
            progmem: true,
        },
    );
    assert!(header.contains("const char bitmap_32[] PROGMEM = {};"));
    assert!(header.contains("const char char_width[] = {0,2};"));
    assert!(header.contains("const char* char_addr[] = {&bitmap_32,&bitmap_124};"));
}
