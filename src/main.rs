//! # Bitsmith CLI
//!
//! Command-line interface for bitmap header generation.
//!
//! ## Usage
//!
//! ```bash
//! # Convert an image into a 2x2 grid of 8-cell tiles
//! bitsmith image logo.png --tiles-x 2 --tiles-y 2 --cells 8
//!
//! # Same, with block-art comments embedded in the header
//! bitsmith image logo.png --cells 8 --verbose
//!
//! # Convert every font under a folder at 32px, digits only
//! bitsmith font --font-dir ./fonts
//!
//! # One font, full printable ASCII, every preset size, variable width
//! bitsmith font --font DejaVuSans --ascii --size all --variable-width
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bitsmith::{
    BitsmithError,
    engine::{self, GlyphOptions, GridOptions, Orientation, pack, sampler},
    font::{self, CanvasSpec, FontFace, charset, discover, sheet},
    header::{
        glyph::{self as glyph_header, GlyphHeaderOptions},
        grid::{self as grid_header, GridHeaderOptions},
    },
    preview,
    runlog::RunLog,
};

/// Bitsmith - bitmap header generator for embedded displays
#[derive(Parser, Debug)]
#[command(name = "bitsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an image into LED grid bitmap arrays
    Image {
        /// Source image file
        input: PathBuf,

        /// Output header path (defaults to <name>.h)
        #[arg(short, long, value_name = "FILE")]
        out_file: Option<PathBuf>,

        /// Macro-block tile count along the horizontal axis
        #[arg(long, default_value_t = 1)]
        tiles_x: u32,

        /// Macro-block tile count along the vertical axis
        #[arg(long, default_value_t = 1)]
        tiles_y: u32,

        /// Cells per tile along the horizontal axis
        #[arg(long, default_value_t = 1)]
        cells: u32,

        /// Clockwise rotation applied to every tile
        #[arg(long, default_value = "180", value_parser = ["0", "90", "180", "270"])]
        rotation: String,

        /// Identifier prefix for the emitted arrays
        #[arg(long, default_value = "custom_bitmap")]
        name: String,

        /// Lit/unlit threshold (grayscale, strict less-than)
        #[arg(long, default_value_t = sampler::GRID_THRESHOLD)]
        threshold: u8,

        /// Embed block-art comments above each tile's array
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render TTF fonts into bitmap header files
    Font {
        /// Folder to search for .ttf files
        #[arg(long, default_value = "/usr/share/fonts")]
        font_dir: PathBuf,

        /// Font name (file stem) to process; all discovered fonts if omitted
        #[arg(long)]
        font: Option<String>,

        /// Process one specific .ttf file instead of searching
        #[arg(long, value_name = "FILE")]
        font_file: Option<PathBuf>,

        /// Folder for generated headers (one subfolder per font)
        #[arg(short, long, default_value = "bmh_fonts")]
        output_dir: PathBuf,

        /// Characters to process
        #[arg(short = 'C', long)]
        characters: Option<String>,

        /// File containing the characters to process
        #[arg(short = 'c', long, value_name = "FILE")]
        chars_file: Option<PathBuf>,

        /// Process all printable ASCII characters (overrides -c and -C)
        #[arg(long)]
        ascii: bool,

        /// Canvas height in pixels, or "all" for every preset
        #[arg(short, long, default_value = "32",
              value_parser = ["8", "24", "32", "40", "48", "56", "64", "all"])]
        size: String,

        /// Trim blank margins for variable-width layout
        #[arg(long)]
        variable_width: bool,

        /// Tag bitmap arrays with PROGMEM for AVR targets
        #[arg(long)]
        progmem: bool,

        /// Print each glyph as dot art on the terminal
        #[arg(short, long)]
        print_ascii: bool,

        /// Print each glyph's packed bytes as binary strings
        #[arg(long)]
        print_binary: bool,

        /// Square canvas (width = height) instead of width = 3/4 height
        #[arg(long)]
        square: bool,

        /// Force the canvas width in pixels
        #[arg(long)]
        font_width: Option<usize>,

        /// Force the baseline y-offset, overriding the per-size preset
        #[arg(short = 'O', long)]
        offset: Option<i32>,

        /// Lit/unlit threshold (luma, strict less-than)
        #[arg(long, default_value_t = sampler::GLYPH_THRESHOLD)]
        threshold: u8,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BitsmithError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Image {
            input,
            out_file,
            tiles_x,
            tiles_y,
            cells,
            rotation,
            name,
            threshold,
            verbose,
        } => run_image(
            &input, out_file, tiles_x, tiles_y, cells, &rotation, &name, threshold, verbose,
        ),
        Commands::Font {
            font_dir,
            font,
            font_file,
            output_dir,
            characters,
            chars_file,
            ascii,
            size,
            variable_width,
            progmem,
            print_ascii,
            print_binary,
            square,
            font_width,
            offset,
            threshold,
        } => run_font(FontRun {
            font_dir,
            font,
            font_file,
            output_dir,
            characters,
            chars_file,
            ascii,
            size,
            variable_width,
            progmem,
            print_ascii,
            print_binary,
            square,
            font_width,
            offset,
            threshold,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_image(
    input: &PathBuf,
    out_file: Option<PathBuf>,
    tiles_x: u32,
    tiles_y: u32,
    cells: u32,
    rotation: &str,
    name: &str,
    threshold: u8,
    verbose: bool,
) -> Result<(), BitsmithError> {
    // The parser restricts rotation to the four canonical choices, so this
    // parse cannot fail from the CLI; from_degrees stays the single
    // validation point for library callers.
    let degrees: u32 = rotation
        .parse()
        .map_err(|_| BitsmithError::InvalidParameter(format!("bad rotation '{rotation}'")))?;
    let rotation = Orientation::from_degrees(degrees)?;

    let img = image::open(input)
        .map_err(|e| BitsmithError::Source(format!("{}: {}", input.display(), e)))?
        .to_rgb8();

    let opts = GridOptions {
        tiles_x,
        tiles_y,
        cells_per_tile: cells,
        rotation,
        threshold,
    };
    let tiles = engine::encode_grid(&img, &opts)?;

    let header = grid_header::render(
        &tiles,
        &GridHeaderOptions {
            name,
            cells_per_tile: cells,
            verbose,
        },
    );

    let out_path = out_file.unwrap_or_else(|| PathBuf::from(format!("{name}.h")));
    std::fs::write(&out_path, &header)?;

    print!("{header}");
    println!("\nWrote {}", out_path.display());
    Ok(())
}

/// Parameters for one `font` subcommand run.
struct FontRun {
    font_dir: PathBuf,
    font: Option<String>,
    font_file: Option<PathBuf>,
    output_dir: PathBuf,
    characters: Option<String>,
    chars_file: Option<PathBuf>,
    ascii: bool,
    size: String,
    variable_width: bool,
    progmem: bool,
    print_ascii: bool,
    print_binary: bool,
    square: bool,
    font_width: Option<usize>,
    offset: Option<i32>,
    threshold: u8,
}

fn run_font(run: FontRun) -> Result<(), BitsmithError> {
    // Resolve the fonts to process
    let font_files: Vec<PathBuf> = if let Some(file) = &run.font_file {
        vec![file.clone()]
    } else {
        let discovered = discover::find_ttf_files(&run.font_dir)?;
        match &run.font {
            Some(name) => {
                let found = discover::find_by_name(&discovered, name).ok_or_else(|| {
                    BitsmithError::Font(format!(
                        "no font named '{}' under {}",
                        name,
                        run.font_dir.display()
                    ))
                })?;
                vec![found.clone()]
            }
            None => discovered,
        }
    };
    if font_files.is_empty() {
        return Err(BitsmithError::Font(format!(
            "no .ttf files found under {}",
            run.font_dir.display()
        )));
    }

    // Resolve the charset
    let chars: Vec<char> = if run.ascii {
        charset::ascii_charset()
    } else if let Some(path) = &run.chars_file {
        charset::from_file(path)?
    } else if let Some(line) = &run.characters {
        charset::dedup_chars(line)
    } else {
        charset::dedup_chars(charset::DEFAULT_CHARSET)
    };
    let charline: String = chars.iter().collect();
    println!("Converting characters: \"{charline}\"");

    // Resolve the canvas heights
    let heights: Vec<usize> = if run.size == "all" {
        font::FONT_HEIGHTS.to_vec()
    } else {
        // The parser restricts size to the preset list
        vec![run.size.parse().map_err(|_| {
            BitsmithError::InvalidParameter(format!("bad size '{}'", run.size))
        })?]
    };

    std::fs::create_dir_all(&run.output_dir)?;
    let mut log = RunLog::create(&run.output_dir)?;

    let glyph_opts = GlyphOptions {
        threshold: run.threshold,
        variable_width: run.variable_width,
    };

    for path in &font_files {
        let face = FontFace::load(path)?;
        let font_dir = run.output_dir.join(&face.name);
        std::fs::create_dir_all(&font_dir)?;

        for &height in &heights {
            let spec = CanvasSpec::for_height(height, run.square, run.font_width, run.offset);
            let rasters = font::rasterize_charset(&face, &spec, &chars);
            let glyphs = engine::encode_glyphs(&rasters, &glyph_opts)?;

            let header = glyph_header::render(
                &glyphs,
                &GlyphHeaderOptions {
                    font_name: &face.name,
                    height,
                    progmem: run.progmem,
                },
            );

            let stem = format!("{}_{}", face.name, height);
            let header_path = font_dir.join(format!("{stem}.h"));
            std::fs::write(&header_path, &header)?;

            sheet::save_sheet(&font_dir.join(format!("{stem}.png")), &face, &spec, &chars)?;

            if run.print_ascii {
                for (glyph, &ch) in glyphs.iter().zip(chars.iter()) {
                    println!("{ch}:");
                    println!("{}", preview::dot_art(&glyph.matrix));
                }
            }
            if run.print_binary {
                for glyph in &glyphs {
                    // One line per packed byte, MSB first
                    let bits = pack::unpack_rows(&glyph.packed.values, 8)?;
                    print!("{}", preview::dot_art(&bits));
                    println!();
                }
            }

            println!("{stem}.h written");
            log.record(&format!("{stem}.h"))?;
        }
    }

    log.finish()?;
    println!("bitsmith finished");
    Ok(())
}
