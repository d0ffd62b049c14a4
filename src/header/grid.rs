//! Grid-mode header rendering.
//!
//! One array declaration per tile, named `<name>_<rrrr>_<cccc>` with
//! zero-padded row/column indices, followed by a width table (the cell
//! count, repeated per tile) and an address table referencing every tile
//! array in emission order.

use crate::engine::Tile;
use crate::preview;

/// Options for grid header rendering.
#[derive(Debug, Clone)]
pub struct GridHeaderOptions<'a> {
    /// Identifier prefix for every emitted array.
    pub name: &'a str,
    /// Cells per tile, repeated in the width table.
    pub cells_per_tile: u32,
    /// Embed a block-art comment above each tile's array.
    pub verbose: bool,
}

/// Render the full grid-mode header for a set of tiles.
///
/// Tiles are emitted in the order given; [`encode_grid`](crate::engine::encode_grid)
/// produces them row-major, which keeps output deterministic.
pub fn render(tiles: &[Tile], opts: &GridHeaderOptions) -> String {
    let mut out = String::from("// Header file generated by bitsmith for LED display\n");
    let mut names = Vec::with_capacity(tiles.len());

    for tile in tiles {
        let var = format!("{}_{:04}_{:04}", opts.name, tile.row, tile.col);

        if opts.verbose {
            out.push_str(&format!(
                "\n/**\n * bitmap {:04}/{:04}\n{} */\n",
                tile.row,
                tile.col,
                preview::block_art(&tile.matrix)
            ));
        }

        let values: Vec<String> = tile.packed.values.iter().map(u32::to_string).collect();
        out.push_str(&format!("const char {}[] = {{{}}};\n", var, values.join(",")));
        names.push(var);
    }

    let widths = vec![opts.cells_per_tile.to_string(); tiles.len()];
    out.push_str(&format!(
        "\nconst char {}_width[] = {{{}}};\n",
        opts.name,
        widths.join(", ")
    ));

    let addrs: Vec<String> = names.iter().map(|n| format!("&{n}")).collect();
    out.push_str(&format!(
        "const char* {}_addr[] = {{{}}};\n",
        opts.name,
        addrs.join(", ")
    ));

    out
}
