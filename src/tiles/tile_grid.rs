use bevy::prelude::*;

use super::LatticeSettings;
use super::tile::{FrameCtx, Tile, TilePalette};
use crate::params::ParamChange;

/// Ordered, fixed-size collection of tiles laid out on a brick lattice.
///
/// Tiles are stored column-major: index `col * num_rows + row`. The count and
/// resting positions never change after construction.
pub struct TileGrid {
    num_cols: u32,
    num_rows: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Builds one tile per lattice cell, each with its own copy of `palette`.
    pub fn new(lattice: &LatticeSettings, palette: &TilePalette) -> Self {
        let mut tiles = Vec::with_capacity(lattice.num_cols as usize * lattice.num_rows as usize);
        for col in 0..lattice.num_cols {
            for row in 0..lattice.num_rows {
                let position = Self::lattice_position(lattice, col, row);
                tiles.push(Tile::new(UVec2::new(col, row), position, palette));
            }
        }
        Self {
            num_cols: lattice.num_cols,
            num_rows: lattice.num_rows,
            tiles,
        }
    }

    /// Resting world `(x, y)` of a lattice cell. Odd columns drop by `spacing_x`.
    pub fn lattice_position(lattice: &LatticeSettings, col: u32, row: u32) -> Vec2 {
        let offset_y = (col % 2) as f32 * -lattice.spacing_x;
        Vec2::new(
            lattice.start_x + col as f32 * lattice.spacing_x,
            lattice.start_y + offset_y + row as f32 * lattice.spacing_y,
        )
    }

    /// Updates every tile for one frame. Tiles never read each other.
    pub fn update(&mut self, frame: &FrameCtx) {
        for tile in &mut self.tiles {
            tile.update(frame);
        }
    }

    /// Broadcasts a parameter edit to every tile.
    ///
    /// Rotation speed is read at update time, so it needs no broadcast.
    pub fn apply_parameter_change(&mut self, change: ParamChange) {
        match change {
            ParamChange::BaseColor(color) => {
                for tile in &mut self.tiles {
                    tile.set_base_color(color);
                }
            }
            ParamChange::EmissiveColor(color) => {
                for tile in &mut self.tiles {
                    tile.set_emissive_color(color);
                }
            }
            ParamChange::RotationSpeed(_) => {}
        }
    }

    /// All tiles in storage order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `(col, row)`, if inside the lattice.
    #[allow(dead_code)]
    pub fn tile(&self, col: u32, row: u32) -> Option<&Tile> {
        self.tiles.get(self.index(col, row)?)
    }

    /// Explicit selection entry point; returns `false` for cells outside the lattice.
    #[allow(dead_code)]
    pub fn set_focused(&mut self, col: u32, row: u32, is_focused: bool) -> bool {
        let Some(index) = self.index(col, row) else {
            return false;
        };
        self.tiles[index].set_focused(is_focused);
        true
    }

    fn index(&self, col: u32, row: u32) -> Option<usize> {
        if col < self.num_cols && row < self.num_rows {
            Some(col as usize * self.num_rows as usize + row as usize)
        } else {
            None
        }
    }
}
