use bevy::prelude::*;

use super::tile_grid::TileGrid;

/// Central component holding the simulated tile grid.
///
/// Spawned as a single entity that parents all [`TileFace`] entities.
#[derive(Component)]
pub struct TileBoard {
    /// Lattice of tiles with their volatile height, spin and glow.
    pub grid: TileGrid,
}

/// Render entity for one tile; `index` points into [`TileGrid::tiles`].
#[derive(Component, Reflect)]
pub struct TileFace {
    /// Storage index of the tile this entity draws.
    pub index: usize,
}
