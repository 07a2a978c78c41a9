use bevy::prelude::*;

use super::TilesConfig;
use super::entities::{TileBoard, TileFace};
use super::tile::TilePalette;
use super::tile_grid::TileGrid;
use crate::math;
use crate::params::TileParams;

/// Builds the [`TileGrid`] and spawns one cube with its own material per tile.
pub fn spawn_tiles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<TilesConfig>,
    params: Res<TileParams>,
) {
    let palette = TilePalette {
        base: params.base_color(),
        emissive: params.emissive_color(),
        highlight: cfg.appearance.highlight_color,
    };
    let grid = TileGrid::new(&cfg.lattice, &palette);

    let size = cfg.appearance.tile_size;
    let cube_handle = meshes.add(Cuboid::new(size, size, size));
    let roll = cfg.appearance.roll_degrees.to_radians();

    let board_entity = commands
        .spawn((
            Name::new("TileBoard"),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    for (index, tile) in grid.tiles().iter().enumerate() {
        // Per-tile material: proximity recolors one tile at a time.
        let material = materials.add(StandardMaterial {
            base_color: tile.base_color(),
            emissive: math::emissive_radiance(
                tile.displayed_emissive(),
                tile.emissive_intensity(),
                cfg.appearance.emissive_gain,
            ),
            perceptual_roughness: 0.5,
            ..default()
        });

        let cell = tile.grid_position();
        let entity = commands
            .spawn((
                TileFace { index },
                Name::new(format!("Tile({},{})", cell.x, cell.y)),
                Mesh3d(cube_handle.clone()),
                MeshMaterial3d(material),
                tile.render_transform(roll),
            ))
            .id();
        commands.entity(board_entity).add_child(entity);
    }

    info!(
        "spawned {} tiles ({} x {})",
        grid.tiles().len(),
        cfg.lattice.num_cols,
        cfg.lattice.num_rows
    );
    commands.entity(board_entity).insert(TileBoard { grid });
}
