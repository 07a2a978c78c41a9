use bevy::prelude::*;

use super::TilesConfig;
use super::entities::{TileBoard, TileFace};
use super::tile::FrameCtx;
use crate::math;
use crate::noise_field::NoiseField;
use crate::params::{ParamChange, TileParams};
use crate::pointer::PointerTarget;
use crate::simulation::SimulationClock;

// ── Update: parameters ─────────────────────────────────────────────

/// Broadcasts parameter edits from the panel to every tile.
pub fn apply_param_changes(
    mut changes: MessageReader<ParamChange>,
    mut board_q: Query<&mut TileBoard>,
) {
    let Ok(mut board) = board_q.single_mut() else {
        return;
    };
    for change in changes.read() {
        debug!("parameter change: {change:?}");
        board.grid.apply_parameter_change(*change);
    }
}

// ── Update: simulation ─────────────────────────────────────────────

/// Runs one simulation step for every tile against this frame's pointer target.
pub fn update_tiles(
    mut board_q: Query<&mut TileBoard>,
    clock: Res<SimulationClock>,
    target: Res<PointerTarget>,
    params: Res<TileParams>,
    noise: Res<NoiseField>,
    cfg: Res<TilesConfig>,
) {
    let Ok(mut board) = board_q.single_mut() else {
        return;
    };
    let frame = FrameCtx {
        time: clock.time(),
        target: target.position(),
        rotation_speed: params.rotation_speed(),
        noise: &noise,
        motion: &cfg.motion,
    };
    board.grid.update(&frame);
}

// ── Update: publish ────────────────────────────────────────────────

/// Copies tile transform and material state onto each [`TileFace`] entity.
pub fn publish_tile_visuals(
    board_q: Query<&TileBoard>,
    mut face_q: Query<(&TileFace, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<TilesConfig>,
) {
    let Ok(board) = board_q.single() else {
        return;
    };
    let tiles = board.grid.tiles();
    let roll = cfg.appearance.roll_degrees.to_radians();

    for (face, mut transform, mat_handle) in &mut face_q {
        let Some(tile) = tiles.get(face.index) else {
            continue;
        };
        *transform = tile.render_transform(roll);

        if let Some(mat) = materials.get_mut(&mat_handle.0) {
            mat.base_color = tile.base_color();
            mat.emissive = math::emissive_radiance(
                tile.displayed_emissive(),
                tile.emissive_intensity(),
                cfg.appearance.emissive_gain,
            );
        }
    }
}
