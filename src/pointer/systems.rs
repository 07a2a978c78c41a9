use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;
use bevy::window::PrimaryWindow;

use super::entities::PointerTarget;
use super::projector::PointerProjector;
use crate::stage::StageCamera;

/// Samples the cursor once per frame. Leaving the window keeps the last sample.
pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut projector: ResMut<PointerProjector>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        projector.set_cursor(cursor);
    }
}

/// Casts the cursor ray from the stage camera and moves the target on a hit.
///
/// The camera's global transform is recomputed here so orbit moves made
/// earlier this frame are already applied.
pub fn resolve_pointer_target(
    camera_q: Query<(Entity, &Camera), With<StageCamera>>,
    transforms: TransformHelper,
    mut projector: ResMut<PointerProjector>,
    mut target: ResMut<PointerTarget>,
) {
    let Some(cursor) = projector.cursor() else {
        return;
    };
    let Ok((entity, camera)) = camera_q.single() else {
        return;
    };
    let Ok(camera_xf) = transforms.compute_global_transform(entity) else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(&camera_xf, cursor) else {
        return;
    };
    projector.update_target(ray, &mut target);
}

/// Logs the last intersected point on left click.
pub fn report_clicks(buttons: Res<ButtonInput<MouseButton>>, projector: Res<PointerProjector>) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    match projector.last_hit() {
        Some(hit) => info!("click: last intersection at {hit}"),
        None => info!("click: no intersection yet"),
    }
}
