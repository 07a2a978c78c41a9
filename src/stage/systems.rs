use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::MouseScrollUnit;
use bevy::post_process::bloom::{Bloom, BloomCompositeMode};
use bevy::prelude::*;
use bevy::render::view::Hdr;

use super::StageConfig;
use super::entities::{OrbitInput, OrbitRig, StageCamera, SwayingLight};
use crate::params::ResetCamera;

/// Spawns the HDR bloom camera at its home pose and the swaying point lights.
pub fn spawn_stage(mut commands: Commands, cfg: Res<StageConfig>) {
    let cam = &cfg.camera;
    let rig = OrbitRig::new(cam.home_focus, cam.home_distance);
    commands.spawn((
        Name::new("StageCamera"),
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: cam.bloom_intensity,
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        },
        Projection::from(PerspectiveProjection {
            fov: cam.fov_degrees.to_radians(),
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        rig.transform(),
        rig,
        StageCamera,
    ));

    for light in &cfg.lights {
        let sway = SwayingLight {
            amplitude: light.sway_amplitude,
            rate: light.sway_rate,
            phase: light.sway_phase,
        };
        let position = light.position.with_x(sway.x_at(0.0));
        commands.spawn((
            Name::new(light.label.clone()),
            PointLight {
                color: light.color,
                intensity: light.intensity,
                range: light.range,
                shadows_enabled: true,
                ..default()
            },
            Transform::from_translation(position),
            sway,
        ));
    }
}

/// Left drag orbits, right drag pans, wheel zooms. Ignored while the pointer
/// is over an egui window.
pub fn orbit_camera(
    mut input: OrbitInput,
    mut query: Query<(&mut OrbitRig, &mut Transform), With<StageCamera>>,
) {
    let over_ui = input
        .egui
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false);

    let motion: Vec2 = input.motion.read().map(|ev| ev.delta).sum();
    let lines: f32 = input
        .scroll
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        })
        .sum();

    if over_ui {
        return;
    }
    let Ok((mut rig, mut transform)) = query.single_mut() else {
        return;
    };

    let cam = &input.cfg.camera;
    let before = *rig;
    if input.buttons.pressed(MouseButton::Left) {
        rig.rotate(
            -motion.x * cam.rotate_sensitivity,
            -motion.y * cam.rotate_sensitivity,
            cam.pitch_margin,
        );
    }
    if input.buttons.pressed(MouseButton::Right) {
        let (right, up) = (*transform.right(), *transform.up());
        rig.pan(motion, right, up, cam.pan_sensitivity);
    }
    if lines != 0.0 {
        rig.zoom(lines * cam.zoom_sensitivity, cam.min_distance);
    }

    if *rig != before {
        *transform = rig.transform();
    }
}

/// Snaps the camera back to its home pose on a reset request.
pub fn reset_camera(
    mut resets: MessageReader<ResetCamera>,
    mut query: Query<(&mut OrbitRig, &mut Transform), With<StageCamera>>,
    cfg: Res<StageConfig>,
) {
    if resets.read().count() == 0 {
        return;
    }
    let Ok((mut rig, mut transform)) = query.single_mut() else {
        return;
    };
    *rig = OrbitRig::new(cfg.camera.home_focus, cfg.camera.home_distance);
    *transform = rig.transform();
    info!("camera reset to {}", transform.translation);
}

/// Moves each light along X by its sway curve.
pub fn sway_lights(time: Res<Time>, mut query: Query<(&SwayingLight, &mut Transform)>) {
    let secs = time.elapsed_secs();
    for (sway, mut transform) in &mut query {
        transform.translation.x = sway.x_at(secs);
    }
}
