#![warn(missing_docs)]
//! Glowing tile grid driven by noise and the mouse.
//!
//! A lattice of small cubes bobs on a 3D noise field and spins in place. Tiles
//! near the point under the cursor light up with a hue ripple that fades once
//! the cursor moves away. An egui panel tunes rotation speed and colors.

pub mod math;
mod noise_field;
mod params;
mod pointer;
mod simulation;
mod stage;
mod tiles;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum AppState {
    /// Normal interaction.
    #[default]
    Running,
    /// World inspector open (Tab to toggle).
    Inspecting,
}

/// Largest accepted lattice dimension on the command line.
#[cfg(feature = "native")]
const MAX_LATTICE_DIM: i64 = 1024;

/// Command-line overrides for the plugin configs.
#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(version, about = "Glowing tile grid driven by noise and the mouse")]
struct Cli {
    /// Number of lattice columns.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_LATTICE_DIM))]
    cols: Option<u32>,
    /// Number of lattice rows.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_LATTICE_DIM))]
    rows: Option<u32>,
    /// Perlin permutation seed.
    #[arg(long)]
    seed: Option<u32>,
    /// Simulation seconds per host second.
    #[arg(long)]
    time_scale: Option<f32>,
    /// Initial per-frame tile rotation (radians).
    #[arg(long)]
    rotation_speed: Option<f32>,
}

#[cfg(feature = "native")]
impl Cli {
    fn apply(
        &self,
        tiles_cfg: &mut tiles::TilesConfig,
        sim_cfg: &mut simulation::SimulationConfig,
        params_cfg: &mut params::ParamsConfig,
    ) {
        if let Some(cols) = self.cols {
            tiles_cfg.lattice.num_cols = cols;
        }
        if let Some(rows) = self.rows {
            tiles_cfg.lattice.num_rows = rows;
        }
        if let Some(seed) = self.seed {
            tiles_cfg.motion.noise_seed = seed;
        }
        if let Some(time_scale) = self.time_scale {
            sim_cfg.time_scale = time_scale;
        }
        if let Some(speed) = self.rotation_speed {
            params_cfg.rotation_speed = speed;
        }
    }
}

fn main() {
    #[allow(unused_mut)]
    let mut tiles_cfg = tiles::TilesConfig::default();
    #[allow(unused_mut)]
    let mut sim_cfg = simulation::SimulationConfig::default();
    #[allow(unused_mut)]
    let mut params_cfg = params::ParamsConfig::default();

    #[cfg(feature = "native")]
    {
        use clap::Parser;
        Cli::parse().apply(&mut tiles_cfg, &mut sim_cfg, &mut params_cfg);
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Glow Tiles".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<AppState>()
    .init_state::<AppState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(simulation::SimulationPlugin(sim_cfg))
    .add_plugins(params::ParamsPlugin(params_cfg))
    .add_plugins(stage::StagePlugin(stage::StageConfig::default()))
    .add_plugins(pointer::PointerPlugin(pointer::PointerConfig::default()))
    .add_plugins(tiles::TilesPlugin(tiles_cfg))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(AppState::Inspecting)));

    #[cfg(feature = "native")]
    {
        use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default());
    }

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            AppState::Running => AppState::Inspecting,
            AppState::Inspecting => AppState::Running,
        };
        debug!("app state -> {new_state:?}");
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("glow-tiles").chain(args.iter().copied()))
    }

    // ── lattice bounds ──────────────────────────────────────────────

    #[test]
    fn oversized_lattice_is_rejected() {
        assert!(parse(&["--cols", "70000"]).is_err());
        assert!(parse(&["--rows", "1025"]).is_err());
    }

    #[test]
    fn empty_lattice_is_rejected() {
        assert!(parse(&["--cols", "0"]).is_err());
        assert!(parse(&["--rows", "0"]).is_err());
    }

    #[test]
    fn largest_lattice_is_accepted() {
        let cli = parse(&["--cols", "1024", "--rows", "1024"]).unwrap();
        assert_eq!((cli.cols, cli.rows), (Some(1024), Some(1024)));
    }

    // ── overrides ───────────────────────────────────────────────────

    #[test]
    fn overrides_reach_every_config() {
        let cli = parse(&[
            "--cols",
            "8",
            "--rows",
            "4",
            "--seed",
            "7",
            "--time-scale",
            "2",
            "--rotation-speed",
            "0.05",
        ])
        .unwrap();
        let mut tiles_cfg = tiles::TilesConfig::default();
        let mut sim_cfg = simulation::SimulationConfig::default();
        let mut params_cfg = params::ParamsConfig::default();
        cli.apply(&mut tiles_cfg, &mut sim_cfg, &mut params_cfg);

        assert_eq!(tiles_cfg.lattice.num_cols, 8);
        assert_eq!(tiles_cfg.lattice.num_rows, 4);
        assert_eq!(tiles_cfg.motion.noise_seed, 7);
        assert_eq!(sim_cfg.time_scale, 2.0);
        assert_eq!(params_cfg.rotation_speed, 0.05);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let mut tiles_cfg = tiles::TilesConfig::default();
        let mut sim_cfg = simulation::SimulationConfig::default();
        let mut params_cfg = params::ParamsConfig::default();
        parse(&[])
            .unwrap()
            .apply(&mut tiles_cfg, &mut sim_cfg, &mut params_cfg);
        assert_eq!(tiles_cfg.lattice.num_cols, 50);
        assert_eq!(tiles_cfg.lattice.num_rows, 26);
        assert_eq!(sim_cfg.time_scale, 0.5);
    }
}
