//! fixedres2d main entry point.
//!
//! A small 2D demo of resolution-independent rendering written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for the view and camera matrices
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (optional), apply CLI overrides, open a resizable window
//! 2. Insert resources (viewport scaler, input, time) and spawn the scene
//! 3. Each frame:
//!    - read input, move the player, update the camera
//!    - forward window size changes to the viewport scaler
//!    - draw the world inside the letterboxed viewport
//!
//! # Controls
//!
//! WASD/arrows move, Q/E rotate, Z/X zoom, R resets the camera, `[`/`]` change
//! the padding, F10 toggles fullscreen, F11 the debug overlay, Escape quits.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --render-width 320 --render-height 180
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use fixedres2d::events::switchdebug::switch_debug_observer;
use fixedres2d::events::switchfullscreen::switch_fullscreen_observer;
use fixedres2d::game;
use fixedres2d::resources::gameconfig::GameConfig;
use fixedres2d::resources::input::InputState;
use fixedres2d::resources::viewportscaler::{LogicalResolution, ViewportScaler};
use fixedres2d::resources::windowsize::WindowSize;
use fixedres2d::resources::worldtime::WorldTime;
use fixedres2d::systems::camera::{camera_controller, camera_follow};
use fixedres2d::systems::gameconfig::{apply_gameconfig_changes, apply_padding_from_config};
use fixedres2d::systems::input::update_input_state;
use fixedres2d::systems::inputsimplecontroller::input_simple_controller;
use fixedres2d::systems::mousecontroller::mouse_controller;
use fixedres2d::systems::render::render_system;
use fixedres2d::systems::time::update_world_time;
use fixedres2d::systems::viewport::{adjust_padding, update_view_state};

/// Resolution-independent 2D rendering demo
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Override the logical render width.
    #[arg(long, value_name = "PIXELS")]
    render_width: Option<u32>,

    /// Override the logical render height.
    #[arg(long, value_name = "PIXELS")]
    render_height: Option<u32>,

    /// Override the padding around the letterboxed view.
    #[arg(long, value_name = "PIXELS")]
    padding: Option<f32>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{} ({:?}), using defaults", e, cli.config);
    }
    if let Some(w) = cli.render_width {
        config.render_width = w;
    }
    if let Some(h) = cli.render_height {
        config.render_height = h;
    }
    if let Some(p) = cli.padding {
        config.padding = p;
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Config written to {}", config.config_path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let logical = LogicalResolution::new(config.render_width, config.render_height);
    if !logical.is_valid() {
        eprintln!(
            "Error: invalid render resolution {}x{}",
            logical.width, logical.height
        );
        std::process::exit(1);
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("fixedres2d")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled through InputState
    rl.set_exit_key(None);

    let window = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    log::info!(
        "Logical {}x{} in window {}x{}",
        logical.width,
        logical.height,
        window.w,
        window.h
    );

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ViewportScaler::new(
        logical,
        config.padding,
        window.w,
        window.h,
    ));
    world.insert_resource(window);
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(switch_fullscreen_observer));
    world.flush();

    let setup_id = world.register_system(game::setup);
    if let Err(e) = world.run_system(setup_id) {
        log::error!("Scene setup failed: {}", e);
        std::process::exit(1);
    }

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes);
    update.add_systems(update_input_state);
    update.add_systems(adjust_padding.after(update_input_state));
    update.add_systems(apply_padding_from_config.after(adjust_padding));
    update.add_systems(update_view_state.after(apply_padding_from_config));
    update.add_systems(input_simple_controller.after(update_input_state));
    update.add_systems(camera_controller.after(update_input_state));
    update.add_systems(
        camera_follow
            .after(input_simple_controller)
            .after(camera_controller),
    );
    update.add_systems(mouse_controller.after(camera_follow).after(update_view_state));
    update.add_systems(render_system.after(mouse_controller));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().exit.active
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        // Window size may change due to resize or fullscreen toggles
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            if window_size.w != new_w || window_size.h != new_h {
                window_size.w = new_w;
                window_size.h = new_h;
            }
        }

        update.run(&mut world);

        world.clear_trackers();
    }
    log::info!("Bye");
}
