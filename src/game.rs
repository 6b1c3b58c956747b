//! Demo scene setup.
//!
//! Spawns a keyboard-controlled player the camera follows, a mouse cursor
//! marker, a field of floor tiles and a few landmarks so camera movement,
//! rotation and zoom are easy to see.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::cameratarget::CameraTarget;
use crate::components::inputcontrolled::{InputControlled, MouseControlled};
use crate::components::mapposition::MapPosition;
use crate::components::shape::Shape;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2D;
use crate::resources::gameconfig::GameConfig;
use crate::resources::viewportscaler::ViewportScaler;

/// Size of a floor tile in world units.
pub const TILE_SIZE: f32 = 32.0;
/// Floor extends this many tiles from the origin in each direction.
pub const FLOOR_RADIUS: i32 = 24;
/// Seed for the floor colors, so every run looks the same.
pub const FLOOR_SEED: u64 = 0x5EED_F100;

/// One floor tile: center and RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorTile {
    pub center: Vec2,
    pub rgb: (u8, u8, u8),
}

/// Generate a checkerboard floor of `(2 * radius + 1)^2` tiles with slightly
/// randomized shades.
pub fn floor_tiles(seed: u64, radius: i32, tile_size: f32) -> Vec<FloorTile> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut tiles = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);
    for ty in -radius..=radius {
        for tx in -radius..=radius {
            let base: u8 = if (tx + ty) % 2 == 0 { 52 } else { 64 };
            let jitter = rng.u8(0..12);
            tiles.push(FloorTile {
                center: Vec2::new(tx as f32 * tile_size, ty as f32 * tile_size),
                rgb: (base + jitter, base + jitter / 2, base + 16),
            });
        }
    }
    tiles
}

/// Spawn the demo entities and insert the camera centered on the logical view.
pub fn setup(mut commands: Commands, config: Res<GameConfig>, scaler: Res<ViewportScaler>) {
    let logical = scaler.logical();
    commands.insert_resource(Camera2D::new(
        logical.width as f32,
        logical.height as f32,
    ));

    let tiles = floor_tiles(FLOOR_SEED, FLOOR_RADIUS, TILE_SIZE);
    let tile_count = tiles.len();
    commands.spawn_batch(tiles.into_iter().map(|tile| {
        let (r, g, b) = tile.rgb;
        (
            MapPosition {
                pos: tile.center,
            },
            Shape::filled(TILE_SIZE, TILE_SIZE),
            Tint::new(r, g, b),
            ZIndex(-10),
        )
    }));

    // Landmarks at the corners of the floor and on the origin
    let extent = FLOOR_RADIUS as f32 * TILE_SIZE;
    let landmarks = [
        (Vec2::ZERO, Tint::new(230, 230, 230)),
        (Vec2::new(-extent, -extent), Tint::new(220, 60, 60)),
        (Vec2::new(extent, -extent), Tint::new(60, 200, 80)),
        (Vec2::new(-extent, extent), Tint::new(70, 110, 230)),
        (Vec2::new(extent, extent), Tint::new(230, 200, 60)),
    ];
    for (pos, tint) in landmarks {
        commands.spawn((
            MapPosition { pos },
            Shape::outlined(TILE_SIZE * 1.5, TILE_SIZE * 1.5),
            tint,
            ZIndex(0),
        ));
    }

    commands.spawn((
        MapPosition::new(0.0, 0.0),
        Shape::filled(16.0, 16.0),
        Tint::new(250, 140, 40),
        ZIndex(10),
        InputControlled::new(config.camera_speed),
        CameraTarget,
    ));

    commands.spawn((
        MapPosition::new(0.0, 0.0),
        Shape::outlined(6.0, 6.0),
        Tint::new(255, 255, 255),
        ZIndex(20),
        MouseControlled::new(true, true),
    ));

    info!(
        "Scene ready: {} floor tiles, logical {}x{}",
        tile_count, logical.width, logical.height
    );
}
