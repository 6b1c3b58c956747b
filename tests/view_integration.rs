//! View and camera integration tests.
//!
//! Build a `World` with the resources the demo uses, run single systems
//! through a `Schedule`, and check the resulting view and camera state.

use bevy_ecs::prelude::*;
use glam::Vec2;

use fixedres2d::components::cameratarget::CameraTarget;
use fixedres2d::components::inputcontrolled::{InputControlled, MouseControlled};
use fixedres2d::components::mapposition::MapPosition;
use fixedres2d::game;
use fixedres2d::resources::camera2d::Camera2D;
use fixedres2d::resources::gameconfig::GameConfig;
use fixedres2d::resources::input::InputState;
use fixedres2d::resources::viewportscaler::{LogicalResolution, ViewportScaler};
use fixedres2d::resources::windowsize::WindowSize;
use fixedres2d::resources::worldtime::WorldTime;
use fixedres2d::systems::camera::{MAX_ZOOM, camera_controller, camera_follow};
use fixedres2d::systems::gameconfig::apply_padding_from_config;
use fixedres2d::systems::inputsimplecontroller::input_simple_controller;
use fixedres2d::systems::mousecontroller::mouse_controller;
use fixedres2d::systems::time::update_world_time;
use fixedres2d::systems::viewport::{PADDING_STEP, adjust_padding, update_view_state};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_eq_vec(a: Vec2, b: Vec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn make_world(window_w: i32, window_h: i32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize {
        w: window_w,
        h: window_h,
    });
    world.insert_resource(ViewportScaler::new(
        LogicalResolution::new(640, 360),
        0.0,
        window_w,
        window_h,
    ));
    world.insert_resource(Camera2D::new(640.0, 360.0));
    world
}

fn tick_update_view_state(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_view_state);
    schedule.run(world);
}

fn tick_adjust_padding(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(adjust_padding);
    schedule.run(world);
}

fn tick_apply_padding_from_config(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(apply_padding_from_config);
    schedule.run(world);
}

fn tick_input_simple_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(input_simple_controller);
    schedule.run(world);
}

fn tick_camera_follow(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow);
    schedule.run(world);
}

fn tick_camera_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_controller);
    schedule.run(world);
}

fn tick_mouse_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(mouse_controller);
    schedule.run(world);
}

#[test]
fn window_resize_recomputes_view() {
    let mut world = make_world(1280, 720);
    assert_eq!(world.resource::<ViewportScaler>().view().scale_factor, 2.0);

    {
        let mut window = world.resource_mut::<WindowSize>();
        window.w = 1280;
        window.h = 800;
    }
    tick_update_view_state(&mut world);

    let view = world.resource::<ViewportScaler>().view();
    assert_eq!(view.view_width, 1280.0);
    assert_eq!(view.view_height, 720.0);
    assert_eq!(view.viewport_y, 40.0);
}

#[test]
fn minimized_window_gives_empty_view() {
    let mut world = make_world(1280, 720);
    {
        let mut window = world.resource_mut::<WindowSize>();
        window.w = 0;
        window.h = 0;
    }
    tick_update_view_state(&mut world);
    assert!(world.resource::<ViewportScaler>().view().is_empty());

    {
        let mut window = world.resource_mut::<WindowSize>();
        window.w = 1920;
        window.h = 1080;
    }
    tick_update_view_state(&mut world);
    assert_eq!(world.resource::<ViewportScaler>().view().scale_factor, 3.0);
}

#[test]
fn padding_keys_flow_through_config_into_scaler() {
    let mut world = make_world(1280, 720);
    world
        .resource_mut::<InputState>()
        .padding_increase
        .just_pressed = true;

    tick_adjust_padding(&mut world);
    assert_eq!(world.resource::<GameConfig>().padding, PADDING_STEP);

    tick_apply_padding_from_config(&mut world);
    let scaler = world.resource::<ViewportScaler>();
    assert_eq!(scaler.padding(), PADDING_STEP);
    assert!(approx_eq(scaler.view().view_width, 1280.0 - 2.0 * PADDING_STEP));
}

#[test]
fn padding_never_goes_negative() {
    let mut world = make_world(1280, 720);
    world
        .resource_mut::<InputState>()
        .padding_decrease
        .just_pressed = true;
    tick_adjust_padding(&mut world);
    assert_eq!(world.resource::<GameConfig>().padding, 0.0);
}

#[test]
fn player_moves_and_camera_follows() {
    let mut world = make_world(1280, 720);
    let player = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            InputControlled::new(100.0),
            CameraTarget,
        ))
        .id();

    world.resource_mut::<InputState>().direction_right.active = true;
    update_world_time(&mut world, 0.5);
    tick_input_simple_controller(&mut world);
    tick_camera_follow(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq_vec(pos, Vec2::new(50.0, 0.0)));

    let mut camera = world.resource_mut::<Camera2D>();
    assert_eq!(camera.position(), pos);
    // Target sits on the centered origin
    assert!(approx_eq_vec(
        camera.world_to_screen(pos),
        Vec2::new(320.0, 180.0)
    ));
}

#[test]
fn diagonal_movement_is_normalized() {
    let mut world = make_world(1280, 720);
    let player = world
        .spawn((MapPosition::new(0.0, 0.0), InputControlled::new(100.0)))
        .id();
    {
        let mut input = world.resource_mut::<InputState>();
        input.direction_down.active = true;
        input.direction_right.active = true;
    }
    update_world_time(&mut world, 1.0);
    tick_input_simple_controller(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.length(), 100.0));
    assert!(approx_eq(pos.x, pos.y));
}

#[test]
fn idle_camera_is_not_rebuilt() {
    let mut world = make_world(1280, 720);
    world.spawn((MapPosition::new(0.0, 0.0), CameraTarget));

    tick_camera_follow(&mut world);
    let mut camera = world.resource_mut::<Camera2D>();
    let first = camera.transform();
    let rebuilds = camera.recomputations();
    drop(camera);

    // Target did not move: camera stays clean
    tick_camera_follow(&mut world);
    let mut camera = world.resource_mut::<Camera2D>();
    assert!(!camera.is_dirty());
    assert_eq!(camera.transform(), first);
    assert_eq!(camera.recomputations(), rebuilds);
}

#[test]
fn camera_controller_rotates_and_clamps_zoom() {
    let mut world = make_world(1280, 720);
    {
        let mut input = world.resource_mut::<InputState>();
        input.rotate_right.active = true;
        input.zoom_in.active = true;
    }
    update_world_time(&mut world, 100.0);
    tick_camera_controller(&mut world);

    let camera = world.resource::<Camera2D>();
    let rotation_speed = world.resource::<GameConfig>().camera_rotation_speed;
    assert!(approx_eq(camera.rotation(), rotation_speed * 100.0));
    assert_eq!(camera.zoom(), Vec2::splat(MAX_ZOOM));
}

#[test]
fn camera_reset_restores_defaults() {
    let mut world = make_world(1280, 720);
    {
        let mut camera = world.resource_mut::<Camera2D>();
        camera.set_rotation(1.0);
        camera.set_uniform_zoom(3.0);
    }
    world.resource_mut::<InputState>().camera_reset.just_pressed = true;
    tick_camera_controller(&mut world);

    let camera = world.resource::<Camera2D>();
    assert_eq!(camera.rotation(), 0.0);
    assert_eq!(camera.zoom(), Vec2::ONE);
}

#[test]
fn mouse_maps_through_letterbox_and_camera() {
    // 1280x800 window: 40px bars top and bottom, scale 2
    let mut world = make_world(1280, 800);
    world
        .resource_mut::<Camera2D>()
        .set_position(Vec2::new(1000.0, 500.0));
    let cursor = world
        .spawn((MapPosition::new(0.0, 0.0), MouseControlled::new(true, true)))
        .id();

    // Window center -> logical center -> camera position
    world.resource_mut::<InputState>().mouse_position = Vec2::new(640.0, 400.0);
    tick_mouse_controller(&mut world);
    let pos = world.get::<MapPosition>(cursor).unwrap().pos;
    assert!(approx_eq_vec(pos, Vec2::new(1000.0, 500.0)));

    // Top-left of the viewport -> logical (0, 0) -> half a view up-left
    world.resource_mut::<InputState>().mouse_position = Vec2::new(0.0, 40.0);
    tick_mouse_controller(&mut world);
    let pos = world.get::<MapPosition>(cursor).unwrap().pos;
    assert!(approx_eq_vec(pos, Vec2::new(680.0, 320.0)));
}

#[test]
fn mouse_ignored_when_camera_is_singular() {
    let mut world = make_world(1280, 720);
    world
        .resource_mut::<Camera2D>()
        .set_zoom(Vec2::new(1.0, 0.0));
    let cursor = world
        .spawn((MapPosition::new(7.0, 7.0), MouseControlled::new(true, false)))
        .id();
    world.resource_mut::<InputState>().mouse_position = Vec2::new(100.0, 100.0);
    tick_mouse_controller(&mut world);
    assert_eq!(
        world.get::<MapPosition>(cursor).unwrap().pos,
        Vec2::new(7.0, 7.0)
    );
}

#[test]
fn scene_setup_inserts_camera_and_player() {
    let mut world = make_world(1280, 720);
    world.remove_resource::<Camera2D>();

    let setup_id = world.register_system(game::setup);
    world.run_system(setup_id).unwrap();

    let camera = world.resource::<Camera2D>();
    assert_eq!(camera.origin(), Vec2::new(320.0, 180.0));

    let mut targets = world.query_filtered::<&MapPosition, With<CameraTarget>>();
    assert_eq!(targets.iter(&world).count(), 1);

    let mut cursors = world.query::<&MouseControlled>();
    assert_eq!(cursors.iter(&world).count(), 1);

    let side = (2 * game::FLOOR_RADIUS + 1) as usize;
    let mut positions = world.query::<&MapPosition>();
    // floor + 5 landmarks + player + cursor
    assert_eq!(positions.iter(&world).count(), side * side + 7);
}
