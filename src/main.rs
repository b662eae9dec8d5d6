use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use voxel_sandbox::camera::{OrbitCamera, orbit_camera};
use voxel_sandbox::interact::{
    HoveredBlock, on_block_click, on_block_hover, on_block_unhover, setup_blocks,
    sync_block_entities, update_block_highlight,
};
use voxel_sandbox::player::{player_movement, respawn_fallen_player, spawn_player};
use voxel_sandbox::storage::BlockStore;
use voxel_sandbox::world::BlockRegistry;

fn main() -> anyhow::Result<()> {
    let store = BlockStore::default();
    // A malformed save file is fatal here; a missing one is an empty world.
    let registry = BlockRegistry::from_blocks(store.load()?);

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(MeshPickingPlugin)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RapierDebugRenderPlugin::default())
        .insert_resource(store)
        .insert_resource(registry)
        .init_resource::<HoveredBlock>()
        .add_systems(Startup, (setup_scene, setup_blocks, spawn_player))
        .add_systems(
            Update,
            (
                sync_block_entities,
                update_block_highlight,
                orbit_camera,
                player_movement,
                respawn_fallen_player,
            ),
        )
        .add_observer(on_block_click)
        .add_observer(on_block_hover)
        .add_observer(on_block_unhover)
        .run();

    Ok(())
}

fn setup_scene(mut commands: Commands, registry: Res<BlockRegistry>) {
    info!("loaded {} placed blocks", registry.len());

    let camera_start = Vec3::new(5.0, 5.0, 5.0);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 90.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_translation(camera_start).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::looking_from(camera_start, Vec3::ZERO),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 2_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 5_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-5.0, 5.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
