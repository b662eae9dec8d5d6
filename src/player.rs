use bevy::color::palettes::css::ORANGE;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Where the character appears at startup and after falling out of the world.
pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 1.25, 0.0);

/// Below this height the character has left the world and is reset.
pub const FALL_RESET_Y: f32 = -5.0;

const WALK_SPEED: f32 = 4.0;
const RUN_MULTIPLIER: f32 = 2.0;
const JUMP_SPEED: f32 = 5.0;
const PLAYER_HALF_EXTENT: f32 = 0.3;

#[derive(Component)]
pub struct Player;

pub fn fell_out_of_world(y: f32) -> bool {
    y < FALL_RESET_Y
}

/// Planar velocity for the currently pressed movement keys, world-axis
/// aligned: forward is -Z.
pub fn movement_velocity(keyboard: &ButtonInput<KeyCode>) -> Vec3 {
    let mut direction = Vec3::ZERO;
    if keyboard.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
        direction.z -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
        direction.z += 1.0;
    }
    if keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        direction.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        direction.x += 1.0;
    }

    let mut speed = WALK_SPEED;
    if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        speed *= RUN_MULTIPLIER;
    }
    direction.normalize_or_zero() * speed
}

/// Spawn the controllable character: a dynamic body under engine gravity
/// with rotation locked so it stays upright.
pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Player,
        Mesh3d(meshes.add(Cuboid::from_length(PLAYER_HALF_EXTENT * 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ORANGE.into(),
            ..default()
        })),
        Transform::from_translation(SPAWN_POINT),
        RigidBody::Dynamic,
        Collider::cuboid(PLAYER_HALF_EXTENT, PLAYER_HALF_EXTENT, PLAYER_HALF_EXTENT),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
    ));
}

/// Drive the body's linear velocity from the keyboard. Vertical velocity is
/// left to gravity except when jumping from the ground.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    rapier: ReadRapierContext,
    mut players: Query<(Entity, &Transform, &mut Velocity), With<Player>>,
) {
    let Ok(context) = rapier.single() else {
        return;
    };
    for (entity, transform, mut velocity) in &mut players {
        let planar = movement_velocity(&keyboard);
        velocity.linvel.x = planar.x;
        velocity.linvel.z = planar.z;

        if keyboard.just_pressed(KeyCode::Space) {
            let grounded = context
                .cast_ray(
                    transform.translation,
                    Vec3::NEG_Y,
                    PLAYER_HALF_EXTENT + 0.1,
                    true,
                    QueryFilter::default().exclude_collider(entity),
                )
                .is_some();
            if grounded {
                velocity.linvel.y = JUMP_SPEED;
            }
        }
    }
}

/// Once-per-frame boundary check: a character that fell below the threshold
/// is teleported back to the spawn pose with velocity zeroed.
pub fn respawn_fallen_player(mut players: Query<(&mut Transform, &mut Velocity), With<Player>>) {
    for (mut transform, mut velocity) in &mut players {
        if fell_out_of_world(transform.translation.y) {
            transform.translation = SPAWN_POINT;
            velocity.linvel = Vec3::ZERO;
            velocity.angvel = Vec3::ZERO;
            info!("player fell out of the world, respawning");
        }
    }
}
