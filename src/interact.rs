use bevy::color::palettes::css::*;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::storage::BlockStore;
use crate::world::{BlockCoord, BlockRegistry, Face};

/// A renderable cube occupying one lattice cell.
#[derive(Component)]
pub struct Block(pub BlockCoord);

/// Marker for blocks owned by the registry (spawned and despawned by
/// [`sync_block_entities`]). The seed block at the origin does not carry it
/// and therefore survives removal, as in the original scene.
#[derive(Component)]
pub struct RegistryBlock;

/// Which block entity the pointer is currently over, if any.
#[derive(Resource, Default)]
pub struct HoveredBlock(pub Option<Entity>);

/// Shared mesh and the three hover-state materials for every block.
#[derive(Resource)]
pub struct BlockAssets {
    pub mesh: Handle<Mesh>,
    pub plain: Handle<StandardMaterial>,
    pub hover_add: Handle<StandardMaterial>,
    pub hover_remove: Handle<StandardMaterial>,
}

/// A pointer activation on a block face, reduced to the fields the edit
/// policy needs: no opaque event objects cross this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockClick {
    pub coord: BlockCoord,
    pub face: Face,
    pub remove: bool,
}

/// The mutation a click resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Add(BlockCoord),
    Remove(BlockCoord),
}

impl BlockClick {
    /// The interaction policy: a plain activation adds at the neighbor cell
    /// in the direction of the clicked face; a modifier activation removes
    /// the clicked block itself, whatever face was hit.
    pub fn edit(self) -> EditOp {
        if self.remove {
            EditOp::Remove(self.coord)
        } else {
            EditOp::Add(self.coord.neighbor(self.face))
        }
    }
}

/// Apply an edit to the registry. Returns true if membership changed.
pub fn apply_edit(registry: &mut BlockRegistry, op: EditOp) -> bool {
    match op {
        EditOp::Add(coord) => registry.add(coord),
        EditOp::Remove(coord) => registry.remove(coord),
    }
}

pub fn removal_modifier_held(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ])
}

/// Everything a block entity needs: render mesh, hover-able material, and a
/// fixed rigid body so the character can stand on it.
pub fn block_bundle(coord: BlockCoord, assets: &BlockAssets) -> impl Bundle {
    (
        Block(coord),
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(assets.plain.clone()),
        Transform::from_translation(coord.center()),
        RigidBody::Fixed,
        Collider::cuboid(0.5, 0.5, 0.5),
    )
}

/// Create the shared block assets and the indestructible seed block at the
/// origin that every world starts from.
pub fn setup_blocks(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let assets = BlockAssets {
        mesh: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        plain: materials.add(StandardMaterial {
            base_color: WHITE.into(),
            ..default()
        }),
        hover_add: materials.add(StandardMaterial {
            base_color: LIGHT_GREEN.into(),
            ..default()
        }),
        hover_remove: materials.add(StandardMaterial {
            base_color: HOT_PINK.into(),
            ..default()
        }),
    };

    commands.spawn(block_bundle(BlockCoord::new(0, 0, 0), &assets));
    commands.insert_resource(assets);
}

/// Translate a primary-button click on a block into an edit and persist the
/// result. Runs as a global observer so dynamically spawned blocks are
/// covered without per-entity wiring.
pub fn on_block_click(
    trigger: Trigger<Pointer<Click>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    blocks: Query<&Block>,
    mut registry: ResMut<BlockRegistry>,
    store: Res<BlockStore>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    let Ok(block) = blocks.get(trigger.target()) else {
        return;
    };
    let Some(normal) = trigger.event().hit.normal else {
        return;
    };
    let Some(face) = Face::from_normal(normal) else {
        return;
    };

    let click = BlockClick {
        coord: block.0,
        face,
        remove: removal_modifier_held(&keyboard),
    };
    let op = click.edit();
    if apply_edit(&mut registry, op) {
        info!("applied {op:?}, {} blocks placed", registry.len());
    }

    // Full rewrite on every activation, changed or not.
    if let Err(err) = store.save(registry.blocks()) {
        error!("failed to persist blocks: {err:#}");
    }
}

pub fn on_block_hover(
    trigger: Trigger<Pointer<Over>>,
    blocks: Query<(), With<Block>>,
    mut hovered: ResMut<HoveredBlock>,
) {
    if blocks.contains(trigger.target()) {
        hovered.0 = Some(trigger.target());
    }
}

pub fn on_block_unhover(trigger: Trigger<Pointer<Out>>, mut hovered: ResMut<HoveredBlock>) {
    if hovered.0 == Some(trigger.target()) {
        hovered.0 = None;
    }
}

/// Keep one block entity alive per registry coordinate.
///
/// Runs only when the registry changed (which includes the first frame, so
/// persisted blocks from the previous session appear here).
pub fn sync_block_entities(
    mut commands: Commands,
    registry: Res<BlockRegistry>,
    assets: Res<BlockAssets>,
    existing: Query<(Entity, &Block), With<RegistryBlock>>,
) {
    if !registry.is_changed() {
        return;
    }

    for (entity, block) in &existing {
        if !registry.contains(block.0) {
            commands.entity(entity).despawn();
        }
    }

    let spawned: Vec<BlockCoord> = existing.iter().map(|(_, b)| b.0).collect();
    for coord in registry.blocks() {
        if !spawned.contains(coord) {
            commands.spawn((block_bundle(*coord, &assets), RegistryBlock));
        }
    }
}

/// Tint the hovered block: lightgreen for an add, hotpink when the removal
/// modifier is held. Purely presentational; never touches the registry.
pub fn update_block_highlight(
    hovered: Res<HoveredBlock>,
    keyboard: Res<ButtonInput<KeyCode>>,
    assets: Res<BlockAssets>,
    mut blocks: Query<(Entity, &mut MeshMaterial3d<StandardMaterial>), With<Block>>,
) {
    let removing = removal_modifier_held(&keyboard);
    for (entity, mut material) in &mut blocks {
        let target = if hovered.0 == Some(entity) {
            if removing {
                &assets.hover_remove
            } else {
                &assets.hover_add
            }
        } else {
            &assets.plain
        };
        if material.0 != *target {
            material.0 = target.clone();
        }
    }
}
