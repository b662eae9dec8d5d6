//! End-to-end editing scenarios: the interaction policy driving the registry,
//! with every mutation mirrored to the on-disk store.

use tempfile::tempdir;

use voxel_sandbox::interact::{BlockClick, EditOp, apply_edit};
use voxel_sandbox::storage::BlockStore;
use voxel_sandbox::world::{BlockCoord, BlockRegistry, Face};

fn click(registry: &mut BlockRegistry, store: &BlockStore, event: BlockClick) {
    apply_edit(registry, event.edit());
    store.save(registry.blocks()).unwrap();
}

#[test]
fn first_block_placed_off_the_seed_cube() {
    let dir = tempdir().unwrap();
    let store = BlockStore::new(dir.path().join("cubes.json"));
    let mut registry = BlockRegistry::from_blocks(store.load().unwrap());
    assert!(registry.is_empty());

    // Click face 0 (+X) of the fixed seed block at the origin.
    click(
        &mut registry,
        &store,
        BlockClick {
            coord: BlockCoord::new(0, 0, 0),
            face: Face::from_index(0).unwrap(),
            remove: false,
        },
    );

    assert_eq!(registry.blocks(), &[BlockCoord::new(1, 0, 0)]);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("cubes.json")).unwrap(),
        "[[1,0,0]]"
    );
}

#[test]
fn modifier_click_removes_the_target_not_the_neighbor() {
    let dir = tempdir().unwrap();
    let store = BlockStore::new(dir.path().join("cubes.json"));
    let mut registry = BlockRegistry::from_blocks(vec![
        BlockCoord::new(2, 3, 4),
        BlockCoord::new(2, 4, 4),
    ]);

    // Whatever face is under the pointer, a modifier click takes out the
    // block itself.
    click(
        &mut registry,
        &store,
        BlockClick {
            coord: BlockCoord::new(2, 3, 4),
            face: Face::PosY,
            remove: true,
        },
    );

    assert_eq!(registry.blocks(), &[BlockCoord::new(2, 4, 4)]);
    assert_eq!(store.load().unwrap(), vec![BlockCoord::new(2, 4, 4)]);
}

#[test]
fn removing_an_absent_block_rewrites_identical_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cubes.json");
    let store = BlockStore::new(&path);
    let mut registry = BlockRegistry::from_blocks(vec![BlockCoord::new(0, 1, 0)]);
    store.save(registry.blocks()).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(!apply_edit(
        &mut registry,
        EditOp::Remove(BlockCoord::new(9, 9, 9))
    ));
    store.save(registry.blocks()).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn session_restart_restores_the_same_membership() {
    let dir = tempdir().unwrap();
    let store = BlockStore::new(dir.path().join("cubes.json"));
    let mut registry = BlockRegistry::from_blocks(store.load().unwrap());

    for face in Face::ALL {
        click(
            &mut registry,
            &store,
            BlockClick {
                coord: BlockCoord::new(0, 0, 0),
                face,
                remove: false,
            },
        );
    }

    let reloaded = BlockRegistry::from_blocks(store.load().unwrap());
    assert_eq!(reloaded.blocks(), registry.blocks());
    assert_eq!(reloaded.len(), 6);
}
