use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;

use crate::world::BlockCoord;

/// Default save file next to the executable's working directory; the key the
/// original tool used in browser storage.
pub const DEFAULT_STORE_PATH: &str = "cubes.json";

/// Durable home of the placed blocks: a single JSON file holding a flat
/// array of `[x, y, z]` triples.
///
/// Read once at startup, rewritten in full after every edit. No diffing, no
/// retries; the world is small enough that a full rewrite per click is fine.
#[derive(Resource, Debug, Clone)]
pub struct BlockStore {
    path: PathBuf,
}

impl BlockStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted coordinates. A missing file is an empty world;
    /// malformed content is an error (fatal at startup).
    pub fn load(&self) -> anyhow::Result<Vec<BlockCoord>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading block store {}", self.path.display()));
            }
        };
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing block store {}", self.path.display()))
    }

    /// Rewrite the store with the full current membership.
    pub fn save(&self, blocks: &[BlockCoord]) -> anyhow::Result<()> {
        let json = serde_json::to_string(blocks).context("serializing block store")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing block store {}", self.path.display()))
    }
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}
