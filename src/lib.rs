pub mod camera;
pub mod interact;
pub mod player;
pub mod storage;
pub mod world;
