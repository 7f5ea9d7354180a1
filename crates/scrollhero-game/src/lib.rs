//! Side-scroller simulation: deterministic fixed-tick world state,
//! spawning, collision resolution and renderable frame snapshots.
//! Drivers own the clock and the RNG; everything here is synchronous.

pub mod collision;
pub mod config;
pub mod entity;
pub mod frame;
pub mod player;
pub mod scoring;
pub mod spawn;
pub mod world;

pub use config::GameConfig;
pub use frame::{Frame, snapshot};
pub use world::{GameStatus, World};
