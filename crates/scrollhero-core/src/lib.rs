pub mod arena;
pub mod events;
pub mod geom;
pub mod input;
