//! Minimal entity component world used as the lookup target of the
//! component benchmarks.

pub mod component;
pub mod entity;
pub mod world;

pub use component::{Component, TypedComponentStorage};
pub use entity::{Entity, EntityId};
pub use world::World;
