use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ecs::{Component, Entity, World};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::default(),
            scale: Vec3::ONE,
        }
    }
}

impl Component for Transform {}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub mass: f32,
    pub velocity: Vec3,
    pub use_gravity: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            mass: 1.0,
            velocity: Vec3::default(),
            use_gravity: true,
        }
    }
}

impl Component for RigidBody {}

/// A world with one subject entity carrying a `Transform` and a `RigidBody`,
/// surrounded by seeded filler entities so lookups walk a populated map.
pub struct Scene {
    pub world: World,
    pub subject: Entity,
}

impl Scene {
    pub fn build(seed: u64, filler_entities: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut world = World::new();

        for _ in 0..filler_entities {
            let entity = world.create_entity();
            world.add_component(entity, Transform::at(random_vec3(&mut rng)));
            if rng.gen_bool(0.5) {
                world.add_component(
                    entity,
                    RigidBody {
                        mass: rng.gen_range(0.1..50.0),
                        velocity: random_vec3(&mut rng),
                        use_gravity: rng.gen_bool(0.8),
                    },
                );
            }
        }

        let subject = world.create_entity();
        world.add_component(subject, Transform::at(random_vec3(&mut rng)));
        world.add_component(subject, RigidBody::default());

        Self { world, subject }
    }

    /// Uncached access: a fresh lookup on every call
    pub fn transform(&self) -> Option<&Transform> {
        self.world.get_component::<Transform>(self.subject)
    }
}

fn random_vec3(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}
