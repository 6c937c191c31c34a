use std::any::TypeId;
use std::hint::black_box;

use anyhow::{ensure, Result};

use super::{Suite, SuiteContext};
use crate::components::{RigidBody, Scene};

/// Component lookup by type parameter versus by runtime type id plus downcast.
pub struct GenericVsExplicitSuite;

impl GenericVsExplicitSuite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenericVsExplicitSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Suite for GenericVsExplicitSuite {
    fn name(&self) -> &str {
        "generic_vs_explicit"
    }

    fn description(&self) -> &str {
        "get_component::<T>() versus lookup by TypeId"
    }

    fn run(&mut self, ctx: &mut SuiteContext<'_>) -> Result<()> {
        let n = ctx.iterations();
        let scene = Scene::build(ctx.seed(), ctx.filler_entities());
        let world = &scene.world;
        let subject = scene.subject;
        let type_id = TypeId::of::<RigidBody>();

        ensure!(
            world.has_component::<RigidBody>(subject),
            "scene subject has no rigid body"
        );

        ctx.measure("Get component generic", || {
            for _ in 0..n {
                black_box(world.get_component::<RigidBody>(subject));
            }
        })?;

        ctx.measure("Get component explicit", || {
            for _ in 0..n {
                black_box(
                    world
                        .get_component_by_type(subject, black_box(type_id))
                        .and_then(|component| component.downcast_ref::<RigidBody>()),
                );
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::testing::run_captured;

    #[test]
    fn test_reports_both_lookups() {
        let (lines, _report) = run_captured(&mut GenericVsExplicitSuite::new(), 500);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Get component generic finished in : "));
        assert!(lines[1].starts_with("Get component explicit finished in : "));
    }
}
