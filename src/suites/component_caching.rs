use std::hint::black_box;

use anyhow::{Context, Result};

use super::{Suite, SuiteContext};
use crate::components::Scene;

/// Looking a component up on every access versus holding on to it.
pub struct ComponentCachingSuite;

impl ComponentCachingSuite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComponentCachingSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Suite for ComponentCachingSuite {
    fn name(&self) -> &str {
        "component_caching"
    }

    fn description(&self) -> &str {
        "transform lookup per access versus a cached reference"
    }

    fn run(&mut self, ctx: &mut SuiteContext<'_>) -> Result<()> {
        let n = ctx.iterations();
        let scene = Scene::build(ctx.seed(), ctx.filler_entities());
        let cached = scene
            .transform()
            .context("scene subject has no transform")?;

        ctx.measure("Accessing exposed transform component", || {
            for _ in 0..n {
                black_box(scene.transform());
            }
        })?;

        ctx.measure("Accessing cached transform component", || {
            for _ in 0..n {
                black_box(cached);
            }
        })?;

        ctx.measure("Accessing exposed transform position", || {
            for _ in 0..n {
                black_box(scene.transform().map(|transform| transform.position));
            }
        })?;

        ctx.measure("Accessing cached transform position", || {
            for _ in 0..n {
                black_box(cached.position);
            }
        })?;

        Ok(())
    }
}
