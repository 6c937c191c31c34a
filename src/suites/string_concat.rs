use std::hint::black_box;

use anyhow::Result;

use super::{Suite, SuiteContext};

const PIECE: &str = "Some string";

/// Building a long string by copying on every append versus appending into
/// one growable buffer.
pub struct StringConcatSuite;

impl StringConcatSuite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StringConcatSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Suite for StringConcatSuite {
    fn name(&self) -> &str {
        "string_concat"
    }

    fn description(&self) -> &str {
        "repeated + concatenation versus a single String buffer"
    }

    fn run(&mut self, ctx: &mut SuiteContext<'_>) -> Result<()> {
        let n = ctx.iterations();
        let mut combined = String::new();

        ctx.measure("Strings combined with + operator", || {
            for _ in 0..n {
                // A fresh allocation per step, as with an immutable string type.
                combined = combined.clone() + black_box(PIECE);
            }
        })?;
        ctx.note(format!("String length: {}", combined.len()));

        ctx.measure("Strings combined with builder", || {
            let mut builder = String::new();
            for _ in 0..n {
                builder.push_str(black_box(PIECE));
            }
            combined = builder;
        })?;
        ctx.note(format!("String length: {}", combined.len()));

        Ok(())
    }
}
