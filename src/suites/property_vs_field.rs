use std::hint::black_box;

use anyhow::Result;

use super::{Suite, SuiteContext};

const VALUE: &str = "Some string";

/// Public field next to a value reached through accessor methods. The
/// accessors stay out of line so they cost a real call.
#[derive(Debug, Default)]
struct Subject {
    field: &'static str,
    property: &'static str,
}

impl Subject {
    #[inline(never)]
    fn property(&self) -> &'static str {
        self.property
    }

    #[inline(never)]
    fn set_property(&mut self, value: &'static str) {
        self.property = value;
    }
}

#[inline(never)]
fn get_string() -> &'static str {
    "String"
}

/// Field reads and writes against accessor methods.
pub struct PropertyVsFieldSuite;

impl PropertyVsFieldSuite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PropertyVsFieldSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Suite for PropertyVsFieldSuite {
    fn name(&self) -> &str {
        "property_vs_field"
    }

    fn description(&self) -> &str {
        "set and get a field directly versus through accessor methods"
    }

    fn run(&mut self, ctx: &mut SuiteContext<'_>) -> Result<()> {
        let n = ctx.iterations();
        let mut subject = Subject::default();

        ctx.measure("Setting properties", || {
            for _ in 0..n {
                subject.set_property(black_box(VALUE));
            }
        })?;

        ctx.measure("Setting field", || {
            for _ in 0..n {
                subject.field = black_box(VALUE);
            }
        })?;

        subject.set_property("String");
        subject.field = "String";

        ctx.measure("Getting properties", || {
            for _ in 0..n {
                black_box(subject.property());
            }
        })?;

        ctx.measure("Getting field", || {
            for _ in 0..n {
                black_box(subject.field);
            }
        })?;

        ctx.measure("Getting from function", || {
            for _ in 0..n {
                subject.field = black_box(get_string());
            }
        })?;

        Ok(())
    }
}
