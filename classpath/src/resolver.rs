use anyhow::{Context, Result};

use crate::bridge::ManagedStrings;
use crate::debug;
use crate::mutf8;
use crate::props::PropertyTable;

/// Answers property lookups from a [`PropertyTable`].
///
/// A lookup either produces a fresh managed string or nothing. Bad handles,
/// failed conversions and unknown keys are indistinguishable to the caller,
/// which falls back to its own property store.
#[derive(Clone, Copy)]
pub struct Resolver<'t> {
    table: &'t PropertyTable
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t PropertyTable) -> Self {
        Self { table }
    }

    pub fn resolve<S: ManagedStrings>(&self, strings: &S, key: S::Handle) -> Option<S::Handle> {
        match self.try_resolve(strings, key) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("unresolved: {:#}", err);
                None
            }
        }
    }

    fn try_resolve<S: ManagedStrings>(&self, strings: &S, key: S::Handle) -> Result<S::Handle> {
        let value = {
            let chars = strings.chars(key).context("failed to read key")?;

            let rule = self.table.get(&chars)
                .with_context(|| format!("no rule for {:?}", String::from_utf8_lossy(&chars)))?;

            rule.evaluate()
                .with_context(|| format!("rule for {:?} produced no value", String::from_utf8_lossy(&chars)))?
        };

        strings.new_string(&mutf8::encode(&value)).context("failed to allocate value")
    }
}
