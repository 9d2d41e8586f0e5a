use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::mutf8;

pub const LINE_SEPARATOR: &str = "line.separator";

/// How a recognized key produces its value.
#[derive(Clone, Copy)]
pub enum Rule {
    Fixed(&'static str),
    /// Evaluated on every lookup; `None` leaves the key unresolved.
    Computed(fn() -> Option<String>),
}

impl Rule {
    pub fn evaluate(&self) -> Option<Cow<'static, str>> {
        match self {
            Rule::Fixed(value) => Some(Cow::Borrowed(*value)),
            Rule::Computed(compute) => compute().map(Cow::Owned),
        }
    }
}

impl Debug for Rule {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Fixed(value) => write!(fmt, "Fixed({value:?})"),
            Rule::Computed(_) => write!(fmt, "Computed(..)"),
        }
    }
}

/// Read-only mapping from property key to [`Rule`].
///
/// Keys are stored in the managed side's encoding (modified UTF-8), so a
/// lookup is an exact, case-sensitive byte comparison against whatever the
/// runtime handed over.
#[derive(Debug)]
pub struct PropertyTable {
    rules: HashMap<Box<[u8]>, Rule>
}

impl PropertyTable {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, Rule)>) -> Self {
        let rules = entries.into_iter()
            .map(|(key, rule)| (mutf8::encode(key).into_bytes().into_boxed_slice(), rule))
            .collect();

        Self { rules }
    }

    /// The keys this library answers for out of the box.
    ///
    /// `line.separator` is always `"\n"`, whatever the host convention is.
    pub fn builtin() -> Self {
        Self::new([
            (LINE_SEPARATOR, Rule::Fixed("\n")),
        ])
    }

    pub fn get(&self, key: &[u8]) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(mutf8::encode(key).as_bytes()).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.rules.keys().map(|key| String::from_utf8_lossy(key))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
