//! Named singleton descriptors.
//!
//! Resolves the names a declaration layer would write (`number`, `any`,
//! `true`, ...) to shared descriptors. The table is built on first use and
//! never changes afterwards.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::{Descriptor, Kind};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

struct Registry {
    descriptors: FxHashMap<&'static str, Descriptor>,
}

impl Registry {
    fn build() -> Self {
        let mut descriptors = FxHashMap::default();
        for kind in Kind::PRIMITIVES {
            if let Some(descriptor) = Descriptor::primitive(kind) {
                descriptors.insert(kind.name(), descriptor);
            }
        }
        descriptors.insert("true", Descriptor::literal(true));
        descriptors.insert("false", Descriptor::literal(false));

        tracing::debug!(entries = descriptors.len(), "descriptor registry initialized");
        Registry { descriptors }
    }
}

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::build)
}

/// The descriptor registered under `name`.
pub fn lookup(name: &str) -> Option<&'static Descriptor> {
    registry().descriptors.get(name)
}

pub fn contains(name: &str) -> bool {
    registry().descriptors.contains_key(name)
}

/// Every registered name, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = registry().descriptors.keys().copied().collect();
    names.sort_unstable();
    names
}
