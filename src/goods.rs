//! Good registry - resource identifiers and the icons that render them.

use std::fmt;

use indexmap::IndexMap;

/// Identifier of a produced/consumed good (e.g. `Timber`).
/// Case-sensitive, matches the catalog's spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GoodId(String);

impl GoodId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display-formatted quantity next to a good icon. Keeps the source
/// spelling; the production parser guarantees it reads as a positive
/// number.
#[derive(Clone, Debug, PartialEq)]
pub struct Amount(String);

impl Amount {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered good -> amount mapping. Insertion order is the source order
/// and drives left-to-right rendering; it is never re-sorted.
pub type GoodMap = IndexMap<GoodId, Amount>;

/// One registered good: catalog name + icon asset path.
pub struct GoodDef {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Every good the viewer can render. Catalog rows referencing anything
/// else are rejected at construction time.
pub const GOOD_REGISTRY: &[GoodDef] = &[
    GoodDef { name: "Timber", icon: "icons/timber.png" },
    GoodDef { name: "Bricks", icon: "icons/bricks.png" },
    GoodDef { name: "Steel Beams", icon: "icons/steel_beams.png" },
    GoodDef { name: "Windows", icon: "icons/windows.png" },
    GoodDef { name: "Reinforced Concrete", icon: "icons/reinforced_concrete.png" },
    GoodDef { name: "Glass", icon: "icons/glass.png" },
    GoodDef { name: "Fabric", icon: "icons/fabric.png" },
    GoodDef { name: "Sails", icon: "icons/sails.png" },
    GoodDef { name: "Schnapps", icon: "icons/schnapps.png" },
    GoodDef { name: "Soap", icon: "icons/soap.png" },
    GoodDef { name: "Bread", icon: "icons/bread.png" },
    GoodDef { name: "Canned Food", icon: "icons/canned_food.png" },
    GoodDef { name: "Sewing Machines", icon: "icons/sewing_machines.png" },
    GoodDef { name: "Fur Coats", icon: "icons/fur_coats.png" },
];

/// Look up a good's registry entry. `None` means the catalog references
/// a good this build ships no icon for.
pub fn good_def(id: &GoodId) -> Option<&'static GoodDef> {
    GOOD_REGISTRY.iter().find(|def| def.name == id.as_str())
}
