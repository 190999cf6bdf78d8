/// Externally routable package categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Entities,
    Weapons,
    Props,
    Saves,
    Maps,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Entities,
        Self::Weapons,
        Self::Props,
        Self::Saves,
        Self::Maps,
    ];

    /// Exact match on the path segment; no case folding.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::Weapons => "weapons",
            Self::Props => "props",
            Self::Saves => "saves",
            Self::Maps => "maps",
        }
    }

    /// Package type as stored by the persistence layer.
    pub fn package_type(self) -> &'static str {
        match self {
            Self::Entities => "entity",
            Self::Weapons => "weapon",
            Self::Props => "prop",
            Self::Saves => "savemap",
            Self::Maps => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_slug_to_its_package_type() {
        let expected = [
            ("entities", "entity"),
            ("weapons", "weapon"),
            ("props", "prop"),
            ("saves", "savemap"),
            ("maps", "map"),
        ];

        for (slug, package_type) in expected {
            let category = Category::from_slug(slug).unwrap();
            assert_eq!(category.slug(), slug);
            assert_eq!(category.package_type(), package_type);
        }
    }

    #[test]
    fn rejects_unknown_and_near_miss_slugs() {
        for slug in ["unknown", "", "Entities", "MAPS", "entity", "map", "weapons/", " props"] {
            assert_eq!(Category::from_slug(slug), None, "{:?}", slug);
        }
    }
}
