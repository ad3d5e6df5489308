//! Grouping discovered import paths by the object they reach.

use indexmap::IndexMap;

use crate::name::{CanonicalName, ImportPath, NameMapping};

/// All import paths sharing one canonical name, in discovery order.
///
/// Groups are never empty: a canonical name only exists because at
/// least one path produced it.
pub type AliasGroups = IndexMap<CanonicalName, Vec<ImportPath>>;

/// Inverts a mapping: every import path grouped under its canonical
/// name, discovery order preserved within each group.
#[must_use]
pub fn all_appearances(names: &NameMapping) -> AliasGroups {
    let mut groups = AliasGroups::new();
    for (path, canonical) in names {
        groups
            .entry(canonical.clone())
            .or_default()
            .push(path.clone());
    }
    groups
}

/// For each alias group, picks the shallowest import path (fewest
/// segments); the sort is stable, so among equally shallow paths the
/// first seen wins. Returns a mapping keyed by the winning path.
#[must_use]
pub fn first_appearance(names: &NameMapping) -> NameMapping {
    let mut out = NameMapping::new();
    for (canonical, mut appearances) in all_appearances(names) {
        appearances.sort_by_key(ImportPath::depth);
        if let Some(winner) = appearances.into_iter().next() {
            out.insert(winner, canonical);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, &str)]) -> NameMapping {
        entries
            .iter()
            .map(|(path, canonical)| {
                (path.parse().unwrap(), CanonicalName::from(*canonical))
            })
            .collect()
    }

    #[test]
    fn test_all_appearances_groups_by_canonical() {
        let names = mapping(&[
            ("pkg.Foo", "pkg.api.Foo"),
            ("pkg.api", "pkg.api"),
            ("pkg.api.Foo", "pkg.api.Foo"),
            ("pkg.internal.Foo", "pkg.api.Foo"),
        ]);
        let groups = all_appearances(&names);
        assert_eq!(groups.len(), 2);
        let foo = &groups[&CanonicalName::from("pkg.api.Foo")];
        let paths: Vec<_> = foo.iter().map(ImportPath::as_str).collect();
        assert_eq!(paths, ["pkg.Foo", "pkg.api.Foo", "pkg.internal.Foo"]);
    }

    #[test]
    fn test_all_appearances_flatten_reproduces_keys() {
        let names = mapping(&[
            ("pkg.Foo", "pkg.api.Foo"),
            ("pkg.api.Foo", "pkg.api.Foo"),
            ("pkg.bar", "pkg.bar"),
        ]);
        let groups = all_appearances(&names);
        let flattened: Vec<&ImportPath> = groups.values().flatten().collect();
        assert_eq!(flattened.len(), names.len());
        for path in names.keys() {
            assert_eq!(flattened.iter().filter(|p| **p == path).count(), 1);
        }
    }

    #[test]
    fn test_first_appearance_prefers_fewest_segments() {
        let names = mapping(&[
            ("pkg.sub.Foo", "pkg.sub.Foo"),
            ("pkg.Foo", "pkg.sub.Foo"),
        ]);
        let first = first_appearance(&names);
        assert_eq!(first.len(), 1);
        let (path, canonical) = first.first().unwrap();
        assert_eq!(path.as_str(), "pkg.Foo");
        assert_eq!(canonical.as_str(), "pkg.sub.Foo");
    }

    #[test]
    fn test_first_appearance_stable_on_ties() {
        let names = mapping(&[
            ("pkg.b.Foo", "pkg.impl.Foo"),
            ("pkg.a.Foo", "pkg.impl.Foo"),
        ]);
        let first = first_appearance(&names);
        // both candidates have three segments; discovery order decides
        assert_eq!(first.first().unwrap().0.as_str(), "pkg.b.Foo");
    }

    #[test]
    fn test_first_appearance_keeps_singleton_groups() {
        let names = mapping(&[("pkg.one", "pkg.one"), ("pkg.two", "pkg.two")]);
        let first = first_appearance(&names);
        assert_eq!(first, names);
    }
}
