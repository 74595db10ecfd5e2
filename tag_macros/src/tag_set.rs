//! Tag-set uniqueness checking.
//!
//! While a record declaration is expanded, its tag list is folded into a
//! `TagSet`, one insertion per tag in declaration order. An insertion that
//! finds its tag already present is a no-op, so after the fold the set is
//! smaller than the tag list iff some tag occurred twice. Tags are keyed by
//! the spelled-out path; two paths that name the same type through different
//! spellings are caught later by the generated impls instead (the duplicate
//! `Slot` impls conflict).

use quote::ToTokens;
use syn::Path;

/// An insertion-ordered set of tag paths.
pub struct TagSet {
    keys: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet { keys: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Index of `tag` within the set. Returns `len()` (one past the end)
    /// when the tag is not present, so the miss case stays usable as an
    /// index bound rather than panicking.
    pub fn position(&self, tag: &Path) -> usize {
        let key = path_key(tag);
        self.keys
            .iter()
            .position(|k| *k == key)
            .unwrap_or_else(|| self.keys.len())
    }

    /// Adds `tag` to the set. Adding a tag that is already present is a
    /// no-op and returns false.
    pub fn insert(&mut self, tag: &Path) -> bool {
        if self.position(tag) != self.len() {
            return false;
        }
        self.keys.push(path_key(tag));
        true
    }
}

/// True iff no tag occurs at two positions of `tags`.
pub fn tags_unique(tags: &[Path]) -> bool {
    let mut set = TagSet::new();
    for tag in tags {
        set.insert(tag);
    }
    set.len() == tags.len()
}

pub fn path_key(path: &Path) -> String {
    path.to_token_stream().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> Path {
        syn::parse_str(s).unwrap()
    }

    #[test]
    fn empty_sequence_is_unique() {
        assert!(tags_unique(&[]));
    }

    #[test]
    fn single_tag_is_unique() {
        assert!(tags_unique(&[path("A")]));
    }

    #[test]
    fn distinct_tags_are_unique() {
        assert!(tags_unique(&[path("A"), path("B"), path("C")]));
    }

    #[test]
    fn adjacent_duplicate_is_rejected() {
        assert!(!tags_unique(&[path("A"), path("A")]));
    }

    #[test]
    fn non_adjacent_duplicate_is_rejected() {
        assert!(!tags_unique(&[path("A"), path("B"), path("A")]));
    }

    #[test]
    fn whole_path_is_the_identity() {
        assert!(tags_unique(&[path("a::Tag"), path("b::Tag")]));
        assert!(!tags_unique(&[path("a::Tag"), path("a::Tag")]));
    }

    #[test]
    fn insert_is_a_noop_for_present_tags() {
        let mut set = TagSet::new();
        assert!(set.insert(&path("A")));
        assert!(set.insert(&path("B")));
        assert!(!set.insert(&path("A")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn position_returns_one_past_the_end_on_miss() {
        let mut set = TagSet::new();
        set.insert(&path("A"));
        set.insert(&path("B"));
        assert_eq!(set.position(&path("A")), 0);
        assert_eq!(set.position(&path("B")), 1);
        assert_eq!(set.position(&path("C")), set.len());
    }
}
