//! Tag classification policy.
//!
//! A test's tags are partitioned against two injected lookup tables. Tags
//! matching neither table stay unclassified; the first of those is promoted
//! to the module slot and the remainder become extra tags. The
//! first-unclassified-wins rule is deliberate: suites put the module tag
//! first, and sorting or deduplicating here would reassign modules.

use std::collections::HashSet;

/// The recognized priority and test-type labels, stored lowercased.
#[derive(Debug, Clone)]
pub struct TagTables {
    priorities: HashSet<String>,
    test_types: HashSet<String>,
}

impl TagTables {
    pub fn new<'a>(
        priorities: impl IntoIterator<Item = &'a str>,
        test_types: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            priorities: priorities.into_iter().map(str::to_lowercase).collect(),
            test_types: test_types.into_iter().map(str::to_lowercase).collect(),
        }
    }

    pub fn is_priority(&self, tag: &str) -> bool {
        self.priorities.contains(&tag.to_lowercase())
    }

    pub fn is_test_type(&self, tag: &str) -> bool {
        self.test_types.contains(&tag.to_lowercase())
    }
}

impl Default for TagTables {
    /// The tables the report was designed around.
    fn default() -> Self {
        Self::new(["alta", "media", "baixa"], ["frontend", "api"])
    }
}

/// The outcome of classifying one test's tag list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub module: String,
    pub test_type: String,
    pub priority: String,
    pub extra_tags: Vec<String>,
}

/// Partitions `tags` (in original order) against the lookup tables.
///
/// Matches keep the tag's original casing; when several tags match the same
/// table the last one wins. Afterwards the unclassified list is split
/// head/tail into module and extra tags.
pub fn classify_tags(tags: &[String], tables: &TagTables) -> Classification {
    let mut priority = String::new();
    let mut test_type = String::new();
    let mut unclassified: Vec<String> = Vec::new();

    for tag in tags {
        if tables.is_priority(tag) {
            priority = tag.clone();
        } else if tables.is_test_type(tag) {
            test_type = tag.clone();
        } else {
            unclassified.push(tag.clone());
        }
    }

    let mut rest = unclassified.into_iter();
    let module = rest.next().unwrap_or_default();

    Classification {
        module,
        test_type,
        priority,
        extra_tags: rest.collect(),
    }
}
