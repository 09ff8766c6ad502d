//! The bookmarked URL collection.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::utils::url_normalizer::extract_domain;

/// The list of bookmarked links, newest first.
///
/// Serialized as `{"urls": [...]}`. Entries are unique; uniqueness is
/// enforced by [`UrlList::insert_front`] with a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlList {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Statistics derived from a [`UrlList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlStats {
    pub total_count: usize,
    /// Unique domains, lowercased with any `www.` prefix stripped, sorted.
    pub domains: Vec<String>,
}

impl UrlStats {
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}

impl UrlList {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|existing| existing == url)
    }

    /// Prepends `url` unless it is already present.
    ///
    /// Returns `false` and leaves the list untouched on a duplicate.
    pub fn insert_front(&mut self, url: String) -> bool {
        if self.contains(&url) {
            return false;
        }
        self.urls.insert(0, url);
        true
    }

    /// Removes every entry found in `selected`, preserving the order of the rest.
    ///
    /// Unknown entries are ignored. Returns the number of entries removed.
    pub fn remove_all<S: AsRef<str>>(&mut self, selected: &[S]) -> usize {
        let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();
        let before = self.urls.len();
        self.urls.retain(|url| !selected.contains(url.as_str()));
        before - self.urls.len()
    }

    pub fn stats(&self) -> UrlStats {
        let domains: BTreeSet<String> = self
            .urls
            .iter()
            .filter_map(|url| extract_domain(url))
            .collect();

        UrlStats {
            total_count: self.urls.len(),
            domains: domains.into_iter().collect(),
        }
    }
}
