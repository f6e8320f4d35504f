use indexmap::IndexMap;

use crate::cors_header::CorsHeader;

/// The final set of CORS headers to stamp onto a response.
///
/// Entries keep the order they were resolved in, which matches
/// [`CorsHeader::ALL`]. Headers without a value are simply absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedHeaders {
    entries: IndexMap<CorsHeader, String>,
}

impl ResolvedHeaders {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserting an existing key overwrites its value in place without
    /// disturbing the entry's position.
    pub(crate) fn insert(&mut self, name: CorsHeader, value: String) {
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: CorsHeader) -> Option<&str> {
        self.entries.get(&name).map(String::as_str)
    }

    pub fn contains(&self, name: CorsHeader) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> ResolvedHeadersIter<'_> {
        ResolvedHeadersIter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over resolved `(header, value)` pairs in emission order.
pub struct ResolvedHeadersIter<'a> {
    inner: indexmap::map::Iter<'a, CorsHeader, String>,
}

impl<'a> Iterator for ResolvedHeadersIter<'a> {
    type Item = (CorsHeader, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (*name, value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ResolvedHeadersIter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a> IntoIterator for &'a ResolvedHeaders {
    type Item = (CorsHeader, &'a str);
    type IntoIter = ResolvedHeadersIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ResolvedHeaders {
    type Item = (CorsHeader, String);
    type IntoIter = indexmap::map::IntoIter<CorsHeader, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
