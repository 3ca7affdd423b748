use std::collections::HashMap;

use super::link::LinkId;
use crate::shared::logging::{log_link_registered, log_link_shadowed};

/// Identifier -> element mapping for one highlight run.
///
/// Insertion order is kept so runs touch elements in document order; a
/// repeated identifier replaces the element but keeps its first position.
pub struct LinkRegistry<E> {
    index: HashMap<LinkId, usize>,
    entries: Vec<(LinkId, E)>,
}

impl<E> Default for LinkRegistry<E> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<E> LinkRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(href, element)` pairs in document order
    pub fn from_links<I>(links: I) -> Self
    where
        I: IntoIterator<Item = (String, E)>,
    {
        let mut registry = Self::new();
        for (href, element) in links {
            registry.insert(&href, element);
        }
        registry
    }

    /// Register an element under the normalized identifier of `href`.
    /// Returns the element it displaced, if any.
    pub fn insert(&mut self, href: &str, element: E) -> Option<E> {
        let id = LinkId::from_href(href);
        log_link_registered(id.as_str(), href);

        match self.index.get(&id) {
            Some(&slot) => {
                log_link_shadowed(id.as_str());
                Some(std::mem::replace(&mut self.entries[slot].1, element))
            }
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, element));
                None
            }
        }
    }

    pub fn get(&self, id: &LinkId) -> Option<&E> {
        self.index.get(id).map(|&slot| &self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LinkId, &E)> {
        self.entries.iter().map(|(id, element)| (id, element))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_by_normalized_id() {
        let registry = LinkRegistry::from_links(vec![
            ("https://example.com/Home".to_string(), 1),
            ("https://example.com/About".to_string(), 2),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&LinkId::from_href("home")), Some(&1));
        assert_eq!(registry.get(&LinkId::from_href("about")), Some(&2));
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = LinkRegistry::new();
        assert_eq!(registry.insert("https://example.com/Home", "first"), None);
        assert_eq!(registry.insert("https://example.com/home ", "second"), Some("first"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&LinkId::from_href("home")), Some(&"second"));
    }

    #[test]
    fn test_iteration_keeps_first_position() {
        let registry = LinkRegistry::from_links(vec![
            ("/a".to_string(), 1),
            ("/b".to_string(), 2),
            ("/A".to_string(), 3),
        ]);
        let order: Vec<(&str, i32)> = registry.iter().map(|(id, e)| (id.as_str(), *e)).collect();
        assert_eq!(order, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_empty() {
        let registry: LinkRegistry<()> = LinkRegistry::from_links(Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
