//! Stylesheet colour extraction.
//!
//! Finds class rules inside `<style>` blocks and records the hex colour literals they
//! declare, in source order.

/// Document traversal and colour capture.
mod extract;
/// CSS tokenizer.
pub mod tokenize;

pub use extract::{extract_color_pairs, extract_color_pairs_from_str, extract_from_css};

/// What: Ordered mapping from class selector to the raw colour literals it declares.
///
/// Inputs: Filled by [`extract_color_pairs`] / [`extract_from_css`].
///
/// Output: Iterates in first-declaration order.
///
/// Details:
/// - Re-opening a selector clears its list but keeps its original position.
/// - Values are raw substrings; validation happens at contrast time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    /// Selector/colour-list pairs in insertion order.
    entries: Vec<(String, Vec<String>)>,
}

impl StyleMap {
    /// What: Start (or restart) the colour list for `selector`.
    ///
    /// Output:
    /// - Mutable reference to the now-empty list.
    pub fn open(&mut self, selector: &str) -> &mut Vec<String> {
        let found = self.entries.iter().position(|(k, _)| k == selector);
        let idx = if let Some(i) = found {
            self.entries[i].1.clear();
            i
        } else {
            self.entries.push((selector.to_string(), Vec::new()));
            self.entries.len() - 1
        };
        &mut self.entries[idx].1
    }

    /// Colours recorded for `selector`, if it was seen.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == selector)
            .map(|(_, v)| v.as_slice())
    }

    /// Entries in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of selectors recorded.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no selector was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (selector, colors) in iter {
            let selector = selector.into();
            *map.open(&selector) = colors;
        }
        map
    }
}
