use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};
use tracing::{debug, trace};

use super::StyleMap;
use super::tokenize::{Declaration, parse_stylesheet};

/// What: Decide whether a declaration can carry a text or background colour.
///
/// Details:
/// - Matches `background` and any property ending in `color` (`color`, `background-color`,
///   `border-color`, ...).
fn is_color_property(property: &str) -> bool {
    property == "background" || property.ends_with("color")
}

/// What: Pull the raw hex substring out of a colour declaration.
///
/// Output:
/// - Text from the first `#` to the end of the value; `None` when there is no `#`.
fn hex_substring(decl: &Declaration) -> Option<&str> {
    if !is_color_property(&decl.property) {
        return None;
    }
    decl.value.find('#').map(|i| decl.value[i..].trim_end())
}

/// What: Record class rules and their colour literals from stylesheet text.
///
/// Inputs:
/// - `css`: Stylesheet text.
/// - `map`: Accumulator shared across every style block of a document.
///
/// Output:
/// - None (mutates `map`).
///
/// Details:
/// - Only rules whose prelude starts with `.` are recorded; the key is the text after the
///   dot, trimmed. Repeating a selector resets its list.
pub fn extract_from_css(css: &str, map: &mut StyleMap) {
    for rule in parse_stylesheet(css) {
        let Some(selector) = rule.prelude.strip_prefix('.') else {
            trace!(prelude = %rule.prelude, "skipping non-class rule");
            continue;
        };
        let colors = map.open(selector.trim());
        colors.extend(
            rule.declarations
                .iter()
                .filter_map(hex_substring)
                .map(ToString::to_string),
        );
        debug!(selector = selector.trim(), colors = ?colors, "captured class rule");
    }
}

/// What: Collect per-class colour lists from every `<style>` block of a parsed document.
///
/// Inputs:
/// - `document`: Parsed HTML.
///
/// Output:
/// - Selector map in first-declaration order.
///
/// Details:
/// - Walks the node tree in document order. Inline `style=`/`class=` attributes on other
///   elements are noted at trace level only and contribute nothing.
#[must_use]
pub fn extract_color_pairs(document: &Html) -> StyleMap {
    let mut map = StyleMap::default();
    for node in document.tree.root().descendants() {
        visit(node, &mut map);
    }
    map
}

/// What: Parse HTML text and extract its class colour lists.
#[must_use]
pub fn extract_color_pairs_from_str(html: &str) -> StyleMap {
    extract_color_pairs(&Html::parse_document(html))
}

/// Handle one node of the document walk.
fn visit(node: NodeRef<'_, Node>, map: &mut StyleMap) {
    let Node::Element(el) = node.value() else {
        return;
    };
    if el.name() == "style" {
        if let Some(element) = ElementRef::wrap(node) {
            let css: String = element.text().collect();
            extract_from_css(&css, map);
        }
        return;
    }
    for attr in ["style", "class"] {
        if let Some(value) = el.attr(attr) {
            trace!(element = el.name(), attr, value, "inline attribute ignored");
        }
    }
}
