use crate::results::HeadingNode;

/// Returned by [`render_tree`] when a page has no headings
pub const NO_HEADINGS: &str = "No headings found.";

const INDENT: &str = "  ";

/// Renders headings as an indented outline, one line per heading.
///
/// Depth is the heading's level minus the smallest level present, so a page
/// whose top heading is an H2 starts at the left margin. Document order is
/// kept as-is; no parent/child nesting is inferred.
pub fn render_tree(nodes: &[HeadingNode]) -> String {
    let Some(min_level) = nodes.iter().map(|n| n.level.number()).min() else {
        return NO_HEADINGS.to_string();
    };

    let mut tree = String::new();
    for node in nodes {
        let depth = node.level.number() - min_level;
        tree.push_str(&INDENT.repeat(depth));
        tree.push_str("- ");
        tree.push_str(node.level.tag());
        tree.push_str(": ");
        tree.push_str(node.text.trim());
        tree.push('\n');
    }
    tree
}
