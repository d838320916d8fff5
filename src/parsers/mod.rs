pub mod html;
pub mod keywords;
pub mod text;

#[cfg(test)]
mod tests;

use crate::results::HeadingNode;

/// What the HTML parser pulls out of a single document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Trimmed text of the first `<title>`, if the document has one
    pub title: Option<String>,

    /// Trimmed `content` of the first `<meta name="description">`
    pub meta_description: Option<String>,

    /// Every h1..h6 element in document order
    pub headings: Vec<HeadingNode>,

    /// Text a reader would see, whitespace collapsed
    pub visible_text: String,
}

impl ParsedPage {
    pub fn new(
        title: Option<String>,
        meta_description: Option<String>,
        headings: Vec<HeadingNode>,
        visible_text: String,
    ) -> Self {
        Self {
            title,
            meta_description,
            headings,
            visible_text,
        }
    }
}
