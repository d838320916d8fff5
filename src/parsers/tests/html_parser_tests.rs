use crate::parsers::html;
use crate::results::HeadingLevel::*;
use crate::results::HeadingNode;

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>  Example Page  </title>
  <meta name="description" content="  A page about headings. ">
  <style>h1 { color: red; }</style>
</head>
<body>
  <h1>Welcome</h1>
  <p>Some intro text.</p>
  <h2>Getting <span>started</span></h2>
  <h3>Install</h3>
  <h2>Usage</h2>
  <script>var seo = "hidden";</script>
</body>
</html>"#;

    #[test]
    fn test_title_and_description() {
        let page = html::parse(PAGE);
        assert_eq!(page.title.as_deref(), Some("Example Page"));
        assert_eq!(
            page.meta_description.as_deref(),
            Some("A page about headings.")
        );
    }

    #[test]
    fn test_headings_in_document_order() {
        let page = html::parse(PAGE);
        assert_eq!(
            page.headings,
            vec![
                HeadingNode::new(H1, "Welcome"),
                HeadingNode::new(H2, "Getting started"),
                HeadingNode::new(H3, "Install"),
                HeadingNode::new(H2, "Usage"),
            ]
        );
    }

    #[test]
    fn test_order_is_not_grouped_by_level() {
        let page = html::parse("<h2>A</h2><h1>B</h1><h6>C</h6><h2>D</h2>");
        let levels: Vec<_> = page.headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![H2, H1, H6, H2]);
    }

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let page = html::parse(PAGE);
        assert!(page.visible_text.contains("Some intro text."));
        assert!(page.visible_text.contains("Getting started"));
        assert!(!page.visible_text.contains("hidden"));
        assert!(!page.visible_text.contains("color"));
        assert!(!page.visible_text.contains("  "));
    }

    #[test]
    fn test_missing_title_and_description() {
        let page = html::parse("<html><body><p>No head here</p></body></html>");
        assert_eq!(page.title, None);
        assert_eq!(page.meta_description, None);
        assert!(page.headings.is_empty());
    }

    #[test]
    fn test_empty_title_is_kept() {
        let page = html::parse("<html><head><title>   </title></head></html>");
        assert_eq!(page.title.as_deref(), Some(""));
    }

    #[test]
    fn test_description_name_is_case_sensitive() {
        let page = html::parse(r#"<meta name="Description" content="Wrong case">"#);
        assert_eq!(page.meta_description, None);
    }

    #[test]
    fn test_first_description_without_content_wins() {
        let html = r#"<head>
            <meta name="description">
            <meta name="description" content="Second">
        </head>"#;
        let page = html::parse(html);
        assert_eq!(page.meta_description, None);
    }

    #[test]
    fn test_malformed_markup() {
        let page = html::parse("<h1>Open <h2>Unclosed</div></p>");
        assert_eq!(
            page.headings,
            vec![HeadingNode::new(H1, "Open"), HeadingNode::new(H2, "Unclosed")]
        );
    }

    #[test]
    fn test_not_html_at_all() {
        let page = html::parse("just some plain text, no tags");
        assert_eq!(page.title, None);
        assert!(page.headings.is_empty());
        assert_eq!(page.visible_text, "just some plain text, no tags");
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let page = html::parse("<p>Web<em>site</em> and <b>S</b>EO</p>");
        assert_eq!(page.visible_text, "Website and SEO");
    }

    #[test]
    fn test_block_elements_separate_words() {
        let page = html::parse("<div><p>seo</p><p>seo</p></div><ul><li>one</li><li>two</li></ul>");
        assert_eq!(page.visible_text, "seo seo one two");
    }
}
