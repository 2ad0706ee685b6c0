use scraper::Html;

/// Parsed directory-listing page (the index of date folders, or the files in
/// one mode subfolder). Built fresh from each fetched body.
pub struct Listing {
    document: Html,
}

impl Listing {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    /// Lazy `(tag-name, text)` pairs in document order: every non-blank text
    /// node together with the name of the element that directly holds it.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.document.root_element().descendants().filter_map(|node| {
            let text = node.value().as_text()?;
            let tag = node.parent()?.value().as_element()?.name();
            let text: &str = text;
            let text = text.trim();
            (!text.is_empty()).then_some((tag, text))
        })
    }

    /// Anchor texts in document order
    pub fn anchor_texts(&self) -> Vec<String> {
        self.tokens()
            .filter(|(tag, _)| *tag == "a")
            .map(|(_, text)| text.to_string())
            .collect()
    }

    /// Folders are listed oldest first, so the newest one is the last anchor.
    pub fn latest_entry(&self) -> Option<String> {
        self.anchor_texts().pop()
    }

    /// Anchors whose text contains `key`. Plain substring filter: several
    /// ratings of the same format all qualify.
    pub fn entries_containing(&self, key: &str) -> Vec<String> {
        self.anchor_texts()
            .into_iter()
            .filter(|text| text.contains(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"
        <html>
            <head><title>Index of /stats/</title></head>
            <body>
                <h1>Index of /stats/</h1><hr><pre><a href="../">../</a>
<a href="2024-07/">2024-07/</a>                                           01-Aug-2024 18:21       -
<a href="2024-08/">2024-08/</a>                                           02-Sep-2024 17:02       -
<a href="2024-09/">2024-09/</a>                                           01-Oct-2024 19:44       -
</pre><hr></body>
        </html>
    "#;

    const MOVESET: &str = r#"
        <html>
            <body>
                <pre><a href="../">../</a>
<a href="gen8ou-0.txt">gen8ou-0.txt</a>              01-Oct-2024 19:44    4M
<a href="gen8ou-1500.txt">gen8ou-1500.txt</a>        01-Oct-2024 19:44    4M
<a href="gen8uu-0.txt">gen8uu-0.txt</a>              01-Oct-2024 19:44    2M
<a href="gen8ou-1695.txt">gen8ou-1695.txt</a>        01-Oct-2024 19:44    3M
<a href="gen8ou-1825.txt">gen8ou-1825.txt</a>        01-Oct-2024 19:44    1M
</pre>
            </body>
        </html>
    "#;

    #[test]
    fn test_tokens_pair_text_with_enclosing_tag() {
        let listing = Listing::parse(INDEX);
        let tokens: Vec<_> = listing.tokens().collect();

        assert_eq!(tokens[0], ("title", "Index of /stats/"));
        assert_eq!(tokens[1], ("h1", "Index of /stats/"));
        assert!(tokens.contains(&("a", "2024-08/")));
        assert!(tokens.iter().any(|(tag, text)| *tag == "pre" && text.contains("01-Aug-2024")));
    }

    #[test]
    fn test_latest_entry_is_last_anchor() {
        let listing = Listing::parse(INDEX);
        assert_eq!(listing.latest_entry(), Some("2024-09/".to_string()));
    }

    #[test]
    fn test_no_anchors() {
        let listing = Listing::parse("<html><body><p>Nothing here</p></body></html>");
        assert!(listing.anchor_texts().is_empty());
        assert_eq!(listing.latest_entry(), None);
    }

    #[test]
    fn test_entries_containing_keeps_document_order() {
        let listing = Listing::parse(MOVESET);
        let files = listing.entries_containing("gen8ou");

        assert_eq!(
            files,
            vec!["gen8ou-0.txt", "gen8ou-1500.txt", "gen8ou-1695.txt", "gen8ou-1825.txt"]
        );
    }
}
