use scraper::{Html, Selector};

use super::{filename_stem, non_empty_stem, Extracted, Extractor};
use crate::error::DownloadError;

/// Length of the "Title:" descriptor arXiv prepends inside the heading.
const LABEL_CHARS: usize = 6;

/// `https://arxiv.org/abs/<id>` pages: title in `h1.title.mathjax`, PDF under `/pdf/<id>`.
pub struct Arxiv;

impl Extractor for Arxiv {
    fn name(&self) -> &'static str { "arxiv" }

    fn extract(&self, url: &str, html: &str) -> Result<Extracted, DownloadError> {
        let doc = Html::parse_document(html);
        let text = heading_text(&doc).ok_or_else(|| DownloadError::extraction(url, "h1.title.mathjax element"))?;
        let title = non_empty_stem(url, filename_stem(strip_label(&text)))?;
        Ok(Extracted { pdf_url: pdf_url(url), title })
    }
}

fn heading_text(doc: &Html) -> Option<String> {
    let sel = Selector::parse("h1.title.mathjax").ok()?;
    let node = doc.select(&sel).next()?;
    Some(node.text().collect::<String>())
}

fn strip_label(text: &str) -> &str {
    let rest = match text.char_indices().nth(LABEL_CHARS) {
        Some((idx, _)) => &text[idx..],
        None => "",
    };
    rest.trim()
}

// literal first-match substitution, not a path rewrite
fn pdf_url(url: &str) -> String {
    url.replacen("abs", "pdf", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://arxiv.org/abs/1234.5678";

    #[test]
    fn label_stripped_from_title() {
        let html = r#"
        <html><body>
          <h1 class="title mathjax">Title: A Great Paper</h1>
        </body></html>
        "#;
        let got = Arxiv.extract(URL, html).unwrap();
        assert_eq!(got.title, "A_Great_Paper");
        assert_eq!(got.pdf_url, "https://arxiv.org/pdf/1234.5678");
    }

    #[test]
    fn descriptor_span_layout() {
        let html = r#"<h1 class="title mathjax"><span class="descriptor">Title:</span>Attention Is All You Need</h1>"#;
        let got = Arxiv.extract(URL, html).unwrap();
        assert_eq!(got.title, "Attention_Is_All_You_Need");
    }

    #[test]
    fn colons_after_label_removed() {
        let html = r#"<h1 class="title mathjax">Title:BERT: Pre-training of Deep Bidirectional Transformers</h1>"#;
        let got = Arxiv.extract(URL, html).unwrap();
        assert_eq!(got.title, "BERT_Pre-training_of_Deep_Bidirectional_Transformers");
    }

    #[test]
    fn requires_both_classes() {
        let html = r#"<h1 class="title">Title: Only One Class</h1>"#;
        assert!(matches!(Arxiv.extract(URL, html), Err(DownloadError::Extraction { .. })));
    }

    #[test]
    fn short_heading_is_extraction_error() {
        let html = r#"<h1 class="title mathjax">Title</h1>"#;
        assert!(Arxiv.extract(URL, html).is_err());
    }

    #[test]
    fn label_counted_in_chars() {
        assert_eq!(strip_label("Titré:Ünïcode"), "Ünïcode");
    }

    #[test]
    fn pdf_url_replaces_first_abs_only() {
        assert_eq!(pdf_url("https://arxiv.org/abs/2101.00001v2"), "https://arxiv.org/pdf/2101.00001v2");
        assert_eq!(pdf_url("https://arxiv.org/abs/abs.1"), "https://arxiv.org/pdf/abs.1");
    }
}
