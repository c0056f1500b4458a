use scraper::{Html, Selector};

use super::{filename_stem, non_empty_stem, Extracted, Extractor};
use crate::error::DownloadError;

/// `https://aclanthology.org/<id>` pages: title in `#title`, PDF at `<id>.pdf`.
pub struct AclAnthology;

impl Extractor for AclAnthology {
    fn name(&self) -> &'static str { "acl_anthology" }

    fn extract(&self, url: &str, html: &str) -> Result<Extracted, DownloadError> {
        let doc = Html::parse_document(html);
        let text = title_text(&doc).ok_or_else(|| DownloadError::extraction(url, "#title element"))?;
        let title = non_empty_stem(url, filename_stem(text.trim()))?;
        Ok(Extracted { pdf_url: format!("{}.pdf", url), title })
    }
}

fn title_text(doc: &Html) -> Option<String> {
    let sel = Selector::parse("#title").ok()?;
    let node = doc.select(&sel).next()?;
    Some(node.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://aclanthology.org/2021.acl-long.1";

    #[test]
    fn title_and_pdf_url() {
        let html = r#"
        <html><body>
          <section id="main">
            <h2 id="title"><a href="https://aclanthology.org/2021.acl-long.1.pdf">Example Paper: A Study</a></h2>
          </section>
        </body></html>
        "#;
        let got = AclAnthology.extract(URL, html).unwrap();
        assert_eq!(got.title, "Example_Paper_A_Study");
        assert_eq!(got.pdf_url, "https://aclanthology.org/2021.acl-long.1.pdf");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let html = "<html><body><h2 id=\"title\">\n   Deep Nets \n</h2></body></html>";
        let got = AclAnthology.extract(URL, html).unwrap();
        assert_eq!(got.title, "Deep_Nets");
    }

    #[test]
    fn missing_title_is_extraction_error() {
        let html = r#"<html><head><title>Not the element</title></head><body><h2>nope</h2></body></html>"#;
        let err = AclAnthology.extract(URL, html).unwrap_err();
        assert!(matches!(err, DownloadError::Extraction { .. }));
    }

    #[test]
    fn blank_title_is_extraction_error() {
        let html = r#"<html><body><h2 id="title">  </h2></body></html>"#;
        assert!(AclAnthology.extract(URL, html).is_err());
    }
}
