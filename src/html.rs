use scraper::{ElementRef, Selector};

use crate::error::{CrawlError, Result};

/// Value of attribute `key` on `element`, or an empty string when absent.
pub fn attr<'a>(element: ElementRef<'a>, key: &str) -> &'a str {
    element.value().attr(key).unwrap_or_default()
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CrawlError::Parse(format!("invalid selector `{css}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn attr_returns_value_or_empty() {
        let doc = Html::parse_fragment(r#"<img src="images/price/1.gif" alt="1">"#);
        let img = doc.select(&selector("img").unwrap()).next().unwrap();

        assert_eq!(attr(img, "src"), "images/price/1.gif");
        assert_eq!(attr(img, "alt"), "1");
        assert_eq!(attr(img, "title"), "");
    }

    #[test]
    fn bad_selector_is_a_parse_error() {
        assert!(matches!(selector("td[["), Err(CrawlError::Parse(_))));
    }
}
