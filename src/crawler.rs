use scraper::Selector;
use tracing::{info, warn};

use crate::error::Result;
use crate::fetcher::Fetch;
use crate::models::ProductRecord;
use crate::pages::PageSource;
use crate::parser::{RowExtractor, parse_listing};

/// Walks every page `source` yields, one at a time, and returns the records in
/// page-then-row order. The first fetch failure aborts the crawl.
pub fn crawl<F: Fetch>(
    fetcher: &F,
    mut source: PageSource,
    rows: &Selector,
    extractor: &RowExtractor,
) -> Result<Vec<ProductRecord>> {
    let mut products = Vec::new();

    while let Some(url) = source.next_url() {
        let html = fetcher.fetch_html(&url)?;
        let page = parse_listing(&html, rows, extractor);
        let row_count = page.row_count();
        products.extend(page.records);

        info!(%url, rows = row_count, total = products.len(), "fetched and parsed page");
        if row_count == 0 {
            warn!(%url, "no listing rows found on page");
        }

        if !source.record_rows(row_count) {
            break;
        }
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::CrawlError;
    use crate::html::selector;
    use crate::parser::LabelTrim;

    /// Serves canned pages and remembers what was asked for.
    #[derive(Default)]
    struct FakeFetcher {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn with_page(mut self, url: &str, rows: usize, first_id: usize) -> Self {
            self.pages.insert(url.to_string(), listing(rows, first_id));
            self
        }
    }

    impl Fetch for FakeFetcher {
        fn fetch_html(&self, url: &str) -> Result<String> {
            self.requested.borrow_mut().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| CrawlError::Parse(format!("no fixture for {url}")))
        }
    }

    fn listing(rows: usize, first_id: usize) -> String {
        let body: String = (first_id..first_id + rows)
            .map(|id| {
                format!(
                    r#"<tr><td></td><td><a href="/p/{id}">Item {id}</a><div>Artikelnr.: {id}</div></td>
                    <td><div><div><img src="images/price/{d}.gif"><img src="images/price/dollar.gif" alt="USD"></div></div></td></tr>"#,
                    d = id % 10
                )
            })
            .collect();
        format!(r#"<html><body><table class="productListing">{body}</table></body></html>"#)
    }

    fn run(fetcher: &FakeFetcher, source: PageSource) -> Result<Vec<ProductRecord>> {
        let rows = selector(".productListing tr").unwrap();
        let extractor = RowExtractor::new(LabelTrim::ExactPrefix).unwrap();
        crawl(fetcher, source, &rows, &extractor)
    }

    #[test]
    fn full_pages_continue_until_short_page() {
        let fetcher = FakeFetcher::default()
            .with_page("list?p=1", 10, 0)
            .with_page("list?p=2", 10, 10)
            .with_page("list?p=3", 4, 20);

        let products = run(&fetcher, PageSource::auto_increment("list?p=", 10)).unwrap();

        assert_eq!(products.len(), 24);
        assert_eq!(*fetcher.requested.borrow(), ["list?p=1", "list?p=2", "list?p=3"]);
        let numbers: Vec<usize> = products.iter().map(|p| p.number.parse().unwrap()).collect();
        assert_eq!(numbers, (0..24).collect::<Vec<_>>());
        assert_eq!(products[13].price, "3");
        assert_eq!(products[13].currency, "USD");
    }

    #[test]
    fn short_first_page_stops_immediately() {
        let fetcher = FakeFetcher::default().with_page("list?p=1", 9, 0);
        let products = run(&fetcher, PageSource::auto_increment("list?p=", 10)).unwrap();
        assert_eq!(products.len(), 9);
        assert_eq!(fetcher.requested.borrow().len(), 1);
    }

    #[test]
    fn explicit_pages_are_all_fetched() {
        let fetcher = FakeFetcher::default()
            .with_page("a", 2, 0)
            .with_page("b", 0, 0)
            .with_page("c", 1, 5);
        let source = PageSource::explicit(["a", "b", "c"].map(String::from));

        let products = run(&fetcher, source).unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(*fetcher.requested.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn empty_explicit_list_yields_nothing() {
        let fetcher = FakeFetcher::default();
        let products = run(&fetcher, PageSource::explicit(Vec::new())).unwrap();
        assert!(products.is_empty());
        assert!(fetcher.requested.borrow().is_empty());
    }

    #[test]
    fn fetch_failure_aborts_the_crawl() {
        let fetcher = FakeFetcher::default().with_page("list?p=1", 10, 0);
        let err = run(&fetcher, PageSource::auto_increment("list?p=", 10)).unwrap_err();
        assert!(err.to_string().contains("list?p=2"));
        assert_eq!(fetcher.requested.borrow().len(), 2);
    }
}
