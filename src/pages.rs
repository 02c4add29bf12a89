use std::collections::VecDeque;

/// Where the next listing page comes from.
#[derive(Debug)]
pub enum PageSource {
    /// `root` followed by a 1-based page number, until a page comes back
    /// with anything other than `page_size` rows.
    AutoIncrement {
        root: String,
        page_size: usize,
        next_page: usize,
        done: bool,
    },
    /// A fixed list of page URLs, consumed front to back.
    Explicit(VecDeque<String>),
}

impl PageSource {
    pub fn auto_increment(root: impl Into<String>, page_size: usize) -> Self {
        PageSource::AutoIncrement {
            root: root.into(),
            page_size,
            next_page: 1,
            done: false,
        }
    }

    pub fn explicit(pages: impl IntoIterator<Item = String>) -> Self {
        PageSource::Explicit(pages.into_iter().collect())
    }

    /// The next page to fetch, or `None` once the listing is consumed.
    pub fn next_url(&mut self) -> Option<String> {
        match self {
            PageSource::AutoIncrement {
                root,
                next_page,
                done,
                ..
            } => (!*done).then(|| format!("{root}{next_page}")),
            PageSource::Explicit(pages) => pages.pop_front(),
        }
    }

    /// Feeds back how many rows the page just returned by [`next_url`](Self::next_url) had.
    /// Returns `false` when that page was the last one.
    pub fn record_rows(&mut self, rows: usize) -> bool {
        match self {
            PageSource::AutoIncrement {
                page_size,
                next_page,
                done,
                ..
            } => {
                if rows == *page_size {
                    *next_page += 1;
                } else {
                    *done = true;
                }
                !*done
            }
            PageSource::Explicit(pages) => !pages.is_empty(),
        }
    }
}
