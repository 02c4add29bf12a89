use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CrawlError, Result};
use crate::models::CsvLayout;
use crate::pages::PageSource;
use crate::parser::LabelTrim;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_ROW_SELECTOR: &str = ".productListing tr";
const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Config {
    /// Listing URL that a 1-based page number is appended to.
    pub root_page: Option<String>,
    /// Full page URLs, crawled in order instead of counting pages.
    pub pages: Option<Vec<String>>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_row_selector")]
    pub row_selector: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub legacy_label_trim: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_row_selector() -> String {
    DEFAULT_ROW_SELECTOR.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CrawlError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| CrawlError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match (&self.root_page, &self.pages) {
            (Some(_), Some(_)) => Err(CrawlError::ConfigInvalid(
                "set either RootPage or Pages, not both".into(),
            )),
            (None, None) => Err(CrawlError::ConfigInvalid(
                "one of RootPage or Pages is required".into(),
            )),
            _ if self.page_size == 0 => {
                Err(CrawlError::ConfigInvalid("PageSize must be at least 1".into()))
            }
            _ => Ok(()),
        }
    }

    pub fn page_source(&self) -> PageSource {
        match (&self.root_page, &self.pages) {
            (_, Some(pages)) => PageSource::explicit(pages.iter().cloned()),
            (Some(root), None) => PageSource::auto_increment(root.as_str(), self.page_size),
            (None, None) => PageSource::explicit(Vec::new()),
        }
    }

    /// Autoincrement crawls write the manufacturer number, page-list crawls don't.
    pub fn csv_layout(&self) -> CsvLayout {
        if self.pages.is_some() {
            CsvLayout::WithoutManufacturerNumber
        } else {
            CsvLayout::Full
        }
    }

    pub fn label_trim(&self) -> LabelTrim {
        if self.legacy_label_trim {
            LabelTrim::CharSet
        } else {
            LabelTrim::ExactPrefix
        }
    }
}
