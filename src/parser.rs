use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::Result;
use crate::html::{attr, selector};
use crate::images::{ClassifiedImage, classify};
use crate::models::{ListingPage, ProductRecord};
use crate::price::{PriceGlyph, decode};

const MANUFACTURER_LABEL: &str = "Herstellernr.: ";
const ARTICLE_LABEL: &str = "Artikelnr.: ";
const EAN_LABEL: &str = "EAN Code: ";

/// What a `td` of a listing row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Product link, name and the description block with the numbers.
    Identifiers,
    /// The image strip spelling out the price.
    Price,
    Other,
}

impl CellRole {
    /// The listing format puts identifiers in the second cell and the price
    /// strip in the third.
    fn for_position(index: usize) -> Self {
        match index {
            1 => CellRole::Identifiers,
            2 => CellRole::Price,
            _ => CellRole::Other,
        }
    }
}

/// How a recognised label is removed from its text node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelTrim {
    /// Keep whatever follows the label.
    #[default]
    ExactPrefix,
    /// Strip every leading character that occurs anywhere in the label.
    /// Eats the start of values like `A-1234` after `Artikelnr.: `.
    CharSet,
}

impl LabelTrim {
    fn strip<'a>(self, text: &'a str, label: &str) -> &'a str {
        match self {
            LabelTrim::ExactPrefix => text
                .split_once(label)
                .map(|(_, rest)| rest)
                .unwrap_or(text)
                .trim(),
            LabelTrim::CharSet => text.trim_start_matches(|c: char| label.contains(c)),
        }
    }
}

/// Selectors and settings needed to turn listing rows into records.
pub struct RowExtractor {
    cell: Selector,
    anchor: Selector,
    description: Selector,
    price_images: Selector,
    label_trim: LabelTrim,
}

impl RowExtractor {
    pub fn new(label_trim: LabelTrim) -> Result<Self> {
        Ok(RowExtractor {
            cell: selector("td")?,
            anchor: selector("a")?,
            description: selector("div")?,
            price_images: selector("div div img")?,
            label_trim,
        })
    }

    /// Pairs each cell of `row` with its role.
    pub fn classify_cells<'a>(&self, row: ElementRef<'a>) -> Vec<(CellRole, ElementRef<'a>)> {
        row.select(&self.cell)
            .enumerate()
            .map(|(i, cell)| (CellRole::for_position(i), cell))
            .collect()
    }

    /// Best effort: a missing anchor, description or price strip leaves the
    /// matching fields empty.
    pub fn extract_row(&self, row: ElementRef<'_>) -> ProductRecord {
        let mut product = ProductRecord::default();
        let cells = self.classify_cells(row);
        if !cells.iter().any(|(role, _)| *role == CellRole::Price) {
            warn!(cells = cells.len(), "listing row is missing its identifier or price cell");
        }
        for (role, cell) in cells {
            match role {
                CellRole::Identifiers => self.fill_identifiers(cell, &mut product),
                CellRole::Price => {
                    let decoded = decode(&self.price_glyphs(cell));
                    product.price = decoded.price;
                    product.currency = decoded.currency;
                }
                CellRole::Other => {}
            }
        }
        product
    }

    fn fill_identifiers(&self, cell: ElementRef<'_>, product: &mut ProductRecord) {
        if let Some(anchor) = cell.select(&self.anchor).next() {
            product.name = anchor.text().collect::<String>().trim().to_string();
            product.link = attr(anchor, "href").to_string();
        } else {
            debug!("row without product link");
        }

        let Some(description) = cell.select(&self.description).next() else {
            debug!("row without description block");
            return;
        };
        for node in description.children() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let value: &str = text;
            if value.contains(MANUFACTURER_LABEL) {
                product.manufacturer_number = self.label_trim.strip(value, MANUFACTURER_LABEL).to_string();
            }
            if value.contains(ARTICLE_LABEL) {
                product.number = self.label_trim.strip(value, ARTICLE_LABEL).to_string();
            }
            if value.contains(EAN_LABEL) {
                product.ean = self.label_trim.strip(value, EAN_LABEL).to_string();
            }
        }
    }

    fn price_glyphs(&self, cell: ElementRef<'_>) -> Vec<PriceGlyph> {
        cell.select(&self.price_images)
            .map(|img| {
                let src = attr(img, "src");
                let image = classify(src);
                if image == ClassifiedImage::Unknown {
                    debug!(src, "skipping unrecognised price image");
                }
                PriceGlyph {
                    image,
                    alt: attr(img, "alt").to_string(),
                }
            })
            .collect()
    }
}

/// Extracts every row matched by `rows` in document order.
pub fn parse_listing(html: &str, rows: &Selector, extractor: &RowExtractor) -> ListingPage {
    let doc = Html::parse_document(html);
    let records = doc
        .select(rows)
        .map(|row| extractor.extract_row(row))
        .collect();
    ListingPage { records }
}
