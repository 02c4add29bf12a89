/// Column set of the output file. Crawls over an explicit page list carry no
/// manufacturer number column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvLayout {
    Full,
    WithoutManufacturerNumber,
}

impl CsvLayout {
    pub fn header(self) -> Vec<&'static str> {
        let mut header = vec!["name", "link", "number", "ean"];
        if self == CsvLayout::Full {
            header.push("manufacturerNumber");
        }
        header.extend(["price", "currency"]);
        header
    }
}

/// One listing row. Fields that could not be located stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: String,
    pub link: String,
    pub number: String,
    pub ean: String,
    pub manufacturer_number: String,
    pub price: String,
    pub currency: String,
}

impl ProductRecord {
    /// Field values in the column order of `layout`.
    pub fn csv_row(&self, layout: CsvLayout) -> Vec<&str> {
        let mut row = vec![
            self.name.as_str(),
            self.link.as_str(),
            self.number.as_str(),
            self.ean.as_str(),
        ];
        if layout == CsvLayout::Full {
            row.push(&self.manufacturer_number);
        }
        row.extend([self.price.as_str(), self.currency.as_str()]);
        row
    }
}

/// Rows extracted from one fetched listing page.
#[derive(Debug, Default)]
pub struct ListingPage {
    pub records: Vec<ProductRecord>,
}

impl ListingPage {
    /// Number of rows matched by the listing selector, malformed rows included.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}
