use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{CrawlError, Result};
use crate::models::{CsvLayout, ProductRecord};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// `<dir>/products<timestamp>.csv`, so each run gets its own file.
pub fn output_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("products{}.csv", now.format(TIMESTAMP_FORMAT)))
}

/// Writes `products` under `dir` in the columns of `layout` and returns the
/// file path. The header row is always written, so an empty crawl still
/// produces a valid file.
pub fn save_to_csv(products: &[ProductRecord], layout: CsvLayout, dir: &Path) -> Result<PathBuf> {
    let path = output_path(dir, Local::now());
    let create_error = |source: std::io::Error| CrawlError::FileCreate {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(dir).map_err(create_error)?;
    let file = File::create(&path).map_err(create_error)?;

    write_csv(products, layout, file).map_err(|source| CrawlError::FileWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn write_csv<W: std::io::Write>(
    products: &[ProductRecord],
    layout: CsvLayout,
    out: W,
) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(layout.header())?;
    for product in products {
        writer.write_record(product.csv_row(layout))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn product(name: &str, price: &str) -> ProductRecord {
        ProductRecord {
            name: name.into(),
            link: format!("/p/{name}"),
            number: "1".into(),
            ean: "4006381333931".into(),
            manufacturer_number: "HX, 7".into(),
            price: price.into(),
            currency: "EUR".into(),
        }
    }

    #[test]
    fn file_name_embeds_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            output_path(Path::new("output"), now),
            PathBuf::from("output/products2024-03-09_07:05:01.csv")
        );
    }

    #[test]
    fn writes_header_then_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let products = [product("a", "12.5"), product("b", "")];
        let path = save_to_csv(&products, CsvLayout::Full, dir.path()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "name,link,number,ean,manufacturerNumber,price,currency",
                "a,/p/a,1,4006381333931,\"HX, 7\",12.5,EUR",
                "b,/p/b,1,4006381333931,\"HX, 7\",,EUR",
            ]
        );
    }

    #[test]
    fn page_list_layout_drops_manufacturer_number() {
        let dir = tempfile::tempdir().unwrap();
        let products = [product("a", "12.5")];
        let path = save_to_csv(&products, CsvLayout::WithoutManufacturerNumber, dir.path()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "name,link,number,ean,price,currency",
                "a,/p/a,1,4006381333931,12.5,EUR",
            ]
        );
    }

    #[test]
    fn empty_run_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let path = save_to_csv(&[], CsvLayout::Full, &out).unwrap();

        assert!(path.starts_with(&out));
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "name,link,number,ean,manufacturerNumber,price,currency\n");
    }

    #[test]
    fn unwritable_destination_is_a_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = save_to_csv(&[], CsvLayout::Full, &blocker).unwrap_err();
        assert!(matches!(err, CrawlError::FileCreate { .. }));
    }
}
