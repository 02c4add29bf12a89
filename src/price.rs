use crate::images::ClassifiedImage;

/// A classified image from a price strip together with its `alt` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceGlyph {
    pub image: ClassifiedImage,
    pub alt: String,
}

impl From<ClassifiedImage> for PriceGlyph {
    fn from(image: ClassifiedImage) -> Self {
        PriceGlyph {
            image,
            alt: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedPrice {
    pub price: String,
    pub currency: String,
}

/// Rebuilds the price from a strip of images, left to right.
///
/// Digits and separators are appended in the order they appear; nothing is
/// reordered, deduplicated or validated. The currency is the `alt` text of the
/// last currency image (falling back to its symbol). Unknown images are skipped.
pub fn decode<'a, I>(glyphs: I) -> DecodedPrice
where
    I: IntoIterator<Item = &'a PriceGlyph>,
{
    let mut decoded = DecodedPrice::default();
    for glyph in glyphs {
        match glyph.image {
            ClassifiedImage::Digit(d) => decoded.price.push(char::from(b'0' + d)),
            ClassifiedImage::Separator => decoded.price.push('.'),
            ClassifiedImage::Currency(currency) => {
                decoded.currency = if glyph.alt.is_empty() {
                    currency.symbol().to_string()
                } else {
                    glyph.alt.clone()
                };
            }
            ClassifiedImage::Unknown => {}
        }
    }
    decoded
}
