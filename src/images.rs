/// What a price-strip image stands for, judged by its `src` path alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedImage {
    Digit(u8),
    Separator,
    Currency(Currency),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Euro,
    Dollar,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Euro => "€",
            Currency::Dollar => "$",
        }
    }
}

static DIGIT_IMAGES: [&str; 10] = [
    "images/price/0.gif",
    "images/price/1.gif",
    "images/price/2.gif",
    "images/price/3.gif",
    "images/price/4.gif",
    "images/price/5.gif",
    "images/price/6.gif",
    "images/price/7.gif",
    "images/price/8.gif",
    "images/price/9.gif",
];

static SEPARATOR_IMAGES: [&str; 1] = ["images/price/komma.gif"];

static CURRENCY_IMAGES: [(&str, Currency); 2] = [
    ("images/price/euro.gif", Currency::Euro),
    ("images/price/dollar.gif", Currency::Dollar),
];

/// Total over all inputs: anything outside the tables (spacers, icons, an
/// empty `src`) is `Unknown`.
pub fn classify(src: &str) -> ClassifiedImage {
    if let Some(digit) = DIGIT_IMAGES.iter().position(|path| *path == src) {
        return ClassifiedImage::Digit(digit as u8);
    }
    if SEPARATOR_IMAGES.iter().any(|path| *path == src) {
        return ClassifiedImage::Separator;
    }
    CURRENCY_IMAGES
        .iter()
        .find(|(path, _)| *path == src)
        .map(|(_, currency)| ClassifiedImage::Currency(*currency))
        .unwrap_or(ClassifiedImage::Unknown)
}
