//! Catalog statistics for the dashboard header and /api/stats

use serde::Serialize;
use std::collections::HashSet;

use super::catalog::Product;

/// Placeholder for a statistic that cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

const CURRENCY: &str = "KSh";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_products: usize,
    pub categories: usize,
    pub price_range: String,
    pub last_updated: String,
}

impl Statistics {
    fn empty() -> Self {
        Self {
            total_products: 0,
            categories: 0,
            price_range: NOT_AVAILABLE.to_string(),
            last_updated: NOT_AVAILABLE.to_string(),
        }
    }
}

/// First code point of each run of ten decimal digits outside ASCII that
/// prices are likely to use: Arabic-Indic, Extended Arabic-Indic,
/// Devanagari, Bengali and fullwidth.
const DIGIT_ZEROS: [u32; 5] = [0x0660, 0x06F0, 0x0966, 0x09E6, 0xFF10];

enum Digit {
    Value(char),
    Other,
    NotNumeric,
}

fn classify(c: char) -> Digit {
    if c.is_ascii_digit() {
        return Digit::Value(c);
    }
    if !c.is_numeric() {
        return Digit::NotNumeric;
    }
    let code = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
        .map_or(Digit::Other, Digit::Value)
}

/// Numeric value of a free-form price string.
///
/// Thousands separators are dropped and then every non-digit character,
/// decimal points included, so "12.50" reads as 1250. Digits from the
/// scripts in `DIGIT_ZEROS` count like ASCII ones. Returns `None` when no
/// digits remain or when a numeric character outside those scripts
/// (superscripts and the like) is present.
pub fn parse_price(raw: &str) -> Option<f64> {
    let mut digits = String::new();
    for c in raw.replace(',', "").chars() {
        match classify(c) {
            Digit::Value(d) => digits.push(d),
            Digit::Other => return None,
            Digit::NotNumeric => {}
        }
    }
    digits.parse().ok()
}

/// Round to a whole number and group thousands with commas
pub fn format_grouped(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{}{}", sign, out)
}

fn price_range(products: &[Product]) -> String {
    let prices = products
        .iter()
        .filter_map(|p| p.price().and_then(parse_price))
        .filter(|&price| price > 0.0);

    let bounds = prices.fold(None, |acc: Option<(f64, f64)>, price| match acc {
        Some((min, max)) => Some((min.min(price), max.max(price))),
        None => Some((price, price)),
    });

    match bounds {
        Some((min, max)) => format!(
            "{} {} - {} {}",
            CURRENCY,
            format_grouped(min),
            CURRENCY,
            format_grouped(max)
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Summarize a catalog. `last_updated` is taken from the first record as-is.
pub fn compute(products: &[Product]) -> Statistics {
    let Some(first) = products.first() else {
        return Statistics::empty();
    };

    let categories: HashSet<&str> = products.iter().map(Product::category_or_unknown).collect();

    Statistics {
        total_products: products.len(),
        categories: categories.len(),
        price_range: price_range(products),
        last_updated: first.scraped_at().unwrap_or(NOT_AVAILABLE).to_string(),
    }
}
