//! Products per category

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::catalog::Product;

/// Category → product count, in order of first appearance.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCounts(Vec<(String, usize)>);

impl CategoryCounts {
    fn add(&mut self, category: &str) {
        match self.0.iter_mut().find(|(name, _)| name == category) {
            Some((_, n)) => *n += 1,
            None => self.0.push((category.to_string(), 1)),
        }
    }
}

impl<'a> IntoIterator for &'a CategoryCounts {
    type Item = &'a (String, usize);
    type IntoIter = std::slice::Iter<'a, (String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, n) in &self.0 {
            map.serialize_entry(name, n)?;
        }
        map.end()
    }
}

pub fn count(products: &[Product]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for product in products {
        counts.add(product.category_or_unknown());
    }
    counts
}
