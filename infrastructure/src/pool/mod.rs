//! Built-in item pool
//!
//! The eleven flags the quiz ships with, each with a short textual
//! rendering of the flag for terminals that cannot show images.

use flagquiz_domain::Item;

const DEFAULT_FLAGS: [(&str, &str); 11] = [
    (
        "Estonia",
        "Flag with three horizontal stripes of equal size. Top stripe blue, middle stripe black, bottom stripe white",
    ),
    (
        "France",
        "Flag with three vertical stripes of equal size. Left stripe blue, middle stripe white, right stripe red",
    ),
    (
        "Germany",
        "Flag with three horizontal stripes of equal size. Top stripe black, middle stripe red, bottom stripe gold",
    ),
    (
        "Ireland",
        "Flag with three vertical stripes of equal size. Left stripe green, middle stripe white, right stripe orange",
    ),
    (
        "Italy",
        "Flag with three vertical stripes of equal size. Left stripe green, middle stripe white, right stripe red",
    ),
    (
        "Nigeria",
        "Flag with three vertical stripes of equal size. Left stripe green, middle stripe white, right stripe green",
    ),
    (
        "Poland",
        "Flag with two horizontal stripes of equal size. Top stripe white, bottom stripe red",
    ),
    (
        "Russia",
        "Flag with three horizontal stripes of equal size. Top stripe white, middle stripe blue, bottom stripe red",
    ),
    (
        "Spain",
        "Flag with three horizontal stripes. Top thin stripe red, middle thick stripe gold with a crest on the left, bottom thin stripe red",
    ),
    (
        "UK",
        "Flag with overlapping red and white crosses, both straight and diagonally, on a blue background",
    ),
    (
        "US",
        "Flag with red and white stripes of equal size, with white stars on a blue background in the top-left corner",
    ),
];

/// The built-in flags, in alphabetical order
pub fn default_items() -> Vec<Item> {
    DEFAULT_FLAGS
        .iter()
        .map(|(name, description)| Item::new(*name).with_description(*description))
        .collect()
}
