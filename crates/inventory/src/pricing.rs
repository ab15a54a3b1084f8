//! Rental price list.

use serde::{Deserialize, Serialize};

/// Daily rental rate for one item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalPrice {
    pub item: String,
    pub daily_rate: f64,
    pub currency: String,
}

const PRICE_LIST: &[(&str, f64)] = &[
    ("chair", 4.5),
    ("folding_table", 12.0),
    ("tent", 180.0),
    ("projector", 75.0),
    ("projector_screen", 25.0),
    ("speaker_system", 120.0),
    ("microphone", 20.0),
    ("string_lights", 15.0),
];

/// Prices for items that can be rented from outside vendors.
pub fn rental_prices() -> Vec<RentalPrice> {
    PRICE_LIST
        .iter()
        .map(|(item, rate)| RentalPrice {
            item: (*item).to_string(),
            daily_rate: *rate,
            currency: "USD".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_list_covers_seeded_inventory() {
        let prices = rental_prices();
        for name in ["chair", "projector", "speaker_system"] {
            assert!(prices.iter().any(|p| p.item == name), "missing price for {name}");
        }
        assert!(prices.iter().all(|p| p.daily_rate > 0.0 && p.currency == "USD"));
    }
}
