//! Static drink catalog backing the selection screen.
//!
//! Categories, options, and serving sizes are fixed configuration data: the
//! estimator never reads them, it only sees the drinks the user built from
//! them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkCategory {
    Beer,
    Wine,
    Spirits,
}

impl DrinkCategory {
    pub const ALL: [DrinkCategory; 3] =
        [DrinkCategory::Beer, DrinkCategory::Wine, DrinkCategory::Spirits];

    pub fn name(self) -> &'static str {
        match self {
            DrinkCategory::Beer => "Beer",
            DrinkCategory::Wine => "Wine",
            DrinkCategory::Spirits => "Spirits",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            DrinkCategory::Beer => "🍺",
            DrinkCategory::Wine => "🍷",
            DrinkCategory::Spirits => "🥃",
        }
    }

    pub fn options(self) -> &'static [DrinkOption] {
        match self {
            DrinkCategory::Beer => &BEER_OPTIONS,
            DrinkCategory::Wine => &WINE_OPTIONS,
            DrinkCategory::Spirits => &SPIRIT_OPTIONS,
        }
    }

    pub fn serving_sizes(self) -> &'static [ServingSize] {
        match self {
            DrinkCategory::Beer => &BEER_SERVINGS,
            DrinkCategory::Wine => &WINE_SERVINGS,
            DrinkCategory::Spirits => &SPIRIT_SERVINGS,
        }
    }
}

/// A named drink within a category, with its typical strength and the accent
/// color used on its card.
#[derive(Debug, PartialEq)]
pub struct DrinkOption {
    pub id: &'static str,
    pub name: &'static str,
    pub abv_percent: f64,
    pub color: &'static str,
}

/// A purchasable serving within a category.
#[derive(Debug, PartialEq)]
pub struct ServingSize {
    pub id: &'static str,
    pub name: &'static str,
    pub amount_ml: f64,
    pub icon: &'static str,
}

const BEER_OPTIONS: [DrinkOption; 5] = [
    DrinkOption { id: "lightlager", name: "Light", abv_percent: 4.5, color: "#F9D342" },
    DrinkOption { id: "lager", name: "Lager", abv_percent: 5.2, color: "#E8871E" },
    DrinkOption { id: "ale", name: "Ale", abv_percent: 5.8, color: "#32292F" },
    DrinkOption { id: "ipa", name: "IPA", abv_percent: 6.5, color: "#F9A03F" },
    DrinkOption { id: "craft", name: "Craft", abv_percent: 7.2, color: "#8E5572" },
];

const WINE_OPTIONS: [DrinkOption; 4] = [
    DrinkOption { id: "red", name: "Red", abv_percent: 13.0, color: "#7B0828" },
    DrinkOption { id: "white", name: "White", abv_percent: 12.0, color: "#F9E076" },
    DrinkOption { id: "rose", name: "Rosé", abv_percent: 11.0, color: "#F7A9A8" },
    DrinkOption { id: "sparkling", name: "Sparkling", abv_percent: 12.0, color: "#F9E7E7" },
];

const SPIRIT_OPTIONS: [DrinkOption; 5] = [
    DrinkOption { id: "vodka", name: "Vodka", abv_percent: 37.5, color: "#E5E5E5" },
    DrinkOption { id: "whiskey", name: "Whiskey", abv_percent: 42.0, color: "#C25E00" },
    DrinkOption { id: "rum", name: "Rum", abv_percent: 45.0, color: "#8B4513" },
    DrinkOption { id: "gin", name: "Gin", abv_percent: 40.5, color: "#D0F0C0" },
    DrinkOption { id: "tequila", name: "Tequila", abv_percent: 40.0, color: "#F9D342" },
];

const BEER_SERVINGS: [ServingSize; 2] = [
    ServingSize { id: "can", name: "Can", amount_ml: 330.0, icon: "🥫" },
    ServingSize { id: "pint", name: "Pint", amount_ml: 500.0, icon: "🍺" },
];

const WINE_SERVINGS: [ServingSize; 3] = [
    ServingSize { id: "glass", name: "Glass", amount_ml: 175.0, icon: "🍷" },
    ServingSize {
        id: "bottle_shared",
        name: "Bottle (shared by 4)",
        amount_ml: 750.0 / 4.0,
        icon: "🍾",
    },
    ServingSize {
        id: "bottle_solo",
        name: "Bottle (on my own)",
        amount_ml: 750.0,
        icon: "🍾",
    },
];

const SPIRIT_SERVINGS: [ServingSize; 2] = [
    ServingSize { id: "shot", name: "Shot", amount_ml: 25.0, icon: "🥃" },
    ServingSize { id: "double", name: "Double", amount_ml: 50.0, icon: "🥃🥃" },
];

pub fn find_option(category: DrinkCategory, id: &str) -> Option<&'static DrinkOption> {
    category.options().iter().find(|o| o.id == id)
}

pub fn find_serving(category: DrinkCategory, id: &str) -> Option<&'static ServingSize> {
    category.serving_sizes().iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_options_and_servings() {
        for category in DrinkCategory::ALL {
            assert!(!category.options().is_empty());
            assert!(!category.serving_sizes().is_empty());
        }
    }

    #[test]
    fn option_ids_are_unique_within_a_category() {
        for category in DrinkCategory::ALL {
            let ids: HashSet<&str> = category.options().iter().map(|o| o.id).collect();
            assert_eq!(ids.len(), category.options().len());
        }
    }

    #[test]
    fn strengths_and_volumes_are_plausible() {
        for category in DrinkCategory::ALL {
            for option in category.options() {
                assert!(option.abv_percent > 0.0 && option.abv_percent < 100.0);
            }
            for serving in category.serving_sizes() {
                assert!(serving.amount_ml > 0.0);
            }
        }
    }

    #[test]
    fn lookups_resolve_known_ids() {
        let ipa = find_option(DrinkCategory::Beer, "ipa").unwrap();
        assert_eq!(ipa.abv_percent, 6.5);
        let shared = find_serving(DrinkCategory::Wine, "bottle_shared").unwrap();
        assert_eq!(shared.amount_ml, 187.5);
        assert!(find_option(DrinkCategory::Spirits, "ipa").is_none());
    }
}
