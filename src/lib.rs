use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use wasm_bindgen::prelude::*;

/// Physiological constants for the Widmark estimation.
pub mod constants {
    /// Density of ethanol in g/ml, used to convert volume to mass.
    pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;
    /// Widmark body-water distribution ratio for males.
    pub const BODY_WATER_RATIO_MALE: f64 = 0.68;
    /// Widmark body-water distribution ratio for females.
    pub const BODY_WATER_RATIO_FEMALE: f64 = 0.55;
    /// Average elimination rate in %BAC per hour.
    pub const ELIMINATION_RATE_PER_HOUR: f64 = 0.015;
    /// Absorption factor applied on a full stomach.
    pub const FULL_MEAL_FACTOR: f64 = 0.7;
    /// Absorption factor applied after some food.
    pub const SOME_FOOD_FACTOR: f64 = 0.9;
    /// Divisor rescaling raw Widmark output into grams per 100 ml.
    pub const PERCENT_SCALE: f64 = 10.0;
}

/// Sentinel limit for jurisdictions without a legal BAC ceiling.
pub const NO_LIMIT: f64 = 100.0;

/// Biological sex, which selects the Widmark body-water constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn body_water_ratio(self) -> f64 {
        match self {
            Sex::Male => constants::BODY_WATER_RATIO_MALE,
            Sex::Female => constants::BODY_WATER_RATIO_FEMALE,
        }
    }
}

/// How much the user has eaten around the time of drinking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EatingStatus {
    #[default]
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "some")]
    SomeFood,
    #[serde(rename = "full")]
    FullMeal,
}

impl EatingStatus {
    /// Multiplicative adjustment for food slowing alcohol absorption.
    pub fn absorption_factor(self) -> f64 {
        match self {
            EatingStatus::Empty => 1.0,
            EatingStatus::SomeFood => constants::SOME_FOOD_FACTOR,
            EatingStatus::FullMeal => constants::FULL_MEAL_FACTOR,
        }
    }
}

/// One reported drink: a serving volume, its strength, and how many were had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub volume_ml: f64,
    pub abv_percent: f64,
    pub quantity: u32,
}

impl Drink {
    /// Pure-alcohol volume contributed by this entry, in ml.
    ///
    /// A malformed entry (non-finite or non-positive volume/ABV) contributes
    /// nothing rather than poisoning the total.
    pub fn pure_alcohol_ml(&self) -> f64 {
        if !self.volume_ml.is_finite()
            || !self.abv_percent.is_finite()
            || self.volume_ml <= 0.0
            || self.abv_percent <= 0.0
        {
            return 0.0;
        }
        self.volume_ml * (self.abv_percent / 100.0) * f64::from(self.quantity)
    }
}

/// Snapshot of everything the wizard collected, assembled once and passed by
/// value into the estimator. `age` is carried for the record but does not
/// enter the formula.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionProfile {
    pub drinks: Vec<Drink>,
    pub hours_since_last_drink: f64,
    pub sex: Option<Sex>,
    pub weight_kg: f64,
    pub age: Option<u32>,
    pub eating_status: EatingStatus,
}

/// Round to three decimal places, half away from zero on the fourth digit.
#[inline]
pub(crate) fn round_to_3dp(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Estimate blood alcohol content as a percentage (grams per 100 ml scale).
///
/// # Algorithm
/// 1. Sum pure-alcohol volume across all drinks and convert to grams.
/// 2. Divide by body weight times the sex-specific body-water ratio
///    (Widmark), rescaled to percentage units.
/// 3. Subtract average elimination for the elapsed hours, clamping at zero.
/// 4. Scale down for food in the stomach.
///
/// # Degraded inputs
/// This function never fails: an unset weight or sex yields exactly `0.0`,
/// and malformed drink entries contribute no alcohol. The wizard flow relies
/// on that to stay non-blocking.
pub fn estimate_bac(profile: &ConsumptionProfile) -> f64 {
    let total_alcohol_ml: f64 = profile.drinks.iter().map(Drink::pure_alcohol_ml).sum();
    let alcohol_grams = total_alcohol_ml * constants::ETHANOL_DENSITY_G_PER_ML;

    let Some(sex) = profile.sex else {
        debug!("sex not set, returning 0");
        return 0.0;
    };
    let weight_kg = profile.weight_kg;
    if weight_kg <= 0.0 || !weight_kg.is_finite() {
        debug!("weight not usable ({}), returning 0", weight_kg);
        return 0.0;
    }

    let raw = alcohol_grams / (weight_kg * sex.body_water_ratio()) / constants::PERCENT_SCALE;

    let after_elimination =
        (raw - constants::ELIMINATION_RATE_PER_HOUR * profile.hours_since_last_drink).max(0.0);
    let adjusted = after_elimination * profile.eating_status.absorption_factor();

    // Food only scales down, but keep the second clamp to match the
    // published behavior exactly.
    let bac = round_to_3dp(adjusted.max(0.0));

    debug!(
        "{:.1} ml pure alcohol over {} drinks -> {} %BAC after {} h",
        total_alcohol_ml,
        profile.drinks.len(),
        bac,
        profile.hours_since_last_drink
    );

    bac
}

/// One jurisdiction and its legal driving BAC ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryLimit {
    pub country: String,
    pub limit: f64,
}

impl CountryLimit {
    /// Whether this jurisdiction has no legal ceiling at all.
    pub fn is_no_limit(&self) -> bool {
        self.limit >= NO_LIMIT
    }
}

/// Combined output of one calculation, handed back to the results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacResults {
    pub bac: f64,
    pub countries: Vec<CountryLimit>,
}

/// Countries where `estimate` is at or under the legal ceiling, most
/// tolerant first. Ties keep the reference-table order (stable sort). The
/// table is never mutated; an empty table yields an empty result.
pub fn matching_countries(estimate: f64, table: &[CountryLimit]) -> Vec<CountryLimit> {
    let mut matches: Vec<CountryLimit> = table
        .iter()
        .filter(|c| c.limit >= estimate)
        .cloned()
        .collect();
    matches.sort_by(|a, b| b.limit.partial_cmp(&a.limit).unwrap_or(Ordering::Equal));

    debug!(
        "{}/{} jurisdictions allow driving at {} %BAC",
        matches.len(),
        table.len(),
        estimate
    );

    matches
}

/// Load the country-limit reference table from CSV content.
///
/// Lines before `start_line` are skipped (header rows). Malformed lines and
/// duplicate countries are dropped with a log entry; nothing here is fatal.
pub fn read_country_limits_from_csv_string(
    csv_content: &str,
    country_column: usize,
    limit_column: usize,
    start_line: usize,
) -> Vec<CountryLimit> {
    use std::collections::HashSet;

    let mut limits = Vec::new();
    let mut seen_countries = HashSet::new();

    for (i, line) in csv_content.lines().enumerate() {
        if i < start_line {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() <= country_column || fields.len() <= limit_column {
            debug!("Warning: Line {} has fewer columns than required", i + 1);
            continue;
        }

        let country = fields[country_column].trim().to_string();
        if country.is_empty() {
            debug!("Warning: Empty country name on line {}, skipping", i + 1);
            continue;
        }

        if !seen_countries.insert(country.clone()) {
            debug!(
                "Warning: Duplicate country '{}' found on line {}, skipping",
                country,
                i + 1
            );
            continue;
        }

        let limit = match fields[limit_column].trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => v,
            Ok(v) => {
                debug!("Warning: Unusable limit {} on line {}, skipping", v, i + 1);
                continue;
            }
            Err(e) => {
                debug!("Warning: {} on line {}, skipping", e, i + 1);
                continue;
            }
        };

        limits.push(CountryLimit { country, limit });
    }

    info!("Loaded {} country limits from CSV content", limits.len());
    limits
}

/// Entry point for plain-JS callers outside the Yew app.
///
/// Deserializes a consumption profile and a country table, runs the
/// estimation, and returns the serialized `BacResults`.
#[wasm_bindgen]
pub fn calculate_results(profile_js: JsValue, countries_js: JsValue) -> JsValue {
    let profile: ConsumptionProfile = match serde_wasm_bindgen::from_value(profile_js) {
        Ok(p) => p,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize profile: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };
    let countries: Vec<CountryLimit> = match serde_wasm_bindgen::from_value(countries_js) {
        Ok(c) => c,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!(
                "Failed to deserialize countries: {}",
                e
            ))
            .unwrap_or(JsValue::NULL);
        }
    };

    let bac = estimate_bac(&profile);
    let countries = matching_countries(bac, &countries);

    serde_wasm_bindgen::to_value(&BacResults { bac, countries }).unwrap_or(JsValue::NULL)
}

pub mod catalog;
pub mod worker_agent;

#[cfg(test)]
mod tests {
    use super::*;

    fn beer_330_at_5() -> Drink {
        Drink {
            volume_ml: 330.0,
            abv_percent: 5.0,
            quantity: 1,
        }
    }

    fn sober_male_80kg(drinks: Vec<Drink>) -> ConsumptionProfile {
        ConsumptionProfile {
            drinks,
            hours_since_last_drink: 0.0,
            sex: Some(Sex::Male),
            weight_kg: 80.0,
            age: Some(30),
            eating_status: EatingStatus::Empty,
        }
    }

    #[test]
    fn empty_drink_list_estimates_zero() {
        let profile = sober_male_80kg(Vec::new());
        assert_eq!(estimate_bac(&profile), 0.0);
    }

    #[test]
    fn one_beer_male_80kg_empty_stomach() {
        let profile = sober_male_80kg(vec![beer_330_at_5()]);
        assert!((estimate_bac(&profile) - 0.024).abs() < 1e-12);
    }

    #[test]
    fn full_meal_scales_down() {
        let profile = ConsumptionProfile {
            eating_status: EatingStatus::FullMeal,
            ..sober_male_80kg(vec![beer_330_at_5()])
        };
        assert!((estimate_bac(&profile) - 0.017).abs() < 1e-12);
    }

    #[test]
    fn elimination_clamps_at_zero() {
        let profile = ConsumptionProfile {
            hours_since_last_drink: 2.0,
            ..sober_male_80kg(vec![beer_330_at_5()])
        };
        assert_eq!(estimate_bac(&profile), 0.0);
    }

    #[test]
    fn unset_weight_short_circuits_to_zero() {
        let profile = ConsumptionProfile {
            weight_kg: 0.0,
            ..sober_male_80kg(vec![beer_330_at_5()])
        };
        assert_eq!(estimate_bac(&profile), 0.0);
    }

    #[test]
    fn unset_sex_short_circuits_to_zero() {
        let profile = ConsumptionProfile {
            sex: None,
            ..sober_male_80kg(vec![beer_330_at_5()])
        };
        assert_eq!(estimate_bac(&profile), 0.0);
    }

    #[test]
    fn female_ratio_gives_higher_estimate() {
        let male = sober_male_80kg(vec![beer_330_at_5()]);
        let female = ConsumptionProfile {
            sex: Some(Sex::Female),
            ..male.clone()
        };
        assert!(estimate_bac(&female) > estimate_bac(&male));
    }

    #[test]
    fn monotonic_in_quantity() {
        let mut previous = 0.0;
        for quantity in 1..=6 {
            let profile = sober_male_80kg(vec![Drink {
                quantity,
                ..beer_330_at_5()
            }]);
            let bac = estimate_bac(&profile);
            assert!(bac >= previous, "quantity {} regressed", quantity);
            previous = bac;
        }
    }

    #[test]
    fn non_increasing_in_elapsed_hours() {
        let mut previous = f64::MAX;
        for half_hours in 0..10 {
            let profile = ConsumptionProfile {
                hours_since_last_drink: f64::from(half_hours) * 0.5,
                ..sober_male_80kg(vec![beer_330_at_5()])
            };
            let bac = estimate_bac(&profile);
            assert!(bac <= previous);
            assert!(bac >= 0.0);
            previous = bac;
        }
    }

    #[test]
    fn result_is_rounded_to_three_decimals() {
        let profile = ConsumptionProfile {
            weight_kg: 73.3,
            ..sober_male_80kg(vec![Drink {
                volume_ml: 437.0,
                abv_percent: 6.3,
                quantity: 3,
            }])
        };
        let bac = estimate_bac(&profile);
        assert!((bac * 1000.0 - (bac * 1000.0).round()).abs() < 1e-9);
    }

    #[test]
    fn malformed_drink_contributes_nothing() {
        let clean = sober_male_80kg(vec![beer_330_at_5()]);
        let dirty = sober_male_80kg(vec![
            beer_330_at_5(),
            Drink {
                volume_ml: f64::NAN,
                abv_percent: 5.0,
                quantity: 2,
            },
            Drink {
                volume_ml: -250.0,
                abv_percent: 40.0,
                quantity: 1,
            },
        ]);
        assert_eq!(estimate_bac(&dirty), estimate_bac(&clean));
    }

    #[test]
    fn estimate_is_idempotent() {
        let profile = sober_male_80kg(vec![beer_330_at_5()]);
        assert_eq!(estimate_bac(&profile), estimate_bac(&profile));
    }

    fn sample_table() -> Vec<CountryLimit> {
        vec![
            CountryLimit {
                country: "Atlantis".into(),
                limit: 0.05,
            },
            CountryLimit {
                country: "Borduria".into(),
                limit: 0.0,
            },
            CountryLimit {
                country: "Cascadia".into(),
                limit: 0.08,
            },
            CountryLimit {
                country: "Dunwich".into(),
                limit: NO_LIMIT,
            },
            CountryLimit {
                country: "Elbonia".into(),
                limit: 0.05,
            },
        ]
    }

    #[test]
    fn zero_estimate_matches_full_table_sorted_descending() {
        let matches = matching_countries(0.0, &sample_table());
        assert_eq!(matches.len(), 5);
        let limits: Vec<f64> = matches.iter().map(|c| c.limit).collect();
        assert_eq!(limits, vec![NO_LIMIT, 0.08, 0.05, 0.05, 0.0]);
    }

    #[test]
    fn ties_keep_table_order() {
        let matches = matching_countries(0.0, &sample_table());
        assert_eq!(matches[2].country, "Atlantis");
        assert_eq!(matches[3].country, "Elbonia");
    }

    #[test]
    fn never_returns_a_country_below_the_estimate() {
        let estimate = 0.051;
        let matches = matching_countries(estimate, &sample_table());
        assert!(matches.iter().all(|c| c.limit >= estimate));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn empty_table_yields_empty_result() {
        assert!(matching_countries(0.02, &[]).is_empty());
    }

    #[test]
    fn table_is_not_mutated() {
        let table = sample_table();
        let before = table.clone();
        let _ = matching_countries(0.03, &table);
        assert_eq!(table, before);
    }

    #[test]
    fn csv_loader_parses_and_skips_header() {
        let csv = "Country,Limit\nGermany,0.05\nCzech Republic,0.0\nTogo,100\n";
        let limits = read_country_limits_from_csv_string(csv, 0, 1, 1);
        assert_eq!(limits.len(), 3);
        assert_eq!(limits[0].country, "Germany");
        assert_eq!(limits[0].limit, 0.05);
        assert!(limits[2].is_no_limit());
    }

    #[test]
    fn csv_loader_drops_malformed_and_duplicate_lines() {
        let csv =
            "Country,Limit\nGermany,0.05\nshortline\nGermany,0.08\nNowhere,abc\nSweden,0.02\n";
        let limits = read_country_limits_from_csv_string(csv, 0, 1, 1);
        let names: Vec<&str> = limits.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Germany", "Sweden"]);
    }

    #[test]
    fn bundled_table_loads_cleanly() {
        let limits = read_country_limits_from_csv_string(include_str!("countries.csv"), 0, 1, 1);
        assert!(limits.len() >= 30);
        assert!(limits.iter().any(|c| c.is_no_limit()));
        assert!(limits.iter().any(|c| c.limit == 0.0));
    }
}
