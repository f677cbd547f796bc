//! Pricing catalog.
//!
//! Immutable configuration read by both estimators: square-footage tiers,
//! clean-level multipliers, move-out rules, commercial rates, travel bands,
//! labor guardrail constants and add-on menus. Built once at startup (either
//! the built-in defaults or a JSON file) and validated before use; there is
//! no runtime mutation.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::pricing::error::{CatalogError, RequestError};
use crate::pricing::models::{BusinessType, CleanLevel, Frequency, ServiceCategory, ServiceKind};

/// Square-footage bracket.
///
/// `max_sqft = None` is unbounded. The last tier of every table is the
/// sentinel: unbounded with no base, meaning "needs a custom quote".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqftTier {
    pub max_sqft: Option<u32>,
    pub base: Option<Decimal>,
}

impl SqftTier {
    pub fn priced(max_sqft: u32, base: Decimal) -> Self {
        Self {
            max_sqft: Some(max_sqft),
            base: Some(base),
        }
    }

    pub fn sentinel() -> Self {
        Self {
            max_sqft: None,
            base: None,
        }
    }
}

/// Distance bracket with a flat fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelBand {
    pub max_miles: u32,
    pub fee: Decimal,
}

/// Value keyed by residential service kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerServiceKind<T> {
    pub standard: T,
    pub deep: T,
}

impl<T> PerServiceKind<T> {
    pub fn get(&self, kind: ServiceKind) -> &T {
        match kind {
            ServiceKind::Standard => &self.standard,
            ServiceKind::Deep => &self.deep,
        }
    }

    fn entries(&self) -> [(&'static str, &T); 2] {
        [("standard", &self.standard), ("deep", &self.deep)]
    }
}

/// Value keyed by clean level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerCleanLevel<T> {
    pub light: T,
    pub standard: T,
    pub heavy: T,
    pub deep_reset: T,
}

impl<T> PerCleanLevel<T> {
    pub fn get(&self, level: CleanLevel) -> &T {
        match level {
            CleanLevel::Light => &self.light,
            CleanLevel::Standard => &self.standard,
            CleanLevel::Heavy => &self.heavy,
            CleanLevel::DeepReset => &self.deep_reset,
        }
    }

    fn entries(&self) -> [(&'static str, &T); 4] {
        [
            ("light", &self.light),
            ("standard", &self.standard),
            ("heavy", &self.heavy),
            ("deep_reset", &self.deep_reset),
        ]
    }
}

/// Value keyed by business type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerBusinessType<T> {
    pub office: T,
    pub retail: T,
    pub clinic: T,
    pub restaurant: T,
}

impl<T> PerBusinessType<T> {
    pub fn get(&self, business_type: BusinessType) -> &T {
        match business_type {
            BusinessType::Office => &self.office,
            BusinessType::Retail => &self.retail,
            BusinessType::Clinic => &self.clinic,
            BusinessType::Restaurant => &self.restaurant,
        }
    }

    fn entries(&self) -> [(&'static str, &T); 4] {
        [
            ("office", &self.office),
            ("retail", &self.retail),
            ("clinic", &self.clinic),
            ("restaurant", &self.restaurant),
        ]
    }
}

/// Value keyed by visit frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerFrequency<T> {
    pub weekly: T,
    pub biweekly: T,
    pub monthly: T,
}

impl<T> PerFrequency<T> {
    pub fn get(&self, frequency: Frequency) -> &T {
        match frequency {
            Frequency::Weekly => &self.weekly,
            Frequency::Biweekly => &self.biweekly,
            Frequency::Monthly => &self.monthly,
        }
    }

    fn entries(&self) -> [(&'static str, &T); 3] {
        [
            ("weekly", &self.weekly),
            ("biweekly", &self.biweekly),
            ("monthly", &self.monthly),
        ]
    }
}

/// Hourly labor rates. The guardrail prices hours at `default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRates {
    /// Informational: published through the catalog endpoint, not priced.
    pub min: Decimal,
    pub default: Decimal,
    /// Informational: published through the catalog endpoint, not priced.
    pub max: Decimal,
}

/// Floor and multiplier applied to the tier base of move-in/move-out jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveOutRule {
    pub min_standard: Decimal,
    pub min_deep: Decimal,
    pub standard_mult: Decimal,
    pub deep_mult: Decimal,
}

impl MoveOutRule {
    /// Inflate a tier base, never dropping below the kind's floor.
    pub fn apply(&self, kind: ServiceKind, base: Decimal) -> Decimal {
        match kind {
            ServiceKind::Standard => self.min_standard.max(base * self.standard_mult),
            ServiceKind::Deep => self.min_deep.max(base * self.deep_mult),
        }
    }
}

/// Room-count adjustment relative to what the square footage implies.
///
/// Extra rooms are charged at a higher unit rate than missing rooms are
/// credited, and the combined adjustment is clamped to `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAdjustment {
    /// At least 1, so the expected bedroom count fits a `u32`.
    pub sqft_per_bedroom: Decimal,
    /// At most 1, so expected baths never outnumber expected bedrooms.
    pub baths_per_bedroom: Decimal,
    pub extra_bed: Decimal,
    pub missing_bed: Decimal,
    pub extra_bath: Decimal,
    pub missing_bath: Decimal,
    pub min: Decimal,
    pub max: Decimal,
}

/// Constants of the labor-hour price guardrail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborGuardrail {
    pub sqft_per_hour: PerServiceKind<Decimal>,
    pub hours_multiplier: PerCleanLevel<Decimal>,
    pub floor_factor: Decimal,
    pub ceiling_factor: Decimal,
}

impl LaborGuardrail {
    /// Estimated crew hours for a residence.
    pub fn hours(&self, sqft: u32, kind: ServiceKind, level: CleanLevel) -> Decimal {
        Decimal::from(sqft) / *self.sqft_per_hour.get(kind) * *self.hours_multiplier.get(level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialRates {
    pub rate_per_sqft: Decimal,
    pub restroom_fee: Decimal,
    pub type_multiplier: PerBusinessType<Decimal>,
    pub frequency_discount: PerFrequency<Decimal>,
}

/// A selectable extra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub key: String,
    pub label: String,
    pub price: Decimal,
}

impl AddOn {
    fn new(key: &str, label: &str, price: Decimal) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            price,
        }
    }
}

/// Add-on menus per service category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnCatalog {
    pub residential: Vec<AddOn>,
    pub commercial: Vec<AddOn>,
}

impl AddOnCatalog {
    pub fn menu(&self, category: ServiceCategory) -> &[AddOn] {
        match category {
            ServiceCategory::Residential => &self.residential,
            ServiceCategory::Commercial => &self.commercial,
        }
    }

    /// Sum the prices of the selected add-on keys.
    ///
    /// A selection is a set: repeating a key does not charge it twice.
    pub fn price_selection<S: AsRef<str>>(
        &self,
        category: ServiceCategory,
        keys: &[S],
    ) -> Result<Decimal, RequestError> {
        let menu = self.menu(category);
        let mut seen = HashSet::new();
        let mut total = Decimal::ZERO;

        for key in keys {
            let key = key.as_ref();
            if !seen.insert(key) {
                continue;
            }
            let add_on = menu.iter().find(|a| a.key == key).ok_or_else(|| {
                RequestError::UnknownAddOn {
                    category,
                    key: key.to_string(),
                }
            })?;
            total += add_on.price;
        }

        Ok(total)
    }
}

/// The complete, validated pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCatalog {
    pub currency: String,
    /// Informational: ZIP codes travel distance is measured from. Clients
    /// send `miles` directly, so no estimate reads this.
    pub home_base_zips: Vec<String>,
    pub hourly: HourlyRates,
    pub residential_tiers: PerServiceKind<Vec<SqftTier>>,
    pub clean_level_multipliers: PerCleanLevel<Decimal>,
    pub move_out: MoveOutRule,
    pub room_adjustment: RoomAdjustment,
    pub labor: LaborGuardrail,
    pub commercial: CommercialRates,
    pub travel_fee_bands: Vec<TravelBand>,
    pub after_hours_multiplier: Decimal,
    /// Half-width of the internal review band around the shown price.
    pub internal_band_fraction: Decimal,
    pub add_ons: AddOnCatalog,
}

impl PricingCatalog {
    /// Built-in production pricing.
    pub fn standard() -> Self {
        Self {
            currency: "USD".to_string(),
            home_base_zips: vec!["54481".to_string(), "54482".to_string(), "54492".to_string()],
            hourly: HourlyRates {
                min: dec!(20),
                default: dec!(24),
                max: dec!(28),
            },
            residential_tiers: PerServiceKind {
                standard: vec![
                    SqftTier::priced(1200, dec!(120)),
                    SqftTier::priced(2200, dec!(260)),
                    SqftTier::priced(3200, dec!(330)),
                    SqftTier::priced(4200, dec!(420)),
                    SqftTier::sentinel(),
                ],
                deep: vec![
                    SqftTier::priced(1200, dec!(220)),
                    SqftTier::priced(2200, dec!(420)),
                    SqftTier::priced(3200, dec!(650)),
                    SqftTier::priced(4200, dec!(800)),
                    SqftTier::sentinel(),
                ],
            },
            clean_level_multipliers: PerCleanLevel {
                light: dec!(0.9),
                standard: dec!(1.0),
                heavy: dec!(1.25),
                deep_reset: dec!(1.5),
            },
            move_out: MoveOutRule {
                min_standard: dec!(325),
                min_deep: dec!(425),
                standard_mult: dec!(1.35),
                deep_mult: dec!(1.15),
            },
            room_adjustment: RoomAdjustment {
                sqft_per_bedroom: dec!(700),
                baths_per_bedroom: dec!(0.75),
                extra_bed: dec!(15),
                missing_bed: dec!(10),
                extra_bath: dec!(20),
                missing_bath: dec!(15),
                min: dec!(-60),
                max: dec!(90),
            },
            labor: LaborGuardrail {
                sqft_per_hour: PerServiceKind {
                    standard: dec!(650),
                    deep: dec!(500),
                },
                hours_multiplier: PerCleanLevel {
                    light: dec!(0.9),
                    standard: dec!(1.0),
                    heavy: dec!(1.2),
                    deep_reset: dec!(1.35),
                },
                floor_factor: dec!(1.3),
                ceiling_factor: dec!(2.6),
            },
            commercial: CommercialRates {
                rate_per_sqft: dec!(0.14),
                restroom_fee: dec!(25),
                type_multiplier: PerBusinessType {
                    office: dec!(1.0),
                    retail: dec!(1.1),
                    clinic: dec!(1.2),
                    restaurant: dec!(1.4),
                },
                frequency_discount: PerFrequency {
                    weekly: dec!(0.10),
                    biweekly: dec!(0.05),
                    monthly: dec!(0),
                },
            },
            travel_fee_bands: vec![
                TravelBand { max_miles: 15, fee: dec!(0) },
                TravelBand { max_miles: 30, fee: dec!(15) },
                TravelBand { max_miles: 50, fee: dec!(30) },
            ],
            after_hours_multiplier: dec!(1.15),
            internal_band_fraction: dec!(0.10),
            add_ons: AddOnCatalog {
                residential: vec![
                    AddOn::new("oven", "Inside oven", dec!(25)),
                    AddOn::new("fridge", "Inside fridge", dec!(25)),
                    AddOn::new("windows", "Interior windows", dec!(35)),
                    AddOn::new("baseboards", "Baseboards detail", dec!(40)),
                    AddOn::new("pet_hair", "Pet hair focus", dec!(25)),
                    AddOn::new("laundry", "Laundry", dec!(20)),
                    AddOn::new("dishes", "Dishes", dec!(20)),
                ],
                commercial: vec![
                    AddOn::new("sanitization", "High-touch sanitization", dec!(35)),
                    AddOn::new("floor_scrub", "Floor machine scrub", dec!(75)),
                    AddOn::new("trash", "Trash haul-out", dec!(25)),
                ],
            },
        }
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Largest finite square footage that can be priced for a kind.
    pub fn max_priced_sqft(&self, kind: ServiceKind) -> Option<u32> {
        self.residential_tiers
            .get(kind)
            .iter()
            .filter(|tier| tier.base.is_some())
            .filter_map(|tier| tier.max_sqft)
            .max()
    }

    /// Maximum serviceable distance (the last travel band).
    pub fn service_radius_miles(&self) -> Option<u32> {
        self.travel_fee_bands.last().map(|band| band.max_miles)
    }

    /// Check every structural invariant the estimators rely on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.currency.trim().is_empty() {
            return Err(CatalogError::Empty("currency"));
        }

        positive("hourly.min", self.hourly.min)?;
        if self.hourly.min > self.hourly.default || self.hourly.default > self.hourly.max {
            return Err(CatalogError::Inconsistent(
                "hourly rates must satisfy min <= default <= max".to_string(),
            ));
        }

        validate_tiers("residential_tiers.standard", &self.residential_tiers.standard)?;
        validate_tiers("residential_tiers.deep", &self.residential_tiers.deep)?;

        for (level, mult) in self.clean_level_multipliers.entries() {
            positive(&format!("clean_level_multipliers.{level}"), *mult)?;
        }

        positive("move_out.standard_mult", self.move_out.standard_mult)?;
        positive("move_out.deep_mult", self.move_out.deep_mult)?;
        non_negative("move_out.min_standard", self.move_out.min_standard)?;
        non_negative("move_out.min_deep", self.move_out.min_deep)?;

        let room = &self.room_adjustment;
        if room.sqft_per_bedroom < Decimal::ONE {
            return Err(CatalogError::Inconsistent(
                "room_adjustment.sqft_per_bedroom must be at least 1".to_string(),
            ));
        }
        positive("room_adjustment.baths_per_bedroom", room.baths_per_bedroom)?;
        if room.baths_per_bedroom > Decimal::ONE {
            return Err(CatalogError::Inconsistent(
                "room_adjustment.baths_per_bedroom must not exceed 1".to_string(),
            ));
        }
        for (name, value) in [
            ("extra_bed", room.extra_bed),
            ("missing_bed", room.missing_bed),
            ("extra_bath", room.extra_bath),
            ("missing_bath", room.missing_bath),
        ] {
            non_negative(&format!("room_adjustment.{name}"), value)?;
        }
        if room.min > room.max {
            return Err(CatalogError::Inconsistent(
                "room_adjustment.min must not exceed room_adjustment.max".to_string(),
            ));
        }

        for (kind, pace) in self.labor.sqft_per_hour.entries() {
            positive(&format!("labor.sqft_per_hour.{kind}"), *pace)?;
        }
        for (level, mult) in self.labor.hours_multiplier.entries() {
            positive(&format!("labor.hours_multiplier.{level}"), *mult)?;
        }
        positive("labor.floor_factor", self.labor.floor_factor)?;
        positive("labor.ceiling_factor", self.labor.ceiling_factor)?;
        if self.labor.floor_factor > self.labor.ceiling_factor {
            return Err(CatalogError::Inconsistent(
                "labor.floor_factor must not exceed labor.ceiling_factor".to_string(),
            ));
        }

        positive("commercial.rate_per_sqft", self.commercial.rate_per_sqft)?;
        non_negative("commercial.restroom_fee", self.commercial.restroom_fee)?;
        for (business_type, mult) in self.commercial.type_multiplier.entries() {
            positive(&format!("commercial.type_multiplier.{business_type}"), *mult)?;
        }
        for (frequency, discount) in self.commercial.frequency_discount.entries() {
            fraction(&format!("commercial.frequency_discount.{frequency}"), *discount)?;
        }

        validate_bands(&self.travel_fee_bands)?;

        positive("after_hours_multiplier", self.after_hours_multiplier)?;
        fraction("internal_band_fraction", self.internal_band_fraction)?;

        for category in [ServiceCategory::Residential, ServiceCategory::Commercial] {
            let mut keys = HashSet::new();
            for add_on in self.add_ons.menu(category) {
                if !keys.insert(add_on.key.as_str()) {
                    return Err(CatalogError::DuplicateAddOn {
                        category,
                        key: add_on.key.clone(),
                    });
                }
                non_negative(&format!("add_ons.{}.price", add_on.key), add_on.price)?;
            }
        }

        Ok(())
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn positive(name: &str, value: Decimal) -> Result<(), CatalogError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(CatalogError::NonPositive {
            name: name.to_string(),
        })
    }
}

fn non_negative(name: &str, value: Decimal) -> Result<(), CatalogError> {
    if value < Decimal::ZERO {
        Err(CatalogError::Inconsistent(format!("{name} must not be negative")))
    } else {
        Ok(())
    }
}

fn fraction(name: &str, value: Decimal) -> Result<(), CatalogError> {
    if value >= Decimal::ZERO && value < Decimal::ONE {
        Ok(())
    } else {
        Err(CatalogError::DiscountOutOfRange {
            name: name.to_string(),
        })
    }
}

fn validate_tiers(table: &'static str, tiers: &[SqftTier]) -> Result<(), CatalogError> {
    let Some((sentinel, priced)) = tiers.split_last() else {
        return Err(CatalogError::Empty(table));
    };
    if sentinel.max_sqft.is_some() || sentinel.base.is_some() {
        return Err(CatalogError::MissingSentinel { table });
    }

    let mut previous: Option<u32> = None;
    for (index, tier) in priced.iter().enumerate() {
        let (Some(max_sqft), Some(base)) = (tier.max_sqft, tier.base) else {
            return Err(CatalogError::MissingSentinel { table });
        };
        positive(&format!("{table}[{index}].base"), base)?;
        if previous.is_some_and(|prev| max_sqft <= prev) {
            return Err(CatalogError::Unsorted { table, index });
        }
        previous = Some(max_sqft);
    }

    Ok(())
}

fn validate_bands(bands: &[TravelBand]) -> Result<(), CatalogError> {
    if bands.is_empty() {
        return Err(CatalogError::Empty("travel_fee_bands"));
    }

    for (index, band) in bands.iter().enumerate() {
        non_negative(&format!("travel_fee_bands[{index}].fee"), band.fee)?;
        if index > 0 && band.max_miles <= bands[index - 1].max_miles {
            return Err(CatalogError::Unsorted {
                table: "travel_fee_bands",
                index,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== standard catalog tests ====================

    #[test]
    fn test_standard_catalog_is_valid() {
        PricingCatalog::standard().validate().unwrap();
    }

    #[test]
    fn test_standard_catalog_limits() {
        let catalog = PricingCatalog::standard();
        assert_eq!(catalog.max_priced_sqft(ServiceKind::Standard), Some(4200));
        assert_eq!(catalog.max_priced_sqft(ServiceKind::Deep), Some(4200));
        assert_eq!(catalog.service_radius_miles(), Some(50));
    }

    #[test]
    fn test_lookups_cover_every_variant() {
        let catalog = PricingCatalog::standard();
        assert_eq!(*catalog.clean_level_multipliers.get(CleanLevel::DeepReset), dec!(1.5));
        assert_eq!(*catalog.commercial.type_multiplier.get(BusinessType::Restaurant), dec!(1.4));
        assert_eq!(*catalog.commercial.frequency_discount.get(Frequency::Weekly), dec!(0.10));
        assert_eq!(catalog.residential_tiers.get(ServiceKind::Deep)[0].base, Some(dec!(220)));
    }

    #[test]
    fn test_json_catalog_loads() {
        let json = serde_json::to_string(&PricingCatalog::standard()).unwrap();
        let loaded = PricingCatalog::from_json_str(&json).unwrap();
        assert_eq!(loaded, PricingCatalog::standard());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PricingCatalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let err = PricingCatalog::from_json_str("{\"currency\": \"USD\"").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    // ==================== move-out tests ====================

    #[test]
    fn test_move_out_floor_and_multiplier() {
        let rule = PricingCatalog::standard().move_out;
        // 120 * 1.35 = 162 < 325 floor
        assert_eq!(rule.apply(ServiceKind::Standard, dec!(120)), dec!(325));
        // 420 * 1.35 = 567
        assert_eq!(rule.apply(ServiceKind::Standard, dec!(420)), dec!(567));
        // 420 * 1.15 = 483
        assert_eq!(rule.apply(ServiceKind::Deep, dec!(420)), dec!(483));
        assert_eq!(rule.apply(ServiceKind::Deep, dec!(220)), dec!(425));
    }

    #[test]
    fn test_labor_hours() {
        let labor = PricingCatalog::standard().labor;
        assert_eq!(labor.hours(1500, ServiceKind::Deep, CleanLevel::Standard), dec!(3));
        assert_eq!(labor.hours(1000, ServiceKind::Deep, CleanLevel::DeepReset), dec!(2.7));
        assert_eq!(labor.hours(0, ServiceKind::Standard, CleanLevel::Heavy), dec!(0));
    }

    #[test]
    fn test_labor_hours_rounded_for_display() {
        use crate::pricing::calculators::round_to_tenth;

        let labor = PricingCatalog::standard().labor;
        let shown = |sqft, kind, level| round_to_tenth(labor.hours(sqft, kind, level)).to_string();
        assert_eq!(shown(1500, ServiceKind::Deep, CleanLevel::Standard), "3");
        assert_eq!(shown(4200, ServiceKind::Deep, CleanLevel::DeepReset), "11.3");
        assert_eq!(shown(100, ServiceKind::Deep, CleanLevel::Standard), "0.2");
        assert_eq!(shown(100, ServiceKind::Standard, CleanLevel::Light), "0.1");
    }

    // ==================== add-on tests ====================

    #[test]
    fn test_price_selection_sums_keys() {
        let add_ons = PricingCatalog::standard().add_ons;
        let total = add_ons
            .price_selection(ServiceCategory::Residential, &["oven", "windows", "dishes"])
            .unwrap();
        assert_eq!(total, dec!(80));
    }

    #[test]
    fn test_price_selection_counts_duplicates_once() {
        let add_ons = PricingCatalog::standard().add_ons;
        let total = add_ons
            .price_selection(ServiceCategory::Commercial, &["trash", "trash"])
            .unwrap();
        assert_eq!(total, dec!(25));
    }

    #[test]
    fn test_price_selection_empty() {
        let add_ons = PricingCatalog::standard().add_ons;
        let keys: [&str; 0] = [];
        assert_eq!(
            add_ons.price_selection(ServiceCategory::Residential, &keys).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_price_selection_rejects_other_category() {
        let add_ons = PricingCatalog::standard().add_ons;
        let err = add_ons
            .price_selection(ServiceCategory::Residential, &["floor_scrub"])
            .unwrap_err();
        assert_eq!(
            err,
            RequestError::UnknownAddOn {
                category: ServiceCategory::Residential,
                key: "floor_scrub".to_string(),
            }
        );
    }

    // ==================== validation tests ====================

    #[test]
    fn test_validate_rejects_unsorted_tiers() {
        let mut catalog = PricingCatalog::standard();
        catalog.residential_tiers.standard.swap(1, 2);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::Unsorted { index: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_sentinel() {
        let mut catalog = PricingCatalog::standard();
        catalog.residential_tiers.deep.pop();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MissingSentinel { table: "residential_tiers.deep" })
        ));
    }

    #[test]
    fn test_validate_rejects_sentinel_in_middle() {
        let mut catalog = PricingCatalog::standard();
        catalog.residential_tiers.standard.insert(1, SqftTier::sentinel());
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MissingSentinel { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_tiers() {
        let mut catalog = PricingCatalog::standard();
        catalog.residential_tiers.standard.clear();
        assert!(matches!(catalog.validate(), Err(CatalogError::Empty(_))));
    }

    #[test]
    fn test_validate_rejects_unsorted_bands() {
        let mut catalog = PricingCatalog::standard();
        catalog.travel_fee_bands[2].max_miles = 30;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::Unsorted { table: "travel_fee_bands", index: 2 })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_bands() {
        let mut catalog = PricingCatalog::standard();
        catalog.travel_fee_bands.clear();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::Empty("travel_fee_bands"))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_multiplier() {
        let mut catalog = PricingCatalog::standard();
        catalog.clean_level_multipliers.heavy = Decimal::ZERO;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("clean_level_multipliers.heavy"));
    }

    #[test]
    fn test_validate_rejects_full_discount() {
        let mut catalog = PricingCatalog::standard();
        catalog.commercial.frequency_discount.weekly = Decimal::ONE;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DiscountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_guardrail() {
        let mut catalog = PricingCatalog::standard();
        catalog.labor.floor_factor = dec!(3);
        assert!(matches!(catalog.validate(), Err(CatalogError::Inconsistent(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_room_ratios() {
        let mut catalog = PricingCatalog::standard();
        catalog.room_adjustment.sqft_per_bedroom = dec!(0.5);
        assert!(matches!(catalog.validate(), Err(CatalogError::Inconsistent(_))));

        let mut catalog = PricingCatalog::standard();
        catalog.room_adjustment.baths_per_bedroom = dec!(1.5);
        assert!(matches!(catalog.validate(), Err(CatalogError::Inconsistent(_))));

        let mut catalog = PricingCatalog::standard();
        catalog.room_adjustment.baths_per_bedroom = dec!(1);
        catalog.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_duplicate_add_on() {
        let mut catalog = PricingCatalog::standard();
        catalog
            .add_ons
            .commercial
            .push(AddOn::new("trash", "Trash again", dec!(10)));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateAddOn { .. })
        ));
    }
}
