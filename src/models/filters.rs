use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use super::coordinate::Coordinate;

/// Precio mínimo "sin filtro"
pub const PRICE_MIN_DEFAULT: u32 = 0;
/// Precio máximo "sin filtro"
pub const PRICE_MAX_DEFAULT: u32 = 5000;
/// Radio usado cuando se fija un origen sin radio explícito
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Filtros activos de la búsqueda de canchas (uno por sesión de búsqueda)
///
/// Invariantes: `price_min <= price_max` y `radius_km > 0` cuando hay `origin`.
/// Los setters las mantienen; `validate` sirve para estados construidos a mano.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub location_text: String,
    pub price_min: u32,
    pub price_max: u32,
    pub categories: BTreeSet<String>,
    pub date: String,
    pub time_slots: BTreeSet<String>,
    pub services: BTreeSet<String>,
    pub min_rating: f64,
    // El radio solo tiene sentido con origen: ninguno de los dos se persiste
    #[serde(skip)]
    pub radius_km: Option<f64>,
    #[serde(skip)]
    pub origin: Option<Coordinate>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            location_text: String::new(),
            price_min: PRICE_MIN_DEFAULT,
            price_max: PRICE_MAX_DEFAULT,
            categories: BTreeSet::new(),
            date: String::new(),
            time_slots: BTreeSet::new(),
            services: BTreeSet::new(),
            min_rating: 0.0,
            radius_km: None,
            origin: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    InvalidPriceRange { min: u32, max: u32 },
    InvalidRadius,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidPriceRange { min, max } => {
                write!(f, "El precio mínimo ({}) no puede superar al máximo ({})", min, max)
            }
            FilterError::InvalidRadius => {
                write!(f, "El radio de búsqueda debe ser mayor que 0 km")
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl FilterState {
    pub fn set_price_min(&mut self, value: u32) {
        self.price_min = value.min(self.price_max);
    }

    pub fn set_price_max(&mut self, value: u32) {
        self.price_max = value.max(self.price_min);
    }

    /// Fija ambos extremos a la vez; si llegan invertidos se ordenan
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.price_min = min.min(max);
        self.price_max = min.max(max);
    }

    /// Precios escritos en el formulario; vacío o inválido vuelve al valor "sin filtro"
    pub fn set_price_text(&mut self, min: &str, max: &str) {
        let min = min.trim().parse().unwrap_or(PRICE_MIN_DEFAULT);
        let max = max.trim().parse().unwrap_or(PRICE_MAX_DEFAULT);
        self.set_price_range(min, max);
    }

    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_time_slot(&mut self, slot: &str) {
        toggle(&mut self.time_slots, slot);
    }

    pub fn toggle_service(&mut self, service: &str) {
        toggle(&mut self.services, service);
    }

    pub fn set_min_rating(&mut self, rating: f64) {
        self.min_rating = if rating.is_finite() { rating.clamp(0.0, 5.0) } else { 0.0 };
    }

    /// Radios no positivos se ignoran
    pub fn set_radius(&mut self, radius_km: f64) {
        if radius_km.is_finite() && radius_km > 0.0 {
            self.radius_km = Some(radius_km);
        }
    }

    /// Fija (o quita) el origen de la búsqueda por radio
    pub fn set_origin(&mut self, origin: Option<Coordinate>) {
        if origin.is_some() && !self.radius_km.map_or(false, |r| r > 0.0) {
            self.radius_km = Some(DEFAULT_RADIUS_KM);
        }
        self.origin = origin;
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.price_min > self.price_max {
            return Err(FilterError::InvalidPriceRange {
                min: self.price_min,
                max: self.price_max,
            });
        }
        if self.origin.is_some() && !self.radius_km.map_or(false, |r| r > 0.0) {
            return Err(FilterError::InvalidRadius);
        }
        Ok(())
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_setters_keep_range_ordered() {
        let mut filters = FilterState::default();
        filters.set_price_max(300);
        filters.set_price_min(800);
        assert_eq!(filters.price_min, 300);

        filters.set_price_max(100);
        assert_eq!(filters.price_max, 300);
        assert!(filters.validate().is_ok());
    }

    #[test]
    fn origin_adopts_default_radius() {
        let mut filters = FilterState::default();
        filters.set_origin(Some(Coordinate::new(3.4, -76.5)));
        assert_eq!(filters.radius_km, Some(DEFAULT_RADIUS_KM));

        filters.set_radius(25.0);
        filters.set_origin(Some(Coordinate::new(3.5, -76.6)));
        assert_eq!(filters.radius_km, Some(25.0));
    }

    #[test]
    fn price_range_orders_inverted_bounds() {
        let mut filters = FilterState::default();
        filters.set_price_range(900, 100);
        assert_eq!((filters.price_min, filters.price_max), (100, 900));

        // Un mínimo previo no recorta el máximo nuevo
        filters.set_price_range(100, 3000);
        assert_eq!((filters.price_min, filters.price_max), (100, 3000));
        assert_eq!(filters.validate(), Ok(()));
    }

    #[test]
    fn typed_prices_are_taken_whole() {
        let mut filters = FilterState::default();
        filters.set_price_min(100);

        // El texto completo se aplica de una vez, sin recortes por tecla
        filters.set_price_text("100", "3000");
        assert_eq!((filters.price_min, filters.price_max), (100, 3000));

        filters.set_price_text("", "abc");
        assert_eq!((filters.price_min, filters.price_max), (PRICE_MIN_DEFAULT, PRICE_MAX_DEFAULT));
    }

    #[test]
    fn non_positive_radius_is_ignored() {
        let mut filters = FilterState::default();
        filters.set_radius(0.0);
        filters.set_radius(-3.0);
        assert_eq!(filters.radius_km, None);
    }

    #[test]
    fn validate_reports_broken_invariants() {
        let filters = FilterState { price_min: 900, price_max: 100, ..FilterState::default() };
        assert_eq!(
            filters.validate(),
            Err(FilterError::InvalidPriceRange { min: 900, max: 100 })
        );

        let filters = FilterState {
            origin: Some(Coordinate::new(0.0, 0.0)),
            radius_km: None,
            ..FilterState::default()
        };
        assert_eq!(filters.validate(), Err(FilterError::InvalidRadius));
    }

    #[test]
    fn toggles_add_and_remove() {
        let mut filters = FilterState::default();
        filters.toggle_category("soccer");
        filters.toggle_service("parking");
        assert!(filters.categories.contains("soccer"));
        filters.toggle_category("soccer");
        assert!(filters.categories.is_empty());
        assert!(filters.services.contains("parking"));
    }

    #[test]
    fn origin_is_not_persisted() {
        let mut filters = FilterState::default();
        filters.set_origin(Some(Coordinate::new(1.0, 2.0)));
        let json = serde_json::to_string(&filters).unwrap();
        let restored: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.origin, None);
        assert_eq!(restored.radius_km, None);
        assert_eq!(restored.validate(), Ok(()));
    }
}
