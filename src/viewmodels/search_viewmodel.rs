// ============================================================================
// SEARCH VIEWMODEL - Construcción de filtros y búsqueda de canchas
// ============================================================================

use std::collections::BTreeSet;
use url::form_urlencoded;
use crate::models::{Coordinate, FilterState, Venue, PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};
use crate::services::ApiClient;
use crate::utils::constants::{option_label, FIELD_TYPES, SERVICE_OPTIONS, TIME_SLOT_OPTIONS};

/// Traduce FilterState a los parámetros del endpoint de búsqueda.
/// Solo se emiten los campos que se apartan de su valor "sin filtro".
pub struct SearchFilterBuilder;

impl SearchFilterBuilder {
    /// Query string canónica (orden fijo, form-urlencoded). Vacía si no hay filtros.
    pub fn build(filters: &FilterState, query: &str) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());

        if !query.is_empty() {
            params.append_pair("q", query);
        }
        if !filters.location_text.is_empty() {
            params.append_pair("location", &filters.location_text);
        }
        if filters.price_min > PRICE_MIN_DEFAULT {
            params.append_pair("minPrice", &filters.price_min.to_string());
        }
        if filters.price_max < PRICE_MAX_DEFAULT {
            params.append_pair("maxPrice", &filters.price_max.to_string());
        }
        if !filters.categories.is_empty() {
            params.append_pair("fieldType", &join(&filters.categories));
        }
        if !filters.date.is_empty() {
            params.append_pair("date", &filters.date);
        }
        if !filters.time_slots.is_empty() {
            params.append_pair("timeSlot", &join(&filters.time_slots));
        }
        if !filters.services.is_empty() {
            params.append_pair("services", &join(&filters.services));
        }
        if filters.min_rating > 0.0 {
            params.append_pair("minRating", &filters.min_rating.to_string());
        }
        if let Some(radius) = filters.radius_km {
            params.append_pair("radius", &radius.to_string());
        }
        if let Some(origin) = filters.origin {
            params.append_pair("lat", &origin.lat.to_string());
            params.append_pair("lng", &origin.lng.to_string());
        }

        params.finish()
    }

    /// Filtros en su estado base. Única forma de volver a "sin filtros".
    pub fn reset() -> FilterState {
        FilterState::default()
    }

    /// Inverso de `build`: reconstruye filtros y texto libre desde una query string.
    /// Parámetros desconocidos o mal formados se ignoran.
    pub fn parse(query_string: &str) -> (FilterState, String) {
        let mut filters = FilterState::default();
        let mut query = String::new();
        let mut price_min = PRICE_MIN_DEFAULT;
        let mut price_max = PRICE_MAX_DEFAULT;
        let mut radius = None;
        let mut lat = None;
        let mut lng = None;

        for (key, value) in form_urlencoded::parse(query_string.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "q" => query = value.into_owned(),
                "location" => filters.location_text = value.into_owned(),
                "minPrice" => price_min = value.parse().unwrap_or(price_min),
                "maxPrice" => price_max = value.parse().unwrap_or(price_max),
                "fieldType" => filters.categories = split(&value),
                "date" => filters.date = value.into_owned(),
                "timeSlot" => filters.time_slots = split(&value),
                "services" => filters.services = split(&value),
                "minRating" => {
                    if let Ok(v) = value.parse() {
                        filters.set_min_rating(v);
                    }
                }
                "radius" => radius = value.parse::<f64>().ok(),
                "lat" => lat = value.parse::<f64>().ok(),
                "lng" => lng = value.parse::<f64>().ok(),
                other => log::debug!("🔍 [SEARCH] Parámetro ignorado: {}", other),
            }
        }

        // Los setters mantienen las invariantes aunque la URL venga editada a mano
        filters.set_price_range(price_min, price_max);
        let origin = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)).filter(Coordinate::is_finite),
            _ => None,
        };
        if origin.is_some() {
            if let Some(radius) = radius {
                filters.set_radius(radius);
            }
            filters.set_origin(origin);
        }

        (filters, query)
    }
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

fn split(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Chips de filtros activos
// ============================================================================

/// Campo individual que se puede quitar desde un chip
#[derive(Debug, Clone, PartialEq)]
pub enum FilterField {
    Location,
    PriceMin,
    PriceMax,
    Category(String),
    Date,
    TimeSlot(String),
    Service(String),
    MinRating,
    Origin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    pub field: FilterField,
    pub label: String,
}

impl FilterField {
    /// Limpia solo este campo (actualización ordinaria, no un reset)
    pub fn clear(&self, filters: &mut FilterState) {
        match self {
            FilterField::Location => filters.location_text.clear(),
            FilterField::PriceMin => filters.price_min = PRICE_MIN_DEFAULT,
            FilterField::PriceMax => filters.price_max = PRICE_MAX_DEFAULT,
            FilterField::Category(c) => {
                filters.categories.remove(c);
            }
            FilterField::Date => filters.date.clear(),
            FilterField::TimeSlot(s) => {
                filters.time_slots.remove(s);
            }
            FilterField::Service(s) => {
                filters.services.remove(s);
            }
            FilterField::MinRating => filters.min_rating = 0.0,
            FilterField::Origin => {
                filters.origin = None;
                filters.radius_km = None;
            }
        }
    }
}

pub fn active_filters(filters: &FilterState) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if !filters.location_text.is_empty() {
        chips.push(ActiveFilter {
            field: FilterField::Location,
            label: format!("📍 {}", filters.location_text),
        });
    }
    if filters.price_min > PRICE_MIN_DEFAULT {
        chips.push(ActiveFilter {
            field: FilterField::PriceMin,
            label: format!("Desde ${}", filters.price_min),
        });
    }
    if filters.price_max < PRICE_MAX_DEFAULT {
        chips.push(ActiveFilter {
            field: FilterField::PriceMax,
            label: format!("Hasta ${}", filters.price_max),
        });
    }
    for category in &filters.categories {
        chips.push(ActiveFilter {
            field: FilterField::Category(category.clone()),
            label: option_label(FIELD_TYPES, category).to_string(),
        });
    }
    if !filters.date.is_empty() {
        chips.push(ActiveFilter {
            field: FilterField::Date,
            label: format!("📅 {}", filters.date),
        });
    }
    for slot in &filters.time_slots {
        chips.push(ActiveFilter {
            field: FilterField::TimeSlot(slot.clone()),
            label: option_label(TIME_SLOT_OPTIONS, slot).to_string(),
        });
    }
    for service in &filters.services {
        chips.push(ActiveFilter {
            field: FilterField::Service(service.clone()),
            label: option_label(SERVICE_OPTIONS, service).to_string(),
        });
    }
    if filters.min_rating > 0.0 {
        chips.push(ActiveFilter {
            field: FilterField::MinRating,
            label: format!("⭐ {}+", filters.min_rating),
        });
    }
    if filters.origin.is_some() {
        let radius = filters.radius_km.unwrap_or_default();
        chips.push(ActiveFilter {
            field: FilterField::Origin,
            label: format!("Cerca de ti ({} km)", radius),
        });
    }

    chips
}

pub fn has_active_filters(filters: &FilterState) -> bool {
    !active_filters(filters).is_empty()
}

// ============================================================================
// Orden de respuestas
// ============================================================================

/// Numera las búsquedas enviadas. Solo la respuesta del último ticket se aplica,
/// así una respuesta lenta nunca pisa resultados más nuevos.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

// ============================================================================
// ViewModel
// ============================================================================

/// ViewModel de búsqueda - valida, construye la query y delega en ApiClient
pub struct SearchViewModel {
    api_client: ApiClient,
}

impl SearchViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn search(&self, filters: &FilterState, query: &str) -> Result<Vec<Venue>, String> {
        filters.validate().map_err(|e| e.to_string())?;

        let query_string = SearchFilterBuilder::build(filters, query);
        log::info!("🔍 [SEARCH] Buscando canchas: '{}'", query_string);

        let venues = self.api_client.search_venues(&query_string).await?;
        let mappable = venues.iter().filter(|v| v.coordinate.is_some()).count();
        log::info!("✅ [SEARCH] {} canchas ({} con coordenadas)", venues.len(), mappable);
        Ok(venues)
    }

    /// Texto del banner de error. El detalle técnico solo va al log.
    pub fn failure_notice(detail: &str) -> String {
        log::error!("❌ [SEARCH] Error cargando canchas: {}", detail);
        "No se pudieron cargar las canchas. Intenta de nuevo en unos momentos.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filters::DEFAULT_RADIUS_KM;

    fn sample_filters() -> FilterState {
        let mut filters = FilterState::default();
        filters.location_text = "San Fernando".to_string();
        filters.set_price_max(3000);
        filters.set_price_min(100);
        filters.toggle_category("soccer");
        filters.toggle_category("futsal");
        filters.date = "2026-10-20".to_string();
        filters.toggle_time_slot("night");
        filters.toggle_service("parking");
        filters.set_min_rating(4.5);
        filters.set_origin(Some(Coordinate::new(3.4516, -76.532)));
        filters
    }

    #[test]
    fn defaults_and_empty_query_build_empty_string() {
        assert_eq!(SearchFilterBuilder::build(&FilterState::default(), ""), "");
        assert_eq!(SearchFilterBuilder::build(&SearchFilterBuilder::reset(), ""), "");
    }

    #[test]
    fn min_price_and_category_without_max_price() {
        let mut filters = FilterState::default();
        filters.price_min = 100;
        filters.price_max = 5000;
        filters.categories.insert("soccer".to_string());

        let query = SearchFilterBuilder::build(&filters, "");
        assert!(query.contains("minPrice=100&fieldType=soccer"));
        assert!(!query.contains("maxPrice"));
    }

    #[test]
    fn emits_params_in_canonical_order() {
        let query = SearchFilterBuilder::build(&sample_filters(), "la 14");
        assert_eq!(
            query,
            "q=la+14&location=San+Fernando&minPrice=100&maxPrice=3000\
             &fieldType=futsal%2Csoccer&date=2026-10-20&timeSlot=night\
             &services=parking&minRating=4.5&radius=10&lat=3.4516&lng=-76.532"
        );
    }

    #[test]
    fn lat_and_lng_are_emitted_together() {
        let mut filters = FilterState::default();
        filters.set_radius(5.0);
        let without_origin = SearchFilterBuilder::build(&filters, "");
        assert_eq!(without_origin, "radius=5");

        filters.set_origin(Some(Coordinate::new(0.0, 0.0)));
        let with_origin = SearchFilterBuilder::build(&filters, "");
        assert_eq!(with_origin, "radius=5&lat=0&lng=0");
    }

    #[test]
    fn parse_reconstructs_non_default_fields() {
        let cases = vec![
            (FilterState::default(), String::new()),
            (sample_filters(), "cancha sintética".to_string()),
            (
                FilterState { min_rating: 3.0, ..FilterState::default() },
                String::new(),
            ),
            (
                FilterState { date: "2026-12-24".to_string(), price_max: 0, ..FilterState::default() },
                "fútbol & más".to_string(),
            ),
        ];

        for (filters, query) in cases {
            let encoded = SearchFilterBuilder::build(&filters, &query);
            let (parsed, parsed_query) = SearchFilterBuilder::parse(&encoded);
            assert_eq!(parsed, filters, "round trip of '{}'", encoded);
            assert_eq!(parsed_query, query);
        }
    }

    #[test]
    fn parse_ignores_half_origin() {
        let (filters, _) = SearchFilterBuilder::parse("?lat=3.4&radius=2");
        assert_eq!(filters.origin, None);
        // Sin origen el radio no se conserva
        assert_eq!(filters.radius_km, None);
    }

    #[test]
    fn parse_keeps_invariants_of_hand_edited_urls() {
        let (filters, _) = SearchFilterBuilder::parse("?lat=3.45&lng=-76.53");
        assert_eq!(filters.origin, Some(Coordinate::new(3.45, -76.53)));
        assert_eq!(filters.radius_km, Some(DEFAULT_RADIUS_KM));
        assert_eq!(filters.validate(), Ok(()));

        let (filters, _) = SearchFilterBuilder::parse("minPrice=900&maxPrice=100&radius=-2&lat=1&lng=2");
        assert_eq!((filters.price_min, filters.price_max), (100, 900));
        assert_eq!(filters.radius_km, Some(DEFAULT_RADIUS_KM));
        assert_eq!(filters.validate(), Ok(()));

        let (filters, _) = SearchFilterBuilder::parse("minRating=9&lat=NaN&lng=2");
        assert_eq!(filters.min_rating, 5.0);
        assert_eq!(filters.origin, None);
        assert_eq!(filters.validate(), Ok(()));
    }

    #[test]
    fn removing_origin_chip_leaves_no_hidden_radius() {
        let mut filters = FilterState::default();
        filters.set_origin(Some(Coordinate::new(3.4, -76.5)));
        assert_eq!(SearchFilterBuilder::build(&filters, ""), "radius=10&lat=3.4&lng=-76.5");

        FilterField::Origin.clear(&mut filters);
        assert_eq!(SearchFilterBuilder::build(&filters, ""), "");
        assert!(!has_active_filters(&filters));
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn chips_clear_single_fields() {
        let mut filters = sample_filters();
        let chips = active_filters(&filters);
        assert!(chips.iter().any(|c| c.field == FilterField::Category("soccer".to_string())));
        assert!(chips.iter().any(|c| c.label == "Fútbol"));

        FilterField::Category("soccer".to_string()).clear(&mut filters);
        FilterField::MinRating.clear(&mut filters);
        FilterField::Origin.clear(&mut filters);

        assert!(!filters.categories.contains("soccer"));
        assert!(filters.categories.contains("futsal"));
        assert_eq!(filters.min_rating, 0.0);
        assert_eq!(filters.origin, None);
        assert_eq!(filters.radius_km, None);
        assert_eq!(filters.location_text, "San Fernando");
    }

    #[test]
    fn default_filters_have_no_chips() {
        assert!(!has_active_filters(&FilterState::default()));
        assert!(has_active_filters(&sample_filters()));
    }

    #[test]
    fn failure_notice_hides_technical_detail() {
        let notice = SearchViewModel::failure_notice("Parse error: invalid type: map, expected a sequence");
        assert!(!notice.contains("Parse error"));
        assert!(!notice.contains("invalid type"));
        assert_eq!(notice, SearchViewModel::failure_notice("Network error: offline"));
    }

    #[test]
    fn sequencer_only_accepts_latest_ticket() {
        let mut sequencer = SearchSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }
}
