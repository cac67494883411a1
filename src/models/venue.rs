use serde::Deserialize;
use serde_json::Value;
use super::coordinate::Coordinate;

/// Franja horaria de una cancha ("18:00" - "19:00")
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "inicio", alias = "start", default)]
    pub start: String,
    #[serde(rename = "fin", alias = "end", default)]
    pub end: String,
}

/// Cancha reservable. Snapshot de solo lectura devuelto por el backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "VenueRecord")]
pub struct Venue {
    pub id: String,
    pub name: String,
    /// `None` si el backend no envía coordenadas válidas: la cancha
    /// aparece en la lista pero no en el mapa.
    pub coordinate: Option<Coordinate>,
    pub address: String,
    pub rating: Option<f64>,
    pub price_per_hour: f64,
    pub images: Vec<String>,
    pub time_slots: Vec<TimeSlot>,
}

impl Venue {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn first_time_slot(&self) -> Option<&TimeSlot> {
        self.time_slots.first()
    }

    pub fn display_address(&self) -> &str {
        if self.address.trim().is_empty() {
            "Dirección no disponible"
        } else {
            &self.address
        }
    }

    pub fn detail_path(&self) -> String {
        format!("/canchas/{}", self.id)
    }
}

// ============================================================================
// Formato de red del backend (campos en español)
// ============================================================================

#[derive(Deserialize)]
struct VenueRecord {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(rename = "nombre", alias = "name", default)]
    name: String,
    #[serde(rename = "ubicacion", default)]
    location: Option<LocationRecord>,
    #[serde(rename = "calificacion", default)]
    rating: Option<f64>,
    #[serde(rename = "precioHora", default)]
    price_per_hour: f64,
    #[serde(rename = "imagenes", default)]
    images: Vec<String>,
    #[serde(rename = "horarios", default)]
    time_slots: Vec<TimeSlot>,
}

#[derive(Deserialize, Default)]
struct LocationRecord {
    #[serde(rename = "direccion", default)]
    address: Option<String>,
    #[serde(rename = "coordenadas", default)]
    coordinates: Option<CoordinatesRecord>,
}

// Valores crudos: la validación numérica se hace en Coordinate::from_json_pair
#[derive(Deserialize, Default)]
struct CoordinatesRecord {
    #[serde(default)]
    lat: Option<Value>,
    #[serde(default)]
    lng: Option<Value>,
}

impl From<VenueRecord> for Venue {
    fn from(record: VenueRecord) -> Self {
        let location = record.location.unwrap_or_default();
        let coordinate = location
            .coordinates
            .as_ref()
            .and_then(|c| Coordinate::from_json_pair(c.lat.as_ref(), c.lng.as_ref()));

        Self {
            id: record.id,
            name: record.name,
            coordinate,
            address: location.address.unwrap_or_default(),
            rating: record.rating,
            price_per_hour: record.price_per_hour,
            images: record.images,
            time_slots: record.time_slots,
        }
    }
}

/// Respuesta del endpoint de búsqueda: lista directa o envuelta en `data`
#[derive(Deserialize)]
#[serde(untagged)]
pub enum VenueListResponse {
    List(Vec<Venue>),
    Wrapped { data: Vec<Venue> },
}

impl VenueListResponse {
    pub fn into_venues(self) -> Vec<Venue> {
        match self {
            VenueListResponse::List(venues) => venues,
            VenueListResponse::Wrapped { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{
            "_id": "c1",
            "nombre": "Cancha El Templete",
            "ubicacion": {
                "direccion": "Cra 5 #10-20",
                "coordenadas": { "lat": 3.45, "lng": -76.53 }
            },
            "calificacion": 4.5,
            "precioHora": 80000,
            "imagenes": ["https://img/1.jpg", "https://img/2.jpg"],
            "horarios": [{ "inicio": "18:00", "fin": "19:00" }]
        }"#;

        let venue: Venue = serde_json::from_str(json).unwrap();
        assert_eq!(venue.id, "c1");
        assert_eq!(venue.name, "Cancha El Templete");
        assert_eq!(venue.coordinate, Some(Coordinate::new(3.45, -76.53)));
        assert_eq!(venue.address, "Cra 5 #10-20");
        assert_eq!(venue.rating, Some(4.5));
        assert_eq!(venue.price_per_hour, 80000.0);
        assert_eq!(venue.first_image(), Some("https://img/1.jpg"));
        assert_eq!(venue.first_time_slot().map(|s| s.start.as_str()), Some("18:00"));
        assert_eq!(venue.detail_path(), "/canchas/c1");
    }

    #[test]
    fn malformed_coordinate_keeps_venue_without_position() {
        let json = r#"[
            { "_id": "a", "nombre": "A", "ubicacion": { "coordenadas": { "lat": "3.4", "lng": -76.5 } } },
            { "_id": "b", "nombre": "B", "ubicacion": { "direccion": "Calle 1" } },
            { "_id": "c", "nombre": "C" }
        ]"#;

        let venues: Vec<Venue> = serde_json::from_str(json).unwrap();
        assert_eq!(venues.len(), 3);
        assert!(venues.iter().all(|v| v.coordinate.is_none()));
        assert_eq!(venues[1].address, "Calle 1");
        assert_eq!(venues[2].display_address(), "Dirección no disponible");
        assert!(venues[2].images.is_empty());
    }

    #[test]
    fn accepts_wrapped_response() {
        let json = r#"{ "data": [{ "_id": "x", "nombre": "X", "precioHora": 10 }] }"#;
        let response: VenueListResponse = serde_json::from_str(json).unwrap();
        let venues = response.into_venues();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].price_per_hour, 10.0);
        assert_eq!(venues[0].rating, None);
    }
}
