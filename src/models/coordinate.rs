use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Par de coordenadas geográficas (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construye una coordenada solo si ambos campos son números finitos.
    /// Strings, null o valores ausentes producen `None`.
    pub fn from_json_pair(lat: Option<&Value>, lng: Option<&Value>) -> Option<Self> {
        let lat = lat?.as_f64().filter(|v| v.is_finite())?;
        let lng = lng?.as_f64().filter(|v| v.is_finite())?;
        Some(Self { lat, lng })
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numeric_pair() {
        let lat = json!(3.45);
        let lng = json!(-76.53);
        assert_eq!(
            Coordinate::from_json_pair(Some(&lat), Some(&lng)),
            Some(Coordinate::new(3.45, -76.53))
        );
    }

    #[test]
    fn rejects_missing_or_non_numeric_fields() {
        let lat = json!(3.45);
        let text = json!("-76.53");
        let null = Value::Null;

        assert_eq!(Coordinate::from_json_pair(Some(&lat), None), None);
        assert_eq!(Coordinate::from_json_pair(None, Some(&lat)), None);
        assert_eq!(Coordinate::from_json_pair(Some(&lat), Some(&text)), None);
        assert_eq!(Coordinate::from_json_pair(Some(&null), Some(&lat)), None);
    }

    #[test]
    fn integer_values_are_numeric() {
        let lat = json!(1);
        let lng = json!(2);
        assert_eq!(
            Coordinate::from_json_pair(Some(&lat), Some(&lng)),
            Some(Coordinate::new(1.0, 2.0))
        );
    }
}
