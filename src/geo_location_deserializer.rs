use crate::domain::GeoLocation;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.latitude >= -90.0 && inner.latitude <= 90.0) {
            return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(inner.longitude >= -180.0 && inner.longitude <= 180.0) {
            return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        Ok(GeoLocation {
            latitude: inner.latitude,
            longitude: inner.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn deserializes_a_valid_location() -> Result<(), serde_json::Error> {
        let location: GeoLocation = serde_json::from_str(r#"{ "latitude": 37.5665, "longitude": 126.978 }"#)?;

        assert_eq!(location, GeoLocation::new(37.5665, 126.978));
        Ok(())
    }

    #[rstest]
    #[case(r#"{ "latitude": 90.5, "longitude": 0.0 }"#, "invalid latitude: 90.5, must be between -90 and 90")]
    #[case(r#"{ "latitude": -91.0, "longitude": 0.0 }"#, "invalid latitude: -91, must be between -90 and 90")]
    #[case(r#"{ "latitude": 0.0, "longitude": 180.5 }"#, "invalid longitude: 180.5, must be between -180 and 180")]
    #[case(r#"{ "latitude": 0.0, "longitude": -200.0 }"#, "invalid longitude: -200, must be between -180 and 180")]
    fn rejects_coordinates_out_of_range(#[case] json: &str, #[case] expected: &str) {
        let result = serde_json::from_str::<GeoLocation>(json);

        assert!(result.unwrap_err().to_string().starts_with(expected));
    }
}
