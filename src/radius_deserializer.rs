use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// A trigger radius in meters, rejecting NaN, infinite and non-positive values.
pub fn deserialize_radius<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let radius_m = f64::deserialize(deserializer)?;
    if !(radius_m.is_finite() && radius_m > 0.0) {
        return Err(Error::custom(format!("invalid radius: {}, must be a positive number of meters", radius_m)));
    }
    Ok(radius_m)
}

pub fn deserialize_optional_radius<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Radius(#[serde(deserialize_with = "deserialize_radius")] f64);

    Ok(Option::<Radius>::deserialize(deserializer)?.map(|Radius(radius_m)| radius_m))
}
