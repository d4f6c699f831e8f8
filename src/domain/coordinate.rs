// Coordinate domain model
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude must be between -90 and 90, got {0}")]
    Latitude(f64),
    #[error("longitude must be between -180 and 180, got {0}")]
    Longitude(f64),
}

/// A validated geographic position. Compared and hashed by exact value so it
/// can key the upstream caches.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }

        Ok(Self {
            latitude: positive_zero(latitude),
            longitude: positive_zero(longitude),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

// -0.0 and 0.0 must share a cache key
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accepts_range_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(90.5, 0.0).unwrap_err(),
            CoordinateError::Latitude(90.5)
        );
        assert_eq!(
            Coordinate::new(0.0, -180.1).unwrap_err(),
            CoordinateError::Longitude(-180.1)
        );
    }

    #[test]
    fn test_rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 10.0).is_err());
        assert!(Coordinate::new(10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_negative_zero_shares_key() {
        let a = Coordinate::new(-0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, -0.0).unwrap();
        assert_eq!(a, b);

        let keys: HashSet<Coordinate> = [a, b].into_iter().collect();
        assert_eq!(keys.len(), 1);
    }
}
