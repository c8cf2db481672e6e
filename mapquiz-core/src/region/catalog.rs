//! The built-in landmark list and JSON config loading.

use itertools::Itertools;

use crate::error::ConfigError;
use crate::region::Region;

/// The five playable campus landmarks. Bookstein Hall is the only region
/// with a width/north/south extent (and a 45-degree rotation); the rest are
/// radial.
pub fn builtin() -> Vec<Region> {
    vec![
        Region {
            name: "Bookstein Hall".into(),
            lat: 34.24198950283919,
            lng: -118.5308086727663,
            radius: Some(0.0005),
            width: 0.0005,
            north: 0.0006,
            south: 0.0008,
            rotation: 45.,
        },
        Region {
            name: "Campus Store".into(),
            lat: 34.23740201268529,
            lng: -118.52817288070287,
            radius: Some(0.0004),
            width: 0.,
            north: 0.,
            south: 0.,
            rotation: 0.,
        },
        Region {
            name: "Jacaranda Hall".into(),
            lat: 34.24148256185818,
            lng: -118.528565000144,
            radius: Some(0.0006),
            width: 0.,
            north: 0.,
            south: 0.,
            rotation: 0.,
        },
        Region {
            name: "Manzanita Hall".into(),
            lat: 34.237301,
            lng: -118.530070,
            radius: Some(0.0005),
            width: 0.,
            north: 0.,
            south: 0.,
            rotation: 0.,
        },
        Region {
            name: "Citrus Hall".into(),
            lat: 34.23904251281768,
            lng: -118.52800668279416,
            radius: Some(0.0004),
            width: 0.,
            north: 0.,
            south: 0.,
            rotation: 0.,
        },
    ]
}

/// Parse and validate a JSON region list. Fails fast on the first defect.
pub fn parse(json: &str) -> Result<Vec<Region>, ConfigError> {
    let regions: Vec<Region> = serde_json::from_str(json)?;
    validate(&regions)?;
    Ok(regions)
}

pub fn validate(regions: &[Region]) -> Result<(), ConfigError> {
    if regions.is_empty() {
        return Err(ConfigError::Empty);
    }
    for (index, region) in regions.iter().enumerate() {
        region.validate(index)?;
    }
    let dupes: Vec<String> = regions
        .iter()
        .map(|r| r.name.clone())
        .duplicates()
        .collect();
    if !dupes.is_empty() {
        return Err(ConfigError::DuplicateNames(dupes));
    }
    Ok(())
}
