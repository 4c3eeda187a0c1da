//! Ways of obtaining a [`ReferencePoint`] from user input.
//!
//! Address geocoding lives outside this crate; anything that can turn text
//! into a point plugs in through [`LocationResolver`].

use crate::data::model::ReferencePoint;
use crate::error::ResolveError;

/// Turns user input into a reference point.
pub trait LocationResolver {
    fn resolve(&self, input: &str) -> Result<ReferencePoint, ResolveError>;
}

// ---------------------------------------------------------------------------
// District selection list
// ---------------------------------------------------------------------------

/// Seoul's 25 district (구) offices.
static SEOUL_DISTRICT_OFFICES: [(&str, f64, f64); 25] = [
    ("강남구", 37.5172, 127.0473),
    ("강동구", 37.5301, 127.1238),
    ("강북구", 37.6396, 127.0257),
    ("강서구", 37.5509, 126.8495),
    ("관악구", 37.4784, 126.9516),
    ("광진구", 37.5385, 127.0823),
    ("구로구", 37.4955, 126.8875),
    ("금천구", 37.4569, 126.8955),
    ("노원구", 37.6542, 127.0568),
    ("도봉구", 37.6688, 127.0471),
    ("동대문구", 37.5744, 127.0396),
    ("동작구", 37.5124, 126.9393),
    ("마포구", 37.5663, 126.9019),
    ("서대문구", 37.5791, 126.9368),
    ("서초구", 37.4837, 127.0324),
    ("성동구", 37.5634, 127.0369),
    ("성북구", 37.5894, 127.0167),
    ("송파구", 37.5145, 127.1059),
    ("양천구", 37.5170, 126.8665),
    ("영등포구", 37.5264, 126.8962),
    ("용산구", 37.5326, 126.9905),
    ("은평구", 37.6027, 126.9291),
    ("종로구", 37.5735, 126.9790),
    ("중구", 37.5641, 126.9979),
    ("중랑구", 37.6063, 127.0926),
];

/// Fixed lookup from district name to its office location.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictTable;

impl DistrictTable {
    /// District names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        SEOUL_DISTRICT_OFFICES.iter().map(|(name, _, _)| *name)
    }

    /// Look up a district, with or without the 구 suffix.
    pub fn get(&self, district: &str) -> Option<ReferencePoint> {
        let district = district.trim();
        SEOUL_DISTRICT_OFFICES
            .iter()
            .find(|(name, _, _)| {
                *name == district || name.strip_suffix('구') == Some(district)
            })
            .map(|&(_, lat, lon)| ReferencePoint::new(lat, lon))
    }
}

impl LocationResolver for DistrictTable {
    fn resolve(&self, input: &str) -> Result<ReferencePoint, ResolveError> {
        self.get(input)
            .ok_or_else(|| ResolveError::UnknownDistrict(input.trim().to_string()))
    }
}

// ---------------------------------------------------------------------------
// Direct numeric entry
// ---------------------------------------------------------------------------

/// Accepts `"latitude,longitude"` (whitespace allowed around either value).
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateInput;

impl LocationResolver for CoordinateInput {
    fn resolve(&self, input: &str) -> Result<ReferencePoint, ResolveError> {
        parse_coordinates(input)
    }
}

/// Parse `"37.5665, 126.9780"` into a validated reference point.
pub fn parse_coordinates(input: &str) -> Result<ReferencePoint, ResolveError> {
    let unparsable = || ResolveError::Unparsable(input.to_string());

    let (lat, lon) = input.split_once(',').ok_or_else(unparsable)?;
    let latitude: f64 = lat.trim().parse().map_err(|_| unparsable())?;
    let longitude: f64 = lon.trim().parse().map_err(|_| unparsable())?;

    ReferencePoint::new(latitude, longitude)
        .validate()
        .map_err(ResolveError::from)
}
