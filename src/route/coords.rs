//! Route coordinate string parsing.

use crate::http::error::GatewayError;

/// Parse a `lon,lat;lon,lat;...` string into ordered (longitude, latitude)
/// pairs.
///
/// Every segment must hold exactly two tokens, each a finite float. A single
/// bad segment invalidates the whole input; there is no partial acceptance.
/// The parsed floats are used for validation only — the raw string is what
/// gets forwarded upstream, so no precision is lost to re-serialization.
pub fn parse_coords(input: &str) -> Result<Vec<(f64, f64)>, GatewayError> {
    let mut pairs = Vec::new();

    for segment in input.split(';') {
        let mut tokens = segment.split(',');
        let (Some(lon), Some(lat), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(GatewayError::InvalidCoordinateFormat);
        };

        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| GatewayError::InvalidCoordinateFormat)?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GatewayError::InvalidCoordinateFormat)?;

        // f64::from_str accepts "inf" and "NaN"; those are not coordinates.
        if !lon.is_finite() || !lat.is_finite() {
            return Err(GatewayError::InvalidCoordinateFormat);
        }

        pairs.push((lon, lat));
    }

    Ok(pairs)
}
