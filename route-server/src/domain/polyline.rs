//! Encoded-polyline codec.
//!
//! Implements the Google Maps polyline algorithm: each coordinate is a
//! latitude/longitude delta pair, zig-zag signed, split into 5-bit groups
//! (low group first), each group offset by 63 into printable ASCII, with
//! `0x20` as the continuation bit. Deltas are scaled by 1e5 and accumulated
//! onto a running position.

use crate::domain::GeoPoint;

/// Error returned when decoding a malformed polyline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    /// The string ended partway through a coordinate value.
    #[error("polyline truncated at byte {index}")]
    Truncated { index: usize },

    /// A byte below the 63 offset appeared in the stream.
    #[error("invalid polyline byte {byte:#04x} at index {index}")]
    InvalidByte { byte: u8, index: usize },

    /// A coordinate value ran past the width of the accumulator.
    #[error("polyline value overflow at byte {index}")]
    Overflow { index: usize },
}

/// Decode an encoded polyline into an ordered sequence of points.
///
/// Decoding is deterministic and exactly inverts [`encode`] for inputs with
/// five decimal places of precision. A string that ends mid-value (after a
/// latitude but before its longitude, or inside a varint) is an error, never
/// a silent partial point.
///
/// # Examples
///
/// ```
/// use route_server::domain::decode;
///
/// let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!((points[0].lat, points[0].lng), (38.5, -120.2));
/// ```
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (dlat, next) = decode_value(bytes, index)?;
        let (dlng, next) = decode_value(bytes, next)?;
        index = next;

        lat += dlat;
        lng += dlng;
        points.push(GeoPoint::new(lat as f64 * 1e-5, lng as f64 * 1e-5));
    }

    Ok(points)
}

/// Decode one zig-zag varint starting at `index`.
///
/// Returns the signed value and the index of the next unread byte.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut index = start;
    let mut shift = 0u32;
    let mut result: i64 = 0;

    loop {
        let &byte = bytes
            .get(index)
            .ok_or(PolylineError::Truncated { index })?;
        if byte < 63 {
            return Err(PolylineError::InvalidByte { byte, index });
        }
        if shift >= 64 {
            return Err(PolylineError::Overflow { index });
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;

        if chunk < 0x20 {
            break;
        }
    }

    // Undo the zig-zag: low bit is the sign.
    let value = if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    };

    Ok((value, index))
}

/// Encode a sequence of points at 1e-5 precision.
///
/// Coordinates are rounded to five decimal places before delta encoding, so
/// `decode(encode(points))` reproduces `points` exactly when the inputs
/// already carry at most five decimals.
pub fn encode(points: &[GeoPoint]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.lat * 1e5).round() as i64;
        let lng = (point.lng * 1e5).round() as i64;

        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);

        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

/// Encode one signed value as a zig-zag varint.
fn encode_value(value: i64, out: &mut String) {
    let mut v = if value < 0 { !(value << 1) } else { value << 1 };

    while v >= 0x20 {
        out.push(((0x20 | (v & 0x1f)) + 63) as u8 as char);
        v >>= 5;
    }
    out.push((v + 63) as u8 as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_canonical_example() {
        // The worked example from the polyline algorithm documentation.
        let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!((points[0].lat, points[0].lng), (38.5, -120.2));
        assert_eq!((points[1].lat, points[1].lng), (40.7, -120.95));
        assert_eq!((points[2].lat, points[2].lng), (43.252, -126.453));
    }

    #[test]
    fn encode_canonical_example() {
        let points = vec![
            GeoPoint::new(38.5, -120.2),
            GeoPoint::new(40.7, -120.95),
            GeoPoint::new(43.252, -126.453),
        ];

        assert_eq!(encode(&points), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn empty_string_decodes_to_no_points() {
        assert_eq!(decode("").unwrap(), vec![]);
    }

    #[test]
    fn single_point() {
        let points = vec![GeoPoint::new(51.5074, -0.1278)];
        let decoded = decode(&encode(&points)).unwrap();
        assert_eq!(decoded, points);
    }

    #[test]
    fn truncated_mid_varint_is_an_error() {
        // "_p~iF" is a complete latitude; "~p" starts a longitude varint
        // whose continuation bit promises more bytes.
        let err = decode("_p~iF~p").unwrap_err();
        assert!(matches!(err, PolylineError::Truncated { .. }));
    }

    #[test]
    fn missing_longitude_is_an_error() {
        // A lone complete latitude with no longitude at all.
        let err = decode("_p~iF").unwrap_err();
        assert_eq!(err, PolylineError::Truncated { index: 5 });
    }

    #[test]
    fn byte_below_offset_is_an_error() {
        let err = decode("_p~iF~ps|U !").unwrap_err();
        assert!(matches!(err, PolylineError::InvalidByte { .. }));
    }

    #[test]
    fn negative_coordinates_roundtrip() {
        let points = vec![
            GeoPoint::new(-33.86882, 151.20929),
            GeoPoint::new(-37.81363, 144.96306),
        ];
        assert_eq!(decode(&encode(&points)).unwrap(), points);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Points on the 1e-5 grid, the precision the codec preserves.
    fn grid_point() -> impl Strategy<Value = GeoPoint> {
        (-9_000_000i64..=9_000_000, -18_000_000i64..=18_000_000)
            .prop_map(|(lat, lng)| GeoPoint::new(lat as f64 * 1e-5, lng as f64 * 1e-5))
    }

    proptest! {
        /// Round-trip law: encode then decode reproduces the input exactly.
        #[test]
        fn roundtrip(points in prop::collection::vec(grid_point(), 0..50)) {
            let decoded = decode(&encode(&points)).unwrap();

            prop_assert_eq!(decoded.len(), points.len());
            for (a, b) in decoded.iter().zip(points.iter()) {
                // Compare on the integer grid to dodge float representation.
                prop_assert_eq!((a.lat * 1e5).round() as i64, (b.lat * 1e5).round() as i64);
                prop_assert_eq!((a.lng * 1e5).round() as i64, (b.lng * 1e5).round() as i64);
            }
        }

        /// Every encoded byte stays in the printable range the algorithm produces.
        #[test]
        fn encoded_bytes_in_range(points in prop::collection::vec(grid_point(), 0..50)) {
            for byte in encode(&points).bytes() {
                prop_assert!((63..=126).contains(&byte));
            }
        }

        /// Decoding never panics on arbitrary ASCII input.
        #[test]
        fn decode_total_on_ascii(s in "[\\x3f-\\x7e]{0,40}") {
            let _ = decode(&s);
        }
    }
}
