// Copyright (c) 2026 nztm-geodetic contributors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The coordinates module contains the `GeodeticCoordinate` type returned by
//! the inverse projection, together with functions to truncate degrees to a
//! fixed number of decimal places for comparison.

use angle_sc::{Degrees, Radians, Validate};
use core::fmt;
use unit_sphere::LatLong;

/// The number of decimal places used when comparing degrees.
pub const DECIMAL_PLACES: u32 = 4;

/// The largest power of ten that is a finite `f64`.
const MAX_DECIMAL_PLACES: u32 = 308;

/// Truncate a value toward zero to the given number of decimal places.
///
/// Digits beyond the last decimal place are discarded, they are not rounded.
/// A value that is already exact to the given decimal places, within its
/// floating point representation error, is returned unchanged.
/// A value too large to have any fractional digits at the given decimal
/// places is also returned unchanged.
/// * `value` - the value to truncate.
/// * `places` - the number of decimal places to keep, at most 308.
/// # Examples
/// ```
/// use nztm_geodetic::coordinates::truncate_to_decimal_places;
///
/// assert_eq!(1.23, truncate_to_decimal_places(1.23999, 2));
/// assert_eq!(-172.7, truncate_to_decimal_places(-172.70707, 1));
/// ```
#[must_use]
pub fn truncate_to_decimal_places(value: f64, places: u32) -> f64 {
    let scale = (0..places.min(MAX_DECIMAL_PLACES)).fold(1.0, |s, _| s * 10.0);
    let scaled = value * scale;
    // every f64 of magnitude 2^52 or more is an integer
    if libm::fabs(scaled) >= 1.0 / f64::EPSILON {
        return value;
    }
    let nearest = libm::round(scaled);
    let digits = if libm::fabs(scaled - nearest) <= 4.0 * f64::EPSILON * libm::fabs(scaled) {
        nearest
    } else {
        libm::trunc(scaled)
    };
    digits / scale
}

/// Truncate a value toward zero to `DECIMAL_PLACES` decimal places.
/// * `value` - the value to truncate.
/// # Examples
/// ```
/// use nztm_geodetic::coordinates::truncate_to_4dp;
///
/// assert_eq!(1.2345, truncate_to_4dp(1.23456789));
/// assert_eq!(1.2345, truncate_to_4dp(1.23455));
/// ```
#[must_use]
pub fn truncate_to_4dp(value: f64) -> f64 {
    truncate_to_decimal_places(value, DECIMAL_PLACES)
}

/// A geodetic latitude and longitude, positive North and East.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCoordinate {
    /// The latitude.
    lat: Radians,
    /// The longitude.
    lon: Radians,
}

impl GeodeticCoordinate {
    /// Constructor.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    #[must_use]
    pub const fn new(lat: Radians, lon: Radians) -> Self {
        Self { lat, lon }
    }

    /// The latitude in radians.
    #[must_use]
    pub const fn latitude(&self) -> Radians {
        self.lat
    }

    /// The longitude in radians.
    #[must_use]
    pub const fn longitude(&self) -> Radians {
        self.lon
    }

    /// The latitude in degrees.
    #[must_use]
    pub fn latitude_degrees(&self) -> Degrees {
        Degrees(self.lat.0.to_degrees())
    }

    /// The longitude in degrees.
    #[must_use]
    pub fn longitude_degrees(&self) -> Degrees {
        Degrees(self.lon.0.to_degrees())
    }

    /// The latitude in degrees, truncated to `DECIMAL_PLACES`.
    #[must_use]
    pub fn truncated_latitude_degrees(&self) -> f64 {
        truncate_to_4dp(self.latitude_degrees().0)
    }

    /// The longitude in degrees, truncated to `DECIMAL_PLACES`.
    #[must_use]
    pub fn truncated_longitude_degrees(&self) -> f64 {
        truncate_to_4dp(self.longitude_degrees().0)
    }
}

impl Validate for GeodeticCoordinate {
    /// Test whether a `GeodeticCoordinate` is valid.
    /// Whether both values are finite and -90° <= `latitude` <= 90°.
    fn is_valid(&self) -> bool {
        self.lon.0.is_finite()
            && (-core::f64::consts::FRAC_PI_2..=core::f64::consts::FRAC_PI_2).contains(&self.lat.0)
    }
}

/// Full precision degrees: use `truncated_latitude_degrees` and
/// `truncated_longitude_degrees` for comparisons.
impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            self.latitude_degrees().0,
            self.longitude_degrees().0
        )
    }
}

impl From<GeodeticCoordinate> for LatLong {
    fn from(a: GeodeticCoordinate) -> Self {
        Self::new(a.latitude_degrees(), a.longitude_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_4dp() {
        assert_eq!(1.2345, truncate_to_4dp(1.23456789));
        // truncated, not rounded
        assert_eq!(1.2345, truncate_to_4dp(1.23455));
        assert_eq!(1.2345, truncate_to_4dp(1.23459999));
        // toward zero
        assert_eq!(-43.5245, truncate_to_4dp(-43.52458002901122));
        assert_eq!(172.707, truncate_to_4dp(172.70707068390118));

        // already exact values are unchanged
        assert_eq!(1.2345, truncate_to_4dp(1.2345));
        assert_eq!(-41.2847, truncate_to_4dp(-41.2847));
        assert_eq!(0.0, truncate_to_4dp(0.0));
        assert_eq!(0.0, truncate_to_4dp(0.00009));

        assert!(truncate_to_4dp(f64::NAN).is_nan());
    }

    #[test]
    fn test_truncate_to_decimal_places() {
        assert_eq!(173.0, truncate_to_decimal_places(173.999, 0));
        assert_eq!(0.123_456_7, truncate_to_decimal_places(0.123_456_789, 7));
    }

    #[test]
    fn test_truncate_large_values_and_places() {
        // no fractional digits to discard
        assert_eq!(1.0e305, truncate_to_4dp(1.0e305));
        assert_eq!(-1.0e305, truncate_to_4dp(-1.0e305));
        assert_eq!(f64::MAX, truncate_to_4dp(f64::MAX));
        assert_eq!(4_503_599_627_370_497.0, truncate_to_4dp(4_503_599_627_370_497.0));
        assert_eq!(f64::INFINITY, truncate_to_4dp(f64::INFINITY));

        // places beyond the range of f64
        assert_eq!(1.5, truncate_to_decimal_places(1.5, 309));
        assert_eq!(1.5, truncate_to_decimal_places(1.5, 400));
        assert_eq!(0.0, truncate_to_decimal_places(0.0, 400));
        assert_eq!(-43.5245, truncate_to_decimal_places(-43.5245, u32::MAX));
        assert!(truncate_to_decimal_places(f64::NAN, 400).is_nan());
    }

    #[test]
    fn test_geodetic_coordinate_degrees() {
        let lat = Radians(-0.759_655_060_374_453);
        let lon = Radians(3.014_330_237_469_372);
        let a = GeodeticCoordinate::new(lat, lon);

        assert_eq!(lat, a.latitude());
        assert_eq!(lon, a.longitude());
        assert_eq!(lat.0.to_degrees(), a.latitude_degrees().0);
        assert_eq!(lon.0.to_degrees(), a.longitude_degrees().0);
        assert_eq!(
            truncate_to_4dp(lat.0.to_degrees()),
            a.truncated_latitude_degrees()
        );
        assert_eq!(
            truncate_to_4dp(lon.0.to_degrees()),
            a.truncated_longitude_degrees()
        );
    }

    #[test]
    fn test_geodetic_coordinate_display() {
        let a = GeodeticCoordinate::new(Radians(0.0), Radians(0.0));
        assert_eq!("0, 0", a.to_string());

        // Display is not truncated
        let lat = Radians(-0.759_655_060_374_453);
        let lon = Radians(3.014_330_237_469_372);
        let a = GeodeticCoordinate::new(lat, lon);
        let expected = format!("{}, {}", lat.0.to_degrees(), lon.0.to_degrees());
        assert_eq!(expected, a.to_string());
        assert_ne!(
            format!(
                "{}, {}",
                a.truncated_latitude_degrees(),
                a.truncated_longitude_degrees()
            ),
            a.to_string()
        );
    }

    #[test]
    fn test_geodetic_coordinate_validate() {
        let a = GeodeticCoordinate::new(Radians(-0.76), Radians(3.01));
        assert!(a.is_valid());

        let a = GeodeticCoordinate::new(Radians(core::f64::consts::FRAC_PI_2), Radians(0.0));
        assert!(a.is_valid());

        let a = GeodeticCoordinate::new(Radians(1.6), Radians(0.0));
        assert!(!a.is_valid());

        let a = GeodeticCoordinate::new(Radians(f64::NAN), Radians(0.0));
        assert!(!a.is_valid());

        let a = GeodeticCoordinate::new(Radians(0.0), Radians(f64::INFINITY));
        assert!(!a.is_valid());
    }

    #[test]
    fn test_geodetic_coordinate_into_lat_long() {
        let a = GeodeticCoordinate::new(
            Radians(-0.759_655_060_374_453),
            Radians(3.014_330_237_469_372),
        );
        let lat_long = LatLong::from(a);

        assert_eq!(a.latitude_degrees(), lat_long.lat());
        assert_eq!(a.longitude_degrees(), lat_long.lon());
    }

    #[test]
    fn test_geodetic_coordinate_traits() {
        let a = GeodeticCoordinate::new(Radians(-0.76), Radians(3.01));
        let b = a;
        assert!(b == a);

        println!("GeodeticCoordinate: {:?}", a);
    }
}
