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

//! nztm-geodetic
//!
//! A library for converting
//! [New Zealand Transverse Mercator 2000](https://www.linz.govt.nz/guidance/geodetic-system/coordinate-systems-used-new-zealand/projections/new-zealand-transverse-mercator-2000-nztm2000)
//! (NZTM) grid coordinates to latitudes and longitudes on the GRS 80 ellipsoid
//! of the New Zealand Geodetic Datum 2000.
//!
//! ## Transverse Mercator inverse
//!
//! A Transverse Mercator grid coordinate is an easting and a northing, in
//! projection units, offset by a false easting and false northing so that all
//! values in the area of use are positive.
//!
//! The conversion to latitude and longitude uses Redfearn's formulation as
//! expressed in the
//! [GDA Technical Manual](https://www.icsm.gov.au/datum/gda2020-and-gda94-technical-manuals):
//!
//! - the northing is converted to a meridional arc length (Helmert's formula);
//! - the arc length is inverted to give the foot point latitude;
//! - the foot point latitude and the central meridian are corrected by series
//!   in powers of the normalised easting.
//!
//! The series are accurate to well under a millimetre within the NZTM area
//! of use.
//!
//! ## Design
//!
//! The `TmProjection` struct holds the ellipsoid and projection parameters of
//! a Transverse Mercator projection. It is immutable, so a single instance may
//! be shared by any number of threads. The static `NZTM_PROJECTION` holds the
//! NZTM parameters.
//!
//! Conversions never fail: invalid inputs such as non-finite values or
//! degenerate ellipsoids produce non-finite results. `TmProjection` and
//! `GeodeticCoordinate` implement the `Validate` trait, so that callers may
//! check parameters and results when required.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`,
//!   so converted coordinates can be used in great-circle calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//!
//! # Examples
//! ```
//! use nztm_geodetic::{convert, NZTM_PROJECTION};
//!
//! let christchurch = convert(&NZTM_PROJECTION, 1_576_327.93, 5_180_887.13);
//!
//! assert_eq!(-43.5245, christchurch.truncated_latitude_degrees());
//! assert_eq!(172.707, christchurch.truncated_longitude_degrees());
//! println!("Christchurch: {}", christchurch);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod coordinates;
pub mod ellipsoid;
pub mod meridian;
pub mod projection;

pub use angle_sc::{Degrees, Radians, Validate};
pub use coordinates::{truncate_to_4dp, GeodeticCoordinate};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use lazy_static::lazy_static;

/// The parameters of a Transverse Mercator projection.
#[derive(Clone, Debug, PartialEq)]
pub struct TmProjection {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The inverse flattening of the ellipsoid, zero for a sphere.
    rf: f64,
    /// The central meridian.
    central_meridian: Radians,
    /// The scale factor on the central meridian.
    scale_factor: f64,
    /// The latitude of the projection origin.
    origin_latitude: Radians,
    /// The false easting, in projection units.
    false_easting: f64,
    /// The false northing, in projection units.
    false_northing: f64,
    /// The length of a projection unit in metres.
    unit_to_metre: f64,

    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The third flattening of the ellipsoid.
    n: f64,
    /// The meridional arc length at the origin latitude.
    om: Metres,
}

impl TmProjection {
    /// Constructor.
    /// * `a` - the Semimajor axis of the ellipsoid.
    /// * `rf` - the inverse flattening of the ellipsoid, zero for a sphere.
    /// * `central_meridian` - the central meridian.
    /// * `scale_factor` - the scale factor on the central meridian.
    /// * `origin_latitude` - the latitude of the projection origin.
    /// * `false_easting` - the false easting, in projection units.
    /// * `false_northing` - the false northing, in projection units.
    /// * `unit_to_metre` - the length of a projection unit in metres.
    ///
    /// The parameters are not validated, see `is_valid`.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        a: Metres,
        rf: f64,
        central_meridian: Radians,
        scale_factor: f64,
        origin_latitude: Radians,
        false_easting: f64,
        false_northing: f64,
        unit_to_metre: f64,
    ) -> Self {
        let f = ellipsoid::calculate_flattening(rf);
        let e_2 = ellipsoid::calculate_sq_eccentricity(f);
        Self {
            a,
            rf,
            central_meridian,
            scale_factor,
            origin_latitude,
            false_easting,
            false_northing,
            unit_to_metre,
            f,
            e_2,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(e_2),
            n: ellipsoid::calculate_3rd_flattening(f),
            om: meridian::calculate_meridian_arc(a, e_2, origin_latitude),
        }
    }

    /// Construct a `TmProjection` with the NZTM parameters.
    #[must_use]
    pub fn nztm() -> Self {
        use crate::ellipsoid::nztm;
        Self::new(
            nztm::A,
            nztm::RF,
            Radians(nztm::CM.0.to_radians()),
            nztm::SF,
            Radians(nztm::OLAT.0.to_radians()),
            nztm::FE,
            nztm::FN,
            nztm::UTOM,
        )
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The inverse flattening of the ellipsoid.
    #[must_use]
    pub const fn rf(&self) -> f64 {
        self.rf
    }

    /// The central meridian.
    #[must_use]
    pub const fn central_meridian(&self) -> Radians {
        self.central_meridian
    }

    /// The scale factor on the central meridian.
    #[must_use]
    pub const fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// The latitude of the projection origin.
    #[must_use]
    pub const fn origin_latitude(&self) -> Radians {
        self.origin_latitude
    }

    /// The false easting, in projection units.
    #[must_use]
    pub const fn false_easting(&self) -> f64 {
        self.false_easting
    }

    /// The false northing, in projection units.
    #[must_use]
    pub const fn false_northing(&self) -> f64 {
        self.false_northing
    }

    /// The length of a projection unit in metres.
    #[must_use]
    pub const fn unit_to_metre(&self) -> f64 {
        self.unit_to_metre
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The third flattening of the ellipsoid.
    #[must_use]
    pub const fn n(&self) -> f64 {
        self.n
    }

    /// The meridional arc length at the origin latitude.
    #[must_use]
    pub const fn om(&self) -> Metres {
        self.om
    }

    /// Calculate the meridional arc length from the Equator to a latitude.
    /// * `lat` - the latitude.
    #[must_use]
    pub fn meridian_arc(&self, lat: Radians) -> Metres {
        meridian::calculate_meridian_arc(self.a, self.e_2, lat)
    }

    /// Calculate the latitude at which the meridional arc has the given length.
    /// * `m` - the meridional arc length.
    #[must_use]
    pub fn foot_point_latitude(&self, m: Metres) -> Radians {
        meridian::calculate_foot_point_latitude(self.a, self.n, m)
    }

    /// Convert grid coordinates to a geodetic coordinate.
    /// * `easting`, `northing` - the grid coordinates in projection units.
    #[must_use]
    pub fn inverse(&self, easting: f64, northing: f64) -> GeodeticCoordinate {
        projection::calculate_geodetic_coordinate(self, easting, northing)
    }
}

impl Validate for TmProjection {
    /// Test whether a `TmProjection` describes a physical ellipsoid and projection.
    /// Whether all parameters are finite, the Semimajor axis, scale factor and
    /// unit conversion are positive and 0 <= `e_2` < 1.
    fn is_valid(&self) -> bool {
        self.a.0.is_finite()
            && 0.0 < self.a.0
            && self.rf.is_finite()
            && (0.0..1.0).contains(&self.e_2)
            && self.ep_2.is_finite()
            && self.central_meridian.0.is_finite()
            && self.origin_latitude.0.is_finite()
            && self.scale_factor.is_finite()
            && 0.0 < self.scale_factor
            && self.false_easting.is_finite()
            && self.false_northing.is_finite()
            && self.unit_to_metre.is_finite()
            && 0.0 < self.unit_to_metre
    }
}

lazy_static! {
    /// A static instance of the NZTM `TmProjection`.
    pub static ref NZTM_PROJECTION: TmProjection = TmProjection::nztm();
}

/// Convert Transverse Mercator grid coordinates to a geodetic coordinate.
/// * `tm` - the projection.
/// * `easting`, `northing` - the grid coordinates in projection units.
///
/// returns the latitude and longitude; non-finite if the inputs are invalid.
///
/// # Examples
/// ```
/// use nztm_geodetic::{convert, TmProjection};
///
/// let tm = TmProjection::nztm();
/// let wellington = convert(&tm, 1_748_735.55, 5_428_107.69);
///
/// assert_eq!(-41.2847, wellington.truncated_latitude_degrees());
/// assert_eq!(174.7761, wellington.truncated_longitude_degrees());
/// ```
#[must_use]
pub fn convert(tm: &TmProjection, easting: f64, northing: f64) -> GeodeticCoordinate {
    tm.inverse(easting, northing)
}

/// Convert a sequence of grid coordinates to geodetic coordinates.
///
/// Each conversion is independent, the coordinates are converted lazily.
/// * `tm` - the projection.
/// * `points` - the (easting, northing) grid coordinates.
/// # Examples
/// ```
/// use nztm_geodetic::{convert_points, NZTM_PROJECTION};
///
/// let points = [(1_576_327.93, 5_180_887.13), (1_757_393.85, 5_921_219.74)];
/// let mut results = convert_points(&NZTM_PROJECTION, points);
///
/// assert_eq!(-43.5245, results.next().unwrap().truncated_latitude_degrees());
/// assert_eq!(-36.8418, results.next().unwrap().truncated_latitude_degrees());
/// assert!(results.next().is_none());
/// ```
pub fn convert_points<'a, I>(
    tm: &'a TmProjection,
    points: I,
) -> impl Iterator<Item = GeodeticCoordinate> + 'a
where
    I: IntoIterator<Item = (f64, f64)>,
    I::IntoIter: 'a,
{
    points
        .into_iter()
        .map(move |(easting, northing)| tm.inverse(easting, northing))
}
