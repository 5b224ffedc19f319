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

//! The projection module contains functions for converting Transverse Mercator
//! grid coordinates to geodetic latitudes and longitudes.
//!
//! The method is Redfearn's formulation as expressed in the
//! [GDA Technical Manual](https://www.icsm.gov.au/datum/gda2020-and-gda94-technical-manuals).
//! The foot point latitude is corrected by series in powers of `x²`, where `x`
//! is the easting divided by the scaled radius of curvature in the prime
//! vertical.
//!
//! No attempt is made to detect invalid inputs: non-finite values, latitudes
//! at the poles and degenerate ellipsoids produce non-finite results.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::coordinates::GeodeticCoordinate;
use crate::{Metres, Radians, TmProjection};

/// The coefficients of the latitude correction series.
/// * `psi` - the ratio of the radii of curvature at the foot point latitude.
/// * `t_2` - the square of the tangent of the foot point latitude.
#[must_use]
pub fn calculate_latitude_terms(psi: f64, t_2: f64) -> [f64; 4] {
    let t_4 = t_2 * t_2;
    [
        1.0 / 2.0,
        ((-4.0 * psi + 9.0 * (1.0 - t_2)) * psi + 12.0 * t_2) / 24.0,
        ((((8.0 * (11.0 - 24.0 * t_2) * psi - 12.0 * (21.0 - 71.0 * t_2)) * psi
            + 15.0 * ((15.0 * t_2 - 98.0) * t_2 + 15.0))
            * psi
            + 180.0 * ((-3.0 * t_2 + 5.0) * t_2))
            * psi
            + 360.0 * t_4)
            / 720.0,
        (((1575.0 * t_2 + 4095.0) * t_2 + 3633.0) * t_2 + 1385.0) / 40320.0,
    ]
}

/// The coefficients of the longitude correction series.
/// * `psi` - the ratio of the radii of curvature at the foot point latitude.
/// * `t_2` - the square of the tangent of the foot point latitude.
#[must_use]
pub fn calculate_longitude_terms(psi: f64, t_2: f64) -> [f64; 4] {
    let t_4 = t_2 * t_2;
    [
        1.0,
        (psi + 2.0 * t_2) / 6.0,
        (((-4.0 * (1.0 - 6.0 * t_2) * psi + (9.0 - 68.0 * t_2)) * psi + 72.0 * t_2) * psi
            + 24.0 * t_4)
            / 120.0,
        (((720.0 * t_2 + 1320.0) * t_2 + 662.0) * t_2 + 61.0) / 5040.0,
    ]
}

/// Evaluate a correction series: `((t4·x² − t3)·x² + t2)·x² − t1`.
/// * `terms` - the series coefficients.
/// * `x_2` - the square of the normalised easting.
#[must_use]
fn evaluate_series(terms: &[f64; 4], x_2: f64) -> f64 {
    ((terms[3] * x_2 - terms[2]) * x_2 + terms[1]) * x_2 - terms[0]
}

/// Convert Transverse Mercator grid coordinates to a geodetic coordinate.
/// * `tm` - the projection.
/// * `easting`, `northing` - the grid coordinates in projection units.
///
/// returns the latitude and longitude in radians.
#[must_use]
pub fn calculate_geodetic_coordinate(
    tm: &TmProjection,
    easting: f64,
    northing: f64,
) -> GeodeticCoordinate {
    let a = tm.a().0;
    let e_2 = tm.e_2();
    let sf = tm.scale_factor();
    let utom = tm.unit_to_metre();

    // meridional arc length from the Equator
    let m = (northing - tm.false_northing()) * utom / sf + tm.om().0;
    let foot_lat = tm.foot_point_latitude(Metres(m)).0;
    let sin_lat = libm::sin(foot_lat);
    let cos_lat = libm::cos(foot_lat);

    // radii of curvature in the prime vertical and the meridian
    let eslt = 1.0 - e_2 * sin_lat * sin_lat;
    let eta = a / libm::sqrt(eslt);
    let rho = eta * (1.0 - e_2) / eslt;
    let psi = eta / rho;

    let e = (easting - tm.false_easting()) * utom;
    let x = e / (eta * sf);
    let x_2 = x * x;

    let t = sin_lat / cos_lat;
    let t_2 = t * t;

    let lat_terms = calculate_latitude_terms(psi, t_2);
    let lat = foot_lat + (t * x * e / (sf * rho)) * evaluate_series(&lat_terms, x_2);

    let lon_terms = calculate_longitude_terms(psi, t_2);
    let lon = tm.central_meridian().0 - (x / cos_lat) * evaluate_series(&lon_terms, x_2);

    GeodeticCoordinate::new(Radians(lat), Radians(lon))
}
