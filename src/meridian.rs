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

//! The meridian module contains functions for calculating the length of a
//! meridional arc and for inverting it to find a foot point latitude.
//!
//! The series follow Redfearn's formulation as expressed in the
//! [GDA Technical Manual](https://www.icsm.gov.au/datum/gda2020-and-gda94-technical-manuals).

#![allow(clippy::suboptimal_flops)]

use crate::{Metres, Radians};

/// The coefficients `A0`, `A2`, `A4` and `A6` of Helmert's meridian arc series.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// # Examples
/// ```
/// use nztm_geodetic::meridian::evaluate_coeffs_helmert;
///
/// // A sphere has no periodic terms
/// assert_eq!([1.0, 0.0, 0.0, 0.0], evaluate_coeffs_helmert(0.0));
/// ```
#[must_use]
pub fn evaluate_coeffs_helmert(e_2: f64) -> [f64; 4] {
    let e_4 = e_2 * e_2;
    let e_6 = e_4 * e_2;

    [
        1.0 - (e_2 / 4.0) - (3.0 * e_4 / 64.0) - (5.0 * e_6 / 256.0),
        (3.0 / 8.0) * (e_2 + e_4 / 4.0 + 15.0 * e_6 / 128.0),
        (15.0 / 256.0) * (e_4 + 3.0 * e_6 / 4.0),
        35.0 * e_6 / 3072.0,
    ]
}

/// Calculate the length of the meridional arc from the Equator to a latitude,
/// using Helmert's formula.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `lat` - the latitude.
///
/// returns the arc length in metres, negative in the southern hemisphere.
/// # Examples
/// ```
/// use nztm_geodetic::{Metres, Radians};
/// use nztm_geodetic::meridian::calculate_meridian_arc;
///
/// // The Equator is the origin of meridional arcs
/// let m = calculate_meridian_arc(Metres(6_378_137.0), 0.006694380022900787, Radians(0.0));
/// assert_eq!(Metres(0.0), m);
/// ```
#[must_use]
pub fn calculate_meridian_arc(a: Metres, e_2: f64, lat: Radians) -> Metres {
    let [a0, a2, a4, a6] = evaluate_coeffs_helmert(e_2);
    let lt = lat.0;

    Metres(
        a.0 * (a0 * lt - a2 * libm::sin(2.0 * lt) + a4 * libm::sin(4.0 * lt)
            - a6 * libm::sin(6.0 * lt)),
    )
}

/// Calculate the foot point latitude: the latitude at which the meridional
/// arc from the Equator has the given length.
///
/// The meridian arc series is inverted with Redfearn's expansion in the third
/// flattening; no iterative refinement is performed.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `n` - the third flattening of the ellipsoid.
/// * `m` - the meridional arc length.
#[must_use]
pub fn calculate_foot_point_latitude(a: Metres, n: f64, m: Metres) -> Radians {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n2 * n2;

    // the mean length of a radian of the meridian
    let g = a.0 * (1.0 - n) * (1.0 - n2) * (1.0 + 9.0 * n2 / 4.0 + 225.0 * n4 / 64.0);
    let sigma = m.0 / g;

    Radians(
        sigma
            + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * libm::sin(2.0 * sigma)
            + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * libm::sin(4.0 * sigma)
            + (151.0 * n3 / 96.0) * libm::sin(6.0 * sigma)
            + (1097.0 * n4 / 512.0) * libm::sin(8.0 * sigma),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::{
        calculate_3rd_flattening, calculate_flattening, calculate_sq_eccentricity, nztm,
    };
    use angle_sc::is_within_tolerance;

    fn grs80() -> (Metres, f64, f64) {
        let f = calculate_flattening(nztm::RF);
        (nztm::A, calculate_sq_eccentricity(f), calculate_3rd_flattening(f))
    }

    #[test]
    fn test_evaluate_coeffs_helmert() {
        let (_, e_2, _) = grs80();
        let coeffs = evaluate_coeffs_helmert(e_2);

        // A0 is just below one, the higher order terms diminish rapidly
        assert!(coeffs[0] < 1.0 && 0.99 < coeffs[0]);
        assert!(coeffs[1] > coeffs[2]);
        assert!(coeffs[2] > coeffs[3]);
        assert!(0.0 < coeffs[3]);
    }

    #[test]
    fn test_calculate_meridian_arc() {
        let (a, e_2, _) = grs80();

        let m = calculate_meridian_arc(a, e_2, Radians(core::f64::consts::FRAC_PI_4));
        assert!(is_within_tolerance(4_984_944.378_112_14, m.0, 1.0e-6));

        // The arc is an odd function of latitude
        let lat = Radians(41.0_f64.to_radians());
        let north = calculate_meridian_arc(a, e_2, lat);
        let south = calculate_meridian_arc(a, e_2, Radians(-lat.0));
        assert_eq!(north.0, -south.0);
        assert!(is_within_tolerance(-4_540_573.291_274_45, south.0, 1.0e-6));
    }

    #[test]
    fn test_calculate_meridian_arc_sphere() {
        // On a sphere the arc is simply the radius times the latitude
        let a = Metres(6_371_000.0);
        let lat = Radians(0.5);
        assert_eq!(a.0 * lat.0, calculate_meridian_arc(a, 0.0, lat).0);
    }

    #[test]
    fn test_calculate_foot_point_latitude() {
        let (a, e_2, n) = grs80();

        assert_eq!(0.0, calculate_foot_point_latitude(a, n, Metres(0.0)).0);

        for i in -80..81 {
            let lat = Radians(f64::from(i).to_radians());
            let m = calculate_meridian_arc(a, e_2, lat);
            let result = calculate_foot_point_latitude(a, n, m);
            assert!(is_within_tolerance(lat.0, result.0, 1.0e-9));
        }

        // New Zealand latitudes: within 1e-10 radians, under a millimetre
        for i in -48..-33 {
            let lat = Radians(f64::from(i).to_radians());
            let m = calculate_meridian_arc(a, e_2, lat);
            let result = calculate_foot_point_latitude(a, n, m);
            assert!(is_within_tolerance(lat.0, result.0, 1.0e-10));
        }
    }
}
