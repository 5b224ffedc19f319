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

//! The ellipsoid module contains functions for deriving the constants of an
//! ellipsoid given its Semimajor axis and inverse flattening.

#![allow(clippy::suboptimal_flops)]

pub mod nztm;

/// Calculate the flattening of an ellipsoid from its inverse flattening.
///
/// An inverse flattening of zero denotes a sphere, so the flattening is zero.
/// * `rf` - the inverse flattening.
/// # Examples
/// ```
/// use nztm_geodetic::ellipsoid::{calculate_flattening, nztm};
///
/// assert_eq!(0.003352810681182319, calculate_flattening(nztm::RF));
/// assert_eq!(0.0, calculate_flattening(0.0));
/// ```
#[must_use]
pub fn calculate_flattening(rf: f64) -> f64 {
    if rf == 0.0 {
        0.0
    } else {
        1.0 / rf
    }
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use nztm_geodetic::ellipsoid::{calculate_flattening, calculate_sq_eccentricity, nztm};
///
/// // The GRS 80 sq_eccentricity.
/// let f = calculate_flattening(nztm::RF);
/// assert_eq!(0.006694380022900787, calculate_sq_eccentricity(f));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    2.0 * f - f * f
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `e_2` - the square of the Eccentricity.
/// # Examples
/// ```
/// use nztm_geodetic::ellipsoid::{
///     calculate_flattening, calculate_sq_2nd_eccentricity, calculate_sq_eccentricity, nztm,
/// };
///
/// // The GRS 80 sq 2nd eccentricity.
/// let e_2 = calculate_sq_eccentricity(calculate_flattening(nztm::RF));
/// assert_eq!(0.006739496775478957, calculate_sq_2nd_eccentricity(e_2));
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(e_2: f64) -> f64 {
    e_2 / (1.0 - e_2)
}

/// Calculate the third flattening of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use nztm_geodetic::ellipsoid::{calculate_3rd_flattening, calculate_flattening, nztm};
///
/// // The GRS 80 3rd flattening.
/// let f = calculate_flattening(nztm::RF);
/// assert_eq!(0.0016792203946287448, calculate_3rd_flattening(f));
/// ```
#[must_use]
pub fn calculate_3rd_flattening(f: f64) -> f64 {
    f / (2.0 - f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_has_no_eccentricity() {
        let f = calculate_flattening(0.0);
        assert_eq!(0.0, f);

        let e_2 = calculate_sq_eccentricity(f);
        assert_eq!(0.0, e_2);
        assert_eq!(0.0, calculate_sq_2nd_eccentricity(e_2));
        assert_eq!(0.0, calculate_3rd_flattening(f));
    }

    #[test]
    fn test_grs80_constants() {
        let f = calculate_flattening(nztm::RF);
        assert_eq!(1.0 / nztm::RF, f);

        let e_2 = calculate_sq_eccentricity(f);
        assert!((0.0..1.0).contains(&e_2));

        // The second eccentricity is always larger than the first
        let ep_2 = calculate_sq_2nd_eccentricity(e_2);
        assert!(e_2 < ep_2);
    }

    #[test]
    fn test_negative_inverse_flattening_is_not_rejected() {
        // A prolate ellipsoid has a negative flattening: it is passed through
        let f = calculate_flattening(-300.0);
        assert!(f < 0.0);
        assert!(calculate_sq_eccentricity(f) < 0.0);
    }
}
