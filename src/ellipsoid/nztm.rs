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

//! The nztm module contains the New Zealand Transverse Mercator 2000
//! projection parameters, defined on the GRS 80 ellipsoid of the
//! New Zealand Geodetic Datum 2000.

use crate::{Degrees, Metres};

/// The GRS 80 Semimajor axis measured in metres.
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The GRS 80 inverse flattening.
pub const RF: f64 = 298.257_222_101;

/// The central meridian of the projection.
pub const CM: Degrees = Degrees(173.0);

/// The scale factor on the central meridian.
pub const SF: f64 = 0.9996;

/// The latitude of the projection origin.
pub const OLAT: Degrees = Degrees(0.0);

/// The false easting, in metres.
pub const FE: f64 = 1_600_000.0;

/// The false northing, in metres.
pub const FN: f64 = 10_000_000.0;

/// NZTM grid coordinates are in metres.
pub const UTOM: f64 = 1.0;
