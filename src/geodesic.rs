// Copyright (c) 2026 The geo-sphere contributors

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

//! The geodesic module contains the great-circle trigonometry for points on
//! the surface of a sphere: the angular distance and initial bearing between
//! two positions (the inverse problem), the great-circle mid point and the
//! destination of a bearing and distance (the direct problem).
//!
//! All functions take and return angles in `Radians` (bearings excepted,
//! which are conventionally in `Degrees`) and are pure; validation and the
//! conversion to geographic coordinates live in the `coordinate` module.

#![allow(clippy::suboptimal_flops)]

use crate::EARTH_RADIUS;
use angle_sc::{Degrees, Radians};
use icao_units::si::Metres;

/// Calculate the great-circle arc length between two positions: the
/// inverse geodesic problem.
/// * `lat1`, `lon1` - the first position.
/// * `lat2`, `lon2` - the second position.
///
/// returns the angular distance between the positions in `Radians`,
/// zero or greater. Uses the `atan2` form of the haversine formula for
/// numerical stability at small and near-antipodal distances.
#[must_use]
pub fn calculate_arc_length(lat1: Radians, lon1: Radians, lat2: Radians, lon2: Radians) -> Radians {
    let delta = lon2.0 - lon1.0;

    let sin_lat1 = libm::sin(lat1.0);
    let cos_lat1 = libm::cos(lat1.0);
    let sin_lat2 = libm::sin(lat2.0);
    let cos_lat2 = libm::cos(lat2.0);
    let sin_delta = libm::sin(delta);
    let cos_delta = libm::cos(delta);

    let a = cos_lat2 * sin_delta;
    let b = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta;

    let y = libm::sqrt(a * a + b * b);
    let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta;

    Radians(libm::atan2(y, x))
}

/// Convert a great-circle arc length to a distance on the Earth sphere.
/// * `arc_length` - the angular distance in `Radians`.
///
/// returns the distance in metres.
#[must_use]
pub fn convert_radians_to_metres(arc_length: Radians) -> Metres {
    Metres(EARTH_RADIUS.0 * arc_length.0)
}

/// Calculate the initial bearing of the great circle from the first
/// position towards the second.
/// * `lat1`, `lon1` - the first position.
/// * `lat2`, `lon2` - the second position.
///
/// returns the bearing in `Degrees`, 0..360 measured clockwise from North.
#[must_use]
pub fn calculate_initial_bearing(
    lat1: Radians,
    lon1: Radians,
    lat2: Radians,
    lon2: Radians,
) -> Degrees {
    let delta = lon2.0 - lon1.0;

    let sin_lat1 = libm::sin(lat1.0);
    let cos_lat1 = libm::cos(lat1.0);
    let sin_lat2 = libm::sin(lat2.0);
    let cos_lat2 = libm::cos(lat2.0);

    let y = libm::sin(delta) * cos_lat2;
    let x = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * libm::cos(delta);

    let bearing = libm::atan2(y, x).to_degrees();
    Degrees(if bearing < 0.0 {
        bearing + 360.0
    } else {
        bearing
    })
}

/// Calculate the great-circle mid point between two positions.
/// * `lat1`, `lon1` - the first position.
/// * `lat2`, `lon2` - the second position.
///
/// returns the mid point as `(latitude, longitude)` in `Radians`.
/// The longitude is not wrapped; it can exceed half a turn for arcs
/// crossing the antimeridian.
#[must_use]
pub fn calculate_mid_point(
    lat1: Radians,
    lon1: Radians,
    lat2: Radians,
    lon2: Radians,
) -> (Radians, Radians) {
    let delta = lon2.0 - lon1.0;

    let cos_lat1 = libm::cos(lat1.0);
    let cos_lat2 = libm::cos(lat2.0);

    let bx = cos_lat2 * libm::cos(delta);
    let by = cos_lat2 * libm::sin(delta);

    let lat = libm::atan2(
        libm::sin(lat1.0) + libm::sin(lat2.0),
        libm::sqrt((cos_lat1 + bx) * (cos_lat1 + bx) + by * by),
    );
    let lon = lon1.0 + libm::atan2(by, cos_lat1 + bx);

    (Radians(lat), Radians(lon))
}

/// Calculate the destination of travelling from a position along a great
/// circle: the trigonometry of the direct geodesic problem.
/// * `lat`, `lon` - the start position.
/// * `bearing` - the bearing at the start position in `Radians`.
/// * `arc_length` - the angular distance to travel in `Radians`.
///
/// returns the destination as `(latitude, longitude)` in `Radians`.
/// The longitude is not wrapped.
#[must_use]
pub fn calculate_destination(
    lat: Radians,
    lon: Radians,
    bearing: Radians,
    arc_length: Radians,
) -> (Radians, Radians) {
    let sin_lat = libm::sin(lat.0);
    let cos_lat = libm::cos(lat.0);
    let sin_arc = libm::sin(arc_length.0);
    let cos_arc = libm::cos(arc_length.0);

    let lat2 = libm::asin(sin_lat * cos_arc + cos_lat * sin_arc * libm::cos(bearing.0));
    let lon2 = lon.0
        + libm::atan2(
            libm::sin(bearing.0) * sin_arc * cos_lat,
            cos_arc - sin_lat * libm::sin(lat2),
        );

    (Radians(lat2), Radians(lon2))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn test_arc_length_coincident_points() {
        let arc = calculate_arc_length(
            Radians(0.5),
            Radians(-1.0),
            Radians(0.5),
            Radians(-1.0),
        );
        assert_eq!(0.0, arc.0);
        assert_eq!(0.0, convert_radians_to_metres(arc).0);
    }

    #[test]
    fn test_arc_length_equator_quarter_circle() {
        let arc = calculate_arc_length(
            Radians(0.0),
            Radians(0.0),
            Radians(0.0),
            Radians(FRAC_PI_2),
        );
        assert!(is_within_tolerance(FRAC_PI_2, arc.0, f64::EPSILON));

        let distance = convert_radians_to_metres(arc);
        assert!(is_within_tolerance(
            EARTH_RADIUS.0 * FRAC_PI_2,
            distance.0,
            1e-6
        ));
    }

    #[test]
    fn test_arc_length_symmetry() {
        let lat1 = Radians(42_f64.to_radians());
        let lon1 = Radians(29_f64.to_radians());
        let lat2 = Radians(39_f64.to_radians());
        let lon2 = Radians((-77_f64).to_radians());

        let forward = calculate_arc_length(lat1, lon1, lat2, lon2);
        let reverse = calculate_arc_length(lat2, lon2, lat1, lon1);
        assert!(is_within_tolerance(forward.0, reverse.0, f64::EPSILON));
    }

    #[test]
    fn test_initial_bearing_cardinal_directions() {
        let zero = Radians(0.0);
        let tenth = Radians(0.1);

        // due North and due East
        let north = calculate_initial_bearing(zero, zero, tenth, zero);
        assert_eq!(0.0, north.0);
        let east = calculate_initial_bearing(zero, zero, zero, tenth);
        assert!(is_within_tolerance(90.0, east.0, 1e-12));

        // due South and due West wrap into 0..360
        let south = calculate_initial_bearing(tenth, zero, zero, zero);
        assert!(is_within_tolerance(180.0, south.0, 1e-12));
        let west = calculate_initial_bearing(zero, tenth, zero, zero);
        assert!(is_within_tolerance(270.0, west.0, 1e-12));
    }

    #[test]
    fn test_mid_point_equator() {
        let (lat, lon) = calculate_mid_point(
            Radians(0.0),
            Radians(0.0),
            Radians(0.0),
            Radians(FRAC_PI_2),
        );
        assert!(is_within_tolerance(0.0, lat.0, f64::EPSILON));
        assert!(is_within_tolerance(FRAC_PI_2 / 2.0, lon.0, f64::EPSILON));
    }

    #[test]
    fn test_destination_round_trip() {
        let lat1 = Radians(40.7128_f64.to_radians());
        let lon1 = Radians((-74.0060_f64).to_radians());
        let bearing = Radians(51_f64.to_radians());
        let arc_length = Radians(0.5);

        let (lat2, lon2) = calculate_destination(lat1, lon1, bearing, arc_length);
        let arc = calculate_arc_length(lat1, lon1, lat2, lon2);
        assert!(is_within_tolerance(arc_length.0, arc.0, 1e-12));
    }
}
