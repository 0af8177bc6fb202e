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

// extern crate we're testing, same as any other code would do.
extern crate geo_sphere;

use angle_sc::is_within_tolerance;
use geo_sphere::{Coordinate, Degrees, Endpoint, Error, GeodesicSegment, Metres};

fn coordinate(longitude: f64, latitude: f64) -> Coordinate {
    Coordinate::create(longitude, latitude).expect("valid coordinate")
}

#[test]
fn test_new_york_to_london() {
    // positions built from loosely-typed text, as from a form or CSV
    let new_york = Coordinate::create("-74.0060", "40.7128").expect("valid coordinate");
    let london = Coordinate::create("-0.1278", "51.5074").expect("valid coordinate");

    let segment = GeodesicSegment::new(new_york, london);

    // mean-spherical approximation, within 1%
    let distance = segment.length();
    assert!(is_within_tolerance(5_570_000.0, distance.0, 55_700.0));

    let bearing = segment.initial_bearing(Endpoint::A);
    assert!(is_within_tolerance(51.0, bearing.0, 2.0));

    // bearings at both ends are within the compass range
    for endpoint in [Endpoint::A, Endpoint::B] {
        assert!((0.0..360.0).contains(&segment.initial_bearing(endpoint).0));
        assert!((0.0..360.0).contains(&segment.final_bearing(endpoint).0));
    }

    // the mid point splits the segment in half
    let mid = segment.mid_point().expect("valid mid point");
    let half = GeodesicSegment::new(new_york, mid).length();
    assert!(is_within_tolerance(distance.0 / 2.0, half.0, 1e-6));
}

#[test]
fn test_direct_and_inverse_problems_agree() {
    let start = coordinate(29.0, 42.0);

    // Increase bearing around the compass and vary the distance
    for i in 0..=360 {
        let bearing = Degrees(f64::from(i));
        let distance = Metres(f64::from(i).mul_add(25_000.0, 1_000.0));

        let segment = GeodesicSegment::from_bearing_length(start, bearing, distance)
            .expect("valid segment");
        assert!(is_within_tolerance(
            distance.0,
            segment.length().0,
            distance.0 * 1e-6
        ));

        let initial = segment.initial_bearing(Endpoint::A);
        assert!((0.0..360.0).contains(&initial.0));
    }
}

#[test]
fn test_direct_problem_validation() {
    let start = coordinate(0.0, 0.0);

    assert_eq!(
        Err(Error::InvalidBearing(-1.0)),
        GeodesicSegment::from_bearing_length(start, Degrees(-1.0), Metres(100.0))
    );
    assert_eq!(
        Err(Error::InvalidBearing(361.0)),
        GeodesicSegment::from_bearing_length(start, Degrees(361.0), Metres(100.0))
    );
    assert_eq!(
        Err(Error::InvalidDistance(-5.0)),
        GeodesicSegment::from_bearing_length(start, Degrees(90.0), Metres(-5.0))
    );

    let degenerate = GeodesicSegment::from_bearing_length(start, Degrees(0.0), Metres(0.0))
        .expect("valid segment");
    assert!(degenerate.length().0 < 1e-6);
}

#[test]
fn test_normalization_folds() {
    assert_eq!(Some(-170.0), Coordinate::normalize_longitude(190.0));
    assert_eq!(Some(170.0), Coordinate::normalize_longitude(-190.0));
    // latitude folds with period 180, a wrap rather than a clamp
    assert_eq!(Some(-80.0), Coordinate::normalize_latitude(100.0));
}

#[test]
fn test_rendering() {
    let new_york = coordinate(-74.0060, 40.7128);
    assert_eq!("-74.006,40.7128", new_york.as_string(false, ","));
    assert_eq!("40.7128 -74.006", new_york.as_string(true, " "));
    assert_eq!("-74.006,40.7128", new_york.to_string());
}
