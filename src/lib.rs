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

//! geo-sphere
//!
//! A library for great-circle calculations on a spherical Earth model.
//!
//! The library solves the two classical problems of spherical geodesy:
//!
//! - the **direct problem**: given a start position, a bearing and a
//!   distance, find the destination position;
//! - the **inverse problem**: given two positions, find the distance and
//!   the bearings between them.
//!
//! It models the Earth as a sphere with the mean radius of 6 371 210 metres,
//! trading the accuracy of an ellipsoidal model for simple, closed-form
//! great-circle trigonometry.
//!
//! ## Design
//!
//! The `Coordinate` type is a validated geographic position: a longitude
//! within -180..=180 degrees and a latitude within -90..=90 degrees. Its
//! constructors are fallible, so an out-of-range instance cannot exist.
//! The loose factory [`Coordinate::create`] accepts numeric-or-text raw
//! input (see [`RawValue`](coordinate::RawValue)) for positions arriving
//! from form fields, CSV cells and query parameters.
//!
//! The `GeodesicSegment` type is an ordered pair of `Coordinate`s and
//! provides the derived great-circle quantities: length, initial and final
//! bearings and the mid point. The great-circle trigonometry itself lives
//! in the [`geodesic`] module as pure functions over `Radians`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - for `no_std` trigonometry;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the
//!   error type.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! (with `alloc` for string rendering) so it can be used in embedded
//! applications.
//!
//! # Examples
//! ```
//! use geo_sphere::{Coordinate, Degrees, Endpoint, GeodesicSegment, Metres};
//!
//! let new_york = Coordinate::create("-74.0060", "40.7128").unwrap();
//! let london = Coordinate::create(-0.1278, 51.5074).unwrap();
//!
//! let segment = GeodesicSegment::new(new_york, london);
//!
//! // inverse problem: distance and initial bearing
//! assert!((segment.length().0 - 5_570_000.0).abs() < 56_000.0);
//! assert!((segment.initial_bearing(Endpoint::A).0 - 51.0).abs() < 2.0);
//!
//! // direct problem: destination from bearing and distance
//! let other = GeodesicSegment::from_bearing_length(
//!     new_york,
//!     Degrees(51.0),
//!     Metres(5_570_000.0),
//! ).unwrap();
//! assert!((other.b().lat().0 - london.lat().0).abs() < 1.0);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod coordinate;
pub mod error;
pub mod geodesic;

pub use angle_sc::{Degrees, Radians};
pub use coordinate::{Coordinate, RawValue};
pub use error::Error;
pub use icao_units::si::Metres;

/// The Earth mean spherical radius in metres.
pub const EARTH_RADIUS: Metres = Metres(6_371_210.0);

/// Selects one of the two ordered endpoints of a `GeodesicSegment`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Endpoint {
    /// The first endpoint.
    #[default]
    A,
    /// The second endpoint.
    B,
}

/// A geodesic segment on the surface of the Earth sphere: an ordered pair
/// of positions joined by a great-circle arc.
///
/// The order of the endpoints is significant: it determines which position
/// the bearings are measured from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicSegment {
    /// The first endpoint.
    a: Coordinate,
    /// The second endpoint.
    b: Coordinate,
}

impl GeodesicSegment {
    /// Construct a `GeodesicSegment` between a pair of positions.
    /// * `a`, `b` - the first and second endpoints.
    #[must_use]
    pub const fn new(a: Coordinate, b: Coordinate) -> Self {
        Self { a, b }
    }

    /// Construct a `GeodesicSegment` using the direct method: from a start
    /// position, a bearing and a length.
    /// * `a` - the start position.
    /// * `bearing` - the bearing at the start position, 0..=360 degrees.
    /// * `length` - the length in metres, zero or greater.
    ///
    /// The segment pairs `a` with the computed destination, in that order.
    ///
    /// # Errors
    ///
    /// `Error::InvalidBearing`, `Error::InvalidDistance` or
    /// `Error::InvalidCoordinate`, see
    /// [`Coordinate::from_bearing_distance`].
    ///
    /// # Examples
    /// ```
    /// use geo_sphere::{Coordinate, Degrees, Error, GeodesicSegment, Metres};
    ///
    /// let start = Coordinate::create(0.0, 0.0).unwrap();
    /// let segment = GeodesicSegment::from_bearing_length(
    ///     start,
    ///     Degrees(90.0),
    ///     Metres(1_000_000.0),
    /// ).unwrap();
    /// assert!((segment.length().0 - 1_000_000.0).abs() < 1e-6);
    ///
    /// let result = GeodesicSegment::from_bearing_length(start, Degrees(-1.0), Metres(0.0));
    /// assert_eq!(Err(Error::InvalidBearing(-1.0)), result);
    /// ```
    pub fn from_bearing_length(
        a: Coordinate,
        bearing: Degrees,
        length: Metres,
    ) -> Result<Self, Error> {
        let b = Coordinate::from_bearing_distance(&a, bearing, length)?;
        Ok(Self::new(a, b))
    }

    /// Replace one or both endpoints of the segment.
    /// * `a`, `b` - the replacement endpoints; `None` leaves that endpoint
    ///   unchanged.
    pub fn set_points(&mut self, a: Option<Coordinate>, b: Option<Coordinate>) -> &mut Self {
        if let Some(a) = a {
            self.a = a;
        }
        if let Some(b) = b {
            self.b = b;
        }
        self
    }

    /// Accessor for both endpoints, in order.
    #[must_use]
    pub const fn points(&self) -> (&Coordinate, &Coordinate) {
        (&self.a, &self.b)
    }

    /// Accessor for the first endpoint.
    #[must_use]
    pub const fn a(&self) -> &Coordinate {
        &self.a
    }

    /// Accessor for the second endpoint.
    #[must_use]
    pub const fn b(&self) -> &Coordinate {
        &self.b
    }

    /// The great-circle arc length between the endpoints in `Radians`.
    #[must_use]
    pub fn arc_length(&self) -> Radians {
        geodesic::calculate_arc_length(
            self.a.lat_radians(),
            self.a.lon_radians(),
            self.b.lat_radians(),
            self.b.lon_radians(),
        )
    }

    /// The length of the segment in metres: the inverse geodesic problem.
    ///
    /// Zero or greater; zero if and only if the endpoints coincide.
    #[must_use]
    pub fn length(&self) -> Metres {
        geodesic::convert_radians_to_metres(self.arc_length())
    }

    /// The bearing from the given endpoint towards the other, in `Degrees`
    /// within 0..360.
    /// * `from` - the endpoint the bearing is measured from;
    ///   `Endpoint::B` swaps the endpoint roles for the calculation.
    #[must_use]
    pub fn initial_bearing(&self, from: Endpoint) -> Degrees {
        let (p1, p2) = match from {
            Endpoint::A => (&self.a, &self.b),
            Endpoint::B => (&self.b, &self.a),
        };
        geodesic::calculate_initial_bearing(
            p1.lat_radians(),
            p1.lon_radians(),
            p2.lat_radians(),
            p2.lon_radians(),
        )
    }

    /// The direction of travel arriving at the given endpoint, in `Degrees`
    /// within 0..360: the bearing at that endpoint reversed half a turn.
    /// * `to` - the endpoint travelled towards.
    #[must_use]
    pub fn final_bearing(&self, to: Endpoint) -> Degrees {
        let bearing = self.initial_bearing(to).0 + 180.0;
        Degrees(if bearing >= 360.0 {
            bearing - 360.0
        } else {
            bearing
        })
    }

    /// The great-circle mid point of the segment.
    ///
    /// `None` when the mid point longitude falls outside -180..=180
    /// degrees, which happens for segments crossing the antimeridian, or
    /// on floating-point anomalies at the poles and antipodes.
    #[must_use]
    pub fn mid_point(&self) -> Option<Coordinate> {
        let (lat, lon) = geodesic::calculate_mid_point(
            self.a.lat_radians(),
            self.a.lon_radians(),
            self.b.lat_radians(),
            self.b.lon_radians(),
        );
        Coordinate::create(lon.0.to_degrees(), lat.0.to_degrees())
    }
}

impl From<(Coordinate, Coordinate)> for GeodesicSegment {
    /// Construct a `GeodesicSegment` between a pair of positions.
    fn from(params: (Coordinate, Coordinate)) -> Self {
        Self::new(params.0, params.1)
    }
}

impl TryFrom<(Coordinate, Degrees, Metres)> for GeodesicSegment {
    type Error = Error;

    /// Construct a `GeodesicSegment` using the direct method: from a start
    /// position, a bearing and a length in metres.
    fn try_from(params: (Coordinate, Degrees, Metres)) -> Result<Self, Self::Error> {
        Self::from_bearing_length(params.0, params.1, params.2)
    }
}
