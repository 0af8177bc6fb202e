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

//! The coordinate module contains the `Coordinate` type: a validated
//! geographic position in degrees, together with the normalization rules
//! for the loosely-typed raw values that positions are created from.

use crate::error::Error;
use crate::{geodesic, EARTH_RADIUS};
use alloc::string::String;
use angle_sc::{Degrees, Radians};
use core::fmt;
use icao_units::si::Metres;

/// The minimum valid longitude in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
/// The maximum valid longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;
/// The minimum valid latitude in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
/// The maximum valid latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// A loosely-typed raw coordinate value: a number, a piece of text or
/// nothing at all.
///
/// Callers typically construct coordinates from form fields, CSV cells or
/// query parameters where a value may arrive as a number, as text (possibly
/// with a comma as the decimal separator) or may be absent altogether.
/// `RawValue` makes those cases explicit so that the normalization rules
/// can be tested exhaustively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawValue<'a> {
    /// A numeric value, used as-is.
    Number(f64),
    /// A textual value, to be trimmed and parsed.
    Text(&'a str),
    /// No value.
    Missing,
}

impl RawValue<'_> {
    /// Normalize a raw value to a number, or to `None` when it is missing.
    ///
    /// Text is trimmed; empty text is missing; a comma is accepted as the
    /// decimal separator; text that does not parse as a number is missing.
    #[must_use]
    pub fn normalize(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    text.replace(',', ".").parse().ok()
                }
            }
            Self::Missing => None,
        }
    }
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for RawValue<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<Option<f64>> for RawValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

/// Fold a value into `-bound..=bound` by repeatedly adding or subtracting
/// `period`. A wrap-around fold, not a clamp.
fn wrap(mut value: f64, bound: f64, period: f64) -> f64 {
    while value > bound || value < -bound {
        if value > bound {
            value -= period;
        }
        if value < -bound {
            value += period;
        }
    }
    value
}

/// A validated geographic position: longitude and latitude in degrees.
///
/// A live `Coordinate` always has its longitude within -180..=180 degrees
/// and its latitude within -90..=90 degrees; every constructor validates
/// and an invalid instance cannot be observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// The longitude in degrees, -180..=180.
    longitude: Degrees,
    /// The latitude in degrees, -90..=90.
    latitude: Degrees,
}

impl Coordinate {
    /// Construct a `Coordinate` from values in degrees.
    /// * `longitude` - the longitude, -180..=180 degrees.
    /// * `latitude` - the latitude, -90..=90 degrees.
    ///
    /// # Errors
    ///
    /// `Error::InvalidCoordinate` with the offending value if either value
    /// is outside its range. Values are never clamped.
    pub fn new(longitude: Degrees, latitude: Degrees) -> Result<Self, Error> {
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude.0) {
            return Err(Error::InvalidCoordinate(longitude.0));
        }
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude.0) {
            return Err(Error::InvalidCoordinate(latitude.0));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Construct a `Coordinate` from loosely-typed raw values.
    ///
    /// Both values are normalized by `RawValue::normalize` and then
    /// validated; `None` is returned when either value is missing,
    /// unparseable or out of range.
    ///
    /// # Examples
    /// ```
    /// use geo_sphere::Coordinate;
    ///
    /// let a = Coordinate::create("40.7128", "-74.0060").unwrap();
    /// let b = Coordinate::create(40.7128, -74.0060).unwrap();
    /// assert_eq!(a, b);
    ///
    /// // comma as decimal separator
    /// let c = Coordinate::create("40,5", "10").unwrap();
    /// assert_eq!(40.5, c.lon().0);
    ///
    /// assert!(Coordinate::create("200", "0").is_none());
    /// assert!(Coordinate::create("", "10").is_none());
    /// ```
    #[must_use]
    pub fn create<'a, 'b>(
        longitude: impl Into<RawValue<'a>>,
        latitude: impl Into<RawValue<'b>>,
    ) -> Option<Self> {
        let longitude = longitude.into().normalize()?;
        let latitude = latitude.into().normalize()?;
        Self::new(Degrees(longitude), Degrees(latitude)).ok()
    }

    /// Solve the direct geodesic problem: the position reached by travelling
    /// along a great circle from `start` on `bearing` for `distance`.
    /// * `start` - the start position.
    /// * `bearing` - the bearing at the start position, 0..=360 degrees.
    /// * `distance` - the distance to travel in metres, zero or greater.
    ///
    /// The computed longitude and latitude are both folded with the
    /// period-360 longitude wrap before validation.
    ///
    /// # Errors
    ///
    /// `Error::InvalidBearing` when the bearing is outside 0..=360 degrees,
    /// `Error::InvalidDistance` when the distance is negative and
    /// `Error::InvalidCoordinate` if the destination fails validation.
    pub fn from_bearing_distance(
        start: &Self,
        bearing: Degrees,
        distance: Metres,
    ) -> Result<Self, Error> {
        if !(0.0..=360.0).contains(&bearing.0) {
            return Err(Error::InvalidBearing(bearing.0));
        }
        if distance.0 < 0.0 {
            return Err(Error::InvalidDistance(distance.0));
        }

        let arc_length = Radians(distance.0 / EARTH_RADIUS.0);
        let (lat, lon) = geodesic::calculate_destination(
            start.lat_radians(),
            start.lon_radians(),
            Radians(bearing.0.to_radians()),
            arc_length,
        );

        Self::new(
            Degrees(wrap(lon.0.to_degrees(), MAX_LONGITUDE, 360.0)),
            Degrees(wrap(lat.0.to_degrees(), MAX_LONGITUDE, 360.0)),
        )
    }

    /// Normalize a raw latitude and fold it into -90..=90 degrees,
    /// or `None` when the raw value is missing.
    ///
    /// The fold repeatedly subtracts 180 above 90 and adds 180 below -90.
    /// It is a wrap, not a clamp: 100 folds to -80.
    ///
    /// # Examples
    /// ```
    /// use geo_sphere::Coordinate;
    ///
    /// assert_eq!(Some(-80.0), Coordinate::normalize_latitude(100.0));
    /// assert_eq!(Some(45.0), Coordinate::normalize_latitude("45"));
    /// assert_eq!(None, Coordinate::normalize_latitude(""));
    /// ```
    #[must_use]
    pub fn normalize_latitude<'a>(latitude: impl Into<RawValue<'a>>) -> Option<f64> {
        latitude
            .into()
            .normalize()
            .map(|value| wrap(value, MAX_LATITUDE, 180.0))
    }

    /// Normalize a raw longitude and fold it into -180..=180 degrees,
    /// or `None` when the raw value is missing.
    ///
    /// # Examples
    /// ```
    /// use geo_sphere::Coordinate;
    ///
    /// assert_eq!(Some(-170.0), Coordinate::normalize_longitude(190.0));
    /// assert_eq!(Some(170.0), Coordinate::normalize_longitude(-190.0));
    /// ```
    #[must_use]
    pub fn normalize_longitude<'a>(longitude: impl Into<RawValue<'a>>) -> Option<f64> {
        longitude
            .into()
            .normalize()
            .map(|value| wrap(value, MAX_LONGITUDE, 360.0))
    }

    /// Accessor for the longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.longitude
    }

    /// Accessor for the latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.latitude
    }

    /// The longitude in radians.
    #[must_use]
    pub fn lon_radians(&self) -> Radians {
        Radians(self.longitude.0.to_radians())
    }

    /// The latitude in radians.
    #[must_use]
    pub fn lat_radians(&self) -> Radians {
        Radians(self.latitude.0.to_radians())
    }

    /// A copy of this `Coordinate` with the longitude replaced.
    ///
    /// # Errors
    ///
    /// `Error::InvalidCoordinate` when the new longitude is outside
    /// -180..=180 degrees; the coordinate is left unchanged.
    pub fn with_longitude(self, longitude: Degrees) -> Result<Self, Error> {
        Self::new(longitude, self.latitude)
    }

    /// A copy of this `Coordinate` with the latitude replaced.
    ///
    /// # Errors
    ///
    /// `Error::InvalidCoordinate` when the new latitude is outside
    /// -90..=90 degrees; the coordinate is left unchanged.
    pub fn with_latitude(self, latitude: Degrees) -> Result<Self, Error> {
        Self::new(self.longitude, latitude)
    }

    /// Render the position as text.
    /// * `reverse_order` - latitude first when true, longitude first
    ///   otherwise.
    /// * `delimiter` - the separator between the two values.
    #[must_use]
    pub fn as_string(&self, reverse_order: bool, delimiter: &str) -> String {
        use alloc::format;

        if reverse_order {
            format!("{}{}{}", self.latitude.0, delimiter, self.longitude.0)
        } else {
            format!("{}{}{}", self.longitude.0, delimiter, self.latitude.0)
        }
    }
}

impl fmt::Display for Coordinate {
    /// Longitude first, comma separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude.0, self.latitude.0)
    }
}
