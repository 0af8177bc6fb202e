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

//! The error module defines the errors reported by coordinate validation
//! and by the direct geodesic problem.

use thiserror::Error;

/// The errors that can occur when constructing coordinates or solving the
/// direct geodesic problem.
///
/// Each variant carries the offending input value.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// A longitude outside -180..=180 degrees or a latitude outside
    /// -90..=90 degrees.
    #[error("coordinate value out of range: {0}")]
    InvalidCoordinate(f64),

    /// A bearing outside 0..=360 degrees.
    #[error("bearing must be between 0 and 360 degrees: {0}")]
    InvalidBearing(f64),

    /// A negative distance, in metres.
    #[error("distance must be zero or greater, in metres: {0}")]
    InvalidDistance(f64),
}
