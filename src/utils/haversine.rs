//! Great-circle distance and bearing between two points.
//!
//! Neither function validates its input. Coordinates outside
//! lat [-90, 90], lon [-180, 180] or non-finite values give NaN or
//! meaningless results rather than an error; validate with
//! [`Coordinate::validate`](crate::Coordinate::validate) first when the
//! input is untrusted.

use crate::config::EARTH_RADIUS_METERS;
use crate::location::AsCoordinate;

/// Distance in meters between two points using the Haversine formula.
///
/// Symmetric bit for bit: swapping the arguments only swaps the
/// operands of commutative operations, and the differences are squared
/// through `sin²`, so `distance(a, b) == distance(b, a)` exactly.
///
/// Near-antipodal pairs can round `h` just above 1, which would make
/// `sqrt(1 - h)` NaN; `h` is clamped to [0, 1] so those pairs measure
/// half the circumference instead. The clamp keeps NaN, so invalid
/// input still yields NaN.
pub fn distance(a: &impl AsCoordinate, b: &impl AsCoordinate) -> f64 {
    let a = a.coordinate();
    let b = b.coordinate();

    let phi_1 = a.latitude.to_radians();
    let phi_2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let sin_half_phi = (delta_phi / 2.0).sin();
    let sin_half_lambda = (delta_lambda / 2.0).sin();
    let h = sin_half_phi * sin_half_phi
        + phi_1.cos() * phi_2.cos() * sin_half_lambda * sin_half_lambda;
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial compass bearing from `from` towards `to`, in [0, 360).
pub fn bearing(from: &impl AsCoordinate, to: &impl AsCoordinate) -> f64 {
    let from = from.coordinate();
    let to = to.coordinate();

    let phi_1 = from.latitude.to_radians();
    let phi_2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let y = delta_lambda.sin() * phi_2.cos();
    let x = phi_1.cos() * phi_2.sin() - phi_1.sin() * phi_2.cos() * delta_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
