//! Sabine reverberation formula and its inverse
//!
//! The inverse maps a target RT60 to the energy absorption coefficient of a
//! uniform shoebox and to the image-source order needed to cover `c * rt60`
//! meters of propagation.

use crate::error::{Result, SamplingError};
use crate::geometry::RoomDims;

/// Speed of sound in air at ~20 °C (m/s)
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Sabine coefficient for 3D rooms: 24 ln(10)
fn sabine_coefficient() -> f64 {
    24.0 * std::f64::consts::LN_10
}

/// Invert Sabine's formula.
///
/// Returns `(energy_absorption, max_order)`. Fails when the room is too large
/// for the requested RT60 (absorption above 1).
pub fn inverse_sabine(rt60: f64, room: &RoomDims, c: f64) -> Result<(f64, u32)> {
    if !rt60.is_finite() || rt60 <= 0.0 {
        return Err(SamplingError::InversionFailed {
            rt60,
            reason: "RT60 must be a positive finite number".into(),
        });
    }

    let volume = room.volume();
    let surface = room.surface_area();
    let absorption = sabine_coefficient() * volume / (c * surface * rt60);

    if absorption > 1.0 {
        return Err(SamplingError::InversionFailed {
            rt60,
            reason: format!(
                "absorption {absorption:.3} > 1, room may be too large for required RT60"
            ),
        });
    }

    // Radius of the largest sphere inside the diamond of image rooms
    let [w, d, h] = room.as_array();
    let radius = [(w, d), (w, h), (d, h)]
        .iter()
        .map(|&(l1, l2)| l1 * l2 / (l1 * l1 + l2 * l2).sqrt())
        .fold(f64::INFINITY, f64::min);

    let order = (c * rt60 / radius - 1.0).ceil().max(0.0);

    Ok((absorption, order as u32))
}

/// Forward Sabine formula: RT60 of a uniform shoebox with the given absorption
pub fn sabine_rt60(absorption: f64, room: &RoomDims, c: f64) -> f64 {
    sabine_coefficient() * room.volume() / (c * room.surface_area() * absorption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_round_trip() {
        let room = RoomDims::new(6.0, 4.0, 3.0);
        let (absorption, _) = inverse_sabine(0.4, &room, SPEED_OF_SOUND).unwrap();
        assert!(absorption > 0.0 && absorption <= 1.0);
        assert_relative_eq!(
            sabine_rt60(absorption, &room, SPEED_OF_SOUND),
            0.4,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_max_order() {
        // Cube of side 4: R = 4 / sqrt(2); order = ceil(343 * 0.3 * sqrt(2) / 4 - 1)
        let room = RoomDims::new(4.0, 4.0, 4.0);
        let (_, order) = inverse_sabine(0.3, &room, SPEED_OF_SOUND).unwrap();
        let expected = (343.0 * 0.3 * 2f64.sqrt() / 4.0 - 1.0).ceil() as u32;
        assert_eq!(order, expected);
    }

    #[test]
    fn test_short_rt60_in_large_room_fails() {
        let room = RoomDims::new(10.0, 10.0, 10.0);
        let err = inverse_sabine(0.05, &room, SPEED_OF_SOUND).unwrap_err();
        assert!(matches!(err, SamplingError::InversionFailed { .. }));
    }

    #[test]
    fn test_non_positive_rt60_fails() {
        let room = RoomDims::new(4.0, 4.0, 3.0);
        assert!(inverse_sabine(0.0, &room, SPEED_OF_SOUND).is_err());
        assert!(inverse_sabine(f64::NAN, &room, SPEED_OF_SOUND).is_err());
    }
}
