//! Umrechnung zwischen Canvas-Pixeln und physischen Einheiten (Zentimeter).
//!
//! Nur die Darstellung im Zeichen-Canvas arbeitet in Pixeln. Kurve, Mesh,
//! Kamera und alles, was an den Muster-Generator geht, ist in Zentimetern.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Umrechnungsfaktor: Pixel pro Zentimeter.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 10.0;

/// Linearer Umrechnungsfaktor Pixel ↔ physische Einheit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    /// Pixel pro physischer Einheit (immer > 0)
    pub pixels_per_unit: f32,
}

impl UnitScale {
    /// Kleinster zulässiger Faktor; kleinere Werte werden angehoben.
    const MIN_PIXELS_PER_UNIT: f32 = 1e-3;

    /// Erstellt eine Skala. Nicht-positive oder nicht-endliche Faktoren
    /// fallen auf den Standardwert bzw. das Minimum zurück.
    pub fn new(pixels_per_unit: f32) -> Self {
        let ppu = if pixels_per_unit.is_finite() {
            pixels_per_unit.max(Self::MIN_PIXELS_PER_UNIT)
        } else {
            DEFAULT_PIXELS_PER_UNIT
        };
        Self {
            pixels_per_unit: ppu,
        }
    }

    /// Pixel → physische Einheit.
    #[inline]
    pub fn to_physical(&self, pixel: Vec2) -> Vec2 {
        pixel / self.pixels_per_unit
    }

    /// Physische Einheit → Pixel.
    #[inline]
    pub fn to_pixels(&self, physical: Vec2) -> Vec2 {
        physical * self.pixels_per_unit
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pixel_to_physical_and_back() {
        let scale = UnitScale::new(10.0);
        let physical = scale.to_physical(Vec2::new(80.0, 125.0));
        assert_relative_eq!(physical.x, 8.0);
        assert_relative_eq!(physical.y, 12.5);

        let pixels = scale.to_pixels(physical);
        assert_relative_eq!(pixels.x, 80.0);
        assert_relative_eq!(pixels.y, 125.0);
    }

    #[test]
    fn test_invalid_factor_falls_back() {
        assert_eq!(UnitScale::new(f32::NAN).pixels_per_unit, DEFAULT_PIXELS_PER_UNIT);
        assert!(UnitScale::new(-5.0).pixels_per_unit > 0.0);
    }
}
