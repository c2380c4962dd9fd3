//! Geordnete Kontrollpunkte des Profils im Canvas-Pixelraum.
//!
//! Der erste und der letzte Punkt liegen auf der Rotationsachse (x = 0) und
//! sind in x nicht verschiebbar. Die Edit-Operationen setzen diese Regel und
//! die Mindestanzahl von 3 Punkten durch; Ablehnungen lassen die Menge
//! unverändert.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Mindestanzahl an Kontrollpunkten, unter die nicht gelöscht werden darf.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Canvas-Höhe, auf die sich die Standardform bezieht.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 500.0;

/// Standardprofil (Pixel, Ursprung unten links, y nach oben).
const DEFAULT_SHAPE: [[f32; 2]; 5] = [
    [0.0, 50.0],
    [80.0, 125.0],
    [100.0, 250.0],
    [80.0, 375.0],
    [0.0, 450.0],
];

/// Grund, warum ein Edit-Command abgelehnt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditRejection {
    /// Löschen würde die Mindestanzahl unterschreiten
    #[error("Mindestens {} Kontrollpunkte erforderlich", MIN_CONTROL_POINTS)]
    BelowMinimum,
    /// Start- und Endpunkt liegen fest auf der Achse
    #[error("Start- und Endpunkt auf der Achse können nicht gelöscht werden")]
    AnchoredPoint,
    /// Index existiert nicht
    #[error("Kontrollpunkt {0} existiert nicht")]
    IndexOutOfRange(usize),
}

/// Geordnete Kontrollpunkte in Pixel-Koordinaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPointSet {
    points: Vec<Vec2>,
}

impl ControlPointSet {
    /// Erstellt eine Menge aus beliebigen Punkten (keine Validierung).
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Standardform für die gegebene Canvas-Höhe.
    ///
    /// Die Höhen skalieren proportional zu `canvas_height`, die Radien bleiben.
    pub fn default_shape(canvas_height: f32) -> Self {
        let scale = if canvas_height.is_finite() && canvas_height > 0.0 {
            canvas_height / DEFAULT_CANVAS_HEIGHT
        } else {
            1.0
        };
        Self {
            points: DEFAULT_SHAPE
                .iter()
                .map(|&[x, y]| Vec2::new(x, y * scale))
                .collect(),
        }
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gibt den Punkt am Index zurück.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Liegt der Index auf einem der beiden Achsen-Ankerpunkte?
    pub fn is_anchor(&self, index: usize) -> bool {
        !self.points.is_empty() && (index == 0 || index == self.points.len() - 1)
    }

    /// Fügt einen Punkt zwischen dem nächstgelegenen Punktpaar ein.
    ///
    /// Vor dem ersten oder nach dem letzten Punkt wird nie eingefügt, damit die
    /// Anker an den Enden bleiben. Gibt den Index des neuen Punkts zurück.
    pub fn insert(&mut self, position: Vec2) -> usize {
        if self.points.len() < 2 {
            self.points.push(position);
            return self.points.len() - 1;
        }

        let mut best_index = 1;
        let mut best_distance = f32::INFINITY;
        for (i, pair) in self.points.windows(2).enumerate() {
            let distance = distance_to_segment(position, pair[0], pair[1]);
            if distance < best_distance {
                best_distance = distance;
                best_index = i + 1;
            }
        }

        self.points.insert(best_index, position);
        best_index
    }

    /// Verschiebt einen Punkt. Ankerpunkte bleiben auf der Achse (nur y ändert sich).
    pub fn move_point(&mut self, index: usize, position: Vec2) -> Result<(), EditRejection> {
        let anchored = self.is_anchor(index);
        let Some(point) = self.points.get_mut(index) else {
            return Err(EditRejection::IndexOutOfRange(index));
        };

        *point = if anchored {
            Vec2::new(0.0, position.y)
        } else {
            position
        };
        Ok(())
    }

    /// Löscht einen Punkt oder lehnt ab, ohne die Menge zu verändern.
    pub fn delete(&mut self, index: usize) -> Result<Vec2, EditRejection> {
        if index >= self.points.len() {
            return Err(EditRejection::IndexOutOfRange(index));
        }
        if self.is_anchor(index) {
            return Err(EditRejection::AnchoredPoint);
        }
        if self.points.len() <= MIN_CONTROL_POINTS {
            return Err(EditRejection::BelowMinimum);
        }
        Ok(self.points.remove(index))
    }

    /// Index des nächstgelegenen Punkts innerhalb von `max_distance`.
    pub fn nearest(&self, position: Vec2, max_distance: f32) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(position)))
            .filter(|&(_, d)| d <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Strukturhash über die Bitmuster aller Koordinaten.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash_into(&mut hasher);
        hasher.finish()
    }

    /// Schreibt die Koordinaten-Bitmuster in einen bestehenden Hasher.
    pub fn hash_into<H: Hasher>(&self, hasher: &mut H) {
        self.points.len().hash(hasher);
        for p in &self.points {
            p.x.to_bits().hash(hasher);
            p.y.to_bits().hash(hasher);
        }
    }
}

impl Default for ControlPointSet {
    fn default() -> Self {
        Self::default_shape(DEFAULT_CANVAS_HEIGHT)
    }
}

/// Abstand eines Punkts zur Strecke `a`–`b`.
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape_matches_reference_profile() {
        let set = ControlPointSet::default();
        assert_eq!(set.len(), 5);
        assert_eq!(set.get(0), Some(Vec2::new(0.0, 50.0)));
        assert_eq!(set.get(2), Some(Vec2::new(100.0, 250.0)));
        assert_eq!(set.get(4), Some(Vec2::new(0.0, 450.0)));
    }

    #[test]
    fn test_default_shape_scales_heights_with_canvas() {
        let set = ControlPointSet::default_shape(1000.0);
        assert_eq!(set.get(1), Some(Vec2::new(80.0, 250.0)));
        assert_eq!(set.get(4), Some(Vec2::new(0.0, 900.0)));
    }

    #[test]
    fn test_delete_interior_point() {
        let mut set = ControlPointSet::default();
        let removed = set.delete(2).expect("Innerer Punkt muss löschbar sein");
        assert_eq!(removed, Vec2::new(100.0, 250.0));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_delete_anchor_is_rejected_without_mutation() {
        let mut set = ControlPointSet::default();
        let before = set.clone();

        assert_eq!(set.delete(0), Err(EditRejection::AnchoredPoint));
        assert_eq!(set.delete(4), Err(EditRejection::AnchoredPoint));
        assert_eq!(set, before);
    }

    #[test]
    fn test_delete_below_minimum_is_rejected() {
        let mut set = ControlPointSet::from_points(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 100.0),
        ]);
        assert_eq!(set.delete(1), Err(EditRejection::BelowMinimum));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_delete_unknown_index_is_rejected() {
        let mut set = ControlPointSet::default();
        assert_eq!(set.delete(17), Err(EditRejection::IndexOutOfRange(17)));
    }

    #[test]
    fn test_move_anchor_keeps_it_on_axis() {
        let mut set = ControlPointSet::default();
        set.move_point(0, Vec2::new(40.0, 30.0))
            .expect("Anker darf vertikal bewegt werden");
        assert_eq!(set.get(0), Some(Vec2::new(0.0, 30.0)));
    }

    #[test]
    fn test_move_interior_point_accepts_negative_x() {
        let mut set = ControlPointSet::default();
        set.move_point(1, Vec2::new(-20.0, 120.0))
            .expect("Innerer Punkt ist frei verschiebbar");
        assert_eq!(set.get(1), Some(Vec2::new(-20.0, 120.0)));
    }

    #[test]
    fn test_insert_lands_between_nearest_pair() {
        let mut set = ControlPointSet::default();
        let index = set.insert(Vec2::new(95.0, 310.0));
        assert_eq!(index, 3);
        assert_eq!(set.len(), 6);
        assert_eq!(set.get(0), Some(Vec2::new(0.0, 50.0)));
        assert_eq!(set.get(5), Some(Vec2::new(0.0, 450.0)));
    }

    #[test]
    fn test_nearest_respects_max_distance() {
        let set = ControlPointSet::default();
        assert_eq!(set.nearest(Vec2::new(82.0, 127.0), 10.0), Some(1));
        assert_eq!(set.nearest(Vec2::new(200.0, 200.0), 10.0), None);
    }

    #[test]
    fn test_structural_hash_tracks_changes() {
        let mut set = ControlPointSet::default();
        let before = set.structural_hash();
        assert_eq!(before, ControlPointSet::default().structural_hash());

        set.move_point(2, Vec2::new(101.0, 250.0))
            .expect("Innerer Punkt ist frei verschiebbar");
        assert_ne!(before, set.structural_hash());
    }
}
