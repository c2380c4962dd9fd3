//! Auswertung der Bézier-Segmente und Abtastung der gesamten Profilkurve.

use super::spline::{ProfileCurve, SplineSegment};
use glam::Vec2;

/// Stützstellen pro Segment für die Längen-Approximation.
const LENGTH_SAMPLES: usize = 16;

/// Segmente kürzer als dieser Wert gelten als degeneriert.
const DEGENERATE_LENGTH: f32 = 1e-6;

/// Abgetasteter Kurvenpunkt (physische Einheiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledCurvePoint {
    /// Abstand zur Rotationsachse (≥ 0 nach Clamping)
    pub radius: f32,
    /// Höhe entlang der Rotationsachse
    pub height: f32,
}

impl SampledCurvePoint {
    /// Erstellt einen Abtastpunkt; negative Radien werden auf 0 gesetzt.
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            height,
        }
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn evaluate(segment: &SplineSegment, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * segment.start
        + 3.0 * inv2 * t * segment.control1
        + 3.0 * inv * t2 * segment.control2
        + t2 * t * segment.end
}

/// Approximierte Bogenlänge eines Segments über Polylinien-Abschnitte.
pub fn approx_segment_length(segment: &SplineSegment) -> f32 {
    let mut length = 0.0;
    let mut prev = segment.start;
    for i in 1..=LENGTH_SAMPLES {
        let p = evaluate(segment, i as f32 / LENGTH_SAMPLES as f32);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Tastet die Kurve mit genau `total_samples` Punkten ab (mindestens 2).
///
/// Die `total_samples - 1` Intervalle werden proportional zur Segmentlänge
/// verteilt. Jedes nicht-degenerierte Segment erhält mindestens ein Intervall,
/// sofern genug vorhanden sind. Innerhalb eines Segments wird gleichmäßig in
/// `t` abgetastet. Radien werden auf ≥ 0 begrenzt.
pub fn sample(curve: &ProfileCurve, total_samples: usize) -> Vec<SampledCurvePoint> {
    let Some(first) = curve.segments.first() else {
        return Vec::new();
    };

    let total_samples = total_samples.max(2);
    let lengths: Vec<f32> = curve.segments.iter().map(approx_segment_length).collect();
    let intervals = allot_intervals(&lengths, total_samples - 1);

    let mut samples = Vec::with_capacity(total_samples);
    samples.push(to_sample(first.start));

    for (segment, &count) in curve.segments.iter().zip(&intervals) {
        for j in 1..=count {
            let t = j as f32 / count as f32;
            samples.push(to_sample(evaluate(segment, t)));
        }
    }

    samples
}

/// Gesamtlänge der Kurve (Summe der approximierten Segmentlängen).
pub fn approx_curve_length(curve: &ProfileCurve) -> f32 {
    curve.segments.iter().map(approx_segment_length).sum()
}

#[inline]
fn to_sample(p: Vec2) -> SampledCurvePoint {
    SampledCurvePoint::new(p.x, p.y)
}

/// Verteilt `total` Intervalle nach größtem Rest proportional zu `lengths`.
///
/// Die Summe der Ergebnisse ist immer exakt `total`.
fn allot_intervals(lengths: &[f32], total: usize) -> Vec<usize> {
    let n = lengths.len();
    if n == 0 {
        return Vec::new();
    }

    let degenerate: Vec<bool> = lengths
        .iter()
        .map(|&l| !l.is_finite() || l < DEGENERATE_LENGTH)
        .collect();
    let live = degenerate.iter().filter(|&&d| !d).count();

    // Nur degenerierte Segmente: gleichmäßig verteilen
    let weights: Vec<f32> = if live == 0 {
        vec![1.0; n]
    } else {
        lengths
            .iter()
            .zip(&degenerate)
            .map(|(&l, &d)| if d { 0.0 } else { l })
            .collect()
    };
    let weight_sum: f32 = weights.iter().sum();
    let guarantee_one = live > 0 && total >= live;

    let ideal: Vec<f32> = weights
        .iter()
        .map(|w| total as f32 * w / weight_sum)
        .collect();
    let minimum: Vec<usize> = degenerate
        .iter()
        .map(|&d| usize::from(guarantee_one && !d))
        .collect();

    let mut counts: Vec<usize> = ideal
        .iter()
        .zip(&minimum)
        .map(|(&x, &min)| (x.floor() as usize).max(min))
        .collect();

    let mut assigned: usize = counts.iter().sum();

    // Zu viele (durch Mindestwerte): bei größtem Überschuss wieder abziehen
    while assigned > total {
        let candidate = (0..n)
            .filter(|&i| counts[i] > minimum[i])
            .max_by(|&a, &b| {
                let ea = counts[a] as f32 - ideal[a];
                let eb = counts[b] as f32 - ideal[b];
                ea.total_cmp(&eb)
            });
        let Some(i) = candidate else {
            break;
        };
        counts[i] -= 1;
        assigned -= 1;
    }

    // Zu wenige: nach größtem Rest auffüllen
    while assigned < total {
        let candidate = (0..n).filter(|&i| weights[i] > 0.0).max_by(|&a, &b| {
            let ra = ideal[a] - counts[a] as f32;
            let rb = ideal[b] - counts[b] as f32;
            ra.total_cmp(&rb)
        });
        let Some(i) = candidate else {
            break;
        };
        counts[i] += 1;
        assigned += 1;
    }

    counts
}
