//! Einfaches Referenz-Backend: Runden entlang der Bogenlänge.
//!
//! Alle `stitch_height` Bogenlänge beginnt eine Runde, deren Maschenzahl sich
//! aus dem Umfang ergibt. Zu- und Abnahmen folgen aus den Maschenzahlen
//! benachbarter Runden.

use super::contract::{
    MeshInfo, Pattern, PatternBackend, PatternConfig, PatternRow, MIN_STITCHES_PER_ROW,
};
use super::wire;
use crate::core::{sample, ProfileCurve, SampledCurvePoint};
use std::f32::consts::TAU;

/// Abtastpunkte für die Bogenlängen-Tabelle.
const ARC_SAMPLES: usize = 512;

/// Radius, unter dem eine Runde als Pol gilt.
const POLE_RADIUS: f32 = 1e-3;

/// Obergrenze für die Rundenzahl eines Musters.
const MAX_ROWS: usize = 10_000;

/// Referenz-Backend ohne externe Abhängigkeiten.
#[derive(Debug, Default, Clone, Copy)]
pub struct RingPatternBackend;

impl PatternBackend for RingPatternBackend {
    fn name(&self) -> &str {
        "ring"
    }

    fn handle(&mut self, request: &str) -> String {
        wire::serve(request, generate)
    }
}

/// Erzeugt das Muster direkt aus der Kurve.
pub fn generate(curve: &ProfileCurve, config: &PatternConfig) -> Result<Pattern, String> {
    if curve.is_empty() {
        return Err("Profilkurve ist leer".into());
    }
    if !(config.stitch_width.is_finite() && config.stitch_width > 0.0) {
        return Err(format!("Ungültige Maschenbreite: {}", config.stitch_width));
    }
    if !(config.stitch_height.is_finite() && config.stitch_height > 0.0) {
        return Err(format!("Ungültige Maschenhöhe: {}", config.stitch_height));
    }

    let samples = sample(curve, ARC_SAMPLES);
    let table = ArcTable::new(&samples);
    if table.total <= f32::EPSILON {
        return Err("Profilkurve hat keine Länge".into());
    }

    let rows_needed = (table.total / config.stitch_height).round();
    if rows_needed.is_nan() || rows_needed > MAX_ROWS as f32 {
        return Err(format!(
            "Zu viele Runden ({}), Maschenhöhe {} cm ist zu klein",
            rows_needed, config.stitch_height
        ));
    }
    let row_count = (rows_needed as usize).max(1);
    let step = table.total / row_count as f32;

    let mut rows: Vec<PatternRow> = Vec::with_capacity(row_count);
    for k in 0..row_count {
        let point = table.at((k as f32 + 0.5) * step);
        let target = target_stitches(point.radius, config.stitch_width);

        let row = match rows.last() {
            None => first_row(point, target, curve.start_radius, config),
            Some(prev) => next_row(prev, k + 1, target, point),
        };
        rows.push(row);
    }

    let total_stitches = rows.iter().map(|r| r.stitch_count).sum();
    let (min_h, max_h) = samples
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.height), hi.max(s.height))
        });
    let max_radius = samples.iter().map(|s| s.radius).fold(0.0, f32::max);

    log::debug!(
        "Ring-Backend: {} Runden, {} Maschen, Bogenlänge {:.2}",
        rows.len(),
        total_stitches,
        table.total
    );

    Ok(Pattern {
        rows,
        total_stitches,
        mesh_info: MeshInfo {
            arc_length: table.total,
            height: max_h - min_h,
            max_radius,
        },
    })
}

/// `max(round(2πr / stitch_width), 6)`
fn target_stitches(radius: f32, stitch_width: f32) -> usize {
    ((TAU * radius / stitch_width).round() as usize).max(MIN_STITCHES_PER_ROW)
}

fn first_row(
    point: SampledCurvePoint,
    target: usize,
    start_radius: f32,
    config: &PatternConfig,
) -> PatternRow {
    let magic_ring = config.start_with_magic_ring && start_radius <= POLE_RADIUS;
    let stitch_count = if magic_ring {
        MIN_STITCHES_PER_ROW
    } else {
        target
    };
    PatternRow {
        number: 1,
        stitch_count,
        singles: if magic_ring { 0 } else { stitch_count },
        increases: 0,
        decreases: 0,
        magic_ring,
        height: point.height,
        radius: point.radius,
    }
}

/// Verbraucht `prev.stitch_count` Maschen: fM + zun + 2·abn.
fn next_row(
    prev: &PatternRow,
    number: usize,
    target: usize,
    point: SampledCurvePoint,
) -> PatternRow {
    let previous = prev.stitch_count;
    let (singles, increases, decreases) = if target > previous {
        let inc = (target - previous).min(previous);
        (previous - inc, inc, 0)
    } else {
        let dec = (previous - target).min(previous / 2);
        (previous - 2 * dec, 0, dec)
    };
    PatternRow {
        number,
        stitch_count: singles + 2 * increases + decreases,
        singles,
        increases,
        decreases,
        magic_ring: false,
        height: point.height,
        radius: point.radius,
    }
}

/// Kumulierte Bogenlänge über die Abtastpunkte.
struct ArcTable<'a> {
    samples: &'a [SampledCurvePoint],
    cumulative: Vec<f32>,
    total: f32,
}

impl<'a> ArcTable<'a> {
    fn new(samples: &'a [SampledCurvePoint]) -> Self {
        let mut cumulative = Vec::with_capacity(samples.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in samples.windows(2) {
            let dr = pair[1].radius - pair[0].radius;
            let dh = pair[1].height - pair[0].height;
            total += (dr * dr + dh * dh).sqrt();
            cumulative.push(total);
        }
        Self {
            samples,
            cumulative,
            total,
        }
    }

    /// Linear interpolierter Punkt bei Bogenlänge `s`.
    fn at(&self, s: f32) -> SampledCurvePoint {
        let s = s.clamp(0.0, self.total);
        let idx = self.cumulative.partition_point(|&c| c < s).max(1);
        let Some(&b) = self.samples.get(idx) else {
            return self
                .samples
                .last()
                .copied()
                .unwrap_or(SampledCurvePoint::new(0.0, 0.0));
        };
        let a = self.samples[idx - 1];
        let span = self.cumulative[idx] - self.cumulative[idx - 1];
        let t = if span > f32::EPSILON {
            (s - self.cumulative[idx - 1]) / span
        } else {
            0.0
        };
        SampledCurvePoint::new(
            a.radius + (b.radius - a.radius) * t,
            a.height + (b.height - a.height) * t,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::RequestId;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn ball() -> ProfileCurve {
        ProfileCurve::from_points(&[
            Vec2::new(0.0, 5.0),
            Vec2::new(8.0, 12.5),
            Vec2::new(10.0, 25.0),
            Vec2::new(8.0, 37.5),
            Vec2::new(0.0, 45.0),
        ])
    }

    #[test]
    fn test_rows_follow_arc_length() {
        let config = PatternConfig {
            stitch_width: 1.0,
            stitch_height: 1.0,
            start_with_magic_ring: true,
        };
        let pattern = generate(&ball(), &config).expect("Muster muss entstehen");
        assert_relative_eq!(
            pattern.row_count() as f32,
            pattern.mesh_info.arc_length.round(),
            epsilon = 1.0
        );
        assert_eq!(
            pattern.total_stitches,
            pattern.rows.iter().map(|r| r.stitch_count).sum::<usize>()
        );
    }

    #[test]
    fn test_first_row_is_magic_ring_at_pole() {
        let pattern = generate(&ball(), &PatternConfig::default()).expect("Muster");
        let first = &pattern.rows[0];
        assert!(first.magic_ring);
        assert_eq!(first.stitch_count, MIN_STITCHES_PER_ROW);
    }

    #[test]
    fn test_open_start_skips_magic_ring() {
        let tube = ProfileCurve::from_points(&[
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 5.0),
            Vec2::new(3.0, 10.0),
        ]);
        let pattern = generate(&tube, &PatternConfig::default()).expect("Muster");
        assert!(!pattern.rows[0].magic_ring);
        assert!(pattern.rows[0].stitch_count > MIN_STITCHES_PER_ROW);
    }

    #[test]
    fn test_every_row_consumes_previous_stitches() {
        let pattern = generate(&ball(), &PatternConfig::default()).expect("Muster");
        for pair in pattern.rows.windows(2) {
            let (prev, row) = (&pair[0], &pair[1]);
            assert_eq!(row.singles + row.increases + 2 * row.decreases, prev.stitch_count);
            assert!(row.stitch_count >= MIN_STITCHES_PER_ROW / 2);
        }
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = PatternConfig {
            stitch_width: 0.0,
            ..PatternConfig::default()
        };
        assert!(generate(&ball(), &config).is_err());
        assert!(generate(&ProfileCurve::default(), &PatternConfig::default()).is_err());
    }

    #[test]
    fn test_tiny_stitch_height_is_rejected() {
        let config = PatternConfig {
            stitch_height: 1e-9,
            ..PatternConfig::default()
        };
        assert!(generate(&ball(), &config).is_err());
    }

    #[test]
    fn test_handle_speaks_wire_format() {
        let request = wire::encode_request(RequestId(11), &ball(), &PatternConfig::default())
            .expect("Anfrage");
        let response = RingPatternBackend.handle(&request);
        let pattern = wire::translate(RequestId(11), &response)
            .expect("Antwort muss übersetzbar sein");
        assert!(pattern.total_stitches > 0);
    }
}
