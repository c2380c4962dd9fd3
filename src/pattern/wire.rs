//! Wire-Format des Muster-Moduls (JSON, camelCase, getaggte Enums).
//!
//! Einzige Stelle, die das externe Format kennt. Antworten werden hier in die
//! internen Typen aus `contract` übersetzt und dabei auf Konsistenz geprüft.

use super::contract::{MeshInfo, Pattern, PatternConfig, PatternError, PatternRow, RequestId};
use crate::core::{ProfileCurve, SplineSegment};
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    id: u64,
    curve: WireCurve,
    config: WireConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCurve {
    segments: Vec<WireSegment>,
    start_radius: f32,
    end_radius: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSegment {
    start: [f32; 2],
    control1: [f32; 2],
    control2: [f32; 2],
    end: [f32; 2],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireConfig {
    stitch_width: f32,
    stitch_height: f32,
    start_with_magic_ring: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum WireResponse {
    Ok { id: u64, pattern: WirePattern },
    Error { id: u64, message: String },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePattern {
    rows: Vec<WireRow>,
    total_stitches: usize,
    mesh_info: WireMeshInfo,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRow {
    row: usize,
    stitch_count: usize,
    stitches: Vec<WireStitch>,
    height: f32,
    radius: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum WireStitch {
    MagicRing { count: usize },
    Sc { count: usize },
    Inc { count: usize },
    Dec { count: usize },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMeshInfo {
    arc_length: f32,
    height: f32,
    max_radius: f32,
}

/// Vom Backend dekodierte Anfrage.
#[derive(Debug, Clone)]
pub struct DecodedRequest {
    /// Korrelations-ID
    pub id: RequestId,
    /// Profilkurve (physische Einheiten)
    pub curve: ProfileCurve,
    /// Generierungsparameter
    pub config: PatternConfig,
}

/// Serialisiert eine Anfrage.
pub fn encode_request(
    id: RequestId,
    curve: &ProfileCurve,
    config: &PatternConfig,
) -> Result<String, PatternError> {
    let request = WireRequest {
        id: id.0,
        curve: WireCurve {
            segments: curve
                .segments
                .iter()
                .map(|s| WireSegment {
                    start: s.start.to_array(),
                    control1: s.control1.to_array(),
                    control2: s.control2.to_array(),
                    end: s.end.to_array(),
                })
                .collect(),
            start_radius: curve.start_radius,
            end_radius: curve.end_radius,
        },
        config: WireConfig {
            stitch_width: config.stitch_width,
            stitch_height: config.stitch_height,
            start_with_magic_ring: config.start_with_magic_ring,
        },
    };
    serde_json::to_string(&request).map_err(|e| PatternError::Malformed(e.to_string()))
}

/// Dekodiert eine Anfrage auf Backend-Seite.
pub fn decode_request(request: &str) -> Result<DecodedRequest, String> {
    let wire: WireRequest = serde_json::from_str(request).map_err(|e| e.to_string())?;
    let segments = wire
        .curve
        .segments
        .iter()
        .map(|s| SplineSegment {
            start: Vec2::from_array(s.start),
            control1: Vec2::from_array(s.control1),
            control2: Vec2::from_array(s.control2),
            end: Vec2::from_array(s.end),
        })
        .collect();
    Ok(DecodedRequest {
        id: RequestId(wire.id),
        curve: ProfileCurve {
            segments,
            start_radius: wire.curve.start_radius,
            end_radius: wire.curve.end_radius,
        },
        config: PatternConfig {
            stitch_width: wire.config.stitch_width,
            stitch_height: wire.config.stitch_height,
            start_with_magic_ring: wire.config.start_with_magic_ring,
        },
    })
}

/// Baut eine Fehlerantwort.
pub fn encode_error(id: RequestId, message: &str) -> String {
    serde_json::json!({
        "status": "error",
        "id": id.0,
        "message": message,
    })
    .to_string()
}

/// Baut eine Erfolgsantwort.
pub fn encode_pattern(id: RequestId, pattern: &Pattern) -> String {
    let response = WireResponse::Ok {
        id: id.0,
        pattern: WirePattern {
            rows: pattern.rows.iter().map(row_to_wire).collect(),
            total_stitches: pattern.total_stitches,
            mesh_info: WireMeshInfo {
                arc_length: pattern.mesh_info.arc_length,
                height: pattern.mesh_info.height,
                max_radius: pattern.mesh_info.max_radius,
            },
        },
    };
    match serde_json::to_string(&response) {
        Ok(json) => json,
        Err(e) => encode_error(id, &e.to_string()),
    }
}

/// Backend-Hilfsfunktion: dekodieren, generieren, Antwort kodieren.
pub fn serve<F>(request: &str, generate: F) -> String
where
    F: FnOnce(&ProfileCurve, &PatternConfig) -> Result<Pattern, String>,
{
    match decode_request(request) {
        Ok(decoded) => match generate(&decoded.curve, &decoded.config) {
            Ok(pattern) => encode_pattern(decoded.id, &pattern),
            Err(message) => encode_error(decoded.id, &message),
        },
        Err(message) => encode_error(RequestId(peek_id(request).unwrap_or(0)), &message),
    }
}

/// Liest nur die ID aus einer ansonsten unlesbaren Nachricht.
fn peek_id(message: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(message)
        .ok()?
        .get("id")?
        .as_u64()
}

/// Übersetzt eine Antwort in die internen Typen.
///
/// Prüft die Korrelations-ID und die Maschenzahlen jeder Runde.
pub fn translate(expected: RequestId, response: &str) -> Result<Pattern, PatternError> {
    let wire: WireResponse =
        serde_json::from_str(response).map_err(|e| PatternError::Malformed(e.to_string()))?;

    let (id, pattern) = match wire {
        WireResponse::Ok { id, pattern } => (id, pattern),
        WireResponse::Error { id, message } => {
            check_id(expected, id)?;
            return Err(PatternError::Backend(message));
        }
    };
    check_id(expected, id)?;

    let rows = pattern
        .rows
        .into_iter()
        .map(row_from_wire)
        .collect::<Result<Vec<_>, _>>()?;

    let sum: usize = rows.iter().map(|r| r.stitch_count).sum();
    if sum != pattern.total_stitches {
        return Err(PatternError::Malformed(format!(
            "Maschensumme {} weicht von totalStitches {} ab",
            sum, pattern.total_stitches
        )));
    }

    Ok(Pattern {
        rows,
        total_stitches: pattern.total_stitches,
        mesh_info: MeshInfo {
            arc_length: pattern.mesh_info.arc_length,
            height: pattern.mesh_info.height,
            max_radius: pattern.mesh_info.max_radius,
        },
    })
}

fn check_id(expected: RequestId, actual: u64) -> Result<(), PatternError> {
    if expected.0 == actual {
        Ok(())
    } else {
        Err(PatternError::Malformed(format!(
            "Antwort-ID #{} passt nicht zu Anfrage {}",
            actual, expected
        )))
    }
}

fn row_to_wire(row: &PatternRow) -> WireRow {
    let mut stitches = Vec::new();
    if row.magic_ring {
        stitches.push(WireStitch::MagicRing {
            count: row.stitch_count,
        });
    } else {
        if row.singles > 0 {
            stitches.push(WireStitch::Sc { count: row.singles });
        }
        if row.increases > 0 {
            stitches.push(WireStitch::Inc {
                count: row.increases,
            });
        }
        if row.decreases > 0 {
            stitches.push(WireStitch::Dec {
                count: row.decreases,
            });
        }
    }
    WireRow {
        row: row.number,
        stitch_count: row.stitch_count,
        stitches,
        height: row.height,
        radius: row.radius,
    }
}

fn row_from_wire(wire: WireRow) -> Result<PatternRow, PatternError> {
    let mut row = PatternRow {
        number: wire.row,
        stitch_count: wire.stitch_count,
        singles: 0,
        increases: 0,
        decreases: 0,
        magic_ring: false,
        height: wire.height,
        radius: wire.radius,
    };
    let mut ring = 0;
    for stitch in wire.stitches {
        match stitch {
            WireStitch::MagicRing { count } => {
                row.magic_ring = true;
                ring += count;
            }
            WireStitch::Sc { count } => row.singles += count,
            WireStitch::Inc { count } => row.increases += count,
            WireStitch::Dec { count } => row.decreases += count,
        }
    }

    let produced = ring + row.singles + 2 * row.increases + row.decreases;
    if produced != row.stitch_count {
        return Err(PatternError::Malformed(format!(
            "Runde {}: {} Maschen angegeben, {} gezählt",
            row.number, row.stitch_count, produced
        )));
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> ProfileCurve {
        ProfileCurve::from_points(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 2.0),
            Vec2::new(0.0, 4.0),
        ])
    }

    fn pattern() -> Pattern {
        Pattern {
            rows: vec![
                PatternRow {
                    number: 1,
                    stitch_count: 6,
                    singles: 0,
                    increases: 0,
                    decreases: 0,
                    magic_ring: true,
                    height: 0.3,
                    radius: 0.5,
                },
                PatternRow {
                    number: 2,
                    stitch_count: 12,
                    singles: 0,
                    increases: 6,
                    decreases: 0,
                    magic_ring: false,
                    height: 0.9,
                    radius: 1.2,
                },
            ],
            total_stitches: 18,
            mesh_info: MeshInfo {
                arc_length: 8.0,
                height: 4.0,
                max_radius: 1.8,
            },
        }
    }

    #[test]
    fn test_request_uses_camel_case_fields() {
        let json = encode_request(RequestId(7), &curve(), &PatternConfig::default())
            .expect("Anfrage muss serialisierbar sein");
        assert!(json.contains("\"startRadius\""));
        assert!(json.contains("\"stitchWidth\""));
        assert!(json.contains("\"startWithMagicRing\""));

        let decoded = decode_request(&json).expect("Anfrage muss dekodierbar sein");
        assert_eq!(decoded.id, RequestId(7));
        assert_eq!(decoded.curve, curve());
    }

    #[test]
    fn test_translate_accepts_consistent_response() {
        let json = encode_pattern(RequestId(3), &pattern());
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"type\":\"magicRing\""));

        let translated = translate(RequestId(3), &json).expect("Antwort ist konsistent");
        assert_eq!(translated, pattern());
    }

    #[test]
    fn test_translate_maps_backend_error() {
        let json = encode_error(RequestId(9), "Kurve zu kurz");
        assert_eq!(
            translate(RequestId(9), &json),
            Err(PatternError::Backend("Kurve zu kurz".into()))
        );
    }

    #[test]
    fn test_translate_rejects_foreign_id() {
        let json = encode_pattern(RequestId(1), &pattern());
        assert!(matches!(
            translate(RequestId(2), &json),
            Err(PatternError::Malformed(_))
        ));
    }

    #[test]
    fn test_translate_rejects_inconsistent_counts() {
        let json = r#"{
            "status": "ok",
            "id": 5,
            "pattern": {
                "rows": [
                    { "row": 1, "stitchCount": 8, "height": 0.0, "radius": 0.0,
                      "stitches": [ { "type": "sc", "count": 6 } ] }
                ],
                "totalStitches": 8,
                "meshInfo": { "arcLength": 1.0, "height": 1.0, "maxRadius": 1.0 }
            }
        }"#;
        assert!(matches!(
            translate(RequestId(5), json),
            Err(PatternError::Malformed(_))
        ));
    }

    #[test]
    fn test_translate_rejects_garbage() {
        assert!(matches!(
            translate(RequestId(1), "kein json"),
            Err(PatternError::Malformed(_))
        ));
    }

    #[test]
    fn test_serve_reports_undecodable_request_with_peeked_id() {
        let response = serve(r#"{"id": 12, "curve": 3}"#, |_, _| Ok(Pattern::default()));
        assert!(matches!(
            translate(RequestId(12), &response),
            Err(PatternError::Backend(_))
        ));
    }
}
