// src/domain/geo.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Rough conversion factor at the equator: one degree of longitude spans
/// 40075 km / 360. Areas computed with it are a flat-Earth approximation
/// and only meaningful for small parcels near the equator.
pub const METERS_PER_DEGREE: f64 = 40_075_000.0 / 360.0;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
}

/// Tag stored alongside each mapping row (`jenis_geometri`). Must agree
/// with the `type` field of the stored GeoJSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POINT" => Ok(GeometryKind::Point),
            "LINESTRING" => Ok(GeometryKind::LineString),
            "POLYGON" => Ok(GeometryKind::Polygon),
            "MULTIPOLYGON" => Ok(GeometryKind::MultiPolygon),
            other => Err(DomainError::Validation(format!(
                "unsupported geometry type: {other}"
            ))),
        }
    }
}

/// GeoJSON geometry as it arrives on the wire and as it is stored in the
/// JSONB column. Coordinates are `[lon, lat]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point { .. } => GeometryKind::Point,
            Geometry::LineString { .. } => GeometryKind::LineString,
            Geometry::Polygon { .. } => GeometryKind::Polygon,
            Geometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
        }
    }

    pub fn parse(value: &serde_json::Value) -> DomainResult<Self> {
        serde_json::from_value(value.clone())
            .map_err(|err| DomainError::Validation(format!("geometri is not valid GeoJSON: {err}")))
    }

    /// Well-Known Text rendering. Supports exactly POINT, LINESTRING and
    /// POLYGON; for polygons only the first ring is rendered.
    pub fn to_wkt(&self) -> Result<String, GeoError> {
        match self {
            Geometry::Point { coordinates } => {
                Ok(format!("POINT({} {})", coordinates[0], coordinates[1]))
            }
            Geometry::LineString { coordinates } => {
                Ok(format!("LINESTRING({})", join_pairs(coordinates)))
            }
            Geometry::Polygon { coordinates } => {
                let ring = coordinates.first().map(Vec::as_slice).unwrap_or(&[]);
                Ok(format!("POLYGON(({}))", join_pairs(ring)))
            }
            Geometry::MultiPolygon { .. } => {
                Err(GeoError::UnsupportedGeometry("MULTIPOLYGON".into()))
            }
        }
    }

    /// Planar shoelace area of the first polygon ring, scaled from square
    /// degrees to square meters with [`METERS_PER_DEGREE`]. Anything that
    /// is not a polygon with at least three vertices yields 0.
    pub fn area_m2(&self) -> f64 {
        let Geometry::Polygon { coordinates } = self else {
            tracing::warn!(
                kind = self.kind().as_str(),
                "area requested for non-polygon geometry"
            );
            return 0.0;
        };
        let Some(ring) = coordinates.first() else {
            return 0.0;
        };
        if ring.len() < 3 {
            return 0.0;
        }

        let mut sum = 0.0;
        for i in 0..ring.len() {
            let [x1, y1] = ring[i];
            let [x2, y2] = ring[(i + 1) % ring.len()];
            sum += x1 * y2 - x2 * y1;
        }

        (sum.abs() / 2.0) * METERS_PER_DEGREE * METERS_PER_DEGREE
    }
}

fn join_pairs(points: &[[f64; 2]]) -> String {
    points
        .iter()
        .map(|p| format!("{} {}", p[0], p[1]))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rectangle() -> Geometry {
        Geometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0], [0.0, 0.0]]],
        }
    }

    #[test]
    fn point_wkt_is_space_separated() {
        let point = Geometry::Point {
            coordinates: [112.5, -7.25],
        };
        assert_eq!(point.to_wkt().unwrap(), "POINT(112.5 -7.25)");
    }

    #[test]
    fn linestring_wkt_joins_pairs_with_comma_space() {
        let line = Geometry::LineString {
            coordinates: vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]],
        };
        assert_eq!(line.to_wkt().unwrap(), "LINESTRING(0 0, 1 1, 2 0.5)");
    }

    #[test]
    fn polygon_wkt_doubles_parens_around_the_ring() {
        assert_eq!(
            rectangle().to_wkt().unwrap(),
            "POLYGON((0 0, 4 0, 4 3, 0 3, 0 0))"
        );
    }

    #[test]
    fn multipolygon_wkt_is_unsupported() {
        let multi = Geometry::MultiPolygon {
            coordinates: vec![vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]],
        };
        assert!(matches!(
            multi.to_wkt(),
            Err(GeoError::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn rectangle_area_matches_the_scaled_shoelace_formula() {
        let expected = 12.0 * METERS_PER_DEGREE * METERS_PER_DEGREE;
        assert!((rectangle().area_m2() - expected).abs() < 1e-3);
    }

    #[test]
    fn degenerate_ring_has_zero_area() {
        let line_like = Geometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [1.0, 1.0]]],
        };
        assert_eq!(line_like.area_m2(), 0.0);

        let empty = Geometry::Polygon {
            coordinates: vec![],
        };
        assert_eq!(empty.area_m2(), 0.0);
    }

    #[test]
    fn non_polygon_area_is_zero() {
        let point = Geometry::Point {
            coordinates: [1.0, 2.0],
        };
        assert_eq!(point.area_m2(), 0.0);
    }

    #[test]
    fn geojson_round_trip_keeps_the_type_tag() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0], [0.0, 0.0]]]
        });
        let parsed = Geometry::parse(&value).unwrap();
        assert_eq!(parsed.kind(), GeometryKind::Polygon);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), value);
    }

    #[test]
    fn mismatched_coordinate_shape_fails_parse() {
        let value = json!({ "type": "Point", "coordinates": [[0.0, 0.0]] });
        assert!(Geometry::parse(&value).is_err());
    }
}
