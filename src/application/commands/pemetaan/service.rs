// src/application/commands/pemetaan/service.rs
use std::sync::Arc;

use crate::application::{
    audit::ActivityRecorder,
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    geo::{Geometry, GeometryKind},
    pemetaan::{PemetaanFasilitasRepository, PemetaanTanahRepository},
    tanah::TanahRepository,
};

/// Geometry tags a parcel outline may carry.
pub(super) const TANAH_GEOMETRY_KINDS: [GeometryKind; 2] =
    [GeometryKind::Polygon, GeometryKind::MultiPolygon];

/// Geometry tags a facility mapping may carry.
pub(super) const FASILITAS_GEOMETRY_KINDS: [GeometryKind; 3] = [
    GeometryKind::Point,
    GeometryKind::LineString,
    GeometryKind::Polygon,
];

pub struct PemetaanCommandService {
    pub(super) pemetaan_tanah: Arc<dyn PemetaanTanahRepository>,
    pub(super) pemetaan_fasilitas: Arc<dyn PemetaanFasilitasRepository>,
    pub(super) tanah: Arc<dyn TanahRepository>,
    pub(super) recorder: Arc<ActivityRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PemetaanCommandService {
    pub fn new(
        pemetaan_tanah: Arc<dyn PemetaanTanahRepository>,
        pemetaan_fasilitas: Arc<dyn PemetaanFasilitasRepository>,
        tanah: Arc<dyn TanahRepository>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pemetaan_tanah,
            pemetaan_fasilitas,
            tanah,
            recorder,
            clock,
        }
    }
}

/// Parse and cross-check a `jenis_geometri` tag and a raw GeoJSON value.
/// The tag must be in `allowed` and must equal the GeoJSON's own type.
pub(super) fn parse_geometry(
    jenis_geometri: &str,
    geometri: &serde_json::Value,
    allowed: &[GeometryKind],
) -> ApplicationResult<(GeometryKind, Geometry)> {
    let kind: GeometryKind = jenis_geometri.parse()?;
    if !allowed.contains(&kind) {
        let allowed = allowed
            .iter()
            .map(GeometryKind::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ApplicationError::validation(format!(
            "jenis_geometri must be one of: {allowed}"
        )));
    }

    let geometry = Geometry::parse(geometri)?;
    if geometry.kind() != kind {
        return Err(ApplicationError::validation(
            "jenis_geometri does not match the geometri type",
        ));
    }

    Ok((kind, geometry))
}
