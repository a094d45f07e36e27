// src/application/commands/pemetaan/update.rs
use super::service::{
    FASILITAS_GEOMETRY_KINDS, PemetaanCommandService, TANAH_GEOMETRY_KINDS, parse_geometry,
};
use crate::application::{
    dto::{AuthenticatedUser, PemetaanFasilitasDto, PemetaanTanahDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    geo::GeometryKind,
    pemetaan::{
        GeometryWrite, PemetaanFasilitasId, PemetaanFasilitasUpdate, PemetaanTanahId,
        PemetaanTanahUpdate,
    },
};
use uuid::Uuid;

pub struct UpdateTanahMappingCommand {
    pub id: Uuid,
    pub nama_pemetaan: Option<String>,
    pub jenis_geometri: Option<String>,
    pub geometri: Option<serde_json::Value>,
    pub keterangan: Option<String>,
}

pub struct UpdateFasilitasMappingCommand {
    pub id: Uuid,
    pub nama_fasilitas: Option<String>,
    pub kategori_fasilitas: Option<String>,
    pub jenis_geometri: Option<String>,
    pub geometri: Option<serde_json::Value>,
    pub keterangan: Option<String>,
}

/// Geometry edits take the fast path: the service renders the WKT itself
/// and hands both forms to the repository, skipping the create-side cast.
fn geometry_write(
    jenis_geometri: Option<String>,
    geometri: Option<serde_json::Value>,
    allowed: &[GeometryKind],
) -> ApplicationResult<Option<GeometryWrite>> {
    match (geometri, jenis_geometri) {
        (None, None) => Ok(None),
        (Some(geojson), Some(tag)) => {
            let (kind, geometry) = parse_geometry(&tag, &geojson, allowed)?;
            let wkt = geometry
                .to_wkt()
                .map_err(|err| ApplicationError::validation(err.to_string()))?;
            Ok(Some(GeometryWrite {
                jenis_geometri: kind,
                geometri: geometry,
                wkt,
            }))
        }
        _ => Err(ApplicationError::validation(
            "geometri and jenis_geometri must be supplied together",
        )),
    }
}

impl PemetaanCommandService {
    /// Patch a parcel mapping. `luas_tanah` is not remeasured when the
    /// geometry changes; only creation computes it.
    pub async fn update_tanah_mapping(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTanahMappingCommand,
    ) -> ApplicationResult<PemetaanTanahDto> {
        let id = PemetaanTanahId::new(command.id);
        let existing = self
            .pemetaan_tanah
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("pemetaan tanah not found"))?;

        let geometri = geometry_write(
            command.jenis_geometri,
            command.geometri,
            &TANAH_GEOMETRY_KINDS,
        )?;

        let before = PemetaanTanahDto::from(existing);
        let updated = self
            .pemetaan_tanah
            .update(PemetaanTanahUpdate {
                id,
                nama_pemetaan: command.nama_pemetaan,
                keterangan: command.keterangan,
                geometri,
                updated_at: self.clock.now(),
            })
            .await?;

        let after = PemetaanTanahDto::from(updated);
        self.recorder
            .updated(
                actor.id,
                "pemetaan_tanah",
                after.id_pemetaan_tanah,
                &before,
                &after,
            )
            .await;
        Ok(after)
    }

    pub async fn update_fasilitas_mapping(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateFasilitasMappingCommand,
    ) -> ApplicationResult<PemetaanFasilitasDto> {
        let id = PemetaanFasilitasId::new(command.id);
        let existing = self
            .pemetaan_fasilitas
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("pemetaan fasilitas not found"))?;

        let geometri = geometry_write(
            command.jenis_geometri,
            command.geometri,
            &FASILITAS_GEOMETRY_KINDS,
        )?;

        let before = PemetaanFasilitasDto::from(existing);
        let updated = self
            .pemetaan_fasilitas
            .update(PemetaanFasilitasUpdate {
                id,
                nama_fasilitas: command.nama_fasilitas,
                kategori_fasilitas: command.kategori_fasilitas,
                keterangan: command.keterangan,
                geometri,
                updated_at: self.clock.now(),
            })
            .await?;

        let after = PemetaanFasilitasDto::from(updated);
        self.recorder
            .updated(
                actor.id,
                "pemetaan_fasilitas",
                after.id_pemetaan_fasilitas,
                &before,
                &after,
            )
            .await;
        Ok(after)
    }
}
