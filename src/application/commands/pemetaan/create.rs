// src/application/commands/pemetaan/create.rs
use super::service::{
    FASILITAS_GEOMETRY_KINDS, PemetaanCommandService, TANAH_GEOMETRY_KINDS, parse_geometry,
};
use crate::application::{
    dto::{AuthenticatedUser, PemetaanFasilitasDto, PemetaanTanahDto, TanahMappingCreatedDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    pemetaan::{
        NewPemetaanFasilitas, NewPemetaanTanah, PemetaanFasilitasId, PemetaanTanahId,
    },
    tanah::TanahId,
};
use uuid::Uuid;

pub struct CreateTanahMappingCommand {
    pub id_tanah: Uuid,
    pub nama_pemetaan: String,
    pub jenis_geometri: String,
    pub geometri: serde_json::Value,
    pub keterangan: Option<String>,
}

pub struct CreateFasilitasMappingCommand {
    pub id_pemetaan_tanah: Uuid,
    pub nama_fasilitas: String,
    pub kategori_fasilitas: Option<String>,
    pub jenis_geometri: String,
    pub geometri: serde_json::Value,
    pub keterangan: Option<String>,
}

impl PemetaanCommandService {
    /// Persist a parcel outline. The area is measured from the geometry
    /// here, before the row is written; the raw GeoJSON is what gets
    /// stored. The response reports how the measurement compares with the
    /// area declared on the parent parcel.
    pub async fn create_tanah_mapping(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTanahMappingCommand,
    ) -> ApplicationResult<TanahMappingCreatedDto> {
        if command.nama_pemetaan.trim().is_empty() {
            return Err(ApplicationError::validation("nama_pemetaan cannot be empty"));
        }
        let (kind, geometry) = parse_geometry(
            &command.jenis_geometri,
            &command.geometri,
            &TANAH_GEOMETRY_KINDS,
        )?;

        let id_tanah = TanahId::new(command.id_tanah);
        let parent = self
            .tanah
            .find_by_id(id_tanah)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tanah not found"))?;

        let luas_pemetaan = geometry.area_m2();
        let now = self.clock.now();

        let created = self
            .pemetaan_tanah
            .insert(NewPemetaanTanah {
                id_pemetaan_tanah: PemetaanTanahId::generate(),
                id_tanah,
                nama_pemetaan: command.nama_pemetaan,
                jenis_geometri: kind,
                geometri: geometry,
                luas_tanah: luas_pemetaan,
                keterangan: command.keterangan,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let dto = PemetaanTanahDto::from(created);
        self.recorder
            .created(actor.id, "pemetaan_tanah", dto.id_pemetaan_tanah, &dto)
            .await;

        let selisih = luas_pemetaan - parent.luas_tanah;
        let persentase = if parent.luas_tanah > 0.0 {
            (selisih.abs() / parent.luas_tanah) * 100.0
        } else {
            0.0
        };

        Ok(TanahMappingCreatedDto {
            pemetaan: dto,
            luas_tanah_tercatat: parent.luas_tanah,
            luas_hasil_pemetaan: luas_pemetaan,
            selisih_luas: selisih,
            persentase_selisih: persentase,
        })
    }

    /// Persist a facility outline inside an existing parcel mapping.
    pub async fn create_fasilitas_mapping(
        &self,
        actor: &AuthenticatedUser,
        command: CreateFasilitasMappingCommand,
    ) -> ApplicationResult<PemetaanFasilitasDto> {
        if command.nama_fasilitas.trim().is_empty() {
            return Err(ApplicationError::validation(
                "nama_fasilitas cannot be empty",
            ));
        }
        let (kind, geometry) = parse_geometry(
            &command.jenis_geometri,
            &command.geometri,
            &FASILITAS_GEOMETRY_KINDS,
        )?;

        let id_pemetaan_tanah = PemetaanTanahId::new(command.id_pemetaan_tanah);
        self.pemetaan_tanah
            .find_by_id(id_pemetaan_tanah)
            .await?
            .ok_or_else(|| ApplicationError::not_found("pemetaan tanah not found"))?;

        let now = self.clock.now();
        let created = self
            .pemetaan_fasilitas
            .insert(NewPemetaanFasilitas {
                id_pemetaan_fasilitas: PemetaanFasilitasId::generate(),
                id_pemetaan_tanah,
                nama_fasilitas: command.nama_fasilitas,
                kategori_fasilitas: command.kategori_fasilitas,
                jenis_geometri: kind,
                geometri: geometry,
                keterangan: command.keterangan,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let dto = PemetaanFasilitasDto::from(created);
        self.recorder
            .created(
                actor.id,
                "pemetaan_fasilitas",
                dto.id_pemetaan_fasilitas,
                &dto,
            )
            .await;
        Ok(dto)
    }
}
