// src/infrastructure/repositories/postgres_pemetaan.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::geo::Geometry;
use crate::domain::pemetaan::{
    NewPemetaanFasilitas, NewPemetaanTanah, PemetaanFasilitas, PemetaanFasilitasId,
    PemetaanFasilitasRepository, PemetaanFasilitasUpdate, PemetaanTanah, PemetaanTanahId,
    PemetaanTanahRepository, PemetaanTanahUpdate,
};
use crate::domain::tanah::TanahId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresPemetaanTanahRepository {
    pool: PgPool,
}

impl PostgresPemetaanTanahRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPemetaanFasilitasRepository {
    pool: PgPool,
}

impl PostgresPemetaanFasilitasRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn geometry_to_value(geometry: &Geometry) -> DomainResult<serde_json::Value> {
    serde_json::to_value(geometry).map_err(|err| DomainError::Persistence(err.to_string()))
}

fn geometry_from_value(value: serde_json::Value) -> DomainResult<Geometry> {
    serde_json::from_value(value)
        .map_err(|err| DomainError::Persistence(format!("corrupt geometry column: {err}")))
}

#[derive(Debug, FromRow)]
struct PemetaanTanahRow {
    id_pemetaan_tanah: Uuid,
    id_tanah: Uuid,
    nama_pemetaan: String,
    jenis_geometri: String,
    geometri: serde_json::Value,
    geometri_wkt: Option<String>,
    luas_tanah: f64,
    keterangan: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PemetaanTanahRow> for PemetaanTanah {
    type Error = DomainError;

    fn try_from(row: PemetaanTanahRow) -> Result<Self, Self::Error> {
        Ok(PemetaanTanah {
            id_pemetaan_tanah: PemetaanTanahId::new(row.id_pemetaan_tanah),
            id_tanah: TanahId::new(row.id_tanah),
            nama_pemetaan: row.nama_pemetaan,
            jenis_geometri: row.jenis_geometri.parse()?,
            geometri: geometry_from_value(row.geometri)?,
            geometri_wkt: row.geometri_wkt,
            luas_tanah: row.luas_tanah,
            keterangan: row.keterangan,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PemetaanFasilitasRow {
    id_pemetaan_fasilitas: Uuid,
    id_pemetaan_tanah: Uuid,
    nama_fasilitas: String,
    kategori_fasilitas: Option<String>,
    jenis_geometri: String,
    geometri: serde_json::Value,
    geometri_wkt: Option<String>,
    keterangan: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PemetaanFasilitasRow> for PemetaanFasilitas {
    type Error = DomainError;

    fn try_from(row: PemetaanFasilitasRow) -> Result<Self, Self::Error> {
        Ok(PemetaanFasilitas {
            id_pemetaan_fasilitas: PemetaanFasilitasId::new(row.id_pemetaan_fasilitas),
            id_pemetaan_tanah: PemetaanTanahId::new(row.id_pemetaan_tanah),
            nama_fasilitas: row.nama_fasilitas,
            kategori_fasilitas: row.kategori_fasilitas,
            jenis_geometri: row.jenis_geometri.parse()?,
            geometri: geometry_from_value(row.geometri)?,
            geometri_wkt: row.geometri_wkt,
            keterangan: row.keterangan,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PemetaanTanahRepository for PostgresPemetaanTanahRepository {
    async fn insert(&self, pemetaan: NewPemetaanTanah) -> DomainResult<PemetaanTanah> {
        let row = sqlx::query_as::<_, PemetaanTanahRow>(
            "INSERT INTO pemetaan_tanah (id_pemetaan_tanah, id_tanah, nama_pemetaan, jenis_geometri, geometri, luas_tanah, keterangan, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id_pemetaan_tanah, id_tanah, nama_pemetaan, jenis_geometri, geometri, geometri_wkt, luas_tanah, keterangan, created_at, updated_at",
        )
        .bind(Uuid::from(pemetaan.id_pemetaan_tanah))
        .bind(Uuid::from(pemetaan.id_tanah))
        .bind(&pemetaan.nama_pemetaan)
        .bind(pemetaan.jenis_geometri.as_str())
        .bind(geometry_to_value(&pemetaan.geometri)?)
        .bind(pemetaan.luas_tanah)
        .bind(&pemetaan.keterangan)
        .bind(pemetaan.created_at)
        .bind(pemetaan.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PemetaanTanah::try_from(row)
    }

    async fn find_by_id(&self, id: PemetaanTanahId) -> DomainResult<Option<PemetaanTanah>> {
        let row = sqlx::query_as::<_, PemetaanTanahRow>(
            "SELECT id_pemetaan_tanah, id_tanah, nama_pemetaan, jenis_geometri, geometri, geometri_wkt, luas_tanah, keterangan, created_at, updated_at
             FROM pemetaan_tanah WHERE id_pemetaan_tanah = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PemetaanTanah::try_from).transpose()
    }

    async fn list_by_tanah(&self, id_tanah: TanahId) -> DomainResult<Vec<PemetaanTanah>> {
        let rows = sqlx::query_as::<_, PemetaanTanahRow>(
            "SELECT id_pemetaan_tanah, id_tanah, nama_pemetaan, jenis_geometri, geometri, geometri_wkt, luas_tanah, keterangan, created_at, updated_at
             FROM pemetaan_tanah WHERE id_tanah = $1 ORDER BY created_at DESC",
        )
        .bind(Uuid::from(id_tanah))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PemetaanTanah::try_from).collect()
    }

    async fn update(&self, update: PemetaanTanahUpdate) -> DomainResult<PemetaanTanah> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE pemetaan_tanah SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(nama) = &update.nama_pemetaan {
            builder.push(", nama_pemetaan = ");
            builder.push_bind(nama.clone());
        }
        if let Some(keterangan) = &update.keterangan {
            builder.push(", keterangan = ");
            builder.push_bind(keterangan.clone());
        }
        if let Some(write) = &update.geometri {
            builder.push(", jenis_geometri = ");
            builder.push_bind(write.jenis_geometri.as_str());
            builder.push(", geometri = ");
            builder.push_bind(geometry_to_value(&write.geometri)?);
            builder.push(", geometri_wkt = ");
            builder.push_bind(write.wkt.clone());
        }

        builder.push(" WHERE id_pemetaan_tanah = ");
        builder.push_bind(Uuid::from(update.id));
        builder.push(
            " RETURNING id_pemetaan_tanah, id_tanah, nama_pemetaan, jenis_geometri, geometri, geometri_wkt, luas_tanah, keterangan, created_at, updated_at",
        );

        let row = builder
            .build_query_as::<PemetaanTanahRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(PemetaanTanah::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("pemetaan tanah not found".into()))
    }

    async fn delete(&self, id: PemetaanTanahId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pemetaan_tanah WHERE id_pemetaan_tanah = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("pemetaan tanah not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PemetaanFasilitasRepository for PostgresPemetaanFasilitasRepository {
    async fn insert(&self, pemetaan: NewPemetaanFasilitas) -> DomainResult<PemetaanFasilitas> {
        let row = sqlx::query_as::<_, PemetaanFasilitasRow>(
            "INSERT INTO pemetaan_fasilitas (id_pemetaan_fasilitas, id_pemetaan_tanah, nama_fasilitas, kategori_fasilitas, jenis_geometri, geometri, keterangan, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id_pemetaan_fasilitas, id_pemetaan_tanah, nama_fasilitas, kategori_fasilitas, jenis_geometri, geometri, geometri_wkt, keterangan, created_at, updated_at",
        )
        .bind(Uuid::from(pemetaan.id_pemetaan_fasilitas))
        .bind(Uuid::from(pemetaan.id_pemetaan_tanah))
        .bind(&pemetaan.nama_fasilitas)
        .bind(&pemetaan.kategori_fasilitas)
        .bind(pemetaan.jenis_geometri.as_str())
        .bind(geometry_to_value(&pemetaan.geometri)?)
        .bind(&pemetaan.keterangan)
        .bind(pemetaan.created_at)
        .bind(pemetaan.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PemetaanFasilitas::try_from(row)
    }

    async fn find_by_id(
        &self,
        id: PemetaanFasilitasId,
    ) -> DomainResult<Option<PemetaanFasilitas>> {
        let row = sqlx::query_as::<_, PemetaanFasilitasRow>(
            "SELECT id_pemetaan_fasilitas, id_pemetaan_tanah, nama_fasilitas, kategori_fasilitas, jenis_geometri, geometri, geometri_wkt, keterangan, created_at, updated_at
             FROM pemetaan_fasilitas WHERE id_pemetaan_fasilitas = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PemetaanFasilitas::try_from).transpose()
    }

    async fn list_by_pemetaan_tanah(
        &self,
        id_pemetaan_tanah: PemetaanTanahId,
    ) -> DomainResult<Vec<PemetaanFasilitas>> {
        let rows = sqlx::query_as::<_, PemetaanFasilitasRow>(
            "SELECT id_pemetaan_fasilitas, id_pemetaan_tanah, nama_fasilitas, kategori_fasilitas, jenis_geometri, geometri, geometri_wkt, keterangan, created_at, updated_at
             FROM pemetaan_fasilitas WHERE id_pemetaan_tanah = $1 ORDER BY created_at DESC",
        )
        .bind(Uuid::from(id_pemetaan_tanah))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PemetaanFasilitas::try_from).collect()
    }

    async fn update(&self, update: PemetaanFasilitasUpdate) -> DomainResult<PemetaanFasilitas> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE pemetaan_fasilitas SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(nama) = &update.nama_fasilitas {
            builder.push(", nama_fasilitas = ");
            builder.push_bind(nama.clone());
        }
        if let Some(kategori) = &update.kategori_fasilitas {
            builder.push(", kategori_fasilitas = ");
            builder.push_bind(kategori.clone());
        }
        if let Some(keterangan) = &update.keterangan {
            builder.push(", keterangan = ");
            builder.push_bind(keterangan.clone());
        }
        if let Some(write) = &update.geometri {
            builder.push(", jenis_geometri = ");
            builder.push_bind(write.jenis_geometri.as_str());
            builder.push(", geometri = ");
            builder.push_bind(geometry_to_value(&write.geometri)?);
            builder.push(", geometri_wkt = ");
            builder.push_bind(write.wkt.clone());
        }

        builder.push(" WHERE id_pemetaan_fasilitas = ");
        builder.push_bind(Uuid::from(update.id));
        builder.push(
            " RETURNING id_pemetaan_fasilitas, id_pemetaan_tanah, nama_fasilitas, kategori_fasilitas, jenis_geometri, geometri, geometri_wkt, keterangan, created_at, updated_at",
        );

        let row = builder
            .build_query_as::<PemetaanFasilitasRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(PemetaanFasilitas::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("pemetaan fasilitas not found".into()))
    }

    async fn delete(&self, id: PemetaanFasilitasId) -> DomainResult<()> {
        let result =
            sqlx::query("DELETE FROM pemetaan_fasilitas WHERE id_pemetaan_fasilitas = $1")
                .bind(Uuid::from(id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("pemetaan fasilitas not found".into()));
        }
        Ok(())
    }
}
