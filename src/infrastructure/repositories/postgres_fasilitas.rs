// src/infrastructure/repositories/postgres_fasilitas.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fasilitas::{
    Fasilitas, FasilitasId, FasilitasRepository, FasilitasUpdate, NewFasilitas,
};
use crate::domain::pemetaan::PemetaanFasilitasId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresFasilitasRepository {
    pool: PgPool,
}

impl PostgresFasilitasRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FasilitasRow {
    id_fasilitas: Uuid,
    id_pemetaan_fasilitas: Uuid,
    jenis_fasilitas: String,
    nama_fasilitas: String,
    keterangan: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FasilitasRow> for Fasilitas {
    fn from(row: FasilitasRow) -> Self {
        Fasilitas {
            id_fasilitas: FasilitasId::new(row.id_fasilitas),
            id_pemetaan_fasilitas: PemetaanFasilitasId::new(row.id_pemetaan_fasilitas),
            jenis_fasilitas: row.jenis_fasilitas,
            nama_fasilitas: row.nama_fasilitas,
            keterangan: row.keterangan,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl FasilitasRepository for PostgresFasilitasRepository {
    async fn insert(&self, fasilitas: NewFasilitas) -> DomainResult<Fasilitas> {
        let row = sqlx::query_as::<_, FasilitasRow>(
            "INSERT INTO fasilitas (id_fasilitas, id_pemetaan_fasilitas, jenis_fasilitas, nama_fasilitas, keterangan, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id_fasilitas, id_pemetaan_fasilitas, jenis_fasilitas, nama_fasilitas, keterangan, created_at, updated_at",
        )
        .bind(Uuid::from(fasilitas.id_fasilitas))
        .bind(Uuid::from(fasilitas.id_pemetaan_fasilitas))
        .bind(&fasilitas.jenis_fasilitas)
        .bind(&fasilitas.nama_fasilitas)
        .bind(&fasilitas.keterangan)
        .bind(fasilitas.created_at)
        .bind(fasilitas.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: FasilitasId) -> DomainResult<Option<Fasilitas>> {
        let row = sqlx::query_as::<_, FasilitasRow>(
            "SELECT id_fasilitas, id_pemetaan_fasilitas, jenis_fasilitas, nama_fasilitas, keterangan, created_at, updated_at
             FROM fasilitas WHERE id_fasilitas = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> DomainResult<Vec<Fasilitas>> {
        let rows = sqlx::query_as::<_, FasilitasRow>(
            "SELECT id_fasilitas, id_pemetaan_fasilitas, jenis_fasilitas, nama_fasilitas, keterangan, created_at, updated_at
             FROM fasilitas ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, update: FasilitasUpdate) -> DomainResult<Fasilitas> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE fasilitas SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(jenis) = &update.jenis_fasilitas {
            builder.push(", jenis_fasilitas = ");
            builder.push_bind(jenis.clone());
        }
        if let Some(nama) = &update.nama_fasilitas {
            builder.push(", nama_fasilitas = ");
            builder.push_bind(nama.clone());
        }
        if let Some(keterangan) = &update.keterangan {
            builder.push(", keterangan = ");
            builder.push_bind(keterangan.clone());
        }

        builder.push(" WHERE id_fasilitas = ");
        builder.push_bind(Uuid::from(update.id));
        builder.push(
            " RETURNING id_fasilitas, id_pemetaan_fasilitas, jenis_fasilitas, nama_fasilitas, keterangan, created_at, updated_at",
        );

        let row = builder
            .build_query_as::<FasilitasRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::NotFound("fasilitas not found".into()))
    }

    async fn delete(&self, id: FasilitasId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM fasilitas WHERE id_fasilitas = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("fasilitas not found".into()));
        }
        Ok(())
    }
}
