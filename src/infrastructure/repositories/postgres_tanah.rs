// src/infrastructure/repositories/postgres_tanah.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tanah::{NewTanah, Tanah, TanahId, TanahRepository, TanahUpdate};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresTanahRepository {
    pool: PgPool,
}

impl PostgresTanahRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TanahRow {
    id_tanah: Uuid,
    nama_pimpinan_jamaah: String,
    nama_wakif: String,
    lokasi: String,
    luas_tanah: f64,
    status: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TanahRow> for Tanah {
    type Error = DomainError;

    fn try_from(row: TanahRow) -> Result<Self, Self::Error> {
        Ok(Tanah {
            id_tanah: TanahId::new(row.id_tanah),
            nama_pimpinan_jamaah: row.nama_pimpinan_jamaah,
            nama_wakif: row.nama_wakif,
            lokasi: row.lokasi,
            luas_tanah: row.luas_tanah,
            status: row.status.parse()?,
            latitude: row.latitude,
            longitude: row.longitude,
            user_id: UserId::new(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Shared with the approval repository, which applies entity effects
/// inside its own transaction.
pub(super) async fn insert_tanah(conn: &mut PgConnection, tanah: &NewTanah) -> DomainResult<Tanah> {
    let row = sqlx::query_as::<_, TanahRow>(
        "INSERT INTO tanah (id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
         RETURNING id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at",
    )
    .bind(Uuid::from(tanah.draft.id_tanah))
    .bind(&tanah.draft.nama_pimpinan_jamaah)
    .bind(&tanah.draft.nama_wakif)
    .bind(&tanah.draft.lokasi)
    .bind(tanah.draft.luas_tanah)
    .bind(tanah.status.as_str())
    .bind(tanah.draft.latitude)
    .bind(tanah.draft.longitude)
    .bind(Uuid::from(tanah.draft.user_id))
    .bind(tanah.created_at)
    .bind(tanah.updated_at)
    .fetch_one(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Tanah::try_from(row)
}

pub(super) async fn upsert_tanah(conn: &mut PgConnection, tanah: &NewTanah) -> DomainResult<Tanah> {
    let row = sqlx::query_as::<_, TanahRow>(
        "INSERT INTO tanah (id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
         ON CONFLICT (id_tanah) DO UPDATE SET
             nama_pimpinan_jamaah = EXCLUDED.nama_pimpinan_jamaah,
             nama_wakif = EXCLUDED.nama_wakif,
             lokasi = EXCLUDED.lokasi,
             luas_tanah = EXCLUDED.luas_tanah,
             status = EXCLUDED.status,
             latitude = EXCLUDED.latitude,
             longitude = EXCLUDED.longitude,
             user_id = EXCLUDED.user_id,
             updated_at = EXCLUDED.updated_at
         RETURNING id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at",
    )
    .bind(Uuid::from(tanah.draft.id_tanah))
    .bind(&tanah.draft.nama_pimpinan_jamaah)
    .bind(&tanah.draft.nama_wakif)
    .bind(&tanah.draft.lokasi)
    .bind(tanah.draft.luas_tanah)
    .bind(tanah.status.as_str())
    .bind(tanah.draft.latitude)
    .bind(tanah.draft.longitude)
    .bind(Uuid::from(tanah.draft.user_id))
    .bind(tanah.created_at)
    .bind(tanah.updated_at)
    .fetch_one(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Tanah::try_from(row)
}

/// `None` when the target row does not exist.
pub(super) async fn patch_tanah(
    conn: &mut PgConnection,
    update: &TanahUpdate,
) -> DomainResult<Option<Tanah>> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tanah SET updated_at = ");
    builder.push_bind(update.updated_at);

    let patch = &update.patch;
    if let Some(nama) = &patch.nama_pimpinan_jamaah {
        builder.push(", nama_pimpinan_jamaah = ");
        builder.push_bind(nama.clone());
    }
    if let Some(nama) = &patch.nama_wakif {
        builder.push(", nama_wakif = ");
        builder.push_bind(nama.clone());
    }
    if let Some(lokasi) = &patch.lokasi {
        builder.push(", lokasi = ");
        builder.push_bind(lokasi.clone());
    }
    if let Some(luas) = patch.luas_tanah {
        builder.push(", luas_tanah = ");
        builder.push_bind(luas);
    }
    if let Some(latitude) = patch.latitude {
        builder.push(", latitude = ");
        builder.push_bind(latitude);
    }
    if let Some(longitude) = patch.longitude {
        builder.push(", longitude = ");
        builder.push_bind(longitude);
    }
    if let Some(status) = patch.status {
        builder.push(", status = ");
        builder.push_bind(status.as_str());
    }

    builder.push(" WHERE id_tanah = ");
    builder.push_bind(Uuid::from(update.id));
    builder.push(
        " RETURNING id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at",
    );

    let row = builder
        .build_query_as::<TanahRow>()
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    row.map(Tanah::try_from).transpose()
}

#[async_trait]
impl TanahRepository for PostgresTanahRepository {
    async fn insert(&self, tanah: NewTanah) -> DomainResult<Tanah> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        insert_tanah(&mut conn, &tanah).await
    }

    async fn find_by_id(&self, id: TanahId) -> DomainResult<Option<Tanah>> {
        let row = sqlx::query_as::<_, TanahRow>(
            "SELECT id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at
             FROM tanah WHERE id_tanah = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tanah::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Tanah>> {
        let rows = sqlx::query_as::<_, TanahRow>(
            "SELECT id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at
             FROM tanah ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tanah::try_from).collect()
    }

    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Tanah>> {
        let rows = sqlx::query_as::<_, TanahRow>(
            "SELECT id_tanah, nama_pimpinan_jamaah, nama_wakif, lokasi, luas_tanah, status, latitude, longitude, user_id, created_at, updated_at
             FROM tanah WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(Uuid::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tanah::try_from).collect()
    }

    async fn update(&self, update: TanahUpdate) -> DomainResult<Tanah> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        patch_tanah(&mut conn, &update)
            .await?
            .ok_or_else(|| DomainError::NotFound("tanah not found".into()))
    }

    async fn delete(&self, id: TanahId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tanah WHERE id_tanah = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("tanah not found".into()));
        }
        Ok(())
    }
}
