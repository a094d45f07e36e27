// src/infrastructure/repositories/postgres_sertifikat.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sertifikat::{
    NewSertifikat, Sertifikat, SertifikatId, SertifikatRepository, SertifikatUpdate,
};
use crate::domain::tanah::TanahId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresSertifikatRepository {
    pool: PgPool,
}

impl PostgresSertifikatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct SertifikatRow {
    id_sertifikat: Uuid,
    id_tanah: Uuid,
    no_dokumen: Option<String>,
    jenis_sertifikat: String,
    status_pengajuan: String,
    status: String,
    user_id: Uuid,
    dokumen: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SertifikatRow> for Sertifikat {
    type Error = DomainError;

    fn try_from(row: SertifikatRow) -> Result<Self, Self::Error> {
        Ok(Sertifikat {
            id_sertifikat: SertifikatId::new(row.id_sertifikat),
            id_tanah: TanahId::new(row.id_tanah),
            no_dokumen: row.no_dokumen,
            jenis_sertifikat: row.jenis_sertifikat.parse()?,
            status_pengajuan: row.status_pengajuan.parse()?,
            status: row.status.parse()?,
            user_id: UserId::new(row.user_id),
            dokumen: row.dokumen,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub(super) async fn insert_sertifikat(
    conn: &mut PgConnection,
    sertifikat: &NewSertifikat,
) -> DomainResult<Sertifikat> {
    let row = sqlx::query_as::<_, SertifikatRow>(
        "INSERT INTO sertifikat (id_sertifikat, id_tanah, no_dokumen, jenis_sertifikat, status_pengajuan, status, user_id, dokumen, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING id_sertifikat, id_tanah, no_dokumen, jenis_sertifikat, status_pengajuan, status, user_id, dokumen, created_at, updated_at",
    )
    .bind(Uuid::from(sertifikat.draft.id_sertifikat))
    .bind(Uuid::from(sertifikat.draft.id_tanah))
    .bind(&sertifikat.draft.no_dokumen)
    .bind(sertifikat.draft.jenis_sertifikat.as_str())
    .bind(sertifikat.draft.status_pengajuan.as_str())
    .bind(sertifikat.status.as_str())
    .bind(Uuid::from(sertifikat.draft.user_id))
    .bind(&sertifikat.draft.dokumen)
    .bind(sertifikat.created_at)
    .bind(sertifikat.updated_at)
    .fetch_one(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Sertifikat::try_from(row)
}

pub(super) async fn upsert_sertifikat(
    conn: &mut PgConnection,
    sertifikat: &NewSertifikat,
) -> DomainResult<Sertifikat> {
    let row = sqlx::query_as::<_, SertifikatRow>(
        "INSERT INTO sertifikat (id_sertifikat, id_tanah, no_dokumen, jenis_sertifikat, status_pengajuan, status, user_id, dokumen, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         ON CONFLICT (id_sertifikat) DO UPDATE SET
             id_tanah = EXCLUDED.id_tanah,
             no_dokumen = EXCLUDED.no_dokumen,
             jenis_sertifikat = EXCLUDED.jenis_sertifikat,
             status_pengajuan = EXCLUDED.status_pengajuan,
             status = EXCLUDED.status,
             user_id = EXCLUDED.user_id,
             dokumen = EXCLUDED.dokumen,
             updated_at = EXCLUDED.updated_at
         RETURNING id_sertifikat, id_tanah, no_dokumen, jenis_sertifikat, status_pengajuan, status, user_id, dokumen, created_at, updated_at",
    )
    .bind(Uuid::from(sertifikat.draft.id_sertifikat))
    .bind(Uuid::from(sertifikat.draft.id_tanah))
    .bind(&sertifikat.draft.no_dokumen)
    .bind(sertifikat.draft.jenis_sertifikat.as_str())
    .bind(sertifikat.draft.status_pengajuan.as_str())
    .bind(sertifikat.status.as_str())
    .bind(Uuid::from(sertifikat.draft.user_id))
    .bind(&sertifikat.draft.dokumen)
    .bind(sertifikat.created_at)
    .bind(sertifikat.updated_at)
    .fetch_one(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Sertifikat::try_from(row)
}

pub(super) async fn patch_sertifikat(
    conn: &mut PgConnection,
    update: &SertifikatUpdate,
) -> DomainResult<Option<Sertifikat>> {
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("UPDATE sertifikat SET updated_at = ");
    builder.push_bind(update.updated_at);

    let patch = &update.patch;
    if let Some(id_tanah) = patch.id_tanah {
        builder.push(", id_tanah = ");
        builder.push_bind(Uuid::from(id_tanah));
    }
    if let Some(no_dokumen) = &patch.no_dokumen {
        builder.push(", no_dokumen = ");
        builder.push_bind(no_dokumen.clone());
    }
    if let Some(jenis) = patch.jenis_sertifikat {
        builder.push(", jenis_sertifikat = ");
        builder.push_bind(jenis.as_str());
    }
    if let Some(pengajuan) = patch.status_pengajuan {
        builder.push(", status_pengajuan = ");
        builder.push_bind(pengajuan.as_str());
    }
    if let Some(status) = patch.status {
        builder.push(", status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(dokumen) = &patch.dokumen {
        builder.push(", dokumen = ");
        builder.push_bind(dokumen.clone());
    }

    builder.push(" WHERE id_sertifikat = ");
    builder.push_bind(Uuid::from(update.id));
    builder.push(
        " RETURNING id_sertifikat, id_tanah, no_dokumen, jenis_sertifikat, status_pengajuan, status, user_id, dokumen, created_at, updated_at",
    );

    let row = builder
        .build_query_as::<SertifikatRow>()
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    row.map(Sertifikat::try_from).transpose()
}

#[async_trait]
impl SertifikatRepository for PostgresSertifikatRepository {
    async fn insert(&self, sertifikat: NewSertifikat) -> DomainResult<Sertifikat> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        insert_sertifikat(&mut conn, &sertifikat).await
    }

    async fn find_by_id(&self, id: SertifikatId) -> DomainResult<Option<Sertifikat>> {
        let row = sqlx::query_as::<_, SertifikatRow>(
            "SELECT id_sertifikat, id_tanah, no_dokumen, jenis_sertifikat, status_pengajuan, status, user_id, dokumen, created_at, updated_at
             FROM sertifikat WHERE id_sertifikat = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Sertifikat::try_from).transpose()
    }

    async fn list_by_tanah(&self, id_tanah: TanahId) -> DomainResult<Vec<Sertifikat>> {
        let rows = sqlx::query_as::<_, SertifikatRow>(
            "SELECT id_sertifikat, id_tanah, no_dokumen, jenis_sertifikat, status_pengajuan, status, user_id, dokumen, created_at, updated_at
             FROM sertifikat WHERE id_tanah = $1 ORDER BY created_at DESC",
        )
        .bind(Uuid::from(id_tanah))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Sertifikat::try_from).collect()
    }

    async fn update(&self, update: SertifikatUpdate) -> DomainResult<Sertifikat> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        patch_sertifikat(&mut conn, &update)
            .await?
            .ok_or_else(|| DomainError::NotFound("sertifikat not found".into()))
    }

    async fn delete(&self, id: SertifikatId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM sertifikat WHERE id_sertifikat = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("sertifikat not found".into()));
        }
        Ok(())
    }
}
