// src/infrastructure/repositories/postgres_inventaris.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fasilitas::FasilitasId;
use crate::domain::inventaris::{
    Inventaris, InventarisId, InventarisRepository, InventarisUpdate, NewInventaris,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresInventarisRepository {
    pool: PgPool,
}

impl PostgresInventarisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InventarisRow {
    id_inventaris: Uuid,
    id_fasilitas: Uuid,
    nama_barang: String,
    kode_barang: Option<String>,
    satuan: String,
    jumlah: i32,
    kondisi: Option<String>,
    catatan: Option<String>,
    waktu_perolehan: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<InventarisRow> for Inventaris {
    fn from(row: InventarisRow) -> Self {
        Inventaris {
            id_inventaris: InventarisId::new(row.id_inventaris),
            id_fasilitas: FasilitasId::new(row.id_fasilitas),
            nama_barang: row.nama_barang,
            kode_barang: row.kode_barang,
            satuan: row.satuan,
            jumlah: row.jumlah,
            kondisi: row.kondisi,
            catatan: row.catatan,
            waktu_perolehan: row.waktu_perolehan,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl InventarisRepository for PostgresInventarisRepository {
    async fn insert(&self, inventaris: NewInventaris) -> DomainResult<Inventaris> {
        let row = sqlx::query_as::<_, InventarisRow>(
            "INSERT INTO inventaris (id_inventaris, id_fasilitas, nama_barang, kode_barang, satuan, jumlah, kondisi, catatan, waktu_perolehan, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id_inventaris, id_fasilitas, nama_barang, kode_barang, satuan, jumlah, kondisi, catatan, waktu_perolehan, created_at, updated_at",
        )
        .bind(Uuid::from(inventaris.id_inventaris))
        .bind(Uuid::from(inventaris.id_fasilitas))
        .bind(&inventaris.nama_barang)
        .bind(&inventaris.kode_barang)
        .bind(&inventaris.satuan)
        .bind(inventaris.jumlah)
        .bind(&inventaris.kondisi)
        .bind(&inventaris.catatan)
        .bind(inventaris.waktu_perolehan)
        .bind(inventaris.created_at)
        .bind(inventaris.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: InventarisId) -> DomainResult<Option<Inventaris>> {
        let row = sqlx::query_as::<_, InventarisRow>(
            "SELECT id_inventaris, id_fasilitas, nama_barang, kode_barang, satuan, jumlah, kondisi, catatan, waktu_perolehan, created_at, updated_at
             FROM inventaris WHERE id_inventaris = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn list_by_fasilitas(&self, id_fasilitas: FasilitasId) -> DomainResult<Vec<Inventaris>> {
        let rows = sqlx::query_as::<_, InventarisRow>(
            "SELECT id_inventaris, id_fasilitas, nama_barang, kode_barang, satuan, jumlah, kondisi, catatan, waktu_perolehan, created_at, updated_at
             FROM inventaris WHERE id_fasilitas = $1 ORDER BY created_at DESC",
        )
        .bind(Uuid::from(id_fasilitas))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, update: InventarisUpdate) -> DomainResult<Inventaris> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE inventaris SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(nama) = &update.nama_barang {
            builder.push(", nama_barang = ");
            builder.push_bind(nama.clone());
        }
        if let Some(kode) = &update.kode_barang {
            builder.push(", kode_barang = ");
            builder.push_bind(kode.clone());
        }
        if let Some(satuan) = &update.satuan {
            builder.push(", satuan = ");
            builder.push_bind(satuan.clone());
        }
        if let Some(jumlah) = update.jumlah {
            builder.push(", jumlah = ");
            builder.push_bind(jumlah);
        }
        if let Some(kondisi) = &update.kondisi {
            builder.push(", kondisi = ");
            builder.push_bind(kondisi.clone());
        }
        if let Some(catatan) = &update.catatan {
            builder.push(", catatan = ");
            builder.push_bind(catatan.clone());
        }
        if let Some(waktu) = update.waktu_perolehan {
            builder.push(", waktu_perolehan = ");
            builder.push_bind(waktu);
        }

        builder.push(" WHERE id_inventaris = ");
        builder.push_bind(Uuid::from(update.id));
        builder.push(
            " RETURNING id_inventaris, id_fasilitas, nama_barang, kode_barang, satuan, jumlah, kondisi, catatan, waktu_perolehan, created_at, updated_at",
        );

        let row = builder
            .build_query_as::<InventarisRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::NotFound("inventaris not found".into()))
    }

    async fn delete(&self, id: InventarisId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM inventaris WHERE id_inventaris = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("inventaris not found".into()));
        }
        Ok(())
    }
}
