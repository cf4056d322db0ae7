//! Postgres-backed client storage (table `client`).

use super::ClientRepository;
use crate::domain::ClientRecord;
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

const RETURNING_COLUMNS: &str = "id, name, city, postal_code, email, birth_date, positive_number";

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    /// Connects to `database_url` and makes sure the `client` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Self::with_pool(pool).await
    }

    pub async fn with_pool(pool: PgPool) -> anyhow::Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS client (
                id BIGSERIAL PRIMARY KEY,
                name TEXT,
                city TEXT,
                postal_code TEXT,
                email TEXT,
                birth_date DATE,
                positive_number INTEGER
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn row_to_record(row: &PgRow) -> anyhow::Result<ClientRecord> {
    Ok(ClientRecord {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        postal_code: row.try_get("postal_code")?,
        email: row.try_get("email")?,
        birth_date: row.try_get("birth_date")?,
        positive_number: row.try_get("positive_number")?,
    })
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn save(&self, record: ClientRecord) -> anyhow::Result<ClientRecord> {
        let mut tx = self.pool.begin().await?;

        let row = match record.id {
            None => {
                let sql = format!(
                    "INSERT INTO client (name, city, postal_code, email, birth_date, positive_number)
                     VALUES ($1, $2, $3, $4, $5, $6)
                     RETURNING {}",
                    RETURNING_COLUMNS
                );
                sqlx::query(&sql)
                    .bind(&record.name)
                    .bind(&record.city)
                    .bind(&record.postal_code)
                    .bind(&record.email)
                    .bind(record.birth_date)
                    .bind(record.positive_number)
                    .fetch_one(&mut *tx)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    "INSERT INTO client (id, name, city, postal_code, email, birth_date, positive_number)
                     VALUES ($1, $2, $3, $4, $5, $6, $7)
                     ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        city = EXCLUDED.city,
                        postal_code = EXCLUDED.postal_code,
                        email = EXCLUDED.email,
                        birth_date = EXCLUDED.birth_date,
                        positive_number = EXCLUDED.positive_number
                     RETURNING {}",
                    RETURNING_COLUMNS
                );
                let row = sqlx::query(&sql)
                    .bind(id)
                    .bind(&record.name)
                    .bind(&record.city)
                    .bind(&record.postal_code)
                    .bind(&record.email)
                    .bind(record.birth_date)
                    .bind(record.positive_number)
                    .fetch_one(&mut *tx)
                    .await?;

                // Explicit ids bypass the sequence; move it past them.
                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('client', 'id'),
                                   GREATEST((SELECT MAX(id) FROM client), 1))",
                )
                .execute(&mut *tx)
                .await?;
                row
            }
        };

        tx.commit().await?;
        row_to_record(&row)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ClientRecord>> {
        let sql = format!("SELECT {} FROM client ORDER BY id", RETURNING_COLUMNS);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_record).collect()
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
