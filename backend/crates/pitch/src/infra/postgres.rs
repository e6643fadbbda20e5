//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::PitchAccessId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{PitchAccess, PitchView, RecipientMeta};
use crate::domain::repository::PitchRepository;
use crate::error::PitchResult;

/// PostgreSQL-backed pitch repository
#[derive(Clone)]
pub struct PgPitchRepository {
    pool: PgPool,
}

impl PgPitchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PitchRepository for PgPitchRepository {
    async fn create(&self, access: &PitchAccess) -> PitchResult<()> {
        sqlx::query(
            r#"
            INSERT INTO outbound_pitches (
                pitch_id,
                company_slug,
                token,
                username,
                expires_at,
                created_at,
                is_revoked,
                allowed_ips,
                view_count,
                last_viewed_at,
                recipient_name,
                recipient_email,
                recipient_company,
                notes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(access.id.as_uuid())
        .bind(&access.company_slug)
        .bind(&access.token)
        .bind(&access.username)
        .bind(access.expires_at)
        .bind(access.created_at)
        .bind(access.is_revoked)
        .bind(&access.allowed_ips)
        .bind(access.view_count)
        .bind(access.last_viewed_at)
        .bind(&access.metadata.recipient_name)
        .bind(&access.metadata.recipient_email)
        .bind(&access.metadata.recipient_company)
        .bind(&access.metadata.notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_slug_and_token(
        &self,
        company_slug: &str,
        token: &str,
    ) -> PitchResult<Option<PitchAccess>> {
        let row = sqlx::query_as::<_, PitchAccessRow>(
            r#"
            SELECT
                pitch_id, company_slug, token, username, expires_at, created_at,
                is_revoked, allowed_ips, view_count, last_viewed_at,
                recipient_name, recipient_email, recipient_company, notes
            FROM outbound_pitches
            WHERE company_slug = $1 AND token = $2
            "#,
        )
        .bind(company_slug)
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PitchAccessRow::into_access))
    }

    async fn find_by_id(&self, id: &PitchAccessId) -> PitchResult<Option<PitchAccess>> {
        let row = sqlx::query_as::<_, PitchAccessRow>(
            r#"
            SELECT
                pitch_id, company_slug, token, username, expires_at, created_at,
                is_revoked, allowed_ips, view_count, last_viewed_at,
                recipient_name, recipient_email, recipient_company, notes
            FROM outbound_pitches
            WHERE pitch_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PitchAccessRow::into_access))
    }

    async fn revoke(&self, id: &PitchAccessId) -> PitchResult<bool> {
        let affected = sqlx::query("UPDATE outbound_pitches SET is_revoked = TRUE WHERE pitch_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn extend(&self, id: &PitchAccessId, expires_at: DateTime<Utc>) -> PitchResult<bool> {
        let affected = sqlx::query(
            "UPDATE outbound_pitches SET expires_at = $1, is_revoked = FALSE WHERE pitch_id = $2",
        )
        .bind(expires_at)
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn list_by_slug(&self, company_slug: &str) -> PitchResult<Vec<PitchAccess>> {
        let rows = sqlx::query_as::<_, PitchAccessRow>(
            r#"
            SELECT
                pitch_id, company_slug, token, username, expires_at, created_at,
                is_revoked, allowed_ips, view_count, last_viewed_at,
                recipient_name, recipient_email, recipient_company, notes
            FROM outbound_pitches
            WHERE company_slug = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(company_slug)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PitchAccessRow::into_access).collect())
    }

    async fn record_view(&self, id: &PitchAccessId) -> PitchResult<()> {
        // Relative increment; two racing validations both land
        sqlx::query(
            "UPDATE outbound_pitches SET view_count = view_count + 1, last_viewed_at = $1 WHERE pitch_id = $2",
        )
        .bind(Utc::now())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn track_view(&self, view: &PitchView) -> PitchResult<()> {
        sqlx::query(
            r#"
            INSERT INTO pitch_views (pitch_id, client_ip, username, user_agent, viewed_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(view.pitch_id.as_uuid())
        .bind(&view.client_ip)
        .bind(&view.username)
        .bind(&view.user_agent)
        .bind(view.viewed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_views(&self, id: &PitchAccessId) -> PitchResult<Vec<PitchView>> {
        let rows = sqlx::query_as::<_, PitchViewRow>(
            r#"
            SELECT pitch_id, client_ip, username, user_agent, viewed_at
            FROM pitch_views
            WHERE pitch_id = $1
            ORDER BY viewed_at DESC
            "#,
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PitchViewRow::into_view).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PitchAccessRow {
    pitch_id: Uuid,
    company_slug: String,
    token: String,
    username: Option<String>,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    is_revoked: bool,
    allowed_ips: Vec<String>,
    view_count: i64,
    last_viewed_at: Option<DateTime<Utc>>,
    recipient_name: Option<String>,
    recipient_email: Option<String>,
    recipient_company: Option<String>,
    notes: Option<String>,
}

impl PitchAccessRow {
    fn into_access(self) -> PitchAccess {
        PitchAccess {
            id: PitchAccessId::from_uuid(self.pitch_id),
            company_slug: self.company_slug,
            token: self.token,
            username: self.username,
            expires_at: self.expires_at,
            created_at: self.created_at,
            is_revoked: self.is_revoked,
            allowed_ips: self.allowed_ips,
            view_count: self.view_count,
            last_viewed_at: self.last_viewed_at,
            metadata: RecipientMeta {
                recipient_name: self.recipient_name,
                recipient_email: self.recipient_email,
                recipient_company: self.recipient_company,
                notes: self.notes,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct PitchViewRow {
    pitch_id: Uuid,
    client_ip: String,
    username: Option<String>,
    user_agent: Option<String>,
    viewed_at: DateTime<Utc>,
}

impl PitchViewRow {
    fn into_view(self) -> PitchView {
        PitchView {
            pitch_id: PitchAccessId::from_uuid(self.pitch_id),
            client_ip: self.client_ip,
            username: self.username,
            user_agent: self.user_agent,
            viewed_at: self.viewed_at,
        }
    }
}
