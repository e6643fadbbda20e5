//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{profile::UserProfile, session::Session};
use crate::domain::repository::{ProfileRepository, SessionRepository};
use crate::domain::value_object::role::Role;
use crate::error::AccessResult;
use kernel::id::SessionId;

/// PostgreSQL-backed access repository
#[derive(Clone)]
pub struct PgAccessRepository {
    pool: PgPool,
}

impl PgAccessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> AccessResult<u64> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at < $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgAccessRepository {
    async fn find_by_uid(&self, uid: &str) -> AccessResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                uid,
                email,
                role,
                client_id,
                name,
                created_at,
                last_login_at
            FROM users
            WHERE uid = $1
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn touch_last_login(&self, uid: &str) -> AccessResult<()> {
        sqlx::query("UPDATE users SET last_login_at = $1 WHERE uid = $2")
            .bind(Utc::now())
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAccessRepository {
    async fn create(&self, session: &Session) -> AccessResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                uid,
                role,
                client_ip,
                user_agent,
                created_at,
                expires_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session.id.as_uuid())
        .bind(&session.uid)
        .bind(session.role.map(|r| r.id()))
        .bind(&session.client_ip)
        .bind(&session.user_agent)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> AccessResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                uid,
                role,
                client_ip,
                user_agent,
                created_at,
                expires_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn delete(&self, id: &SessionId) -> AccessResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_expired(&self) -> AccessResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    uid: String,
    email: String,
    role: Option<String>,
    client_id: Option<String>,
    name: Option<String>,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl ProfileRow {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            uid: self.uid,
            email: self.email,
            // Unknown codes degrade to "no role" rather than failing the row
            role: self.role.as_deref().and_then(Role::from_code),
            client_id: self.client_id,
            name: self.name,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    uid: String,
    role: Option<i16>,
    client_ip: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            id: SessionId::from_uuid(self.session_id),
            uid: self.uid,
            role: self.role.and_then(|id| {
                Role::ALL.into_iter().find(|r| r.id() == id)
            }),
            client_ip: self.client_ip,
            user_agent: self.user_agent,
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}
