//! Unit tests for the pitch crate
//!
//! Use-case level tests run against an in-memory repository.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use kernel::id::PitchAccessId;

use crate::application::config::PitchConfig;
use crate::application::create_access::{CreateAccessInput, CreateAccessUseCase};
use crate::application::manage_access::ManageAccessUseCase;
use crate::application::validate_access::{ValidateAccessInput, ValidateAccessUseCase};
use crate::domain::entities::{PitchAccess, PitchView, RecipientMeta};
use crate::domain::repository::PitchRepository;
use crate::error::{PitchError, PitchResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemPitchRepository {
    records: Arc<Mutex<Vec<PitchAccess>>>,
    views: Arc<Mutex<Vec<PitchView>>>,
}

impl PitchRepository for MemPitchRepository {
    async fn create(&self, access: &PitchAccess) -> PitchResult<()> {
        self.records.lock().unwrap().push(access.clone());
        Ok(())
    }

    async fn find_by_slug_and_token(
        &self,
        company_slug: &str,
        token: &str,
    ) -> PitchResult<Option<PitchAccess>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.company_slug == company_slug && a.token == token)
            .cloned())
    }

    async fn find_by_id(&self, id: &PitchAccessId) -> PitchResult<Option<PitchAccess>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == *id)
            .cloned())
    }

    async fn revoke(&self, id: &PitchAccessId) -> PitchResult<bool> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|a| a.id == *id) {
            Some(a) => {
                a.is_revoked = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn extend(&self, id: &PitchAccessId, expires_at: DateTime<Utc>) -> PitchResult<bool> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|a| a.id == *id) {
            Some(a) => {
                a.expires_at = expires_at;
                a.is_revoked = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_by_slug(&self, company_slug: &str) -> PitchResult<Vec<PitchAccess>> {
        let mut out: Vec<PitchAccess> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.company_slug == company_slug)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn record_view(&self, id: &PitchAccessId) -> PitchResult<()> {
        let mut records = self.records.lock().unwrap();
        if let Some(a) = records.iter_mut().find(|a| a.id == *id) {
            a.view_count += 1;
            a.last_viewed_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn track_view(&self, view: &PitchView) -> PitchResult<()> {
        self.views.lock().unwrap().push(view.clone());
        Ok(())
    }

    async fn list_views(&self, id: &PitchAccessId) -> PitchResult<Vec<PitchView>> {
        Ok(self
            .views
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.pitch_id == *id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> (Arc<MemPitchRepository>, Arc<PitchConfig>) {
    (
        Arc::new(MemPitchRepository::default()),
        Arc::new(PitchConfig::new("https://studio.example")),
    )
}

async fn create(
    repo: &Arc<MemPitchRepository>,
    config: &Arc<PitchConfig>,
    username: Option<&str>,
) -> crate::application::create_access::CreateAccessOutput {
    CreateAccessUseCase::new(repo.clone(), config.clone())
        .execute(CreateAccessInput {
            company_slug: "acme".into(),
            expiry_days: None,
            username: username.map(String::from),
            metadata: RecipientMeta::default(),
        })
        .await
        .unwrap()
}

fn validate_input(token: &str, username: Option<&str>) -> ValidateAccessInput {
    ValidateAccessInput {
        company_slug: "acme".into(),
        token: token.to_string(),
        username: username.map(String::from),
        client_ip: "203.0.113.7".into(),
        user_agent: Some("test-agent".into()),
    }
}

// ============================================================================
// Create + validate
// ============================================================================

mod create_validate {
    use super::*;

    #[tokio::test]
    async fn test_create_then_validate_round_trip() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        assert_eq!(created.token.len(), 64);
        assert!(created.pitch_url.contains(&created.token));

        let outcome = ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&created.token, None))
            .await;

        assert!(outcome.valid);
        assert!(outcome.error.is_none());
        let access = outcome.access.unwrap();
        assert_eq!(access.view_count, 0); // snapshot taken before increment
    }

    #[tokio::test]
    async fn test_tampered_token_invalid() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        let mut tampered = created.token.clone();
        tampered.replace_range(0..1, if &tampered[0..1] == "a" { "b" } else { "a" });

        let outcome = ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&tampered, None))
            .await;

        assert!(!outcome.valid);
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn test_wrong_slug_invalid() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        let mut input = validate_input(&created.token, None);
        input.company_slug = "other".into();

        let outcome = ValidateAccessUseCase::new(repo.clone()).execute(input).await;
        assert!(!outcome.valid);
    }

    #[tokio::test]
    async fn test_expired_token_invalid_even_with_right_token() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        // Force the record into the past
        {
            let mut records = repo.records.lock().unwrap();
            records[0].expires_at = Utc::now() - Duration::hours(1);
        }

        let outcome = ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&created.token, None))
            .await;

        assert!(!outcome.valid);
        assert!(outcome.error.unwrap().contains("expired"));
    }

    #[tokio::test]
    async fn test_validation_increments_view_count_and_tracks() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        let use_case = ValidateAccessUseCase::new(repo.clone());
        use_case.execute(validate_input(&created.token, None)).await;
        use_case.execute(validate_input(&created.token, None)).await;

        let records = repo.records.lock().unwrap();
        assert_eq!(records[0].view_count, 2);
        assert!(records[0].last_viewed_at.is_some());
        drop(records);

        assert_eq!(repo.views.lock().unwrap().len(), 2);
    }
}

// ============================================================================
// Username gate
// ============================================================================

mod username_gate {
    use super::*;

    #[tokio::test]
    async fn test_missing_username_requires_username() {
        let (repo, config) = setup();
        let created = create(&repo, &config, Some("sam")).await;

        let outcome = ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&created.token, None))
            .await;

        assert!(!outcome.valid);
        assert!(outcome.requires_username);
    }

    #[tokio::test]
    async fn test_wrong_username_invalid() {
        let (repo, config) = setup();
        let created = create(&repo, &config, Some("sam")).await;

        let outcome = ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&created.token, Some("alex")))
            .await;

        assert!(!outcome.valid);
        assert!(!outcome.requires_username);
    }

    #[tokio::test]
    async fn test_correct_username_valid() {
        let (repo, config) = setup();
        let created = create(&repo, &config, Some("sam")).await;

        let outcome = ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&created.token, Some("sam")))
            .await;

        assert!(outcome.valid);
    }

    #[tokio::test]
    async fn test_bound_username_appears_in_url() {
        let (repo, config) = setup();
        let created = create(&repo, &config, Some("sam")).await;
        assert!(created.pitch_url.contains("&username=sam"));
    }
}

// ============================================================================
// IP allowlist
// ============================================================================

mod ip_allowlist {
    use super::*;

    #[tokio::test]
    async fn test_allowlisted_ip_passes_others_fail() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        {
            let mut records = repo.records.lock().unwrap();
            records[0].allowed_ips = vec!["203.0.113.7".into()];
        }

        let use_case = ValidateAccessUseCase::new(repo.clone());

        let ok = use_case.execute(validate_input(&created.token, None)).await;
        assert!(ok.valid);

        let mut input = validate_input(&created.token, None);
        input.client_ip = "198.51.100.1".into();
        let denied = use_case.execute(input).await;
        assert!(!denied.valid);
        assert!(denied.error.unwrap().contains("IP"));
    }
}

// ============================================================================
// Revoke + extend
// ============================================================================

mod manage {
    use super::*;

    #[tokio::test]
    async fn test_revoked_token_invalid() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        ManageAccessUseCase::new(repo.clone(), config.clone())
            .revoke(&created.pitch_id)
            .await
            .unwrap();

        let outcome = ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&created.token, None))
            .await;

        assert!(!outcome.valid);
        assert!(outcome.error.unwrap().contains("revoked"));
    }

    #[tokio::test]
    async fn test_revoke_unknown_id_is_not_found() {
        let (repo, config) = setup();
        let err = ManageAccessUseCase::new(repo.clone(), config.clone())
            .revoke(&uuid::Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, PitchError::NotFound));
    }

    #[tokio::test]
    async fn test_revoke_garbage_id_is_bad_request() {
        let (repo, config) = setup();
        let err = ManageAccessUseCase::new(repo.clone(), config.clone())
            .revoke("not-a-uuid")
            .await
            .unwrap_err();
        assert!(matches!(err, PitchError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_extend_unrevokes_and_moves_expiry() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        let manage = ManageAccessUseCase::new(repo.clone(), config.clone());
        manage.revoke(&created.pitch_id).await.unwrap();

        let new_expiry = manage.extend(&created.pitch_id, 5).await.unwrap();
        assert!(new_expiry > created.expires_at);

        let records = repo.records.lock().unwrap();
        assert!(!records[0].is_revoked);
        assert_eq!(records[0].expires_at, new_expiry);
    }

    #[tokio::test]
    async fn test_extend_caps_at_thirty_days_from_now() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        let new_expiry = ManageAccessUseCase::new(repo.clone(), config.clone())
            .extend(&created.pitch_id, 365)
            .await
            .unwrap();

        let cap = Utc::now() + Duration::days(30);
        assert!(new_expiry <= cap);
        assert!(new_expiry > cap - Duration::minutes(1));
    }

    #[tokio::test]
    async fn test_extend_rejects_non_positive_days() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;

        let err = ManageAccessUseCase::new(repo.clone(), config.clone())
            .extend(&created.pitch_id, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, PitchError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_list_and_analytics() {
        let (repo, config) = setup();
        let created = create(&repo, &config, None).await;
        create(&repo, &config, None).await;

        let manage = ManageAccessUseCase::new(repo.clone(), config.clone());

        let listed = manage.list("acme").await.unwrap();
        assert_eq!(listed.len(), 2);

        ValidateAccessUseCase::new(repo.clone())
            .execute(validate_input(&created.token, None))
            .await;

        let views = manage.analytics(&created.pitch_id).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].client_ip, "203.0.113.7");
    }
}

// ============================================================================
// Token generation
// ============================================================================

mod token {
    use crate::domain::entities::TOKEN_BYTES;
    use platform::crypto::random_hex_token;

    #[test]
    fn test_token_shape() {
        let token = random_hex_token(TOKEN_BYTES);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(random_hex_token(TOKEN_BYTES), random_hex_token(TOKEN_BYTES));
    }
}
