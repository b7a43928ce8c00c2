use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;

use lingodesk::application::ports::JobStore;
use lingodesk::application::services::{
    AuthContext, JobService, JobServiceError, NewJobRequest, TranslationMessage,
};
use lingodesk::domain::{CurrentUser, Job, JobId, JobStatus, Language, Role, UserId};
use lingodesk::infrastructure::identity::StaticIdentityProvider;
use lingodesk::infrastructure::persistence::MemoryJobStore;

fn test_service() -> (
    Arc<MemoryJobStore>,
    JobService,
    mpsc::Receiver<TranslationMessage>,
) {
    let store = Arc::new(MemoryJobStore::new());
    let auth = AuthContext::new(Arc::new(StaticIdentityProvider::demo()));
    let (tx, rx) = mpsc::channel(8);
    let service = JobService::new(store.clone(), auth, tx);
    (store, service, rx)
}

fn regular_user() -> CurrentUser {
    CurrentUser {
        id: UserId::new("1"),
        username: "user".to_string(),
        role: Role::User,
    }
}

fn other_user() -> CurrentUser {
    CurrentUser {
        id: UserId::new("3"),
        username: "other".to_string(),
        role: Role::User,
    }
}

fn admin_user() -> CurrentUser {
    CurrentUser {
        id: UserId::new("2"),
        username: "admin".to_string(),
        role: Role::Admin,
    }
}

fn report_request() -> NewJobRequest {
    NewJobRequest {
        file_name: "report.pdf".to_string(),
        file_size: 2048,
        source_language: "English".to_string(),
        target_language: "French".to_string(),
    }
}

#[tokio::test]
async fn given_valid_request_when_adding_job_then_it_is_queued_with_owner_and_timestamp() {
    let (store, service, _rx) = test_service();
    let user = regular_user();

    let job_id = service
        .add_job(Some(&user), report_request())
        .await
        .unwrap();

    let job = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Queued);
    assert_eq!(job.owner_id, user.id);
    assert_eq!(job.file_name, "report.pdf");
    assert_eq!(job.file_size, 2048);
    assert_eq!(job.source_language, Language::English);
    assert_eq!(job.target_language, Language::French);
    assert!(job.completed_date.is_none());
    assert!(job.error_message.is_none());
}

#[tokio::test]
async fn given_accepted_job_when_added_then_pipeline_message_is_enqueued() {
    let (_store, service, mut rx) = test_service();

    let job_id = service
        .add_job(Some(&regular_user()), report_request())
        .await
        .unwrap();

    let msg = rx.recv().await.unwrap();
    assert_eq!(msg.job_id, job_id);
    assert_eq!(msg.source_language, Language::English);
    assert_eq!(msg.target_language, Language::French);
    assert!(!msg.text.is_empty());
}

#[tokio::test]
async fn given_no_user_when_adding_job_then_not_authenticated() {
    let (store, service, _rx) = test_service();

    let result = service.add_job(None, report_request()).await;

    assert!(matches!(result, Err(JobServiceError::NotAuthenticated)));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_unknown_source_language_when_adding_job_then_validation_fails_and_nothing_is_inserted(
) {
    let (store, service, _rx) = test_service();
    let mut request = report_request();
    request.source_language = "Klingon".to_string();

    let result = service.add_job(Some(&regular_user()), request).await;

    assert!(matches!(result, Err(JobServiceError::Validation(_))));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_target_only_language_as_source_when_adding_job_then_validation_fails() {
    let (_store, service, _rx) = test_service();
    let mut request = report_request();
    request.source_language = "Arabic".to_string();

    let result = service.add_job(Some(&regular_user()), request).await;
    assert!(matches!(result, Err(JobServiceError::Validation(_))));

    // Arabic is fine as a target.
    let mut request = report_request();
    request.target_language = "Arabic".to_string();
    assert!(service
        .add_job(Some(&regular_user()), request)
        .await
        .is_ok());
}

#[tokio::test]
async fn given_empty_file_name_or_zero_size_when_adding_job_then_validation_fails() {
    let (_store, service, _rx) = test_service();

    let mut request = report_request();
    request.file_name = "   ".to_string();
    assert!(matches!(
        service.add_job(Some(&regular_user()), request).await,
        Err(JobServiceError::Validation(_))
    ));

    let mut request = report_request();
    request.file_size = 0;
    assert!(matches!(
        service.add_job(Some(&regular_user()), request).await,
        Err(JobServiceError::Validation(_))
    ));
}

#[tokio::test]
async fn given_jobs_from_two_users_when_listing_then_visibility_is_role_scoped() {
    let (_store, service, _rx) = test_service();
    let user = regular_user();
    let other = other_user();
    let admin = admin_user();

    let own_id = service
        .add_job(Some(&user), report_request())
        .await
        .unwrap();
    let foreign_id = service
        .add_job(Some(&other), report_request())
        .await
        .unwrap();

    let user_view = service.visible_jobs(Some(&user)).await.unwrap();
    assert_eq!(user_view.len(), 1);
    assert_eq!(user_view[0].id, own_id);
    assert!(user_view.iter().all(|j| j.owner_id == user.id));

    let admin_view = service.visible_jobs(Some(&admin)).await.unwrap();
    assert_eq!(admin_view.len(), 2);
    assert!(admin_view.iter().any(|j| j.id == foreign_id));
}

#[tokio::test]
async fn given_no_user_when_listing_then_not_authenticated() {
    let (_store, service, _rx) = test_service();
    assert!(matches!(
        service.visible_jobs(None).await,
        Err(JobServiceError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn given_mixed_upload_dates_when_listing_then_sorted_descending_with_stable_ties() {
    let (store, service, _rx) = test_service();
    let admin = admin_user();
    let base = Utc::now();

    let mut old = Job::new(
        UserId::new("1"),
        "old.pdf".to_string(),
        100,
        Language::English,
        Language::French,
    );
    old.upload_date = base - chrono::Duration::seconds(60);

    let mut tie_first = Job::new(
        UserId::new("1"),
        "tie-first.pdf".to_string(),
        100,
        Language::English,
        Language::French,
    );
    tie_first.upload_date = base;

    let mut tie_second = Job::new(
        UserId::new("1"),
        "tie-second.pdf".to_string(),
        100,
        Language::English,
        Language::French,
    );
    tie_second.upload_date = base;

    store.insert(&old).await.unwrap();
    store.insert(&tie_first).await.unwrap();
    store.insert(&tie_second).await.unwrap();

    let listed = service.visible_jobs(Some(&admin)).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|j| j.file_name.as_str()).collect();
    assert_eq!(names, ["tie-first.pdf", "tie-second.pdf", "old.pdf"]);
}

#[tokio::test]
async fn given_forward_chain_when_updating_status_then_terminal_invariants_hold() {
    let (store, service, _rx) = test_service();
    let job_id = service
        .add_job(Some(&regular_user()), report_request())
        .await
        .unwrap();

    service
        .update_status(job_id, JobStatus::Processing, None)
        .await
        .unwrap();
    service
        .update_status(job_id, JobStatus::Translating, None)
        .await
        .unwrap();
    service
        .update_status(job_id, JobStatus::Completed, None)
        .await
        .unwrap();

    let job = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.completed_date.is_some());
    assert!(job.error_message.is_none());
}

#[tokio::test]
async fn given_error_transition_when_updating_status_then_message_is_stored_without_completed_date()
{
    let (store, service, _rx) = test_service();
    let job_id = service
        .add_job(Some(&regular_user()), report_request())
        .await
        .unwrap();

    service
        .update_status(job_id, JobStatus::Processing, None)
        .await
        .unwrap();
    service
        .update_status(job_id, JobStatus::Translating, None)
        .await
        .unwrap();
    service
        .update_status(job_id, JobStatus::Error, Some("Translation service error."))
        .await
        .unwrap();

    let job = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Error);
    assert_eq!(job.error_message.as_deref(), Some("Translation service error."));
    assert!(job.completed_date.is_none());
}

#[tokio::test]
async fn given_noop_or_non_forward_transition_when_updating_then_rejected_and_unchanged() {
    let (store, service, _rx) = test_service();
    let job_id = service
        .add_job(Some(&regular_user()), report_request())
        .await
        .unwrap();

    // No-op.
    assert!(matches!(
        service.update_status(job_id, JobStatus::Queued, None).await,
        Err(JobServiceError::InvalidTransition { .. })
    ));
    // Skipping a state.
    assert!(matches!(
        service
            .update_status(job_id, JobStatus::Translating, None)
            .await,
        Err(JobServiceError::InvalidTransition { .. })
    ));
    // Jumping straight to a terminal state.
    assert!(matches!(
        service
            .update_status(job_id, JobStatus::Completed, None)
            .await,
        Err(JobServiceError::InvalidTransition { .. })
    ));

    let job = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Queued);
    assert!(job.completed_date.is_none());
    assert!(job.error_message.is_none());
}

#[tokio::test]
async fn given_terminal_job_when_updating_then_rejected() {
    let (store, service, _rx) = test_service();
    let job_id = service
        .add_job(Some(&regular_user()), report_request())
        .await
        .unwrap();

    for status in [
        JobStatus::Processing,
        JobStatus::Translating,
        JobStatus::Completed,
    ] {
        service.update_status(job_id, status, None).await.unwrap();
    }

    assert!(matches!(
        service.update_status(job_id, JobStatus::Error, None).await,
        Err(JobServiceError::InvalidTransition { .. })
    ));
    let job = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Completed);
}

#[tokio::test]
async fn given_unknown_job_when_updating_then_not_found() {
    let (_store, service, _rx) = test_service();
    assert!(matches!(
        service
            .update_status(JobId::new(), JobStatus::Processing, None)
            .await,
        Err(JobServiceError::NotFound)
    ));
}

#[tokio::test]
async fn given_foreign_job_when_fetching_then_not_found_for_non_admin() {
    let (_store, service, _rx) = test_service();
    let owner = regular_user();
    let stranger = other_user();
    let admin = admin_user();

    let job_id = service
        .add_job(Some(&owner), report_request())
        .await
        .unwrap();

    assert!(service.get_job(Some(&owner), job_id).await.is_ok());
    assert!(service.get_job(Some(&admin), job_id).await.is_ok());
    assert!(matches!(
        service.get_job(Some(&stranger), job_id).await,
        Err(JobServiceError::NotFound)
    ));
}

#[tokio::test]
async fn given_subscriber_when_job_is_added_then_change_signal_is_delivered() {
    let (_store, service, _rx) = test_service();
    let mut changes = service.subscribe_changes();

    service
        .add_job(Some(&regular_user()), report_request())
        .await
        .unwrap();

    tokio::time::timeout(Duration::from_secs(1), changes.recv())
        .await
        .expect("no change signal within 1s")
        .unwrap();
}

#[tokio::test]
async fn given_language_options_when_fetched_then_fixed_sets_are_returned() {
    let (_store, service, _rx) = test_service();
    let options = service.language_options();
    assert_eq!(options.source.len(), 12);
    assert_eq!(options.target.len(), 14);
    assert!(options.target.contains(&Language::Arabic));
    assert!(!options.source.contains(&Language::Arabic));
}
