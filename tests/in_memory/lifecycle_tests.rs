//! Update, deactivation, and deletion flows against the in-memory
//! repository.

use super::helpers::{TestService, create_ok, organization_id, service};
use crate::test_helpers::FixedClock;
use bulletin::message::{
    domain::{MessageId, OrganizationId},
    outcome::{INACTIVE_DELETE_MESSAGE, INACTIVE_UPDATE_MESSAGE, MessageOutcome},
    services::UpdateMessageRequest,
    validation::MessageField,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_and_persists(
    service: TestService,
    organization_id: OrganizationId,
) {
    let created = create_ok(&service, organization_id, "Original", "Original content").await;

    let outcome = service
        .update(
            organization_id,
            created.id(),
            UpdateMessageRequest::new("Revised", "Revised content!", true),
        )
        .await
        .expect("storage available");

    let MessageOutcome::Updated(updated) = outcome else {
        panic!("expected updated outcome, got {outcome:?}");
    };
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.title(), "Revised");
    assert_eq!(updated.updated_at(), Some(FixedClock::reference().0));

    let fetched = service
        .get(organization_id, created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(updated));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_message_rejects_update_and_delete_but_stays_readable(
    service: TestService,
    organization_id: OrganizationId,
) {
    let created = create_ok(&service, organization_id, "Hello", "0123456789").await;

    let deactivated = service
        .update(
            organization_id,
            created.id(),
            UpdateMessageRequest::new("Hello", "0123456789", false),
        )
        .await
        .expect("storage available");
    assert!(matches!(deactivated, MessageOutcome::Updated(ref m) if !m.is_active()));

    let update_again = service
        .update(
            organization_id,
            created.id(),
            UpdateMessageRequest::new("Hello again", "Perfectly valid content", true),
        )
        .await
        .expect("storage available");
    let MessageOutcome::ValidationError(update_errors) = update_again else {
        panic!("expected validation error, got {update_again:?}");
    };
    assert_eq!(
        update_errors.get(MessageField::IsActive),
        Some([INACTIVE_UPDATE_MESSAGE.to_owned()].as_slice())
    );

    let delete = service
        .delete(organization_id, created.id())
        .await
        .expect("storage available");
    let MessageOutcome::ValidationError(delete_errors) = delete else {
        panic!("expected validation error, got {delete:?}");
    };
    assert_eq!(
        delete_errors.get(MessageField::IsActive),
        Some([INACTIVE_DELETE_MESSAGE.to_owned()].as_slice())
    );

    let fetched = service
        .get(organization_id, created.id())
        .await
        .expect("lookup should succeed")
        .expect("inactive message remains readable");
    assert!(!fetched.is_active());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_to_another_messages_title_conflicts(
    service: TestService,
    organization_id: OrganizationId,
) {
    create_ok(&service, organization_id, "First", "First message body").await;
    let second = create_ok(&service, organization_id, "Second", "Second message body").await;

    let outcome = service
        .update(
            organization_id,
            second.id(),
            UpdateMessageRequest::new("First", "Second message body", true),
        )
        .await
        .expect("storage available");

    assert_eq!(outcome, MessageOutcome::duplicate_title());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeping_own_title_succeeds(
    service: TestService,
    organization_id: OrganizationId,
) {
    let created = create_ok(&service, organization_id, "Stable", "Body before edit").await;

    let outcome = service
        .update(
            organization_id,
            created.id(),
            UpdateMessageRequest::new("Stable", "Body after edit", true),
        )
        .await
        .expect("storage available");

    assert!(matches!(outcome, MessageOutcome::Updated(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_in_wrong_organization_are_not_found(
    service: TestService,
    organization_id: OrganizationId,
) {
    let created = create_ok(&service, organization_id, "Scoped", "Only for my org").await;
    let stranger = OrganizationId::new();

    let update = service
        .update(
            stranger,
            created.id(),
            UpdateMessageRequest::new("Scoped", "Only for my org", true),
        )
        .await
        .expect("storage available");
    let delete = service
        .delete(stranger, created.id())
        .await
        .expect("storage available");

    assert_eq!(update, MessageOutcome::not_found());
    assert_eq!(delete, MessageOutcome::not_found());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_ids_are_not_found(service: TestService, organization_id: OrganizationId) {
    let id = MessageId::new();

    let update = service
        .update(
            organization_id,
            id,
            UpdateMessageRequest::new("Nobody", "Nothing to update", true),
        )
        .await
        .expect("storage available");
    let delete = service
        .delete(organization_id, id)
        .await
        .expect("storage available");
    let get = service
        .get(organization_id, id)
        .await
        .expect("storage available");

    assert_eq!(update, MessageOutcome::not_found());
    assert_eq!(delete, MessageOutcome::not_found());
    assert!(get.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_message_and_frees_title(
    service: TestService,
    organization_id: OrganizationId,
) {
    let created = create_ok(&service, organization_id, "Farewell", "Goodbye, world").await;

    let outcome = service
        .delete(organization_id, created.id())
        .await
        .expect("storage available");
    assert_eq!(outcome, MessageOutcome::Deleted);

    assert!(
        service
            .get(organization_id, created.id())
            .await
            .expect("lookup should succeed")
            .is_none()
    );
    create_ok(&service, organization_id, "Farewell", "Back again, world").await;
}
