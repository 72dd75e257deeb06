//! Creation flows against the in-memory repository.

use super::helpers::{TestService, create_ok, organization_id, service};
use crate::test_helpers::FixedClock;
use bulletin::message::{
    domain::OrganizationId,
    outcome::{MessageOutcome, OutcomeKind},
    services::CreateMessageRequest,
    validation::MessageField,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_message_preserves_input_and_is_retrievable(
    service: TestService,
    organization_id: OrganizationId,
) {
    let created = create_ok(&service, organization_id, "Hello", "0123456789").await;

    assert_eq!(created.title(), "Hello");
    assert_eq!(created.content(), "0123456789");
    assert!(created.is_active());
    assert_eq!(created.created_at(), FixedClock::reference().0);
    assert_eq!(created.updated_at(), None);

    let fetched = service
        .get(organization_id, created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[case::title_lower_bound(3, 10)]
#[case::title_upper_bound(200, 10)]
#[case::content_upper_bound(3, 1000)]
#[tokio::test(flavor = "multi_thread")]
async fn boundary_lengths_are_accepted(
    service: TestService,
    organization_id: OrganizationId,
    #[case] title_length: usize,
    #[case] content_length: usize,
) {
    let title = "t".repeat(title_length);
    let content = "c".repeat(content_length);

    let outcome = service
        .create(organization_id, CreateMessageRequest::new(title, content))
        .await
        .expect("storage available");

    assert_eq!(outcome.kind(), OutcomeKind::Created);
}

#[rstest]
#[case::empty_title("", "A perfectly fine body", MessageField::Title)]
#[case::whitespace_title("   ", "A perfectly fine body", MessageField::Title)]
#[case::short_title("ab", "A perfectly fine body", MessageField::Title)]
#[case::empty_content("Fine title", "", MessageField::Content)]
#[case::whitespace_content("Fine title", "           ", MessageField::Content)]
#[case::short_content("Fine title", "123456789", MessageField::Content)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_fields_yield_validation_error(
    service: TestService,
    organization_id: OrganizationId,
    #[case] title: &str,
    #[case] content: &str,
    #[case] expected_field: MessageField,
) {
    let outcome = service
        .create(organization_id, CreateMessageRequest::new(title, content))
        .await
        .expect("storage available");

    let MessageOutcome::ValidationError(errors) = outcome else {
        panic!("expected validation error, got {outcome:?}");
    };
    assert!(errors.contains(expected_field));
    assert!(
        service
            .list_all(organization_id)
            .await
            .expect("listing should succeed")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn oversized_fields_yield_validation_error(
    service: TestService,
    organization_id: OrganizationId,
) {
    let outcome = service
        .create(
            organization_id,
            CreateMessageRequest::new("t".repeat(201), "c".repeat(1001)),
        )
        .await
        .expect("storage available");

    let MessageOutcome::ValidationError(errors) = outcome else {
        panic!("expected validation error, got {outcome:?}");
    };
    assert!(errors.contains(MessageField::Title));
    assert!(errors.contains(MessageField::Content));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn titles_are_unique_per_organization_only(service: TestService) {
    let first_org = OrganizationId::new();
    let second_org = OrganizationId::new();
    create_ok(&service, first_org, "Hello", "0123456789").await;

    let duplicate = service
        .create(first_org, CreateMessageRequest::new("Hello", "abcdefghij"))
        .await
        .expect("storage available");
    assert_eq!(duplicate, MessageOutcome::duplicate_title());

    let elsewhere = create_ok(&service, second_org, "Hello", "abcdefghij").await;
    assert_eq!(elsewhere.organization_id(), second_org);
}

// Title comparison is exact: no case folding and no trimming.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_uniqueness_is_case_sensitive_and_untrimmed(
    service: TestService,
    organization_id: OrganizationId,
) {
    create_ok(&service, organization_id, "Hello", "0123456789").await;

    create_ok(&service, organization_id, "hello", "0123456789").await;
    create_ok(&service, organization_id, "Hello ", "0123456789").await;

    let listed = service
        .list_all(organization_id)
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 3);
}
