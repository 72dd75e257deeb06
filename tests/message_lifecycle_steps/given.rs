//! Given steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use bulletin::message::{outcome::MessageOutcome, services::CreateMessageRequest};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an active message titled "{title}" in organization "{organization}""#)]
fn an_active_message(
    world: &mut MessageWorld,
    title: String,
    organization: String,
) -> Result<(), eyre::Report> {
    let organization_id = world.organization(&organization);
    let request = CreateMessageRequest::new(title, "Seeded scenario content");
    let outcome = run_async(world.service.create(organization_id, request))
        .wrap_err("create seed message for scenario")?;
    let MessageOutcome::Created(message) = outcome else {
        return Err(eyre::eyre!("expected seed message to be created, got {outcome:?}"));
    };
    world.current = Some(message);
    Ok(())
}
