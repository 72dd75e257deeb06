//! Then steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use bulletin::message::outcome::MessageOutcome;
use rstest_bdd_macros::then;

#[then("the message is created and active")]
fn created_and_active(world: &MessageWorld) -> Result<(), eyre::Report> {
    match world.last_outcome()? {
        MessageOutcome::Created(message) if message.is_active() => Ok(()),
        other => Err(eyre::eyre!("expected an active created message, got {other:?}")),
    }
}

#[then("the request is rejected as a title conflict")]
fn rejected_as_conflict(world: &MessageWorld) -> Result<(), eyre::Report> {
    match world.last_outcome()? {
        MessageOutcome::Conflict(_) => Ok(()),
        other => Err(eyre::eyre!("expected a conflict, got {other:?}")),
    }
}

#[then("the message is reported as updated")]
fn reported_updated(world: &MessageWorld) -> Result<(), eyre::Report> {
    match world.last_outcome()? {
        MessageOutcome::Updated(_) => Ok(()),
        other => Err(eyre::eyre!("expected an update, got {other:?}")),
    }
}

#[then("the message is reported as deleted")]
fn reported_deleted(world: &MessageWorld) -> Result<(), eyre::Report> {
    match world.last_outcome()? {
        MessageOutcome::Deleted => Ok(()),
        other => Err(eyre::eyre!("expected a deletion, got {other:?}")),
    }
}

#[then(r#"the request fails validation on "{field}""#)]
fn fails_validation_on(world: &MessageWorld, field: String) -> Result<(), eyre::Report> {
    let MessageOutcome::ValidationError(errors) = world.last_outcome()? else {
        return Err(eyre::eyre!(
            "expected a validation error, got {:?}",
            world.last_outcome()?
        ));
    };
    if errors.iter().any(|(entry, _)| entry.as_str() == field) {
        Ok(())
    } else {
        Err(eyre::eyre!("expected a '{field}' entry, got {errors}"))
    }
}

#[then("the message can still be read")]
fn still_readable(world: &MessageWorld) -> Result<(), eyre::Report> {
    let message = world.current_message()?;
    let found = run_async(world.service.get(message.organization_id(), message.id()))
        .map_err(|err| eyre::eyre!("get failed: {err}"))?;
    if found.is_none() {
        return Err(eyre::eyre!("expected message {} to be readable", message.id()));
    }
    Ok(())
}

#[then("the message can no longer be read")]
fn no_longer_readable(world: &MessageWorld) -> Result<(), eyre::Report> {
    let message = world.current_message()?;
    let found = run_async(world.service.get(message.organization_id(), message.id()))
        .map_err(|err| eyre::eyre!("get failed: {err}"))?;
    if found.is_some() {
        return Err(eyre::eyre!("expected message {} to be gone", message.id()));
    }
    Ok(())
}
