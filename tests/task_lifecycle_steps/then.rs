//! Then steps for task status lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use capstone::task::{
    domain::{RevisionOutcome, TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};
use rstest_bdd_macros::then;

fn last_domain_error(world: &LifecycleWorld) -> Result<&TaskDomainError, eyre::Report> {
    let result = world
        .last_change
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing change result"))?;
    match result {
        Err(TaskLifecycleError::Domain(err)) => Ok(err),
        Err(other) => Err(eyre::eyre!("expected a domain error, got {other}")),
        Ok(task) => Err(eyre::eyre!(
            "expected the change to fail, task is {}",
            task.status()
        )),
    }
}

#[then("the revision counter is {revision:u8}")]
fn revision_counter_is(world: &LifecycleWorld, revision: u8) -> Result<(), eyre::Report> {
    let task = world.stored_task()?;
    eyre::ensure!(
        task.revision().value() == revision,
        "expected revision {revision}, found {}",
        task.revision().value()
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &LifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.stored_task()?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the revision outcome is exhausted")]
fn outcome_exhausted(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(RevisionOutcome::Exhausted(_)) => Ok(()),
        other => Err(eyre::eyre!("expected an exhausted outcome, got {other:?}")),
    }
}

#[then("the revision outcome is reopened")]
fn outcome_reopened(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(RevisionOutcome::Reopened(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a reopened outcome, got {other:?}")),
    }
}

#[then("the change fails with an invalid transition error")]
fn fails_invalid_transition(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    match last_domain_error(world)? {
        TaskDomainError::InvalidTransition { .. } => Ok(()),
        other => Err(eyre::eyre!("expected InvalidTransition, got {other}")),
    }
}

#[then("the change fails with a confirmation required error")]
fn fails_confirmation_required(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    match last_domain_error(world)? {
        TaskDomainError::ConfirmationRequired(_) => Ok(()),
        other => Err(eyre::eyre!("expected ConfirmationRequired, got {other}")),
    }
}

#[then("the change fails with an invalid state error")]
fn fails_invalid_state(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    match last_domain_error(world)? {
        TaskDomainError::InvalidState { .. } => Ok(()),
        other => Err(eyre::eyre!("expected InvalidState, got {other}")),
    }
}
