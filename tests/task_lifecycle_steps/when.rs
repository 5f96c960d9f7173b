//! When steps for task status lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use capstone::task::domain::{CompletionConfirmation, TaskStatus};
use rstest_bdd_macros::when;

#[when("the task revision is advanced")]
fn advance_revision(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    match run_async(world.service.advance_revision(task_id)) {
        Ok((task, outcome)) => {
            world.last_outcome = Some(outcome);
            world.last_change = Some(Ok(task));
        }
        Err(err) => {
            world.last_outcome = None;
            world.last_change = Some(Err(err));
        }
    }
    Ok(())
}

#[when(r#"the adviser changes the status to "{status}""#)]
fn change_status(world: &mut LifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task_id = world.task_id()?;
    let result = run_async(world.service.set_status(
        task_id,
        target,
        CompletionConfirmation::Unconfirmed,
    ));
    world.last_change = Some(result);
    Ok(())
}

#[when("the adviser completes the task without confirmation")]
fn complete_without_confirmation(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let result = run_async(world.service.set_status(
        task_id,
        TaskStatus::Completed,
        CompletionConfirmation::Unconfirmed,
    ));
    world.last_change = Some(result);
    Ok(())
}
