//! Given steps for task status lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use capstone::task::{
    domain::{CompletionConfirmation, TaskStatus},
    services::CreateTasksRequest,
};
use chrono::NaiveDate;
use rstest_bdd_macros::given;

#[given(r#"an adviser has assigned a task to "{team}""#)]
fn adviser_assigned_task(world: &mut LifecycleWorld, team: String) -> Result<(), eyre::Report> {
    let due_date = NaiveDate::from_ymd_opt(2026, 11, 30)
        .ok_or_else(|| eyre::eyre!("invalid scenario due date"))?;
    let request = CreateTasksRequest::new(world.complete_selection()?, due_date)
        .with_assignees([team])
        .with_comment("Submit the project charter");

    let created = run_async(world.service.create_tasks(&world.session, request))?;
    let task = created
        .first()
        .ok_or_else(|| eyre::eyre!("no task was created"))?;
    world.task_id = Some(task.id());
    Ok(())
}

#[given("the task revision is set to {revision:u8}")]
fn task_revision_set(world: &mut LifecycleWorld, revision: u8) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    run_async(world.service.set_revision(task_id, revision))?;
    Ok(())
}

#[given("the task has been marked missed")]
fn task_marked_missed(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let task = run_async(world.service.mark_missed(task_id))?;
    eyre::ensure!(task.status() == TaskStatus::Missed, "task was not marked missed");
    Ok(())
}

#[given("the task has been completed with confirmation")]
fn task_completed(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    run_async(world.service.set_status(
        task_id,
        TaskStatus::Completed,
        CompletionConfirmation::Confirmed,
    ))?;
    Ok(())
}
