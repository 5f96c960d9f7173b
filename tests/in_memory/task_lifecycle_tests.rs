//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Harness, adviser, harness, request_for};
use capstone::task::{
    domain::{
        AssigneeRef, CompletionConfirmation, RevisionOutcome, TaskDomainError, TaskStatus,
    },
    ports::TaskRepository,
    services::TaskLifecycleError,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_fans_out_one_task_per_team(harness: Harness) -> Result<(), eyre::Report> {
    let session = adviser();
    let request = request_for(&harness.service, &["Team Alpha", "Team Beta", "Team Alpha"])?;

    let created = harness.service.create_tasks(&session, request).await?;

    eyre::ensure!(created.len() == 2, "duplicate teams collapse to one task each");
    let owned = harness.service.list_for_owner(session.user_id()).await?;
    eyre::ensure!(owned.len() == 2, "both tasks are listed for the adviser");
    for task in &owned {
        eyre::ensure!(task.status() == TaskStatus::ToDo);
        eyre::ensure!(task.revision().value() == 0);
        eyre::ensure!(task.selection().element() == Some("Questionnaire"));
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_listing_only_shows_its_own_tasks(harness: Harness) -> Result<(), eyre::Report> {
    let request = request_for(&harness.service, &["Team Alpha", "Team Beta"])?;
    harness.service.create_tasks(&adviser(), request).await?;

    let team = AssigneeRef::new("Team Alpha")?;
    let alpha = harness.service.list_for_assignee(&team).await?;

    eyre::ensure!(alpha.len() == 1, "expected one task, found {}", alpha.len());
    let task = alpha
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.assignee().as_str() == "Team Alpha");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missed_task_walks_to_the_revision_cap(harness: Harness) -> Result<(), eyre::Report> {
    let request = request_for(&harness.service, &["Team Gamma"])?;
    let created = harness.service.create_tasks(&adviser(), request).await?;
    let task_id = created
        .first()
        .ok_or_else(|| eyre::eyre!("no task created"))?
        .id();

    let mut last = None;
    for _ in 0..11 {
        harness.service.mark_missed(task_id).await?;
        let (_, outcome) = harness.service.advance_revision(task_id).await?;
        last = Some(outcome);
    }

    let stored = harness
        .repository
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| eyre::eyre!("task disappeared"))?;
    eyre::ensure!(stored.revision().value() == 10, "revision stays capped at ten");
    eyre::ensure!(stored.status() == TaskStatus::Missed);
    eyre::ensure!(matches!(last, Some(RevisionOutcome::Exhausted(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_is_persisted_as_final(harness: Harness) -> Result<(), eyre::Report> {
    let request = request_for(&harness.service, &["Team Delta"])?;
    let created = harness.service.create_tasks(&adviser(), request).await?;
    let task_id = created
        .first()
        .ok_or_else(|| eyre::eyre!("no task created"))?
        .id();

    harness
        .service
        .set_status(task_id, TaskStatus::InProgress, CompletionConfirmation::Unconfirmed)
        .await?;
    let completed = harness
        .service
        .set_status(task_id, TaskStatus::Completed, CompletionConfirmation::Confirmed)
        .await?;
    eyre::ensure!(completed.completed_at().is_some(), "completion time is stamped");

    let reopened = harness
        .service
        .set_status(task_id, TaskStatus::ToDo, CompletionConfirmation::Unconfirmed)
        .await;
    eyre::ensure!(matches!(
        reopened,
        Err(TaskLifecycleError::Domain(TaskDomainError::InvalidTransition { .. }))
    ));

    let stored = harness
        .service
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| eyre::eyre!("task disappeared"))?;
    eyre::ensure!(stored.status() == TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone_from_listings(harness: Harness) -> Result<(), eyre::Report> {
    let session = adviser();
    let request = request_for(&harness.service, &["Team Alpha", "Team Beta"])?;
    let created = harness.service.create_tasks(&session, request).await?;
    let task_id = created
        .first()
        .ok_or_else(|| eyre::eyre!("no task created"))?
        .id();

    harness.service.delete_task(task_id).await?;

    let owned = harness.service.list_for_owner(session.user_id()).await?;
    eyre::ensure!(owned.len() == 1);
    eyre::ensure!(owned.iter().all(|task| task.id() != task_id));
    let again = harness.service.delete_task(task_id).await;
    eyre::ensure!(matches!(again, Err(TaskLifecycleError::NotFound(id)) if id == task_id));
    Ok(())
}
