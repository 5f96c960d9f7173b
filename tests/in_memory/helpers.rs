//! Shared test helpers for in-memory adapter integration tests.

use std::sync::Arc;

use capstone::{
    session::{Role, Session, UserId},
    task::{
        adapters::memory::{InMemoryBlobStore, InMemoryTaskRepository},
        services::{CreateTasksRequest, TaskLifecycleService},
    },
    taxonomy::{domain::Selection, loader::parse_taxonomy, resolver::TaxonomyResolver},
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;

/// Service wired to in-memory adapters.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, InMemoryBlobStore, DefaultClock>;

/// Service plus direct handles on its adapters.
pub struct Harness {
    pub service: TestService,
    pub repository: Arc<InMemoryTaskRepository>,
    pub blobs: Arc<InMemoryBlobStore>,
}

const TAXONOMY: &str = r#"{
    "Waterfall": {
        "phases": ["Requirements", "Design"],
        "task_types": { "Requirements": ["Elicitation"] },
        "tasks": { "Elicitation": ["Interview Clients"] },
        "subtasks": { "Interview Clients": ["Prepare Questions"] },
        "elements": { "Prepare Questions": ["Questionnaire", "Consent Form"] }
    }
}"#;

/// Provides a service over fresh in-memory adapters.
#[fixture]
pub fn harness() -> Harness {
    let taxonomy = parse_taxonomy(TAXONOMY).expect("test taxonomy is valid");
    let repository = Arc::new(InMemoryTaskRepository::new());
    let blobs = Arc::new(InMemoryBlobStore::new());
    let service = TaskLifecycleService::new(
        Arc::clone(&repository),
        Arc::clone(&blobs),
        TaxonomyResolver::new(Arc::new(taxonomy)),
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        repository,
        blobs,
    }
}

/// Returns the signed-in adviser.
pub fn adviser() -> Session {
    Session::new(UserId::new("dr-reyes").expect("valid user"), Role::Adviser)
}

/// Builds a selection down to the `Questionnaire` element.
pub fn full_selection(service: &TestService) -> Result<Selection, eyre::Report> {
    let resolver = service.resolver();
    let mut selection = Selection::new();
    resolver.on_methodology_selected(&mut selection, "Waterfall")?;
    resolver.on_phase_selected(&mut selection, "Requirements")?;
    resolver.on_task_type_selected(&mut selection, "Elicitation")?;
    resolver.on_task_selected(&mut selection, "Interview Clients")?;
    resolver.on_subtask_selected(&mut selection, "Prepare Questions")?;
    resolver.on_element_selected(&mut selection, "Questionnaire")?;
    Ok(selection)
}

/// Builds a creation request for the given teams.
pub fn request_for(
    service: &TestService,
    teams: &[&str],
) -> Result<CreateTasksRequest, eyre::Report> {
    let due_date =
        NaiveDate::from_ymd_opt(2026, 12, 4).ok_or_else(|| eyre::eyre!("invalid due date"))?;
    Ok(CreateTasksRequest::new(full_selection(service)?, due_date)
        .with_assignees(teams.iter().copied())
        .with_comment("Draft the interview questionnaire"))
}
