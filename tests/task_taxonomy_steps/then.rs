//! Then steps for taxonomy selection BDD scenarios.

use super::world::TaxonomyWorld;
use capstone::taxonomy::domain::{TaxonomyError, TaxonomyLevel};
use rstest_bdd_macros::then;

/// Checks the last returned option set against a comma-separated list.
fn expect_options(
    world: &TaxonomyWorld,
    level: TaxonomyLevel,
    expected: &str,
) -> Result<(), eyre::Report> {
    let options = world
        .last_options
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no option set recorded, last error: {:?}", world.last_error))?;
    let wanted: Vec<&str> = expected.split(',').map(str::trim).collect();

    eyre::ensure!(options.level() == level, "expected {level} options, got {}", options.level());
    eyre::ensure!(options.enabled(), "{level} control should be enabled");
    eyre::ensure!(
        options.options() == wanted.as_slice(),
        "expected {wanted:?}, got {:?}",
        options.options()
    );
    Ok(())
}

#[then(r#"the phase options are "{options}""#)]
fn phase_options(world: &TaxonomyWorld, options: String) -> Result<(), eyre::Report> {
    expect_options(world, TaxonomyLevel::Phase, &options)
}

#[then(r#"the task type options are "{options}""#)]
fn task_type_options(world: &TaxonomyWorld, options: String) -> Result<(), eyre::Report> {
    expect_options(world, TaxonomyLevel::TaskType, &options)
}

#[then(r#"the task options are "{options}""#)]
fn task_options(world: &TaxonomyWorld, options: String) -> Result<(), eyre::Report> {
    expect_options(world, TaxonomyLevel::Task, &options)
}

#[then(r#"the subtask options are "{options}""#)]
fn subtask_options(world: &TaxonomyWorld, options: String) -> Result<(), eyre::Report> {
    expect_options(world, TaxonomyLevel::Subtask, &options)
}

#[then("the element control is disabled")]
fn element_control_disabled(world: &TaxonomyWorld) -> Result<(), eyre::Report> {
    let options = world
        .last_options
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no option set recorded"))?;
    eyre::ensure!(options.level() == TaxonomyLevel::Element);
    eyre::ensure!(!options.enabled(), "element control should be disabled");
    Ok(())
}

#[then("the selection can be submitted")]
fn selection_submittable(world: &TaxonomyWorld) -> Result<(), eyre::Report> {
    world.resolver()?.validate_submission(&world.selection)?;
    Ok(())
}

#[then("no taxonomy level is selected")]
fn nothing_selected(world: &TaxonomyWorld) -> Result<(), eyre::Report> {
    for level in TaxonomyLevel::ALL {
        eyre::ensure!(
            world.selection.get(level).is_none(),
            "{level} should have been cleared"
        );
    }
    Ok(())
}

#[then("the selection fails as out of order")]
fn selection_out_of_order(world: &TaxonomyWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaxonomyError::OutOfOrderSelection { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected OutOfOrderSelection, got {other:?}")),
    }
}
