//! When steps for taxonomy selection BDD scenarios.

use super::world::TaxonomyWorld;
use capstone::taxonomy::domain::TaxonomyLevel;
use rstest_bdd_macros::when;

#[when(r#"the methodology "{methodology}" is selected"#)]
fn select_methodology(world: &mut TaxonomyWorld, methodology: String) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?.clone();
    let result = resolver.on_methodology_selected(&mut world.selection, methodology);
    world.record(result);
    Ok(())
}

#[when(r#"the phase "{phase}" is selected"#)]
fn select_phase(world: &mut TaxonomyWorld, phase: String) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?.clone();
    let result = resolver.on_phase_selected(&mut world.selection, phase);
    world.record(result);
    Ok(())
}

#[when(r#"the task type "{task_type}" is selected"#)]
fn select_task_type(world: &mut TaxonomyWorld, task_type: String) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?.clone();
    let result = resolver.on_task_type_selected(&mut world.selection, task_type);
    world.record(result);
    Ok(())
}

#[when(r#"the task "{task}" is selected"#)]
fn select_task(world: &mut TaxonomyWorld, task: String) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?.clone();
    let result = resolver.on_task_selected(&mut world.selection, task);
    world.record(result);
    Ok(())
}

#[when(r#"the subtask "{subtask}" is selected"#)]
fn select_subtask(world: &mut TaxonomyWorld, subtask: String) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?.clone();
    let result = resolver.on_subtask_selected(&mut world.selection, subtask);
    world.record(result);
    Ok(())
}

#[when("the methodology is cleared")]
fn clear_methodology(world: &mut TaxonomyWorld) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?.clone();
    let options = resolver.clear(TaxonomyLevel::Methodology, &mut world.selection);
    world.record(Ok(options));
    Ok(())
}
