//! Given steps for taxonomy selection BDD scenarios.

use super::world::TaxonomyWorld;
use rstest_bdd_macros::given;

#[given("the creation form uses the sample Agile taxonomy")]
fn sample_agile_taxonomy(world: &mut TaxonomyWorld) -> Result<(), eyre::Report> {
    world.load_agile()
}

#[given(r#"the form has been filled down to the subtask "{subtask}""#)]
fn form_filled_to_subtask(world: &mut TaxonomyWorld, subtask: String) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?.clone();
    let selection = &mut world.selection;
    resolver.on_methodology_selected(selection, "Agile")?;
    resolver.on_phase_selected(selection, "Planning")?;
    resolver.on_task_type_selected(selection, "Kickoff")?;
    resolver.on_task_selected(selection, "Draft Charter")?;
    resolver.on_subtask_selected(selection, subtask)?;
    Ok(())
}
