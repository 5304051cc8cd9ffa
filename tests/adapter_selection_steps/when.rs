//! When steps for adapter selection BDD scenarios.

use super::world::SelectionWorld;
use crate::test_helpers::DocumentPort;
use rstest_bdd_macros::when;
use switchyard::capability::domain::AdapterSettings;

#[when(r#"the document port is selected for "{type_id}" with "{property}" set to "{value}""#)]
fn select_with_property(world: &mut SelectionWorld, type_id: String, property: String, value: String) {
    let settings = AdapterSettings::new().with(property, value);
    world.last_selection = Some(
        world
            .stack
            .selector
            .select::<dyn DocumentPort>(Some(&type_id), &settings),
    );
}

#[when(r#"the document port is selected for "{type_id}" without properties"#)]
fn select_without_properties(world: &mut SelectionWorld, type_id: String) {
    world.last_selection = Some(
        world
            .stack
            .selector
            .select::<dyn DocumentPort>(Some(&type_id), &AdapterSettings::new()),
    );
}

#[when("the document port is selected without a configured adapter")]
fn select_unconfigured(world: &mut SelectionWorld) {
    world.last_selection = Some(
        world
            .stack
            .selector
            .select::<dyn DocumentPort>(None, &AdapterSettings::new()),
    );
}
