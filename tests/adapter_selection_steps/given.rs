//! Given steps for adapter selection BDD scenarios.

use super::world::SelectionWorld;
use crate::test_helpers::{DocumentPort, InMemoryDocumentAdapter, document_descriptor};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a document adapter "{type_id}" with priority {priority:i32} requiring "{property}""#)]
fn adapter_requiring_property(
    world: &mut SelectionWorld,
    type_id: String,
    priority: i32,
    property: String,
) -> Result<(), eyre::Report> {
    world
        .stack
        .registry
        .register::<dyn DocumentPort>(
            document_descriptor(&type_id, priority, &[property.as_str()]),
            InMemoryDocumentAdapter::shared(),
        )
        .wrap_err("register adapter with required property")?;
    Ok(())
}

#[given(r#"a document adapter "{type_id}" with priority {priority:i32}"#)]
fn adapter_with_priority(
    world: &mut SelectionWorld,
    type_id: String,
    priority: i32,
) -> Result<(), eyre::Report> {
    world
        .stack
        .registry
        .register::<dyn DocumentPort>(
            document_descriptor(&type_id, priority, &[]),
            InMemoryDocumentAdapter::shared(),
        )
        .wrap_err("register adapter")?;
    Ok(())
}

#[given("no document adapters are registered")]
fn no_adapters(world: &mut SelectionWorld) -> Result<(), eyre::Report> {
    if !world.stack.registry.all::<dyn DocumentPort>().is_empty() {
        return Err(eyre::eyre!("expected an empty registry"));
    }
    Ok(())
}
