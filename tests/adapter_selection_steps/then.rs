//! Then steps for adapter selection BDD scenarios.

use super::world::{SelectionWorld, run_async};
use crate::test_helpers::{Document, DocumentError};
use rstest_bdd_macros::then;
use switchyard::capability::domain::CapabilityEvent;

#[then(r#"the selected adapter is "{type_id}""#)]
fn selected_adapter_is(world: &SelectionWorld, type_id: String) -> Result<(), eyre::Report> {
    let selection = world.selection()?;
    match selection.adapter_type_id() {
        Some(selected) if selected.as_str() == type_id => Ok(()),
        other => Err(eyre::eyre!("expected adapter '{type_id}', got {other:?}")),
    }
}

#[then("the selection is synthetic")]
fn selection_is_synthetic(world: &SelectionWorld) -> Result<(), eyre::Report> {
    if !world.selection()?.is_synthetic() {
        return Err(eyre::eyre!("expected a synthetic selection"));
    }
    Ok(())
}

#[then(r#"a validation failure names missing property "{property}""#)]
fn validation_failure_names(world: &SelectionWorld, property: String) -> Result<(), eyre::Report> {
    let reported = world.stack.observer.events().iter().any(|event| {
        matches!(
            event,
            CapabilityEvent::ValidationFailed { missing_properties, .. }
                if missing_properties.contains(&property)
        )
    });
    if !reported {
        return Err(eyre::eyre!("expected a validation failure naming '{property}'"));
    }
    Ok(())
}

#[then("fetching a document finds nothing")]
fn fetching_finds_nothing(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let port = world.selection()?.instance();
    let found = run_async(port.get_document("doc-1"))
        .map_err(|err| eyre::eyre!("get_document failed: {err}"))?;
    if found.is_some() {
        return Err(eyre::eyre!("expected no document, got {found:?}"));
    }
    Ok(())
}

#[then("checking document access is allowed")]
fn access_is_allowed(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let port = world.selection()?.instance();
    let allowed = run_async(port.can_access_document("doc-1", "alice", "WRITE"))
        .map_err(|err| eyre::eyre!("can_access_document failed: {err}"))?;
    if !allowed {
        return Err(eyre::eyre!("expected access checks to fail open"));
    }
    Ok(())
}

#[then("checking document existence answers false")]
fn existence_is_false(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let port = world.selection()?.instance();
    let exists = run_async(port.exists_document("doc-1"))
        .map_err(|err| eyre::eyre!("exists_document failed: {err}"))?;
    if exists {
        return Err(eyre::eyre!("expected existence checks to fail closed"));
    }
    Ok(())
}

#[then("creating a document fails as unavailable")]
fn creating_fails(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let port = world.selection()?.instance();
    let result = run_async(port.create_document(Document::new("doc-1", "root", "Lease"), Vec::new()));
    if !matches!(result, Err(DocumentError::Unavailable(_))) {
        return Err(eyre::eyre!("expected CapabilityUnavailable, got {result:?}"));
    }
    Ok(())
}
