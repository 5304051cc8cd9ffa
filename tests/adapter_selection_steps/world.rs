//! Shared world state for adapter selection BDD scenarios.

use crate::test_helpers::{DocumentPort, Stack};
use rstest::fixture;
use switchyard::capability::services::Selection;

/// Scenario world for adapter selection behaviour tests.
pub struct SelectionWorld {
    /// Registry and selector under test.
    pub stack: Stack,
    /// Result of the last selection.
    pub last_selection: Option<Selection<dyn DocumentPort>>,
}

impl SelectionWorld {
    /// Creates a world with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            last_selection: None,
        }
    }

    /// Returns the last selection or a scenario error.
    pub fn selection(&self) -> Result<&Selection<dyn DocumentPort>, eyre::Report> {
        self.last_selection
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no selection in scenario world"))
    }
}

impl Default for SelectionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SelectionWorld {
    SelectionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
