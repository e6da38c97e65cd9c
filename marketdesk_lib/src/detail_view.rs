//! State machine for single-entity screens.

/// Render state of a detail screen. Failure is terminal for the view: there
/// is no retry, only navigation back to the list.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Loaded(T),
    /// The backend answered but the entity does not exist (null data).
    /// Rendered as its own panel, distinct from a failure.
    NotFound,
    Failed(String),
}

pub struct DetailView<T> {
    state: DetailState<T>,
}

impl<T> Default for DetailView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DetailView<T> {
    /// Detail screens fetch on mount, so a fresh view is already loading.
    pub fn new() -> Self {
        Self {
            state: DetailState::Loading,
        }
    }

    /// Applies the fetch outcome: `Ok(Some)` loads, `Ok(None)` is the
    /// not-found panel, `Err` the terminal error panel.
    pub fn resolve(&mut self, result: Result<Option<T>, String>) {
        self.state = match result {
            Ok(Some(entity)) => DetailState::Loaded(entity),
            Ok(None) => DetailState::NotFound,
            Err(message) => DetailState::Failed(message),
        };
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    pub fn entity(&self) -> Option<&T> {
        match &self.state {
            DetailState::Loaded(entity) => Some(entity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let view: DetailView<&str> = DetailView::new();
        assert_eq!(*view.state(), DetailState::Loading);
    }

    #[test]
    fn null_entity_is_not_found_not_failure() {
        let mut view: DetailView<&str> = DetailView::new();
        view.resolve(Ok(None));
        assert_eq!(*view.state(), DetailState::NotFound);
    }

    #[test]
    fn failure_is_terminal_with_message() {
        let mut view: DetailView<&str> = DetailView::new();
        view.resolve(Err("Failed to fetch user".to_string()));
        assert_eq!(
            *view.state(),
            DetailState::Failed("Failed to fetch user".to_string())
        );
        assert!(view.entity().is_none());
    }
}
