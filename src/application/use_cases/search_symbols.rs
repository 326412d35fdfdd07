use crate::application::ports::{ListedSymbol, SymbolCatalog};
use std::sync::Arc;
use thiserror::Error;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Error)]
pub enum SearchSymbolsError {
    #[error("Missing search query parameter 'q'")]
    MissingQuery,
}

/// Catalog search backing the buy-page symbol lookup.
pub struct SearchSymbolsUseCase<S>
where
    S: SymbolCatalog + ?Sized,
{
    catalog: Arc<S>,
}

impl<S> SearchSymbolsUseCase<S>
where
    S: SymbolCatalog + ?Sized,
{
    pub fn new(catalog: Arc<S>) -> Self {
        Self { catalog }
    }

    pub fn execute(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ListedSymbol>, SearchSymbolsError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchSymbolsError::MissingQuery);
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        Ok(self.catalog.search(query, limit))
    }
}
