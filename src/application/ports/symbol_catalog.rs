use serde::{Deserialize, Serialize};

/// One tradeable listing from the reference file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedSymbol {
    pub symbol: String,
    pub name: String,
}

/// Port for the static symbol reference data used by search and the UI.
///
/// The catalog is loaded once at construction; lookups are synchronous.
pub trait SymbolCatalog: Send + Sync {
    /// All listings, in file order.
    fn all(&self) -> Vec<ListedSymbol>;

    /// Case-insensitive substring search over symbol and name.
    fn search(&self, query: &str, limit: usize) -> Vec<ListedSymbol>;
}
