use crate::application::ports::{ListedSymbol, SymbolCatalog};
use std::io;
use std::path::Path;

/// Names longer than this are truncated with an ellipsis, as the UI
/// renders them in fixed-width lists.
const MAX_NAME_LEN: usize = 50;

/// Symbol reference data loaded from an exchange listing-status CSV.
///
/// Only rows with assetType "Stock" are kept (the file also lists ETFs).
/// The file is read once at construction; the catalog itself is immutable.
#[derive(Debug, Clone)]
pub struct ListingFileCatalog {
    listings: Vec<ListedSymbol>,
}

impl ListingFileCatalog {
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// A small built-in catalog for demos and tests, no file needed.
    pub fn with_defaults() -> Self {
        ListingFileCatalog {
            listings: vec![
                listing("AAPL", "Apple Inc"),
                listing("AMZN", "Amazon.com Inc"),
                listing("GOOG", "Alphabet Inc - Class C"),
                listing("MSFT", "Microsoft Corporation"),
                listing("NVDA", "NVIDIA Corp"),
                listing("TSLA", "Tesla Inc"),
            ],
        }
    }

    /// Parse listing-status CSV text. Header row names the columns; the
    /// ones we need are symbol, name, and assetType. Fields in this file
    /// are never quoted, so a plain comma split is enough.
    fn parse(contents: &str) -> Self {
        let mut lines = contents.lines();
        let header: Vec<&str> = match lines.next() {
            Some(line) => line.split(',').map(str::trim).collect(),
            None => return ListingFileCatalog { listings: vec![] },
        };
        let col = |name: &str| header.iter().position(|h| *h == name);
        let (symbol_col, name_col, asset_col) = match (col("symbol"), col("name"), col("assetType"))
        {
            (Some(s), Some(n), Some(a)) => (s, n, a),
            _ => return ListingFileCatalog { listings: vec![] },
        };

        let listings = lines
            .filter_map(|line| {
                let fields: Vec<&str> = line.split(',').collect();
                let asset_type = fields.get(asset_col)?.trim();
                if asset_type != "Stock" {
                    return None;
                }
                let symbol = fields.get(symbol_col)?.trim();
                let name = fields.get(name_col)?.trim();
                if symbol.is_empty() {
                    return None;
                }
                Some(listing(symbol, name))
            })
            .collect();

        ListingFileCatalog { listings }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn listing(symbol: &str, name: &str) -> ListedSymbol {
    let name = if name.chars().count() > MAX_NAME_LEN {
        let mut truncated: String = name.chars().take(MAX_NAME_LEN).collect();
        truncated.push_str("...");
        truncated
    } else {
        name.to_string()
    };
    ListedSymbol {
        symbol: symbol.to_string(),
        name,
    }
}

impl SymbolCatalog for ListingFileCatalog {
    fn all(&self) -> Vec<ListedSymbol> {
        self.listings.clone()
    }

    fn search(&self, query: &str, limit: usize) -> Vec<ListedSymbol> {
        let needle = query.trim().to_uppercase();
        if needle.is_empty() {
            return vec![];
        }
        self.listings
            .iter()
            .filter(|l| {
                l.symbol.to_uppercase().contains(&needle)
                    || l.name.to_uppercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
symbol,name,exchange,assetType,ipoDate,delistingDate,status
AAPL,Apple Inc,NASDAQ,Stock,1980-12-12,null,Active
SPY,SPDR S&P 500 ETF,NYSE ARCA,ETF,1993-01-29,null,Active
MSFT,Microsoft Corporation,NASDAQ,Stock,1986-03-13,null,Active
";

    #[test]
    fn test_parse_keeps_stocks_only() {
        let catalog = ListingFileCatalog::parse(SAMPLE);
        let symbols: Vec<String> = catalog.all().into_iter().map(|l| l.symbol).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let catalog = ListingFileCatalog::parse("");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_long_names_are_truncated() {
        let long_name = "X".repeat(80);
        let input = format!(
            "symbol,name,exchange,assetType\nLONG,{},NYSE,Stock\n",
            long_name
        );
        let catalog = ListingFileCatalog::parse(&input);
        let name = &catalog.all()[0].name;
        assert_eq!(name.len(), MAX_NAME_LEN + 3);
        assert!(name.ends_with("..."));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // 30 chars but 60 bytes; must stay intact.
        let accented = "É".repeat(30);
        let input = format!(
            "symbol,name,exchange,assetType\nACC,{},NYSE,Stock\nLONG,{},NYSE,Stock\n",
            accented,
            "É".repeat(60)
        );
        let catalog = ListingFileCatalog::parse(&input);

        assert_eq!(catalog.all()[0].name, accented);

        let truncated = &catalog.all()[1].name;
        assert_eq!(truncated.chars().count(), MAX_NAME_LEN + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_search_matches_symbol_and_name() {
        let catalog = ListingFileCatalog::with_defaults();

        let by_symbol = catalog.search("aapl", 10);
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].symbol, "AAPL");

        let by_name = catalog.search("corp", 10);
        assert!(by_name.iter().any(|l| l.symbol == "MSFT"));
        assert!(by_name.iter().any(|l| l.symbol == "NVDA"));
    }

    #[test]
    fn test_search_respects_limit() {
        let catalog = ListingFileCatalog::with_defaults();
        assert_eq!(catalog.search("a", 2).len(), 2);
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let catalog = ListingFileCatalog::with_defaults();
        assert!(catalog.search("   ", 10).is_empty());
    }
}
