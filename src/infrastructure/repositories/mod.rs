pub mod in_memory_ledger;

pub use in_memory_ledger::InMemoryLedger;
