pub mod listing_file;

pub use listing_file::ListingFileCatalog;
