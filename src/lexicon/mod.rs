//*** START FILE: src/lexicon/mod.rs ***//
pub mod aggregator;
pub mod catalog;
pub mod normalizer;
pub mod selection;

// Re-export the pieces the session and the front ends reach for
pub use aggregator::{summarize, Summary, TagCount, TOP_TAG_LIMIT};
pub use catalog::{compare_words, Catalog};
pub use normalizer::{load_all, normalize};
pub use selection::Selection;
//*** END FILE: src/lexicon/mod.rs ***//
