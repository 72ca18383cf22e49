//*** START FILE: src/lib.rs ***//

pub mod config;
pub mod error;
pub mod types {
    pub mod entry;
}
pub mod lexicon;
pub mod dictionary_io;
pub mod session;
pub mod render;
pub mod app;

pub use lexicon::{Catalog, Selection, Summary};
pub use session::{LoadState, SentenceSession};
pub use types::entry::{Alternatives, Entry};

//*** END FILE: src/lib.rs ***//
