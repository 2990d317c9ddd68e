//! Input handling module

pub mod corpus_args;
pub mod corpus_loader;

pub use corpus_args::CorpusArgs;
pub use corpus_loader::load_corpus;
