//! # diagnet-corpus
//!
//! The knowledge corpus: one cause per line, written as
//! `"<cause> has symptoms <e1>, <e2>, ..., <en>."`.
//!
//! - [`parser`]: single-line parse and render
//! - [`reader`] / [`writer`]: whole-file I/O
//! - [`source`]: [`CorpusFactSource`], a `FactSource` over a corpus file
//! - [`sample`]: draw a corpus from a CSV disease/symptom dataset

pub mod parser;
pub mod reader;
pub mod sample;
pub mod source;
pub mod writer;

pub use parser::{parse_line, render_line};
pub use reader::{read_corpus, read_corpus_str, CorpusReport};
pub use sample::{sample_dataset, sample_reader, sample_to_corpus, SampleReport};
pub use source::CorpusFactSource;
pub use writer::write_corpus;
