//! Write bundles as a corpus file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use diagnet_core::errors::CorpusError;
use diagnet_core::FactBundle;

use crate::parser::render_line;

/// Write one line per bundle, replacing any existing file.
pub fn write_corpus(path: &Path, bundles: &[FactBundle]) -> Result<(), CorpusError> {
    let io_err = |source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    for bundle in bundles {
        writeln!(out, "{}", render_line(bundle)).map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}
