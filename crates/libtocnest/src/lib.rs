//! Restructures a DocFX-generated `toc.yml` so that nested types sit under
//! their enclosing parent type.
//!
//! The documentation generator emits one flat entry per type, so an inner
//! type shows up as a dot-qualified sibling of its parent:
//!
//! ```text
//! - WorldRunner
//! - WorldRunner.DebugDataType
//! - WorldRunner.NetFunctionCtx
//! ```
//!
//! This crate rewrites that into a hierarchy:
//!
//! ```text
//! - WorldRunner
//!   - DebugDataType
//!   - NetFunctionCtx
//! ```
//!
//! The pipeline is parse → nest → write: [`parse_toc`] builds a forest of
//! [`Namespace`] records from the document text, [`nest_items`] re-parents
//! dot-qualified entries under their matching sibling, and [`write_toc`]
//! serializes the forest back. [`process_file`] runs the whole pipeline
//! against a file on disk, overwriting it in place.

mod error;
mod nest;
mod parse;
mod toc;
mod write;

pub use crate::error::{Result, TocError};
pub use crate::nest::nest_items;
pub use crate::parse::parse_toc;
pub use crate::toc::{Item, Namespace};
pub use crate::write::{HEADER, write_toc};

use std::fs;
use std::path::Path;

/// Run the full parse → nest → write pipeline over document text.
pub fn restructure(content: &str) -> String {
    let mut namespaces = parse_toc(content);
    nest_items(&mut namespaces);
    write_toc(&namespaces)
}

/// Read the toc file at `path`, nest its entries and overwrite it in place.
///
/// The only explicit failure is a missing file; the transform itself never
/// errors on unexpected content.
pub fn process_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TocError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let output = restructure(&content);
    fs::write(path, output)?;
    Ok(())
}
