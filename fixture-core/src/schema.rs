//! Schema chain generation.
//!
//! A schema chain is a series of DFDL schema files named `chain_NNN.dfdl.xsd`.
//! Every file except the last includes its successor through `xs:include`, and each
//! one declares a single string element `eNNN`. Processing the first file therefore
//! walks the whole chain.

use std::fs;
use std::path::Path;

use crate::config::{ChainSummary, DEFAULT_CHAIN_LENGTH, DEFAULT_INCLUDE_PREFIX};
use crate::error::{Error, Result};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const SCHEMA_OPEN: &str = "<xs:schema xmlns:xs=\"http://www.w3.org/2001/XMLSchema\" \
                           xmlns:dfdl=\"http://www.ogf.org/dfdl/dfdl-1.0/\">\n\n";

const FORMAT_ANNOTATION: &str = concat!(
    " <xs:annotation>\n",
    "    <xs:appinfo source=\"http://www.ogf.org/dfdl/dfdl-1.0/\">\n",
    "     <dfdl:format separator=\"\" initiator=\"\" terminator=\"\" leadingSkip=\"0\" ",
    "textTrimKind=\"none\" initiatedContent=\"no\"\n",
    "        ignoreCase=\"no\" representation=\"text\" textNumberRep=\"standard\" ",
    "lengthKind=\"delimited\" encoding=\"ASCII\"/>\n",
    "    </xs:appinfo>\n",
    " </xs:annotation>\n\n",
);

const SCHEMA_CLOSE: &str = "</xs:schema>\n";

/// Configuration builder for schema chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOptions {
    length: u32,
    include_prefix: String,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_CHAIN_LENGTH,
            include_prefix: DEFAULT_INCLUDE_PREFIX.to_string(),
        }
    }
}

impl ChainOptions {
    /// Sets the number of files in the chain.
    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Sets the path prefix written in front of every `schemaLocation`.
    #[must_use]
    pub fn with_include_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.include_prefix = prefix.into();
        self
    }

    /// Number of files in the chain.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Path prefix used in `schemaLocation`.
    pub fn include_prefix(&self) -> &str {
        &self.include_prefix
    }
}

/// File name of the schema at `index`, e.g. `chain_007.dfdl.xsd`.
pub fn chain_file_name(index: u32) -> String {
    format!("chain_{index:03}.dfdl.xsd")
}

/// Name of the element declared by the schema at `index`, e.g. `e007`.
pub fn element_name(index: u32) -> String {
    format!("e{index:03}")
}

/// Renders the schema document for `index` (1-based).
///
/// Documents before the last one include `index + 1`.
pub fn render_schema(index: u32, options: &ChainOptions) -> String {
    let mut buffer = String::with_capacity(1024);
    buffer.push_str(XML_DECLARATION);
    buffer.push_str(SCHEMA_OPEN);
    buffer.push_str(FORMAT_ANNOTATION);

    if index < options.length {
        buffer.push_str(&format!(
            " <xs:include schemaLocation=\"{}{}\"/>\n\n",
            options.include_prefix,
            chain_file_name(index + 1)
        ));
    }

    buffer.push_str(&format!(
        " <xs:element name=\"{}\" type=\"xs:string\" dfdl:lengthKind=\"delimited\"/>\n\n",
        element_name(index)
    ));
    buffer.push_str(SCHEMA_CLOSE);
    buffer
}

/// Writes the whole chain into `dir`, one file at a time in index order.
///
/// Existing files with the same names are overwritten. Each file is closed before the
/// next one is created.
///
/// # Errors
///
/// Returns [`Error::InvalidChainLength`] for an empty chain, or [`Error::WriteFile`]
/// for the first file that cannot be written. Files after a failure are not attempted.
pub fn write_chain(dir: &Path, options: &ChainOptions) -> Result<ChainSummary> {
    if options.length == 0 {
        return Err(Error::InvalidChainLength {
            length: options.length,
        });
    }

    let mut summary = ChainSummary::default();

    for index in 1..=options.length {
        let path = dir.join(chain_file_name(index));
        let contents = render_schema(index, options);

        fs::write(&path, &contents).map_err(|source| Error::WriteFile {
            path: path.clone(),
            source,
        })?;
        log::trace!("wrote {}", path.display());

        summary.bytes_written += contents.len() as u64;
        summary.files.push(path);
    }

    log::debug!(
        "schema chain of {} files written to {}",
        summary.len(),
        dir.display()
    );

    Ok(summary)
}
