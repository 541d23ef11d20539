//! Google Docs document converter implementation.

use crate::error::Result;
use crate::model::Document;
use crate::render::{extract_text, to_html, to_html_with_stats, to_json_with_options, JsonFormat};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ConvertOptions, ConvertResult, OutputFormat};

/// Google Docs converter.
///
/// Reads the JSON document returned by the Docs API (`documents.get`) and
/// converts it to HTML, plain text, or the JSON viewer payload.
#[derive(Debug, Clone, Default)]
pub struct GoogleDocConverter {
    _private: (),
}

impl GoogleDocConverter {
    /// Create a new Google Docs converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Convert a Docs API JSON file.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        log::debug!("Converting {}", path.display());
        let data = fs::read(path)?;
        self.convert_bytes(&data, options)
    }

    /// Convert Docs API JSON from bytes.
    pub fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let doc: Document = serde_json::from_slice(bytes)?;
        self.convert_document(&doc, options)
    }

    /// Convert an already parsed document.
    ///
    /// When `options.render.collect_stats` is set, statistics come from the
    /// HTML rendering pass whatever the output format.
    pub fn convert_document(
        &self,
        doc: &Document,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let format = options.output_format;
        let render = &options.render;

        if render.collect_stats {
            let rendered = to_html_with_stats(doc, render);
            let content = match format {
                OutputFormat::Html => rendered.content,
                OutputFormat::Text => extract_text(doc),
                OutputFormat::Json => to_json_with_options(doc, render, JsonFormat::Pretty)?,
            };
            return Ok(ConvertResult::new(content, doc, format).with_stats(rendered.stats));
        }

        let content = match format {
            OutputFormat::Html => to_html(doc, render),
            OutputFormat::Text => extract_text(doc),
            OutputFormat::Json => to_json_with_options(doc, render, JsonFormat::Pretty)?,
        };
        Ok(ConvertResult::new(content, doc, format))
    }

    /// Convert one file into every output format.
    ///
    /// The file is parsed once. Statistics, when requested, are attached to
    /// the HTML result only.
    pub fn convert_all_formats(
        &self,
        path: &Path,
        options: &ConvertOptions,
    ) -> Result<Vec<ConvertResult>> {
        log::debug!("Converting {} to all formats", path.display());
        let data = fs::read(path)?;
        let doc: Document = serde_json::from_slice(&data)?;

        OutputFormat::ALL
            .into_iter()
            .map(|format| {
                let mut options = options.clone().with_format(format);
                if format != OutputFormat::Html {
                    options.render.collect_stats = false;
                }
                self.convert_document(&doc, &options)
            })
            .collect()
    }

    /// Convert many files in parallel.
    ///
    /// Results are returned in the same order as `paths`; one failing file
    /// does not stop the others.
    pub fn convert_all(
        &self,
        paths: &[PathBuf],
        options: &ConvertOptions,
    ) -> Vec<(PathBuf, Result<ConvertResult>)> {
        paths
            .par_iter()
            .map(|path| {
                let result = self.convert(path, options);
                if let Err(ref e) = result {
                    log::warn!("Failed to convert {}: {}", path.display(), e);
                }
                (path.clone(), result)
            })
            .collect()
    }
}
