//! JSON export of family layouts.
//!
//! The document has the shape consumed by the graph-rendering surface:
//!
//! ```json
//! {
//!   "nodes": [{ "id": "...", "x": 0.0, "y": 0.0, "generation": 0, "payload": { ... } }],
//!   "edges": [{ "id": "...", "source": "...", "target": "...", "relationshipType": "spouse",
//!               "style": { "strokeColor": "...", "strokeWidth": 3.0, "dashed": false },
//!               "anchor": "left-right", "routing": "straight" }]
//! }
//! ```

use std::io::Write;

use log::debug;

use super::{Error, Exporter};
use crate::layout::FamilyLayout;

/// Output formatting of the JSON document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// Single line without whitespace.
    Compact,
}

/// Writes layouts as JSON into any [`Write`] sink.
#[derive(Debug)]
pub struct JsonExporter<W: Write> {
    writer: W,
    format: JsonFormat,
}

impl<W: Write> JsonExporter<W> {
    /// Create an exporter writing pretty JSON to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            format: JsonFormat::default(),
        }
    }

    /// Set the output formatting.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Consume the exporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for JsonExporter<W> {
    fn export_layout(&mut self, layout: &FamilyLayout) -> Result<(), Error> {
        match self.format {
            JsonFormat::Pretty => serde_json::to_writer_pretty(&mut self.writer, layout),
            JsonFormat::Compact => serde_json::to_writer(&mut self.writer, layout),
        }
        .map_err(Error::Serialize)?;

        writeln!(self.writer)?;
        self.writer.flush()?;

        debug!(
            format:? = self.format,
            nodes_count = layout.nodes().len(),
            edges_count = layout.edges().len();
            "Layout exported as JSON"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layout_document() {
        let mut exporter = JsonExporter::new(Vec::new()).with_format(JsonFormat::Compact);
        exporter.export_layout(&FamilyLayout::default()).unwrap();

        let output = String::from_utf8(exporter.into_inner()).unwrap();
        assert_eq!(output, "{\"nodes\":[],\"edges\":[]}\n");
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let mut exporter = JsonExporter::new(Vec::new());
        exporter.export_layout(&FamilyLayout::default()).unwrap();

        let output = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(output.lines().count() > 1);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["nodes"].as_array().unwrap().is_empty());
    }
}
