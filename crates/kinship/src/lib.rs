//! Kinship - generation-layered layout for family trees.
//!
//! Takes the people and typed relationships of one family, assigns every
//! person a generation, places generations on horizontal rows and styles one
//! edge per relationship, ready for a graph-rendering surface.

pub mod config;
pub mod dataset;
pub mod export;
pub mod layout;

mod error;
mod structure;

pub use kinship_core::{color, family, geometry, identifier, stroke};

pub use dataset::FamilyDataset;
pub use error::KinshipError;
pub use layout::{FamilyLayout, LayoutEngine};

use log::{debug, info, trace};

use config::AppConfig;
use export::{
    Exporter,
    json::{JsonExporter, JsonFormat},
};
use family::{Person, Relationship};

/// Lay out `people` and `relationships` with the default configuration.
///
/// Shorthand for `LayoutEngine::new().layout(people, relationships)`.
pub fn layout(people: &[Person], relationships: &[Relationship]) -> FamilyLayout {
    LayoutEngine::new().layout(people, relationships)
}

/// Builder for loading, laying out and exporting family trees.
///
/// # Examples
///
/// ```rust
/// use kinship::{TreeBuilder, config::AppConfig};
///
/// let source = r#"{
///     "people": [
///         { "id": "alice", "birthday": "1950-02-14", "is_living": false },
///         { "id": "carol", "birthday": "1952-07-01", "is_living": true }
///     ],
///     "relationships": [
///         { "id": "r1", "person1_id": "alice", "person2_id": "carol", "relationship_type": "spouse" }
///     ]
/// }"#;
///
/// let builder = TreeBuilder::new(AppConfig::default());
/// let dataset = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(&dataset).expect("Failed to lay out");
/// let json = builder.render_json(&layout).expect("Failed to render");
///
/// assert_eq!(layout.nodes().len(), 2);
/// assert!(json.contains("left-right"));
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    config: AppConfig,
    format: JsonFormat,
}

impl TreeBuilder {
    /// Create a new tree builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            format: JsonFormat::default(),
        }
    }

    /// Set the JSON formatting used by [`TreeBuilder::render_json`].
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Parse a dataset JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::Dataset`] if the document is not valid JSON or
    /// does not match the dataset shape.
    pub fn parse(&self, source: &str) -> Result<FamilyDataset, KinshipError> {
        info!("Parsing family dataset");

        let dataset: FamilyDataset = serde_json::from_str(source)
            .map_err(|err| KinshipError::new_dataset_error(err, source))?;

        debug!(
            people_count = dataset.people().len(),
            relationships_count = dataset.relationships().len();
            "Dataset parsed successfully"
        );
        trace!(dataset:?; "Parsed dataset");

        Ok(dataset)
    }

    /// Lay out a dataset with the configured spacing and palette.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::Config`] if the style configuration is invalid.
    /// The layout computation itself cannot fail.
    pub fn layout(&self, dataset: &FamilyDataset) -> Result<FamilyLayout, KinshipError> {
        let engine = LayoutEngine::from_config(&self.config)?;

        info!(people_count = dataset.people().len(); "Calculating family layout");
        let layout = engine.layout(dataset.people(), dataset.relationships());
        info!(
            nodes_count = layout.nodes().len(),
            edges_count = layout.edges().len();
            "Layout calculated"
        );

        Ok(layout)
    }

    /// Render a layout to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::Export`] if serialization fails.
    pub fn render_json(&self, layout: &FamilyLayout) -> Result<String, KinshipError> {
        let mut exporter = JsonExporter::new(Vec::new()).with_format(self.format);
        exporter.export_layout(layout)?;

        String::from_utf8(exporter.into_inner()).map_err(|err| {
            KinshipError::Export(export::Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                err,
            )))
        })
    }
}
