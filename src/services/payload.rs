//! Load payload assembly
//!
//! Builds the multipart field list uploaded by `conduct load`. Protocol v1
//! extracts individual settings locally, resolving them through the
//! configuration overlay. Protocol v2 ships both `bundle.conf` documents
//! as-is and leaves the merge to the server.

use crate::archive::ArchiveReader;
use crate::domain::{ApiVersion, BundleFile, ConfigTree, BUNDLE_CONF};
use crate::error::{BundleError, ConfigError};
use crate::services::OverlayResolver;

/// Value of a single multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text field
    Text(String),
    /// In-memory file part
    Blob { file_name: String, bytes: Vec<u8> },
    /// File streamed from disk at upload time
    File(BundleFile),
}

/// A named multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadField {
    pub name: &'static str,
    pub value: FieldValue,
}

/// Ordered multipart fields for a bundle upload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadPayload {
    fields: Vec<PayloadField>,
}

impl LoadPayload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field
    pub fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.push(name, FieldValue::Text(value.into()));
    }

    /// Append an in-memory file part
    pub fn push_blob(&mut self, name: &'static str, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.push(
            name,
            FieldValue::Blob {
                file_name: file_name.into(),
                bytes,
            },
        );
    }

    /// Append a file streamed from disk
    pub fn push_file(&mut self, name: &'static str, file: &BundleFile) {
        self.push(name, FieldValue::File(file.clone()));
    }

    fn push(&mut self, name: &'static str, value: FieldValue) {
        self.fields.push(PayloadField { name, value });
    }

    /// Field names in upload order
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// First field with the given name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

impl IntoIterator for LoadPayload {
    type Item = PayloadField;
    type IntoIter = std::vec::IntoIter<PayloadField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Strategy for turning resolved archives into an upload payload
pub trait PayloadStrategy {
    /// Build the payload for `bundle`, with an optional configuration archive
    fn assemble(
        &self,
        bundle: &BundleFile,
        configuration: Option<&BundleFile>,
    ) -> Result<LoadPayload, BundleError>;
}

/// Select the payload strategy spoken by the given protocol version
pub fn strategy_for<'a, R: ArchiveReader + 'a>(
    version: ApiVersion,
    reader: R,
) -> Box<dyn PayloadStrategy + 'a> {
    match version {
        ApiVersion::V1 => Box::new(TypedFieldPayload::new(reader)),
        ApiVersion::V2 => Box::new(RawConfigPayload::new(reader)),
    }
}

/// Protocol v1: settings extracted locally, overlay resolved per key
pub struct TypedFieldPayload<R> {
    reader: R,
}

impl<R: ArchiveReader> TypedFieldPayload<R> {
    /// Create a strategy reading archives through `reader`
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: ArchiveReader> PayloadStrategy for TypedFieldPayload<R> {
    fn assemble(
        &self,
        bundle: &BundleFile,
        configuration: Option<&BundleFile>,
    ) -> Result<LoadPayload, BundleError> {
        let base = ConfigTree::from_bytes(&required_bundle_conf(&self.reader, bundle)?)?;

        let overlay = match configuration {
            Some(config_file) => match self.reader.read_entry(config_file, BUNDLE_CONF)? {
                Some(bytes) => Some(ConfigTree::from_bytes(&bytes)?),
                None => {
                    log::warn!(
                        "No {} found in {}, using the bundle's own configuration",
                        BUNDLE_CONF,
                        config_file
                    );
                    None
                }
            },
            None => None,
        };

        typed_fields(
            &OverlayResolver::new(&base, overlay.as_ref()),
            bundle,
            configuration,
        )
    }
}

/// Build the v1 field list from already parsed configuration
pub fn typed_fields(
    resolver: &OverlayResolver<'_>,
    bundle: &BundleFile,
    configuration: Option<&BundleFile>,
) -> Result<LoadPayload, BundleError> {
    let string = |key: &str| resolver.resolve(ConfigTree::get_string, key).map_err(malformed);

    let mut payload = LoadPayload::new();
    payload.push_text("nrOfCpus", string("nrOfCpus")?);
    payload.push_text("memory", string("memory")?);
    payload.push_text("diskSpace", string("diskSpace")?);
    payload.push_text(
        "roles",
        resolver
            .resolve(ConfigTree::get_list, "roles")
            .map_err(malformed)?
            .join(" "),
    );
    payload.push_text("bundleName", string("name")?);
    payload.push_text("system", string("system")?);
    payload.push_file("bundle", bundle);
    if let Some(config_file) = configuration {
        payload.push_file("configuration", config_file);
    }

    Ok(payload)
}

/// Protocol v2: raw `bundle.conf` documents merged server side
pub struct RawConfigPayload<R> {
    reader: R,
}

impl<R: ArchiveReader> RawConfigPayload<R> {
    /// Create a strategy reading archives through `reader`
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: ArchiveReader> PayloadStrategy for RawConfigPayload<R> {
    fn assemble(
        &self,
        bundle: &BundleFile,
        configuration: Option<&BundleFile>,
    ) -> Result<LoadPayload, BundleError> {
        let bundle_conf = required_bundle_conf(&self.reader, bundle)?;

        let overlay_conf = match configuration {
            Some(config_file) => self.reader.read_entry(config_file, BUNDLE_CONF)?,
            None => None,
        };

        let mut payload = LoadPayload::new();
        payload.push_blob("bundleConf", BUNDLE_CONF, bundle_conf);
        if let Some(bytes) = overlay_conf {
            payload.push_blob("bundleConfOverlay", BUNDLE_CONF, bytes);
        }
        payload.push_file("bundle", bundle);
        if let Some(config_file) = configuration {
            payload.push_file("configuration", config_file);
        }

        Ok(payload)
    }
}

fn required_bundle_conf<R: ArchiveReader>(
    reader: &R,
    bundle: &BundleFile,
) -> Result<Vec<u8>, BundleError> {
    reader.read_entry(bundle, BUNDLE_CONF)?.ok_or_else(|| {
        BundleError::Malformed(format!(
            "Unable to find {} within the bundle file",
            BUNDLE_CONF
        ))
    })
}

fn malformed(err: ConfigError) -> BundleError {
    match err {
        ConfigError::KeyNotFound(_) => BundleError::Malformed(err.to_string()),
        other => BundleError::InvalidConfig(other),
    }
}
