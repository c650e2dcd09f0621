mod record;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use record::PointRecord;

use crate::color::Color;
use crate::error::{FacemeshError, PointError, Result, StoreError};
use crate::point::{PointCollection, DEFAULT_RADIUS};

/// Defaults applied to records that omit optional fields.
///
/// Points without a `color` become [`Color::WHITE`], the usual default
/// for dots in the animation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Radius for records without a `radius` field.
    pub radius: f64,
    /// Color for records without a `color` field.
    pub color: Color,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            color: Color::WHITE,
        }
    }
}

/// Saves and loads point collections as JSON arrays of point records.
///
/// ```text
/// [
///   { "pos": [x, y, z], "radius": r, "color": "#RRGGBB" },
///   ...
/// ]
/// ```
///
/// Saving always writes every field. Loading requires only `pos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointStore {
    options: LoadOptions,
}

impl PointStore {
    /// Creates a store with the default [`LoadOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that fills missing fields from `options`.
    ///
    /// # Errors
    ///
    /// Returns `PointError::NonPositiveRadius` if the default radius is not
    /// positive and finite.
    pub fn with_options(options: LoadOptions) -> Result<Self> {
        if !(options.radius > 0.0 && options.radius.is_finite()) {
            return Err(PointError::NonPositiveRadius(options.radius).into());
        }
        Ok(Self { options })
    }

    /// Returns the defaults used for missing fields.
    #[must_use]
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Writes `collection` to `destination`, replacing any existing file.
    ///
    /// The data is written to a sibling temporary file first and renamed
    /// into place, so a failed save leaves the previous content intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written, e.g. the
    /// parent directory is missing or not writable.
    pub fn save(&self, collection: &PointCollection, destination: impl AsRef<Path>) -> Result<()> {
        self.save_to(collection, destination.as_ref())
    }

    /// Reads the collection stored at `source`, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `source` does not exist,
    /// [`StoreError::Format`] if it is not a JSON array of valid point
    /// records, and [`StoreError::Io`] for other read failures.
    pub fn load(&self, source: impl AsRef<Path>) -> Result<PointCollection> {
        self.load_from(source.as_ref())
    }

    /// Encodes `collection` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Format`] if serialization fails.
    pub fn to_json_string(&self, collection: &PointCollection) -> Result<String> {
        let records: Vec<PointRecord> = collection.iter().map(PointRecord::from).collect();
        Ok(serde_json::to_string_pretty(&records).map_err(|e| format_error(None, &e))?)
    }

    /// Decodes a collection from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Format`] if `text` is not a JSON array of valid
    /// point records.
    pub fn from_json_str(&self, text: &str) -> Result<PointCollection> {
        self.decode(text.as_bytes(), None)
    }

    #[tracing::instrument(skip(self, collection), fields(points = collection.len()), err)]
    fn save_to(&self, collection: &PointCollection, path: &Path) -> Result<()> {
        let records: Vec<PointRecord> = collection.iter().map(PointRecord::from).collect();
        let mut bytes =
            serde_json::to_vec_pretty(&records).map_err(|e| format_error(Some(path), &e))?;
        bytes.push(b'\n');

        write_atomically(path, &bytes).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(bytes = bytes.len(), "saved point collection");
        Ok(())
    }

    #[tracing::instrument(skip(self), err)]
    fn load_from(&self, path: &Path) -> Result<PointCollection> {
        let bytes = read_bytes(path)?;
        let collection = self.decode(&bytes, Some(path))?;
        tracing::debug!(points = collection.len(), "loaded point collection");
        Ok(collection)
    }

    fn decode(&self, bytes: &[u8], path: Option<&Path>) -> Result<PointCollection> {
        let records: Vec<PointRecord> =
            serde_json::from_slice(bytes).map_err(|e| format_error(path, &e))?;

        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                record.into_point(&self.options).map_err(|e| {
                    FacemeshError::from(format_error(path, &format!("record {i}: {e}")))
                })
            })
            .collect()
    }
}

/// Reads a whole file, mapping a missing file to [`StoreError::NotFound`].
pub(crate) fn read_bytes(path: &Path) -> std::result::Result<Vec<u8>, StoreError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn format_error(path: Option<&Path>, message: &dyn std::fmt::Display) -> StoreError {
    StoreError::Format {
        path: path.map(Path::to_path_buf),
        message: message.to_string(),
    }
}

/// Writes `bytes` to a temporary sibling of `path`, syncs it, and renames it
/// over `path`. The temporary file is removed if any step fails.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(path)?;
    let result = File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_sibling(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name")
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
