//! One loaded file: its path, its text, and the array parsed from it.

use crate::core::literal::LiteralDialect;
use crate::core::parser;
use crate::encoders::errors::{CodecError, Result as CodecResult};
use crate::encoders::range::{self, encode_range};
use crate::encoders::value::XorKey;
use crate::rewriter::rewrite;
use crate::store::ArrayStore;
use log::{debug, info};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by file-backed session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("{path:?} is {size} bytes, over the {limit} byte limit")]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("session has no backing file")]
    NoBackingFile,
}

impl SessionError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        SessionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// What [`Session::save`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub backup_path: PathBuf,
    pub literals: usize,
}

/// Working state for one loaded file.
///
/// Loading another file means building another session; nothing here is
/// shared between files.
#[derive(Debug, Clone)]
pub struct Session {
    path: Option<PathBuf>,
    source: String,
    store: ArrayStore,
    dialect: LiteralDialect,
}

impl Session {
    /// Reads and parses `path`.
    ///
    /// `max_size` of 0 means no limit.
    pub fn open(path: impl AsRef<Path>, dialect: LiteralDialect, max_size: u64) -> Result<Self> {
        let path = path.as_ref();
        if max_size > 0 {
            let size = fs::metadata(path).map_err(|e| SessionError::io(path, e))?.len();
            if size > max_size {
                return Err(SessionError::InputTooLarge {
                    path: path.to_path_buf(),
                    size,
                    limit: max_size,
                });
            }
        }

        let source = fs::read_to_string(path).map_err(|e| SessionError::io(path, e))?;
        let mut session = Self::from_text(source, dialect)?;
        session.path = Some(path.to_path_buf());
        info!("Loaded {} literals from {}", session.store.len(), path.display());
        Ok(session)
    }

    /// Parses in-memory text with no backing file.
    pub fn from_text(source: impl Into<String>, dialect: LiteralDialect) -> CodecResult<Self> {
        let source = source.into();
        let tokens = parser::parse(&source, &dialect)?;
        Ok(Session {
            path: None,
            source,
            store: ArrayStore::new(tokens),
            dialect,
        })
    }

    /// Re-reads the backing file, discarding unsaved edits.
    pub fn reload(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(SessionError::NoBackingFile)?;
        let source = fs::read_to_string(&path).map_err(|e| SessionError::io(&path, e))?;
        let tokens = parser::parse(&source, &self.dialect)?;
        self.store.load(tokens);
        self.source = source;
        debug!("Reloaded {} literals from {}", self.store.len(), path.display());
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Text as last loaded or saved.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn store(&self) -> &ArrayStore {
        &self.store
    }

    pub fn dialect(&self) -> &LiteralDialect {
        &self.dialect
    }

    /// Decodes `[start, end)` with `key`.
    pub fn decode(&self, start: usize, end: usize, key: XorKey) -> CodecResult<String> {
        self.store.decode(start, end, key, &self.dialect)
    }

    /// Text a range holds right now, shown before it is overwritten.
    pub fn current_string(&self, start: usize, end: usize, key: XorKey) -> CodecResult<String> {
        self.decode(start, end, key)
    }

    /// Masks `text` with `key` and writes it over the array from `start`.
    ///
    /// Returns the number of tokens written, which is short of the text
    /// length when the edit runs off the end of the array.
    pub fn edit_range(&mut self, start: usize, text: &str, key: XorKey) -> CodecResult<usize> {
        if text.is_empty() {
            return Err(CodecError::EmptyEdit);
        }
        let tokens = encode_range(text, key, &self.dialect);
        let written = self.store.set_range(start, &tokens);
        debug!(
            "edit at {}: {} of {} tokens written",
            start,
            written,
            tokens.len()
        );
        Ok(written)
    }

    /// Hex preview of what [`Session::edit_range`] would write.
    pub fn preview(&self, text: &str, key: XorKey) -> String {
        range::preview(text, key, &self.dialect)
    }

    /// Rewrites the on-disk text with the current array.
    ///
    /// The file is re-read, the rewrite is validated, and then the backup
    /// (`<path><backup_suffix>`) is written and synced before the original
    /// is replaced. Nothing is written if validation fails.
    pub fn save(&mut self, backup_suffix: &str) -> Result<SaveReport> {
        let path = self.path.clone().ok_or(SessionError::NoBackingFile)?;
        let on_disk = fs::read_to_string(&path).map_err(|e| SessionError::io(&path, e))?;
        let result = rewrite(&on_disk, self.store.tokens(), &self.dialect)?;

        let backup_path = backup_path(&path, backup_suffix);
        write_synced(&backup_path, &result.backup_text)?;
        write_synced(&path, &result.new_text)?;
        info!(
            "Saved {} (backup at {})",
            path.display(),
            backup_path.display()
        );

        self.source = result.new_text;
        Ok(SaveReport {
            path,
            backup_path,
            literals: self.store.len(),
        })
    }

    /// Writes one raw token per line to `path`.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut content = self.store.to_lines().join("\n");
        content.push('\n');
        write_synced(path, &content)?;
        info!("Exported {} tokens to {}", self.store.len(), path.display());
        Ok(())
    }
}

/// `<path><suffix>`, e.g. `Foo.smali.backup`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn write_synced(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| SessionError::io(path, e))?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| SessionError::io(path, e))
}
