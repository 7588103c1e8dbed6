/// A single path in the export list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path exactly as authored (relative or absolute)
    pub path: String,

    /// Disabled entries are skipped entirely: no label, no read attempt
    pub enabled: bool,
}

impl ManifestEntry {
    /// Create an enabled entry
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            enabled: true,
        }
    }

    /// Create a disabled entry
    pub fn disabled(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            enabled: false,
        }
    }
}

/// Ordered list of files to export
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Create a new empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in file list. Edit this between runs.
    pub fn builtin() -> Self {
        Self::new()
            .with(ManifestEntry::disabled("tsconfig.json"))
            .with(ManifestEntry::disabled("src/utils/templates.ts"))
            .with(ManifestEntry::disabled("package.json"))
            .with(ManifestEntry::new("src/index.ts"))
            .with(ManifestEntry::new("src/types.ts"))
            .with(ManifestEntry::disabled("src/handlers/requestHandler.ts"))
            .with(ManifestEntry::new("src/handlers/webdavHandler.ts"))
            .with(ManifestEntry::new("src/utils/auth.ts"))
            .with(ManifestEntry::new("src/utils/cors.ts"))
            .with(ManifestEntry::new("src/utils/logger.ts"))
            .with(ManifestEntry::new("src/utils/webdavUtils.ts"))
    }

    /// Append an entry, builder style
    pub fn with(mut self, entry: ManifestEntry) -> Self {
        self.push(entry);
        self
    }

    /// Append an entry
    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    /// All entries, including disabled ones
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Paths of enabled entries, in authored order
    pub fn enabled_paths(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.path.as_str())
            .collect()
    }

    /// Number of enabled entries
    pub fn enabled_count(&self) -> usize {
        self.entries.iter().filter(|e| e.enabled).count()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Manifest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(ManifestEntry::new).collect(),
        }
    }
}
