use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// Lowercased extension including the leading dot, or empty when the file has none.
    Unsupported(String),
}

impl DocumentFormat {
    /// Classify a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> DocumentFormat {
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        match ext.as_str() {
            ".pdf" => DocumentFormat::Pdf,
            ".docx" => DocumentFormat::Docx,
            _ => DocumentFormat::Unsupported(ext),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::Docx => write!(f, "DOCX"),
            DocumentFormat::Unsupported(ext) => write!(f, "unsupported ({ext})"),
        }
    }
}

/// A file path paired with its inferred format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    format: DocumentFormat,
}

impl SourceDocument {
    pub fn classify(path: impl Into<PathBuf>) -> SourceDocument {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        SourceDocument { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> &DocumentFormat {
        &self.format
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFindings {
    pub name: Option<String>,
    pub organizations: Vec<String>,
}

/// All fields extracted from one resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organizations: Vec<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub work_experience: Vec<String>,
}

/// Outcome of parsing one file: either every field, or a single error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParsedRecord {
    Success(ResumeFields),
    Failure { error: String },
}

impl ParsedRecord {
    pub fn failure(message: impl Into<String>) -> ParsedRecord {
        ParsedRecord::Failure {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParsedRecord::Success(_))
    }

    pub fn fields(&self) -> Option<&ResumeFields> {
        match self {
            ParsedRecord::Success(fields) => Some(fields),
            ParsedRecord::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ParsedRecord::Success(_) => None,
            ParsedRecord::Failure { error } => Some(error),
        }
    }
}

/// Results of one batch, keyed by filename in directory listing order.
///
/// Serializes as a JSON object mapping each filename to its record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    entries: Vec<(String, Vec<ParsedRecord>)>,
    /// Filename to position in `entries`.
    index: HashMap<String, usize>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under `filename`, creating the entry if needed.
    pub fn push(&mut self, filename: impl Into<String>, record: ParsedRecord) {
        let filename = filename.into();
        match self.index.get(&filename) {
            Some(&pos) => self.entries[pos].1.push(record),
            None => {
                self.index.insert(filename.clone(), self.entries.len());
                self.entries.push((filename, vec![record]));
            }
        }
    }

    pub fn get(&self, filename: &str) -> Option<&[ParsedRecord]> {
        self.index
            .get(filename)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParsedRecord])> {
        self.entries
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.records().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.records().filter(|r| !r.is_success()).count()
    }

    fn records(&self) -> impl Iterator<Item = &ParsedRecord> {
        self.entries.iter().flat_map(|(_, records)| records.iter())
    }
}

impl Serialize for BatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, records) in &self.entries {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}
