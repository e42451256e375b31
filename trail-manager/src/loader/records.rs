//! Record parsing.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::{Landmark, LandmarkId, Trail};

use super::LoadError;

/// Read and parse a landmark file.
pub fn read_landmarks(path: impl AsRef<Path>) -> Result<Vec<Landmark>, LoadError> {
    let path = path.as_ref();
    let landmarks = parse_landmarks(&read(path)?)?;
    info!(path = %path.display(), count = landmarks.len(), "Loaded landmarks");
    Ok(landmarks)
}

/// Read and parse a trail file.
pub fn read_trails(path: impl AsRef<Path>) -> Result<Vec<Trail>, LoadError> {
    let path = path.as_ref();
    let trails = parse_trails(&read(path)?)?;
    info!(path = %path.display(), count = trails.len(), "Loaded trails");
    Ok(trails)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse landmark records. Requires `id` and `description` columns.
pub fn parse_landmarks(text: &str) -> Result<Vec<Landmark>, LoadError> {
    let table = Table::parse(text)?;
    let id_col = table.column("id")?;
    let description_col = table.column("description")?;

    table
        .rows()
        .map(|row| -> Result<Landmark, LoadError> {
            let row = row?;
            let id = row.id(id_col)?;
            Ok(Landmark::new(id, row.field(description_col)))
        })
        .collect()
}

/// Parse trail records. Requires `landmark_one`, `landmark_two` and
/// `length` columns.
pub fn parse_trails(text: &str) -> Result<Vec<Trail>, LoadError> {
    let table = Table::parse(text)?;
    let one_col = table.column("landmark_one")?;
    let two_col = table.column("landmark_two")?;
    let length_col = table.column("length")?;

    table
        .rows()
        .map(|row| -> Result<Trail, LoadError> {
            let row = row?;
            let one = row.id(one_col)?;
            let two = row.id(two_col)?;
            let raw = row.field(length_col);
            let length = parse_length(raw).ok_or_else(|| LoadError::InvalidLength {
                line: row.line,
                value: raw.to_string(),
            })?;
            Ok(Trail::new(one, two, length))
        })
        .collect()
}

/// Plain decimal feet: ASCII digits only, no sign.
fn parse_length(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// A header plus the remaining non-blank lines.
struct Table<'a> {
    header: Vec<String>,
    lines: Vec<(usize, &'a str)>,
}

impl<'a> Table<'a> {
    fn parse(text: &'a str) -> Result<Self, LoadError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(n, line)| (n + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(LoadError::MissingHeader)?;
        let header = header
            .split(',')
            .map(|name| name.trim().to_ascii_lowercase())
            .collect();

        Ok(Self {
            header,
            lines: lines.collect(),
        })
    }

    fn column(&self, name: &'static str) -> Result<usize, LoadError> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    }

    /// Split each line into exactly as many fields as the header has; the
    /// last field keeps any further commas.
    fn rows(&self) -> impl Iterator<Item = Result<Row<'a>, LoadError>> + '_ {
        let expected = self.header.len();
        self.lines.iter().map(move |&(line, text)| {
            let fields: Vec<&str> = text.splitn(expected, ',').map(str::trim).collect();
            if fields.len() != expected {
                return Err(LoadError::FieldCount {
                    line,
                    expected,
                    found: fields.len(),
                });
            }
            Ok(Row { line, fields })
        })
    }
}

struct Row<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    fn field(&self, col: usize) -> &'a str {
        self.fields[col]
    }

    fn id(&self, col: usize) -> Result<LandmarkId, LoadError> {
        LandmarkId::parse(self.field(col)).map_err(|source| LoadError::InvalidId {
            line: self.line,
            source,
        })
    }
}
