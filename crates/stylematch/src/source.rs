use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

/// Location of a CSV table. Every read opens the table afresh, so callers
/// always see the data as it is at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    File(PathBuf),
    Inline { name: String, contents: String },
}

impl TableSource {
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self::File(path.into())
    }

    pub fn inline(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::Inline {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Human readable name used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TableSource::File(path) => path.display().to_string(),
            TableSource::Inline { name, .. } => name.clone(),
        }
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, DataUnavailable> {
        match self {
            TableSource::File(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(BufReader::new(file))),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    Err(DataUnavailable::Missing {
                        source_name: self.describe(),
                    })
                }
                Err(source) => Err(DataUnavailable::Io {
                    source_name: self.describe(),
                    source,
                }),
            },
            TableSource::Inline { contents, .. } => Ok(Box::new(contents.as_bytes())),
        }
    }

    /// Reads the whole table: normalized header names plus every data row.
    ///
    /// Rows shorter than the header read their missing cells as empty
    /// strings; rows wider than the header make the table unusable.
    pub(crate) fn read_table(&self) -> Result<RawTable, DataUnavailable> {
        let source_name = self.describe();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(self.open()?);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| DataUnavailable::Csv {
                source_name: source_name.clone(),
                source,
            })?
            .iter()
            .map(normalize_header)
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| DataUnavailable::Csv {
                source_name: source_name.clone(),
                source,
            })?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();

            if record.len() > width {
                return Err(DataUnavailable::MalformedRow {
                    source_name,
                    line,
                    detail: format!(
                        "expected at most {width} fields, found {}",
                        record.len()
                    ),
                });
            }

            rows.push(RawRow {
                line,
                fields: record.iter().map(str::to_string).collect(),
            });
        }

        Ok(RawTable {
            source_name,
            headers,
            rows,
        })
    }
}

fn normalize_header(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

/// Source-level failure: the table cannot be used for this call at all.
#[derive(Debug, thiserror::Error)]
pub enum DataUnavailable {
    #[error("{source_name} not found")]
    Missing { source_name: String },
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid CSV data in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },
    #[error("{source_name} is missing required column(s): {}", .missing.join(", "))]
    MissingColumns {
        source_name: String,
        missing: Vec<String>,
    },
    #[error("{source_name} line {line} is malformed: {detail}")]
    MalformedRow {
        source_name: String,
        line: u64,
        detail: String,
    },
}

#[derive(Debug)]
pub(crate) struct RawTable {
    pub(crate) source_name: String,
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<RawRow>,
}

impl RawTable {
    /// First column carrying `name` after header normalization.
    pub(crate) fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Resolves every required column or reports all of the missing ones.
    pub(crate) fn require<const N: usize>(
        &self,
        names: &[&str; N],
    ) -> Result<[usize; N], DataUnavailable> {
        let mut found = [0usize; N];
        let mut missing = Vec::new();

        for (slot, name) in found.iter_mut().zip(names.iter()) {
            match self.column(name) {
                Some(index) => *slot = index,
                None => missing.push((*name).to_string()),
            }
        }

        if missing.is_empty() {
            Ok(found)
        } else {
            Err(DataUnavailable::MissingColumns {
                source_name: self.source_name.clone(),
                missing,
            })
        }
    }
}

#[derive(Debug)]
pub(crate) struct RawRow {
    pub(crate) line: u64,
    pub(crate) fields: Vec<String>,
}

impl RawRow {
    pub(crate) fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}
