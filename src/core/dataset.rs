use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::core::feature::{FeatureColumn, FeatureDomain};
use crate::utils::file_parsing::split_csv_line;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has no data rows")]
    Empty,

    #[error("row {row} has {found} fields but the header has {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("column '{0}' not found in the header")]
    MissingColumn(String),

    #[error("column '{0}' has no usable values")]
    EmptyColumn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The historical customer table, reduced at load time to what prediction
/// needs: one typed domain per feature column plus the sorted class labels.
/// Read-only for the rest of the session.
#[derive(Debug)]
pub struct Dataset {
    features: Vec<FeatureColumn>,
    class_labels: Vec<String>,
    n_rows: usize,
}

impl Dataset {
    /// Load a CSV file with a header row. `target` is the class-label column
    /// and `id` the per-record identifier; neither becomes a feature.
    pub fn from_path<P: AsRef<Path>>(path: P, target: &str, id: &str) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(file, target, id)
    }

    pub fn from_reader<R: Read>(reader: R, target: &str, id: &str) -> Result<Self, DatasetError> {
        let mut lines = BufReader::new(reader).lines();

        let header = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break split_csv_line(&line);
                    }
                }
                None => return Err(DatasetError::Empty),
            }
        };
        let expected = header.len();

        let mut columns: Vec<Vec<String>> = vec![Vec::new(); expected];
        let mut n_rows = 0usize;
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_line(&line);
            if fields.len() != expected {
                return Err(DatasetError::RaggedRow {
                    row: n_rows + 1,
                    found: fields.len(),
                    expected,
                });
            }
            for (column, field) in columns.iter_mut().zip(fields) {
                column.push(field);
            }
            n_rows += 1;
        }
        if n_rows == 0 {
            return Err(DatasetError::Empty);
        }

        let target_idx = column_index(&header, target)?;
        let id_idx = column_index(&header, id)?;

        let mut class_labels = columns[target_idx].clone();
        class_labels.sort();
        class_labels.dedup();

        let mut features = Vec::new();
        for (idx, name) in header.iter().enumerate() {
            if idx == target_idx || idx == id_idx {
                continue;
            }
            let domain = FeatureDomain::infer(&columns[idx])
                .ok_or_else(|| DatasetError::EmptyColumn(name.clone()))?;
            features.push(FeatureColumn {
                name: name.clone(),
                domain,
            });
        }

        Ok(Self {
            features,
            class_labels,
            n_rows,
        })
    }

    /// Feature columns in CSV header order, target and identifier excluded.
    pub fn features(&self) -> &[FeatureColumn] {
        &self.features
    }

    /// Sorted distinct values of the target column.
    pub fn class_labels(&self) -> &[String] {
        &self.class_labels
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|c| c.name.as_str())
    }
}

fn column_index(header: &[String], name: &str) -> Result<usize, DatasetError> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
}
