//! Output column naming for realised photometry.
//!
//! Every input filter column produces an observed magnitude column and an
//! observed error column. [`SuffixNaming`] derives both from the input name;
//! [`ExplicitNaming`] takes them from the caller.

use std::collections::HashMap;

/// Names of the two columns produced for one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputColumns {
    pub observed: String,
    pub error: String,
}

impl OutputColumns {
    pub fn new(observed: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            observed: observed.into(),
            error: error.into(),
        }
    }
}

/// Maps a filter column name to its output column names
pub trait OutputNaming {
    /// `None` if the filter is unknown to this naming scheme
    fn output_columns(&self, filter: &str) -> Option<OutputColumns>;
}

/// Suffix rewriting used by the mock pipelines:
///
/// - names containing `_evo` (evolution corrected): `_evo` -> `_obs` / `_obserr`
/// - names ending in `_mag`: `x_mag` -> `x_obs_mag` / `x_obserr_mag`
/// - anything else: `x` -> `x_obs` / `x_obserr`
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixNaming;

impl OutputNaming for SuffixNaming {
    fn output_columns(&self, filter: &str) -> Option<OutputColumns> {
        let columns = if filter.contains("_evo") {
            OutputColumns::new(
                filter.replace("_evo", "_obs"),
                filter.replace("_evo", "_obserr"),
            )
        } else if let Some(stem) = filter.strip_suffix("_mag") {
            OutputColumns::new(format!("{stem}_obs_mag"), format!("{stem}_obserr_mag"))
        } else {
            OutputColumns::new(format!("{filter}_obs"), format!("{filter}_obserr"))
        };
        Some(columns)
    }
}

/// Caller supplied output names per filter
#[derive(Debug, Clone, Default)]
pub struct ExplicitNaming {
    names: HashMap<String, OutputColumns>,
}

impl ExplicitNaming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output names of `filter`, replacing earlier ones
    pub fn insert(&mut self, filter: impl Into<String>, columns: OutputColumns) {
        self.names.insert(filter.into(), columns);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl OutputNaming for ExplicitNaming {
    fn output_columns(&self, filter: &str) -> Option<OutputColumns> {
        self.names.get(filter).cloned()
    }
}
