//! Sort specifications
//!
//! A `SortSpec` is the caller's loosely-typed description of one sort
//! entry. It only becomes directives after validation: a non-blank field, a
//! rank in 1..=9 and, when given, a direction of `ascend` or `descend`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::directive::{MAX_SORT_RANK, MIN_SORT_RANK};

/// Sort direction accepted by `-sortorder.<rank>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascend,
    Descend,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascend => "ascend",
            SortDirection::Descend => "descend",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ascend" => Ok(SortDirection::Ascend),
            "descend" => Ok(SortDirection::Descend),
            other => Err(format!(
                "sort direction must be 'ascend' or 'descend', got '{}'",
                other
            )),
        }
    }
}

/// One entry of a multi-field sort, as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Option<String>,
    pub rank: Option<i64>,
    pub direction: Option<String>,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, rank: i64) -> Self {
        Self {
            field: Some(field.into()),
            rank: Some(rank),
            direction: None,
        }
    }

    pub fn ascending(self) -> Self {
        self.with_direction(SortDirection::Ascend.as_str())
    }

    pub fn descending(self) -> Self {
        self.with_direction(SortDirection::Descend.as_str())
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Check the sort spec and return its typed form
    ///
    /// The error string explains the first rule this entry breaks.
    pub(crate) fn validate(&self) -> std::result::Result<ValidSort, String> {
        let field = match self.field.as_deref() {
            Some(field) if !field.trim().is_empty() => field.to_string(),
            _ => return Err("sort field is missing".to_string()),
        };

        let rank = match self.rank {
            Some(rank) => u8::try_from(rank)
                .ok()
                .filter(|r| (MIN_SORT_RANK..=MAX_SORT_RANK).contains(r))
                .ok_or_else(|| {
                    format!(
                        "sort rank must be between {} and {}, got {}",
                        MIN_SORT_RANK, MAX_SORT_RANK, rank
                    )
                })?,
            None => return Err("sort rank is missing".to_string()),
        };

        let direction = self
            .direction
            .as_deref()
            .map(SortDirection::from_str)
            .transpose()?;

        Ok(ValidSort {
            field,
            rank,
            direction,
        })
    }
}

/// A sort spec that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidSort {
    pub field: String,
    pub rank: u8,
    pub direction: Option<SortDirection>,
}
