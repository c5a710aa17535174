use thiserror::Error;

use crate::record::{less_by_id, less_by_name, Record};

/// A menu choice outside the enumerated sets. Selection is parsed before any
/// record is touched, so a rejected choice leaves the sequence unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("invalid algorithm choice {0}, expected 1 (insertion sort) or 2 (selection sort)")]
    Algorithm(u32),

    #[error("invalid sorting criteria choice {0}, expected 1 (name) or 2 (id)")]
    SortKey(u32),
}

/// The closed set of sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Insertion,
    Selection,
}

impl TryFrom<u32> for Algorithm {
    type Error = SelectionError;

    /// Menu encoding: 1 is insertion sort, 2 is selection sort.
    fn try_from(choice: u32) -> Result<Self, SelectionError> {
        match choice {
            1 => Ok(Algorithm::Insertion),
            2 => Ok(Algorithm::Selection),
            _ => Err(SelectionError::Algorithm(choice)),
        }
    }
}

/// The closed set of comparison keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Id,
}

impl SortKey {
    /// The comparator this key selects, as a plain function value.
    pub fn is_less(self) -> fn(&Record, &Record) -> bool {
        match self {
            SortKey::Name => less_by_name,
            SortKey::Id => less_by_id,
        }
    }
}

impl TryFrom<u32> for SortKey {
    type Error = SelectionError;

    /// Menu encoding: 1 sorts by name, 2 sorts by id.
    fn try_from(choice: u32) -> Result<Self, SelectionError> {
        match choice {
            1 => Ok(SortKey::Name),
            2 => Ok(SortKey::Id),
            _ => Err(SelectionError::SortKey(choice)),
        }
    }
}

/// One algorithm bound to one comparison key for a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub algorithm: Algorithm,
    pub key: SortKey,
}

impl Strategy {
    pub fn new(algorithm: Algorithm, key: SortKey) -> Self {
        Strategy { algorithm, key }
    }

    /// Builds a strategy from the numeric menu encoding. The algorithm choice
    /// is validated first, matching the order the menu asks in.
    pub fn from_choices(algorithm: u32, key: u32) -> Result<Self, SelectionError> {
        Ok(Strategy {
            algorithm: Algorithm::try_from(algorithm)?,
            key: SortKey::try_from(key)?,
        })
    }

    /// Executes the bound pairing exactly once over `records`.
    pub fn sort(self, records: &mut [Record]) {
        crate::sort(records, self.algorithm, self.key);
    }
}
