use std::fmt;

/// A name+id pair subject to sorting. Carries data only; the algorithm and
/// comparison key are call-time parameters of [`crate::sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub id: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Record {
            name: name.into(),
            id,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, ID: {}", self.name, self.id)
    }
}

/// True iff `a.name` precedes `b.name` in lexicographic byte order.
pub fn less_by_name(a: &Record, b: &Record) -> bool {
    a.name < b.name
}

/// True iff `a.id < b.id`.
pub fn less_by_id(a: &Record, b: &Record) -> bool {
    a.id < b.id
}
