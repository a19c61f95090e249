use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// A single cell of an input table.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Value {
    /// Missing or empty cell.
    #[default]
    Null,
    Text(String),
    Duration(Duration),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(duration) => Some(*duration),
            _ => None,
        }
    }

    /// Name of the kind of value, used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "string",
            Value::Duration(_) => "duration",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Text(text) => write!(f, "{text:?}"),
            Value::Duration(duration) => write!(f, "{duration:?}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Duration> for Value {
    fn from(duration: Duration) -> Self {
        Value::Duration(duration)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One row of a table, keyed by column name.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Row {
    values: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Row {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: impl Into<Value>) {
        self.values.insert(column.to_string(), value.into());
    }

    /// Get a cell. A column the row does not have reads as `Value::Null`.
    pub fn get(&self, column: &str) -> &Value {
        const NULL: &Value = &Value::Null;
        self.values.get(column).unwrap_or(NULL)
    }
}

/// An in-memory table: ordered column names and ordered rows.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Table {
        Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a two column `driver,time` table from raw string pairs.
    pub fn from_raw_laps<'a, I>(laps: I) -> Table
    where
        I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
    {
        let mut table = Table::new(&["driver", "time"]);
        for (driver, time) in laps {
            table.push(Row::new().with("driver", driver).with("time", time));
        }
        table
    }
}
