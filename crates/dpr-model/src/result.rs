use serde::{Deserialize, Serialize};

/// Name and type metadata of one column in a fetched result's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub column_name: String,
    #[serde(default)]
    pub column_type: Option<String>,
}

impl SchemaColumn {
    pub fn new(name: &str) -> Self {
        Self {
            column_name: name.to_string(),
            column_type: None,
        }
    }
}

/// Ordered schema of one result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSchema {
    pub columns: Vec<SchemaColumn>,
}

impl ResultSchema {
    pub fn new(columns: Vec<SchemaColumn>) -> Self {
        Self { columns }
    }

    /// Build a schema from bare column names (tests and fixtures).
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            columns: names.into_iter().map(SchemaColumn::new).collect(),
        }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.column_name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Read-only metadata of one workunit result: its name, position in the
/// workunit, and schema. Row data is fetched separately by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultMeta {
    pub name: String,
    #[serde(default)]
    pub sequence: u32,
    #[serde(default)]
    pub schema: ResultSchema,
}
