use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct DvaasVirtualizeTableParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_table_def: Option<Vec<ColumnDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_table_def: Option<Vec<ColumnDef>>,
    /// Column-inclusion expression, passed through to the service verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_included_columns: Option<String>,
    /// Replace columns in an existing virtualized table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    #[serde(skip_serializing)]
    pub headers: Option<HashMap<String, String>>,
}

impl DvaasVirtualizeTableParams {
    pub fn new(
        source_name: impl Into<String>,
        source_table_def: Vec<ColumnDef>,
        sources: Vec<String>,
        virtual_name: impl Into<String>,
        virtual_schema: impl Into<String>,
        virtual_table_def: Vec<ColumnDef>,
    ) -> Self {
        Self {
            source_name: Some(source_name.into()),
            source_table_def: Some(source_table_def),
            sources: Some(sources),
            virtual_name: Some(virtual_name.into()),
            virtual_schema: Some(virtual_schema.into()),
            virtual_table_def: Some(virtual_table_def),
            ..Default::default()
        }
    }

    pub fn with_is_included_columns(mut self, columns: impl Into<String>) -> Self {
        self.is_included_columns = Some(columns.into());
        self
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub column_name: String,
    pub column_type: String,
}

impl ColumnDef {
    pub fn new(column_name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            column_type: column_type.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteTableParams {
    pub virtual_schema: Option<String>,
    pub virtual_name: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl DeleteTableParams {
    pub fn new(virtual_schema: impl Into<String>, virtual_name: impl Into<String>) -> Self {
        Self {
            virtual_schema: Some(virtual_schema.into()),
            virtual_name: Some(virtual_name.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualizeTableResponse {
    pub table_name: String,
    pub schema_name: String,
}
