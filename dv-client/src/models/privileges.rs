use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct GrantUserToVirtualTableParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_schema: Option<String>,
    /// `PUBLIC` grants access to all users; any other value names a single
    /// Data Virtualization user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authid: Option<String>,
    #[serde(skip_serializing)]
    pub headers: Option<HashMap<String, String>>,
}

impl GrantUserToVirtualTableParams {
    pub fn new(
        table_name: impl Into<String>,
        table_schema: impl Into<String>,
        authid: impl Into<String>,
    ) -> Self {
        Self {
            table_name: Some(table_name.into()),
            table_schema: Some(table_schema.into()),
            authid: Some(authid.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevokeUserFromObjectParams {
    /// `PUBLIC` revokes the privilege from all Data Virtualization users.
    pub authid: Option<String>,
    pub table_name: Option<String>,
    pub table_schema: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl RevokeUserFromObjectParams {
    pub fn new(
        authid: impl Into<String>,
        table_name: impl Into<String>,
        table_schema: impl Into<String>,
    ) -> Self {
        Self {
            authid: Some(authid.into()),
            table_name: Some(table_name.into()),
            table_schema: Some(table_schema.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GrantRolesToVirtualizedTableParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing)]
    pub headers: Option<HashMap<String, String>>,
}

impl GrantRolesToVirtualizedTableParams {
    pub fn new(table_name: impl Into<String>, table_schema: impl Into<String>) -> Self {
        Self {
            table_name: Some(table_name.into()),
            table_schema: Some(table_schema.into()),
            ..Default::default()
        }
    }

    pub fn with_role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DvaasRevokeRoleFromTableParams {
    /// One of `DV_ADMIN`, `DV_ENGINEER`, `DV_STEWARD`, or `DV_WORKER`.
    pub role_name: Option<String>,
    pub table_name: Option<String>,
    pub table_schema: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl DvaasRevokeRoleFromTableParams {
    pub fn new(
        role_name: impl Into<String>,
        table_name: impl Into<String>,
        table_schema: impl Into<String>,
    ) -> Self {
        Self {
            role_name: Some(role_name.into()),
            table_name: Some(table_name.into()),
            table_schema: Some(table_schema.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListTablesForRoleParams {
    /// One of `MANAGER`, `STEWARD`, `ENGINEER`, or `USER`.
    pub rolename: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl ListTablesForRoleParams {
    pub fn new(rolename: impl Into<String>) -> Self {
        Self {
            rolename: Some(rolename.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesForRoleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<TableForRole>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableForRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_schema: Option<String>,
}

impl Display for TableForRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}",
            self.table_schema.as_deref().unwrap_or("?"),
            self.table_name.as_deref().unwrap_or("?"),
        )
    }
}
