//! Data Virtualization client for Rust
//!
//! This crate provides a typed client for the Data Virtualization service
//! REST API: managing data source connections, virtualizing tables,
//! controlling table privileges, toggling policy enforcement, and publishing
//! virtualized assets to a catalog.
//!
//! Operations validate their required parameters locally and reject before
//! anything is sent; transmission, credentials, and URL resolution live
//! behind the [`Transport`] trait so tests can observe requests without a
//! network.
//!
//! # Example
//!
//! ```no_run
//! use dv_client::models::ListTablesForRoleParams;
//! use dv_client::{Authenticator, DVClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DVClient::builder(
//!         "data-virtualization.example.com",
//!         Authenticator::bearer("your-token"),
//!     )
//!     .build()?;
//!
//!     let tables = client
//!         .list_tables_for_role(ListTablesForRoleParams::new("USER"))
//!         .await?;
//!     for table in tables.result.objects.unwrap_or_default() {
//!         println!("{table}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;


pub use auth::Authenticator;
pub use client::{DVClient, DVClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
pub use error::{Error, Result};
pub use http::{Empty, HttpTransport, RawResponse, ServiceRequest, ServiceResponse, Transport};

#[doc(hidden)]
pub mod prelude {
    pub use crate::auth::Authenticator;
    pub use crate::client::DVClient;
    pub use crate::error::Result;
    pub use crate::http::{Empty, ServiceResponse};
    pub use crate::models::{
        catalog::{PrimaryCatalogInfo, PublishAsset, PublishAssetsParams},
        connections::{
            AddDatasourceConnectionParams, ConnectionProperties, DatasourceConnectionsList,
        },
        policy::PolicyStatus,
        privileges::ListTablesForRoleParams,
        virtualization::{ColumnDef, DvaasVirtualizeTableParams},
    };
}
