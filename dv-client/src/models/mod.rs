pub mod catalog;
pub mod connections;
pub mod policy;
pub mod privileges;
pub mod virtualization;

pub use catalog::{
    CatalogPublishResponse, DeletePrimaryCatalogParams, GetPrimaryCatalogParams,
    PostPrimaryCatalogParams, PostPrimaryCatalogResponse, PrimaryCatalogInfo, PublishAsset,
    PublishAssetsParams,
};
pub use connections::{
    AddDatasourceConnectionParams, ConnectionProperties, DatasourceConnection,
    DatasourceConnectionsList, DeleteDatasourceConnectionParams, ListDatasourceConnectionsParams,
    PostDatasourceConnection,
};
pub use policy::{CheckPolicyStatusV2Params, PolicyStatus, TurnOnPolicyV2Params};
pub use privileges::{
    DvaasRevokeRoleFromTableParams, GrantRolesToVirtualizedTableParams,
    GrantUserToVirtualTableParams, ListTablesForRoleParams, RevokeUserFromObjectParams,
    TableForRole, TablesForRoleResponse,
};
pub use virtualization::{
    ColumnDef, DeleteTableParams, DvaasVirtualizeTableParams, VirtualizeTableResponse,
};
