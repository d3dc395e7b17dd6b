mod handler;
mod request;
mod response;

pub use handler::get_cluster_metadata;
pub use request::GetClusterMetadataQuery;
pub use response::{BrokerMetadata, GetClusterMetadataQueryResponse};
