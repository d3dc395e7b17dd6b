mod handler;
mod request;
mod response;

pub use handler::list_group_offsets;
pub use request::ListGroupOffsetsQuery;
pub use response::{CommittedOffset, ListGroupOffsetsQueryResponse};
