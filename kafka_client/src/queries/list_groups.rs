mod handler;
mod request;
mod response;

pub use handler::list_groups;
pub use request::ListGroupsQuery;
pub use response::{GroupSummary, ListGroupsQueryResponse};
