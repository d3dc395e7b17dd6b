mod handler;
mod request;
mod response;

pub use handler::describe_groups;
pub use request::DescribeGroupsQuery;
pub use response::{DescribeGroupsQueryResponse, GroupDescription, GroupMember};
