mod handler;
mod request;
mod response;

pub use handler::describe_log_dirs;
pub use request::DescribeLogDirsQuery;
pub use response::{BrokerLogDirs, DescribeLogDirsQueryResponse};
