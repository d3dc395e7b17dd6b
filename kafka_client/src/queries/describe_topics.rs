mod handler;
mod request;
mod response;

pub use handler::describe_topics;
pub use request::DescribeTopicsQuery;
pub use response::{DescribeTopicsQueryResponse, PartitionDescription, TopicDescription};
