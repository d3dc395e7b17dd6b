mod handler;
mod request;
mod response;

pub use handler::list_topics;
pub use request::ListTopicsQuery;
pub use response::{KafkaTopicMetadata, ListTopicsQueryResponse};
