mod handler;
mod request;

pub use handler::delete_topic;
pub use request::DeleteTopicCommand;
