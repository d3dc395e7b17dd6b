mod handler;
mod request;

pub use handler::create_topic;
pub use request::CreateTopicCommand;
