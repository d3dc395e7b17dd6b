mod handler;
mod request;

pub use handler::produce_message;
pub use request::ProduceMessageCommand;
