mod handler;
mod request;

pub use handler::read_messages;
pub use request::{ReadMessagesQuery, StartOffset};
