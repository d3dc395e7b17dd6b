mod handler;
mod request;

pub use handler::consume_group;
pub use request::ConsumeGroupQuery;
