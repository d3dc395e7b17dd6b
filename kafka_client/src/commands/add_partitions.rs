mod handler;
mod request;

pub use handler::add_partitions;
pub use request::AddPartitionsCommand;
