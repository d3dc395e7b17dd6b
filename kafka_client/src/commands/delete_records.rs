mod handler;
mod request;

pub use handler::delete_records;
pub use request::DeleteRecordsCommand;
