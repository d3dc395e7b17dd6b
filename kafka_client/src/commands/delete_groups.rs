mod handler;
mod request;
mod response;

pub use handler::delete_groups;
pub use request::DeleteGroupsCommand;
pub use response::GroupDeletion;
