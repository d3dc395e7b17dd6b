mod admin_wrapper;

pub use admin_wrapper::AdminWrapper;
