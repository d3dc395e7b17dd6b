mod partitioner;
mod producer_wrapper;

pub use partitioner::Partitioner;
pub use producer_wrapper::ProducerWrapper;
