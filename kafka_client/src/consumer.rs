mod consumer_wrapper;
mod message;
mod partition_offset;
mod settings;

pub use consumer_wrapper::ConsumerWrapper;
pub use message::KafkaMessage;
pub use partition_offset::PartitionOffset;
pub use settings::{AutoOffsetReset, SecurityProtocol};
