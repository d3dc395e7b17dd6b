#[derive(Debug)]
pub struct ListTopicsQueryResponse {
    pub topics: Vec<KafkaTopicMetadata>,
}

#[derive(Debug)]
pub struct KafkaTopicMetadata {
    pub topic_name: String,
    pub partitions_count: usize,
}
