#[derive(Debug)]
pub struct DescribeTopicsQueryResponse {
    pub topics: Vec<TopicDescription>,
}

#[derive(Debug)]
pub struct TopicDescription {
    pub topic_name: String,
    pub error: Option<String>,
    pub partitions: Vec<PartitionDescription>,
}

#[derive(Debug)]
pub struct PartitionDescription {
    pub partition_id: i32,
    pub leader: i32,
    pub replicas: Vec<i32>,
    pub isr: Vec<i32>,
}
