#[derive(Debug)]
pub struct GetClusterMetadataQueryResponse {
    /// Broker that answered the metadata request. librdkafka does not
    /// expose the controller id.
    pub orig_broker_id: i32,
    pub orig_broker_name: String,
    pub brokers: Vec<BrokerMetadata>,
}

#[derive(Debug)]
pub struct BrokerMetadata {
    pub broker_id: i32,
    pub host: String,
    pub port: u16,
}
