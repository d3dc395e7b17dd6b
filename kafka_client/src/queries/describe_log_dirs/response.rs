#[derive(Debug)]
pub struct DescribeLogDirsQueryResponse {
    pub brokers: Vec<BrokerLogDirs>,
}

/// Log directories a broker is configured with, read from its `log.dirs`
/// config entry.
#[derive(Debug)]
pub struct BrokerLogDirs {
    pub broker_id: i32,
    pub log_dirs: Vec<String>,
}
