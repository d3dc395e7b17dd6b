#[derive(Debug)]
pub struct ListGroupOffsetsQueryResponse {
    pub group: String,
    pub offsets: Vec<CommittedOffset>,
}

#[derive(Debug)]
pub struct CommittedOffset {
    pub topic: String,
    pub partition: i32,
    /// None when the group has no committed offset for the partition.
    pub offset: Option<i64>,
}
