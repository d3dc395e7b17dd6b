#[derive(Debug)]
pub struct ListGroupsQueryResponse {
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug)]
pub struct GroupSummary {
    pub name: String,
    pub state: String,
    pub protocol_type: String,
}
