#[derive(Debug)]
pub struct DescribeGroupsQueryResponse {
    pub groups: Vec<GroupDescription>,
}

#[derive(Debug)]
pub struct GroupDescription {
    pub name: String,
    pub state: String,
    pub protocol_type: String,
    pub protocol: String,
    pub members: Vec<GroupMember>,
}

#[derive(Debug)]
pub struct GroupMember {
    pub member_id: String,
    pub client_id: String,
    pub client_host: String,
    pub metadata: Option<String>,
    pub assignment: Option<String>,
}
