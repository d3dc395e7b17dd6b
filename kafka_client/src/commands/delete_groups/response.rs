/// Per-group deletion outcome, the protocol reports these individually.
#[derive(Debug)]
pub struct GroupDeletion {
    pub group: String,
    pub error: Option<String>,
}
