use crate::consumer::ConsumerWrapper;
use crate::queries::describe_groups::request::DescribeGroupsQuery;
use crate::queries::describe_groups::response::{
    DescribeGroupsQueryResponse, GroupDescription, GroupMember,
};
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use std::time::Duration;

pub async fn describe_groups(
    query: DescribeGroupsQuery,
) -> Result<DescribeGroupsQueryResponse, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let client = ConsumerWrapper::create_for_metadata(&query.connection_settings, None)
            .context("While creating metadata client")?;

        let mut groups = Vec::with_capacity(query.groups.len());
        for group_name in &query.groups {
            let group_list = client
                .fetch_group_list(Some(group_name), Timeout::After(Duration::from_secs(5)))
                .with_context(|| format!("While describing consumer group {group_name}"))?;

            for group in group_list.groups() {
                let members = group
                    .members()
                    .iter()
                    .map(|member| GroupMember {
                        member_id: member.id().to_owned(),
                        client_id: member.client_id().to_owned(),
                        client_host: member.client_host().to_owned(),
                        metadata: member
                            .metadata()
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string()),
                        assignment: member
                            .assignment()
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string()),
                    })
                    .collect();

                groups.push(GroupDescription {
                    name: group.name().to_owned(),
                    state: group.state().to_owned(),
                    protocol_type: group.protocol_type().to_owned(),
                    protocol: group.protocol().to_owned(),
                    members,
                });
            }
        }

        Result::<_, anyhow::Error>::Ok(DescribeGroupsQueryResponse { groups })
    });

    handle.await.context("While joining blocking handle")?
}
