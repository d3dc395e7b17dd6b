use kafka_client::consumer::{KafkaMessage, PartitionOffset};
use kafka_client::queries::describe_groups::GroupDescription;
use kafka_client::queries::describe_log_dirs::BrokerLogDirs;
use kafka_client::queries::describe_topics::TopicDescription;
use kafka_client::queries::get_cluster_metadata::GetClusterMetadataQueryResponse;
use kafka_client::queries::list_group_offsets::ListGroupOffsetsQueryResponse;
use kafka_client::queries::list_groups::GroupSummary;
use kafka_client::queries::list_topics::KafkaTopicMetadata;

const BANNER: &str = "*****************************************************";

fn print_banner() {
    println!("{BANNER}");
}

pub fn print_topic(topic: &KafkaTopicMetadata) {
    print_banner();
    println!("TOPIC     :{}", topic.topic_name);
    println!("PARTITIONS:{}", topic.partitions_count);
}

pub fn print_topic_description(topic: &TopicDescription) {
    print_banner();
    println!("TOPIC:{}", topic.topic_name);
    if let Some(error) = &topic.error {
        println!("ERROR:{error}");
    }
    println!(
        "{:<12}{:<10}{:<20}{:<20}",
        "PARTITION", "LEADER", "REPLICAS", "ISR"
    );
    for partition in &topic.partitions {
        println!(
            "{:<12}{:<10}{:<20}{:<20}",
            partition.partition_id,
            partition.leader,
            format!("{:?}", partition.replicas),
            format!("{:?}", partition.isr),
        );
    }
}

pub fn print_message(message: &KafkaMessage) {
    print_banner();
    let headers = message.headers.as_ref().map(|headers| {
        let mut pairs = headers
            .iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect::<Vec<_>>();
        pairs.sort();
        pairs.join(",")
    });
    let timestamp = message
        .timestamp
        .map(|timestamp| timestamp.to_string())
        .unwrap_or_default();

    println!("Headers       :{}", headers.unwrap_or_default());
    println!("Timestamp     :{timestamp}");
    println!("Key           :{}", message.key.as_deref().unwrap_or_default());
    println!("Value         :{}", message.body.as_deref().unwrap_or_default());
    println!("Topic         :{}", message.topic);
    println!("Partition     :{}", message.partition_offset.partition());
    println!("Offset        :{}", message.partition_offset.offset());
}

pub fn print_groups(groups: &[GroupSummary]) {
    for group in groups {
        print_banner();
        println!("Name        :{}", group.name);
        println!("State       :{}", group.state);
        println!("ProtocolType:{}", group.protocol_type);
    }
}

pub fn print_group_description(group: &GroupDescription) {
    print_banner();
    println!("GroupID       :{}", group.name);
    println!("State         :{}", group.state);
    println!("ProtocolType  :{}", group.protocol_type);
    println!("Protocol      :{}", group.protocol);
    println!("Members       :");
    for member in &group.members {
        println!("    ------------");
        println!("    MemberID   :{}", member.member_id);
        println!("    ClientID   :{}", member.client_id);
        println!("    ClientHost :{}", member.client_host);
        println!(
            "    Metadata   :{}",
            member.metadata.as_deref().unwrap_or_default()
        );
        println!(
            "    Assignment :{}",
            member.assignment.as_deref().unwrap_or_default()
        );
    }
}

pub fn print_group_offsets(response: &ListGroupOffsetsQueryResponse) {
    print_banner();
    println!("GroupID        :{}", response.group);
    for committed in &response.offsets {
        println!("    ------------");
        println!("    Topic       :{}", committed.topic);
        println!("    Partition   :{}", committed.partition);
        match committed.offset {
            Some(offset) => println!("    Offset      :{offset}"),
            None => println!("    Offset      :-"),
        }
    }
}

pub fn print_cluster(response: &GetClusterMetadataQueryResponse) {
    print_banner();
    println!(
        "MetadataBroker:{} ({})",
        response.orig_broker_id, response.orig_broker_name
    );
    println!("{:<10}{:<30}", "BrokerID", "BrokerAddr");
    for broker in &response.brokers {
        println!(
            "{:<10}{:<30}",
            broker.broker_id,
            format!("{}:{}", broker.host, broker.port)
        );
    }
}

pub fn print_low_watermarks(topic: &str, low_watermarks: &[PartitionOffset]) {
    print_banner();
    println!("TOPIC:{topic}");
    println!("{:<12}{:<20}", "PARTITION", "LOW WATERMARK");
    for partition_offset in low_watermarks {
        println!(
            "{:<12}{:<20}",
            partition_offset.partition(),
            partition_offset.offset()
        );
    }
}

pub fn print_broker_log_dirs(broker: &BrokerLogDirs) {
    print_banner();
    println!("BrokerID:{}", broker.broker_id);
    for path in &broker.log_dirs {
        println!("Path: {path}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_53_asterisks() {
        assert_eq!(BANNER.len(), 53);
        assert!(BANNER.chars().all(|c| c == '*'));
    }
}
