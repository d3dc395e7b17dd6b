use anyhow::{anyhow, Context};
use std::collections::HashMap;

/// Comma separated list flag; an empty string means the flag was not
/// provided, not an empty list.
pub fn parse_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![];
    }
    value.split(',').map(str::to_owned).collect()
}

pub fn parse_i32_list(value: &str, flag: &str) -> Result<Vec<i32>, anyhow::Error> {
    parse_list(value)
        .iter()
        .map(|item| {
            item.parse::<i32>()
                .with_context(|| format!("While parsing --{flag} entry {item:?}"))
        })
        .collect()
}

/// Every listed partition gets the same target offset.
pub fn partition_offsets(
    partitions: &str,
    offset: i64,
) -> Result<HashMap<i32, i64>, anyhow::Error> {
    Ok(parse_i32_list(partitions, "partitions")?
        .into_iter()
        .map(|partition| (partition, offset))
        .collect())
}

/// Cartesian product of the topic and partition lists.
pub fn topic_partitions(
    topics: &str,
    partitions: &str,
) -> Result<HashMap<String, Vec<i32>>, anyhow::Error> {
    let partitions = parse_i32_list(partitions, "partitions")?;
    Ok(parse_list(topics)
        .into_iter()
        .map(|topic| (topic, partitions.clone()))
        .collect())
}

/// Headers come in as "key:value" pairs separated by commas.
pub fn parse_headers(value: &str) -> Result<HashMap<String, String>, anyhow::Error> {
    let mut headers = HashMap::new();
    for entry in parse_list(value) {
        let (key, header_value) = entry.split_once(':').ok_or_else(|| {
            anyhow!("Header {entry:?} should be key:value, example: --headers=foo:bar,bar:foo")
        })?;
        headers.insert(key.to_owned(), header_value.to_owned());
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_means_not_provided() {
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn lists_split_on_comma_only() {
        assert_eq!(parse_list("t1,t2"), vec!["t1", "t2"]);
        assert_eq!(parse_list("t1"), vec!["t1"]);
    }

    #[test]
    fn every_partition_gets_the_offset() {
        let offsets = partition_offsets("1,2,3", 100).unwrap();
        assert_eq!(offsets, HashMap::from([(1, 100), (2, 100), (3, 100)]));
    }

    #[test]
    fn non_numeric_partition_is_rejected() {
        assert!(partition_offsets("1,x", 100).is_err());
    }

    #[test]
    fn topics_share_the_partition_list() {
        let product = topic_partitions("t1,t2", "0,1").unwrap();
        assert_eq!(
            product,
            HashMap::from([
                ("t1".to_owned(), vec![0, 1]),
                ("t2".to_owned(), vec![0, 1])
            ])
        );
    }

    #[test]
    fn headers_parse_as_key_value_pairs() {
        let headers = parse_headers("foo:bar,bar:foo").unwrap();
        assert_eq!(
            headers,
            HashMap::from([
                ("foo".to_owned(), "bar".to_owned()),
                ("bar".to_owned(), "foo".to_owned())
            ])
        );
    }

    #[test]
    fn header_without_colon_is_rejected() {
        assert!(parse_headers("foo").is_err());
    }

    #[test]
    fn no_headers_is_fine() {
        assert!(parse_headers("").unwrap().is_empty());
    }
}
