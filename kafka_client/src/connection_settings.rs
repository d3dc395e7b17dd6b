use crate::consumer::SecurityProtocol;
use anyhow::bail;
use rdkafka::ClientConfig;

#[derive(Debug, Clone)]
pub struct KafkaConnectionSettings {
    pub brokers: Vec<String>,
    pub security_protocol: SecurityProtocol,
}

impl TryFrom<&KafkaConnectionSettings> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &KafkaConnectionSettings) -> Result<Self, Self::Error> {
        if value.brokers.is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        let brokers_string = value.brokers.join(",");
        config
            .set("bootstrap.servers", brokers_string)
            .set("security.protocol", value.security_protocol.to_string());

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_settings() {
        let settings = KafkaConnectionSettings {
            brokers: vec!["localhost:9092".to_owned(), "localhost:9093".to_owned()],
            security_protocol: SecurityProtocol::Plaintext,
        };

        let config = ClientConfig::try_from(&settings).unwrap();

        assert_eq!(
            config.get("bootstrap.servers"),
            Some("localhost:9092,localhost:9093")
        );
        assert_eq!(config.get("security.protocol"), Some("plaintext"));
    }

    #[test]
    fn empty_brokers_are_rejected() {
        let settings = KafkaConnectionSettings {
            brokers: vec![],
            security_protocol: SecurityProtocol::Plaintext,
        };

        assert!(ClientConfig::try_from(&settings).is_err());
    }
}
