use crate::connection_settings::KafkaConnectionSettings;
use anyhow::Context;
use rdkafka::admin::AdminClient;
use rdkafka::client::DefaultClientContext;
use rdkafka::ClientConfig;
use std::ops::{Deref, DerefMut};

pub struct AdminWrapper {
    client: AdminClient<DefaultClientContext>,
}

impl AdminWrapper {
    pub fn create(settings: &KafkaConnectionSettings) -> Result<Self, anyhow::Error> {
        let config = ClientConfig::try_from(settings)?;
        let client: AdminClient<DefaultClientContext> = config
            .create()
            .context("While creating kafka AdminClient")?;

        Ok(Self { client })
    }
}

impl DerefMut for AdminWrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

impl Deref for AdminWrapper {
    type Target = AdminClient<DefaultClientContext>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
