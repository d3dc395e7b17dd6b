use crate::admin::AdminWrapper;
use crate::commands::delete_groups::{DeleteGroupsCommand, GroupDeletion};
use anyhow::Context;
use rdkafka::admin::AdminOptions;

pub async fn delete_groups(
    command: DeleteGroupsCommand,
) -> Result<Vec<GroupDeletion>, anyhow::Error> {
    let admin = AdminWrapper::create(&command.connection_settings)
        .context("While creating admin client")?;

    let group_names = command.groups.iter().map(String::as_str).collect::<Vec<_>>();
    let results = admin
        .delete_groups(&group_names, &AdminOptions::new())
        .await
        .context("While deleting consumer groups")?;

    let deletions = results
        .into_iter()
        .map(|result| match result {
            Ok(group) => GroupDeletion { group, error: None },
            Err((group, error)) => GroupDeletion {
                group,
                error: Some(error.to_string()),
            },
        })
        .collect();

    Ok(deletions)
}
