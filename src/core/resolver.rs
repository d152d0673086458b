use crate::domain::ports::DirectoryClient;
use crate::utils::error::{Result, SubscriberError};

/// Maps a component name to its id by scanning the component list.
///
/// Matching is case-insensitive and exact; the first match in the order the
/// service returns wins.
pub async fn resolve_component_id<D: DirectoryClient + ?Sized>(
    client: &D,
    component_name: &str,
) -> Result<String> {
    tracing::info!(
        function = "resolve_component_id",
        component_name,
        "Resolving component name"
    );

    let wanted = component_name.to_lowercase();
    let components = client.list_components().await?;
    tracing::debug!(count = components.len(), "Fetched components");

    components
        .into_iter()
        .find(|component| component.name.to_lowercase() == wanted)
        .map(|component| {
            tracing::info!(component_name, component_id = %component.id, "Component resolved");
            component.id
        })
        .ok_or_else(|| SubscriberError::ComponentNotFound {
            name: component_name.to_string(),
        })
}
