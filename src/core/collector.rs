use crate::domain::model::Subscriber;
use crate::domain::ports::DirectoryClient;
use crate::utils::error::{Result, SubscriberError};

/// Fetches subscriber pages 0, 1, 2, ... until an empty page comes back.
///
/// Pages are concatenated in fetch order without deduplication. Fails with
/// [`SubscriberError::PaginationLimitExceeded`] if `max_pages` pages all
/// carried data.
pub async fn collect_all<D: DirectoryClient + ?Sized>(
    client: &D,
    max_pages: u32,
) -> Result<Vec<Subscriber>> {
    let mut subscribers = Vec::new();

    for page in 0..max_pages {
        let batch = client.list_subscribers(page).await?;
        if batch.is_empty() {
            tracing::info!(
                function = "collect_all",
                pages = page,
                subscribers_count = subscribers.len(),
                "Subscriber listing complete"
            );
            return Ok(subscribers);
        }

        tracing::debug!(page, batch_size = batch.len(), "Fetched subscriber page");
        subscribers.extend(batch);
    }

    tracing::warn!(max_pages, "Subscriber listing did not end within page limit");
    Err(SubscriberError::PaginationLimitExceeded { max_pages })
}
