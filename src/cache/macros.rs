/// A macro to simplify write-once caching against the in-memory session cache.
///
/// This macro checks if a value is present in the cache.
/// If found, it returns the cached value.
/// If not found, it awaits the provided block to compute the value,
/// stores it in the cache, and then returns the computed value.
/// Errors from the block are propagated and nothing is stored.
///
/// # Arguments
/// * `$cache`: The cache instance to use for retrieval and storage. The cache must have
///   `get_from_cache` and `set` methods.
/// * `$key`: The key to use for caching the value.
/// * `$block`: The future to await if the value is not found in cache.
///
/// # Example
/// ```rust,ignore
/// let details = cached!(self.cache, CacheKey::streaming(title, year), async move {
///     fetch_details(title).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $block:expr) => {{
        if let Some(cached) = $cache.get_from_cache(&$key).await {
            Ok(cached)
        } else {
            match $block.await {
                Ok(value) => {
                    $cache.set(&$key, &value).await;
                    Ok(value)
                }
                Err(e) => Err(e),
            }
        }
    }};
}
