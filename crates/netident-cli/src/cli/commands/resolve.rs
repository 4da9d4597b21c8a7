//! `netident resolve` - bulk owner resolution for an entry list.

use anyhow::{Context as _, Result};
use std::sync::Arc;

use super::Context;
use crate::cli::args::ResolveArgs;
use crate::output;
use netident_client::{RetryConfig, SourceFetcher};
use netident_resolve::{normalize, resolve_all, IdentityResolver, DEFAULT_MAX_WORKERS};
use tracing::debug;

pub async fn execute(ctx: Context, args: ResolveArgs) -> Result<()> {
    let mut retry = RetryConfig::default();
    if let Some(retries) = args.retries {
        retry = retry.max_retries(retries);
    }

    // An unreachable source is fatal; nothing gets probed.
    let fetcher = SourceFetcher::with_retry(retry);
    let body = fetcher
        .fetch(&args.source)
        .await
        .with_context(|| format!("failed to fetch entry list from {}", args.source))?;

    let entries = normalize(&body);
    debug!(entries = entries.len(), "normalized entry list");
    if entries.is_empty() {
        return Ok(());
    }

    let max_workers = args
        .max_workers
        .or(ctx.config.max_workers)
        .unwrap_or(DEFAULT_MAX_WORKERS);

    let resolver = Arc::new(IdentityResolver::new());
    let records = resolve_all(resolver, &entries, max_workers).await;

    output::render_records(&records, ctx.output_format)
}
