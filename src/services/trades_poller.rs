use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::broker::BrokerClient;
use crate::models::trade::normalize_book;
use crate::models::ActiveTradeBook;

/// What the poller delivers: a normalized snapshot, or the error message to
/// show inline.
pub type TradesUpdate = Result<ActiveTradeBook, String>;

/// Fetch and normalize the active-trades aggregate once.
pub async fn fetch_active_trades(client: &BrokerClient) -> TradesUpdate {
    match client.get_active_trades().await {
        Ok(raw) => {
            let book = normalize_book(raw);
            tracing::debug!(
                trades = book.trades.len(),
                skipped = book.skipped,
                "Active trades fetched"
            );
            Ok(book)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Active trades fetch failed");
            Err(e.to_string())
        }
    }
}

/// Re-fetch the active-trades aggregate on a fixed interval and push each
/// result to the UI. The first tick fires immediately, covering the initial
/// load. The loop ends as soon as the receiving side is dropped, so the
/// timer is torn down with the view that consumes it.
pub async fn run_trades_poller(
    client: BrokerClient,
    interval_secs: u64,
    tx: mpsc::Sender<TradesUpdate>,
) {
    tracing::info!(interval_secs, "Trades poller started");

    let mut ticker = interval(Duration::from_secs(interval_secs));
    loop {
        ticker.tick().await;

        let update = fetch_active_trades(&client).await;
        if tx.send(update).await.is_err() {
            tracing::debug!("Trades poller: receiver dropped, stopping");
            return;
        }
    }
}
