//! Replay runtime - feeds recorded transport updates into a session.

use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::data::{ChangeStream, Session, UserChange};
use crate::error::Result;
use crate::transport::TransportUpdate;

/// Counters collected over one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub updates: usize,
    pub changes: usize,
    pub lagged: u64,
}

/// Replay from the configured source: `REPLAY_INPUT` or stdin.
pub async fn run(config: &Config, session: &mut Session) -> Result<ReplayStats> {
    match &config.replay_input {
        Some(path) => {
            info!("Replaying updates from {}", path.display());
            let file = File::open(path).await?;
            replay(BufReader::new(file), session).await
        }
        None => {
            info!("Replaying updates from stdin");
            replay(BufReader::new(io::stdin()), session).await
        }
    }
}

/// Apply every newline-delimited JSON update from `reader`.
///
/// Blank lines are skipped. A line that doesn't decode stops the replay.
pub async fn replay<R>(reader: R, session: &mut Session) -> Result<ReplayStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut events = session.subscribe();
    let mut stats = ReplayStats::default();
    let mut lines = reader.lines();
    let mut line_no = 0;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let update = TransportUpdate::from_json_line(line, line_no)?;
        let user_id = session.apply(&update);
        stats.updates += 1;
        debug!("Line {}: applied update for user {}", line_no, user_id);

        drain(&mut events, &mut stats);
    }

    info!(
        "Replay finished: {} updates, {} changes, {} users",
        stats.updates,
        stats.changes,
        session.len()
    );
    Ok(stats)
}

fn drain(events: &mut ChangeStream, stats: &mut ReplayStats) {
    loop {
        match events.try_recv() {
            Ok(change) => {
                stats.changes += 1;
                log_change(&change);
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Change stream lagged, {} events dropped", skipped);
                stats.lagged += skipped;
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
}

fn log_change(change: &UserChange) {
    match change {
        UserChange::Flags { user_id, was, now } => {
            debug!("User {} flags {:?} -> {:?}", user_id, was, now);
        }
        UserChange::Lastseen { user_id, status } => {
            info!("User {} last seen: {}", user_id, status);
        }
        UserChange::ContactStatus { user_id, status } => {
            info!("User {} contact status: {:?}", user_id, status);
        }
        UserChange::Peer { user_id, what } => {
            debug!("User {} updated: {:?}", user_id, what);
        }
    }
}
