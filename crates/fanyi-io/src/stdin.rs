use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Feed every non-blank stdin line to `on_text` until EOF.
/// Each callback completes before the next line is read.
pub async fn watch_stdin<F, Fut>(on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = ()>,
{
    watch_lines(BufReader::new(tokio::io::stdin()), on_text).await
}

pub async fn watch_lines<R, F, Fut>(reader: R, mut on_text: F) -> Result<(), anyhow::Error>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            on_text(line).await;
        }
    }

    Ok(())
}
