use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write one reply followed by a newline and flush
pub async fn write_reply<W>(writer: &mut W, text: &str) -> Result<(), anyhow::Error>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_reply_appends_newline() {
        let mut out = Vec::new();
        write_reply(&mut out, "你好\nworld").await.unwrap();
        write_reply(&mut out, "done").await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "你好\nworld\ndone\n");
    }
}
