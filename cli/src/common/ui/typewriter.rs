//! # Typewriter Output
//!
//! File: cli/src/common/ui/typewriter.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! Writes text one character at a time at a fixed rate. Purely cosmetic: the
//! bytes written are always exactly the input text.
//!
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Pause between characters for a given speed.
pub fn char_interval(chars_per_second: u32) -> Duration {
    Duration::from_secs(1) / chars_per_second.max(1)
}

/// Writes `text` to `out`, pausing between characters when `chars_per_second` is set.
/// `None` writes the whole text at once.
pub async fn type_out<W>(out: &mut W, text: &str, chars_per_second: Option<u32>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let Some(cps) = chars_per_second else {
        out.write_all(text.as_bytes()).await?;
        return out.flush().await;
    };

    let interval = char_interval(cps);
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        out.write_all(ch.encode_utf8(&mut buf).as_bytes()).await?;
        out.flush().await?;
        tokio::time::sleep(interval).await;
    }
    Ok(())
}
