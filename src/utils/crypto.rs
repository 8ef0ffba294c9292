use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};

use crate::error::{MinerError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current unix time in whole seconds.
pub fn current_timestamp() -> Result<i64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| MinerError::Io(format!("System time error: {e}")))?
        .as_secs();

    // Ensure the timestamp fits in i64
    if duration > i64::MAX as u64 {
        return Err(MinerError::Io("Timestamp overflow".to_string()));
    }

    Ok(duration as i64)
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// SHA-256 digest rendered as a lowercase hex string, the form every block
/// hash in the system takes.
pub fn sha256_hex(data: &[u8]) -> String {
    HEXLOWER.encode(sha256_digest(data).as_slice())
}
