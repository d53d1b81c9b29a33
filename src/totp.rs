use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::time::SystemTime;

use crate::error::TotpError;
use crate::service::AlgorithmProfile;

type HmacSha1 = Hmac<Sha1>;

// HMAC-SHA1 digests are always 160 bits
const DIGEST_LEN: usize = 20;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Number of whole intervals elapsed since the Unix epoch. The interval
/// has already been validated as positive, so the division cannot fail.
pub fn get_moving_factor(clock: &impl GetTime, interval: u64) -> u64 {
    let secs = clock
        .get_now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    secs / interval
}

/// Run the code pipeline for one instant: HMAC over the moving factor,
/// dynamic truncation, zero-padded rendering.
pub fn generate(
    key: &[u8],
    profile: &AlgorithmProfile,
    moving_factor: u64,
) -> Result<String, TotpError> {
    let digest = make_hmac(key, moving_factor)?;
    let code = truncate(&digest, profile.digits)?;
    Ok(format!("{:0>width$}", code, width = profile.digits as usize))
}

// HMAC_SHA-1 -> 20 byte string. The key is an opaque byte buffer; embedded
// zero bytes are legal. The counter is serialized as 8 bytes big-endian per
// RFC 6238.
fn make_hmac(key: &[u8], counter: u64) -> Result<Vec<u8>, TotpError> {
    let mut mac =
        HmacSha1::new_from_slice(key).map_err(|err| TotpError::CryptoBackend(err.to_string()))?;
    mac.update(&counter.to_be_bytes());

    Ok(mac.finalize().into_bytes().to_vec())
}

// reduce to 4 byte string
// then s to num mod 10^Digit
fn truncate(digest: &[u8], digits: u32) -> Result<u32, TotpError> {
    let base_code = dynamic_truncation(digest)?;

    Ok(base_code % u32::pow(10, digits))
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
fn dynamic_truncation(digest: &[u8]) -> Result<u32, TotpError> {
    if digest.len() != DIGEST_LEN {
        return Err(TotpError::BadDigestLength(digest.len()));
    }

    let offset = (digest[DIGEST_LEN - 1] & 0xf) as usize;
    if offset + 3 >= DIGEST_LEN {
        return Err(TotpError::BadOffset(offset));
    }

    let code = (digest[offset] as u32 & 0x7f) << 24
        | (digest[offset + 1] as u32 & 0xff) << 16
        | (digest[offset + 2] as u32 & 0xff) << 8
        | (digest[offset + 3] as u32 & 0xff);
    Ok(code)
}
