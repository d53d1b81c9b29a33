use data_encoding::BASE32_NOPAD;

use crate::error::TotpError;

/// Decode a normalized secret from base32 (RFC 4648) into raw key bytes.
/// Case-insensitive, and trailing `=` padding is accepted but not required
/// since secrets are commonly copied without it.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>, TotpError> {
    let folded = secret.to_uppercase();
    let unpadded = folded.trim_end_matches('=');

    let key = BASE32_NOPAD
        .decode(unpadded.as_bytes())
        .map_err(|err| TotpError::Decode(err.to_string()))?;

    if key.is_empty() {
        return Err(TotpError::Decode(String::from(
            "secret decodes to an empty key",
        )));
    }

    Ok(key)
}
