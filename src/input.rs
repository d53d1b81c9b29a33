use crate::error::TotpError;
use crate::service::Service;

/// Argument triple validated and ready for the code pipeline.
#[derive(Debug, PartialEq, Eq)]
pub struct NormalizedInput {
    pub secret: String,
    pub service: Service,
    pub interval: u64,
}

/// Normalize the raw CLI triple: strip whitespace out of the secret,
/// lowercase the service name, parse the interval as a positive integer.
pub fn normalize(
    raw_secret: &str,
    raw_service: &str,
    raw_interval: &str,
) -> Result<NormalizedInput, TotpError> {
    let secret: String = raw_secret.chars().filter(|c| !c.is_whitespace()).collect();
    if secret.is_empty() {
        return Err(TotpError::InvalidInput(String::from("secret is empty")));
    }

    let service = raw_service.to_ascii_lowercase().parse::<Service>()?;
    let interval = parse_interval(raw_interval)?;

    Ok(NormalizedInput {
        secret,
        service,
        interval,
    })
}

// Leading zeros are stripped first so "030" reads as decimal 30, never as
// an octal literal.
fn parse_interval(raw: &str) -> Result<u64, TotpError> {
    let stripped = raw.trim_start_matches('0');

    if stripped.is_empty() && !raw.is_empty() {
        return Err(invalid_interval(raw));
    }

    match stripped.parse::<u64>() {
        Ok(interval) if interval > 0 => Ok(interval),
        _ => Err(invalid_interval(raw)),
    }
}

fn invalid_interval(raw: &str) -> TotpError {
    TotpError::InvalidInput(format!(
        "interval must be a positive integer, got \"{}\"",
        raw
    ))
}
