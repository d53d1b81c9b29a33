use std::str::FromStr;

use crate::error::TotpError;

/// Digest algorithm for the HMAC step. SHA-1 is the only one the target
/// services accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sha1,
}

/// Code parameters a service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProfile {
    pub algorithm: Algorithm,
    pub digits: u32,
}

const GOOGLE_AUTHENTICATOR: AlgorithmProfile = AlgorithmProfile {
    algorithm: Algorithm::Sha1,
    digits: 6,
};

/// Services this tool can generate codes for. All four currently share the
/// Google-Authenticator-compatible profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Google,
    Github,
    Gitlab,
    Bitbucket,
}

impl Service {
    pub fn profile(&self) -> AlgorithmProfile {
        match self {
            Service::Google | Service::Github | Service::Gitlab | Service::Bitbucket => {
                GOOGLE_AUTHENTICATOR
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Service::Google => "google",
            Service::Github => "github",
            Service::Gitlab => "gitlab",
            Service::Bitbucket => "bitbucket",
        }
    }
}

impl FromStr for Service {
    type Err = TotpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Service::Google),
            "github" => Ok(Service::Github),
            "gitlab" => Ok(Service::Gitlab),
            "bitbucket" => Ok(Service::Bitbucket),
            other => Err(TotpError::InvalidInput(format!(
                "unsupported service: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_service() {
        let services = [
            ("google", Service::Google),
            ("github", Service::Github),
            ("gitlab", Service::Gitlab),
            ("bitbucket", Service::Bitbucket),
        ];

        for (name, expected) in services {
            assert_eq!(name.parse::<Service>().unwrap(), expected);
            assert_eq!(expected.as_str(), name);
        }
    }

    #[test]
    fn rejects_unsupported_service() {
        let err = "facebook".parse::<Service>().unwrap_err();
        assert_eq!(
            err,
            TotpError::InvalidInput(String::from("unsupported service: facebook"))
        );
    }

    #[test]
    fn all_services_share_the_authenticator_profile() {
        for service in [
            Service::Google,
            Service::Github,
            Service::Gitlab,
            Service::Bitbucket,
        ] {
            let profile = service.profile();
            assert_eq!(profile.algorithm, Algorithm::Sha1);
            assert_eq!(profile.digits, 6);
        }
    }
}
