//! Connection parameters
//!
//! The enumerated key/value set accepted when opening a database connection.
//! See the libpq documentation for the meaning of each parameter.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// TLS negotiation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

/// A single connection parameter. Each key may appear at most once in a
/// parameter set; [`conninfo`] enforces this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionParameter {
    Host(String),
    HostAddr(String),
    Port(u16),
    DbName(String),
    User(String),
    Password(String),
    ConnectTimeout(u32),
    ClientEncoding(String),
    Options(String),

    ApplicationName(String),
    FallbackApplicationName(String),

    Keepalives(bool),
    KeepalivesIdle(u32),
    KeepalivesInterval(u32),
    KeepalivesCount(u32),

    SslMode(SslMode),
    SslCompression(bool),
    SslCertificate(String),
    SslKey(String),
    SslRootCert(String),
    SslCrl(String),

    RequirePeer(String),
    KrbSrvName(String),
    GssLib(String),
    Service(String),
}

impl ConnectionParameter {
    /// The fixed conninfo key for this parameter.
    pub fn key(&self) -> &'static str {
        match self {
            ConnectionParameter::Host(_) => "host",
            ConnectionParameter::HostAddr(_) => "hostaddr",
            ConnectionParameter::Port(_) => "port",
            ConnectionParameter::DbName(_) => "dbname",
            ConnectionParameter::User(_) => "user",
            ConnectionParameter::Password(_) => "password",
            ConnectionParameter::ConnectTimeout(_) => "connect_timeout",
            ConnectionParameter::ClientEncoding(_) => "client_encoding",
            ConnectionParameter::Options(_) => "options",
            ConnectionParameter::ApplicationName(_) => "application_name",
            ConnectionParameter::FallbackApplicationName(_) => "fallback_application_name",
            ConnectionParameter::Keepalives(_) => "keepalives",
            ConnectionParameter::KeepalivesIdle(_) => "keepalives_idle",
            ConnectionParameter::KeepalivesInterval(_) => "keepalives_interval",
            ConnectionParameter::KeepalivesCount(_) => "keepalives_count",
            ConnectionParameter::SslMode(_) => "sslmode",
            ConnectionParameter::SslCompression(_) => "sslcompression",
            ConnectionParameter::SslCertificate(_) => "sslcert",
            ConnectionParameter::SslKey(_) => "sslkey",
            ConnectionParameter::SslRootCert(_) => "sslrootcert",
            ConnectionParameter::SslCrl(_) => "sslcrl",
            ConnectionParameter::RequirePeer(_) => "requirepeer",
            ConnectionParameter::KrbSrvName(_) => "krbsrvname",
            ConnectionParameter::GssLib(_) => "gsslib",
            ConnectionParameter::Service(_) => "service",
        }
    }

    /// The conninfo value rendering for this parameter. Booleans render as
    /// `1`/`0`, integers as plain digits.
    pub fn value(&self) -> String {
        match self {
            ConnectionParameter::Host(value)
            | ConnectionParameter::HostAddr(value)
            | ConnectionParameter::DbName(value)
            | ConnectionParameter::User(value)
            | ConnectionParameter::Password(value)
            | ConnectionParameter::ClientEncoding(value)
            | ConnectionParameter::Options(value)
            | ConnectionParameter::ApplicationName(value)
            | ConnectionParameter::FallbackApplicationName(value)
            | ConnectionParameter::SslCertificate(value)
            | ConnectionParameter::SslKey(value)
            | ConnectionParameter::SslRootCert(value)
            | ConnectionParameter::SslCrl(value)
            | ConnectionParameter::RequirePeer(value)
            | ConnectionParameter::KrbSrvName(value)
            | ConnectionParameter::GssLib(value)
            | ConnectionParameter::Service(value) => value.clone(),
            ConnectionParameter::Port(value) => value.to_string(),
            ConnectionParameter::ConnectTimeout(value)
            | ConnectionParameter::KeepalivesIdle(value)
            | ConnectionParameter::KeepalivesInterval(value)
            | ConnectionParameter::KeepalivesCount(value) => value.to_string(),
            ConnectionParameter::Keepalives(value)
            | ConnectionParameter::SslCompression(value) => {
                if *value { "1".to_string() } else { "0".to_string() }
            }
            ConnectionParameter::SslMode(value) => value.as_str().to_string(),
        }
    }
}

/// Render a parameter set into a conninfo string of space-separated
/// `key='value'` pairs. Rejects any key specified more than once, before any
/// connection attempt can be made with the result.
pub fn conninfo(parameters: &[ConnectionParameter]) -> Result<String, ConfigError> {
    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut pairs: Vec<String> = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        let key = parameter.key();
        if !seen.insert(key) {
            return Err(ConfigError::DuplicateParameter(key.to_string()));
        }
        // Values escape backslash and quote for the conninfo grammar
        let value = parameter.value().replace('\\', "\\\\").replace('\'', "\\'");
        pairs.push(format!("{}='{}'", key, value));
    }

    Ok(pairs.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_values() {
        assert_eq!(ConnectionParameter::Host("h".into()).key(), "host");
        assert_eq!(ConnectionParameter::Port(5432).value(), "5432");
        assert_eq!(ConnectionParameter::Keepalives(true).value(), "1");
        assert_eq!(ConnectionParameter::SslCompression(false).value(), "0");
        assert_eq!(
            ConnectionParameter::SslMode(SslMode::VerifyCa).value(),
            "verify-ca"
        );
        assert_eq!(
            ConnectionParameter::FallbackApplicationName("x".into()).key(),
            "fallback_application_name"
        );
    }

    #[test]
    fn test_conninfo_rendering() {
        let rendered = conninfo(&[
            ConnectionParameter::Host("localhost".into()),
            ConnectionParameter::Port(5432),
            ConnectionParameter::DbName("myapp".into()),
        ])
        .unwrap();
        assert_eq!(rendered, "host='localhost' port='5432' dbname='myapp'");
    }

    #[test]
    fn test_conninfo_escapes_values() {
        let rendered = conninfo(&[ConnectionParameter::Password("o'\\hara".into())]).unwrap();
        assert_eq!(rendered, "password='o\\'\\\\hara'");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = conninfo(&[
            ConnectionParameter::Host("a".into()),
            ConnectionParameter::Port(1),
            ConnectionParameter::Host("b".into()),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateParameter(key)) if key == "host"));
    }

    #[test]
    fn test_same_key_different_values_still_duplicate() {
        let result = conninfo(&[
            ConnectionParameter::SslMode(SslMode::Disable),
            ConnectionParameter::SslMode(SslMode::Require),
        ]);
        assert!(result.is_err());
    }
}
