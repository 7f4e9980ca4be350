use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity claims carried by an access token.
///
/// Every field is mandatory: a token missing any of them does not
/// deserialize and is treated as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject identity id
    pub uid: i64,

    /// Display name
    pub name: String,

    /// Login
    pub login: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an identity, valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `uid` - Identity id
    /// * `name` - Display name
    /// * `login` - Login
    /// * `ttl` - Time until the token expires
    ///
    /// # Errors
    /// * `InvalidLifetime` - `ttl` is not positive or the expiry is out of range
    pub fn for_identity(
        uid: i64,
        name: impl Into<String>,
        login: impl Into<String>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        Self::issued_at(uid, name, login, ttl, Utc::now())
    }

    /// Create claims for an identity as if issued at `now`.
    ///
    /// # Errors
    /// * `InvalidLifetime` - `ttl` is not positive or the expiry is out of range
    pub fn issued_at(
        uid: i64,
        name: impl Into<String>,
        login: impl Into<String>,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, JwtError> {
        if ttl <= Duration::zero() {
            return Err(JwtError::InvalidLifetime(format!(
                "ttl must be positive, got {}s",
                ttl.num_seconds()
            )));
        }

        let expiration = now.checked_add_signed(ttl).ok_or_else(|| {
            JwtError::InvalidLifetime(format!(
                "expiry overflows for ttl of {}s",
                ttl.num_seconds()
            ))
        })?;

        Ok(Self {
            uid,
            name: name.into(),
            login: login.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// Absolute expiry as a timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Check if token is expired.
    ///
    /// A token stops being valid at the very second of its expiry.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_identity() {
        let claims = Claims::for_identity(7, "Alice", "alice", Duration::hours(24)).unwrap();

        assert_eq!(claims.uid, 7);
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.login, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60); // 24 hours
    }

    #[test]
    fn test_issued_at() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = Claims::issued_at(1, "Bob", "bob", Duration::minutes(5), now).unwrap();

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_300);
        assert_eq!(
            claims.expires_at(),
            Some(Utc.timestamp_opt(1_700_000_300, 0).unwrap())
        );
    }

    #[test]
    fn test_is_expired() {
        let now = Utc.timestamp_opt(1000, 0).unwrap();
        let claims = Claims::issued_at(1, "Bob", "bob", Duration::seconds(10), now).unwrap();

        assert!(!claims.is_expired(1009)); // Not expired
        assert!(claims.is_expired(1010)); // Exactly at expiration
        assert!(claims.is_expired(1011)); // Expired
    }

    #[test]
    fn test_wire_field_names() {
        let now = Utc.timestamp_opt(1000, 0).unwrap();
        let claims = Claims::issued_at(3, "Carol", "carol", Duration::seconds(60), now).unwrap();

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["uid"], 3);
        assert_eq!(value["name"], "Carol");
        assert_eq!(value["login"], "carol");
        assert_eq!(value["iat"], 1000);
        assert_eq!(value["exp"], 1060);
    }

    #[test]
    fn test_non_positive_ttl_is_rejected() {
        let now = Utc.timestamp_opt(1000, 0).unwrap();

        for ttl in [Duration::zero(), Duration::hours(-1)] {
            assert!(matches!(
                Claims::issued_at(1, "Bob", "bob", ttl, now),
                Err(JwtError::InvalidLifetime(_))
            ));
        }
    }

    #[test]
    fn test_overflowing_ttl_is_an_error() {
        let ttl = Duration::days(100_000_000);

        assert!(matches!(
            Claims::for_identity(1, "A", "a", ttl),
            Err(JwtError::InvalidLifetime(_))
        ));
    }
}
