use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token issued to a client application.
///
/// `sub` holds the user identifier as a string (RFC 7519 requires a string
/// subject); `app_id` binds the token to the application whose secret signed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Application the token was issued for
    pub app_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user session starting now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - User email
    /// * `app_id` - Requesting application
    /// * `ttl` - Time until the token expires
    pub fn for_session(user_id: i64, email: impl Into<String>, app_id: i64, ttl: Duration) -> Self {
        Self::issued_at(user_id, email, app_id, Utc::now(), ttl)
    }

    /// Build claims for a session starting at `issued_at`.
    pub fn issued_at(
        user_id: i64,
        email: impl Into<String>,
        app_id: i64,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            app_id,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// User identifier parsed back from `sub`.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }

    /// Lifetime between issuance and expiry.
    pub fn time_to_live(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_session() {
        let claims = Claims::for_session(42, "alice@example.com", 7, Duration::hours(1));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.app_id, 7);
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_issued_at_fixed_instant() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = Claims::issued_at(1, "bob@example.com", 2, issued_at, Duration::minutes(15));

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_000 + 15 * 60);
        assert_eq!(claims.time_to_live(), Duration::minutes(15));
    }

    #[test]
    fn test_user_id_not_numeric() {
        let mut claims = Claims::for_session(1, "a@example.com", 1, Duration::hours(1));
        claims.sub = "not-a-number".to_string();
        assert_eq!(claims.user_id(), None);
    }

    #[test]
    fn test_is_expired() {
        let issued_at = DateTime::from_timestamp(0, 0).unwrap();
        let claims = Claims::issued_at(1, "a@example.com", 1, issued_at, Duration::seconds(1000));

        assert!(!claims.is_expired(999)); // Not expired
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_serialized_field_names() {
        let claims = Claims::for_session(5, "c@example.com", 3, Duration::hours(1));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["sub"], "5");
        assert_eq!(json["email"], "c@example.com");
        assert_eq!(json["app_id"], 3);
        assert!(json["exp"].is_i64());
        assert!(json["iat"].is_i64());
    }
}
