use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Запрос на отправку ссылки для входа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicLinkRequest {
    pub email: String,
    pub create_user: bool,
}

impl MagicLinkRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            create_user: true,
        }
    }
}

/// Тело `POST /auth/v1/token?grant_type=refresh_token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Ошибка сервиса аутентификации в теле ответа. Разные эндпоинты кладут текст
/// в разные поля, иногда в несколько сразу
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthErrorBody {
    /// Первое непустое сообщение в порядке msg, error_description, message, error
    pub fn text(&self) -> Option<&str> {
        [&self.msg, &self.error_description, &self.message, &self.error]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|m| !m.is_empty())
    }

    /// Текст ошибки для показа пользователю: сообщение сервиса или сырое тело
    pub fn message_or(raw: &str, status: u16) -> String {
        serde_json::from_str::<AuthErrorBody>(raw)
            .ok()
            .and_then(|body| body.text().map(str::to_string))
            .unwrap_or_else(|| {
                if raw.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    raw.trim().to_string()
                }
            })
    }
}

/// Сессия, выданная сервисом аутентификации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp, seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    /// Разбор фрагмента URL после перехода по ссылке из письма:
    /// `#access_token=..&refresh_token=..&expires_in=..&expires_at=..&token_type=bearer`
    pub fn from_url_fragment(fragment: &str) -> Option<Session> {
        let mut session = Session {
            access_token: String::new(),
            refresh_token: None,
            expires_in: None,
            expires_at: None,
            token_type: None,
            user: None,
        };

        for pair in fragment.trim_start_matches('#').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            match key {
                "access_token" => session.access_token = value,
                "refresh_token" => session.refresh_token = Some(value),
                "expires_in" => session.expires_in = value.parse().ok(),
                "expires_at" => session.expires_at = value.parse().ok(),
                "token_type" => session.token_type = Some(value),
                _ => {}
            }
        }

        (!session.access_token.is_empty()).then_some(session)
    }

    /// Заполнить `expires_at` из `expires_in`, если сервис прислал только его
    pub fn with_expiry_from(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self.expires_in.map(|secs| now.timestamp() + secs);
        }
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= now.timestamp())
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Пользователь сервиса аутентификации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        self.user_metadata
            .full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Пользователь".to_string())
    }

    /// Инициалы для аватара: первые буквы слов, не больше двух, в верхнем регистре
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Тело `POST /api/v1/profiles/sync`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSyncRequest {
    pub id: String,
    pub email: Option<String>,
}

impl From<&SessionUser> for ProfileSyncRequest {
    fn from(user: &SessionUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_session_from_fragment() {
        let session = Session::from_url_fragment(
            "#access_token=abc.def&expires_at=1700003600&expires_in=3600&refresh_token=r1&token_type=bearer&type=magiclink",
        )
        .unwrap();

        assert_eq!(session.access_token, "abc.def");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.expires_at, Some(1_700_003_600));
        assert_eq!(session.bearer(), "Bearer abc.def");
    }

    #[test]
    fn test_fragment_without_token_is_none() {
        assert!(Session::from_url_fragment("#error=access_denied&error_description=expired").is_none());
        assert!(Session::from_url_fragment("").is_none());
    }

    #[test]
    fn test_expiry() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let session = Session::from_url_fragment("access_token=t&expires_in=60")
            .unwrap()
            .with_expiry_from(now);

        assert_eq!(session.expires_at, Some(1_700_000_060));
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + chrono::Duration::seconds(60)));
    }

    #[test]
    fn test_auth_error_message() {
        assert_eq!(
            AuthErrorBody::message_or(r#"{"msg":"Email rate limit exceeded"}"#, 429),
            "Email rate limit exceeded"
        );
        assert_eq!(
            AuthErrorBody::message_or(r#"{"error":"invalid_grant","error_description":"Token expired"}"#, 400),
            "Token expired"
        );
        assert_eq!(AuthErrorBody::message_or("", 502), "HTTP 502");
        assert_eq!(AuthErrorBody::message_or("Bad gateway", 502), "Bad gateway");
    }

    #[test]
    fn test_auth_error_with_several_message_fields() {
        assert_eq!(
            AuthErrorBody::message_or(r#"{"msg":"Signups not allowed","message":"Forbidden"}"#, 403),
            "Signups not allowed"
        );
        assert_eq!(
            AuthErrorBody::message_or(
                r#"{"msg":"  ","error_description":"Token expired","message":"Bad request","error":"invalid_grant"}"#,
                400
            ),
            "Token expired"
        );
        assert_eq!(
            AuthErrorBody::message_or(r#"{"code":500,"message":"Internal error"}"#, 500),
            "Internal error"
        );
    }

    #[test]
    fn test_initials() {
        let mut user = SessionUser {
            id: "u1".into(),
            email: Some("anna@example.com".into()),
            user_metadata: UserMetadata::default(),
        };
        assert_eq!(user.initials(), "A");

        user.user_metadata.full_name = Some("иван петров сидоров".into());
        assert_eq!(user.initials(), "ИП");
    }
}
