#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidCredentials,
    EmailTaken,
    UsernameRequired,
    NotAuthenticated,
    LoginRequired,
    PlayerNotFound,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidCredentials => write!(f, "Invalid email or password"),
            ApiError::EmailTaken => write!(f, "Email already registered"),
            ApiError::UsernameRequired => write!(f, "Username is required"),
            ApiError::NotAuthenticated => write!(f, "Not authenticated"),
            ApiError::LoginRequired => write!(f, "Must be logged in to submit score"),
            ApiError::PlayerNotFound => write!(f, "Player not found"),
        }
    }
}

impl std::error::Error for ApiError {}
