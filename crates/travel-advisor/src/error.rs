use advisor_api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(#[source] ApiError),

    #[error("generation error: {0}")]
    Generation(#[source] ApiError),

    #[error("no travel advice found for this destination")]
    EmptyResult,

    #[error("flow aborted: {0}")]
    Aborted(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        if err.is_generation() {
            AppError::Generation(err)
        } else {
            AppError::Network(err)
        }
    }
}
