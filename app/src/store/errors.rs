use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read `{path}': {error}")]
    IO {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse `{path}': {error}")]
    Deserialize { error: String, path: PathBuf },

    #[error("Could not find post `{slug}'")]
    NotFound { slug: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: &std::path::Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |error| Error::IO {
            error,
            path: PathBuf::from(path),
        }
    }

    pub fn status(&self) -> axum::http::StatusCode {
        match self {
            Error::NotFound { .. } => axum::http::StatusCode::NOT_FOUND,
            Error::IO { .. } | Error::Deserialize { .. } => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        log::error!("{}", self);
        (self.status(), self.to_string()).into_response()
    }
}
