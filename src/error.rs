use chipp_http::Error as HttpError;
use std::error::Error as StdError;

#[derive(Debug)]
pub enum Error {
    MissingAccessToken,
    Http(HttpError),
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Error {
        Error::Http(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        use Error::*;

        match self {
            Http(err) => Some(err),
            _ => None,
        }
    }
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            MissingAccessToken => {
                write!(f, "Please set the GITHUB_ACCESS_TOKEN environment variable")
            }
            Http(err) => write!(f, "{}", err),
        }
    }
}
