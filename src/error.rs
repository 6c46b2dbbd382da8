#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("device tap name too long")]
    NameTooLong,

    #[error("ethernet frame shorter than its header")]
    TruncatedFrame,

    #[error("arp packet shorter than its fixed layout")]
    TruncatedArp,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Nul(#[from] std::ffi::NulError),
}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Io(err) => err,
            _ => std::io::Error::new(std::io::ErrorKind::Other, value),
        }
    }
}

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = ::std::result::Result<T, E>;
