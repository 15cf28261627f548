use thiserror::Error;

#[derive(Debug, Error)]
pub enum TidyError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("invalid number {token:?} in path command {command} (command #{index})")]
    InvalidPathNumber {
        command: char,
        index: usize,
        token: String,
    },

    #[error("invalid number {token:?} in points list")]
    InvalidPointNumber { token: String },

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
