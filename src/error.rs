use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error: {source}",
    Http{source: reqwest::Error} = "HTTP error: {source}",
    XML{quick_xml: quick_xml::Error} = "XML error: {quick_xml}",
    Malformed{reason: String} = "Malformed document: {reason}",
    EmptyDocument = "Document is empty"
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Error {
        Error::XML { quick_xml: e }
    }
}
