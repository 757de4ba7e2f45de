use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::notam::parse::notices_from_str;
use crate::notam::resolve::{resolve, Resolution};
use crate::notam::{Field, Restriction};

/// NATS UK Pre-flight Information Bulletin.
pub const DEFAULT_PIB_URL: &str = "https://pibs.nats.co.uk/operational/pibs/PIB.xml";

/// Somewhere the bulletin document can be read from.
pub trait Fetch {
    fn fetch(&self) -> Result<String>;
}

impl<F: Fn() -> Result<String>> Fetch for F {
    fn fetch(&self) -> Result<String> {
        self()
    }
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpFetcher {
    pub fn new<S: Into<String>>(url: S, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(HttpFetcher {
            client,
            url: url.into(),
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self) -> Result<String> {
        debug!(url = %self.url, "fetching bulletin");
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// Reads a saved copy of the bulletin.
pub struct FileFetcher(pub PathBuf);

impl Fetch for FileFetcher {
    fn fetch(&self) -> Result<String> {
        debug!(path = %self.0.display(), "reading bulletin");
        Ok(std::fs::read_to_string(&self.0)?)
    }
}

/// Every Danger and Restricted Area in the document, in document order.
///
/// Notices that can't be read are logged and left out; only a document that
/// isn't well-formed is an error.
pub fn parse_restrictions(doc: &str) -> Result<Vec<Restriction>> {
    if doc.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let mut restrictions = Vec::new();
    for notice in notices_from_str(doc)? {
        match resolve(&notice) {
            Resolution::Restriction(r) => restrictions.push(r),
            Resolution::NotRestriction => (),
            Resolution::Skipped(reason) => {
                let series = notice.get(Field::Series).unwrap_or("?");
                let number = notice.get(Field::Number).unwrap_or("?");
                warn!(notam = %format!("{}{}", series, number), %reason, "skipping notice");
            }
        }
    }
    Ok(restrictions)
}

/// Fetches and parses the bulletin, degrading to an empty list on failure.
pub fn ingest<F: Fetch + ?Sized>(fetcher: &F) -> Vec<Restriction> {
    let doc = match fetcher.fetch() {
        Ok(doc) => doc,
        Err(e) => {
            error!(error = %e, "could not retrieve bulletin");
            return Vec::new();
        }
    };

    match parse_restrictions(&doc) {
        Ok(restrictions) => {
            info!(count = restrictions.len(), "parsed bulletin");
            restrictions
        }
        Err(e) => {
            warn!(error = %e, "bulletin unusable");
            Vec::new()
        }
    }
}
