//! Hand-off links for Android print apps.
//!
//! RawBT and similar apps accept a URI of the form
//! `rawbt:base64,<payload>` and forward the decoded bytes to a paired
//! printer. [`IntentLink`] writes that URI to any [`Write`] sink, such as
//! stdout for a shell pipeline or a buffer for an HTTP response.

use std::io::Write;

use tracing::debug;

use super::{Delivery, to_transport_encoding};
use crate::error::DeliveryError;
use crate::protocol::stream::ByteStream;

/// URI scheme understood by the RawBT print service.
pub const DEFAULT_SCHEME: &str = "rawbt";

pub struct IntentLink<W: Write> {
    sink: W,
    scheme: String,
}

impl<W: Write> IntentLink<W> {
    pub fn new(sink: W) -> Self {
        Self::with_scheme(sink, DEFAULT_SCHEME)
    }

    pub fn with_scheme(sink: W, scheme: impl Into<String>) -> Self {
        Self {
            sink,
            scheme: scheme.into(),
        }
    }

    /// Build the link text for a stream without writing it.
    pub fn link(&self, stream: &ByteStream) -> String {
        format!("{}:base64,{}", self.scheme, to_transport_encoding(stream))
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Delivery for IntentLink<W> {
    fn deliver(&mut self, stream: &ByteStream) -> Result<(), DeliveryError> {
        if self.scheme.is_empty() {
            return Err(DeliveryError::NoHandler("empty scheme".into()));
        }
        let link = self.link(stream);
        debug!(scheme = %self.scheme, len = link.len(), "writing intent link");
        writeln!(self.sink, "{}", link).map_err(DeliveryError::Write)?;
        self.sink.flush().map_err(DeliveryError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rawbt_link() {
        let stream = ByteStream::from(vec![0x1B, 0x40, 0x0A]);
        let mut link = IntentLink::new(Vec::new());
        link.deliver(&stream).unwrap();
        assert_eq!(String::from_utf8(link.into_inner()).unwrap(), "rawbt:base64,G0AK\n");
    }

    #[test]
    fn test_custom_scheme() {
        let link = IntentLink::with_scheme(Vec::new(), "escpos");
        assert_eq!(link.link(&ByteStream::from(vec![0x0A])), "escpos:base64,Cg==");
    }

    #[test]
    fn test_empty_scheme_has_no_handler() {
        let mut link = IntentLink::with_scheme(Vec::new(), "");
        let err = link.deliver(&ByteStream::new()).unwrap_err();
        assert!(matches!(err, DeliveryError::NoHandler(_)));
    }
}
