//! # Printer Transport Layer
//!
//! Getting an encoded receipt out of the process.
//!
//! ## Transport Encoding
//!
//! Receipt bytes are handed to external print apps as standard Base64
//! (RFC 4648 alphabet, `=` padding, no line breaks):
//!
//! ```
//! use recibo::protocol::stream::ByteStream;
//! use recibo::transport::{from_transport_encoding, to_transport_encoding};
//!
//! let stream = ByteStream::from(vec![0x1B, 0x40]);
//! assert_eq!(to_transport_encoding(&stream), "G0A=");
//! assert_eq!(from_transport_encoding("G0A=").unwrap(), vec![0x1B, 0x40]);
//! ```
//!
//! ## Available Transports
//!
//! - [`device`]: raw writes to a device node such as `/dev/rfcomm0`
//! - [`intent`]: a `rawbt:base64,...` hand-off link for print apps

pub mod device;
pub mod intent;

pub use device::DeviceTransport;
pub use intent::IntentLink;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{DeliveryError, ReciboError};
use crate::protocol::stream::ByteStream;

/// Something that can carry a finished receipt to a printer.
pub trait Delivery {
    fn deliver(&mut self, stream: &ByteStream) -> Result<(), DeliveryError>;
}

/// Encode a byte stream as standard padded Base64.
pub fn to_transport_encoding(stream: &ByteStream) -> String {
    STANDARD.encode(stream.as_bytes())
}

/// Reverse [`to_transport_encoding`].
pub fn from_transport_encoding(payload: &str) -> Result<Vec<u8>, ReciboError> {
    Ok(STANDARD.decode(payload.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_and_line_feed_payload() {
        let stream = ByteStream::from(vec![0x1B, 0x40, 0x0A]);
        assert_eq!(to_transport_encoding(&stream), "G0AK");
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(to_transport_encoding(&ByteStream::new()), "");
        assert_eq!(from_transport_encoding("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_padding_and_alphabet() {
        let stream = ByteStream::from(vec![0xFB, 0xFF]);
        let encoded = to_transport_encoding(&stream);
        assert_eq!(encoded, "+/8=");
        assert!(!encoded.contains('\n'));
    }

    #[test]
    fn test_reverses_encoding() {
        let mut stream = ByteStream::new();
        stream.init().bold(true).text("TOTAL:").bold(false).line_feed().cut();
        let encoded = to_transport_encoding(&stream);
        assert_eq!(from_transport_encoding(&encoded).unwrap(), stream.into_bytes());
    }

    #[test]
    fn test_rejects_garbage() {
        let err = from_transport_encoding("not base64!").unwrap_err();
        assert!(matches!(err, ReciboError::TransportEncoding(_)));
    }
}
