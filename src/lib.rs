//! Raw SMS submit-PDU command parsing.
//!
//! An interception layer (out of scope for this crate) sits in front of the
//! phone stack's submit-PDU builder and hands every outgoing message text to
//! [`parse_command`]. Messages using the special syntax
//!
//! ```text
//! sendSmsByRawPDU|<hex-sc-address>|<hex-message>
//! ```
//!
//! carry a complete 3GPP TS 23.040 PDU in hexadecimal: the Service Center
//! address field and the message field. For those, the parser decodes both
//! fields and returns a [`RawPdu`] for the caller to substitute as the
//! builder's result. Everything else — ordinary texts, absent input, or a
//! trigger-prefixed message that fails to parse — routes back to normal
//! processing. Parsing never panics and never surfaces an unhandled error
//! across the interception boundary.
//!
//! ```
//! use rawsms::{ParseOutcome, parse_command};
//!
//! let text = "sendSmsByRawPDU|00|01000A91214365870900000CC8329BFD065DDF72363904";
//! match parse_command(Some(text)) {
//!     ParseOutcome::Pdu(pdu) => {
//!         // Substitute `pdu` for the built submit PDU.
//!         assert_eq!(&pdu.encoded_sc_address[..], &[0x00]);
//!         assert_eq!(pdu.encoded_message.len(), 23);
//!     }
//!     ParseOutcome::NotACommand | ParseOutcome::Malformed(_) => {
//!         // Let the original submit-PDU path run unmodified.
//!     }
//! }
//! ```
//!
//! The parser is purely functional and stateless: every invocation is
//! independent and safe to run concurrently without coordination.

pub mod codec;
pub mod command;
pub mod datatypes;


pub use codec::{CodecError, decode_hex, decode_hex_opt};
pub use command::{
    CommandParser, FIELD_DELIMITER, ParseError, ParseOutcome, RAW_PDU_TRIGGER, parse_command,
};
pub use datatypes::RawPdu;
