// Raw-PDU command parser
//
// Recognizes the trigger syntax in an outgoing message text and, when well
// formed, decodes the two hex fields into a RawPdu. Everything here is a
// straight-line parse: prefix check, tokenize, decode, assemble. All codec
// failures are folded into the returned outcome so the interception layer
// never sees an unwound error.

use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::{CodecError, decode_hex};
use crate::datatypes::RawPdu;

/// Trigger keyword that marks an outgoing message as a raw-PDU command
pub const RAW_PDU_TRIGGER: &str = "sendSmsByRawPDU";

/// Delimiter between the trigger and the two hex fields
pub const FIELD_DELIMITER: char = '|';

/// Result of inspecting one outgoing message text.
///
/// `NotACommand` is a routing signal, not an error: it tells the caller to
/// let the original submit-PDU path run unmodified. Only `Malformed` carries
/// a failure, and even that one means "fall back to normal processing".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The text does not start with the trigger keyword
    NotACommand,
    /// The text starts with the trigger but is structurally invalid
    Malformed(ParseError),
    /// A well-formed command; substitute this PDU for the built one
    Pdu(RawPdu),
}

/// Why a trigger-prefixed message failed to parse
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 3 pipe-separated parts, got {found}")]
    MissingParts { found: usize },

    #[error("malformed hex in field '{field}': {source}")]
    MalformedHex {
        field: &'static str,
        #[source]
        source: CodecError,
    },
}

/// Parser for the raw-PDU command syntax.
///
/// The default parser is bound to [`RAW_PDU_TRIGGER`] and
/// [`FIELD_DELIMITER`]; both are configurable so the parser can be hosted
/// outside the stock interception setup. The parser holds no other state
/// and is freely shareable across threads.
#[derive(Clone, Copy, Debug)]
pub struct CommandParser {
    trigger: &'static str,
    delimiter: char,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(RAW_PDU_TRIGGER, FIELD_DELIMITER)
    }
}

impl CommandParser {
    pub const fn new(trigger: &'static str, delimiter: char) -> Self {
        CommandParser { trigger, delimiter }
    }

    /// Inspect one outgoing message text.
    ///
    /// Absent input (`None`) short-circuits to [`ParseOutcome::NotACommand`]
    /// without any tokenization or decoding, as does any text that does not
    /// start with the trigger keyword. Tokenization discards empty fields
    /// between consecutive delimiters, and any tokens beyond the third are
    /// ignored.
    pub fn parse(&self, text: Option<&str>) -> ParseOutcome {
        let Some(text) = text else {
            return ParseOutcome::NotACommand;
        };

        // Common case: ordinary SMS text. Bail before tokenizing.
        if !text.starts_with(self.trigger) {
            return ParseOutcome::NotACommand;
        }

        debug!(trigger = self.trigger, "message matches raw-PDU trigger");

        let mut tokens = text.split(self.delimiter).filter(|t| !t.is_empty());

        // Token 1 is the trigger itself; the prefix check above already
        // validated it, so only its presence matters here.
        let (Some(_), Some(sc_hex), Some(msg_hex)) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            let found = text
                .split(self.delimiter)
                .filter(|t| !t.is_empty())
                .count();
            warn!(found, "raw-PDU command does not have 3 pipe-separated parts");
            return ParseOutcome::Malformed(ParseError::MissingParts { found });
        };

        let encoded_sc_address = match decode_hex(sc_hex) {
            Ok(bytes) => bytes,
            Err(source) => return malformed("sc_address", source),
        };
        let encoded_message = match decode_hex(msg_hex) {
            Ok(bytes) => bytes,
            Err(source) => return malformed("message", source),
        };

        ParseOutcome::Pdu(RawPdu {
            encoded_sc_address,
            encoded_message,
        })
    }
}

/// Inspect one outgoing message text with the default trigger and delimiter.
///
/// This is the single entry point the interception layer calls:
///
/// ```
/// use rawsms::{ParseOutcome, parse_command};
///
/// match parse_command(Some("hello world")) {
///     ParseOutcome::NotACommand => {} // let the original path run
///     outcome => panic!("unexpected: {outcome:?}"),
/// }
/// ```
pub fn parse_command(text: Option<&str>) -> ParseOutcome {
    CommandParser::default().parse(text)
}

fn malformed(field: &'static str, source: CodecError) -> ParseOutcome {
    warn!(field, %source, "raw-PDU command field failed hex decoding");
    ParseOutcome::Malformed(ParseError::MalformedHex { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_trigger_text_is_not_a_command() {
        assert_eq!(parse_command(Some("hello world")), ParseOutcome::NotACommand);
        assert_eq!(parse_command(Some("")), ParseOutcome::NotACommand);
        // Trigger must be a prefix, not merely contained.
        assert_eq!(
            parse_command(Some("please sendSmsByRawPDU|00|AB")),
            ParseOutcome::NotACommand
        );
    }

    #[test]
    fn absent_text_is_not_a_command() {
        assert_eq!(parse_command(None), ParseOutcome::NotACommand);
    }

    #[test]
    fn trigger_is_case_sensitive() {
        assert_eq!(
            parse_command(Some("sendsmsbyrawpdu|00|AB")),
            ParseOutcome::NotACommand
        );
    }

    #[test]
    fn two_tokens_is_malformed() {
        assert_eq!(
            parse_command(Some("sendSmsByRawPDU|00")),
            ParseOutcome::Malformed(ParseError::MissingParts { found: 2 })
        );
    }

    #[test]
    fn bare_trigger_is_malformed() {
        assert_eq!(
            parse_command(Some("sendSmsByRawPDU")),
            ParseOutcome::Malformed(ParseError::MissingParts { found: 1 })
        );
    }

    #[test]
    fn empty_fields_are_discarded_not_preserved() {
        // "||" yields no empty token, so this still has 3 parts.
        let outcome = parse_command(Some("sendSmsByRawPDU||00|AB"));
        let ParseOutcome::Pdu(pdu) = outcome else {
            panic!("expected Pdu, got {outcome:?}");
        };
        assert_eq!(&pdu.encoded_sc_address[..], &[0x00]);
        assert_eq!(&pdu.encoded_message[..], &[0xAB]);

        // With a field collapsed away only 2 tokens remain.
        assert_eq!(
            parse_command(Some("sendSmsByRawPDU||AB")),
            ParseOutcome::Malformed(ParseError::MissingParts { found: 2 })
        );
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let outcome = parse_command(Some("sendSmsByRawPDU|00|AB|ZZ-not-even-hex"));
        let ParseOutcome::Pdu(pdu) = outcome else {
            panic!("expected Pdu, got {outcome:?}");
        };
        assert_eq!(&pdu.encoded_message[..], &[0xAB]);
    }

    #[test]
    fn odd_length_sc_field_is_malformed() {
        assert_eq!(
            parse_command(Some("sendSmsByRawPDU|0|AB")),
            ParseOutcome::Malformed(ParseError::MalformedHex {
                field: "sc_address",
                source: CodecError::OddLength(1),
            })
        );
    }

    #[test]
    fn invalid_digit_in_message_field_is_malformed() {
        assert_eq!(
            parse_command(Some("sendSmsByRawPDU|00|AG")),
            ParseOutcome::Malformed(ParseError::MalformedHex {
                field: "message",
                source: CodecError::InvalidChar('G'),
            })
        );
    }

    #[test]
    fn custom_trigger_and_delimiter() {
        let parser = CommandParser::new("rawPdu", ';');
        let outcome = parser.parse(Some("rawPdu;00;0102"));
        let ParseOutcome::Pdu(pdu) = outcome else {
            panic!("expected Pdu, got {outcome:?}");
        };
        assert_eq!(&pdu.encoded_sc_address[..], &[0x00]);
        assert_eq!(&pdu.encoded_message[..], &[0x01, 0x02]);

        // The stock syntax means nothing to a reconfigured parser.
        assert_eq!(
            parser.parse(Some("sendSmsByRawPDU|00|AB")),
            ParseOutcome::NotACommand
        );
    }
}
