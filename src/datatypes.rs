// Raw submit-PDU result type handed back to the interception layer

use bytes::Bytes;

/// A raw SMS submit PDU assembled from a parsed command.
///
/// Both fields are PDU-encoded per 3GPP TS 23.040 and are decoded together:
/// a `RawPdu` only exists once both hex fields of the command decoded
/// successfully, so it is never partially populated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPdu {
    /// Service Center address portion of the PDU
    pub encoded_sc_address: Bytes,
    /// Message portion of the PDU
    pub encoded_message: Bytes,
}

impl RawPdu {
    /// Whether the Service Center address is the single byte `0x00`, the
    /// conventional "use the device default SMSC" marker.
    ///
    /// The parser itself treats `"00"` as an ordinary hex field; this is a
    /// convenience for callers that want to log or branch on the convention.
    pub fn sc_address_is_default(&self) -> bool {
        self.encoded_sc_address.as_ref() == [0x00]
    }
}
