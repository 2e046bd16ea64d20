//! Diagnostic tool: run the raw-PDU command parser over a message text.
//!
//! ```text
//! rawsms 'sendSmsByRawPDU|00|01000A91214365870900000CC8329BFD065DDF72363904'
//! ```

use std::process::ExitCode;

use rawsms::{ParseOutcome, parse_command};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let text = std::env::args().nth(1);
    match parse_command(text.as_deref()) {
        ParseOutcome::Pdu(pdu) => {
            println!("sc_address: {}", hex(&pdu.encoded_sc_address));
            if pdu.sc_address_is_default() {
                println!("            (device default SMSC)");
            }
            println!("message:    {}", hex(&pdu.encoded_message));
            ExitCode::SUCCESS
        }
        ParseOutcome::Malformed(err) => {
            eprintln!("malformed command: {err}");
            ExitCode::FAILURE
        }
        ParseOutcome::NotACommand => {
            println!("not a raw-PDU command; message would be sent as ordinary text");
            ExitCode::SUCCESS
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}
