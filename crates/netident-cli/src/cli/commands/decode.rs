//! `netident decode` - payload transforms for log triage.

use anyhow::{Context as _, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::io::Read as _;

use crate::cli::args::{DecodeArgs, DecodeMethod};

/// Characters left verbatim when URL-encoding: the unreserved set plus `/`
const URL_KEEP: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

pub fn execute(args: &DecodeArgs) -> Result<()> {
    let data = match &args.data {
        Some(data) => data.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read data from stdin")?;
            buffer.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    println!("{}", apply(args.method, &data)?);
    Ok(())
}

fn apply(method: DecodeMethod, data: &str) -> Result<String> {
    match method {
        DecodeMethod::B64 => decode_base64(data),
        DecodeMethod::B64e => Ok(B64.encode(data.as_bytes())),
        DecodeMethod::Url => Ok(percent_decode_str(data).decode_utf8_lossy().into_owned()),
        DecodeMethod::Urle => Ok(utf8_percent_encode(data, URL_KEEP).to_string()),
        DecodeMethod::Byte => decode_bytecode(data),
        DecodeMethod::Phphex => decode_php_hex(data),
    }
}

fn decode_base64(data: &str) -> Result<String> {
    let bytes = B64.decode(data).context("invalid base64 input")?;
    String::from_utf8(bytes).context("decoded base64 is not valid UTF-8")
}

/// Decode a `\xNN` byte string (e.g. `\x2f\x65\x74\x63`) into lossy UTF-8
fn decode_bytecode(data: &str) -> Result<String> {
    let cleaned = data.replace("\\x", "");
    let bytes = hex::decode(&cleaned).context("invalid bytecode format")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decode a hex blob wrapped in PHP tags and block comments
fn decode_php_hex(data: &str) -> Result<String> {
    let cleaned = data
        .replace("<?php", "")
        .replace("/*", "")
        .replace("*/", "")
        .replace(char::is_whitespace, "");
    let bytes = hex::decode(&cleaned).context("invalid PHP hex format")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_decode_and_encode_inverse() {
        assert_eq!(apply(DecodeMethod::B64e, "GET /admin").unwrap(), "R0VUIC9hZG1pbg==");
        assert_eq!(apply(DecodeMethod::B64, "R0VUIC9hZG1pbg==").unwrap(), "GET /admin");
    }

    #[test]
    fn test_base64_rejects_garbage() {
        assert!(apply(DecodeMethod::B64, "!!not base64!!").is_err());
    }

    #[test]
    fn test_url_decode_and_encode() {
        assert_eq!(
            apply(DecodeMethod::Url, "%2Fetc%2Fpasswd%20--").unwrap(),
            "/etc/passwd --"
        );
        assert_eq!(
            apply(DecodeMethod::Urle, "/etc/passwd --").unwrap(),
            "/etc/passwd%20--"
        );
    }

    #[test]
    fn test_byte_string_decode() {
        assert_eq!(
            apply(DecodeMethod::Byte, "\\x2f\\x65\\x74\\x63").unwrap(),
            "/etc"
        );
        assert!(apply(DecodeMethod::Byte, "\\x2g").is_err());
    }

    #[test]
    fn test_php_hex_decode_strips_wrappers() {
        // "hi" = 68 69
        assert_eq!(
            apply(DecodeMethod::Phphex, "<?php /* 68 69 */").unwrap(),
            "hi"
        );
        assert!(apply(DecodeMethod::Phphex, "<?php zz").is_err());
    }
}
