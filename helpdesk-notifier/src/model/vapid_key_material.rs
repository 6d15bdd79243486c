use crate::error::Error;
use base64::{prelude::BASE64_STANDARD, Engine};

///
/// Server public key used as `applicationServerKey` when subscribing.
/// Backend serves it in base64url form, usually without padding.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VapidKeyMaterial {
    pub public_key: String,
}

impl VapidKeyMaterial {
    pub fn new(public_key: String) -> Self {
        Self { public_key }
    }

    pub fn application_server_key(&self) -> Result<Vec<u8>, Error> {
        decode_base64url(&self.public_key)
    }
}

///
/// Decode base64url string the way the browser expects the
/// application server key: pad with `=` to a multiple of 4,
/// map the url-safe alphabet to the standard one and decode.
///
/// ### Errors
/// - [Error::InvalidKey] when length mod 4 equals 1, no base64 string has that length
/// - [Error::InvalidKeyEncoding] when characters are outside base64url alphabet
///
pub fn decode_base64url(value: &str) -> Result<Vec<u8>, Error> {
    let remainder = value.len() % 4;
    if remainder == 1 {
        return Err(Error::InvalidKey("length mod 4 equals 1"));
    }

    let padding = (4 - remainder) % 4;
    let mut standard = String::with_capacity(value.len() + padding);
    standard.extend(value.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        c => c,
    }));
    standard.extend(std::iter::repeat('=').take(padding));

    let bytes = BASE64_STANDARD.decode(standard)?;

    Ok(bytes)
}
