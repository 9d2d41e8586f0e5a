//! Modified UTF-8, the encoding JNI uses for its `*UTF*` string functions.
//!
//! It differs from standard UTF-8 in two places: U+0000 is written as the
//! overlong pair `C0 80`, and characters outside the BMP are written as a
//! UTF-16 surrogate pair with each half encoded as three bytes. Neither form
//! contains a zero byte, so the result always fits in a `CString`.

use std::ffi::CString;

fn push_unit(out: &mut Vec<u8>, unit: u16) {
    out.push(0xe0 | (unit >> 12) as u8);
    out.push(0x80 | ((unit >> 6) & 0x3f) as u8);
    out.push(0x80 | (unit & 0x3f) as u8);
}

pub fn encode(value: &str) -> CString {
    let mut out = Vec::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\0' => out.extend_from_slice(&[0xc0, 0x80]),
            '\u{10000}' ..= char::MAX => {
                let mut units = [0u16; 2];
                ch.encode_utf16(&mut units).iter().for_each(|&unit| push_unit(&mut out, unit));
            }
            _ => out.extend_from_slice(ch.encode_utf8(&mut [0u8; 4]).as_bytes()),
        }
    }

    // no zero byte can be produced above
    CString::new(out).unwrap_or_default()
}
