//! Raw hex password path: secure random bytes straight to hex encoding,
//! bypassing the composer entirely.

use zeroize::Zeroize;

use strongpass::rng::SecureRng;

pub fn generate(byte_len: usize, upper: bool) -> String {
    let mut buf = vec![0u8; byte_len];
    SecureRng::new().fill_bytes(&mut buf);

    let mut out = String::with_capacity(byte_len * 2);
    for b in &buf {
        if upper {
            out.push_str(&format!("{:02X}", b));
        } else {
            out.push_str(&format!("{:02x}", b));
        }
    }

    buf.zeroize();
    out
}
