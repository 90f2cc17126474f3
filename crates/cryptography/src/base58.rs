//! Base58Check encoding of versioned payloads.

use crate::{hash::checksum, Error, Result};

pub trait ToBase58Check {
    fn to_base58_check(&self, prefix: Option<u8>) -> String;
}

impl<T: AsRef<[u8]>> ToBase58Check for T {
    fn to_base58_check(&self, prefix: Option<u8>) -> String {
        let src = self.as_ref();
        let mut buf = Vec::with_capacity(1 + src.len() + 4);

        if let Some(prefix) = prefix {
            buf.push(prefix);
        }
        buf.extend_from_slice(src);

        let check = checksum(&buf);
        buf.extend_from_slice(&check);

        bs58::encode(buf).into_string()
    }
}

pub trait FromBase58Check: Sized {
    fn from_base58_check<T: AsRef<str>>(src: T, prefix: Option<u8>) -> Result<Self>;
}

impl FromBase58Check for Vec<u8> {
    fn from_base58_check<T: AsRef<str>>(src: T, prefix: Option<u8>) -> Result<Vec<u8>> {
        let decoded = bs58::decode(src.as_ref())
            .into_vec()
            .map_err(|_| Error::InvalidBase58Char)?;

        let min_size = if prefix.is_some() { 6 } else { 5 };
        if decoded.len() < min_size {
            return Err(Error::InvalidBase58Length);
        }

        let (body, check) = decoded.split_at(decoded.len() - 4);
        if checksum(body) != check {
            return Err(Error::InvalidChecksum);
        }

        match prefix {
            Some(expected) if body[0] != expected => Err(Error::InvalidPrefix {
                expected,
                actual: body[0],
            }),
            Some(_) => Ok(body[1..].to_vec()),
            None => Ok(body.to_vec()),
        }
    }
}
