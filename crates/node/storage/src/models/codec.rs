//! Length-prefixed value encoding shared by the table values.
//!
//! Integers and length prefixes are big-endian `u64`, hashes and byte strings go through
//! [`reth_codecs::Compact`]. Decoding validates every length and rejects trailing bytes, so a
//! corrupted value surfaces as [`DatabaseError::Decode`] instead of a panic.

use alloy_primitives::{B256, Bytes};
use bytes::BufMut;
use reth_codecs::Compact;
use reth_db::DatabaseError;

pub(crate) fn put_u64<B: BufMut + AsMut<[u8]>>(buf: &mut B, value: u64) {
    buf.put_u64(value);
}

pub(crate) fn put_b256<B: BufMut + AsMut<[u8]>>(buf: &mut B, value: &B256) {
    let _ = value.to_compact(buf);
}

pub(crate) fn put_bytes<B: BufMut + AsMut<[u8]>>(buf: &mut B, value: &Bytes) {
    buf.put_u64(value.len() as u64);
    let _ = value.to_compact(buf);
}

pub(crate) fn put_str<B: BufMut + AsMut<[u8]>>(buf: &mut B, value: &str) {
    buf.put_u64(value.len() as u64);
    buf.put_slice(value.as_bytes());
}

/// Cursor over an encoded value.
#[derive(Debug)]
pub(crate) struct CompactReader<'a> {
    buf: &'a [u8],
}

impl<'a> CompactReader<'a> {
    pub(crate) const fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DatabaseError> {
        if self.buf.len() < len {
            return Err(DatabaseError::Decode);
        }
        let (head, rest) = self.buf.split_at(len);
        self.buf = rest;
        Ok(head)
    }

    fn read_len(&mut self) -> Result<usize, DatabaseError> {
        usize::try_from(self.read_u64()?).map_err(|_| DatabaseError::Decode)
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64, DatabaseError> {
        let bytes: [u8; 8] = self.take(8)?.try_into().map_err(|_| DatabaseError::Decode)?;
        Ok(u64::from_be_bytes(bytes))
    }

    pub(crate) fn read_b256(&mut self) -> Result<B256, DatabaseError> {
        let bytes = self.take(32)?;
        Ok(B256::from_compact(bytes, 32).0)
    }

    pub(crate) fn read_bytes(&mut self) -> Result<Bytes, DatabaseError> {
        let len = self.read_len()?;
        let bytes = self.take(len)?;
        Ok(Bytes::from_compact(bytes, len).0)
    }

    pub(crate) fn read_string(&mut self) -> Result<String, DatabaseError> {
        let len = self.read_len()?;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DatabaseError::Decode)
    }

    /// Fails if any input is left unread.
    pub(crate) fn finish(self) -> Result<(), DatabaseError> {
        if self.buf.is_empty() { Ok(()) } else { Err(DatabaseError::Decode) }
    }
}
