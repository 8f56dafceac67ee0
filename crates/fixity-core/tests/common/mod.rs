//! Purpose-built stores for integration tests.

use fixity_core::checksum::ChecksumDescriptor;
use fixity_core::result::FixityResult;
use fixity_core::store::{check_reader, BackingStore, StoreId, StoreReadError};
use std::io::{self, Read};

/// In-memory store holding one copy of the content.
pub struct MemoryStore {
    id: StoreId,
    bytes: Vec<u8>,
}

impl MemoryStore {
    pub fn new(id: &str, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            id: StoreId::new(id),
            bytes: bytes.into(),
        }
    }
}

impl BackingStore for MemoryStore {
    fn id(&self) -> &StoreId {
        &self.id
    }

    fn check_fixity(
        &self,
        expected: &ChecksumDescriptor,
        expected_size: u64,
    ) -> Result<FixityResult, StoreReadError> {
        check_reader(&self.id, io::Cursor::new(&self.bytes), expected, expected_size)
    }
}

/// Store whose stream yields a prefix of the content and then fails, like a
/// mirror dropping the connection mid-read.
pub struct TruncatedStore {
    id: StoreId,
    prefix: Vec<u8>,
}

impl TruncatedStore {
    pub fn new(id: &str, prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            id: StoreId::new(id),
            prefix: prefix.into(),
        }
    }
}

impl BackingStore for TruncatedStore {
    fn id(&self) -> &StoreId {
        &self.id
    }

    fn check_fixity(
        &self,
        expected: &ChecksumDescriptor,
        expected_size: u64,
    ) -> Result<FixityResult, StoreReadError> {
        let reader = FailAfterPrefix {
            data: io::Cursor::new(&self.prefix),
        };
        check_reader(&self.id, reader, expected, expected_size)
    }
}

struct FailAfterPrefix<R> {
    data: R,
}

impl<R: Read> Read for FailAfterPrefix<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "mirror connection reset",
            ));
        }
        Ok(n)
    }
}
