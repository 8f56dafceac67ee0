//! Single-pass streaming fixity check over any reader.

use super::{StoreId, StoreReadError};
use crate::checksum::ChecksumDescriptor;
use crate::result::FixityResult;
use std::io::Read;

const BUF_SIZE: usize = 64 * 1024;

/// Stream `reader` to the end, digesting with the algorithm named by
/// `expected` while counting bytes, then compare both axes independently.
///
/// The full stream is consumed even once the byte count has passed the
/// expected size, so the observed size in the result is exact. A read error
/// aborts with [`StoreReadError`]; no partial result is produced.
pub fn check_reader<R: Read>(
    store: &StoreId,
    mut reader: R,
    expected: &ChecksumDescriptor,
    expected_size: u64,
) -> Result<FixityResult, StoreReadError> {
    let mut hasher = expected.algorithm().hasher();
    let mut buf = [0u8; BUF_SIZE];
    let mut observed_size: u64 = 0;
    loop {
        let n = reader
            .read(&mut buf)
            .map_err(|e| StoreReadError::new(store.clone(), e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        observed_size += n as u64;
    }
    let observed = hasher.finalize();
    Ok(FixityResult::compare(
        store.clone(),
        expected,
        expected_size,
        observed.into_vec(),
        observed_size,
    ))
}
