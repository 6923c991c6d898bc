use crate::{IoError, IoResult};

/// A cursor over an in-memory byte slice, mirroring [`BinaryWriter`].
///
/// Every read checks the remaining length first and fails with
/// [`IoError::EndOfStream`] instead of panicking.
///
/// [`BinaryWriter`]: crate::BinaryWriter
#[derive(Debug)]
pub struct MemoryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure(&self, needed: usize) -> IoResult<()> {
        if self.remaining() < needed {
            return Err(IoError::EndOfStream {
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure(count)?;
        let slice = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> IoResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> IoResult<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> IoResult<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64(&mut self) -> IoResult<u64> {
        let bytes = self.read_bytes(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_i64(&mut self) -> IoResult<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads a variable-length integer, failing when the decoded value
    /// exceeds `max`.
    ///
    /// Non-minimal encodings are accepted; the value, not its encoding, is
    /// what gets range-checked.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let prefix = self.read_u8()?;
        let value = match prefix {
            0xFD => self.read_u16()? as u64,
            0xFE => self.read_u32()? as u64,
            0xFF => self.read_u64()?,
            byte => byte as u64,
        };
        if value > max {
            return Err(IoError::Format(format!(
                "varint {value} exceeds maximum {max}"
            )));
        }
        Ok(value)
    }

    /// Reads `varint(len) || bytes`, failing when `len` exceeds `max`.
    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<Vec<u8>> {
        let length = self.read_var_int(max as u64)? as usize;
        Ok(self.read_bytes(length)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryWriter;

    #[test]
    fn test_reads_mirror_writes() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(7);
        writer.write_u16(0xBEEF);
        writer.write_u32(0xDEAD_BEEF);
        writer.write_i64(-42);
        writer.write_var_int(0x1234);
        writer.write_var_bytes(b"neo");
        let bytes = writer.into_bytes();

        let mut reader = MemoryReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
        assert_eq!(reader.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.read_i64().unwrap(), -42);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x1234);
        assert_eq!(reader.read_var_bytes(1024).unwrap(), b"neo");
        assert!(reader.is_empty());
    }

    #[test]
    fn test_truncated_read_fails() {
        let mut reader = MemoryReader::new(&[0x01, 0x02]);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            IoError::EndOfStream {
                needed: 4,
                available: 2
            }
        );
    }

    #[test]
    fn test_var_bytes_length_prefix_beyond_stream() {
        // Claims 5 bytes of payload but only 2 remain.
        let mut reader = MemoryReader::new(&[0x05, 0xAA, 0xBB]);
        assert!(matches!(
            reader.read_var_bytes(1024),
            Err(IoError::EndOfStream { .. })
        ));
    }

    #[test]
    fn test_var_int_over_max_rejected() {
        let mut reader = MemoryReader::new(&[0xFD, 0x10, 0x00]);
        assert!(matches!(reader.read_var_int(15), Err(IoError::Format(_))));
    }

    #[test]
    fn test_non_minimal_var_int_accepted() {
        // 1 encoded through the 3-byte form; the source never rejected this.
        let mut reader = MemoryReader::new(&[0xFD, 0x01, 0x00]);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 1);
    }
}
