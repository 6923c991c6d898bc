/// A binary writer that appends wire-encoded values to an owned byte buffer.
///
/// All multi-byte integers are written little-endian. Length prefixes use
/// the varint encoding (`write_var_int`).
#[derive(Debug, Default)]
pub struct BinaryWriter {
    inner: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn write_bool(&mut self, value: bool) {
        self.inner.push(value as u8);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.inner.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) {
        self.inner.extend_from_slice(buffer);
    }

    /// Writes a variable-length integer.
    ///
    /// Values below 0xFD occupy one byte; larger values are marked with
    /// 0xFD/0xFE/0xFF followed by a little-endian u16/u32/u64.
    pub fn write_var_int(&mut self, value: u64) {
        if value < 0xFD {
            self.write_u8(value as u8);
        } else if value <= 0xFFFF {
            self.write_u8(0xFD);
            self.write_u16(value as u16);
        } else if value <= 0xFFFF_FFFF {
            self.write_u8(0xFE);
            self.write_u32(value as u32);
        } else {
            self.write_u8(0xFF);
            self.write_u64(value);
        }
    }

    /// Writes `varint(len) || bytes`.
    pub fn write_var_bytes(&mut self, buffer: &[u8]) {
        self.write_var_int(buffer.len() as u64);
        self.write_bytes(buffer);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_integers() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(0x01);
        writer.write_u16(0x0302);
        writer.write_u32(0x07060504);
        writer.write_i64(-1);

        let mut expected = vec![1, 2, 3, 4, 5, 6, 7];
        expected.extend_from_slice(&[0xFF; 8]);
        assert_eq!(writer.into_bytes(), expected);
    }

    #[test]
    fn test_var_int_tiers() {
        let cases: Vec<(u64, Vec<u8>)> = vec![
            (0x00, vec![0x00]),
            (0xFC, vec![0xFC]),
            (0xFD, vec![0xFD, 0xFD, 0x00]),
            (0xFFFF, vec![0xFD, 0xFF, 0xFF]),
            (0x10000, vec![0xFE, 0x00, 0x00, 0x01, 0x00]),
            (0xFFFF_FFFF, vec![0xFE, 0xFF, 0xFF, 0xFF, 0xFF]),
            (
                0x1_0000_0000,
                vec![0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
        ];
        for (value, expected) in cases {
            let mut writer = BinaryWriter::new();
            writer.write_var_int(value);
            assert_eq!(writer.into_bytes(), expected, "varint({value})");
        }
    }

    #[test]
    fn test_var_bytes() {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(b"abc");
        assert_eq!(writer.into_bytes(), vec![3, b'a', b'b', b'c']);

        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(&[]);
        assert_eq!(writer.into_bytes(), vec![0x00]);
    }
}
