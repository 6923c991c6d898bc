//! Property tests for the codec round-trip laws.

use neoforge_io::{decode_hex, encode_hex, reverse_hex, BinaryWriter, MemoryReader};
use proptest::prelude::*;

proptest! {
    #[test]
    fn var_int_roundtrips(value in any::<u64>()) {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(value);
        let bytes = writer.into_bytes();

        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn var_bytes_roundtrips(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(&data);
        let bytes = writer.into_bytes();

        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_bytes(1024).unwrap(), data);
    }

    #[test]
    fn hex_roundtrips(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let text = encode_hex(&data);
        prop_assert_eq!(decode_hex(&text).unwrap(), data);
    }

    #[test]
    fn double_reversal_is_identity(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let text = encode_hex(&data);
        let reversed = reverse_hex(&text).unwrap();
        prop_assert_eq!(reverse_hex(&reversed).unwrap(), text);
    }

    #[test]
    fn truncated_streams_fail(data in proptest::collection::vec(any::<u8>(), 1..64)) {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(&data);
        let mut bytes = writer.into_bytes();
        bytes.pop();

        let mut reader = MemoryReader::new(&bytes);
        prop_assert!(reader.read_var_bytes(1024).is_err());
    }
}
