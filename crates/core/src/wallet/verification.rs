//! Verification-script construction and introspection.
//!
//! A verification script encodes a spending condition. Two shapes exist:
//! single-sig (`push pubkey; syscall CheckSig`) and `m`-of-`n` multi-sig
//! (`push m; push pubkey_1..n; push n; syscall CheckMultisig`). The key
//! order inside a multi-sig script is part of its identity: reordering
//! yields a different script hash and therefore a different account.

use crate::error::{CoreError, CoreResult};
use crate::script::{InteropService, ScriptBuilder};

use neoforge_crypto::PUBLIC_KEY_COMPRESSED_SIZE;

/// Most public keys a multi-sig account may hold.
pub const MAX_MULTI_SIG_KEYS: usize = 1024;

/// Builds the single-signature spending condition for one compressed key.
pub fn single_sig_script(public_key: &[u8]) -> CoreResult<Vec<u8>> {
    if public_key.len() != PUBLIC_KEY_COMPRESSED_SIZE {
        return Err(CoreError::Format(format!(
            "expected 33-byte compressed public key, got {} bytes",
            public_key.len()
        )));
    }
    let mut builder = ScriptBuilder::new();
    builder
        .emit_push(public_key)
        .emit_syscall(InteropService::NeoCryptoCheckSig);
    Ok(builder.into_bytes())
}

/// Builds the `m`-of-`n` spending condition over keys in the given order.
pub fn multi_sig_script(threshold: usize, public_keys: &[Vec<u8>]) -> CoreResult<Vec<u8>> {
    let n = public_keys.len();
    if threshold < 1 || threshold > n {
        return Err(CoreError::Format(format!(
            "invalid multi-sig threshold {threshold} for {n} keys"
        )));
    }
    if n > MAX_MULTI_SIG_KEYS {
        return Err(CoreError::Format(format!(
            "too many multi-sig keys: {n} > {MAX_MULTI_SIG_KEYS}"
        )));
    }
    for key in public_keys {
        if key.len() != PUBLIC_KEY_COMPRESSED_SIZE {
            return Err(CoreError::Format(format!(
                "expected 33-byte compressed public key, got {} bytes",
                key.len()
            )));
        }
    }
    let mut builder = ScriptBuilder::new();
    builder.emit_push_int(threshold as i64);
    for key in public_keys {
        builder.emit_push(key);
    }
    builder
        .emit_push_int(n as i64)
        .emit_syscall(InteropService::NeoCryptoCheckMultisig);
    Ok(builder.into_bytes())
}

/// The signing threshold a verification script demands: 1 for single-sig,
/// `m` for multi-sig.
pub fn signing_threshold(script: &[u8]) -> CoreResult<usize> {
    Ok(parse(script)?.0)
}

/// The public keys a verification script names, in script order.
pub fn public_keys(script: &[u8]) -> CoreResult<Vec<Vec<u8>>> {
    Ok(parse(script)?.1)
}

/// Extracts the signatures an invocation script pushes, in push order.
pub fn signatures_from_invocation_script(script: &[u8]) -> CoreResult<Vec<Vec<u8>>> {
    const SIGNATURE_PUSH: u8 = neoforge_crypto::SIGNATURE_SIZE as u8;
    let mut signatures = Vec::new();
    let mut pos = 0usize;
    while pos < script.len() {
        if script[pos] != SIGNATURE_PUSH {
            return Err(malformed("expected signature push"));
        }
        let start = pos + 1;
        let end = start + SIGNATURE_PUSH as usize;
        let signature = script
            .get(start..end)
            .ok_or_else(|| malformed("truncated signature"))?;
        signatures.push(signature.to_vec());
        pos = end;
    }
    Ok(signatures)
}

/// Whether the script has the multi-sig shape.
pub fn is_multi_sig(script: &[u8]) -> bool {
    !script.is_empty() && script[0] != 0x21 && parse(script).is_ok()
}

fn parse(script: &[u8]) -> CoreResult<(usize, Vec<Vec<u8>>)> {
    let mut pos = 0usize;

    let read_key = |pos: &mut usize| -> CoreResult<Vec<u8>> {
        if script.get(*pos) != Some(&(PUBLIC_KEY_COMPRESSED_SIZE as u8)) {
            return Err(malformed("expected public key push"));
        }
        let start = *pos + 1;
        let end = start + PUBLIC_KEY_COMPRESSED_SIZE;
        let key = script
            .get(start..end)
            .ok_or_else(|| malformed("truncated public key"))?;
        *pos = end;
        Ok(key.to_vec())
    };

    let expect_syscall = |pos: usize, service: InteropService| -> CoreResult<()> {
        let tail = script.get(pos..).ok_or_else(|| malformed("truncated tail"))?;
        if tail.len() != 5 || tail[0] != 0x68 || tail[1..] != service.code() {
            return Err(malformed("unexpected script tail"));
        }
        Ok(())
    };

    if script.first() == Some(&(PUBLIC_KEY_COMPRESSED_SIZE as u8)) {
        let key = read_key(&mut pos)?;
        expect_syscall(pos, InteropService::NeoCryptoCheckSig)?;
        return Ok((1, vec![key]));
    }

    let threshold = read_push_int(script, &mut pos)?;
    let mut keys = Vec::new();
    while script.get(pos) == Some(&(PUBLIC_KEY_COMPRESSED_SIZE as u8)) {
        keys.push(read_key(&mut pos)?);
    }
    let count = read_push_int(script, &mut pos)?;
    if count != keys.len() || threshold < 1 || threshold > keys.len() {
        return Err(malformed("inconsistent multi-sig key counts"));
    }
    expect_syscall(pos, InteropService::NeoCryptoCheckMultisig)?;
    Ok((threshold, keys))
}

/// Decodes one pushed non-negative integer at `pos`: a dedicated small-int
/// opcode or a short direct push of little-endian bytes.
fn read_push_int(script: &[u8], pos: &mut usize) -> CoreResult<usize> {
    let op = *script
        .get(*pos)
        .ok_or_else(|| malformed("truncated integer push"))?;
    *pos += 1;
    match op {
        0x00 => Ok(0),
        0x51..=0x60 => Ok((op - 0x50) as usize),
        1..=2 => {
            let bytes = script
                .get(*pos..*pos + op as usize)
                .ok_or_else(|| malformed("truncated integer push"))?;
            *pos += op as usize;
            let mut value = 0usize;
            for (i, b) in bytes.iter().enumerate() {
                value |= (*b as usize) << (8 * i);
            }
            Ok(value)
        }
        _ => Err(malformed("unexpected integer push opcode")),
    }
}

fn malformed(detail: &str) -> CoreError {
    CoreError::Format(format!("malformed verification script: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uint160::UInt160;

    fn keys(n: usize) -> Vec<Vec<u8>> {
        (0..n)
            .map(|i| {
                let mut key = vec![0x02; 33];
                key[32] = i as u8;
                key
            })
            .collect()
    }

    #[test]
    fn test_single_sig_shape() {
        let key = &keys(1)[0];
        let script = single_sig_script(key).unwrap();
        assert_eq!(script.len(), 1 + 33 + 5);
        assert_eq!(script[0], 0x21);
        assert_eq!(script[34], 0x68);
        assert_eq!(signing_threshold(&script).unwrap(), 1);
        assert_eq!(public_keys(&script).unwrap(), vec![key.clone()]);
        assert!(!is_multi_sig(&script));
    }

    #[test]
    fn test_multi_sig_roundtrip() {
        let keys = keys(3);
        let script = multi_sig_script(2, &keys).unwrap();
        assert_eq!(script[0], 0x52);
        assert_eq!(script[script.len() - 6], 0x53);
        assert_eq!(signing_threshold(&script).unwrap(), 2);
        assert_eq!(public_keys(&script).unwrap(), keys);
        assert!(is_multi_sig(&script));
    }

    #[test]
    fn test_large_committee_uses_byte_push() {
        let keys = keys(20);
        let script = multi_sig_script(17, &keys).unwrap();
        // 17 and 20 exceed the dedicated small-int opcodes.
        assert_eq!(&script[..2], [0x01, 17]);
        assert_eq!(signing_threshold(&script).unwrap(), 17);
        assert_eq!(public_keys(&script).unwrap().len(), 20);
    }

    #[test]
    fn test_key_order_changes_identity() {
        let keys = keys(3);
        let mut reordered = keys.clone();
        reordered.swap(0, 2);
        let a = multi_sig_script(2, &keys).unwrap();
        let b = multi_sig_script(2, &reordered).unwrap();
        assert_ne!(UInt160::from_script(&a), UInt160::from_script(&b));
    }

    #[test]
    fn test_signature_extraction() {
        let mut invocation = Vec::new();
        for fill in [0xAAu8, 0xBB] {
            invocation.push(64);
            invocation.extend_from_slice(&[fill; 64]);
        }
        let signatures = signatures_from_invocation_script(&invocation).unwrap();
        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[0], vec![0xAA; 64]);
        assert_eq!(signatures[1], vec![0xBB; 64]);

        assert!(signatures_from_invocation_script(&[64, 0x01]).is_err());
        assert!(signatures_from_invocation_script(&[0x21]).is_err());
        assert!(signatures_from_invocation_script(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let keys = keys(3);
        assert!(multi_sig_script(0, &keys).is_err());
        assert!(multi_sig_script(4, &keys).is_err());
        assert!(single_sig_script(&[0x02; 32]).is_err());
        assert!(signing_threshold(&[0x21, 0x02]).is_err());
        assert!(public_keys(b"not a script").is_err());
    }
}
