//! Canonical CBOR encoding for actions.
//!
//! Deterministic encoding per RFC 8949 Core Deterministic Encoding:
//! integer map keys in ascending order, smallest valid integer widths,
//! definite lengths only. The same action must produce identical bytes
//! on every platform, since the log digest and admission signatures are
//! computed over these bytes.
//!
//! An admission's absent payload encodes as CBOR null and round-trips
//! exactly; it can never collide with a deposited message, which always
//! encodes as a 32-byte string.

use ciborium::value::Value;

use crate::action::Action;
use crate::error::CoreError;
use crate::types::{MessageScalar, ParticipantId};

/// Action field keys (integer keys for compact encoding).
mod keys {
    pub const KEY: u64 = 0;
    pub const VALUE: u64 = 1;
}

/// Encode an action to canonical CBOR bytes.
pub fn canonical_action_bytes(action: &Action) -> Vec<u8> {
    // Two-entry map; keys 0 and 1 are already in canonical order.
    let mut buf = Vec::with_capacity(72);
    encode_uint(&mut buf, 5, 2);

    encode_uint(&mut buf, 0, keys::KEY);
    encode_bytes(&mut buf, action.key.as_bytes());

    encode_uint(&mut buf, 0, keys::VALUE);
    match action.value {
        Some(message) => encode_bytes(&mut buf, message.as_bytes()),
        None => buf.push(0xf6),
    }

    buf
}

/// Decode an action from canonical bytes.
pub fn decode_action(bytes: &[u8]) -> Result<Action, CoreError> {
    let cursor = std::io::Cursor::new(bytes);
    let value: Value =
        ciborium::from_reader(cursor).map_err(|e| CoreError::DecodingError(e.to_string()))?;

    let map = match value {
        Value::Map(m) => m,
        _ => return Err(CoreError::MalformedAction("expected map".into())),
    };

    let get = |key: u64| -> Option<&Value> {
        map.iter()
            .find(|(k, _)| matches!(k, Value::Integer(i) if i128::from(*i) == i128::from(key)))
            .map(|(_, v)| v)
    };

    let key = match get(keys::KEY) {
        Some(Value::Bytes(b)) if b.len() == 32 => {
            let mut arr = [0u8; 32];
            arr.copy_from_slice(b);
            ParticipantId::from_bytes(arr)
        }
        _ => return Err(CoreError::MalformedAction("invalid key".into())),
    };

    let value = match get(keys::VALUE) {
        Some(Value::Bytes(b)) if b.len() == 32 => {
            let mut arr = [0u8; 32];
            arr.copy_from_slice(b);
            Some(MessageScalar::from_bytes(arr)?)
        }
        Some(Value::Null) => None,
        _ => return Err(CoreError::MalformedAction("invalid value".into())),
    };

    Ok(Action { key, value })
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}
