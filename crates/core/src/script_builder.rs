//! Script builder for the Ontology AVM.
//!
//! Only the instructions an invoke payload or a signature script needs are
//! modelled here; the node compiles everything else.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use ont_cryptography::PublicKey;

/// AVM opcodes emitted by [`ScriptBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    PUSH0 = 0x00,
    PUSHBYTES75 = 0x4b,
    PUSHDATA1 = 0x4c,
    PUSHDATA2 = 0x4d,
    PUSHDATA4 = 0x4e,
    PUSHM1 = 0x4f,
    PUSH1 = 0x51,
    PUSH16 = 0x60,
    APPCALL = 0x67,
    CHECKSIG = 0xac,
    PACK = 0xc1,
}

impl OpCode {
    pub const PUSHF: OpCode = OpCode::PUSH0;
    pub const PUSHT: OpCode = OpCode::PUSH1;
}

/// Helps construct AVM scripts.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a single raw byte.
    pub fn emit(&mut self, byte: u8) -> &mut Self {
        self.script.push(byte);
        self
    }

    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.emit(op as u8)
    }

    /// Emits raw bytes without any push prefix.
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Pushes `data` using the shortest prefix for its length.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();

        if len <= OpCode::PUSHBYTES75 as usize {
            self.emit(len as u8);
        } else if len <= 0xff {
            self.emit_opcode(OpCode::PUSHDATA1).emit(len as u8);
        } else if len <= 0xffff {
            self.emit_opcode(OpCode::PUSHDATA2)
                .emit_bytes(&(len as u16).to_le_bytes());
        } else {
            self.emit_opcode(OpCode::PUSHDATA4)
                .emit_bytes(&(len as u32).to_le_bytes());
        }

        self.emit_bytes(data)
    }

    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        self.emit_push_big_int(&BigInt::from(value))
    }

    /// Pushes an integer: `PUSHM1`, `PUSH0`..`PUSH16` for small values,
    /// otherwise its minimal little-endian two's-complement bytes.
    pub fn emit_push_big_int(&mut self, value: &BigInt) -> &mut Self {
        if value.is_zero() {
            return self.emit_opcode(OpCode::PUSH0);
        }
        if value.to_i8() == Some(-1) {
            return self.emit_opcode(OpCode::PUSHM1);
        }
        if let Some(small) = value.to_u8().filter(|v| (1..=16).contains(v)) {
            return self.emit(OpCode::PUSH1 as u8 + small - 1);
        }
        self.emit_push(&value.to_signed_bytes_le())
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSHT)
        } else {
            self.emit_opcode(OpCode::PUSHF)
        }
    }

    pub fn emit_push_string(&mut self, value: &str) -> &mut Self {
        self.emit_push(value.as_bytes())
    }

    pub fn emit_pack(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PACK)
    }

    /// Static call into a deployed contract.
    pub fn emit_app_call(&mut self, contract: &[u8; 20]) -> &mut Self {
        self.emit_opcode(OpCode::APPCALL).emit_bytes(contract)
    }

    /// Single-signature verification script for `public_key`.
    pub fn emit_check_sig(&mut self, public_key: &PublicKey) -> &mut Self {
        self.emit_push(&public_key.to_compressed())
            .emit_opcode(OpCode::CHECKSIG)
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.script.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}
