//! Typed arguments for contract invocations.

use num_bigint::BigInt;

use crate::address::Address;
use crate::script_builder::ScriptBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    ByteArray(Vec<u8>),
    String(String),
    Integer(BigInt),
    Boolean(bool),
    Array(Vec<Parameter>),
}

impl Parameter {
    /// An address argument, passed as its 20 raw bytes.
    pub fn address(address: &Address) -> Self {
        Self::ByteArray(address.as_bytes().to_vec())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::Integer(value.into())
    }

    pub(crate) fn emit(&self, builder: &mut ScriptBuilder) {
        match self {
            Parameter::ByteArray(bytes) => {
                builder.emit_push(bytes);
            }
            Parameter::String(value) => {
                builder.emit_push_string(value);
            }
            Parameter::Integer(value) => {
                builder.emit_push_big_int(value);
            }
            Parameter::Boolean(value) => {
                builder.emit_push_bool(*value);
            }
            Parameter::Array(items) => emit_packed(builder, items),
        }
    }
}

/// Pushes `items` last-first, then their count and `PACK`, so the callee
/// sees them in declaration order.
fn emit_packed(builder: &mut ScriptBuilder, items: &[Parameter]) {
    for item in items.iter().rev() {
        item.emit(builder);
    }
    builder.emit_push_int(items.len() as i64).emit_pack();
}

/// Code that calls `function` on `contract` with `params`.
pub fn build_invoke_code(function: &str, params: &[Parameter], contract: &Address) -> Vec<u8> {
    let mut builder = ScriptBuilder::new();
    emit_packed(&mut builder, params);
    builder
        .emit_push_string(function)
        .emit_app_call(contract.as_bytes());
    builder.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoke_code_layout() {
        let contract = Address::new([0x01; 20]);
        let code = build_invoke_code(
            "Transfer",
            &[
                Parameter::ByteArray(vec![0xaa]),
                Parameter::integer(5),
                Parameter::Boolean(true),
            ],
            &contract,
        );

        let mut expected = vec![0x51, 0x55, 0x01, 0xaa, 0x53, 0xc1, 0x08];
        expected.extend_from_slice(b"Transfer");
        expected.push(0x67);
        expected.extend_from_slice(&[0x01; 20]);
        assert_eq!(code, expected);
    }

    #[test]
    fn empty_argument_list_still_packs() {
        let code = build_invoke_code("Name", &[], &Address::new([0u8; 20]));
        assert_eq!(&code[..3], &[0x00, 0xc1, 0x04]);
    }

    #[test]
    fn nested_arrays_pack_recursively() {
        let mut builder = ScriptBuilder::new();
        Parameter::Array(vec![Parameter::string("x"), Parameter::integer(2)]).emit(&mut builder);
        assert_eq!(builder.into_bytes(), vec![0x52, 0x01, b'x', 0x52, 0xc1]);
    }
}
