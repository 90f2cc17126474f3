//! Ontology transactions.
//!
//! Wire layout, all integers little-endian:
//!
//! ```text
//! version(1) type(1) nonce(4) gasPrice(8) gasLimit(8) payer(20)
//! payload  attributes(varint 0)  sigs(varint n, {varbytes inv, varbytes ver}*)
//! ```
//!
//! The sign content is `SHA256(SHA256(unsigned bytes))`; the transaction hash
//! is that digest in reversed hex.

pub mod builder;
mod payload;

use ont_cryptography::{hash256, PrivateKey, PublicKey};

use crate::address::Address;
use crate::error::CoreResult;
use crate::io::BinaryWriter;
use crate::script_builder::ScriptBuilder;

pub use payload::{DeployCode, InvokeCode, Payload};

/// Signature scheme byte for `SHA256withECDSA`.
const SIGNATURE_SCHEME_SHA256_ECDSA: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TransactionType {
    Deploy = 0xd0,
    Invoke = 0xd1,
}

/// One witness: the signer's public key and its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxSignature {
    pub public_key: PublicKey,
    pub signature: Vec<u8>,
}

impl TxSignature {
    fn invocation_script(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(1 + self.signature.len());
        data.push(SIGNATURE_SCHEME_SHA256_ECDSA);
        data.extend_from_slice(&self.signature);

        let mut builder = ScriptBuilder::new();
        builder.emit_push(&data);
        builder.into_bytes()
    }

    fn verification_script(&self) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.emit_check_sig(&self.public_key);
        builder.into_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u8,
    pub nonce: u32,
    pub gas_price: u64,
    pub gas_limit: u64,
    pub payer: Address,
    pub payload: Payload,
    pub sigs: Vec<TxSignature>,
}

impl Transaction {
    pub fn new(payload: Payload, gas_price: u64, gas_limit: u64, payer: Address) -> Self {
        Self {
            version: 0,
            nonce: rand::random(),
            gas_price,
            gas_limit,
            payer,
            payload,
            sigs: Vec::new(),
        }
    }

    pub fn tx_type(&self) -> TransactionType {
        self.payload.tx_type()
    }

    pub fn serialize_unsigned(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        self.write_unsigned(&mut writer);
        writer.into_bytes()
    }

    /// Full wire encoding including witnesses.
    pub fn serialize(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        self.write_unsigned(&mut writer);
        writer.write_var_int(self.sigs.len() as u64);
        for sig in &self.sigs {
            writer
                .write_var_bytes(&sig.invocation_script())
                .write_var_bytes(&sig.verification_script());
        }
        writer.into_bytes()
    }

    /// Hex of [`Transaction::serialize`], as submitted to a node.
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    pub fn sign_content(&self) -> [u8; 32] {
        hash256(&self.serialize_unsigned())
    }

    /// Transaction hash as nodes report it.
    pub fn hash(&self) -> String {
        let mut digest = self.sign_content();
        digest.reverse();
        hex::encode(digest)
    }

    /// Replaces all witnesses with a single signature by `key`.
    pub fn sign(&mut self, key: &PrivateKey) -> CoreResult<()> {
        let content = self.sign_content();
        let signature = key.sign(&content)?;
        self.sigs = vec![TxSignature {
            public_key: key.public_key()?,
            signature: signature.to_vec(),
        }];
        Ok(())
    }

    fn write_unsigned(&self, writer: &mut BinaryWriter) {
        writer
            .write_u8(self.version)
            .write_u8(self.tx_type() as u8)
            .write_u32(self.nonce)
            .write_u64(self.gas_price)
            .write_u64(self.gas_limit)
            .write_bytes(self.payer.as_bytes());
        self.payload.write(writer);
        // attributes
        writer.write_var_int(0);
    }
}
