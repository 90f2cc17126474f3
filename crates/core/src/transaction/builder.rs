//! Constructors for the two transaction kinds the harness sends.

use crate::address::Address;
use crate::parameter::{build_invoke_code, Parameter};

use super::{DeployCode, InvokeCode, Payload, Transaction};

/// Descriptive fields stored alongside deployed code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractMetadata {
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

/// Unsigned deploy transaction for `code`.
pub fn make_deploy_code_transaction(
    code: &[u8],
    metadata: ContractMetadata,
    need_storage: bool,
    gas_price: u64,
    gas_limit: u64,
    payer: Address,
) -> Transaction {
    let payload = Payload::Deploy(DeployCode {
        code: code.to_vec(),
        need_storage,
        name: metadata.name,
        version: metadata.version,
        author: metadata.author,
        email: metadata.email,
        description: metadata.description,
    });
    Transaction::new(payload, gas_price, gas_limit, payer)
}

/// Unsigned transaction calling `function` on `contract`.
pub fn make_invoke_transaction(
    function: &str,
    params: &[Parameter],
    contract: &Address,
    gas_price: u64,
    gas_limit: u64,
    payer: Address,
) -> Transaction {
    let code = build_invoke_code(function, params, contract);
    Transaction::new(Payload::Invoke(InvokeCode { code }), gas_price, gas_limit, payer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionType;

    #[test]
    fn deploy_payload_layout() {
        let payer = Address::new([0x03; 20]);
        let mut tx = make_deploy_code_transaction(
            &[0xaa, 0xbb],
            ContractMetadata::default(),
            true,
            0,
            20_400_000,
            payer,
        );
        tx.nonce = 0;
        assert_eq!(tx.tx_type(), TransactionType::Deploy);

        let bytes = tx.serialize_unsigned();
        let payload = &bytes[1 + 1 + 4 + 8 + 8 + 20..];
        assert_eq!(payload, &[0x02, 0xaa, 0xbb, 0x01, 0, 0, 0, 0, 0, 0x00]);
        assert_eq!(&bytes[14..22], &20_400_000u64.to_le_bytes());
    }

    #[test]
    fn invoke_payload_wraps_call_code() {
        let contract = Address::new([0x04; 20]);
        let tx = make_invoke_transaction(
            "init",
            &[],
            &contract,
            500,
            20_000,
            Address::new([0x05; 20]),
        );
        assert_eq!(tx.tx_type(), TransactionType::Invoke);
        match &tx.payload {
            Payload::Invoke(invoke) => {
                assert_eq!(invoke.code, build_invoke_code("init", &[], &contract))
            }
            other => panic!("unexpected payload {other:?}"),
        }
        assert_eq!(tx.gas_price, 500);
        assert_eq!(tx.payer, Address::new([0x05; 20]));
    }
}
