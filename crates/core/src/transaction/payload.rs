use crate::io::BinaryWriter;

use super::TransactionType;

/// Deploys AVM code as a new contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployCode {
    pub code: Vec<u8>,
    pub need_storage: bool,
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

/// Runs `code` against deployed contracts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvokeCode {
    pub code: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Deploy(DeployCode),
    Invoke(InvokeCode),
}

impl Payload {
    pub fn tx_type(&self) -> TransactionType {
        match self {
            Payload::Deploy(_) => TransactionType::Deploy,
            Payload::Invoke(_) => TransactionType::Invoke,
        }
    }

    pub(super) fn write(&self, writer: &mut BinaryWriter) {
        match self {
            Payload::Deploy(deploy) => {
                writer
                    .write_var_bytes(&deploy.code)
                    .write_bool(deploy.need_storage)
                    .write_var_string(&deploy.name)
                    .write_var_string(&deploy.version)
                    .write_var_string(&deploy.author)
                    .write_var_string(&deploy.email)
                    .write_var_string(&deploy.description);
            }
            Payload::Invoke(invoke) => {
                writer.write_var_bytes(&invoke.code);
            }
        }
    }
}
