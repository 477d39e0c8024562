//! Dynamic ABI helpers.
//!
//! Encoding and decoding of contract calls against a JSON ABI, for
//! contracts whose interface is only known at runtime (e.g. fetched from a
//! block explorer).

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::{Function, JsonAbi},
};

use crate::error::{ClientError, Result};

/// Look up a function by name in a JSON ABI.
///
/// Overloaded functions resolve to the first declared overload.
pub fn find_function<'a>(abi: &'a JsonAbi, name: &str) -> Result<&'a Function> {
    abi.function(name)
        .and_then(|overloads| overloads.first())
        .ok_or_else(|| ClientError::Abi(format!("function `{}` not found in ABI", name)))
}

/// ABI-encode a call to `function` with the given argument values.
pub fn encode_call(function: &Function, args: &[DynSolValue]) -> Result<Vec<u8>> {
    if function.inputs.len() != args.len() {
        return Err(ClientError::Abi(format!(
            "function `{}` expects {} argument(s), got {}",
            function.name,
            function.inputs.len(),
            args.len()
        )));
    }
    Ok(function.abi_encode_input(args)?)
}

/// Decode return data against the function's declared output types.
pub fn decode_return(function: &Function, data: &[u8]) -> Result<Vec<DynSolValue>> {
    Ok(function.abi_decode_output(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        hex,
        primitives::{address, U256},
    };

    const ERC20_ABI_FRAGMENT: &str = r#"[
        {
            "type": "function",
            "name": "symbol",
            "inputs": [],
            "outputs": [{"name": "", "type": "string"}],
            "stateMutability": "view"
        },
        {
            "type": "function",
            "name": "balanceOf",
            "inputs": [{"name": "owner", "type": "address"}],
            "outputs": [{"name": "", "type": "uint256"}],
            "stateMutability": "view"
        }
    ]"#;

    fn fragment() -> JsonAbi {
        serde_json::from_str(ERC20_ABI_FRAGMENT).unwrap()
    }

    #[test]
    fn test_find_function() {
        let abi = fragment();
        assert_eq!(find_function(&abi, "symbol").unwrap().name, "symbol");
        assert!(matches!(find_function(&abi, "transfer"), Err(ClientError::Abi(_))));
    }

    #[test]
    fn test_encode_call_no_args_is_selector() {
        let abi = fragment();
        let function = find_function(&abi, "symbol").unwrap();

        let calldata = encode_call(function, &[]).unwrap();

        // keccak256("symbol()")[..4]
        assert_eq!(calldata, hex::decode("95d89b41").unwrap());
    }

    #[test]
    fn test_encode_call_with_address_arg() {
        let abi = fragment();
        let function = find_function(&abi, "balanceOf").unwrap();
        let owner = address!("2a098157953d0e0108447e27ec5d4fa971fd54cb");

        let calldata = encode_call(function, &[DynSolValue::Address(owner)]).unwrap();

        // selector + one 32-byte word
        assert_eq!(calldata.len(), 36);
        // keccak256("balanceOf(address)")[..4]
        assert_eq!(&calldata[..4], hex::decode("70a08231").unwrap().as_slice());
        assert_eq!(&calldata[16..36], owner.as_slice());
    }

    #[test]
    fn test_encode_call_arity_mismatch() {
        let abi = fragment();
        let function = find_function(&abi, "balanceOf").unwrap();

        let result = encode_call(function, &[]);

        assert!(matches!(result, Err(ClientError::Abi(_))));
    }

    #[test]
    fn test_decode_return_string() {
        let abi = fragment();
        let function = find_function(&abi, "symbol").unwrap();

        // abi-encoded string "DAI": offset, length, padded bytes
        let data = hex::decode(concat!(
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000003",
            "4441490000000000000000000000000000000000000000000000000000000000",
        ))
        .unwrap();

        let decoded = decode_return(function, &data).unwrap();

        assert_eq!(decoded.len(), 1);
        match &decoded[0] {
            DynSolValue::String(s) => assert_eq!(s, "DAI"),
            other => panic!("expected string, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_return_uint() {
        let abi = fragment();
        let function = find_function(&abi, "balanceOf").unwrap();

        let data = hex::decode(
            "00000000000000000000000000000000000000000000000000000000000003e8",
        )
        .unwrap();

        let decoded = decode_return(function, &data).unwrap();

        match &decoded[0] {
            DynSolValue::Uint(value, 256) => assert_eq!(*value, U256::from(1000u64)),
            other => panic!("expected uint256, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_return_garbage_is_abi_error() {
        let abi = fragment();
        let function = find_function(&abi, "symbol").unwrap();

        let result = decode_return(function, &[0xde, 0xad]);

        assert!(matches!(result, Err(ClientError::Abi(_))));
    }
}
