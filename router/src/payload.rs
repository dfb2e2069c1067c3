multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const ADDRESS_LENGTH: usize = 32;
pub const VALUE_LENGTH: usize = 32;

/// Call carried at the tail of an instruction payload.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct SubCall<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

/// Reads one instruction payload front to back:
/// `[address if code 0][value if HAS_VALUE][top-encoded SubCall, or nothing]`.
/// Every read returns `None` once the payload runs short.
pub struct PayloadReader<'a, M: ManagedTypeApi> {
    payload: &'a ManagedBuffer<M>,
    cursor: usize,
}

impl<'a, M: ManagedTypeApi> PayloadReader<'a, M> {
    pub fn new(payload: &'a ManagedBuffer<M>) -> Self {
        PayloadReader { payload, cursor: 0 }
    }

    pub fn read_address(&mut self) -> Option<ManagedAddress<M>> {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        self.read_exact(&mut bytes)?;
        Some(ManagedAddress::new_from_bytes(&bytes))
    }

    pub fn read_value(&mut self) -> Option<BigUint<M>> {
        let mut bytes = [0u8; VALUE_LENGTH];
        self.read_exact(&mut bytes)?;
        Some(BigUint::from_bytes_be(&bytes))
    }

    /// Consumes the rest of the payload. `Ok(None)` means a plain transfer.
    pub fn read_call(&mut self) -> Result<Option<SubCall<M>>, DecodeError> {
        let remaining = self.remaining();
        if remaining == 0 {
            return Ok(None);
        }
        let tail = self
            .payload
            .copy_slice(self.cursor, remaining)
            .ok_or(DecodeError::INPUT_TOO_SHORT)?;
        self.cursor += remaining;
        SubCall::top_decode(tail).map(Some)
    }

    pub fn remaining(&self) -> usize {
        self.payload.len().saturating_sub(self.cursor)
    }

    fn read_exact(&mut self, dest: &mut [u8]) -> Option<()> {
        if self.remaining() < dest.len() {
            return None;
        }
        self.payload.load_slice(self.cursor, dest).ok()?;
        self.cursor += dest.len();
        Some(())
    }
}
