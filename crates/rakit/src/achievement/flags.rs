use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Classification tags for an achievement. Not mutually exclusive.
    ///
    /// Bit values must match the runtime's category defines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Category: u8 {
        const CORE = 1 << 0;
        const UNOFFICIAL = 1 << 1;

        const CORE_AND_UNOFFICIAL = Self::CORE.bits() | Self::UNOFFICIAL.bits();
    }
}

bitflags! {
    /// Which play mode(s) credited an unlock.
    ///
    /// Bit values must match the runtime's unlocked defines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UnlockMode: u8 {
        const SOFTCORE = 1 << 0;
        const HARDCORE = 1 << 1;

        const BOTH = Self::SOFTCORE.bits() | Self::HARDCORE.bits();
    }
}

impl Category {
    /// Read the raw byte from a native record, ignoring unknown bits.
    pub fn from_raw(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl UnlockMode {
    /// Read the raw byte from a native record, ignoring unknown bits.
    pub fn from_raw(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }

    pub fn is_hardcore(&self) -> bool {
        self.contains(Self::HARDCORE)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

impl Serialize for UnlockMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for UnlockMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
