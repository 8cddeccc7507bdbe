// ==============================================================================
// Interface UUID Decomposition
// ==============================================================================
//
// Interface IIDs are written in the canonical 8-4-4-4-12 hyphenated form. Native
// headers spell them as an `{m0, m1, m2, {b0, ..., b7}}` initializer, where the
// last eight bytes come from the fourth and fifth groups concatenated.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IdlError, Result};
use crate::model::Interface;

static UUID_DECODER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^
          (?P<m0>[0-9a-f]{8})-
          (?P<m1>[0-9a-f]{4})-
          (?P<m2>[0-9a-f]{4})-
          (?P<m3>[0-9a-f]{4})-
          (?P<m4>[0-9a-f]{12})
        $",
    )
    .expect("UUID pattern is valid")
});

/// The five hyphen-delimited groups of a canonical UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IidParts {
    pub m0: String,
    pub m1: String,
    pub m2: String,
    pub m3: String,
    pub m4: String,
}

impl IidParts {
    /// Split a UUID string. Returns `None` unless it has exactly the
    /// 8-4-4-4-12 hex shape.
    pub fn parse(uuid: &str) -> Option<Self> {
        let caps = UUID_DECODER.captures(uuid)?;
        Some(IidParts {
            m0: caps["m0"].to_string(),
            m1: caps["m1"].to_string(),
            m2: caps["m2"].to_string(),
            m3: caps["m3"].to_string(),
            m4: caps["m4"].to_string(),
        })
    }

    /// Decompose an interface's `uuid` attribute, failing with
    /// [`IdlError::MalformedUuid`] when it is not canonical.
    pub fn for_interface(iface: &Interface) -> Result<Self> {
        IidParts::parse(&iface.attributes.uuid).ok_or_else(|| IdlError::MalformedUuid {
            interface: iface.name.clone(),
            uuid: iface.attributes.uuid.clone(),
        })
    }

    /// The last eight bytes as `0x..` literals, e.g. `0xc0, 0x00, ...`.
    pub fn m3_joined(&self) -> String {
        let tail = format!("{}{}", self.m3, self.m4);
        let bytes: Vec<String> = tail
            .as_bytes()
            .chunks(2)
            .map(|pair| format!("0x{}", String::from_utf8_lossy(pair)))
            .collect();
        bytes.join(", ")
    }
}
