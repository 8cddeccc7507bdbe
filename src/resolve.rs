// ==============================================================================
// Member-Namespace Resolution
// ==============================================================================
//
// Every interface owns a namespace of member names. Resolution walks the
// members once, in declaration order, and records each named member in the
// interface's `NameMap`. Code blocks have no name and are not recorded.
//
// The map doubles as the "resolved" marker: the renderer refuses interfaces
// whose map is still `None`.

use crate::error::{IdlError, Result};
use crate::model::{Document, Interface, NameMap, Production};

impl Interface {
    /// Build the member name map. Fails on the first name declared twice.
    ///
    /// Resolving an already-resolved interface rebuilds the same map.
    pub fn resolve(&mut self) -> Result<()> {
        let mut namemap = NameMap::with_capacity(self.members.len());
        for (idx, member) in self.members.iter().enumerate() {
            let Some(name) = member.name() else {
                continue;
            };
            if namemap.insert(name.to_string(), idx).is_some() {
                return Err(IdlError::DuplicateMember {
                    interface: self.name.clone(),
                    name: name.to_string(),
                });
            }
        }
        self.namemap = Some(namemap);
        Ok(())
    }
}

impl Document {
    /// Resolve the member namespace of every interface in the document.
    pub fn resolve(&mut self) -> Result<()> {
        for production in &mut self.productions {
            if let Production::Interface(iface) = production {
                iface.resolve()?;
            }
        }
        Ok(())
    }
}
