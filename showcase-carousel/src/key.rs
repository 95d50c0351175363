#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::SectionId;

#[cfg(feature = "std")]
pub(crate) type SectionMap<V> = HashMap<SectionId, V>;
#[cfg(not(feature = "std"))]
pub(crate) type SectionMap<V> = BTreeMap<SectionId, V>;
