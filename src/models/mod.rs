//! Process scheduling domain models.
//!
//! Provides the data types shared by every dispatch policy: the input
//! record, the runtime control block, and the resulting timeline.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated | Returned |
//! |------|---------|---------|----------|
//! | `ProcessSpec` | by caller | never | - |
//! | `ProcessControlBlock` | per simulation | by policies | in outcome |
//! | `Timeline` | per simulation | append-only | in outcome |

mod pcb;
mod process;
mod timeline;

pub use pcb::ProcessControlBlock;
pub use process::ProcessSpec;
pub use timeline::{Slice, Timeline};
