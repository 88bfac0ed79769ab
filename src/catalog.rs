//! Reference catalog: static tables mapping vendor/device identifiers and
//! model strings to known hardware definitions.
//!
//! All tables are compiled in and read-only, so they are safe to share
//! across worker tasks without synchronization. Lookups return references
//! into the static tables; disambiguation of multiple GPU matches is the
//! classifier's job, not the catalog's.

pub mod cpus;
pub mod fpgas;
pub mod gpus;

pub use cpus::{find_cpu, CpuReferenceEntry, ProcessorIdRef};
pub use fpgas::{find_fpga, FpgaEntry};
pub use gpus::{find_gpu, GpuEntry};
