//! Mirror specification parsing, reachability probing and policy compilation

pub mod compiler;
pub mod error;
pub mod mock;
pub mod probe;
pub mod rule;
pub mod spec;

pub use compiler::{Compilation, DroppedMirror, MirrorPolicy, MirrorPolicyCompiler};
pub use error::MirrorError;
pub use mock::MockProbe;
pub use probe::{HttpProbe, MirrorProbe, ProbeStatus, DEFAULT_PROBE_TIMEOUT};
pub use rule::MirrorRule;
pub use spec::{normalize, parse_descriptors, MirrorDescriptor};
