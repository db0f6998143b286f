//! # Peer Test Suite
//!
//! Cross-subsystem scenarios for private data assembly and system chaincode
//! registration.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── pvt_assembly_benchmarks.rs  # Trimming and assembly throughput
//! └── src/
//!     ├── fixtures.rs                 # Ledgers, write sets, nodes
//!     └── integration/
//!         ├── pvt_distribution.rs     # Endorser end to end
//!         └── system_chaincodes.rs    # Registry, whitelist, multichannel
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pc-tests
//!
//! # By category
//! cargo test -p pc-tests integration::pvt_distribution::
//! cargo test -p pc-tests integration::system_chaincodes::
//!
//! # Benchmarks
//! cargo bench -p pc-tests
//! ```

pub mod fixtures;
pub mod integration;
