mod io;

// Public re-exports for use in tests
pub use client::TestLabelClient;
pub use event::{comment, pr_with_labels};
pub use io::load_test_file;
