fn main() {
    // Check if we're building tests
    if cfg!(feature = "test-env") {
        // Set environment variables for the test build
        println!("cargo:rustc-env=SK_TEST_KNOB=42"); // used in utils.rs
        println!("cargo:rustc-env=SK_TEST_OVERFLOW_KNOB=999999999999999999999999"); // used in utils.rs
    }
}
