//! Regression test parameters and comparisons

use rasterkit_core::PixelBuffer;

/// Regression test state
///
/// Tracks a test name, a running comparison index, and every recorded
/// failure. Comparisons never panic on their own; the test asserts on
/// [`RegParams::cleanup`] once at the end so a single run reports all
/// mismatches.
pub struct RegParams {
    /// Name of the test (e.g., "dilate")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values within a tolerance.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{msg}");
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two pixel buffers for exact equality of shape and samples.
    pub fn compare_buffers(&mut self, a: &PixelBuffer, b: &PixelBuffer) -> bool {
        self.index += 1;

        if !a.same_shape(b) {
            let msg = format!(
                "Failure in {}_reg: shape mismatch for index {}: \
                 {}x{}x{} vs {}x{}x{}",
                self.test_name,
                self.index,
                a.width(),
                a.height(),
                a.channels().count(),
                b.width(),
                b.height(),
                b.channels().count()
            );
            eprintln!("{msg}");
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        if let Some(pos) = a
            .data()
            .iter()
            .zip(b.data().iter())
            .position(|(x, y)| x != y)
        {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {}: \
                 first differing sample at flat index {}",
                self.test_name, self.index, pos
            );
            eprintln!("{msg}");
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        true
    }

    /// Finish the test, reporting the overall result.
    ///
    /// Returns `true` if every comparison passed.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg: {} comparisons", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg: {} of {} comparisons failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}
