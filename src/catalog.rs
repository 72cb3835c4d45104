//! Complexity Catalog
//!
//! Fixed set of growth-rate classes, each pairing a pure evaluator with
//! display metadata (formula, explanation, example, chart color).

use thiserror::Error;

/// Exponential evaluation is capped at this exponent to avoid overflow.
pub const EXPONENTIAL_CAP: u32 = 30;

/// Chart colors per class (RGB, dark-background palette).
const COLOR_CONSTANT: (u8, u8, u8) = (166, 227, 161); // green
const COLOR_LOGARITHMIC: (u8, u8, u8) = (137, 180, 250); // blue
const COLOR_LINEAR: (u8, u8, u8) = (148, 226, 213); // teal
const COLOR_LINEARITHMIC: (u8, u8, u8) = (249, 226, 175); // yellow
const COLOR_QUADRATIC: (u8, u8, u8) = (250, 179, 135); // peach
const COLOR_CUBIC: (u8, u8, u8) = (203, 166, 247); // mauve
const COLOR_EXPONENTIAL: (u8, u8, u8) = (243, 139, 168); // red

/// All supported growth-rate classes, ordered by growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential,
}

/// Error raised when a user-supplied class name is not in the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid selection: unknown complexity '{0}'")]
    UnknownComplexity(String),
}

impl Complexity {
    /// Catalog in growth order.
    pub const ALL: [Complexity; 7] = [
        Complexity::Constant,
        Complexity::Logarithmic,
        Complexity::Linear,
        Complexity::Linearithmic,
        Complexity::Quadratic,
        Complexity::Cubic,
        Complexity::Exponential,
    ];

    /// Evaluate the growth function at input size `n`.
    ///
    /// Exponential is computed as `2^min(n, 30)`.
    pub fn eval(&self, n: u32) -> f64 {
        let x = n as f64;
        match self {
            Complexity::Constant => 1.0,
            Complexity::Logarithmic => x.log2(),
            Complexity::Linear => x,
            Complexity::Linearithmic => x * x.log2(),
            Complexity::Quadratic => x * x,
            Complexity::Cubic => x * x * x,
            Complexity::Exponential => 2f64.powi(n.min(EXPONENTIAL_CAP) as i32),
        }
    }

    /// Display name, e.g. `"O(n log n)"`.
    pub fn name(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::Linear => "O(n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Quadratic => "O(n²)",
            Complexity::Cubic => "O(n³)",
            Complexity::Exponential => "O(2ⁿ)",
        }
    }

    /// Stable lowercase key used in config files and on the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            Complexity::Constant => "constant",
            Complexity::Logarithmic => "logarithmic",
            Complexity::Linear => "linear",
            Complexity::Linearithmic => "linearithmic",
            Complexity::Quadratic => "quadratic",
            Complexity::Cubic => "cubic",
            Complexity::Exponential => "exponential",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            Complexity::Constant => "f(n) = 1",
            Complexity::Logarithmic => "f(n) = log₂(n)",
            Complexity::Linear => "f(n) = n",
            Complexity::Linearithmic => "f(n) = n · log₂(n)",
            Complexity::Quadratic => "f(n) = n²",
            Complexity::Cubic => "f(n) = n³",
            Complexity::Exponential => "f(n) = 2ⁿ",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Complexity::Constant => {
                "The operation count does not depend on the input size at all."
            }
            Complexity::Logarithmic => {
                "Each step discards a constant fraction of the input, so doubling \
                 the input adds only one more step."
            }
            Complexity::Linear => "The work grows in direct proportion to the input size.",
            Complexity::Linearithmic => {
                "Linear work repeated a logarithmic number of times; typical of \
                 efficient divide-and-conquer algorithms."
            }
            Complexity::Quadratic => {
                "Every element is paired with every other element, so the work \
                 quadruples when the input doubles."
            }
            Complexity::Cubic => {
                "Three nested passes over the input; the work grows with the cube \
                 of the input size."
            }
            Complexity::Exponential => {
                "The work doubles with every additional input element; only tiny \
                 inputs are feasible."
            }
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            Complexity::Constant => "Array index lookup, hash table insert",
            Complexity::Logarithmic => "Binary search in a sorted array",
            Complexity::Linear => "Scanning a list for its maximum",
            Complexity::Linearithmic => "Merge sort, heap sort",
            Complexity::Quadratic => "Bubble sort, comparing all pairs",
            Complexity::Cubic => "Naive matrix multiplication",
            Complexity::Exponential => "Brute-force subset enumeration",
        }
    }

    /// Series color as RGB.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Complexity::Constant => COLOR_CONSTANT,
            Complexity::Logarithmic => COLOR_LOGARITHMIC,
            Complexity::Linear => COLOR_LINEAR,
            Complexity::Linearithmic => COLOR_LINEARITHMIC,
            Complexity::Quadratic => COLOR_QUADRATIC,
            Complexity::Cubic => COLOR_CUBIC,
            Complexity::Exponential => COLOR_EXPONENTIAL,
        }
    }

    /// Parse a display name like `"O(n log n)"`.
    pub fn from_name(name: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| CatalogError::UnknownComplexity(name.to_string()))
    }

    /// Parse a config/CLI key like `"linearithmic"`. Display names are
    /// accepted too, so `breakdown "O(n²)"` works on the command line.
    pub fn from_key(key: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == key)
            .map(Ok)
            .unwrap_or_else(|| Self::from_name(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases_at_one() {
        assert_eq!(Complexity::Constant.eval(1), 1.0);
        assert_eq!(Complexity::Logarithmic.eval(1), 0.0);
        assert_eq!(Complexity::Linear.eval(1), 1.0);
        assert_eq!(Complexity::Linearithmic.eval(1), 0.0);
        assert_eq!(Complexity::Quadratic.eval(1), 1.0);
        assert_eq!(Complexity::Cubic.eval(1), 1.0);
        assert_eq!(Complexity::Exponential.eval(1), 2.0);
    }

    #[test]
    fn test_exponential_cap() {
        assert_eq!(Complexity::Exponential.eval(30), (1u64 << 30) as f64);
        assert_eq!(
            Complexity::Exponential.eval(31),
            Complexity::Exponential.eval(30)
        );
        assert_eq!(
            Complexity::Exponential.eval(100),
            Complexity::Exponential.eval(30)
        );
    }

    #[test]
    fn test_parse_key_and_name() {
        assert_eq!(
            Complexity::from_key("linearithmic").unwrap(),
            Complexity::Linearithmic
        );
        assert_eq!(Complexity::from_key("O(n²)").unwrap(), Complexity::Quadratic);
        assert_eq!(Complexity::from_name("O(1)").unwrap(), Complexity::Constant);
        assert!(Complexity::from_name("O(n!)").is_err());
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in Complexity::ALL.iter().enumerate() {
            for b in &Complexity::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
