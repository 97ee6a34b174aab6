//! Option names used across the viewer tests.
//!
//! These mirror the names found in real results trees so that tests exercise
//! the same characters (spaces, underscores, non-ASCII) as production data.

use crate::tree::ResultsTree;

/// Survey dates, in sorted order.
pub const DATES: &[&str] = &["dec6", "jan31"];

/// Sensor variables.
pub const VARIABLES: &[&str] = &["Chlorophyll_ug_L", "pH", "Temperature_Â°C"];

/// Stationary kernel folder names, in sorted order.
pub const KERNELS: &[&str] = &["Exponential", "Matern_3_2", "Squared_Exponential"];

/// A tree with every date / variable / kernel combination populated, an
/// `ns` kernel for each variable, and an `arti` folder at the root.
pub fn full_tree() -> ResultsTree {
    let tree = ResultsTree::new();
    for date in DATES {
        for var in VARIABLES {
            for kernel in KERNELS {
                tree.stationary_kernel(date, var, kernel);
            }
            tree.ns_kernel(date, var);
        }
    }
    tree.file("arti/exp.png", crate::tree::PNG_BYTES);
    tree
}

/// Owned copy of a fixture list, as catalog sources return it.
pub fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
