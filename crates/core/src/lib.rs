//! Core constants, shared primitives, and display helpers for the Grid Lift Calculator workspace.

use serde::{Deserialize, Serialize};

/// Physical constants expressed in SI units.
pub mod constants {
    /// Default surface gravity used when a configuration omits it (m/s²).
    pub const DEFAULT_GRAVITY: f64 = 9.81;
}

/// Physical scale of a thruster or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Large,
}

impl SizeClass {
    /// Both size classes in table order.
    pub const ALL: [SizeClass; 2] = [SizeClass::Small, SizeClass::Large];

    /// Lowercase identifier used in tables and serialized records.
    pub fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    /// Capitalised label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Large => "Large",
        }
    }
}

/// Number formatting shared by exports, prompts, and the CLI.
pub mod format {
    /// Format a number with two decimals and comma thousands separators (`1234.5` → `1,234.50`).
    pub fn format_number(value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }

        let fixed = format!("{:.2}", value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let grouped = group_thousands(int_part);

        if value.is_sign_negative() {
            format!("-{grouped}.{frac_part}")
        } else {
            format!("{grouped}.{frac_part}")
        }
    }

    fn group_thousands(digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}
