//! Display-string and rounding helpers shared by the handlers.
//!
//! Growth and percentage display strings always show two decimal places, even
//! when the numeric field next to them carries the unrounded fractional rate.
//! That asymmetry is load-bearing for existing consumers of the formatted
//! strings and must not be "fixed" here.

/// Rounds `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Maps an arithmetic operation name to its display symbol.
///
/// Falls back to the operation name itself for anything unmapped, so the
/// function is total even though only the four known operations reach it.
pub fn operator_symbol(operation: &str) -> &str {
    match operation {
        "add" => "+",
        "subtract" => "-",
        "multiply" => "×",
        "divide" => "÷",
        other => other,
    }
}

/// Renders a growth figure, e.g. `"YoY: 20.00%"` or `"MoM: 0.20"`.
pub fn growth_display(label: &str, growth: f64, as_percentage: bool) -> String {
    format!("{label}: {growth:.2}{}", if as_percentage { "%" } else { "" })
}

/// Renders a percentage figure, e.g. `"25.00%"` or `"0.25"`.
pub fn percentage_display(value: f64, as_percentage: bool) -> String {
    format!("{value:.2}{}", if as_percentage { "%" } else { "" })
}

/// Renders one proportion line, 1-indexed: `"Value 1: 10 (10.00%)"`.
pub fn proportion_item_display(index: usize, value: f64, percentage: f64) -> String {
    format!("Value {}: {value} ({percentage:.2}%)", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 is exact in binary, so the tie is real
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(0.123_449, 4), 0.1234);
        assert_eq!(round_to(100.0 / 3.0, 2), 33.33);
    }

    #[test]
    fn unknown_operation_symbol_falls_back_to_the_name() {
        assert_eq!(operator_symbol("divide"), "÷");
        assert_eq!(operator_symbol("modulo"), "modulo");
    }

    #[test]
    fn growth_display_always_shows_two_decimals() {
        assert_eq!(growth_display("YoY", 20.0, true), "YoY: 20.00%");
        assert_eq!(growth_display("YoY", 0.2, false), "YoY: 0.20");
        assert_eq!(growth_display("MoM", -3.126, true), "MoM: -3.13%");
    }

    #[test]
    fn proportion_lines_are_one_indexed() {
        assert_eq!(proportion_item_display(0, 10.0, 10.0), "Value 1: 10 (10.00%)");
        assert_eq!(proportion_item_display(3, 40.0, 40.0), "Value 4: 40 (40.00%)");
    }
}
