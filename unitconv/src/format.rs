//! Display formatting for conversion results

use unitconv_core::Category;

/// Fixed-point rendering of a result, e.g. `1609.3400`
pub fn format_value(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    // avoid "-0.0000"
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Result text offered for copying, e.g. `"0.6214 Miles"`
pub fn format_result(result: f64, unit: &str, precision: usize) -> String {
    format!("{} {}", format_value(result, precision), unit)
}

/// History line, e.g. `"1 Kilometers → 0.6214 Miles (Length)"`
///
/// The input value is shown as entered; only the result is fixed-point.
pub fn format_record(
    category: Category,
    value: f64,
    from: &str,
    result: f64,
    to: &str,
    precision: usize,
) -> String {
    format!("{} {} → {} ({})", value, from, format_result(result, to, precision), category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1000.0, 4), "1000.0000");
        assert_eq!(format_value(0.621371, 4), "0.6214");
        assert_eq!(format_value(2.0 / 3.0, 2), "0.67");
        assert_eq!(format_value(-40.0, 1), "-40.0");
    }

    #[test]
    fn test_format_value_negative_zero() {
        assert_eq!(format_value(-0.00001, 4), "0.0000");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(32.0, "Fahrenheit", 4), "32.0000 Fahrenheit");
    }

    #[test]
    fn test_format_record() {
        let text = format_record(Category::Length, 1.0, "Kilometers", 1000.0, "Meters", 4);
        assert_eq!(text, "1 Kilometers → 1000.0000 Meters (Length)");

        let text = format_record(Category::Temperature, 36.6, "Celsius", 97.88, "Fahrenheit", 2);
        assert_eq!(text, "36.6 Celsius → 97.88 Fahrenheit (Temperature)");
    }

    #[test]
    fn test_format_record_whole_input_has_no_fraction() {
        // shortest round-trip form: 1.0 prints as "1", 2.5 as "2.5"
        let text = format_record(Category::Weight, 2.0, "Pounds", 0.907184, "Kilograms", 4);
        assert_eq!(text, "2 Pounds → 0.9072 Kilograms (Weight)");
    }
}
