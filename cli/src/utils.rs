/// `1234567` → `"1,234,567"`.
pub fn format_number(number: usize) -> String {
    let digits = number.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(percentage) => format!("{:.1}%", percentage),
        None => "undefined".to_string(),
    }
}
