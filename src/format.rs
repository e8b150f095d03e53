use num::BigUint;

/// Decimal digits with a comma between groups of three, e.g. `4,738`.
pub fn group_digits(value: &BigUint) -> String {
    let digits = value.to_str_radix(10);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
