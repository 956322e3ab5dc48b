use std::fmt;

const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats a result the way `printf("%g")` does: six significant digits,
/// trailing zeros dropped, scientific notation for very large or small values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayNumber(pub f64);

impl fmt::Display for DisplayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // rounding to the target precision can bump the exponent (9999995 -> 1e+07)
        let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, v);
        let Some((mantissa, exponent)) = sci.split_once('e') else {
            return f.write_str(&sci);
        };
        let exponent = exponent.parse::<i32>().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.abs()
            )
        } else {
            let precision = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{:.*}", precision, v);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
