/// Interprets a command argument as an absolute value or a relative
/// delta.
///
/// A leading `+` or `-` makes the parsed number a delta applied to
/// `current`; otherwise it replaces `current` outright. Missing or
/// unparseable arguments leave `current` unchanged.
pub fn compute_new_value(arg: Option<&str>, current: f64) -> f64 {
    let Some(arg) = arg else {
        return current;
    };
    match arg.parse::<f64>() {
        Ok(delta) if arg.starts_with(['+', '-']) => current + delta,
        Ok(value) => value,
        Err(_) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_prefix_adds() {
        assert_eq!(compute_new_value(Some("+5"), 10.0), 15.0);
    }

    #[test]
    fn minus_prefix_subtracts() {
        assert_eq!(compute_new_value(Some("-3"), 10.0), 7.0);
    }

    #[test]
    fn bare_number_replaces() {
        assert_eq!(compute_new_value(Some("42"), 10.0), 42.0);
    }

    #[test]
    fn missing_arg_keeps_current() {
        assert_eq!(compute_new_value(None, 10.0), 10.0);
    }

    #[test]
    fn garbage_keeps_current() {
        assert_eq!(compute_new_value(Some("abc"), 10.0), 10.0);
    }

    #[test]
    fn fractional_delta() {
        assert_eq!(compute_new_value(Some("-0.5"), 1.0), 0.5);
    }
}
