pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

/// Rounds half away from zero to a fixed number of decimal places
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    let rounded = (value * factor).round() / factor;
    // Avoid reporting "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
