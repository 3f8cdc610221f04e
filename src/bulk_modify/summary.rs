pub const FAILURE_MESSAGE: &str = "Finished with an error.";

/// Picks `singular` for a count of one, otherwise `plural` with `{count}` substituted.
pub fn format_plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        plural.replace("{count}", &count.to_string())
    }
}

/// Terminal message shown to the operator once the job stops.
///
/// `not_saved` counts coupons whose save failed but were skipped; they are
/// part of `results` and are called out after the processed count.
pub fn finished_message(success: bool, results: usize, not_saved: usize) -> String {
    if !success {
        return FAILURE_MESSAGE.to_string();
    }
    let processed = format_plural(results, "One coupon processed", "{count} coupons processed");
    if not_saved == 0 {
        format!("{}.", processed)
    } else {
        format!("{}, {} not saved.", processed, not_saved)
    }
}
