/// Render remaining milliseconds as `mm:ss`, rounding partial seconds up so the
/// display only reads `00:00` once the round is actually over.
pub fn format_time(remaining_ms: u32) -> String {
    let total_secs = remaining_ms.div_ceil(1000);
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
