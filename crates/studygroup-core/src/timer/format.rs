/// Format milliseconds as zero-padded `HH:MM:SS`.
///
/// Sub-second remainders are truncated. Hours keep growing past 99.
pub fn format_hms(ms: u64) -> String {
    let total = ms / 1000;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
