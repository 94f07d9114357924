use crate::error::TimeParseError;

/// Parse time string in HH:MM:SS format into a 24-hour `(hour, minute)`.
///
/// Seconds must be exactly `"00"`; the wire format never carries them.
pub fn parse_time(time_str: &str) -> Result<(u32, u32), TimeParseError> {
    let parts: Vec<&str> = time_str.split(':').collect();
    let two_digits = |part: &&str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if parts.len() != 3 || !parts.iter().all(two_digits) {
        return Err(TimeParseError::Shape(time_str.to_string()));
    }
    if parts[2] != "00" {
        return Err(TimeParseError::Seconds(parts[2].to_string()));
    }

    let hour = parts[0]
        .parse::<u32>()
        .ok()
        .filter(|hour| *hour <= 23)
        .ok_or_else(|| TimeParseError::Hour(parts[0].to_string()))?;
    let minute = parts[1]
        .parse::<u32>()
        .ok()
        .filter(|minute| *minute <= 59)
        .ok_or_else(|| TimeParseError::Minute(parts[1].to_string()))?;

    Ok((hour, minute))
}

/// Format a 24-hour `(hour, minute)` as zero-padded HH:MM:SS
pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}:00", hour, minute)
}
