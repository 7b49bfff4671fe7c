use chrono::NaiveDate;
use regex::Regex;

/// Reduce a price string like "CHF 1'850.–" to its digits and parse them
/// as whole francs. Thousands separators (straight or curly apostrophe,
/// underscore, space) and currency markers all drop out in the same pass.
/// Absent input or input without any digit yields None.
pub fn clean_chf_amount(raw: Option<&str>) -> Option<u32> {
    let digits: String = raw?.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Pull the first "CHF <amount>" occurrence out of free-form text, e.g.
/// the right half of a Flatfox summary heading.
pub fn extract_chf_amount(text: &str) -> Option<u32> {
    let re = Regex::new(r"CHF\s*([\d'’.,]+)").unwrap();
    let captures = re.captures(text)?;
    clean_chf_amount(captures.get(1).map(|m| m.as_str()))
}

/// Convert a "TT.MM.JJJJ" move-in date to its ISO-8601 form. Values that
/// do not match the shape ("Nach Vereinbarung", "sofort") pass through
/// unchanged.
pub fn parse_move_in_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%d.%m.%Y") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
