use crate::normalize::is_blank;

/// Cuts a message out of a normalized window.
///
/// Blank lines are dropped. Extraction stops as soon as more than `tolerance`
/// consecutive blank lines have been seen; whatever follows that run belongs
/// to something else.
pub fn extract_message(lines: &[String], tolerance: usize) -> Vec<String> {
    let mut message = Vec::new();
    let mut blank_run = 0;
    for line in lines {
        if is_blank(line) {
            blank_run += 1;
            if blank_run > tolerance {
                break;
            }
            continue;
        }
        blank_run = 0;
        message.push(line.clone());
    }
    message
}
