use crate::constants::REQUEST_ID_LENGTH;

/// Generates the id attached to an inbound request's tracing span.
///
/// The id is composed of uppercase English letters (`A-Z`) and digits (`0-9`)
/// using the `nanoid` crate, so log lines from one page render can be grouped.
///
/// # Examples
/// ```
/// use line_status::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
