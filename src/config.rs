/// Inbox relay (Formspree) endpoint that receives contact form submissions
/// and forwards them as email.
pub fn get_relay_url() -> &'static str {
    "https://formspree.io/f/xrblwnbq"
}

/// Subject line attached to every inquiry so the receiving inbox can tell
/// which site it came from.
pub fn inquiry_subject() -> &'static str {
    "New inquiry from hemzinfotech.com"
}
