#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:3001/api/contact" // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    "https://formspree.io/f/heimdahl" // Production form endpoint
}
