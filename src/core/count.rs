use crate::host::CardHost;

/// `Displaying 1 video`, otherwise `Displaying {n} videos` (including zero).
pub fn count_label(n: usize) -> String {
    let plural = if n == 1 { "" } else { "s" };
    format!("Displaying {n} video{plural}")
}

/// Read the live number of cards from the host and write the label.
///
/// Never caches: the count must reflect dismissals that happened since the last call.
pub fn update_count<H: CardHost>(host: &H) -> usize {
    let n = host.card_count();
    host.set_count_text(&count_label(n));
    n
}
