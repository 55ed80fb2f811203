/// Emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    /// Opens and closes a bold region.
    pub const STRONG_TEXT: &'static str = "**";
    pub const STRONG: &'static [u8] = Self::STRONG_TEXT.as_bytes();
    /// Opens and closes an italic region.
    pub const EM: u8 = b'*';
}
