/// Encodes text for a simple font using WinAnsiEncoding. Characters
/// outside the code page become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2122}' => 0x99,
        // C1 controls have no glyphs in the code page.
        '\u{80}'..='\u{9F}' => b'?',
        c if (c as u32) <= 0xFF => c as u8,
        _ => b'?',
    }
}
