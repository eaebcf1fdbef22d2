/// Digits first, then lowercase, then uppercase letters
const CHARSET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE: u64 = 62;

/// Converts a number to base62 representation (0-9, a-z, A-Z), most significant digit first
pub fn encode_base62(mut num: u64) -> String {
    if num == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();

    while num > 0 {
        digits.push(CHARSET[(num % BASE) as usize] as char);
        num /= BASE;
    }

    digits.iter().rev().collect()
}
